use crate::geo_uri::Values;
use crate::geo_uri::escape::{EscapeError, escape, unescape};
use thiserror::Error;

/// Parses the `;`-separated parameters that follow the coordinates.
///
/// `text` is everything between the first `;` and the query, without the leading `;`.
/// Empty entries are skipped. An entry without `=` is recorded as a flag: its key is
/// present with no values, dropping any values seen before. A value may not contain an
/// unescaped `=`.
pub fn parse_parameters(text: &str) -> Result<Values, ParameterError> {
    let mut parameters = Values::new();

    for entry in text.split(';').filter(|entry| !entry.is_empty()) {
        let (raw_key, raw_value) = match entry.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (entry, None),
        };

        if raw_value.is_some_and(|value| value.contains('=')) {
            return Err(ParameterError::InvalidValue(entry.to_string()));
        }

        let key = unescape(raw_key)?;
        match raw_value {
            Some(value) => parameters.append(key, unescape(value)?),
            None => parameters.insert_flag(key),
        }
    }

    Ok(parameters)
}

/// Encodes parameters ordered by key, one `key=value` entry per value and a bare key for flags.
pub fn encode_parameters(parameters: &Values) -> String {
    let mut entries = Vec::new();

    for (key, values) in parameters.sorted() {
        let key = escape(key);
        if values.is_empty() {
            entries.push(key);
            continue;
        }

        for value in values {
            entries.push(format!("{}={}", key, escape(value)));
        }
    }

    entries.join(";")
}

#[derive(Error, Debug, PartialEq)]
pub enum ParameterError {
    #[error("invalid equal separator in parameter '{0}'")]
    InvalidValue(String),
    #[error("invalid percent encoding: {0}")]
    InvalidPercentEncoding(#[from] EscapeError),
}
