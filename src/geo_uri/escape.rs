use thiserror::Error;
use url::form_urlencoded;

/// Escapes `s` for a parameter or query component.
///
/// Follows the `application/x-www-form-urlencoded` table (space becomes `+`) except that `~` is
/// kept as an unreserved character and `*` is escaped, the way most geo URI producers write them.
pub fn escape(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes())
        .collect::<String>()
        .replace("%7E", "~")
        .replace('*', "%2A")
}

/// Reverses [`escape`]. Unlike the lenient form decoder, a `%` that is not followed by two hex digits is an error.
pub fn unescape(s: &str) -> Result<String, EscapeError> {
    let bytes = s.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            b'%' => {
                let byte = bytes
                    .get(i + 1..i + 3)
                    .and_then(|hex| Some((hex_value(hex[0])? << 4) | hex_value(hex[1])?))
                    .ok_or_else(|| {
                        let end = (i + 3).min(bytes.len());
                        EscapeError::InvalidEscape(String::from_utf8_lossy(&bytes[i..end]).into_owned())
                    })?;
                decoded.push(byte);
                i += 3;
            }
            b => {
                decoded.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8(decoded).map_err(|_| EscapeError::InvalidUtf8)
}

fn hex_value(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}

#[derive(Error, Debug, PartialEq)]
pub enum EscapeError {
    #[error("invalid escape sequence '{0}'")]
    InvalidEscape(String),
    #[error("escaped text is not valid UTF-8")]
    InvalidUtf8,
}
