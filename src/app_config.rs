use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    http: Http,
    photon: Photon,
    aviowiki: Aviowiki,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("MAZE").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn http(&self) -> &Http {
        &self.http
    }

    pub fn photon(&self) -> &Photon {
        &self.photon
    }

    pub fn aviowiki(&self) -> &Aviowiki {
        &self.aviowiki
    }
}

#[derive(Debug, Deserialize)]
pub struct Http {
    #[serde(with = "humantime_serde")]
    timeout: Duration,
    user_agent: String,
}

impl Http {
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[derive(Debug, Deserialize)]
pub struct Photon {
    url: String,
    #[serde(default)]
    language: String,
}

impl Photon {
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Default language for results, empty to let the service decide.
    pub fn language(&self) -> &str {
        &self.language
    }
}

#[derive(Debug, Deserialize)]
pub struct Aviowiki {
    url: String,
}

impl Aviowiki {
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                http: Http {
                    timeout: Duration::from_secs(5),
                    user_agent: "maze-test".to_string(),
                },
                photon: Photon {
                    url: "https://photon.url".to_string(),
                    language: String::new(),
                },
                aviowiki: Aviowiki {
                    url: "https://aviowiki.url".to_string(),
                },
            },
        }
    }

    pub fn photon_url(mut self, url: String) -> Self {
        self.config.photon.url = url;
        self
    }

    pub fn photon_language(mut self, language: &str) -> Self {
        self.config.photon.language = language.to_string();
        self
    }

    pub fn aviowiki_url(mut self, url: String) -> Self {
        self.config.aviowiki.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_a_toml_configuration() -> Result<(), ConfigError> {
        let toml = r#"
            [http]
            timeout = "1m 30s"
            user_agent = "maze/1.0"

            [photon]
            url = "https://photon.komoot.io"
            language = "en"

            [aviowiki]
            url = "https://api.aviowiki.com/free"
        "#;

        let config: AppConfig = Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        assert_eq!(config.http().timeout(), Duration::from_secs(90));
        assert_eq!(config.http().user_agent(), "maze/1.0");
        assert_eq!(config.photon().url(), "https://photon.komoot.io");
        assert_eq!(config.photon().language(), "en");
        assert_eq!(config.aviowiki().url(), "https://api.aviowiki.com/free");
        Ok(())
    }

    #[test]
    fn photon_language_is_optional() -> Result<(), ConfigError> {
        let toml = r#"
            [http]
            timeout = "10s"
            user_agent = "maze"

            [photon]
            url = "https://photon.komoot.io"

            [aviowiki]
            url = "https://api.aviowiki.com/free"
        "#;

        let config: AppConfig = Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        assert_eq!(config.photon().language(), "");
        Ok(())
    }

    #[test]
    fn fails_for_an_invalid_duration() {
        let toml = r#"
            [http]
            timeout = "soon"
            user_agent = "maze"

            [photon]
            url = "https://photon.komoot.io"

            [aviowiki]
            url = "https://api.aviowiki.com/free"
        "#;

        let result = Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()
            .and_then(|config| config.try_deserialize::<AppConfig>());

        assert!(result.is_err());
    }
}
