use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fmt, fs,
    path::{Path, PathBuf},
    time::Duration,
};
use url::Url;

use crate::error::{Result, WeatherError};
use crate::query::BASE_WEATHER_API_URL;

/// Environment variable that overrides the secrets file location.
pub const SECRETS_FILE_ENV: &str = "WEATHER_SECRETS_FILE";

/// The OpenWeather API key.
///
/// `Debug` is redacted so the key cannot end up in logs by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Example TOML:
/// [openweather]
/// api_key = "..."
#[derive(Debug, Default, Deserialize)]
struct SecretsFile {
    openweather: Option<OpenWeatherSection>,
}

#[derive(Debug, Default, Deserialize)]
struct OpenWeatherSection {
    api_key: Option<String>,
    /// Alternative endpoint, e.g. a local mock of the service.
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

/// Everything read from the secrets file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub credential: Credential,
    pub endpoint: Url,
    /// `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl Settings {
    /// Load and validate the secrets file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|err| {
            tracing::debug!(path = %path.display(), error = %err, "failed to read secrets file");
            let reason = if err.kind() == std::io::ErrorKind::NotFound {
                "file not found".to_string()
            } else {
                format!("file could not be read ({})", err.kind())
            };
            WeatherError::configuration(path, reason)
        })?;

        Self::from_toml_str(&contents, path)
    }

    /// Parse secrets from TOML text; `origin` is only used for messages.
    pub fn from_toml_str(contents: &str, origin: &Path) -> Result<Self> {
        let file: SecretsFile = toml::from_str(contents).map_err(|err| {
            tracing::debug!(path = %origin.display(), error = %err, "malformed secrets file");
            WeatherError::configuration(origin, "file is not valid TOML")
        })?;

        let section = file
            .openweather
            .ok_or_else(|| WeatherError::configuration(origin, "missing [openweather] section"))?;

        let api_key = section
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                WeatherError::configuration(origin, "missing `api_key` in [openweather] section")
            })?;

        let raw_endpoint = section.base_url.as_deref().unwrap_or(BASE_WEATHER_API_URL);
        let endpoint = Url::parse(raw_endpoint).map_err(|err| {
            WeatherError::configuration(origin, format!("invalid `base_url` ({err})"))
        })?;

        let timeout = match section.timeout_secs {
            Some(0) => {
                return Err(WeatherError::configuration(
                    origin,
                    "`timeout_secs` must be greater than zero",
                ));
            }
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        Ok(Self { credential: Credential::new(api_key), endpoint, timeout })
    }
}

/// Read only the API key from the secrets file at `path`.
pub fn load_api_key(path: &Path) -> Result<Credential> {
    Settings::load(path).map(|settings| settings.credential)
}

/// Path to the secrets file: `$WEATHER_SECRETS_FILE`, or `secrets.toml` in
/// the platform config directory.
pub fn secrets_file_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(SECRETS_FILE_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli").ok_or_else(|| {
        WeatherError::configuration("secrets.toml", "could not determine platform config directory")
    })?;

    Ok(dirs.config_dir().join("secrets.toml"))
}
