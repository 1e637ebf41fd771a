use std::path::PathBuf;

use thiserror::Error;

/// Every way a weather lookup can fail.
///
/// The `Display` text of each variant is the single line shown to the user.
/// Underlying causes are logged at debug level where they occur and are not
/// carried here, so nothing internal leaks into the message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WeatherError {
    /// Credential file missing, unreadable, malformed or incomplete.
    #[error("Couldn't load the API key from {}: {reason}", .path.display())]
    Configuration { path: PathBuf, reason: String },

    /// HTTP 401 from the weather service.
    #[error("Access denied. Check your API key.")]
    Authentication,

    /// HTTP 404 from the weather service.
    #[error("Can't find weather data for the provided city name.")]
    NotFound,

    /// Any other non-success HTTP status.
    #[error("Something went wrong ... ({status})")]
    Upstream { status: u16 },

    /// Body was not JSON or did not carry the expected fields.
    #[error("Couldn't read the server response.")]
    ResponseFormat,

    /// The request never produced a status (DNS, connect, timeout).
    #[error("Couldn't reach the weather service.")]
    Transport,
}

impl WeatherError {
    pub(crate) fn configuration(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Configuration { path: path.into(), reason: reason.into() }
    }
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;
