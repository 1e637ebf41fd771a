use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;

use crate::{
    config::Settings,
    error::{Result, WeatherError},
    model::WeatherResponse,
    provider::openweather::OpenWeatherClient,
    query::QueryUrl,
};

pub mod openweather;

/// Something that can turn a query URL into a decoded weather payload.
#[async_trait]
pub trait WeatherFetcher: Send + Sync + Debug {
    async fn fetch_weather(&self, url: &QueryUrl) -> Result<WeatherResponse>;
}

/// Construct the HTTP fetcher from loaded settings.
pub fn fetcher_from_settings(settings: &Settings) -> Result<Box<dyn WeatherFetcher>> {
    let client = OpenWeatherClient::new(settings.timeout)?;
    Ok(Box::new(client))
}

/// Map an HTTP status onto the error taxonomy. Success statuses pass.
pub fn check_status(status: StatusCode) -> Result<()> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::UNAUTHORIZED => Err(WeatherError::Authentication),
        StatusCode::NOT_FOUND => Err(WeatherError::NotFound),
        other => Err(WeatherError::Upstream { status: other.as_u16() }),
    }
}

/// Decode a body into a [`WeatherResponse`] with at least one condition.
pub fn decode_body(body: &str) -> Result<WeatherResponse> {
    let parsed: WeatherResponse = serde_json::from_str(body).map_err(|err| {
        tracing::debug!(error = %err, "weather payload did not decode");
        WeatherError::ResponseFormat
    })?;

    if parsed.weather.is_empty() {
        tracing::debug!("weather payload has an empty `weather` array");
        return Err(WeatherError::ResponseFormat);
    }

    Ok(parsed)
}
