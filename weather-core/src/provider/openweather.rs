use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::{
    error::{Result, WeatherError},
    model::WeatherResponse,
    provider::{check_status, decode_body},
    query::QueryUrl,
};

use super::WeatherFetcher;

/// Fetches current conditions from OpenWeather over HTTP.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
}

impl OpenWeatherClient {
    /// `timeout` of `None` leaves reqwest's default in place.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(|err| {
            tracing::debug!(error = %err, "failed to build HTTP client");
            WeatherError::Transport
        })?;

        Ok(Self { http })
    }
}

#[async_trait]
impl WeatherFetcher for OpenWeatherClient {
    async fn fetch_weather(&self, url: &QueryUrl) -> Result<WeatherResponse> {
        tracing::debug!(%url, "requesting current weather");

        let res = self.http.get(url.as_str()).send().await.map_err(|err| {
            tracing::debug!(error = %err.without_url(), "request to OpenWeather failed");
            WeatherError::Transport
        })?;

        let status = res.status();
        tracing::debug!(status = status.as_u16(), "OpenWeather responded");
        check_status(status)?;

        let body = res.text().await.map_err(|err| {
            tracing::debug!(error = %err.without_url(), "failed to read OpenWeather response body");
            WeatherError::ResponseFormat
        })?;

        decode_body(&body)
    }
}
