use crate::{
    config::Settings,
    display::{Palette, render},
    error::Result,
    model::{WeatherRequest, WeatherResponse},
    provider::WeatherFetcher,
    query::build_query,
};

/// Build the query for `request` and fetch it.
pub async fn current_weather(
    fetcher: &dyn WeatherFetcher,
    settings: &Settings,
    request: &WeatherRequest,
) -> Result<WeatherResponse> {
    tracing::debug!(city = %request.city_name(), units = %request.units, "looking up current weather");

    let url = build_query(&settings.endpoint, &request.city_words, request.units, &settings.credential);
    fetcher.fetch_weather(&url).await
}

/// Fetch and render the output line. Nothing is rendered unless the whole
/// lookup succeeded.
pub async fn current_weather_line(
    fetcher: &dyn WeatherFetcher,
    settings: &Settings,
    request: &WeatherRequest,
    palette: Palette,
) -> Result<String> {
    let weather = current_weather(fetcher, settings, request).await?;
    render(&weather, request.units, palette)
}
