//! Building the request URL for the current-weather endpoint.

use std::fmt;

use url::Url;

use crate::config::Credential;
use crate::model::Units;

/// Current weather by city name.
/// https://openweathermap.org/current#name
pub const BASE_WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// A fully formed request URL, credential included.
///
/// `Debug` and `Display` mask the `appid` value; use [`QueryUrl::as_str`]
/// only when handing the URL to the HTTP client.
#[derive(Clone, PartialEq, Eq)]
pub struct QueryUrl(Url);

impl QueryUrl {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    fn redacted(&self) -> String {
        let mut masked = self.0.clone();
        let pairs: Vec<(String, String)> = self
            .0
            .query_pairs()
            .map(|(k, v)| {
                let v = if k == "appid" { "***".into() } else { v.into_owned() };
                (k.into_owned(), v)
            })
            .collect();
        masked.query_pairs_mut().clear().extend_pairs(pairs);
        masked.into()
    }
}

impl fmt::Display for QueryUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

impl fmt::Debug for QueryUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QueryUrl({})", self.redacted())
    }
}

/// Append `q`, `units` and `appid` to `endpoint`.
///
/// City words are joined with single spaces and form-encoded, so spaces
/// become `+` and non-ASCII or reserved characters are percent-encoded.
pub fn build_query(
    endpoint: &Url,
    city_words: &[String],
    units: Units,
    credential: &Credential,
) -> QueryUrl {
    let city_name = city_words.join(" ");

    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("q", &city_name)
        .append_pair("units", units.as_query())
        .append_pair("appid", credential.as_str());

    QueryUrl(url)
}
