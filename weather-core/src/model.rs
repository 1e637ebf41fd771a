use serde::{Deserialize, Serialize};

/// Unit system used both for the upstream query and the printed suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn from_imperial_flag(imperial: bool) -> Self {
        if imperial { Units::Imperial } else { Units::Metric }
    }

    /// Value of the `units` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    /// Letter printed after the degree sign.
    pub fn suffix(&self) -> char {
        match self {
            Units::Metric => 'C',
            Units::Imperial => 'F',
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query())
    }
}

/// What the user asked for on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    pub city_words: Vec<String>,
    pub units: Units,
}

impl WeatherRequest {
    pub fn new(city_words: Vec<String>, units: Units) -> Self {
        Self { city_words, units }
    }

    /// City words joined with single spaces.
    pub fn city_name(&self) -> String {
        self.city_words.join(" ")
    }
}

/// One entry of the `weather` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub id: i64,
    pub description: String,
}

/// The `main` measurements block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainMeasurements {
    pub temp: f64,
}

/// Decoded current-weather payload, as returned by the service.
///
/// Only the fields the display needs are modelled; anything else in the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub name: String,
    pub weather: Vec<WeatherCondition>,
    pub main: MainMeasurements,
}

impl WeatherResponse {
    /// First condition entry; the service lists the primary one first.
    pub fn primary_condition(&self) -> Option<&WeatherCondition> {
        self.weather.first()
    }
}
