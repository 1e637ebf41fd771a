//! Turning a weather payload into one styled terminal line.
//!
//! Condition codes follow OpenWeather's groups:
//! https://openweathermap.org/weather-conditions#Weather-Condition-Codes-2

use colored::{ColoredString, Colorize};
use std::ops::Range;

use crate::{
    error::{Result, WeatherError},
    model::{Units, WeatherResponse},
};

/// Width the city and description are centered in.
pub const FIELD_WIDTH: usize = 20;

/// Terminal color for a condition group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Red,
    Cyan,
    Blue,
    White,
    Yellow,
    /// No color at all.
    Neutral,
}

impl Tint {
    fn paint(self, text: &str) -> ColoredString {
        match self {
            Tint::Red => text.red().bold(),
            Tint::Cyan => text.cyan().bold(),
            Tint::Blue => text.blue().bold(),
            Tint::White => text.white(),
            Tint::Yellow => text.yellow(),
            Tint::Neutral => text.normal(),
        }
    }
}

/// Glyph and tint chosen for a condition code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayParams {
    pub glyph: &'static str,
    pub tint: Tint,
}

impl DisplayParams {
    const fn new(glyph: &'static str, tint: Tint) -> Self {
        Self { glyph, tint }
    }
}

pub const THUNDERSTORM: DisplayParams = DisplayParams::new("💥", Tint::Red);
pub const DRIZZLE: DisplayParams = DisplayParams::new("💧", Tint::Cyan);
pub const RAIN: DisplayParams = DisplayParams::new("💦", Tint::Blue);
pub const SNOW: DisplayParams = DisplayParams::new("⛄️", Tint::White);
pub const ATMOSPHERE: DisplayParams = DisplayParams::new("🌀", Tint::Blue);
pub const CLEAR: DisplayParams = DisplayParams::new("🔆", Tint::Yellow);
pub const CLOUDY: DisplayParams = DisplayParams::new("💨", Tint::White);
/// Codes outside every known group, e.g. ones the service adds later.
pub const UNKNOWN: DisplayParams = DisplayParams::new("🌈", Tint::Neutral);

/// Checked top to bottom; first range containing the code wins.
const CONDITION_GROUPS: [(Range<i64>, DisplayParams); 7] = [
    (200..300, THUNDERSTORM),
    (300..400, DRIZZLE),
    (500..600, RAIN),
    (600..700, SNOW),
    (700..800, ATMOSPHERE),
    (800..801, CLEAR),
    (801..900, CLOUDY),
];

pub fn classify(condition_code: i64) -> DisplayParams {
    CONDITION_GROUPS
        .iter()
        .find(|(range, _)| range.contains(&condition_code))
        .map_or(UNKNOWN, |(_, params)| *params)
}

/// Whether escape sequences are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    #[default]
    Ansi,
    Plain,
}

/// Render the single output line, without the trailing newline.
///
/// Field order: reversed city, then in the condition's tint a tab, the
/// glyph, a tab and the description followed by a space, then the
/// temperature with its unit. Only the first condition entry is shown.
pub fn render(weather: &WeatherResponse, units: Units, palette: Palette) -> Result<String> {
    let condition = weather.primary_condition().ok_or(WeatherError::ResponseFormat)?;
    let params = classify(condition.id);

    let city = format!("{:^width$}", weather.name, width = FIELD_WIDTH);
    let summary = format!(
        "\t{}\t{:^width$} ",
        params.glyph,
        capitalize(&condition.description),
        width = FIELD_WIDTH
    );
    let temperature = format!("({}°{})", weather.main.temp, units.suffix());

    let line = match palette {
        Palette::Plain => format!("{city}{summary}{temperature}"),
        Palette::Ansi => {
            format!("{}{}{temperature}", city.as_str().reversed(), params.tint.paint(&summary))
        }
    };

    Ok(line)
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MainMeasurements, WeatherCondition};

    fn response(name: &str, id: i64, description: &str, temp: f64) -> WeatherResponse {
        WeatherResponse {
            name: name.to_string(),
            weather: vec![WeatherCondition { id, description: description.to_string() }],
            main: MainMeasurements { temp },
        }
    }

    fn centered(text: &str, left: usize, right: usize) -> String {
        format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
    }

    #[test]
    fn every_code_in_a_group_classifies_to_it() {
        let groups = [
            (200..300, THUNDERSTORM),
            (300..400, DRIZZLE),
            (500..600, RAIN),
            (600..700, SNOW),
            (700..800, ATMOSPHERE),
            (800..801, CLEAR),
            (801..900, CLOUDY),
        ];

        for (range, expected) in groups {
            for code in range {
                assert_eq!(classify(code), expected, "code {code}");
            }
        }
    }

    #[test]
    fn codes_outside_groups_fall_back() {
        for code in [i64::MIN, -1, 0, 199, 400, 450, 499, 900, 1000, i64::MAX] {
            assert_eq!(classify(code), UNKNOWN, "code {code}");
        }
        assert_eq!(UNKNOWN.tint, Tint::Neutral);
    }

    #[test]
    fn group_tints() {
        assert_eq!(classify(211).tint, Tint::Red);
        assert_eq!(classify(301).tint, Tint::Cyan);
        assert_eq!(classify(502).tint, Tint::Blue);
        assert_eq!(classify(601).tint, Tint::White);
        assert_eq!(classify(741).tint, Tint::Blue);
        assert_eq!(classify(800).tint, Tint::Yellow);
        assert_eq!(classify(804).tint, Tint::White);
    }

    #[test]
    fn capitalize_matches_sentence_case() {
        assert_eq!(capitalize("clear sky"), "Clear sky");
        assert_eq!(capitalize("Heavy Intensity RAIN"), "Heavy intensity rain");
        assert_eq!(capitalize("ébullition"), "Ébullition");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn renders_clear_london_in_celsius() {
        let line = render(&response("London", 800, "clear sky", 18.0), Units::Metric, Palette::Plain)
            .unwrap();

        let expected = format!(
            "{}\t🔆\t{} (18°C)",
            centered("London", 7, 7),
            centered("Clear sky", 5, 6)
        );
        assert_eq!(line, expected);
    }

    #[test]
    fn renders_snowy_las_vegas_in_fahrenheit() {
        let line =
            render(&response("Las Vegas", 601, "snow", 34.0), Units::Imperial, Palette::Plain).unwrap();

        let expected =
            format!("{}\t⛄️\t{} (34°F)", centered("Las Vegas", 5, 6), centered("Snow", 8, 8));
        assert_eq!(line, expected);
    }

    #[test]
    fn fractional_temperature_is_kept() {
        let line = render(&response("Oslo", 500, "light rain", -3.5), Units::Metric, Palette::Plain)
            .unwrap();
        assert!(line.ends_with("(-3.5°C)"), "{line}");
    }

    #[test]
    fn long_names_are_not_truncated() {
        let name = "Llanfairpwllgwyngyll Station";
        let line = render(&response(name, 804, "overcast clouds", 9.0), Units::Metric, Palette::Plain)
            .unwrap();
        assert!(line.starts_with(name));
    }

    #[test]
    fn ansi_palette_styles_fields_in_order() {
        colored::control::set_override(true);

        let line = render(&response("London", 800, "clear sky", 18.0), Units::Metric, Palette::Ansi)
            .unwrap();

        assert!(line.starts_with("\x1b[7m"), "{line:?}");
        assert!(line.contains("\x1b[33m"), "{line:?}");

        let city = line.find("London").unwrap();
        let glyph = line.find("🔆").unwrap();
        let description = line.find("Clear sky").unwrap();
        let reset = line[description..].find("\x1b[0m").unwrap() + description;
        let temperature = line.find("(18°C)").unwrap();

        assert!(city < glyph && glyph < description && description < reset && reset < temperature);
        assert!(line.ends_with("(18°C)"));
    }

    #[test]
    fn render_without_conditions_is_format_error() {
        let mut weather = response("London", 800, "clear sky", 18.0);
        weather.weather.clear();

        assert_eq!(render(&weather, Units::Metric, Palette::Plain), Err(WeatherError::ResponseFormat));
    }
}
