use clap::Parser;
use is_terminal::IsTerminal;
use weather_core::{
    Palette, Settings, Units, WeatherError, WeatherRequest, config::secrets_file_path,
    lookup::current_weather_line, provider::fetcher_from_settings,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Gets weather and temperature information for a city"
)]
pub struct Cli {
    /// City name; several words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub city: Vec<String>,

    /// Display the temperature in imperial units.
    #[arg(short, long)]
    pub imperial: bool,
}

impl Cli {
    pub fn request(&self) -> WeatherRequest {
        WeatherRequest::new(self.city.clone(), Units::from_imperial_flag(self.imperial))
    }

    /// Runs the lookup and prints the line. Errors are returned untouched so
    /// that `main` alone decides what the user sees and the exit status.
    pub async fn run(self) -> Result<(), WeatherError> {
        let request = self.request();

        let path = secrets_file_path()?;
        tracing::debug!(path = %path.display(), "loading secrets");
        let settings = Settings::load(&path)?;

        let fetcher = fetcher_from_settings(&settings)?;
        let line = current_weather_line(fetcher.as_ref(), &settings, &request, palette()).await?;

        println!("{line}");
        Ok(())
    }
}

/// Plain output when `NO_COLOR` is set or stdout is piped.
fn palette() -> Palette {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    if no_color || !std::io::stdout().is_terminal() { Palette::Plain } else { Palette::Ansi }
}
