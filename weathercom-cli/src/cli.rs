use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Select};
use serde::Serialize;
use std::fmt;
use weathercom_core::{Units, WeatherApi};

use crate::{config::Config, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathercom", version, about = "weather.com forecasts by coordinates")]
pub struct Cli {
    /// API key to use instead of the stored one.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store an API key and default units.
    Configure,

    /// Current conditions.
    Current(Location),

    /// Precipitation outlook for the next few hours.
    Wwir(Location),

    /// 10-day forecast.
    Daily(Location),

    /// Hourly forecast.
    Hourly {
        #[command(flatten)]
        location: Location,

        /// Number of hours to show.
        #[arg(long, default_value_t = 12)]
        limit: usize,
    },
}

#[derive(Debug, Args)]
pub struct Location {
    /// Latitude, -90 to 90.
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude, -180 to 180.
    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,

    /// Unit code: e, m, s, h or a.
    #[arg(long, short)]
    pub units: Option<Units>,

    /// Print the raw response as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut config = Config::load()?;
        let api_key = self.api_key.as_deref();

        match self.command {
            Command::Configure => configure(&mut config),
            Command::Current(loc) => {
                let client = config.build_client(api_key)?;
                let units = config.resolve_units(loc.units);
                let resp = client
                    .get_current(loc.lat, loc.lng, units)
                    .await
                    .context("Failed to fetch current conditions")?;
                emit(&resp, loc.json, |r| render::current(r, units))
            }
            Command::Wwir(loc) => {
                let client = config.build_client(api_key)?;
                let units = config.resolve_units(loc.units);
                let resp = client
                    .get_wwir(loc.lat, loc.lng, units)
                    .await
                    .context("Failed to fetch imminent forecast")?;
                emit(&resp, loc.json, render::wwir)
            }
            Command::Daily(loc) => {
                let client = config.build_client(api_key)?;
                let units = config.resolve_units(loc.units);
                let resp = client
                    .get_forecast10(loc.lat, loc.lng, units)
                    .await
                    .context("Failed to fetch 10-day forecast")?;
                emit(&resp, loc.json, |r| render::forecast10(r, units))
            }
            Command::Hourly { location: loc, limit } => {
                let client = config.build_client(api_key)?;
                let units = config.resolve_units(loc.units);
                let resp = client
                    .get_hourly_forecast(loc.lat, loc.lng, units)
                    .await
                    .context("Failed to fetch hourly forecast")?;
                emit(&resp, loc.json, |r| render::hourly(r, units, limit))
            }
        }
    }
}

fn emit<T: Serialize>(value: &T, json: bool, human: impl FnOnce(&T) -> String) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(value).context("Failed to encode response")?;
        println!("{text}");
    } else {
        print!("{}", human(value));
    }
    Ok(())
}

struct UnitsChoice(Units);

impl fmt::Display for UnitsChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0.code(), self.0.description())
    }
}

fn configure(config: &mut Config) -> Result<()> {
    let api_key = Password::new("weather.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let api_key = api_key.trim();
    if api_key.is_empty() {
        anyhow::bail!("API key cannot be empty");
    }

    let current = config.resolve_units(None);
    let choices: Vec<UnitsChoice> = Units::all().iter().copied().map(UnitsChoice).collect();
    let cursor = Units::all().iter().position(|u| *u == current).unwrap_or(0);
    let units = Select::new("Default units:", choices)
        .with_starting_cursor(cursor)
        .prompt()
        .context("Failed to read default units")?;

    config.set_api_key(api_key.to_string());
    config.default_units = Some(units.0);

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_location_with_negative_longitude() {
        let cli = Cli::try_parse_from([
            "weathercom", "current", "--lat", "40.75", "--lng", "-74.01", "--units", "m",
        ])
        .unwrap();

        match cli.command {
            Command::Current(loc) => {
                assert_eq!(loc.lat, 40.75);
                assert_eq!(loc.lng, -74.01);
                assert_eq!(loc.units, Some(Units::Metric));
                assert!(!loc.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn hourly_limit_defaults_to_twelve() {
        let cli =
            Cli::try_parse_from(["weathercom", "hourly", "--lat", "1", "--lng", "2"]).unwrap();
        match cli.command {
            Command::Hourly { limit, location } => {
                assert_eq!(limit, 12);
                assert_eq!(location.units, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_api_key_after_subcommand() {
        let cli = Cli::try_parse_from([
            "weathercom", "daily", "--lat", "1", "--lng", "2", "--api-key", "K", "--json",
        ])
        .unwrap();
        assert_eq!(cli.api_key.as_deref(), Some("K"));
        assert!(matches!(cli.command, Command::Daily(ref loc) if loc.json));
    }

    #[test]
    fn rejects_unknown_units() {
        let err = Cli::try_parse_from([
            "weathercom", "wwir", "--lat", "1", "--lng", "2", "--units", "x",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("Unknown unit code"));
    }

    #[test]
    fn units_choice_display() {
        assert_eq!(UnitsChoice(Units::MetricSi).to_string(), "s (metric SI)");
    }
}
