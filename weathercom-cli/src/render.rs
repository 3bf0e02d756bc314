//! Human-readable output for the `weathercom` commands.

use chrono::DateTime;
use std::fmt::Write;
use weathercom_core::{
    CurrentResponse, DayPart, Forecast10Response, HourlyForecastResponse, ObservationUnits, Units,
    WwirResponse,
};

struct Labels {
    temp: &'static str,
    speed: &'static str,
}

fn labels(units: Units) -> Labels {
    match units {
        Units::Imperial => Labels { temp: "°F", speed: "mph" },
        Units::Metric => Labels { temp: "°C", speed: "km/h" },
        Units::MetricSi => Labels { temp: "°C", speed: "m/s" },
        Units::UkHybrid => Labels { temp: "°C", speed: "mph" },
        // Multi-system responses are rendered block by block.
        Units::All => Labels { temp: "°", speed: "" },
    }
}

/// "Mon 19:00" from an upstream local timestamp, or the raw text if it
/// doesn't parse.
fn local_time(raw: &str) -> String {
    DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z")
        .map(|dt| dt.format("%a %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn write_block(out: &mut String, units: Units, block: &ObservationUnits) {
    let l = labels(units);
    let _ = writeln!(
        out,
        "  [{}] {}{} (feels like {}{}), humidity {}%, wind {} {}{}",
        units.description(),
        block.temp,
        l.temp,
        block.feels_like,
        l.temp,
        block.rh,
        block.wspd,
        l.speed,
        block
            .gust
            .map(|g| format!(", gusts {g} {}", l.speed))
            .unwrap_or_default(),
    );
}

pub fn current(resp: &CurrentResponse, requested: Units) -> String {
    let obs = &resp.observation;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Current conditions ({}): {}, wind {}",
        local_time(&obs.obs_time_local),
        obs.phrase_32char,
        obs.wdir_cardinal,
    );

    match requested {
        Units::All => {
            for units in Units::single() {
                if let Some(block) = obs.block(*units) {
                    write_block(&mut out, *units, block);
                }
            }
        }
        single => match obs.block(single) {
            Some(block) => write_block(&mut out, single, block),
            None => {
                let _ = writeln!(out, "  No {} measurements in response", single.description());
            }
        },
    }

    out
}

pub fn wwir(resp: &WwirResponse) -> String {
    let fc = &resp.forecast;
    let mut out = format!("Next hours ({}): {}\n", local_time(&fc.fcst_valid_local), fc.phrase);
    if let Some(at) = &fc.precip_time_12hr {
        let _ = writeln!(out, "  Precipitation expected at {at}");
    }
    out
}

fn write_day_part(out: &mut String, part: &DayPart) {
    let _ = writeln!(out, "  {}: {}", part.daypart_name, part.narrative);
    if let Some(qualifier) = &part.qualifier {
        let _ = writeln!(out, "    {qualifier}");
    }
}

pub fn forecast10(resp: &Forecast10Response, units: Units) -> String {
    let l = labels(units);
    let mut out = String::new();

    for day in &resp.forecasts {
        let high = day
            .max_temp
            .map(|t| format!("{t}{}", l.temp))
            .unwrap_or_else(|| "--".to_string());
        let low = day
            .min_temp
            .map(|t| format!("{t}{}", l.temp))
            .unwrap_or_else(|| "--".to_string());

        let _ = writeln!(out, "{:<10} high {:>5}  low {:>5}", day.dow, high, low);
        for part in day.day_parts() {
            write_day_part(&mut out, part);
        }
    }

    out
}

pub fn hourly(resp: &HourlyForecastResponse, units: Units, limit: usize) -> String {
    let l = labels(units);
    let mut out = String::new();

    for hour in resp.forecasts.iter().take(limit) {
        let _ = writeln!(
            out,
            "{}  {:>4}{}  {:<24} pop {:>3}%  wind {} {} {}",
            local_time(&hour.fcst_valid_local),
            hour.temp,
            l.temp,
            hour.phrase_22char,
            hour.pop,
            hour.wdir_cardinal,
            hour.wspd,
            l.speed,
        );
    }

    out
}
