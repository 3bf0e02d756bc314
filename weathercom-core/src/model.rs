//! Response schemas for the weather.com v1 geocode endpoints.
//!
//! Every type mirrors the upstream JSON field-for-field. Decoding ignores
//! unknown fields and fills absent or `null` scalars with their zero value.
//! Fields the API documents as nullable are `Option`, where `null` and
//! absent both decode to `None`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

pub mod current;
pub mod daily;
pub mod hourly;
pub mod metadata;
pub mod wwir;

pub use current::{CurrentResponse, Observation, ObservationUnits};
pub use daily::{DailyForecast, DayPart, Forecast10Response};
pub use hourly::{HourlyForecast, HourlyForecastResponse};
pub use metadata::Metadata;
pub use wwir::{WwirForecast, WwirResponse};

/// `class` of a current-conditions observation.
pub const OBSERVATION_CLASS: &str = "observation";
/// `class` of each record in a 10-day forecast.
pub const DAILY_FORECAST_CLASS: &str = "fod_long_range_daily";
/// `class` of each record in an hourly forecast.
pub const HOURLY_FORECAST_CLASS: &str = "fod_short_range_hourly";
/// `class` of the imminent precipitation forecast.
pub const WWIR_FORECAST_CLASS: &str = "fod_short_range_wwir";

/// Reads `null` as the type's zero value. Paired with the struct-level
/// `#[serde(default)]`, which covers absent fields.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}
