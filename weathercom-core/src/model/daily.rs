//! 10-day forecast schema.
//!
//! Night follows day. A forecast fetched late in the day has no `day` part
//! for today, only `night`, and `max_temp` is null.
//!
//! Days and day parts are numbered independently, both starting at 1. If
//! today only has a night part, today's day is `num=1` and so is that night.
//! Tomorrow is day `num=2`, its day part `num=2` and its night `num=3`.
//! The numbering is carried as received.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Metadata;

/// Body of `forecast/daily/10day.json`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Forecast10Response {
    pub metadata: Metadata,
    /// One record per day, today first.
    pub forecasts: Vec<DailyForecast>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyForecast {
    /// Always `"fod_long_range_daily"`.
    #[serde(deserialize_with = "super::null_as_default")]
    pub class: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub expire_time_gmt: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub fcst_valid: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub fcst_valid_local: String,
    /// Day of week, e.g. `"Monday"`.
    #[serde(deserialize_with = "super::null_as_default")]
    pub dow: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub num: i32,
    /// Same as `day.temp`; null once the day part is gone.
    pub max_temp: Option<i32>,
    /// Same as `night.temp`.
    pub min_temp: Option<i32>,
    pub torcon: Option<String>,
    pub stormcon: Option<String>,
    pub blurb: Option<String>,
    pub blurb_author: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub lunar_phase_day: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub lunar_phase: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub lunar_phase_code: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub sunrise: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub sunset: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub moonrise: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub moonset: String,
    pub qualifier_code: Option<String>,
    pub qualifier: Option<String>,
    /// Covers both day parts, so it mentions both the high and the low.
    #[serde(deserialize_with = "super::null_as_default")]
    pub narrative: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub qpf: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub snow_qpf: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub snow_range: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub snow_phrase: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub snow_code: String,
    pub night: Option<DayPart>,
    pub day: Option<DayPart>,
}

/// Day or night half of a forecast day.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DayPart {
    #[serde(deserialize_with = "super::null_as_default")]
    pub fcst_valid: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub fcst_valid_local: String,
    /// `"D"` for day, `"N"` for night.
    #[serde(deserialize_with = "super::null_as_default")]
    pub day_ind: String,
    /// `"Tonight"`, `"Tomorrow"`, `"Wednesday"`
    #[serde(deserialize_with = "super::null_as_default")]
    pub daypart_name: String,
    /// `"Monday night"`, `"Tuesday"`
    #[serde(deserialize_with = "super::null_as_default")]
    pub long_daypart_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub alt_daypart_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub num: i32,

    /// High for a day part, low for a night part.
    #[serde(deserialize_with = "super::null_as_default")]
    pub temp: i32,
    /// e.g. `"Low near 70F."`
    #[serde(deserialize_with = "super::null_as_default")]
    pub temp_phrase: String,

    /// Cloud cover percentage.
    #[serde(deserialize_with = "super::null_as_default")]
    pub clds: i32,

    #[serde(deserialize_with = "super::null_as_default")]
    pub precip_type: String,
    /// Probability of precipitation, percent.
    #[serde(deserialize_with = "super::null_as_default")]
    pub pop: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub pop_phrase: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub accumulation_phrase: String,
    pub qualifier: Option<String>,
    pub qualifier_code: Option<String>,

    /// 0 no thunder, 1 possible, 2 expected.
    #[serde(deserialize_with = "super::null_as_default")]
    pub thunder_enum: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub thunder_enum_phrase: String,

    #[serde(deserialize_with = "super::null_as_default")]
    pub wspd: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub wdir: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub wdir_cardinal: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub wind_phrase: String,

    #[serde(deserialize_with = "super::null_as_default")]
    pub phrase_12char: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub phrase_22char: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub phrase_32char: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub subphrase_pt1: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub subphrase_pt2: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub subphrase_pt3: String,

    #[serde(deserialize_with = "super::null_as_default")]
    pub shortcast: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub narrative: String,

    #[serde(deserialize_with = "super::null_as_default")]
    pub qpf: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub snow_qpf: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub snow_range: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub snow_phrase: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub snow_code: String,

    #[serde(deserialize_with = "super::null_as_default")]
    pub uv_index_raw: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub uv_index: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub uv_warning: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub uv_desc: String,

    pub golf_index: Option<i32>,
    /// Empty when `golf_index` is null.
    #[serde(deserialize_with = "super::null_as_default")]
    pub golf_category: String,

    #[serde(deserialize_with = "super::null_as_default")]
    pub wxman: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub hi: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub wc: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub rh: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub vocal_key: String,

    #[serde(deserialize_with = "super::null_as_default")]
    pub icon_extd: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub icon_code: i32,
}

impl DailyForecast {
    /// Present day parts in chronological order.
    pub fn day_parts(&self) -> impl Iterator<Item = &DayPart> {
        self.day.iter().chain(self.night.iter())
    }

    pub fn valid_at(&self) -> Option<DateTime<Utc>> {
        super::unix_to_utc(self.fcst_valid)
    }
}

impl DayPart {
    pub fn is_day(&self) -> bool {
        self.day_ind == "D"
    }

    pub fn is_night(&self) -> bool {
        self.day_ind == "N"
    }
}
