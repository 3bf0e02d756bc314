use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Metadata;

/// Body of `forecast/hourly/240hour.json`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HourlyForecastResponse {
    pub metadata: Metadata,
    /// One record per hour, starting with the current hour.
    pub forecasts: Vec<HourlyForecast>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HourlyForecast {
    /// Always `"fod_short_range_hourly"`.
    #[serde(deserialize_with = "super::null_as_default")]
    pub class: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub expire_time_gmt: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub fcst_valid: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub fcst_valid_local: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub num: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub day_ind: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub temp: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub dewpt: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub hi: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub wc: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub feels_like: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub icon_extd: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub wxman: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub icon_code: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub dow: String,
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
    pub pop: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub precip_type: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub qpf: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub snow_qpf: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub rh: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub wspd: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub wdir: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub wdir_cardinal: String,
    pub gust: Option<i32>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub clds: i32,
    pub vis: Option<f64>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub mslp: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub uv_index_raw: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub uv_index: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub uv_warning: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub uv_desc: String,
    pub golf_index: Option<i32>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub golf_category: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub severity: i32,
}

impl HourlyForecast {
    pub fn valid_at(&self) -> Option<DateTime<Utc>> {
        super::unix_to_utc(self.fcst_valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HOURLY_FORECAST_CLASS, fixtures};

    fn hourly() -> HourlyForecastResponse {
        serde_json::from_str(fixtures::HOURLY).expect("fixture should decode")
    }

    #[test]
    fn decodes_ordered_hours() {
        let resp = hourly();
        assert_eq!(resp.forecasts.len(), 2);
        assert!(resp.forecasts.iter().all(|h| h.class == HOURLY_FORECAST_CLASS));

        let nums: Vec<i32> = resp.forecasts.iter().map(|h| h.num).collect();
        assert_eq!(nums, vec![1, 2]);
        assert!(resp.forecasts[0].fcst_valid < resp.forecasts[1].fcst_valid);
    }

    #[test]
    fn gust_is_nullable() {
        let resp = hourly();
        assert_eq!(resp.forecasts[0].gust, None);
        assert_eq!(resp.forecasts[1].gust, Some(35));
    }

    #[test]
    fn null_scalars_decode_to_zero() {
        let json = r#"{"forecasts":[
            {"class": "fod_short_range_hourly", "num": 1, "wdir": null, "hi": null, "qpf": null, "temp": 75},
            {"class": "fod_short_range_hourly", "num": 2, "wdir": 240, "hi": 78, "temp": 74}
        ]}"#;
        let resp: HourlyForecastResponse = serde_json::from_str(json).unwrap();

        assert_eq!(resp.forecasts.len(), 2);
        assert_eq!(resp.forecasts[0].wdir, 0);
        assert_eq!(resp.forecasts[0].hi, 0);
        assert_eq!(resp.forecasts[0].qpf, 0.0);
        assert_eq!(resp.forecasts[0].temp, 75);
        assert_eq!(resp.forecasts[1].wdir, 240);
    }

    #[test]
    fn empty_body_object_decodes_to_defaults() {
        let resp: HourlyForecastResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.forecasts.is_empty());
        assert_eq!(resp.metadata, Metadata::default());
    }

    #[test]
    fn valid_at_uses_fcst_valid() {
        let hour = &hourly().forecasts[0];
        assert_eq!(
            hour.valid_at().unwrap().to_rfc3339(),
            "2018-07-16T23:00:00+00:00"
        );
    }

    #[test]
    fn json_roundtrip_is_lossless() {
        let original = hourly();
        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: HourlyForecastResponse = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);
    }
}
