use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Metadata;
use crate::Units;

/// Body of `observations/current.json`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentResponse {
    pub metadata: Metadata,
    pub observation: Observation,
}

/// Present conditions at the nearest station.
///
/// Measurements live in up to four unit blocks. A single-system unit code
/// fills only its own block; `a` fills all four.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Observation {
    /// Always `"observation"`.
    #[serde(deserialize_with = "super::null_as_default")]
    pub class: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub expire_time_gmt: i64,
    /// UTC timestamp of the observation.
    #[serde(deserialize_with = "super::null_as_default")]
    pub obs_time: i64,
    /// ISO8601 local time, e.g. `"2018-07-16T18:41:00-0400"`.
    #[serde(deserialize_with = "super::null_as_default")]
    pub obs_time_local: String,
    /// Wind direction in degrees; null for variable winds.
    pub wdir: Option<i32>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub icon_code: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub icon_extd: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub sunrise: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub sunset: String,
    /// `"D"` or `"N"`.
    #[serde(deserialize_with = "super::null_as_default")]
    pub day_ind: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub uv_index: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub uv_warning: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub wxman: String,
    pub obs_qualifier_code: Option<String>,
    /// Pressure tendency: 0 steady, 1 rising, 2 falling.
    #[serde(deserialize_with = "super::null_as_default")]
    pub ptend_code: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub dow: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub wdir_cardinal: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub uv_desc: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub phrase_12char: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub phrase_22char: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub phrase_32char: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub ptend_desc: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub sky_cover: String,
    /// Cloud cover code, e.g. `"BKN"`.
    #[serde(deserialize_with = "super::null_as_default")]
    pub clds: String,
    pub obs_qualifier_severity: Option<i32>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub vocal_key: String,

    pub imperial: Option<ObservationUnits>,
    pub metric: Option<ObservationUnits>,
    pub metric_si: Option<ObservationUnits>,
    pub uk_hybrid: Option<ObservationUnits>,
}

/// Measurements in one unit system. Same shape for every system; only the
/// units of the numbers differ.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationUnits {
    #[serde(deserialize_with = "super::null_as_default")]
    pub wspd: i32,
    pub gust: Option<i32>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub vis: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub mslp: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub altimeter: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub temp: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub dewpt: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub rh: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub wc: i32,
    #[serde(deserialize_with = "super::null_as_default")]
    pub hi: i32,
    pub temp_change_24hour: Option<i32>,
    pub temp_max_24hour: Option<i32>,
    pub temp_min_24hour: Option<i32>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub pchange: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub feels_like: i32,
    pub snow_1hour: Option<f64>,
    pub snow_6hour: Option<f64>,
    pub snow_24hour: Option<f64>,
    pub snow_mtd: Option<f64>,
    pub snow_season: Option<f64>,
    pub snow_ytd: Option<f64>,
    pub snow_2day: Option<f64>,
    pub snow_3day: Option<f64>,
    pub snow_7day: Option<f64>,
    /// Cloud ceiling; null when the sky is clear.
    pub ceiling: Option<i32>,
    pub precip_1hour: Option<f64>,
    pub precip_6hour: Option<f64>,
    pub precip_24hour: Option<f64>,
    pub precip_mtd: Option<f64>,
    pub precip_ytd: Option<f64>,
    pub precip_2day: Option<f64>,
    pub precip_3day: Option<f64>,
    pub precip_7day: Option<f64>,
    pub obs_qualifier_100char: Option<String>,
    pub obs_qualifier_50char: Option<String>,
    pub obs_qualifier_32char: Option<String>,
}

impl Observation {
    /// Block for a single-system unit code. `Units::All` has no single block.
    pub fn block(&self, units: Units) -> Option<&ObservationUnits> {
        match units {
            Units::Imperial => self.imperial.as_ref(),
            Units::Metric => self.metric.as_ref(),
            Units::MetricSi => self.metric_si.as_ref(),
            Units::UkHybrid => self.uk_hybrid.as_ref(),
            Units::All => None,
        }
    }

    pub fn populated_blocks(&self) -> usize {
        [
            self.imperial.is_some(),
            self.metric.is_some(),
            self.metric_si.is_some(),
            self.uk_hybrid.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        super::unix_to_utc(self.obs_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OBSERVATION_CLASS, fixtures};

    fn all_units() -> CurrentResponse {
        serde_json::from_str(fixtures::CURRENT_ALL).expect("fixture should decode")
    }

    #[test]
    fn decodes_all_unit_blocks() {
        let resp = all_units();
        let obs = &resp.observation;

        assert_eq!(obs.class, OBSERVATION_CLASS);
        assert_eq!(obs.populated_blocks(), 4);
        assert_eq!(obs.imperial.as_ref().unwrap().temp, 84);
        assert_eq!(obs.metric.as_ref().unwrap().temp, 29);
        assert_eq!(obs.metric_si.as_ref().unwrap().wspd, 5);
        assert_eq!(obs.uk_hybrid.as_ref().unwrap().wspd, 12);
        assert_eq!(resp.metadata.units, "a");
    }

    #[test]
    fn nullable_fields_decode_to_none() {
        let resp = all_units();
        let imperial = resp.observation.imperial.unwrap();

        assert_eq!(imperial.gust, None);
        assert_eq!(imperial.ceiling, Some(5500));
        assert_eq!(imperial.obs_qualifier_32char, None);
        assert_eq!(resp.observation.obs_qualifier_code, None);
    }

    #[test]
    fn null_scalars_in_block_decode_to_zero() {
        let json = r#"{"observation": {
            "wdir": null, "uv_index": null,
            "imperial": {"temp": 84, "hi": null, "vis": null}
        }}"#;
        let obs = serde_json::from_str::<CurrentResponse>(json).unwrap().observation;
        let imperial = obs.imperial.as_ref().unwrap();

        assert_eq!(obs.wdir, None);
        assert_eq!(obs.uv_index, 0);
        assert_eq!(imperial.temp, 84);
        assert_eq!(imperial.hi, 0);
        assert_eq!(imperial.vis, 0.0);
    }

    #[test]
    fn missing_blocks_stay_absent() {
        let json = r#"{
            "metadata": {"units": "m"},
            "observation": {"class": "observation", "metric": {"temp": 21}}
        }"#;
        let resp: CurrentResponse = serde_json::from_str(json).unwrap();
        let obs = &resp.observation;

        assert_eq!(obs.populated_blocks(), 1);
        assert!(obs.imperial.is_none());
        assert_eq!(obs.block(Units::Metric).unwrap().temp, 21);
        assert!(obs.block(Units::All).is_none());
    }

    #[test]
    fn block_selects_matching_system() {
        let obs = all_units().observation;
        for units in Units::single() {
            assert!(obs.block(*units).is_some(), "missing block for {units}");
        }
        assert!(std::ptr::eq(
            obs.block(Units::MetricSi).unwrap(),
            obs.metric_si.as_ref().unwrap()
        ));
    }

    #[test]
    fn observed_at_uses_obs_time() {
        let obs = all_units().observation;
        assert_eq!(
            obs.observed_at().unwrap().to_rfc3339(),
            "2018-07-16T22:41:00+00:00"
        );
    }

    #[test]
    fn json_roundtrip_is_lossless() {
        let original = all_units();
        let encoded = serde_json::to_string(&original).unwrap();
        let decoded: CurrentResponse = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, original);
    }
}
