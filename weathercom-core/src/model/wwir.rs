use serde::{Deserialize, Serialize};

use super::Metadata;

/// Body of `forecast/wwir.json`, the imminent precipitation forecast.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WwirResponse {
    pub metadata: Metadata,
    pub forecast: WwirForecast,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WwirForecast {
    /// Always `"fod_short_range_wwir"`.
    #[serde(deserialize_with = "super::null_as_default")]
    pub class: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub expire_time_gmt: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub fcst_valid: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub fcst_valid_local: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub overall_type: i32,
    /// e.g. `"Rain starting around 8 PM."`
    #[serde(deserialize_with = "super::null_as_default")]
    pub phrase: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub terse_phrase: String,
    /// The phrase with the time left as a placeholder.
    pub phrase_template: Option<String>,
    pub terse_phrase_template: Option<String>,
    pub precip_day: Option<String>,
    pub precip_time_24hr: Option<String>,
    pub precip_time_12hr: Option<String>,
    pub precip_time_iso: Option<String>,
}
