use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Units;

/// Envelope present on every response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(deserialize_with = "super::null_as_default")]
    pub language: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub transaction_id: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub version: String,
    /// Geocoded latitude the API resolved the request to.
    #[serde(deserialize_with = "super::null_as_default")]
    pub latitude: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub longitude: f64,
    /// Unit code echoed back, e.g. `"e"`.
    #[serde(deserialize_with = "super::null_as_default")]
    pub units: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub expire_time_gmt: i64,
    /// Upstream status, passed through untouched.
    #[serde(deserialize_with = "super::null_as_default")]
    pub status_code: i32,
}

impl Metadata {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        super::unix_to_utc(self.expire_time_gmt)
    }

    /// The echoed unit code, if present and one this crate knows.
    pub fn unit_system(&self) -> Option<Units> {
        if self.units.trim().is_empty() {
            return None;
        }
        Units::try_from(self.units.as_str()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_default_to_zero() {
        let md: Metadata = serde_json::from_str(r#"{"language":"en-US"}"#).unwrap();
        assert_eq!(md.language, "en-US");
        assert_eq!(md.status_code, 0);
        assert_eq!(md.expire_time_gmt, 0);
        assert!(md.transaction_id.is_empty());
    }

    #[test]
    fn unit_system_parses_echoed_code() {
        let md = Metadata {
            units: "h".to_string(),
            ..Default::default()
        };
        assert_eq!(md.unit_system(), Some(Units::UkHybrid));

        let md = Metadata {
            units: "q".to_string(),
            ..Default::default()
        };
        assert_eq!(md.unit_system(), None);
    }

    #[test]
    fn unit_system_is_none_without_echoed_code() {
        assert_eq!(Metadata::default().unit_system(), None);

        let md: Metadata = serde_json::from_str(r#"{"units": null}"#).unwrap();
        assert_eq!(md.unit_system(), None);
    }

    #[test]
    fn expires_at_from_gmt_seconds() {
        let md = Metadata {
            expire_time_gmt: 1531770405,
            ..Default::default()
        };
        assert_eq!(
            md.expires_at().unwrap().to_rfc3339(),
            "2018-07-16T19:46:45+00:00"
        );
    }
}
