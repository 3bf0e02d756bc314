use std::fmt;
use url::Url;

use crate::{Units, error::WeatherError};

pub const DEFAULT_BASE_URL: &str = "https://api.weather.com/v1";

/// Geocode endpoints supported by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    CurrentObservations,
    Wwir,
    Forecast10Day,
    Hourly240Hour,
}

impl Endpoint {
    /// Path fragment below `/geocode/{lat}/{lng}/`, without the `.json` suffix.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::CurrentObservations => "observations/current",
            Endpoint::Wwir => "forecast/wwir",
            Endpoint::Forecast10Day => "forecast/daily/10day",
            Endpoint::Hourly240Hour => "forecast/hourly/240hour",
        }
    }

    /// Name of the response schema, used in decode errors and logs.
    pub fn schema(&self) -> &'static str {
        match self {
            Endpoint::CurrentObservations => "current conditions",
            Endpoint::Wwir => "imminent forecast",
            Endpoint::Forecast10Day => "10-day forecast",
            Endpoint::Hourly240Hour => "hourly forecast",
        }
    }

    pub const fn all() -> &'static [Endpoint] {
        &[
            Endpoint::CurrentObservations,
            Endpoint::Wwir,
            Endpoint::Forecast10Day,
            Endpoint::Hourly240Hour,
        ]
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Plain decimal text for a coordinate. `f64`'s `Display` never switches to
/// exponent notation, so `1e-7` comes out as `0.0000001`.
pub fn format_coordinate(value: f64) -> String {
    format!("{value}")
}

/// Builds `{base}/geocode/{lat}/{lng}/{endpoint}.json?apiKey={key}&units={code}`.
///
/// Any query string already on `base` is dropped.
pub fn build_url(
    base: &Url,
    latitude: f64,
    longitude: f64,
    endpoint: Endpoint,
    api_key: &str,
    units: Units,
) -> Result<Url, WeatherError> {
    let mut url = base.clone();
    url.set_query(None);

    let file = format!("{}.json", endpoint.path());
    url.path_segments_mut()
        .map_err(|()| WeatherError::Request(format!("base URL '{base}' cannot have a path").into()))?
        .pop_if_empty()
        .push("geocode")
        .push(&format_coordinate(latitude))
        .push(&format_coordinate(longitude))
        .extend(file.split('/'));

    url.query_pairs_mut()
        .append_pair("apiKey", api_key)
        .append_pair("units", units.code());

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse(DEFAULT_BASE_URL).unwrap()
    }

    #[test]
    fn builds_forecast10_url() {
        let url = build_url(
            &base(),
            40.754864,
            -74.007156,
            Endpoint::Forecast10Day,
            "KEY",
            Units::Imperial,
        )
        .unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.weather.com/v1/geocode/40.754864/-74.007156/forecast/daily/10day.json?apiKey=KEY&units=e"
        );
    }

    #[test]
    fn endpoint_displays_as_path() {
        assert_eq!(Endpoint::Forecast10Day.to_string(), "forecast/daily/10day");
        assert_eq!(
            Endpoint::CurrentObservations.to_string(),
            "observations/current"
        );
    }

    #[test]
    fn every_endpoint_ends_in_json() {
        for endpoint in Endpoint::all() {
            let url = build_url(&base(), 1.5, 2.5, *endpoint, "KEY", Units::Metric).unwrap();
            let expected = format!("/v1/geocode/1.5/2.5/{}.json", endpoint.path());
            assert_eq!(url.path(), expected);
            assert_eq!(url.query(), Some("apiKey=KEY&units=m"));
        }
    }

    #[test]
    fn coordinates_are_never_scientific() {
        assert_eq!(format_coordinate(0.0000001), "0.0000001");
        assert_eq!(format_coordinate(-90.0), "-90");
        assert_eq!(format_coordinate(51.5), "51.5");
    }

    #[test]
    fn api_key_is_escaped() {
        let url = build_url(
            &base(),
            0.0,
            0.0,
            Endpoint::Wwir,
            "a b&c=d",
            Units::All,
        )
        .unwrap();
        assert_eq!(url.query(), Some("apiKey=a+b%26c%3Dd&units=a"));

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("apiKey".to_string(), "a b&c=d".to_string()));
    }

    #[test]
    fn trailing_slash_and_query_on_base_are_ignored() {
        let base = Url::parse("http://127.0.0.1:8080/v1/?stale=1").unwrap();
        let url = build_url(
            &base,
            10.0,
            20.0,
            Endpoint::CurrentObservations,
            "KEY",
            Units::UkHybrid,
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8080/v1/geocode/10/20/observations/current.json?apiKey=KEY&units=h"
        );
    }

    #[test]
    fn host_only_base() {
        let base = Url::parse("http://localhost:9000").unwrap();
        let url = build_url(&base, 1.0, 2.0, Endpoint::Hourly240Hour, "K", Units::MetricSi)
            .unwrap();
        assert_eq!(url.path(), "/geocode/1/2/forecast/hourly/240hour.json");
    }

    #[test]
    fn cannot_be_a_base_url_is_a_request_error() {
        let base = Url::parse("mailto:someone@example.com").unwrap();
        let err = build_url(&base, 1.0, 2.0, Endpoint::Wwir, "K", Units::Imperial).unwrap_err();
        assert!(err.is_request());
    }
}
