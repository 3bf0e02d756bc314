use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::{fmt, time::Duration};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::{
    Units,
    error::WeatherError,
    model::{CurrentResponse, Forecast10Response, HourlyForecastResponse, WwirResponse},
    request::{DEFAULT_BASE_URL, Endpoint, build_url},
};

/// Transport settings. The defaults talk to the public API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// One call per geocode endpoint. Each call is a single GET; nothing is
/// retried or cached.
#[async_trait]
pub trait WeatherApi: Send + Sync + fmt::Debug {
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
        units: Units,
    ) -> Result<CurrentResponse, WeatherError>;

    async fn get_wwir(
        &self,
        latitude: f64,
        longitude: f64,
        units: Units,
    ) -> Result<WwirResponse, WeatherError>;

    async fn get_forecast10(
        &self,
        latitude: f64,
        longitude: f64,
        units: Units,
    ) -> Result<Forecast10Response, WeatherError>;

    async fn get_hourly_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        units: Units,
    ) -> Result<HourlyForecastResponse, WeatherError>;
}

/// Client for `api.weather.com/v1`.
///
/// Holds the API key and one HTTP client that is reused for every call.
/// Cheap to clone and safe to share between tasks.
#[derive(Clone)]
pub struct WeatherClient {
    api_key: String,
    base_url: Url,
    http: Client,
}

impl WeatherClient {
    /// The key is sent as given; it is not checked locally.
    pub fn new(api_key: impl Into<String>) -> Result<Self, WeatherError> {
        Self::with_config(api_key, &ClientConfig::default())
    }

    pub fn with_config(
        api_key: impl Into<String>,
        config: &ClientConfig,
    ) -> Result<Self, WeatherError> {
        let base_url = Url::parse(&config.base_url)?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::Request(Box::new(e)))?;

        Ok(Self {
            api_key: api_key.into(),
            base_url,
            http,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[instrument(skip(self, endpoint), fields(endpoint = %endpoint))]
    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        latitude: f64,
        longitude: f64,
        units: Units,
    ) -> Result<T, WeatherError> {
        let url = build_url(
            &self.base_url,
            latitude,
            longitude,
            endpoint,
            &self.api_key,
            units,
        )?;
        debug!(path = url.path(), "Sending request");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(WeatherError::Transport)?;

        let status = res.status();
        debug!(%status, "Received response");
        if !status.is_success() {
            warn!(%status, "Non-success status from weather.com, decoding body anyway");
        }

        let body = res.bytes().await.map_err(WeatherError::Transport)?;

        serde_json::from_slice(&body).map_err(|source| {
            warn!(
                body = %truncate_body(&String::from_utf8_lossy(&body)),
                "Response did not match {}",
                endpoint.schema()
            );
            WeatherError::Decode {
                schema: endpoint.schema(),
                source,
            }
        })
    }
}

impl fmt::Debug for WeatherClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WeatherApi for WeatherClient {
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
        units: Units,
    ) -> Result<CurrentResponse, WeatherError> {
        self.fetch(Endpoint::CurrentObservations, latitude, longitude, units)
            .await
    }

    async fn get_wwir(
        &self,
        latitude: f64,
        longitude: f64,
        units: Units,
    ) -> Result<WwirResponse, WeatherError> {
        self.fetch(Endpoint::Wwir, latitude, longitude, units).await
    }

    async fn get_forecast10(
        &self,
        latitude: f64,
        longitude: f64,
        units: Units,
    ) -> Result<Forecast10Response, WeatherError> {
        self.fetch(Endpoint::Forecast10Day, latitude, longitude, units)
            .await
    }

    async fn get_hourly_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        units: Units,
    ) -> Result<HourlyForecastResponse, WeatherError> {
        self.fetch(Endpoint::Hourly240Hour, latitude, longitude, units)
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
