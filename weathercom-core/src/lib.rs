//! Client library for the weather.com v1 geocode API.
//!
//! This crate defines:
//! - Typed schemas for current conditions, the imminent precipitation
//!   forecast ("wwir"), the 10-day forecast and the hourly forecast
//! - URL construction for the four geocode endpoints
//! - A client that performs one GET per call and decodes the JSON body
//!
//! It is used by `weathercom-cli`, but can also be reused by other binaries or services.
//!
//! An API key is required. The API is sometimes referred to as the
//! Weather Underground API.

pub mod client;
pub mod error;
pub mod model;
pub mod request;
pub mod units;

pub use client::{ClientConfig, WeatherApi, WeatherClient};
pub use error::WeatherError;
pub use model::{
    CurrentResponse, DailyForecast, DayPart, Forecast10Response, HourlyForecast,
    HourlyForecastResponse, Metadata, Observation, ObservationUnits, WwirForecast, WwirResponse,
};
pub use request::Endpoint;
pub use units::{ParseUnitsError, Units};
