use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure of a single API call.
///
/// There are exactly three places a call can fail, and each has its own
/// variant so callers can tell a dead endpoint from a bad payload.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The URL or the HTTP client could not be built.
    #[error("Could not build request: {0}")]
    Request(#[source] BoxError),

    /// DNS, connect, TLS, timeout, or reading the body failed.
    #[error("Could not read response: {0}")]
    Transport(#[source] reqwest::Error),

    /// The body is not JSON or does not match the expected schema.
    #[error("Could not decode {schema}: {source}")]
    Decode {
        schema: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl WeatherError {
    pub fn is_request(&self) -> bool {
        matches!(self, WeatherError::Request(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, WeatherError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, WeatherError::Decode { .. })
    }
}

impl From<url::ParseError> for WeatherError {
    fn from(err: url::ParseError) -> Self {
        WeatherError::Request(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_errors_are_request_errors() {
        let err: WeatherError = url::Url::parse("not a url").unwrap_err().into();
        assert!(err.is_request());
        assert!(!err.is_transport());
        assert!(err.to_string().starts_with("Could not build request"));
    }

    #[test]
    fn decode_error_names_schema() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = WeatherError::Decode {
            schema: "forecast",
            source,
        };
        assert!(err.is_decode());
        assert!(err.to_string().contains("Could not decode forecast"));
    }
}
