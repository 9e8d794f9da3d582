//! Front-end configuration loaded via OrthoConfig.
//!
//! Values layer from defaults, configuration files, `HBNB_*` environment
//! variables and command-line flags. Enumerated settings are kept as strings
//! so a bad value surfaces as a typed error at startup rather than a generic
//! deserialisation failure.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::{SessionTtl, SessionTtlError};
use crate::outbound::hbnb_api::{ReviewEndpoint, ReviewEndpointParseError};

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api/v1";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Which catalogue backs the pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSourceKind {
    /// The HBnB REST API.
    #[default]
    Remote,
    /// The built-in fixture catalogue.
    Fixture,
}

impl FromStr for DataSourceKind {
    type Err = SettingsError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "fixture" => Ok(Self::Fixture),
            other => Err(SettingsError::DataSource(other.to_owned())),
        }
    }
}

/// Invalid configuration value.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// `api_base_url` is not an absolute URL.
    #[error("invalid api_base_url '{value}': {source}")]
    ApiBaseUrl {
        /// Raw configured value.
        value: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },
    /// `data_source` is neither `remote` nor `fixture`.
    #[error("unknown data_source '{0}'; expected remote|fixture")]
    DataSource(String),
    /// `bind_addr` is not a socket address.
    #[error("invalid bind_addr '{value}': {source}")]
    BindAddr {
        /// Raw configured value.
        value: String,
        /// Parser failure.
        #[source]
        source: std::net::AddrParseError,
    },
    /// `request_timeout_secs` is zero.
    #[error("request_timeout_secs must be positive")]
    ZeroTimeout,
    /// `session_ttl_days` is out of range.
    #[error(transparent)]
    SessionTtl(#[from] SessionTtlError),
    /// `review_endpoint` is unknown.
    #[error(transparent)]
    ReviewEndpoint(#[from] ReviewEndpointParseError),
}

/// Front-end settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HBNB")]
pub struct FrontendSettings {
    /// Base URL of the HBnB REST API.
    pub api_base_url: Option<String>,
    /// `remote` or `fixture`.
    pub data_source: Option<String>,
    /// Serve fixtures when the remote API is unreachable.
    pub fixture_fallback: Option<bool>,
    /// Per-request timeout for API calls, in seconds.
    pub request_timeout_secs: Option<u64>,
    /// Session lifetime in days.
    pub session_ttl_days: Option<u64>,
    /// Listen address for the HTTP server.
    pub bind_addr: Option<String>,
    /// Review submission route: `place` or `review`.
    pub review_endpoint: Option<String>,
}

impl FrontendSettings {
    /// Parsed API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ApiBaseUrl`] for a malformed URL.
    pub fn api_base_url(&self) -> Result<Url, SettingsError> {
        let raw = self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL);
        Url::parse(raw).map_err(|source| SettingsError::ApiBaseUrl {
            value: raw.to_owned(),
            source,
        })
    }

    /// Selected primary data source.
    pub fn data_source(&self) -> Result<DataSourceKind, SettingsError> {
        self.data_source
            .as_deref()
            .map_or(Ok(DataSourceKind::default()), DataSourceKind::from_str)
    }

    /// Whether remote reads degrade to fixtures. Defaults to `true`.
    pub fn fixture_fallback(&self) -> bool {
        self.fixture_fallback.unwrap_or(true)
    }

    /// API request timeout.
    pub fn request_timeout(&self) -> Result<Duration, SettingsError> {
        match self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
        {
            0 => Err(SettingsError::ZeroTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }

    /// Session lifetime.
    pub fn session_ttl(&self) -> Result<SessionTtl, SettingsError> {
        match self.session_ttl_days {
            Some(days) => Ok(SessionTtl::days_checked(days)?),
            None => Ok(SessionTtl::default()),
        }
    }

    /// Listen address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|source| SettingsError::BindAddr {
            value: raw.to_owned(),
            source,
        })
    }

    /// Review submission route.
    pub fn review_endpoint(&self) -> Result<ReviewEndpoint, SettingsError> {
        self.review_endpoint
            .as_deref()
            .map_or(Ok(ReviewEndpoint::default()), |raw| Ok(raw.parse()?))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 7] = [
        "HBNB_API_BASE_URL",
        "HBNB_DATA_SOURCE",
        "HBNB_FIXTURE_FALLBACK",
        "HBNB_REQUEST_TIMEOUT_SECS",
        "HBNB_SESSION_TTL_DAYS",
        "HBNB_BIND_ADDR",
        "HBNB_REVIEW_ENDPOINT",
    ];

    fn load_from_empty_args() -> FrontendSettings {
        FrontendSettings::load_from_iter([OsString::from("frontend")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.api_base_url().expect("url").as_str(),
            DEFAULT_API_BASE_URL
        );
        assert_eq!(
            settings.data_source().expect("source"),
            DataSourceKind::Remote
        );
        assert!(settings.fixture_fallback());
        assert_eq!(
            settings.request_timeout().expect("timeout"),
            Duration::from_secs(10)
        );
        assert_eq!(settings.session_ttl().expect("ttl").days(), 7);
        assert_eq!(
            settings.bind_addr().expect("addr"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("addr literal")
        );
        assert_eq!(
            settings.review_endpoint().expect("endpoint"),
            ReviewEndpoint::Place
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("HBNB_API_BASE_URL", Some("https://api.hbnb.test/v2".to_owned())),
            ("HBNB_DATA_SOURCE", Some("fixture".to_owned())),
            ("HBNB_FIXTURE_FALLBACK", Some("false".to_owned())),
            ("HBNB_REQUEST_TIMEOUT_SECS", Some("3".to_owned())),
            ("HBNB_SESSION_TTL_DAYS", Some("1".to_owned())),
            ("HBNB_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            ("HBNB_REVIEW_ENDPOINT", Some("review".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.api_base_url().expect("url").as_str(),
            "https://api.hbnb.test/v2"
        );
        assert_eq!(
            settings.data_source().expect("source"),
            DataSourceKind::Fixture
        );
        assert!(!settings.fixture_fallback());
        assert_eq!(
            settings.request_timeout().expect("timeout"),
            Duration::from_secs(3)
        );
        assert_eq!(settings.session_ttl().expect("ttl").days(), 1);
        assert_eq!(settings.bind_addr().expect("addr").port(), 9000);
        assert_eq!(
            settings.review_endpoint().expect("endpoint"),
            ReviewEndpoint::Review
        );
    }

    #[rstest]
    #[case("HBNB_DATA_SOURCE", "carrier-pigeon")]
    #[case("HBNB_REQUEST_TIMEOUT_SECS", "0")]
    #[case("HBNB_SESSION_TTL_DAYS", "90")]
    #[case("HBNB_BIND_ADDR", "localhost")]
    #[case("HBNB_REVIEW_ENDPOINT", "comments")]
    #[case("HBNB_API_BASE_URL", "not a url")]
    fn invalid_values_surface_as_errors(#[case] var: &str, #[case] value: &str) {
        let _guard = lock_env(
            VARS.map(|name| (name, (name == var).then(|| value.to_owned()))),
        );

        let settings = load_from_empty_args();
        let failures = [
            settings.api_base_url().err().map(|e| e.to_string()),
            settings.data_source().err().map(|e| e.to_string()),
            settings.request_timeout().err().map(|e| e.to_string()),
            settings.session_ttl().err().map(|e| e.to_string()),
            settings.bind_addr().err().map(|e| e.to_string()),
            settings.review_endpoint().err().map(|e| e.to_string()),
        ];
        assert_eq!(failures.iter().flatten().count(), 1, "{failures:?}");
    }
}
