use std::time::Duration;

use serde::{Deserialize, Serialize};
use tempconvert_http::{HttpClientConfig, TlsRootConfig, TransportSecurity};
use tempconvert_sdk::{DEFAULT_ENDPOINT, DEFAULT_NAMESPACE};

/// Configuration for the temperature conversion module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TempConvertConfig {
    /// SOAP endpoint the envelopes are posted to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// XML namespace of the service operations; also the SOAP action prefix
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Permit plain `http://` endpoints (local mocks and test doubles)
    #[serde(default)]
    pub allow_insecure_http: bool,

    /// Trust anchors for TLS server verification
    #[serde(default)]
    pub tls_roots: TlsRoots,

    /// Upper bound on one SOAP round trip, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Which root certificate set verifies the remote service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TlsRoots {
    /// Mozilla roots compiled into the binary
    #[default]
    Webpki,
    /// Roots from the operating system store
    Native,
}

impl Default for TempConvertConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            namespace: default_namespace(),
            user_agent: default_user_agent(),
            allow_insecure_http: false,
            tls_roots: TlsRoots::default(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl TempConvertConfig {
    /// HTTP client settings derived from this configuration.
    ///
    /// Body limit and pool sizing keep the HTTP client defaults.
    #[must_use]
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            user_agent: self.user_agent.clone(),
            transport: if self.allow_insecure_http {
                TransportSecurity::AllowInsecureHttp
            } else {
                TransportSecurity::TlsOnly
            },
            tls_roots: match self.tls_roots {
                TlsRoots::Webpki => TlsRootConfig::WebPki,
                TlsRoots::Native => TlsRootConfig::Native,
            },
            ..HttpClientConfig::default()
        }
    }

    /// Reject settings the transport would only refuse at request time.
    ///
    /// # Errors
    /// Returns [`ConfigError`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rest = if let Some(rest) = self.endpoint.strip_prefix("https://") {
            rest
        } else if let Some(rest) = self.endpoint.strip_prefix("http://") {
            if !self.allow_insecure_http {
                return Err(ConfigError::InsecureEndpoint(self.endpoint.clone()));
            }
            rest
        } else {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        };
        if rest.is_empty() || rest.starts_with('/') {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }
        if self.namespace.is_empty() {
            return Err(ConfigError::EmptyNamespace);
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

/// Configuration validation failures
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("endpoint must be an absolute http(s) URL with a host: {0}")]
    InvalidEndpoint(String),

    #[error("plain http endpoint {0} requires allow_insecure_http")]
    InsecureEndpoint(String),

    #[error("namespace must not be empty")]
    EmptyNamespace,

    #[error("request_timeout_secs must be at least 1")]
    ZeroTimeout,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_owned()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_owned()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("tempconvert/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_public_service() {
        let config = TempConvertConfig::default();
        assert_eq!(
            config.endpoint,
            "https://www.w3schools.com/xml/tempconvert.asmx"
        );
        assert_eq!(config.namespace, "https://www.w3schools.com/xml/");
        assert!(config.user_agent.starts_with("tempconvert/"));
        assert!(!config.allow_insecure_http);
        assert_eq!(config.tls_roots, TlsRoots::Webpki);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: TempConvertConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.namespace, DEFAULT_NAMESPACE);
    }

    #[test]
    fn test_partial_document_overrides() {
        let config: TempConvertConfig = serde_json::from_str(
            r#"{"endpoint": "http://127.0.0.1:8080/tempconvert.asmx", "allow_insecure_http": true, "tls_roots": "native"}"#,
        )
        .unwrap();
        assert_eq!(config.endpoint, "http://127.0.0.1:8080/tempconvert.asmx");
        assert!(config.allow_insecure_http);
        assert_eq!(config.tls_roots, TlsRoots::Native);
        assert_eq!(config.namespace, DEFAULT_NAMESPACE);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<TempConvertConfig, _> =
            serde_json::from_str(r#"{"endpont": "https://example.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate() {
        assert_eq!(TempConvertConfig::default().validate(), Ok(()));

        let insecure = TempConvertConfig {
            endpoint: "http://127.0.0.1:8080/tempconvert.asmx".to_owned(),
            ..TempConvertConfig::default()
        };
        assert!(matches!(
            insecure.validate(),
            Err(ConfigError::InsecureEndpoint(_))
        ));
        let allowed = TempConvertConfig {
            allow_insecure_http: true,
            ..insecure
        };
        assert_eq!(allowed.validate(), Ok(()));

        for endpoint in ["ftp://example.com/x", "tempconvert.asmx", "https:///x", "https://"] {
            let config = TempConvertConfig {
                endpoint: endpoint.to_owned(),
                ..TempConvertConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidEndpoint(_))),
                "{endpoint} should be rejected"
            );
        }

        let no_namespace = TempConvertConfig {
            namespace: String::new(),
            ..TempConvertConfig::default()
        };
        assert_eq!(no_namespace.validate(), Err(ConfigError::EmptyNamespace));

        let no_timeout = TempConvertConfig {
            request_timeout_secs: 0,
            ..TempConvertConfig::default()
        };
        assert_eq!(no_timeout.validate(), Err(ConfigError::ZeroTimeout));
    }

    #[test]
    fn test_http_client_config_mapping() {
        let config = TempConvertConfig {
            user_agent: "tempconvert-test/1.0".to_owned(),
            allow_insecure_http: true,
            tls_roots: TlsRoots::Native,
            request_timeout_secs: 5,
            ..TempConvertConfig::default()
        };
        let http = config.http_client_config();
        assert_eq!(http.user_agent, "tempconvert-test/1.0");
        assert_eq!(http.request_timeout, Duration::from_secs(5));
        assert_eq!(http.transport, TransportSecurity::AllowInsecureHttp);
        assert_eq!(http.tls_roots, TlsRootConfig::Native);
        assert_eq!(http.max_body_size, HttpClientConfig::default().max_body_size);

        let strict = TempConvertConfig::default().http_client_config();
        assert_eq!(strict.transport, TransportSecurity::TlsOnly);
        assert_eq!(strict.tls_roots, TlsRootConfig::WebPki);
    }
}
