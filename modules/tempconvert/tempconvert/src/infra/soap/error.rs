use std::fmt;

use tempconvert_http::HttpError;
use thiserror::Error;

use crate::domain::error::DomainError;

/// Failures while encoding, exchanging or decoding a SOAP message
#[derive(Error, Debug)]
pub enum SoapError {
    #[error("HTTP exchange failed: {0}")]
    Http(#[from] HttpError),

    #[error("failed to encode SOAP envelope: {0}")]
    Encode(String),

    #[error("malformed SOAP response: {0}")]
    Malformed(String),

    #[error("SOAP fault {code}: {reason}")]
    Fault { code: String, reason: String },

    #[error("SOAP response carries no result value")]
    NoResult,
}

impl SoapError {
    pub(crate) fn encode(e: impl fmt::Display) -> Self {
        Self::Encode(e.to_string())
    }

    pub(crate) fn malformed(e: impl fmt::Display) -> Self {
        Self::Malformed(e.to_string())
    }
}

impl From<SoapError> for DomainError {
    fn from(e: SoapError) -> Self {
        match e {
            SoapError::Http(HttpError::HttpStatus { status, .. }) => {
                DomainError::Status(status.as_u16())
            }
            SoapError::Http(other) => DomainError::Transport(other.to_string()),
            SoapError::Encode(msg) => DomainError::Encode(msg),
            SoapError::Malformed(msg) => DomainError::MalformedResponse(msg),
            SoapError::Fault { code, reason } => DomainError::Fault { code, reason },
            SoapError::NoResult => DomainError::NoResult,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_status_error_keeps_code() {
        let err = SoapError::Http(HttpError::HttpStatus {
            status: http_status(502),
            body_preview: "bad gateway".to_owned(),
            content_type: None,
        });
        assert_eq!(DomainError::from(err), DomainError::Status(502));
    }

    #[test]
    fn test_timeout_becomes_transport() {
        let err = SoapError::Http(HttpError::Timeout(Duration::from_secs(30)));
        assert!(matches!(DomainError::from(err), DomainError::Transport(msg) if msg.contains("timed out")));
    }

    #[test]
    fn test_fault_passes_through() {
        let err = SoapError::Fault {
            code: "soap:Receiver".to_owned(),
            reason: "boom".to_owned(),
        };
        assert_eq!(
            DomainError::from(err),
            DomainError::Fault {
                code: "soap:Receiver".to_owned(),
                reason: "boom".to_owned(),
            }
        );
    }

    fn http_status(code: u16) -> tempconvert_http::StatusCode {
        tempconvert_http::StatusCode::from_u16(code).unwrap()
    }
}
