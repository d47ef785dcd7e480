use tempconvert_sdk::ConvertError;
use thiserror::Error;

/// Domain-specific errors for the conversion service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("remote returned HTTP {0}")]
    Status(u16),

    #[error("SOAP fault {code}: {reason}")]
    Fault { code: String, reason: String },

    #[error("malformed SOAP response: {0}")]
    MalformedResponse(String),

    #[error("SOAP response carries no result value")]
    NoResult,

    #[error("failed to build SOAP request: {0}")]
    Encode(String),
}

impl From<DomainError> for ConvertError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Transport(msg) => ConvertError::Transport(msg),
            DomainError::Status(status) => ConvertError::Status { status },
            DomainError::Fault { code, reason } => ConvertError::Fault { code, reason },
            DomainError::MalformedResponse(msg) => ConvertError::MalformedResponse(msg),
            DomainError::NoResult => {
                ConvertError::MalformedResponse("response carries no result value".to_owned())
            }
            DomainError::Encode(msg) => ConvertError::Internal(msg),
        }
    }
}
