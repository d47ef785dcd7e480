//! Temperature conversion API traits and errors
//!
//! Contract traits for the conversion client and the host reachability query.

use async_trait::async_trait;

use crate::models::{ConversionRequest, ConversionResult};

/// Host network status query.
///
/// Implementations must re-evaluate on every call; the answer is never cached.
pub trait NetworkStatus: Send + Sync {
    /// `true` iff the host reports an active network transport.
    fn is_reachable(&self) -> bool;
}

/// Temperature conversion client.
///
/// Calls are network round trips. Run them on a worker task, never on the
/// task that drives the view.
#[async_trait]
pub trait TemperatureConverterClient: Send + Sync {
    /// Perform one conversion and return the converted value verbatim.
    ///
    /// Never retries.
    ///
    /// # Errors
    /// Returns [`ConvertError`] describing the transport, status, fault or
    /// decoding failure.
    async fn try_convert(&self, request: &ConversionRequest) -> Result<String, ConvertError>;

    /// Perform one conversion, collapsing any failure to an absent value.
    ///
    /// The structured cause is logged here and not passed on.
    async fn convert(&self, request: &ConversionRequest) -> ConversionResult {
        let direction = request.direction();
        match self.try_convert(request).await {
            Ok(value) => ConversionResult::success(direction, value),
            Err(e) => {
                tracing::warn!(
                    operation = %direction,
                    error = %e,
                    "temperature conversion failed"
                );
                ConversionResult::failure(direction)
            }
        }
    }
}

/// Error type for conversion calls
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("remote returned HTTP {status}")]
    Status { status: u16 },

    #[error("remote fault {code}: {reason}")]
    Fault { code: String, reason: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Direction;

    struct FixedClient(Option<&'static str>);

    #[async_trait]
    impl TemperatureConverterClient for FixedClient {
        async fn try_convert(&self, _request: &ConversionRequest) -> Result<String, ConvertError> {
            self.0
                .map(str::to_owned)
                .ok_or_else(|| ConvertError::Transport("connection reset".to_owned()))
        }
    }

    #[tokio::test]
    async fn test_convert_wraps_success() {
        let request = ConversionRequest::new(Direction::CelsiusToFahrenheit, "100").unwrap();
        let result = FixedClient(Some("212")).convert(&request).await;
        assert_eq!(
            result,
            ConversionResult::success(Direction::CelsiusToFahrenheit, "212")
        );
    }

    #[tokio::test]
    async fn test_convert_collapses_error_to_absent() {
        let request = ConversionRequest::new(Direction::FahrenheitToCelsius, "212").unwrap();
        let result = FixedClient(None).convert(&request).await;
        assert_eq!(result, ConversionResult::failure(Direction::FahrenheitToCelsius));
    }

    #[test]
    fn test_error_display() {
        let err = ConvertError::Fault {
            code: "soap:Receiver".to_owned(),
            reason: "Server was unable to process request".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "remote fault soap:Receiver: Server was unable to process request"
        );
    }
}
