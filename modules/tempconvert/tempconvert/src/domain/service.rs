use std::sync::Arc;

use tempconvert_sdk::ConversionRequest;
use tracing::{debug, instrument};

use crate::domain::error::DomainError;
use crate::domain::ports::{SoapRequest, SoapTransport};

/// Conversion service: maps a request onto its SOAP operation and calls it.
#[derive(Clone)]
pub struct Service {
    transport: Arc<dyn SoapTransport>,
    namespace: String,
}

impl Service {
    #[must_use]
    pub fn new(transport: Arc<dyn SoapTransport>, namespace: impl Into<String>) -> Self {
        Self {
            transport,
            namespace: namespace.into(),
        }
    }

    /// Operation call for `request`: the direction picks the operation and
    /// the single field name, and the input value is sent as typed.
    #[must_use]
    pub fn soap_request(&self, request: &ConversionRequest) -> SoapRequest {
        let direction = request.direction();
        SoapRequest::new(self.namespace.as_str(), direction.operation())
            .param(direction.field_name(), request.input_value())
    }

    /// Perform one remote conversion. Exactly one call, no retries.
    ///
    /// # Errors
    /// Returns whatever the transport reports; see [`DomainError`].
    #[instrument(skip(self, request), fields(operation = %request.direction()))]
    pub async fn convert(&self, request: &ConversionRequest) -> Result<String, DomainError> {
        let call = self.soap_request(request);
        debug!(action = %call.action(), "calling remote conversion");
        let value = self.transport.call(&call).await?;
        debug!(result = %value, "remote conversion returned");
        Ok(value)
    }
}
