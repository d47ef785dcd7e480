//! Outbound port for remote procedure calls.

use async_trait::async_trait;

use crate::domain::error::DomainError;

/// A single SOAP operation call: one operation element with string children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapRequest {
    /// XML namespace of the operation element
    pub namespace: String,
    /// Operation element name
    pub operation: String,
    /// Child elements in document order, as `(name, value)`
    pub params: Vec<(String, String)>,
}

impl SoapRequest {
    #[must_use]
    pub fn new(namespace: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            operation: operation.into(),
            params: Vec::new(),
        }
    }

    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// SOAP action: namespace immediately followed by the operation name.
    #[must_use]
    pub fn action(&self) -> String {
        format!("{}{}", self.namespace, self.operation)
    }
}

/// Carries a [`SoapRequest`] to the remote service and returns the scalar result.
#[async_trait]
pub trait SoapTransport: Send + Sync {
    /// # Errors
    /// Transport, status, fault and decoding failures as [`DomainError`].
    async fn call(&self, request: &SoapRequest) -> Result<String, DomainError>;
}
