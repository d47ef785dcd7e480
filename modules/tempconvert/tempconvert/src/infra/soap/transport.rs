use async_trait::async_trait;
use tempconvert_http::{HttpClient, HttpError};
use tracing::{debug, warn};

use super::envelope::{encode_envelope, soap12_content_type};
use super::error::SoapError;
use super::response::decode_scalar;
use crate::domain::error::DomainError;
use crate::domain::ports::{SoapRequest, SoapTransport};

const ACCEPT: &str = "application/soap+xml, text/xml";

/// SOAP 1.2 over HTTP POST.
///
/// `HttpClient` is `Clone + Send + Sync` and pools connections, so one
/// transport serves every conversion.
#[derive(Clone)]
pub struct HttpSoapTransport {
    http: HttpClient,
    endpoint: String,
}

impl HttpSoapTransport {
    #[must_use]
    pub fn new(http: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    async fn exchange(&self, request: &SoapRequest) -> Result<String, SoapError> {
        let envelope = encode_envelope(request)?;
        let action = request.action();

        debug!(endpoint = %self.endpoint, %action, "posting SOAP envelope");

        let response = self
            .http
            .post(&self.endpoint)
            .header("content-type", &soap12_content_type(&action))
            .header("accept", ACCEPT)
            .body_string(envelope)
            .send()
            .await?;

        match response.checked_bytes().await {
            Ok(body) => decode_scalar(&String::from_utf8_lossy(&body)),
            // SOAP 1.2 reports faults with a 4xx/5xx status; prefer the fault when one is present
            Err(HttpError::HttpStatus {
                status,
                body_preview,
                content_type,
            }) => match decode_scalar(&body_preview) {
                Err(fault @ SoapError::Fault { .. }) => Err(fault),
                _ => Err(SoapError::Http(HttpError::HttpStatus {
                    status,
                    body_preview,
                    content_type,
                })),
            },
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl SoapTransport for HttpSoapTransport {
    async fn call(&self, request: &SoapRequest) -> Result<String, DomainError> {
        self.exchange(request).await.map_err(|e| {
            warn!(endpoint = %self.endpoint, operation = %request.operation, error = %e, "SOAP call failed");
            DomainError::from(e)
        })
    }
}
