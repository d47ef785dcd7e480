use async_trait::async_trait;
use tempconvert_sdk::{ConversionRequest, ConvertError, TemperatureConverterClient};

use crate::domain::service::Service;

/// [`TemperatureConverterClient`] backed by the SOAP conversion service.
#[derive(Clone)]
pub struct SoapTemperatureConverter {
    service: Service,
}

impl SoapTemperatureConverter {
    #[must_use]
    pub fn new(service: Service) -> Self {
        Self { service }
    }
}

#[async_trait]
impl TemperatureConverterClient for SoapTemperatureConverter {
    async fn try_convert(&self, request: &ConversionRequest) -> Result<String, ConvertError> {
        self.service.convert(request).await.map_err(Into::into)
    }
}
