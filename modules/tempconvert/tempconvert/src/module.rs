//! Temperature conversion module definition
//!
//! Builds the HTTP client, SOAP transport, domain service and reachability
//! check from a [`TempConvertConfig`] and hands out controllers bound to a view.

use std::sync::Arc;

use anyhow::{Context, Result};
use tempconvert_http::HttpClientBuilder;
use tempconvert_sdk::{NetworkStatus, TemperatureConverterClient};

use crate::client::SoapTemperatureConverter;
use crate::config::TempConvertConfig;
use crate::domain::service::Service;
use crate::infra::network::HostNetworkStatus;
use crate::infra::soap::HttpSoapTransport;
use crate::presenter::{ConversionController, ConverterView, ResultSink};

/// Wired conversion module.
#[derive(Clone)]
pub struct TempConvertModule {
    client: Arc<dyn TemperatureConverterClient>,
    network: Arc<dyn NetworkStatus>,
}

impl TempConvertModule {
    /// Wire the module against the host's real network interfaces.
    ///
    /// # Errors
    /// Fails on invalid configuration or when the HTTP client cannot be built.
    pub fn init(config: &TempConvertConfig) -> Result<Self> {
        Self::init_with_network(config, Arc::new(HostNetworkStatus::new()))
    }

    /// Wire the module with a caller-supplied reachability check.
    ///
    /// # Errors
    /// Fails on invalid configuration or when the HTTP client cannot be built.
    pub fn init_with_network(
        config: &TempConvertConfig,
        network: Arc<dyn NetworkStatus>,
    ) -> Result<Self> {
        tracing::info!(endpoint = %config.endpoint, "Initializing tempconvert module");
        config
            .validate()
            .context("invalid tempconvert configuration")?;

        let http = HttpClientBuilder::with_config(config.http_client_config())
            .build()
            .context("failed to build HTTP client for the conversion service")?;

        let transport = HttpSoapTransport::new(http, config.endpoint.as_str());
        let service = Service::new(Arc::new(transport), config.namespace.as_str());
        let client: Arc<dyn TemperatureConverterClient> =
            Arc::new(SoapTemperatureConverter::new(service));

        tracing::info!("tempconvert module initialized");
        Ok(Self { client, network })
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn TemperatureConverterClient> {
        Arc::clone(&self.client)
    }

    #[must_use]
    pub fn network(&self) -> Arc<dyn NetworkStatus> {
        Arc::clone(&self.network)
    }

    /// Controller bound to `view`, delivering results through `sink`.
    #[must_use]
    pub fn controller(&self, view: Arc<dyn ConverterView>, sink: ResultSink) -> ConversionController {
        ConversionController::new(self.client(), self.network(), view, sink)
    }
}
