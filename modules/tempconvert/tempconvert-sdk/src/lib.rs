//! Temperature conversion SDK
//!
//! This crate provides everything needed to consume the conversion service:
//! - API traits (`TemperatureConverterClient`, `NetworkStatus`)
//! - Request/result models (`Direction`, `Scale`, `ConversionRequest`, `ConversionResult`)
//! - Error types (`ConvertError`, `InvalidRequest`)
//!
//! ## Usage
//!
//! ```ignore
//! use tempconvert_sdk::{ConversionRequest, Direction, TemperatureConverterClient};
//!
//! let request = ConversionRequest::new(Direction::CelsiusToFahrenheit, "100")?;
//! let result = client.convert(&request).await;
//! assert_eq!(result.output_value.as_deref(), Some("212"));
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

mod api;
mod models;

pub use api::{ConvertError, NetworkStatus, TemperatureConverterClient};
pub use models::{ConversionRequest, ConversionResult, Direction, InvalidRequest, Scale};

/// Default SOAP endpoint of the conversion service
pub const DEFAULT_ENDPOINT: &str = "https://www.w3schools.com/xml/tempconvert.asmx";

/// Default XML namespace of the conversion service operations
pub const DEFAULT_NAMESPACE: &str = "https://www.w3schools.com/xml/";
