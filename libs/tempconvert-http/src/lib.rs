#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![warn(warnings)]

//! HTTP client infrastructure for the temperature conversion service
//!
//! This crate provides a hyper-based HTTP client with:
//! - Automatic TLS via rustls (HTTPS only by default)
//! - Connection pooling
//! - A per-request timeout
//! - User-Agent header injection
//! - **Transparent response decompression** (gzip, brotli, deflate)
//! - Response body size limits
//!
//! Requests are never retried. A failed call is reported once and the caller
//! decides what to do with it.
//!
//! # Example
//!
//! ```ignore
//! use tempconvert_http::{HttpClientBuilder, HttpClientConfig};
//!
//! let client = HttpClientBuilder::with_config(HttpClientConfig {
//!     user_agent: "my-app/1.0".to_owned(),
//!     ..HttpClientConfig::default()
//! })
//! .build()?;
//!
//! let xml = client
//!     .post("https://www.w3schools.com/xml/tempconvert.asmx")
//!     .header("content-type", "application/soap+xml; charset=utf-8")
//!     .body_string(envelope)
//!     .send()
//!     .await?
//!     .checked_bytes()
//!     .await?;
//! ```

mod builder;
mod client;
mod config;
mod error;
mod request;
mod response;
mod tls;

pub use builder::HttpClientBuilder;
pub use client::HttpClient;
pub use config::{HttpClientConfig, TlsRootConfig, TransportSecurity};
pub use error::HttpError;
pub use request::RequestBuilder;
pub use response::HttpResponse;

/// Re-exported so callers can match on [`HttpError::HttpStatus`] without a direct `http` dependency
pub use http::StatusCode;
