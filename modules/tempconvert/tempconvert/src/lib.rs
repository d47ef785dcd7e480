//! Temperature conversion module
//!
//! Converts temperatures between Celsius and Fahrenheit through the public
//! `tempconvert.asmx` SOAP service.
//!
//! ## Architecture
//!
//! - `domain/` - Direction table and the call into a SOAP transport port
//! - `infra/soap/` - SOAP 1.2 envelope codec and the HTTP transport
//! - `infra/network.rs` - Host reachability check
//! - `client.rs` - `TemperatureConverterClient` implementation
//! - `presenter/` - Idle/in-flight controller that drives a view and runs
//!   each conversion on a worker task
//! - `module.rs` - Wiring from configuration
//!
//! Consumers that only need the contract should depend on `tempconvert-sdk`.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === MODULE DEFINITION ===
mod module;
pub use module::TempConvertModule;

pub mod config;
pub use config::{ConfigError, TempConvertConfig, TlsRoots};

mod client;
pub use client::SoapTemperatureConverter;

pub mod presenter;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
