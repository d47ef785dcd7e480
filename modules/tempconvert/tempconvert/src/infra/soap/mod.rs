//! SOAP 1.2 wire format and HTTP binding.

mod envelope;
mod error;
mod response;
mod transport;

pub use envelope::{SOAP12_ENVELOPE_NS, encode_envelope, soap12_content_type};
pub use error::SoapError;
pub use response::decode_scalar;
pub use transport::HttpSoapTransport;
