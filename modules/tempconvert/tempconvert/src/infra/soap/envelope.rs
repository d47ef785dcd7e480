use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::error::SoapError;
use crate::domain::ports::SoapRequest;

/// SOAP 1.2 envelope namespace
pub const SOAP12_ENVELOPE_NS: &str = "http://www.w3.org/2003/05/soap-envelope";

const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";

/// `Content-Type` for a SOAP 1.2 request; the action travels as a media type parameter.
#[must_use]
pub fn soap12_content_type(action: &str) -> String {
    format!("application/soap+xml; charset=utf-8; action=\"{action}\"")
}

/// Serialize `request` as a SOAP 1.2 envelope.
///
/// The operation element declares its namespace as the default namespace and
/// its parameters are unqualified children without type annotations, which
/// is the shape ASP.NET services bind against.
///
/// # Errors
/// Returns [`SoapError::Encode`] if the writer fails.
pub fn encode_envelope(request: &SoapRequest) -> Result<String, SoapError> {
    let mut writer = Writer::new(Vec::new());

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(SoapError::encode)?;
    writer
        .write_event(Event::Start(BytesStart::new("soap12:Envelope").with_attributes([
            ("xmlns:xsi", XSI_NS),
            ("xmlns:xsd", XSD_NS),
            ("xmlns:soap12", SOAP12_ENVELOPE_NS),
        ])))
        .map_err(SoapError::encode)?;
    writer
        .write_event(Event::Start(BytesStart::new("soap12:Body")))
        .map_err(SoapError::encode)?;
    writer
        .write_event(Event::Start(
            BytesStart::new(request.operation.as_str())
                .with_attributes([("xmlns", request.namespace.as_str())]),
        ))
        .map_err(SoapError::encode)?;

    for (name, value) in &request.params {
        writer
            .write_event(Event::Start(BytesStart::new(name.as_str())))
            .map_err(SoapError::encode)?;
        writer
            .write_event(Event::Text(BytesText::new(value)))
            .map_err(SoapError::encode)?;
        writer
            .write_event(Event::End(BytesEnd::new(name.as_str())))
            .map_err(SoapError::encode)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(request.operation.as_str())))
        .map_err(SoapError::encode)?;
    writer
        .write_event(Event::End(BytesEnd::new("soap12:Body")))
        .map_err(SoapError::encode)?;
    writer
        .write_event(Event::End(BytesEnd::new("soap12:Envelope")))
        .map_err(SoapError::encode)?;

    String::from_utf8(writer.into_inner()).map_err(SoapError::encode)
}
