use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::error::SoapError;

// Where the reader is relative to the SOAP Body
enum Stage {
    SeekingBody,
    InBody,
    InResponse,
    InResult(String),
}

// Walks the envelope; `Some` from a handler ends the walk
struct ScalarWalk {
    stage: Stage,
    depth: usize,
    body_depth: usize,
}

type Step = Option<Result<String, SoapError>>;

impl ScalarWalk {
    fn new() -> Self {
        Self {
            stage: Stage::SeekingBody,
            depth: 0,
            body_depth: 0,
        }
    }

    fn result_depth(&self) -> usize {
        self.body_depth + 2
    }

    fn on_start(&mut self, name: &str, reader: &mut Reader<&[u8]>) -> Step {
        self.depth += 1;
        match self.stage {
            Stage::SeekingBody if name == "Body" => {
                self.stage = Stage::InBody;
                self.body_depth = self.depth;
            }
            Stage::InBody if name == "Fault" => {
                return Some(read_fault(reader).and_then(Err));
            }
            Stage::InBody => self.stage = Stage::InResponse,
            Stage::InResponse if self.depth == self.result_depth() => {
                self.stage = Stage::InResult(String::new());
            }
            _ => {}
        }
        None
    }

    fn on_empty(&self, name: &str) -> Step {
        match self.stage {
            Stage::InBody if name == "Fault" => Some(Err(SoapError::Fault {
                code: String::new(),
                reason: String::new(),
            })),
            Stage::InBody | Stage::InResponse => Some(Err(SoapError::NoResult)),
            _ => None,
        }
    }

    fn on_text(&mut self, text: &str) {
        let at_result = self.depth == self.result_depth();
        if let Stage::InResult(buf) = &mut self.stage
            && at_result
        {
            buf.push_str(text);
        }
    }

    fn on_end(&mut self) -> Step {
        let at_result = self.depth == self.result_depth();
        let above_result = self.depth < self.result_depth();
        let step = match &mut self.stage {
            Stage::InResult(buf) if at_result => {
                let value = std::mem::take(buf);
                Some(if value.is_empty() {
                    Err(SoapError::NoResult)
                } else {
                    Ok(value)
                })
            }
            Stage::InResponse | Stage::InBody if above_result => {
                Some(Err(SoapError::NoResult))
            }
            _ => None,
        };
        self.depth = self.depth.saturating_sub(1);
        step
    }

    fn on_eof(&self) -> SoapError {
        match self.stage {
            Stage::SeekingBody => SoapError::Malformed("missing SOAP Body".to_owned()),
            _ => SoapError::Malformed("unexpected end of document".to_owned()),
        }
    }
}

/// Extract the scalar result from a SOAP response.
///
/// The result is the text of the first child of the first element inside
/// `Body` (`<XResponse><XResult>value</XResult></XResponse>`). Element names
/// are matched by local name so any prefix binding is accepted. A `Fault`
/// inside `Body` is decoded from either the SOAP 1.2 (`Code/Value`,
/// `Reason/Text`) or SOAP 1.1 (`faultcode`, `faultstring`) layout.
///
/// # Errors
/// - [`SoapError::Fault`] when the body carries a fault
/// - [`SoapError::NoResult`] when the response element, its result child or
///   the result text is missing
/// - [`SoapError::Malformed`] when the document is not XML or has no `Body`
pub fn decode_scalar(xml: &str) -> Result<String, SoapError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut walk = ScalarWalk::new();

    loop {
        let step = match reader.read_event().map_err(SoapError::malformed)? {
            Event::Start(e) => walk.on_start(&local_name(&e), &mut reader),
            Event::Empty(e) => walk.on_empty(&local_name(&e)),
            Event::Text(t) => {
                walk.on_text(&t.unescape().map_err(SoapError::malformed)?);
                None
            }
            Event::CData(c) => {
                walk.on_text(&String::from_utf8_lossy(&c.into_inner()));
                None
            }
            Event::End(_) => walk.on_end(),
            Event::Eof => return Err(walk.on_eof()),
            _ => None,
        };
        if let Some(done) = step {
            return done;
        }
    }
}

/// Read a `Fault` element whose start tag was just consumed.
fn read_fault(reader: &mut Reader<&[u8]>) -> Result<SoapError, SoapError> {
    let mut path: Vec<String> = Vec::new();
    let mut code = String::new();
    let mut reason = String::new();

    loop {
        match reader.read_event().map_err(SoapError::malformed)? {
            Event::Start(e) => path.push(local_name(&e)),
            Event::Text(t) => {
                let text = t.unescape().map_err(SoapError::malformed)?;
                let path: Vec<&str> = path.iter().map(String::as_str).collect();
                match path.as_slice() {
                    ["Code", "Value"] | ["faultcode"] if code.is_empty() => {
                        code = text.into_owned();
                    }
                    ["Reason", "Text"] | ["faultstring"] if reason.is_empty() => {
                        reason = text.into_owned();
                    }
                    _ => {}
                }
            }
            Event::End(_) => {
                if path.pop().is_none() {
                    return Ok(SoapError::Fault { code, reason });
                }
            }
            Event::Eof => {
                return Err(SoapError::Malformed("unterminated SOAP Fault".to_owned()));
            }
            _ => {}
        }
    }
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}
