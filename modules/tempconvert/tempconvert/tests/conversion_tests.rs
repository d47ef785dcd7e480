#![allow(clippy::unwrap_used, clippy::expect_used, clippy::use_debug)]

//! End-to-end conversions against a mock SOAP endpoint.

use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use parking_lot::Mutex;
use tempconvert::infra::network::StaticNetworkStatus;
use tempconvert::presenter::{
    ConversionState, ConverterView, Notice, TriggerOutcome, result_channel,
};
use tempconvert::{TempConvertConfig, TempConvertModule};
use tempconvert_sdk::{
    ConversionRequest, ConvertError, Direction, Scale, TemperatureConverterClient,
};
use tokio_util::sync::CancellationToken;

const NS: &str = "https://www.w3schools.com/xml/";

fn response_envelope(operation: &str, value: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?><soap:Envelope xmlns:soap="http://www.w3.org/2003/05/soap-envelope" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:xsd="http://www.w3.org/2001/XMLSchema"><soap:Body><{operation}Response xmlns="{NS}"><{operation}Result>{value}</{operation}Result></{operation}Response></soap:Body></soap:Envelope>"#
    )
}

fn module_for(server: &MockServer, online: bool) -> TempConvertModule {
    let config = TempConvertConfig {
        endpoint: server.url("/xml/tempconvert.asmx"),
        allow_insecure_http: true,
        ..TempConvertConfig::default()
    };
    TempConvertModule::init_with_network(&config, Arc::new(StaticNetworkStatus(online))).unwrap()
}

#[derive(Default)]
struct TextView {
    celsius: Mutex<String>,
    fahrenheit: Mutex<String>,
    enabled: Mutex<bool>,
    busy: Mutex<bool>,
    notices: Mutex<Vec<Notice>>,
}

impl ConverterView for TextView {
    fn field_text(&self, scale: Scale) -> String {
        match scale {
            Scale::Celsius => self.celsius.lock().clone(),
            Scale::Fahrenheit => self.fahrenheit.lock().clone(),
        }
    }

    fn set_field_text(&self, scale: Scale, text: &str) {
        let field = match scale {
            Scale::Celsius => &self.celsius,
            Scale::Fahrenheit => &self.fahrenheit,
        };
        *field.lock() = text.to_owned();
    }

    fn set_triggers_enabled(&self, enabled: bool) {
        *self.enabled.lock() = enabled;
    }

    fn set_busy(&self, busy: bool) {
        *self.busy.lock() = busy;
    }

    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}

#[tokio::test]
async fn test_client_converts_celsius_to_fahrenheit() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/xml/tempconvert.asmx")
            .header(
                "content-type",
                r#"application/soap+xml; charset=utf-8; action="https://www.w3schools.com/xml/CelsiusToFahrenheit""#,
            )
            .body_includes("<Celsius>100</Celsius>");
        then.status(200)
            .header("content-type", "application/soap+xml; charset=utf-8")
            .body(response_envelope("CelsiusToFahrenheit", "212"));
    });

    let client = module_for(&server, true).client();
    let request = ConversionRequest::new(Direction::CelsiusToFahrenheit, "100").unwrap();
    let result = client.convert(&request).await;

    assert_eq!(result.output_value.as_deref(), Some("212"));
    mock.assert();
}

#[tokio::test]
async fn test_client_reports_fault_cause() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/xml/tempconvert.asmx");
        then.status(500).body(
            r#"<soap:Envelope xmlns:soap="http://www.w3.org/2003/05/soap-envelope"><soap:Body><soap:Fault><soap:Code><soap:Value>soap:Receiver</soap:Value></soap:Code><soap:Reason><soap:Text xml:lang="en">Server was unable to process request.</soap:Text></soap:Reason></soap:Fault></soap:Body></soap:Envelope>"#,
        );
    });

    let client = module_for(&server, true).client();
    let request = ConversionRequest::new(Direction::FahrenheitToCelsius, "212").unwrap();

    match client.try_convert(&request).await.unwrap_err() {
        ConvertError::Fault { code, reason } => {
            assert_eq!(code, "soap:Receiver");
            assert_eq!(reason, "Server was unable to process request.");
        }
        other => panic!("expected fault, got {other}"),
    }
    assert!(!client.convert(&request).await.is_success());
}

#[tokio::test]
async fn test_controller_round_trip_through_mock_service() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/xml/tempconvert.asmx")
            .body_includes(r#"<FahrenheitToCelsius xmlns="https://www.w3schools.com/xml/">"#)
            .body_includes("<Fahrenheit>212</Fahrenheit>");
        then.status(200)
            .delay(Duration::from_millis(50))
            .body(response_envelope("FahrenheitToCelsius", "100"));
    });

    let module = module_for(&server, true);
    let view = Arc::new(TextView::default());
    view.set_field_text(Scale::Fahrenheit, "212");
    let (sink, mut results) = result_channel(CancellationToken::new());
    let controller = module.controller(view.clone(), sink);

    assert_eq!(
        controller.on_trigger_conversion(Direction::FahrenheitToCelsius),
        TriggerOutcome::Dispatched
    );
    assert!(!*view.enabled.lock());
    assert!(*view.busy.lock());

    let result = tokio::time::timeout(Duration::from_secs(5), results.recv())
        .await
        .expect("result in time")
        .expect("channel open");
    controller.on_result(result);

    assert_eq!(view.field_text(Scale::Celsius), "100");
    assert_eq!(view.field_text(Scale::Fahrenheit), "212");
    assert!(*view.enabled.lock());
    assert!(!*view.busy.lock());
    assert_eq!(controller.state(), ConversionState::Idle);
    mock.assert();
}

#[tokio::test]
async fn test_controller_empty_input_sends_nothing() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/xml/tempconvert.asmx");
        then.status(200)
            .body(response_envelope("FahrenheitToCelsius", "0"));
    });

    let module = module_for(&server, true);
    let view = Arc::new(TextView::default());
    let (sink, _results) = result_channel(CancellationToken::new());
    let controller = module.controller(view.clone(), sink);

    assert_eq!(
        controller.on_trigger_conversion(Direction::FahrenheitToCelsius),
        TriggerOutcome::Rejected(Notice::EmptyInput)
    );
    assert!(*view.enabled.lock());
    mock.assert_calls(0);
}

#[tokio::test]
async fn test_controller_offline_sends_nothing() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/xml/tempconvert.asmx");
        then.status(200)
            .body(response_envelope("CelsiusToFahrenheit", "212"));
    });

    let module = module_for(&server, false);
    let view = Arc::new(TextView::default());
    view.set_field_text(Scale::Celsius, "100");
    let (sink, _results) = result_channel(CancellationToken::new());
    let controller = module.controller(view.clone(), sink);

    assert_eq!(
        controller.on_trigger_conversion(Direction::CelsiusToFahrenheit),
        TriggerOutcome::Rejected(Notice::NotConnected)
    );
    assert_eq!(*view.notices.lock(), vec![Notice::NotConnected]);
    mock.assert_calls(0);
}

#[tokio::test]
async fn test_controller_server_error_surfaces_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/xml/tempconvert.asmx");
        then.status(503).body("Service Unavailable");
    });

    let module = module_for(&server, true);
    let view = Arc::new(TextView::default());
    view.set_field_text(Scale::Celsius, "37");
    let (sink, mut results) = result_channel(CancellationToken::new());
    let controller = module.controller(view.clone(), sink);

    assert_eq!(
        controller.on_trigger_conversion(Direction::CelsiusToFahrenheit),
        TriggerOutcome::Dispatched
    );
    let result = tokio::time::timeout(Duration::from_secs(5), results.recv())
        .await
        .unwrap()
        .unwrap();
    controller.on_result(result);

    assert_eq!(*view.notices.lock(), vec![Notice::RemoteCallFailed]);
    assert_eq!(view.field_text(Scale::Fahrenheit), "");
    assert!(*view.enabled.lock());
}

#[tokio::test]
async fn test_result_dropped_after_view_closed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/xml/tempconvert.asmx");
        then.status(200)
            .delay(Duration::from_millis(100))
            .body(response_envelope("CelsiusToFahrenheit", "212"));
    });

    let module = module_for(&server, true);
    let view = Arc::new(TextView::default());
    view.set_field_text(Scale::Celsius, "100");
    let liveness = CancellationToken::new();
    let (sink, mut results) = result_channel(liveness.clone());
    let controller = module.controller(view.clone(), sink);

    assert_eq!(
        controller.on_trigger_conversion(Direction::CelsiusToFahrenheit),
        TriggerOutcome::Dispatched
    );
    liveness.cancel();
    drop(controller);

    let next = tokio::time::timeout(Duration::from_secs(5), results.recv())
        .await
        .unwrap();
    assert!(next.is_none());
    assert_eq!(view.field_text(Scale::Fahrenheit), "");
}
