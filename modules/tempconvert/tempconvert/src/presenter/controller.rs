use std::sync::Arc;

use parking_lot::Mutex;
use tempconvert_sdk::{
    ConversionRequest, ConversionResult, Direction, InvalidRequest, NetworkStatus,
    TemperatureConverterClient,
};
use tracing::{debug, info, warn};

use super::dispatch::ResultSink;
use super::view::{ConverterView, Notice};

/// Whether a conversion is pending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionState {
    Idle,
    InFlight(Direction),
}

/// What a trigger did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A worker was spawned; its result arrives through the sink
    Dispatched,
    /// Nothing was sent; the view was shown this notice
    Rejected(Notice),
    /// A conversion is already pending; the trigger was ignored
    AlreadyInFlight,
}

/// Drives one [`ConverterView`] through idle and in-flight states.
///
/// Triggers are disabled exactly while a conversion is in flight, so at
/// most one remote call is pending per controller.
pub struct ConversionController {
    client: Arc<dyn TemperatureConverterClient>,
    network: Arc<dyn NetworkStatus>,
    view: Arc<dyn ConverterView>,
    sink: ResultSink,
    state: Mutex<ConversionState>,
}

impl ConversionController {
    /// Create a controller and put the view in its idle presentation.
    #[must_use]
    pub fn new(
        client: Arc<dyn TemperatureConverterClient>,
        network: Arc<dyn NetworkStatus>,
        view: Arc<dyn ConverterView>,
        sink: ResultSink,
    ) -> Self {
        view.set_triggers_enabled(true);
        view.set_busy(false);
        Self {
            client,
            network,
            view,
            sink,
            state: Mutex::new(ConversionState::Idle),
        }
    }

    #[must_use]
    pub fn state(&self) -> ConversionState {
        *self.state.lock()
    }

    /// Handle a user request to convert in `direction`.
    ///
    /// Must be called from within a Tokio runtime; the remote call runs on a
    /// spawned task and this returns without waiting for it.
    #[must_use]
    pub fn on_trigger_conversion(&self, direction: Direction) -> TriggerOutcome {
        let mut state = self.state.lock();
        if let ConversionState::InFlight(pending) = *state {
            debug!(requested = %direction, %pending, "conversion already in flight");
            return TriggerOutcome::AlreadyInFlight;
        }

        if !self.network.is_reachable() {
            info!(operation = %direction, "network unreachable; conversion not sent");
            self.view.notify(Notice::NotConnected);
            return TriggerOutcome::Rejected(Notice::NotConnected);
        }

        let request = match ConversionRequest::new(
            direction,
            self.view.field_text(direction.source()),
        ) {
            Ok(request) => request,
            Err(InvalidRequest::EmptyInput) => {
                debug!(operation = %direction, "empty input; conversion not sent");
                self.view.notify(Notice::EmptyInput);
                return TriggerOutcome::Rejected(Notice::EmptyInput);
            }
        };

        *state = ConversionState::InFlight(direction);
        self.view.set_triggers_enabled(false);
        self.view.set_busy(true);

        let client = Arc::clone(&self.client);
        let sink = self.sink.clone();
        tokio::spawn(async move {
            let worker = tokio::spawn(async move { client.convert(&request).await });
            let result = match worker.await {
                Ok(result) => result,
                Err(e) => {
                    warn!(operation = %direction, error = %e, "conversion worker ended abnormally");
                    ConversionResult::failure(direction)
                }
            };
            sink.deliver(result);
        });

        debug!(operation = %direction, "conversion dispatched");
        TriggerOutcome::Dispatched
    }

    /// Apply a finished conversion to the view and return to idle.
    pub fn on_result(&self, result: ConversionResult) {
        let direction = result.direction;
        let mut state = self.state.lock();
        match *state {
            ConversionState::InFlight(pending) if pending == direction => {}
            ConversionState::InFlight(pending) => {
                warn!(%pending, delivered = %direction, "result direction does not match pending conversion");
            }
            ConversionState::Idle => {
                warn!(delivered = %direction, "result delivered with no conversion in flight; ignoring");
                return;
            }
        }

        if let Some(value) = result.output_value {
            self.view.set_field_text(direction.target(), &value);
            info!(operation = %direction, result = %value, "conversion completed");
        } else {
            self.view.notify(Notice::RemoteCallFailed);
        }

        *state = ConversionState::Idle;
        self.view.set_triggers_enabled(true);
        self.view.set_busy(false);
    }
}
