//! Conversion controller and the surfaces it drives.
//!
//! The controller owns the idle/in-flight state. A trigger validates input
//! on the caller's task, disables the triggers, shows the busy indicator and
//! runs the remote call on a spawned worker. The worker hands its result to
//! a [`ResultSink`]; whoever drives the view drains the paired
//! [`ResultReceiver`] and passes each result back through
//! [`ConversionController::on_result`], so all view updates happen on one task.

mod controller;
mod dispatch;
mod view;

pub use controller::{ConversionController, ConversionState, TriggerOutcome};
pub use dispatch::{ResultReceiver, ResultSink, result_channel};
pub use view::{ConverterView, Notice};
