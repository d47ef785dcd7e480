use tempconvert_sdk::ConversionResult;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Sending half used by conversion workers.
///
/// Results are delivered only while the liveness token is not cancelled;
/// after the view goes away they are dropped quietly.
#[derive(Clone, Debug)]
pub struct ResultSink {
    tx: mpsc::UnboundedSender<ConversionResult>,
    liveness: CancellationToken,
}

/// Receiving half, drained by the task that owns the view.
pub type ResultReceiver = mpsc::UnboundedReceiver<ConversionResult>;

/// Pair a sink with its receiver. Cancelling `liveness` stops delivery.
#[must_use]
pub fn result_channel(liveness: CancellationToken) -> (ResultSink, ResultReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ResultSink { tx, liveness }, rx)
}

impl ResultSink {
    /// Hand `result` to the view task, or drop it if the view is gone.
    pub fn deliver(&self, result: ConversionResult) {
        if self.liveness.is_cancelled() {
            debug!(operation = %result.direction, "view gone; dropping conversion result");
            return;
        }
        if self.tx.send(result).is_err() {
            debug!("result receiver closed; dropping conversion result");
        }
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        !self.liveness.is_cancelled() && !self.tx.is_closed()
    }
}
