use tempconvert_sdk::Scale;

/// Surface the controller reads input from and renders state into.
///
/// Calls arrive from the task that drives the controller, never from a
/// conversion worker.
pub trait ConverterView: Send + Sync {
    /// Current text of the field for `scale`.
    fn field_text(&self, scale: Scale) -> String;

    /// Replace the text of the field for `scale`.
    fn set_field_text(&self, scale: Scale, text: &str);

    /// Enable or disable both conversion triggers together.
    fn set_triggers_enabled(&self, enabled: bool);

    /// Show or hide the busy indicator.
    fn set_busy(&self, busy: bool);

    /// Show a transient message.
    fn notify(&self, notice: Notice);
}

/// Transient user-facing messages
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    #[error("No network connection. Connect and try again.")]
    NotConnected,

    #[error("Enter a value to convert.")]
    EmptyInput,

    #[error("Conversion failed. Try again later.")]
    RemoteCallFailed,
}
