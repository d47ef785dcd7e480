//! Line-oriented terminal screen for the conversion controller.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use parking_lot::Mutex;
use tempconvert::TempConvertModule;
use tempconvert::presenter::{
    ConversionController, ConversionState, ConverterView, Notice, TriggerOutcome, result_channel,
};
use tempconvert_sdk::{Direction, Scale};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

const HELP: &str = "\
Commands:
  c <value>   set the Celsius field
  f <value>   set the Fahrenheit field
  c2f         convert Celsius to Fahrenheit
  f2c         convert Fahrenheit to Celsius
  show        print both fields
  help        print this help
  quit        leave";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetField(Scale, String),
    Convert(Direction),
    Show,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// Field values keep everything after the first space verbatim, so `c` with
/// no value clears the field.
///
/// # Errors
/// Returns the offending word for unknown commands.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = match line.trim_start().split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line.trim(), ""),
    };

    let command = match word {
        "" => return Ok(None),
        "c" => Command::SetField(Scale::Celsius, rest.to_owned()),
        "f" => Command::SetField(Scale::Fahrenheit, rest.to_owned()),
        "c2f" => Command::Convert(Direction::CelsiusToFahrenheit),
        "f2c" => Command::Convert(Direction::FahrenheitToCelsius),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(other.to_owned()),
    };
    Ok(Some(command))
}

#[derive(Default)]
struct Fields {
    celsius: String,
    fahrenheit: String,
    triggers_enabled: bool,
    busy: bool,
}

/// [`ConverterView`] that renders to a writer, normally stdout.
pub struct TerminalScreen<W: Write + Send> {
    fields: Mutex<Fields>,
    out: Mutex<W>,
}

impl<W: Write + Send> TerminalScreen<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            fields: Mutex::new(Fields::default()),
            out: Mutex::new(out),
        }
    }

    /// Write one line; a closed terminal is not worth failing over.
    fn line(&self, text: &str) {
        let mut out = self.out.lock();
        if writeln!(out, "{text}").and_then(|()| out.flush()).is_err() {
            tracing::debug!("terminal output closed");
        }
    }

    pub fn show(&self) {
        let text = {
            let fields = self.fields.lock();
            format!(
                "Celsius: {}  Fahrenheit: {}{}",
                display_value(&fields.celsius),
                display_value(&fields.fahrenheit),
                if fields.busy { "  (converting...)" } else { "" }
            )
        };
        self.line(&text);
    }

    pub fn help(&self) {
        self.line(HELP);
    }

    #[must_use]
    pub fn triggers_enabled(&self) -> bool {
        self.fields.lock().triggers_enabled
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.out.into_inner()
    }
}

fn display_value(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

impl<W: Write + Send> ConverterView for TerminalScreen<W> {
    fn field_text(&self, scale: Scale) -> String {
        let fields = self.fields.lock();
        match scale {
            Scale::Celsius => fields.celsius.clone(),
            Scale::Fahrenheit => fields.fahrenheit.clone(),
        }
    }

    fn set_field_text(&self, scale: Scale, text: &str) {
        {
            let mut fields = self.fields.lock();
            match scale {
                Scale::Celsius => fields.celsius = text.to_owned(),
                Scale::Fahrenheit => fields.fahrenheit = text.to_owned(),
            }
        }
        self.line(&format!("{scale}: {}", display_value(text)));
    }

    fn set_triggers_enabled(&self, enabled: bool) {
        self.fields.lock().triggers_enabled = enabled;
    }

    fn set_busy(&self, busy: bool) {
        let changed = {
            let mut fields = self.fields.lock();
            let changed = fields.busy != busy;
            fields.busy = busy;
            changed
        };
        if changed && busy {
            self.line("Converting...");
        }
    }

    fn notify(&self, notice: Notice) {
        self.line(&format!("! {notice}"));
    }
}

/// Run the interactive screen until `quit` or end of input.
///
/// At end of input a pending conversion is awaited so piped scripts see
/// their last result; `quit` closes the screen at once and any pending
/// result is dropped.
///
/// # Errors
/// Fails when standard input cannot be read.
pub async fn run_interactive(module: &TempConvertModule) -> Result<()> {
    let liveness = CancellationToken::new();
    let (sink, mut results) = result_channel(liveness.clone());
    let _close_on_exit = liveness.drop_guard();

    let screen = Arc::new(TerminalScreen::new(std::io::stdout()));
    let controller = module.controller(screen.clone(), sink);

    screen.line("Temperature converter. Type 'help' for commands.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    drain_pending(&controller, &mut results).await;
                    break;
                };
                match parse_command(&line) {
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(command)) => apply(&controller, &screen, command),
                    Ok(None) => {}
                    Err(word) => screen.line(&format!("unknown command '{word}'; type 'help'")),
                }
            }
            Some(result) = results.recv() => controller.on_result(result),
        }
    }

    tracing::debug!("interactive screen closed");
    Ok(())
}

fn apply<W: Write + Send>(
    controller: &ConversionController,
    screen: &TerminalScreen<W>,
    command: Command,
) {
    match command {
        Command::SetField(scale, value) => screen.set_field_text(scale, &value),
        Command::Convert(direction) => {
            if !screen.triggers_enabled()
                || controller.on_trigger_conversion(direction) == TriggerOutcome::AlreadyInFlight
            {
                screen.line("A conversion is already running.");
            }
        }
        Command::Show => screen.show(),
        Command::Help => screen.help(),
        Command::Quit => {}
    }
}

async fn drain_pending(
    controller: &ConversionController,
    results: &mut tempconvert::presenter::ResultReceiver,
) {
    if let ConversionState::InFlight(_) = controller.state()
        && let Some(result) = results.recv().await
    {
        controller.on_result(result);
    }
}
