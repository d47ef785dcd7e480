//! Request and result types exchanged with the conversion client.

use std::fmt;

/// A temperature scale; also names the text surface holding its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    Celsius,
    Fahrenheit,
}

impl Scale {
    /// Request field name carrying a value in this scale.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Celsius => "Celsius",
            Self::Fahrenheit => "Fahrenheit",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Which way a conversion goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    CelsiusToFahrenheit,
    FahrenheitToCelsius,
}

impl Direction {
    /// Scale of the value being sent.
    #[must_use]
    pub const fn source(self) -> Scale {
        match self {
            Self::CelsiusToFahrenheit => Scale::Celsius,
            Self::FahrenheitToCelsius => Scale::Fahrenheit,
        }
    }

    /// Scale of the value coming back.
    #[must_use]
    pub const fn target(self) -> Scale {
        match self {
            Self::CelsiusToFahrenheit => Scale::Fahrenheit,
            Self::FahrenheitToCelsius => Scale::Celsius,
        }
    }

    /// Request field name: `"Celsius"` or `"Fahrenheit"`.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        self.source().field_name()
    }

    /// Remote operation name: `"CelsiusToFahrenheit"` or `"FahrenheitToCelsius"`.
    #[must_use]
    pub const fn operation(self) -> &'static str {
        match self {
            Self::CelsiusToFahrenheit => "CelsiusToFahrenheit",
            Self::FahrenheitToCelsius => "FahrenheitToCelsius",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operation())
    }
}

/// Reasons a [`ConversionRequest`] cannot be built.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidRequest {
    #[error("input value is empty")]
    EmptyInput,
}

/// One conversion to perform. Created per user action and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    direction: Direction,
    input_value: String,
}

impl ConversionRequest {
    /// Build a request for `input_value` in the direction's source scale.
    ///
    /// The value is passed through as typed; only emptiness is checked and
    /// the remote service decides what counts as a number.
    ///
    /// # Errors
    /// Returns [`InvalidRequest::EmptyInput`] for an empty string.
    pub fn new(direction: Direction, input_value: impl Into<String>) -> Result<Self, InvalidRequest> {
        let input_value = input_value.into();
        if input_value.is_empty() {
            return Err(InvalidRequest::EmptyInput);
        }
        Ok(Self {
            direction,
            input_value,
        })
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn input_value(&self) -> &str {
        &self.input_value
    }
}

/// Outcome of one conversion, consumed once by the view update.
///
/// `output_value` is `None` when the remote call failed or returned no
/// parsable scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub direction: Direction,
    pub output_value: Option<String>,
}

impl ConversionResult {
    #[must_use]
    pub fn success(direction: Direction, output_value: impl Into<String>) -> Self {
        Self {
            direction,
            output_value: Some(output_value.into()),
        }
    }

    #[must_use]
    pub fn failure(direction: Direction) -> Self {
        Self {
            direction,
            output_value: None,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.output_value.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_table() {
        let c2f = Direction::CelsiusToFahrenheit;
        assert_eq!(c2f.field_name(), "Celsius");
        assert_eq!(c2f.operation(), "CelsiusToFahrenheit");
        assert_eq!(c2f.source(), Scale::Celsius);
        assert_eq!(c2f.target(), Scale::Fahrenheit);

        let f2c = Direction::FahrenheitToCelsius;
        assert_eq!(f2c.field_name(), "Fahrenheit");
        assert_eq!(f2c.operation(), "FahrenheitToCelsius");
        assert_eq!(f2c.source(), Scale::Fahrenheit);
        assert_eq!(f2c.target(), Scale::Celsius);
    }

    #[test]
    fn test_request_rejects_empty_input() {
        assert_eq!(
            ConversionRequest::new(Direction::FahrenheitToCelsius, ""),
            Err(InvalidRequest::EmptyInput)
        );
    }

    #[test]
    fn test_request_keeps_value_verbatim() {
        let request = ConversionRequest::new(Direction::CelsiusToFahrenheit, " 36.6").unwrap();
        assert_eq!(request.input_value(), " 36.6");
        assert_eq!(request.direction(), Direction::CelsiusToFahrenheit);
    }

    #[test]
    fn test_result_constructors() {
        let ok = ConversionResult::success(Direction::CelsiusToFahrenheit, "212");
        assert!(ok.is_success());
        assert_eq!(ok.output_value.as_deref(), Some("212"));

        let failed = ConversionResult::failure(Direction::FahrenheitToCelsius);
        assert!(!failed.is_success());
        assert_eq!(failed.direction, Direction::FahrenheitToCelsius);
    }
}
