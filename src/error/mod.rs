//! Error types and handling infrastructure for CSV to GeoJSON conversion

use anyhow::Error;
use std::fmt;
use std::path::PathBuf;

/// Which coordinate a column lookup was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Longitude,
    Latitude,
}

impl Axis {
    /// Name of the CLI option that selects this column explicitly
    pub fn option_name(&self) -> &'static str {
        match self {
            Axis::Longitude => "--long",
            Axis::Latitude => "--lat",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Longitude => write!(f, "longitude"),
            Axis::Latitude => write!(f, "latitude"),
        }
    }
}

/// Core error types for the conversion process
#[derive(Debug, thiserror::Error)]
pub enum ConversionErrorKind {
    #[error("Input unavailable: {location}: {message}")]
    InputUnavailable { location: String, message: String },

    #[error("Input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge { size: u64, limit: u64 },

    #[error("Input has no data rows")]
    EmptyInput,

    #[error("Column not found for {axis}: {}", .wanted.as_deref().unwrap_or("<heuristic>"))]
    ColumnNotFound { axis: Axis, wanted: Option<String> },

    #[error("Longitude and latitude both resolve to column '{column}'")]
    CoincidingColumns { column: String },

    #[error("Couldn't write output {}: {message}", .path.display())]
    OutputWriteFailed { path: PathBuf, message: String },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ConversionErrorKind {
    pub fn input_unavailable(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InputUnavailable {
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn column_not_found(axis: Axis, wanted: Option<&str>) -> Self {
        Self::ColumnNotFound {
            axis,
            wanted: wanted.map(str::to_string),
        }
    }

    pub fn output_write_failed(path: PathBuf, message: String) -> Self {
        Self::OutputWriteFailed { path, message }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error("{kind}")]
    Conversion {
        kind: ConversionErrorKind,
        source: Option<anyhow::Error>,
    },

    #[error(transparent)]
    Other(#[from] Error),
}

impl ConversionError {
    pub fn parse(message: String, line: Option<u64>) -> Self {
        Self::ParseError(ParseError::new(message, line))
    }

    pub fn conversion(kind: ConversionErrorKind) -> Self {
        Self::Conversion { kind, source: None }
    }

    pub fn conversion_with_source(kind: ConversionErrorKind, source: anyhow::Error) -> Self {
        Self::Conversion {
            kind,
            source: Some(source),
        }
    }

    pub fn other(error: Error) -> Self {
        Self::Other(error)
    }

    /// The conversion error kind, if this is not a parse or foreign error
    pub fn kind(&self) -> Option<&ConversionErrorKind> {
        match self {
            Self::Conversion { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ParseError(err) => match err.line {
                Some(line) => format!(
                    "Couldn't read the input CSV at line {}: {}",
                    line, err.message
                ),
                None => format!("Couldn't read the input CSV: {}", err.message),
            },
            Self::Conversion { kind, .. } => match kind {
                ConversionErrorKind::InputUnavailable { location, .. } => {
                    format!("Couldn't access the input CSV: {}", location)
                }
                ConversionErrorKind::EmptyInput => {
                    "The input CSV is empty. Nothing to convert.".to_string()
                }
                ConversionErrorKind::ColumnNotFound { axis, wanted: None } => format!(
                    "Couldn't determine the column containing the {}. Please specify it using the '{}' option.",
                    axis,
                    axis.option_name()
                ),
                ConversionErrorKind::ColumnNotFound {
                    wanted: Some(name), ..
                } => format!("Couldn't find column: {}", name),
                ConversionErrorKind::OutputWriteFailed { path, .. } => {
                    format!("Couldn't create the GeoJSON file: {}", path.display())
                }
                _ => self.to_string(),
            },
            Self::Other(err) => {
                format!("Unexpected error: {}", err)
            }
        }
    }
}

/// CSV parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: Option<u64>,
}

impl ParseError {
    pub fn new(message: String, line: Option<u64>) -> Self {
        Self { message, line }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(line) = self.line {
            write!(f, " at line {}", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<csv::Error> for ParseError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());
        let message = match error.kind() {
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => format!(
                "record has {} fields, but the header has {}",
                len, expected_len
            ),
            _ => error.to_string(),
        };
        Self::new(message, line)
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
