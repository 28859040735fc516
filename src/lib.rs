//! CSV to GeoJSON Converter
//!
//! A Rust CLI tool for converting CSV tables, read from a file or a URL, into
//! a GeoJSON FeatureCollection of Point features. Two columns become the
//! point coordinates; every other column becomes a feature property.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod parser;

// Re-export commonly used types
pub use conversion::{
    convert_csv_string, resolve_columns, transform, ColumnIndices, ConversionConfig,
    ConversionEngine, ConversionResult, GeoJsonData,
};
pub use error::{ConversionError, ConversionErrorKind, ParseError};
pub use parser::{CsvSource, CsvTable};

/// Convert CSV text to GeoJSON with default configuration
pub fn convert_csv(csv: &str) -> Result<String, ConversionError> {
    let config = ConversionConfig::default();
    convert_csv_with_config(csv, &config)
}

/// Convert CSV text to GeoJSON with custom configuration
pub fn convert_csv_with_config(
    csv: &str,
    config: &ConversionConfig,
) -> Result<String, ConversionError> {
    let result = convert_csv_string(csv, config)?;
    Ok(result.content)
}
