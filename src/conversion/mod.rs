//! CSV to GeoJSON conversion module
//!
//! This module contains column resolution, the feature transformer,
//! configuration, input limits and statistics.

pub mod config;
pub mod engine;
pub mod limits;
pub mod resolver;
pub mod stats;
pub mod value;

pub use config::{ColumnHeuristics, ConversionConfig, MatchPolicy, DEFAULT_MATCH_POLICY};

pub use engine::{property_header, transform, ConversionEngine, ConversionMetadata, GeoJsonData};
pub use resolver::{resolve_columns, ColumnIndices};

use crate::error::ConversionError;

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Result type for operations that return GeoJSON data
pub type GeoJsonConversionResult = ConversionResult<GeoJsonData>;

/// Convert CSV text to a GeoJSON document
pub fn convert_csv_string(csv: &str, config: &ConversionConfig) -> GeoJsonConversionResult {
    ConversionEngine::new(config.clone()).convert_string(csv)
}
