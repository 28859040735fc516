//! Statistics for a conversion run

use crate::conversion::engine::ConversionMetadata;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Summary of one CSV to GeoJSON conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStatistics {
    /// Where the table came from
    pub source: String,
    /// Input CSV size in bytes
    pub input_size_bytes: u64,
    /// Output GeoJSON size in bytes
    pub output_size_bytes: u64,
    /// Columns used for the geometry
    pub longitude_column: String,
    pub latitude_column: String,
    /// Number of data rows read
    pub row_count: usize,
    /// Number of features written
    pub feature_count: usize,
    /// Rows dropped for a missing coordinate
    pub skipped_rows: usize,
    /// Wall time from reading to serialized output
    pub processing_time_ms: u64,
    /// Throughput (input bytes processed per second)
    pub throughput_bytes_per_sec: f32,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl ConversionStatistics {
    /// Create statistics for a finished conversion
    pub fn for_conversion(
        source: impl Into<String>,
        input_size: u64,
        metadata: &ConversionMetadata,
        processing_time: Duration,
    ) -> Self {
        let throughput_bytes_per_sec = if processing_time.as_secs_f64() > 0.0 {
            input_size as f64 / processing_time.as_secs_f64()
        } else {
            0.0
        } as f32;

        Self {
            source: source.into(),
            input_size_bytes: input_size,
            output_size_bytes: metadata.output_size,
            longitude_column: metadata.longitude_column.clone(),
            latitude_column: metadata.latitude_column.clone(),
            row_count: metadata.row_count,
            feature_count: metadata.feature_count,
            skipped_rows: metadata.skipped_rows,
            processing_time_ms: processing_time.as_millis() as u64,
            throughput_bytes_per_sec,
            collected_at: chrono::Utc::now(),
        }
    }

    /// Share of data rows that became features, in percent
    pub fn coverage_percent(&self) -> f32 {
        if self.row_count == 0 {
            return 0.0;
        }
        self.feature_count as f32 / self.row_count as f32 * 100.0
    }

    /// Get a formatted summary
    pub fn summary(&self) -> String {
        format!(
            "Converted {} of {} rows ({:.1}%) in {:.1}s",
            self.feature_count,
            self.row_count,
            self.coverage_percent(),
            self.processing_time_ms as f32 / 1000.0
        )
    }

    /// Multi-line report for the terminal
    pub fn report(&self) -> String {
        format!(
            "Source: {}\n\
             Columns: longitude '{}', latitude '{}'\n\
             Rows: {} read, {} converted, {} skipped\n\
             Input size: {} bytes\n\
             Output size: {} bytes\n\
             Processing time: {}ms",
            self.source,
            self.longitude_column,
            self.latitude_column,
            self.row_count,
            self.feature_count,
            self.skipped_rows,
            self.input_size_bytes,
            self.output_size_bytes,
            self.processing_time_ms
        )
    }

    /// Export to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Import from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
