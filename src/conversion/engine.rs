//! Core conversion engine for CSV to GeoJSON transformation

use crate::conversion::config::ConversionConfig;
use crate::conversion::resolver::{resolve_columns, ColumnIndices};
use crate::conversion::value::PropertyValue;
use crate::conversion::ConversionResult;
use crate::error::{ConversionError, ConversionErrorKind};
use crate::parser::{CsvSource, CsvTable};
use std::time::Instant;

/// Envelope opening; every document names CRS84 as its reference system
const DOCUMENT_HEAD: &str = "{\n\"type\": \"FeatureCollection\",\n\"crs\": { \"type\": \"name\", \"properties\": { \"name\": \"urn:ogc:def:crs:OGC:1.3:CRS84\" } },\n\"features\": [\n";

const DOCUMENT_TAIL: &str = "]\n}";

/// Core conversion result
#[derive(Debug, Clone)]
pub struct GeoJsonData {
    pub content: String,
    pub metadata: ConversionMetadata,
}

impl GeoJsonData {
    /// Create a new GeoJSON result
    pub fn new(content: String, metadata: ConversionMetadata) -> Self {
        Self { content, metadata }
    }

    /// Get the serialized document
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Get the length of the output in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the output is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Metadata about the conversion process
#[derive(Debug, Clone, Default)]
pub struct ConversionMetadata {
    pub longitude_column: String,
    pub latitude_column: String,
    pub row_count: usize,
    pub feature_count: usize,
    pub skipped_rows: usize,
    pub output_size: u64,
    pub processing_time_ms: u64,
}

/// Items of `items` with the two coordinate positions left out
fn without_coordinates<'a, T>(
    items: &'a [T],
    indices: ColumnIndices,
) -> impl Iterator<Item = &'a T> + 'a {
    items
        .iter()
        .enumerate()
        .filter(move |(i, _)| !indices.contains(*i))
        .map(|(_, item)| item)
}

/// Header names that label feature properties, in original order
pub fn property_header(header: &[String], indices: ColumnIndices) -> Vec<&str> {
    without_coordinates(header, indices)
        .map(String::as_str)
        .collect()
}

/// Append one feature to `out`
fn write_feature(
    out: &mut String,
    property_names: &[&str],
    values: &[String],
    indices: ColumnIndices,
    coord_x: &str,
    coord_y: &str,
) {
    out.push_str("{ \"type\": \"Feature\", \"properties\": {");

    for (j, (name, raw)) in property_names
        .iter()
        .zip(without_coordinates(values, indices))
        .enumerate()
    {
        if j > 0 {
            out.push(',');
        }
        out.push('"');
        out.push_str(name);
        out.push_str("\":");
        PropertyValue::classify(raw).write_json(out);
    }

    out.push_str("}, \"geometry\": { \"type\": \"Point\", \"coordinates\": [");
    out.push_str(coord_x);
    out.push_str(", ");
    out.push_str(coord_y);
    out.push_str("]} }");
}

/// Turn data records into a GeoJSON FeatureCollection.
///
/// Records where either coordinate cell is empty are skipped. Coordinates are
/// copied into the geometry as written, without numeric validation, so a cell
/// like `12.3.4` ends up verbatim in the output.
pub fn transform(
    header: &[String],
    indices: ColumnIndices,
    records: &[Vec<String>],
) -> ConversionResult<GeoJsonData> {
    let start_time = Instant::now();

    if records.is_empty() {
        return Err(ConversionError::conversion(ConversionErrorKind::EmptyInput));
    }

    let property_names = property_header(header, indices);
    let mut content = String::from(DOCUMENT_HEAD);
    let mut feature_count = 0;

    for (row, record) in records.iter().enumerate() {
        if record.len() != header.len() || record.len() <= indices.max() {
            return Err(ConversionError::parse(
                format!(
                    "data record {} has {} fields, but the header has {}",
                    row + 1,
                    record.len(),
                    header.len()
                ),
                None,
            ));
        }

        let coord_x = record[indices.longitude].as_str();
        let coord_y = record[indices.latitude].as_str();
        if coord_x.is_empty() || coord_y.is_empty() {
            log::debug!("Skipping data record {}: missing coordinate", row + 1);
            continue;
        }

        if feature_count > 0 {
            content.push_str(",\n");
        }
        write_feature(&mut content, &property_names, record, indices, coord_x, coord_y);
        feature_count += 1;
    }

    content.push_str(DOCUMENT_TAIL);

    let metadata = ConversionMetadata {
        longitude_column: header[indices.longitude].clone(),
        latitude_column: header[indices.latitude].clone(),
        row_count: records.len(),
        feature_count,
        skipped_rows: records.len() - feature_count,
        output_size: content.len() as u64,
        processing_time_ms: start_time.elapsed().as_millis() as u64,
    };

    Ok(GeoJsonData::new(content, metadata))
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Resolve the coordinate columns of `table` and convert its records
    pub fn convert(&self, table: &CsvTable) -> ConversionResult<GeoJsonData> {
        let indices = resolve_columns(
            &table.header,
            self.config.longitude_column.as_deref(),
            self.config.latitude_column.as_deref(),
            &self.config,
        )?;

        let data = transform(&table.header, indices, &table.records)?;
        if data.metadata.skipped_rows > 0 {
            log::info!(
                "Skipped {} of {} rows without coordinates",
                data.metadata.skipped_rows,
                data.metadata.row_count
            );
        }

        Ok(data)
    }

    /// Read a table from `source` and convert it
    pub fn convert_from_source(&self, source: &CsvSource) -> ConversionResult<GeoJsonData> {
        let table = source.parse(&self.config)?;
        self.convert(&table)
    }

    /// Convert CSV text held in memory
    pub fn convert_string(&self, csv: &str) -> ConversionResult<GeoJsonData> {
        let source = CsvSource::String(csv.to_string());
        self.convert_from_source(&source)
    }
}
