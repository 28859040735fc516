//! CSV input acquisition and parsing module

use crate::conversion::config::ConversionConfig;
use crate::conversion::limits;
use crate::conversion::ConversionResult;
use crate::error::{ConversionError, ConversionErrorKind, ParseResult};
use std::borrow::Cow;
use std::path::PathBuf;
use url::Url;

/// Header row plus data records, as read from the input
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    pub header: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl CsvTable {
    /// Number of data records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Source for CSV content
#[derive(Debug, Clone, PartialEq)]
pub enum CsvSource {
    /// CSV text held in memory
    String(String),
    /// Local file path
    File(PathBuf),
    /// Remote file fetched with HTTP GET
    Url(Url),
}

impl CsvSource {
    /// Decide whether a command line input names a URL or a file.
    ///
    /// Only absolute `http`/`https` URLs are fetched; anything else, including
    /// Windows drive paths that happen to parse as URLs, is a file path.
    pub fn detect(input: &str) -> Self {
        match Url::parse(input) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => CsvSource::Url(url),
            _ => CsvSource::File(PathBuf::from(input)),
        }
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            CsvSource::String(_) => "string input".to_string(),
            CsvSource::File(path) => path.display().to_string(),
            CsvSource::Url(url) => url.to_string(),
        }
    }

    /// Get the size of the source in bytes, if known before reading
    pub fn estimated_size(&self) -> Option<u64> {
        match self {
            CsvSource::String(s) => Some(s.len() as u64),
            CsvSource::File(path) => std::fs::metadata(path).ok().map(|m| m.len()),
            CsvSource::Url(_) => None,
        }
    }

    /// Read the whole source as raw bytes.
    ///
    /// The bytes are not decoded here; cells that are not valid UTF-8 are
    /// repaired by `parse_csv`.
    pub fn read_content(&self, config: &ConversionConfig) -> ConversionResult<Vec<u8>> {
        limits::check_source_size_before_read(self, config)?;

        let content = match self {
            CsvSource::String(content) => content.as_bytes().to_vec(),
            CsvSource::File(path) => {
                log::debug!("Reading {}", path.display());
                std::fs::read(path).map_err(|e| {
                    ConversionError::conversion_with_source(
                        ConversionErrorKind::input_unavailable(self.description(), e.to_string()),
                        e.into(),
                    )
                })?
            }
            CsvSource::Url(url) => fetch_url(url)?,
        };

        limits::check_content_size(content.len() as u64, config)?;
        Ok(content)
    }

    /// Read and parse the source into a table
    pub fn parse(&self, config: &ConversionConfig) -> ConversionResult<CsvTable> {
        let content = self.read_content(config)?;
        parse_csv(&content, config.delimiter)
    }
}

/// Download the body of `url`
fn fetch_url(url: &Url) -> ConversionResult<Vec<u8>> {
    log::info!("Downloading {}", url);

    let unavailable = |e: reqwest::Error| {
        ConversionError::conversion_with_source(
            ConversionErrorKind::input_unavailable(url.as_str(), e.to_string()),
            e.into(),
        )
    };

    let response = reqwest::blocking::get(url.clone())
        .and_then(|r| r.error_for_status())
        .map_err(unavailable)?;
    let body = response.bytes().map_err(unavailable)?;
    Ok(body.to_vec())
}

/// Split delimited input into a header row and data records.
///
/// Every record must have as many fields as the header. Fails with
/// `EmptyInput` when there is no header or no data record. Cells holding
/// invalid UTF-8 are kept, with the bad sequences replaced by U+FFFD.
pub fn parse_csv(content: &[u8], delimiter: u8) -> ConversionResult<CsvTable> {
    let mut rows = read_rows(content, delimiter)?.into_iter();

    let header = match rows.next() {
        Some(header) if header.iter().any(|name| !name.is_empty()) => header,
        _ => return Err(ConversionError::conversion(ConversionErrorKind::EmptyInput)),
    };

    let records: Vec<Vec<String>> = rows.collect();
    if records.is_empty() {
        return Err(ConversionError::conversion(ConversionErrorKind::EmptyInput));
    }

    log::info!("Read {} rows and {} columns", records.len(), header.len());
    Ok(CsvTable { header, records })
}

fn read_rows(content: &[u8], delimiter: u8) -> ParseResult<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_reader(content);

    let mut rows = Vec::new();
    let mut repaired = 0usize;

    for record in reader.byte_records() {
        let record = record?;
        let row: Vec<String> = record
            .iter()
            .map(|cell| match String::from_utf8_lossy(cell) {
                Cow::Borrowed(text) => text.to_string(),
                Cow::Owned(text) => {
                    repaired += 1;
                    text
                }
            })
            .collect();
        rows.push(row);
    }

    if repaired > 0 {
        log::warn!(
            "{} cells were not valid UTF-8; invalid bytes were replaced with U+FFFD",
            repaired
        );
    }

    Ok(rows)
}
