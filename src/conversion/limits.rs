use crate::conversion::config::ConversionConfig;
use crate::conversion::ConversionResult;
use crate::error::{ConversionError, ConversionErrorKind};
use crate::parser::CsvSource;

/// Check the source size before attempting to read it.
/// Only local files have a size known up front.
pub fn check_source_size_before_read(
    source: &CsvSource,
    config: &ConversionConfig,
) -> ConversionResult<()> {
    if let Some(size) = source.estimated_size() {
        check_content_size(size, config)?;
    }

    Ok(())
}

/// Check the size of content that has already been read or downloaded
pub fn check_content_size(size: u64, config: &ConversionConfig) -> ConversionResult<()> {
    if size > config.input_limit {
        return Err(ConversionError::conversion(
            ConversionErrorKind::InputTooLarge {
                size,
                limit: config.input_limit,
            },
        ));
    }

    Ok(())
}
