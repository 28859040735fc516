//! Locating the longitude and latitude columns in a header row

use crate::conversion::config::{same_column_name, ConversionConfig, MatchPolicy};
use crate::conversion::ConversionResult;
use crate::error::{Axis, ConversionError, ConversionErrorKind};

/// Zero-based positions of the coordinate columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndices {
    pub longitude: usize,
    pub latitude: usize,
}

impl ColumnIndices {
    pub fn new(longitude: usize, latitude: usize) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Check whether `index` is one of the coordinate columns
    pub fn contains(&self, index: usize) -> bool {
        index == self.longitude || index == self.latitude
    }

    /// The larger of the two positions
    pub fn max(&self) -> usize {
        self.longitude.max(self.latitude)
    }
}

/// Find the position of the first or last header satisfying `matches`
fn find_column<F>(header: &[String], policy: MatchPolicy, matches: F) -> Option<usize>
where
    F: Fn(&str) -> bool,
{
    let mut positions = header
        .iter()
        .enumerate()
        .filter(|(_, name)| matches(name))
        .map(|(i, _)| i);

    match policy {
        MatchPolicy::LastMatchWins => positions.last(),
        MatchPolicy::FirstMatchWins => positions.next(),
    }
}

/// Resolve one coordinate column, by explicit name or by heuristic names
fn resolve_axis(
    header: &[String],
    axis: Axis,
    wanted: Option<&str>,
    config: &ConversionConfig,
) -> ConversionResult<usize> {
    let found = match wanted {
        Some(name) => find_column(header, config.match_policy, |h| same_column_name(h, name)),
        None => match axis {
            Axis::Longitude => {
                find_column(header, config.match_policy, |h| config.heuristics.is_longitude(h))
            }
            Axis::Latitude => {
                find_column(header, config.match_policy, |h| config.heuristics.is_latitude(h))
            }
        },
    };

    found.ok_or_else(|| {
        ConversionError::conversion(ConversionErrorKind::column_not_found(axis, wanted))
    })
}

/// Determine the longitude and latitude column indices of `header`.
///
/// Explicit names are matched case-insensitively; when a name is absent the
/// configured heuristic names are tried instead. Several matches are settled
/// by `config.match_policy`.
pub fn resolve_columns(
    header: &[String],
    wanted_lon: Option<&str>,
    wanted_lat: Option<&str>,
    config: &ConversionConfig,
) -> ConversionResult<ColumnIndices> {
    let longitude = resolve_axis(header, Axis::Longitude, wanted_lon, config)?;
    let latitude = resolve_axis(header, Axis::Latitude, wanted_lat, config)?;

    if longitude == latitude {
        return Err(ConversionError::conversion(
            ConversionErrorKind::CoincidingColumns {
                column: header[longitude].clone(),
            },
        ));
    }

    log::debug!(
        "Resolved coordinate columns: longitude '{}' (#{}), latitude '{}' (#{})",
        header[longitude],
        longitude,
        header[latitude],
        latitude
    );

    Ok(ColumnIndices::new(longitude, latitude))
}
