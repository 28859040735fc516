//! Unit tests for coordinate column resolution
//!
//! Tests cover:
//! - Heuristic lookup of longitude/latitude headers
//! - Explicit column names
//! - The last-match tie-break
//! - Missing columns

use assert_matches::assert_matches;
use csv2geojson::conversion::{resolve_columns, ColumnIndices, ConversionConfig};
use csv2geojson::error::{Axis, ConversionErrorKind};

fn header(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod column_resolution_tests {
    use super::*;

    /// Every default heuristic name is recognised in any case
    #[test]
    fn test_every_heuristic_name_matches() {
        let config = ConversionConfig::default();

        for lon in ["x", "Longitude", "LONG", "lon", "Lng"] {
            for lat in ["Y", "latitude", "Lat"] {
                let indices =
                    resolve_columns(&header(&["id", lat, "name", lon]), None, None, &config)
                        .unwrap();
                assert_eq!(indices, ColumnIndices::new(3, 1), "{} / {}", lon, lat);
            }
        }
    }

    /// With several candidates the highest index is used
    #[test]
    fn test_multiple_matches_use_last() {
        let config = ConversionConfig::default();
        let indices = resolve_columns(
            &header(&["lon", "lat", "id", "lng", "y", "latitude", "name"]),
            None,
            None,
            &config,
        )
        .unwrap();

        assert_eq!(indices, ColumnIndices::new(3, 5));
    }

    /// Explicit names also use the last duplicate header
    #[test]
    fn test_explicit_duplicate_header_uses_last() {
        let config = ConversionConfig::default();
        let indices = resolve_columns(
            &header(&["pos_e", "pos_n", "POS_E"]),
            Some("pos_e"),
            Some("pos_n"),
            &config,
        )
        .unwrap();

        assert_eq!(indices, ColumnIndices::new(2, 1));
    }

    /// `lat,lon,val` with explicit names resolves lon=1, lat=0
    #[test]
    fn test_explicit_names_reverse_order() {
        let config = ConversionConfig::default();
        let indices =
            resolve_columns(&header(&["lat", "lon", "val"]), Some("lon"), Some("lat"), &config)
                .unwrap();

        assert_eq!(indices, ColumnIndices::new(1, 0));
    }

    /// An explicit name only matches that name, not the heuristics
    #[test]
    fn test_explicit_name_disables_heuristics() {
        let config = ConversionConfig::default();
        let err = resolve_columns(&header(&["x", "y"]), Some("east"), None, &config).unwrap_err();

        assert_matches!(
            err.kind(),
            Some(ConversionErrorKind::ColumnNotFound { axis: Axis::Longitude, wanted: Some(_) })
        );
    }

    /// No candidate at all fails for the missing axis
    #[test]
    fn test_no_latitude_candidate() {
        let config = ConversionConfig::default();
        let err =
            resolve_columns(&header(&["id", "lon", "name"]), None, None, &config).unwrap_err();

        assert_matches!(
            err.kind(),
            Some(ConversionErrorKind::ColumnNotFound { axis: Axis::Latitude, wanted: None })
        );
    }

    /// Substrings of heuristic names are not matches
    #[test]
    fn test_partial_names_do_not_match() {
        let config = ConversionConfig::default();
        let err = resolve_columns(&header(&["lon_deg", "lat_deg"]), None, None, &config);
        assert!(err.is_err());
    }
}
