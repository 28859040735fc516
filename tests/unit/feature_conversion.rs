//! Unit tests for CSV-to-GeoJSON feature conversion
//!
//! Tests cover:
//! - End-to-end conversion of CSV text
//! - Property typing and ordering
//! - Skipped rows and empty input
//! - Known passthrough of malformed coordinates

use assert_matches::assert_matches;
use csv2geojson::conversion::{convert_csv_string, property_header, transform, ColumnIndices};
use csv2geojson::error::ConversionErrorKind;
use csv2geojson::{convert_csv, ConversionConfig, ConversionError};
use serde_json::{json, Value};

fn parse(document: &str) -> Value {
    serde_json::from_str(document).expect("document should be valid JSON")
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod feature_conversion_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Alice is converted, Bob is dropped for a missing x
    #[test]
    fn test_alice_and_bob() {
        let document = convert_csv("id,name,x,y\n1,Alice,10.5,20.5\n2,Bob,,30.0\n").unwrap();
        let value = parse(&document);

        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(
            value["crs"],
            json!({"type": "name", "properties": {"name": "urn:ogc:def:crs:OGC:1.3:CRS84"}})
        );

        let features = value["features"].as_array().unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(
            features[0],
            json!({
                "type": "Feature",
                "properties": {"id": 1, "name": "Alice"},
                "geometry": {"type": "Point", "coordinates": [10.5, 20.5]}
            })
        );
        assert!(document.contains("\"coordinates\": [10.5, 20.5]"));
    }

    /// Typed property values
    #[test]
    fn test_property_typing() {
        let csv = "a,b,c,d,e,lon,lat\n42,3.14,true,False,hello,1,2\n";
        let document = convert_csv(csv).unwrap();

        assert!(document.contains(
            "\"properties\": {\"a\":42,\"b\":3.14,\"c\":true,\"d\":false,\"e\":\"hello\"}"
        ));
        let value = parse(&document);
        assert_eq!(
            value["features"][0]["properties"],
            json!({"a": 42, "b": 3.14, "c": true, "d": false, "e": "hello"})
        );
    }

    /// Properties keep the header order around the removed columns
    #[test]
    fn test_property_order_preserved() {
        let csv = "z,lat,m,lon,a\n1,2,3,4,5\n";
        let value = parse(&convert_csv(csv).unwrap());

        let keys: Vec<&String> = value["features"][0]["properties"]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(keys, vec!["z", "m", "a"]);
        assert_eq!(value["features"][0]["geometry"]["coordinates"], json!([4, 2]));
    }

    /// The property header drops two columns in either index order
    #[test]
    fn test_property_header_length() {
        let header = row(&["a", "b", "c", "d", "e", "f"]);
        for (lon, lat) in [(0, 5), (5, 0), (2, 3), (3, 2), (4, 1)] {
            let names = property_header(&header, ColumnIndices::new(lon, lat));
            assert_eq!(names.len(), header.len() - 2);

            let expected: Vec<&str> = header
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != lon && *i != lat)
                .map(|(_, h)| h.as_str())
                .collect();
            assert_eq!(names, expected);
        }
    }

    /// `lat,lon,val` with explicit names gives a single `val` property
    #[test]
    fn test_explicit_columns_reverse_order() {
        let config = ConversionConfig::default()
            .with_longitude_column("lon")
            .with_latitude_column("lat");
        let data = convert_csv_string("lat,lon,val\n45.1,7.6,turin\n", &config).unwrap();
        let value = parse(&data.content);

        assert_eq!(value["features"][0]["properties"], json!({"val": "turin"}));
        assert_eq!(value["features"][0]["geometry"]["coordinates"], json!([7.6, 45.1]));
    }

    /// Feature count equals the number of rows with both coordinates
    #[test]
    fn test_feature_count_matches_complete_rows() {
        let header = row(&["x", "y", "label"]);
        let records = vec![
            row(&["1", "1", "a"]),
            row(&["", "2", "b"]),
            row(&["3", "", "c"]),
            row(&["4", "4", "d"]),
            row(&["", "", "e"]),
            row(&["6", "6", ""]),
        ];

        let data = transform(&header, ColumnIndices::new(0, 1), &records).unwrap();
        assert_eq!(data.metadata.feature_count, 3);
        assert_eq!(data.metadata.skipped_rows, 3);

        let value = parse(&data.content);
        let labels: Vec<&Value> = value["features"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| &f["properties"]["label"])
            .collect();
        assert_eq!(labels, vec![&json!("a"), &json!("d"), &json!("")]);
    }

    /// Header without data rows is empty input
    #[test]
    fn test_header_only_is_empty_input() {
        let err = convert_csv("id,x,y\n").unwrap_err();
        assert_matches!(
            err,
            ConversionError::Conversion {
                kind: ConversionErrorKind::EmptyInput,
                ..
            }
        );
    }

    /// Tab separated input via the configured delimiter
    #[test]
    fn test_tab_delimiter() {
        let config = ConversionConfig::default().with_delimiter(b'\t');
        let data = convert_csv_string("name\tlng\tlat\nPier 39\t-122.41\t37.81\n", &config).unwrap();
        let value = parse(&data.content);

        assert_eq!(value["features"][0]["properties"]["name"], "Pier 39");
        assert_eq!(
            value["features"][0]["geometry"]["coordinates"],
            json!([-122.41, 37.81])
        );
    }

    /// Coordinates are copied verbatim, even when they are not numbers
    #[test]
    fn test_malformed_coordinate_passthrough() {
        let document = convert_csv("x,y\n12.3.4,5\n").unwrap();
        assert!(document.contains("\"coordinates\": [12.3.4, 5]"));
        assert!(serde_json::from_str::<Value>(&document).is_err());
    }

    /// Numeric literals keep their original spelling
    #[test]
    fn test_numbers_not_reformatted() {
        let document = convert_csv("x,y,v\n1.500,-0.0,1e3\n").unwrap();
        assert!(document.contains("\"v\":1e3"));
        assert!(document.contains("[1.500, -0.0]"));
    }
}
