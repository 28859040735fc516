use std::path::{Path, PathBuf};

use crate::parser::CsvSource;

/// Extension given to every output file
pub const OUTPUT_EXTENSION: &str = "geojson";

/// Derive the output path for `source` when the user gave none.
///
/// Files keep their directory and swap their extension; URLs write their last
/// path segment into the working directory.
pub fn default_output_path(source: &CsvSource) -> PathBuf {
    match source {
        CsvSource::File(path) => replace_extension(path),
        CsvSource::Url(url) => {
            let name = url
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .filter(|segment| !segment.is_empty())
                .unwrap_or("output");
            replace_extension(Path::new(name))
        }
        CsvSource::String(_) => PathBuf::from("output").with_extension(OUTPUT_EXTENSION),
    }
}

/// Swap everything from the last `.` of the file name for `.geojson`.
///
/// A leading dot counts as an extension too, so `.csv` becomes `.geojson`.
fn replace_extension(path: &Path) -> PathBuf {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return path.with_extension(OUTPUT_EXTENSION);
    };

    let stem = name.rfind('.').map_or(name, |dot| &name[..dot]);
    path.with_file_name(format!("{}.{}", stem, OUTPUT_EXTENSION))
}

/// Append `.geojson` to a user-given output path unless it already ends with it
pub fn normalize_output_path(path: &Path) -> PathBuf {
    let has_extension = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case(OUTPUT_EXTENSION));

    if has_extension {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(OUTPUT_EXTENSION);
        PathBuf::from(name)
    }
}

/// Resolve the final output path from the optional `--out` value
pub fn resolve_output_path(source: &CsvSource, output: Option<&Path>) -> PathBuf {
    match output {
        Some(path) => normalize_output_path(path),
        None => default_output_path(source),
    }
}
