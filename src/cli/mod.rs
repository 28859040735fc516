//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;

use crate::conversion::config::{parse_delimiter, ColumnHeuristics};
use crate::conversion::{ConversionConfig, ConversionResult};
use crate::error::{ConversionError, ConversionErrorKind};
use crate::parser::CsvSource;

pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "csv2geojson")]
#[command(about = "Convert CSV files with coordinate columns to GeoJSON")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Input CSV (file or URL)
    #[arg(short = 'i', long = "in", value_name = "CSV")]
    pub input: String,

    /// Name of the column containing the longitude coordinates (guessed if omitted)
    #[arg(long = "long", value_name = "COLUMN")]
    pub longitude: Option<String>,

    /// Name of the column containing the latitude coordinates (guessed if omitted)
    #[arg(long = "lat", value_name = "COLUMN")]
    pub latitude: Option<String>,

    /// Delimiter character ('\t' for tab)
    #[arg(short, long, default_value = ",")]
    pub delimiter: String,

    /// Output GeoJSON file (extension will be added if omitted)
    #[arg(short, long = "out", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Header names tried when guessing the longitude column
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    pub lon_names: Option<Vec<String>>,

    /// Header names tried when guessing the latitude column
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    pub lat_names: Option<Vec<String>>,

    /// Print the document to standard output instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Maximum input size (e.g., 100MB, default: 100MB)
    #[arg(long)]
    pub max_input_size: Option<String>,

    /// Output conversion statistics
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub source: CsvSource,
    pub conversion_config: ConversionConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = Self::create_conversion_config(&args)?;
        let source = CsvSource::detect(&args.input);

        Ok(Self {
            args,
            source,
            conversion_config,
        })
    }

    /// Create conversion configuration from CLI arguments
    fn create_conversion_config(args: &Args) -> ConversionResult<ConversionConfig> {
        let configuration_error =
            |e: String| ConversionError::conversion(ConversionErrorKind::configuration(e));

        let delimiter = parse_delimiter(&args.delimiter).map_err(configuration_error)?;
        let input_limit = parse_size_limit(&args.max_input_size)?;

        let mut heuristics = ColumnHeuristics::default();
        if let Some(names) = &args.lon_names {
            heuristics.longitude = clean_names(names);
        }
        if let Some(names) = &args.lat_names {
            heuristics.latitude = clean_names(names);
        }

        let config = ConversionConfig {
            delimiter,
            longitude_column: args.longitude.clone().filter(|s| !s.is_empty()),
            latitude_column: args.latitude.clone().filter(|s| !s.is_empty()),
            heuristics,
            input_limit,
            ..Default::default()
        };

        config.validate().map_err(configuration_error)?;

        Ok(config)
    }

    /// Final path of the GeoJSON file
    pub fn output_path(&self) -> PathBuf {
        path_mapping::resolve_output_path(&self.source, self.args.output.as_deref())
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Default log filter for the selected verbosity
    pub fn log_level(&self) -> &'static str {
        if self.is_verbose() {
            "debug"
        } else if self.is_quiet() {
            "error"
        } else {
            "info"
        }
    }
}

fn clean_names(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}

/// Parse a size limit string (e.g., "100MB", "1GB", "500KB")
fn parse_size_limit(limit: &Option<String>) -> ConversionResult<u64> {
    let Some(limit_str) = limit else {
        return Ok(100 * 1024 * 1024); // 100MB default
    };

    let limit_str = limit_str.trim().to_uppercase();
    let invalid = || {
        ConversionError::conversion(ConversionErrorKind::configuration(format!(
            "Invalid input size limit: {}",
            limit_str
        )))
    };

    let (number, multiplier) = if let Some(size) = limit_str.strip_suffix("GB") {
        (size, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("MB") {
        (size, 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("KB") {
        (size, 1024.0)
    } else if let Some(size) = limit_str.strip_suffix('B') {
        (size, 1.0)
    } else {
        // Assume bytes
        (limit_str.as_str(), 1.0)
    };

    let value = number.trim().parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok((value * multiplier) as u64)
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("⚠ {}", message);
        }
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    let message = error.user_message();
    CliUtils::show_error(&message);

    // Provide helpful suggestions
    match error {
        ConversionError::ParseError(_) => {
            eprintln!("\nTip: Use --delimiter if the file is not comma-separated");
        }
        ConversionError::Conversion {
            kind: ConversionErrorKind::InputTooLarge { limit, .. },
            ..
        } => {
            eprintln!(
                "\nTip: Use --max-input-size to raise the input limit (currently {})",
                CliUtils::format_file_size(*limit)
            );
        }
        ConversionError::Conversion {
            kind: ConversionErrorKind::CoincidingColumns { .. },
            ..
        } => {
            eprintln!("\nTip: Use --long and --lat to name two different columns");
        }
        _ => {}
    }

    // Show usage hint
    eprintln!("\nTry 'csv2geojson --help' for usage information.");
}

/// Command execution result
pub type CliResult<T> = Result<T, ConversionError>;
