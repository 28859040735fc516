use clap::Parser;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use csv2geojson::cli::{self, Args, CliConfig, CliResult, CliUtils};
use csv2geojson::conversion::stats::ConversionStatistics;
use csv2geojson::conversion::{ConversionEngine, GeoJsonData};
use csv2geojson::error::{ConversionError, ConversionErrorKind};

fn main() {
    let args = Args::parse();

    let config = match CliConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            cli::handle_error(&e);
            std::process::exit(1);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level()))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(&config) {
        cli::handle_error(&e);
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> CliResult<()> {
    let start_time = Instant::now();
    let engine = ConversionEngine::new(config.conversion_config.clone());

    let content = config.source.read_content(&config.conversion_config)?;
    let input_size = content.len() as u64;
    let table = csv2geojson::parser::parse_csv(&content, config.conversion_config.delimiter)?;

    let geojson = engine.convert(&table)?;
    if geojson.metadata.feature_count == 0 {
        CliUtils::show_warning(
            "No row had both coordinates; the FeatureCollection is empty",
            config.is_quiet(),
        );
    }

    if config.args.stdout {
        write_stdout(&geojson)?;
    } else {
        let output_path = config.output_path();
        write_output(&output_path, &geojson)?;
        CliUtils::show_success(
            &format!(
                "The GeoJSON file {} was successfully created.",
                output_path.display()
            ),
            config.is_quiet(),
        );
    }

    if config.want_stats() && !config.is_quiet() {
        let stats = ConversionStatistics::for_conversion(
            config.source.description(),
            input_size,
            &geojson.metadata,
            start_time.elapsed(),
        );
        log::debug!("{}", stats.summary());
        eprintln!("\nConversion Statistics:\n{}", stats.report());
    }

    Ok(())
}

fn write_output(path: &Path, geojson: &GeoJsonData) -> CliResult<()> {
    let write_failed = |e: std::io::Error| {
        ConversionError::conversion_with_source(
            ConversionErrorKind::output_write_failed(path.to_path_buf(), e.to_string()),
            e.into(),
        )
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_failed)?;
    }
    std::fs::write(path, geojson.as_str()).map_err(write_failed)?;
    log::debug!("Wrote {} bytes to {}", geojson.len(), path.display());

    Ok(())
}

fn write_stdout(geojson: &GeoJsonData) -> CliResult<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", geojson.as_str())
        .map_err(|e| ConversionError::other(anyhow::Error::from(e).context("writing to stdout")))
}
