use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use geophoto::map::MapProvider;
use geophoto::pipeline::{LocateResult, Outcome};
use geophoto::{config, exif, pipeline};

#[derive(Parser, Debug)]
#[command(
    name = "geophoto",
    version,
    about = "Read embedded GPS coordinates from photos and link them to a map"
)]
struct Cli {
    /// Image files or directories to process
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Path to config file (default: config.json next to binary)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Initialize a default config.json and exit
    #[arg(long)]
    init: bool,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Display the decoded EXIF tags and exit
    #[arg(long = "show-exif")]
    show_exif: bool,

    /// Map service for links (openstreetmap, google)
    #[arg(long, value_name = "NAME")]
    provider: Option<MapProvider>,

    /// Map zoom level (1-19)
    #[arg(long)]
    zoom: Option<u8>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Handle --init
    if cli.init {
        let config = config::Config::default();
        let path = cli.config.as_deref();
        config.save(path)?;
        let save_path = match path {
            Some(p) => p.to_path_buf(),
            None => config::Config::config_path()?,
        };
        println!("Default config written to {}", save_path.display());
        return Ok(());
    }

    if cli.paths.is_empty() {
        anyhow::bail!("No input files or directories specified. Use --help for usage.");
    }

    let images = pipeline::collect_images(&cli.paths);
    if images.is_empty() {
        anyhow::bail!("No supported image files found in the specified paths.");
    }

    // Handle --show-exif
    if cli.show_exif {
        for image_path in &images {
            print_tags(image_path);
        }
        return Ok(());
    }

    // Load config, then apply CLI overrides
    let mut config = config::Config::load(cli.config.as_deref())?;
    if let Some(provider) = cli.provider {
        config.map.provider = provider;
    }
    if let Some(zoom) = cli.zoom {
        config.map.zoom = zoom;
    }

    log::info!("Found {} image(s) to process", images.len());

    let results = pipeline::locate_images(&images, &config);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            print_result(result, config.output.precision);
        }
    }

    // Summary
    let located = results.iter().filter(|r| r.coordinate().is_some()).count();
    let failed = results
        .iter()
        .filter(|r| matches!(r.outcome, Outcome::Failed { .. }))
        .count();
    let no_gps = results.len() - located - failed;
    log::info!(
        "Done: {located} located, {no_gps} without GPS data, {failed} failed out of {} images",
        results.len()
    );

    Ok(())
}

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Print one located / not located / failed entry.
fn print_result(result: &LocateResult, precision: usize) {
    println!();
    println!("{BOLD}File:{RESET} {}", result.path.display());
    println!("  {DIM}{}{RESET}", "─".repeat(70));

    match &result.outcome {
        Outcome::Located { coordinate } => {
            print_row("Latitude", &format!("{:.precision$}", coordinate.latitude));
            print_row("Longitude", &format!("{:.precision$}", coordinate.longitude));
            if let Some(ref url) = result.map_url {
                println!("  {GREEN}{:<22} : {url}{RESET}", "Map");
            }
        }
        Outcome::NoGpsData => {
            println!("  {DIM}(image contains no GPS data){RESET}");
        }
        Outcome::Failed { error } => {
            println!("  {RED}Could not read image: {error}{RESET}");
        }
    }
}

/// Print the decoded tag mapping of a file as JSON.
fn print_tags(path: &Path) {
    match exif::read_tags(path) {
        Ok(tags) => {
            let doc = serde_json::json!({
                "path": path.display().to_string(),
                "tags": tags,
            });
            match serde_json::to_string_pretty(&doc) {
                Ok(text) => println!("{text}"),
                Err(e) => log::error!("Failed to format tags of {}: {e}", path.display()),
            }
        }
        Err(e) => log::error!("Failed to read {}: {e:#}", path.display()),
    }
}

/// Print a single row in the result table.
fn print_row(tag: &str, val: &str) {
    let tag_col = format!("{:<22}", tag);
    println!("  {tag_col} : {val}");
}
