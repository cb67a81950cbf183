//! skinpacker - Skin pack mod generator for ETS2/ATS
//!
//! CLI entry point. The binary wires together:
//! - Logging infrastructure (rotating file logs + console output)
//! - Tokio async runtime (subprocess execution)
//! - Configuration loading ([`ConfigManager`])
//! - The generation pipeline ([`ModGenerator`])
//!
//! # Execution Flow
//!
//! 1. Initialize logging -> logs/skinpacker.<date>
//! 2. Load the settings YAML (defaults when absent)
//! 3. Collect source images: command-line paths, or the configured input
//!    folder scanned for .png/.jpg/.jpeg files
//! 4. Run the pipeline and print the ordered transcript
//! 5. Exit non-zero when the run aborted in a fatal stage
//!
//! The process exit code reflects the run-granularity success flag only;
//! a zero exit can still carry per-image or per-vehicle errors in the
//! transcript, and the final summary line says so.

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use skinpacker::{APP_NAME, ConfigManager, ModGenerator, ProjectSettings, TexconvService, VERSION};
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "skinpacker", version, about = "Generate an ETS2/ATS paint job mod from source images")]
struct Cli {
    /// Path to the project settings YAML
    #[arg(short, long, default_value = "skinpacker.yaml")]
    config: Utf8PathBuf,

    /// Write a starter settings file to the --config path and exit
    #[arg(long)]
    init: bool,

    /// Enable debug-level logging
    #[arg(long)]
    debug: bool,

    /// Source images; when omitted, the settings' input folder is scanned
    images: Vec<Utf8PathBuf>,
}

fn collect_source_images(cli: &Cli, settings: &ProjectSettings) -> Result<Vec<Utf8PathBuf>> {
    if !cli.images.is_empty() {
        return Ok(cli.images.clone());
    }

    let folder = &settings.input_folder;
    if !folder.is_dir() {
        anyhow::bail!(
            "No images given and input folder '{folder}' does not exist; \
             pass image paths or set input_folder in {}",
            cli.config
        );
    }

    let mut images: Vec<Utf8PathBuf> = folder
        .read_dir_utf8()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && ProjectSettings::is_supported_source_image(path))
        .collect();
    images.sort();

    tracing::info!("Found {} source image(s) in '{}'", images.len(), folder);
    Ok(images)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match skinpacker::logging::setup_logging("logs", "skinpacker", cli.debug, true) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let config_manager = ConfigManager::new(cli.config.clone());

    if cli.init {
        config_manager.save(&ProjectSettings::default())?;
        println!("Wrote starter settings to {}", cli.config);
        return Ok(true);
    }

    let settings = config_manager.load()?;
    let images = collect_source_images(cli, &settings)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(2)
        .thread_name("skinpacker-worker")
        .build()?;

    let converter = TexconvService::new(settings.texconv_path.clone(), settings.dds_format.clone());
    let generator = ModGenerator::new(converter, Arc::new(skinpacker::VehicleCatalog::default()));

    let report = runtime.block_on(generator.generate(&settings, &images));

    for line in &report.log {
        println!("{line}");
    }
    println!("{}", report.summary());

    runtime.shutdown_timeout(std::time::Duration::from_secs(5));
    Ok(report.success)
}
