// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! cabinetkit CLI

use anyhow::{Context, Result};
use cabinetkit::cli::Reporter;
use cabinetkit::config::ToolConfig;
use cabinetkit::io::{self, ExportFormat};
use cabinetkit::views::{cut_list, schematic};
use cabinetkit::{compute_many, normalize, CabinetError, CabinetSpec, PanelList, RawCabinetSpec};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cabinetkit")]
#[command(about = "Panel decomposition for modular storage cabinets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Tool configuration file (defaults to ./cabinetkit.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the panel list as JSON
    Panels {
        /// Cabinet file (.toml or .json)
        input: PathBuf,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the cut list
    Cutlist {
        /// Cabinet file (.toml or .json)
        input: PathBuf,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Export the cabinet as a model or drawing
    Export {
        /// Cabinet file (.toml or .json)
        input: PathBuf,

        /// Output file; defaults to the configured output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (glb, gltf, stl, svg, json)
        #[arg(short, long)]
        format: Option<ExportFormat>,
    },

    /// Write the front schematic as SVG
    Schematic {
        /// Cabinet file (.toml or .json)
        input: PathBuf,

        /// Output file; defaults to the configured output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Leave doors out of the drawing
        #[arg(long)]
        no_doors: bool,
    },

    /// Validate one or more cabinet files and print a summary
    Check {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Show version information
    Version,
}

/// A cabinet the reporter has already explained to the user
#[derive(Debug, thiserror::Error)]
#[error("{0} rejected")]
struct Rejected(String);

fn main() {
    if let Err(e) = run() {
        if needs_report(&e) {
            Reporter::report_error(&format!("{:#}", e));
        }
        std::process::exit(1);
    }
}

fn needs_report(err: &anyhow::Error) -> bool {
    !err.is::<Rejected>()
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("cabinetkit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cabinetkit=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => {
            let mut config = ToolConfig::from_file(path)?;
            config.apply_overrides(|key| std::env::var(key).ok());
            config
        }
        None => ToolConfig::load()?,
    };
    debug!(?config, "Loaded tool configuration");

    match cli.command {
        Commands::Panels { input, output } => panels_command(&input, output.as_deref()),
        Commands::Cutlist { input, json } => cutlist_command(&input, json),
        Commands::Export {
            input,
            output,
            format,
        } => export_command(&config, &input, output, format),
        Commands::Schematic {
            input,
            output,
            no_doors,
        } => schematic_command(&config, &input, output, no_doors),
        Commands::Check { inputs } => check_command(&inputs),
        Commands::Version => {
            println!("cabinetkit v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Load, normalize and decompose; cabinet errors are reported before bailing
fn load(input: &Path) -> Result<PanelList> {
    let raw = RawCabinetSpec::from_file(input)?;
    let result = normalize(&raw).and_then(|spec| cabinetkit::compute_panels(&spec));
    result.map_err(|err| reject(input, err))
}

fn reject(input: &Path, err: CabinetError) -> anyhow::Error {
    let name = input.display().to_string();
    Reporter::report_cabinet_error(&name, &err);
    Rejected(name).into()
}

fn panels_command(input: &Path, output: Option<&Path>) -> Result<()> {
    let list = load(input)?;
    match output {
        Some(path) => {
            io::export_json(&list, path)?;
            Reporter::success(&format!("{} -> {}", input.display(), path.display()));
        }
        None => println!("{}", io::to_json_string(&list)?),
    }
    Ok(())
}

fn cutlist_command(input: &Path, json: bool) -> Result<()> {
    let cut = cut_list(&load(input)?);
    if json {
        println!("{}", io::to_json_string(&cut)?);
    } else {
        Reporter::report_cut_list(&input.display().to_string(), &cut);
    }
    Ok(())
}

fn export_command(
    config: &ToolConfig,
    input: &Path,
    output: Option<PathBuf>,
    format: Option<ExportFormat>,
) -> Result<()> {
    let format = format
        .or_else(|| output.as_deref().and_then(ExportFormat::from_path))
        .unwrap_or(config.format);
    let output = output.unwrap_or_else(|| config.output_path_for(input, format));

    let list = load(input)?;
    ensure_parent(&output)?;
    io::export_cabinet(
        &list,
        format,
        &output,
        &config.schematic.schematic_options(),
        &config.schematic.svg_options(),
    )?;

    Reporter::success(&format!("{} -> {}", input.display(), output.display()));
    Ok(())
}

fn schematic_command(
    config: &ToolConfig,
    input: &Path,
    output: Option<PathBuf>,
    no_doors: bool,
) -> Result<()> {
    let output = output.unwrap_or_else(|| config.output_path_for(input, ExportFormat::Svg));
    let mut options = config.schematic.schematic_options();
    if no_doors {
        options.show_doors = false;
    }

    let list = load(input)?;
    ensure_parent(&output)?;
    io::export_svg(&schematic(&list, &options), &config.schematic.svg_options(), &output)?;

    Reporter::success(&format!("{} -> {}", input.display(), output.display()));
    Ok(())
}

fn check_command(inputs: &[PathBuf]) -> Result<()> {
    let start = Instant::now();

    // Files that fail to parse or normalize are reported and skipped
    let mut failures = 0usize;
    let mut accepted: Vec<(&PathBuf, CabinetSpec)> = Vec::new();
    for input in inputs {
        match RawCabinetSpec::from_file(input) {
            Ok(raw) => match normalize(&raw) {
                Ok(spec) => accepted.push((input, spec)),
                Err(err) => {
                    Reporter::report_cabinet_error(&input.display().to_string(), &err);
                    failures += 1;
                }
            },
            Err(err) => {
                Reporter::report_error(&format!("{:#}", err));
                failures += 1;
            }
        }
    }

    let specs: Vec<CabinetSpec> = accepted.iter().map(|(_, spec)| spec.clone()).collect();
    let results = compute_many(&specs);
    let elapsed = start.elapsed();

    for ((input, _), result) in accepted.iter().zip(results) {
        match result {
            Ok(list) => Reporter::report_summary(&input.display().to_string(), &list, elapsed),
            Err(err) => {
                Reporter::report_cabinet_error(&input.display().to_string(), &err);
                failures += 1;
            }
        }
    }

    info!(checked = inputs.len(), failures, "Check finished");
    if failures > 0 {
        anyhow::bail!("{} of {} cabinet file(s) rejected", failures, inputs.len());
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}
