use anyhow::{Context, Result};
use clap::Parser;
use diskprobe::config::AppConfig;
use diskprobe::probe::UsedBasis;
use diskprobe::utils::{CapacityCheck, format_bytes, format_megabytes, init_logging};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;

/// Report disk space for the volume containing a path
#[derive(Debug, Parser)]
#[command(name = "diskprobe", version)]
struct Cli {
    /// Path on the volume to inspect [default: probe.default_path from config]
    path: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Fail unless this many bytes fit on the volume
    #[arg(long, value_name = "BYTES")]
    require: Option<u64>,

    /// What used space is measured against
    #[arg(long, value_enum)]
    used_basis: Option<UsedBasis>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the default configuration file and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<ExitCode> {
    let _guard = init_logging();
    let cli = Cli::parse();

    if cli.init_config {
        let path = AppConfig::default()
            .save()
            .context("Failed to write default configuration")?;
        println!("Wrote {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = match &cli.config {
        Some(path) => {
            let config = AppConfig::load_from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            config.validate()?;
            config
        }
        None => AppConfig::load(),
    };
    if let Some(basis) = cli.used_basis {
        config.probe.used_basis = basis;
    }

    let path = cli.path.unwrap_or_else(|| config.probe.default_path.clone());
    let probe = config.probe();
    let report = probe
        .query(&path)
        .with_context(|| format!("Failed to query disk space for {}", path.display()))?;
    let capacity = cli
        .require
        .map(|bytes| (bytes, CapacityCheck::from_report(&report, bytes)));

    if cli.json {
        let mut out = json!({
            "path": path.display().to_string(),
            "used_basis": probe.basis(),
            "report": report,
        });
        if let Some((_, check)) = &capacity {
            out["capacity"] = json!(check);
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Volume of {}", path.display());
        println!("  Total:     {}", format_megabytes(report.total_megabytes));
        println!("  Available: {}", format_megabytes(report.available_megabytes));
        println!("  Used:      {}", format_megabytes(report.used_megabytes));
        if let Some((bytes, check)) = &capacity {
            let verdict = if check.sufficient { "fits" } else { "does not fit" };
            println!("  Required:  {} ({})", format_bytes(*bytes), verdict);
        }
    }

    match capacity {
        Some((_, check)) if !check.sufficient => Ok(ExitCode::FAILURE),
        _ => Ok(ExitCode::SUCCESS),
    }
}
