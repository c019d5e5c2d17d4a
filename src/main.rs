//! Pipefit CLI - Convert the master SKU list to the configurator catalog
//!
//! ```bash
//! pipefit    # reads ../public/data/master_sku_list.csv, writes data.json beside it
//! ```
//!
//! The data files live at a fixed location relative to the installed
//! binary; there are no options beyond `--help`/`--version`.

use std::path::{Path, PathBuf};

use clap::Parser;
use pipefit::{convert_file, BuildOptions, ConvertConfig, ConvertSummary};

#[derive(Parser)]
#[command(name = "pipefit")]
#[command(about = "Convert the master SKU list CSV to the racking configurator catalog", long_about = None)]
#[command(version)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    let config = default_config();
    match convert_file(&config, &BuildOptions::default()) {
        Ok(summary) => {
            print_summary(&config, &summary);
            println!(
                "Successfully converted {} to {}",
                config.input.display(),
                config.output.display()
            );
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Resolve the fixed data locations: the binary lives in `tools/`, the
/// data files one level up under `public/data/`.
fn default_config() -> ConvertConfig {
    let tool_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    let data_dir = tool_dir.join("..").join("public").join("data");

    ConvertConfig::new(
        data_dir.join("master_sku_list.csv"),
        data_dir.join("data.json"),
    )
}

fn print_summary(config: &ConvertConfig, summary: &ConvertSummary) {
    eprintln!("📄 Read {} rows from {}", summary.row_count, config.input.display());
    eprintln!(
        "   Pipes: {}   Fittings: {}   Skipped: {}",
        summary.report.pipe_count, summary.report.fitting_count, summary.report.skipped_rows
    );
    if summary.report.has_overwrites() {
        eprintln!(
            "⚠️  Duplicate keys resolved by overwrite: {} pipe(s), {} fitting size(s)",
            summary.report.pipe_overwrites, summary.report.fitting_size_overwrites
        );
    }
}
