use clap::Parser;
use log::{error, info};
use seqname_core::cli::{prompt_for_root, Cli, OutputFormat};
use seqname_core::{RenameSummary, Renamer, TextReport};
use std::io;
use std::path::PathBuf;
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    let root = match resolve_root(cli.root.clone()) {
        Some(root) => root,
        None => {
            println!("Cancelled: no folder selected.");
            return;
        }
    };

    if !root.is_dir() {
        eprintln!("Error: {} is not a directory", root.display());
        process::exit(1);
    }

    let config = cli.rename_config();
    info!("Naming tag: {}", config.tag);

    let summary = match Renamer::new(config).run(&root) {
        Ok(summary) => summary,
        Err(e) => {
            error!("Failed to process {}: {}", root.display(), e);
            eprintln!("Error: Failed to process {}: {}", root.display(), e);
            process::exit(1);
        }
    };

    output_summary(&summary, cli.format);
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

fn resolve_root(arg: Option<PathBuf>) -> Option<PathBuf> {
    if arg.is_some() {
        return arg;
    }
    let stdin = io::stdin();
    match prompt_for_root(stdin.lock(), io::stdout()) {
        Ok(root) => root,
        Err(e) => {
            error!("Failed to read folder from console: {}", e);
            None
        }
    }
}

fn output_summary(summary: &RenameSummary, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            println!("{}", TextReport::new(summary));
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match serde_json::to_string_pretty(summary) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                let _ = summary;
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}
