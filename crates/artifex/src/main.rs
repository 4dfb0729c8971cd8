// SPDX-FileCopyrightText: 2026 Artifex Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Artifex - builds plugin artifact descriptors from `mule-plugin.json` manifests.
//!
//! This is the binary entry point.

mod describe;
mod loaders;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use artifex_config::ArtifexConfig;
use artifex_plugin::{builtin_repository, ArtifactPluginDescriptorFactory};
use clap::{Parser, Subcommand};
use tracing::{error, info};

/// Artifex - plugin artifact descriptor tooling.
#[derive(Parser, Debug)]
#[command(name = "artifex", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the descriptor of each plugin artifact as JSON.
    Describe {
        /// Plugin directories or archives.
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,
        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
    /// List the registered descriptor loaders.
    Loaders,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match cli.config.as_deref() {
        Some(path) => artifex_config::load_and_validate_path(path),
        None => artifex_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            artifex_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log.level);

    let repository = match builtin_repository() {
        Ok(repository) => Arc::new(repository),
        Err(e) => {
            error!(error = %e, "failed to register built-in loaders");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Describe { paths, pretty } => {
            run_describe(&config, repository, paths, pretty).await
        }
        Commands::Loaders => {
            if let Err(e) = loaders::render(&repository, &mut std::io::stdout().lock()) {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
    }
}

async fn run_describe(
    config: &ArtifexConfig,
    repository: Arc<artifex_plugin::DescriptorLoaderRepository>,
    paths: Vec<PathBuf>,
    pretty: bool,
) -> ExitCode {
    let factory = Arc::new(
        ArtifactPluginDescriptorFactory::new(repository)
            .with_archive_extensions(&config.plugin.archive_extensions),
    );
    info!(artifacts = paths.len(), "describing plugin artifacts");

    let outcomes = match describe::describe_all(factory, paths).await {
        Ok(outcomes) => outcomes,
        Err(e) => {
            error!(error = %e, "describe task failed");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let rendered = describe::render(
        &outcomes,
        pretty,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );
    match rendered {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber on stderr so stdout carries only JSON.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("artifex={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
