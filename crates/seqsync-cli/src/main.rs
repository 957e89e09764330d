use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::diff::DiffArgs;

#[derive(Parser)]
#[command(name = "seqsync")]
#[command(about = "Reconcile one ordered list into another as remove/move/insert edits", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the edit script that turns SOURCE into TARGET
    Diff {
        /// Current list (YAML/JSON sequence, or a mapping with an `items` key)
        #[arg(long)]
        source: PathBuf,

        /// Desired list, same formats as --source
        #[arg(long)]
        target: PathBuf,

        /// Layered config paths in merge order
        #[arg(long = "config")]
        config_paths: Vec<String>,

        /// standard | avoid_transient_empty (overrides config)
        #[arg(long)]
        policy: Option<String>,

        /// exact | case_insensitive | trimmed (overrides config)
        #[arg(long)]
        equality: Option<String>,

        /// text | json (overrides config)
        #[arg(long)]
        format: Option<String>,

        /// Fail on config keys nothing reads instead of warning.
        #[arg(long, default_value_t = false)]
        strict_config: bool,
    },

    /// Compute layered config hash + print canonical JSON
    ConfigHash {
        /// Paths in merge order (base -> overrides...)
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Load .env.local if present (dev convenience); silent when missing.
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Diff {
            source,
            target,
            config_paths,
            policy,
            equality,
            format,
            strict_config,
        } => {
            let args = DiffArgs {
                source,
                target,
                policy,
                equality,
                format,
            };
            let resolved = commands::resolve_settings(&config_paths, strict_config)?;
            let resolved = resolved.with_overrides(&args)?;
            init_tracing(&resolved.settings.log_filter);
            resolved.warn_unused();
            commands::diff::run(&args, &resolved)?;
        }

        Commands::ConfigHash { paths } => {
            init_tracing(seqsync_config::DEFAULT_LOG_FILTER);
            let path_refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
            let loaded = seqsync_config::load_layered_yaml(&path_refs)?;
            println!("config_hash={}", loaded.config_hash);
            println!("{}", loaded.canonical_json);
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise the configured filter. Logs go to stderr so
/// stdout stays machine-readable.
fn init_tracing(fallback: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
