use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context as _};
use clap::{Parser, Subcommand};
use tablesize::{SizingPolicy, Table};
use tablesize_config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_value_name = "SUBCOMMAND")]
#[command(subcommand_help_heading = "Subcommands")]
struct Cli {
    #[command(subcommand)]
    subcommand: Option<Sub>,
}

#[derive(Subcommand)]
enum Sub {
    /// Validate the config file.
    Validate {
        /// Path to config file.
        #[arg(short, long, default_value = "tablesize.kdl")]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let directives = env::var("RUST_LOG").unwrap_or_else(|_| "tablesize=debug".to_owned());
    let env_filter = EnvFilter::builder().parse_lossy(directives);
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(env_filter)
        .init();

    let cli = Cli::parse();

    match cli.subcommand {
        Some(Sub::Validate { config }) => validate(&config),
        None => {
            info!("nothing to do, see --help");
            Ok(())
        }
    }
}

fn validate(path: &Path) -> anyhow::Result<()> {
    let _span = tracy_client::span!("validate");

    // miette reports render their own source snippets, keep them intact.
    let config = Config::load(path)
        .map_err(|err| anyhow!("{err:?}"))
        .with_context(|| format!("{path:?} is not a valid config"))?;

    info!("config is valid");
    print_table(&config.table);
    Ok(())
}

fn print_table(table: &Table) {
    let sizing = match table.sizing {
        SizingPolicy::Unforced => "keep declared unit",
        SizingPolicy::Pixels => "force pixels",
        SizingPolicy::Percentages => "force percentages",
        SizingPolicy::Responsive => "force responsive",
    };

    println!("object resizing: {}", table.object_resizing);
    println!("resize bars: {}", table.has_resize_bars());
    println!("sizing: {sizing}");
}
