use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use convdocs_core::Settings;
use convdocs_site::{commands, watch, Result, Status};

#[derive(Debug, Parser)]
#[command(name = "convdocs", version, about = "Build and inspect the coding convention docs site")]
struct Cli {
    /// Settings file (defaults to ./convdocs.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render the whole site
    Build {
        /// Output directory (overrides outDir)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render the site, then rebuild on content changes
    Watch {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List catalog rules
    List {
        /// Only rules in this category
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print one rule's resolved content
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Compare the catalog with the content directory
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("convdocs=debug,convdocs_core=debug,convdocs_site=debug")
        } else {
            EnvFilter::new("convdocs=info,convdocs_core=info,convdocs_site=info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).without_time())
        .with(filter)
        .init();
}

fn load_settings(config: Option<&PathBuf>) -> Result<Settings> {
    let settings = match config {
        Some(path) => Settings::load(path)?,
        None => Settings::discover(Path::new("."))?,
    };
    Ok(settings)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let settings = load_settings(cli.config.as_ref())?;
    let mut out = io::stdout().lock();
    let mut err = io::stderr();

    let status = match cli.command {
        Commands::Build { out: out_dir } => {
            let out_dir = out_dir.unwrap_or_else(|| settings.out_dir.clone());
            commands::build(settings, &out_dir, &mut out)?
        }
        Commands::Watch { out: out_dir } => {
            let out_dir = out_dir.unwrap_or_else(|| settings.out_dir.clone());
            watch::watch(&settings, &out_dir)?;
            Status::Success
        }
        Commands::List { category, json } => {
            commands::list(&settings, category.as_deref(), json, &mut out, &mut err)?
        }
        Commands::Show { id, json } => commands::show(&settings, &id, json, &mut out, &mut err)?,
        Commands::Check => commands::check(&settings, &mut out)?,
    };
    Ok(status.into())
}
