mod output;

use std::{path::PathBuf, process::ExitCode};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use grouplist_core::{
    Catalog, CommandResult, ListGroupsCommand, LocaleManager, Sink, gs::FileStorage,
};
use grouplist_shared::config::{Config, load_config};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

use output::{AnsiSink, JsonSink, PlainSink};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Coloured text for a terminal
    Ansi,
    /// Text without any styling
    Plain,
    /// One JSON text component per line, including click and hover actions
    Json,
}

/// List every permission group with its weight and the tracks it is on.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file to read
    #[arg(long, default_value = Config::FILENAME)]
    config: PathBuf,

    /// Directory containing `groups/` and `tracks/`; overrides the config
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Command label used in click actions; overrides the config
    #[arg(long)]
    label: Option<String>,

    /// How to print the listing
    #[arg(long, value_enum, default_value = "ansi")]
    format: Format,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout only carries the listing.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("grouplist=info")),
        )
        .init();

    let args = Args::parse();
    let mut config: Config = load_config(&args.config)?;
    config.resolve_paths(&args.config);

    let mut locale = LocaleManager::new(config.locale.prefix);
    if let Some(path) = &config.locale.file {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read locale file {}", path.display()))?;
        let applied = locale
            .load_overrides(&contents)
            .with_context(|| format!("Failed to parse locale file {}", path.display()))?;
        tracing::info!("loaded {applied} message overrides from {}", path.display());
    }

    let data_dir = args.data_dir.unwrap_or(config.storage.data_dir);
    let label = args.label.unwrap_or(config.command.label);
    tracing::debug!("reading catalog from {}", data_dir.display());

    let catalog = Catalog::new(FileStorage::new(data_dir));
    let command = ListGroupsCommand::new(locale);

    let result = match args.format {
        Format::Ansi => run(&command, &catalog, &mut AnsiSink(std::io::stdout()), &label).await,
        Format::Plain => run(&command, &catalog, &mut PlainSink(std::io::stdout()), &label).await,
        Format::Json => run(&command, &catalog, &mut JsonSink(std::io::stdout()), &label).await,
    };

    Ok(match result {
        Some(result) => ExitCode::from(result.exit_code()),
        None => ExitCode::from(130),
    })
}

/// Runs the listing, abandoning it if interrupted. Returns `None` on interrupt.
async fn run(
    command: &ListGroupsCommand,
    catalog: &Catalog<FileStorage>,
    sink: &mut impl Sink,
    label: &str,
) -> Option<CommandResult> {
    tokio::select! {
        result = command.execute(catalog, sink, label) => Some(result),
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("interrupted, abandoning listing");
            None
        }
    }
}
