//! paper-vista - Entry Point
//!
//! Interactive browsing plus one-shot `list` and `export` commands.

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tokio::io::BufReader;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use paper_vista::config::Config;
use paper_vista::controller::{self, Controller};
use paper_vista::error::ExportError;
use paper_vista::export;
use paper_vista::loader;
use paper_vista::models::{ExportFormat, FilterInputs};
use paper_vista::render;
use paper_vista::view::{LoadStatus, ViewState};

#[derive(Parser, Debug)]
#[command(name = "paper-vista")]
#[command(about = "Browse, filter and export a collection of papers")]
#[command(version)]
struct Cli {
    /// Payload location: http(s) URL, file:// URL or local path
    #[arg(long, global = true, env = "PAPER_VISTA_DATA")]
    data: Option<String>,

    /// Rows per page (overrides PAPER_VISTA_ROWS)
    #[arg(long, global = true)]
    rows: Option<String>,

    /// Directory for export artifacts
    #[arg(long, global = true, env = "PAPER_VISTA_EXPORT_DIR")]
    export_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive session (default)
    Browse,
    /// Render one page of the filtered set
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Page to show (1-based, clamped)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Export the filtered set
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
}

/// Filter inputs, taken as raw text and coerced permissively.
#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Title substring (case-insensitive)
    #[arg(long, default_value = "")]
    title: String,

    /// Minimum citation count
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    min_citations: String,

    /// Start year (inclusive)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    start_year: String,

    /// End year (inclusive)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    end_year: String,
}

impl From<FilterArgs> for FilterInputs {
    fn from(args: FilterArgs) -> Self {
        Self {
            title: args.title,
            min_citations: args.min_citations,
            start_year: args.start_year,
            end_year: args.end_year,
        }
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::from_env()?;

    if let Some(data) = &cli.data {
        config.data_source.clone_from(data);
    }
    if let Some(rows) = &cli.rows {
        config.rows_per_page = paper_vista::pagination::coerce_rows_per_page(rows);
    }
    if let Some(dir) = &cli.export_dir {
        config.export_dir.clone_from(dir);
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let config = build_config(&cli)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        data = %config.data_source,
        rows_per_page = config.rows_per_page,
        "Starting paper-vista"
    );

    match cli.command.unwrap_or(Command::Browse) {
        Command::Browse => {
            let mut controller = Controller::new(&config);
            controller.on_loaded(loader::load_papers(&config).await);

            let stdin = BufReader::new(tokio::io::stdin());
            let stdout = tokio::io::stdout();
            controller::run_interactive(&mut controller, stdin, stdout).await?;
        }
        Command::List { filters, page } => {
            let state = load_state(&config, filters.into()).await.at_page(page);
            print!("{}", render::format_screen(&state, &BTreeSet::new()));
        }
        Command::Export { filters, format } => {
            let state = load_state(&config, filters.into()).await;
            if let LoadStatus::Failed(message) = state.status() {
                anyhow::bail!("{message}");
            }

            match export::export_to_dir(state.filtered(), format, &config.export_dir).await {
                Ok(path) => println!("Exported {} papers to {}", state.filtered().len(), path.display()),
                Err(ExportError::Empty) => println!("{}", ExportError::Empty),
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}

async fn load_state(config: &Config, inputs: FilterInputs) -> ViewState {
    let state = ViewState::new(config.rows_per_page);
    match loader::load_papers(config).await {
        Ok(papers) => state.loaded(papers).with_inputs(inputs),
        Err(e) => state.failed(e.to_user_message()),
    }
}
