mod cli;
mod config;
mod export;
mod repository;
mod server;
mod source;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use export::ExportFormat;
use repository::SummaryFilter;
use summary::types::SummaryType;

#[derive(Parser)]
#[command(name = "codemind", version, about = "Browse and export AI conversation summaries")]
struct Cli {
    /// Override the projects endpoint for this run
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the chat-log directory over HTTP
    Serve,
    /// List projects from the index
    Projects,
    /// List summaries, optionally filtered
    List {
        /// Case-insensitive text matched against title, summary, project and tags
        #[arg(short, long, default_value = "")]
        query: String,
        /// Exact project name, or "all"
        #[arg(short, long, default_value = "all")]
        project: String,
        /// Exact summary type (e.g. "Security Update"), or "all"
        #[arg(short = 't', long = "type", default_value = "all")]
        summary_type: String,
    },
    /// Show one summary in full
    Show { id: String },
    /// Export one summary to a file
    Export {
        id: String,
        #[arg(short, long, value_enum, default_value = "md")]
        format: ExportFormat,
        /// Directory to write into (defaults to `export.output_dir`)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// Classify a single chat-log JSON file and print its summary
    Classify { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::CodemindConfig::load()?;
    if let Some(endpoint) = cli.endpoint {
        config.source.endpoint = endpoint;
    }

    // Log to stderr so stdout stays clean for rendered output and exports.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve => server::serve(config).await?,
        Command::Projects => cli::projects::projects(&config).await?,
        Command::List {
            query,
            project,
            summary_type,
        } => {
            let filter = SummaryFilter {
                query,
                project: all_or(project),
                summary_type: all_or(summary_type)
                    .map(|t| t.parse::<SummaryType>())
                    .transpose()
                    .map_err(anyhow::Error::msg)?,
            };
            cli::list::list(&config, &filter).await?;
        }
        Command::Show { id } => cli::show::show(&config, &id).await?,
        Command::Export {
            id,
            format,
            output,
            stdout,
        } => cli::export::export(&config, &id, format, output.as_deref(), stdout).await?,
        Command::Classify { file } => cli::classify::classify(&config, &file)?,
    }

    Ok(())
}

/// `"all"` means no filter.
fn all_or(value: String) -> Option<String> {
    (value != "all").then_some(value)
}
