//! CLI entry point for space-export

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use space_export::{
    run_chat_export, run_document_export, DocumentsScope, ExportConfig, ExportFormat, Result,
    SpaceClient,
};

#[derive(Parser)]
#[command(
    name = "space-export",
    version,
    about = "Export chats and documents from a Space workspace to a local file tree"
)]
struct Cli {
    /// API token to use for requests
    #[arg(long, env = "SPACE_TOKEN", hide_env_values = true)]
    token: String,

    /// Server address (e.g. organization.example.com)
    #[arg(long, env = "SPACE_SERVER")]
    server: String,

    /// Export file format
    #[arg(long, env = "FORMAT", value_enum, default_value_t = ExportFormat::Json)]
    format: ExportFormat,

    /// Root directory of the export tree
    #[arg(long, default_value = "export")]
    output: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export all chats available to the user
    Chats,
    /// Export all documents available to the user
    Documents {
        /// Documents scope
        #[arg(long, env = "SCOPE", value_enum, default_value_t = DocumentsScope::All)]
        scope: DocumentsScope,

        /// Project key; restricts the project scope to a single project
        #[arg(long, env = "PROJECT_KEY")]
        project_key: Option<String>,
    },
}

fn setup_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(cli: Cli) -> Result<()> {
    let client = SpaceClient::new(&cli.server, cli.token)?;

    match cli.command {
        Commands::Chats => {
            let config = ExportConfig {
                base_path: cli.output,
                format: cli.format,
                ..ExportConfig::default()
            };
            run_chat_export(&client, &config).await
        }
        Commands::Documents { scope, project_key } => {
            let config = ExportConfig {
                base_path: cli.output,
                format: cli.format,
                scope,
                project_key,
            };
            run_document_export(&client, &config).await
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
