mod clipboard;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use election_parser_client::ParseClient;
use election_parser_core::{AppConfig, FormController, FormInput, ParseMethod, ResultType};
use tracing_subscriber::EnvFilter;

use crate::clipboard::SystemClipboard;

#[derive(Debug, Parser)]
#[command(name = "election-parser")]
#[command(about = "Turn a county election results file into embeddable HTML")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Send one county/file pair to the parse-and-format backend.
    Submit {
        /// County name (sent lowercased).
        #[arg(long, default_value = "")]
        county: String,
        /// URL of the source election file.
        #[arg(long, default_value = "")]
        link: String,
        /// Whether to format candidates or ballot measures.
        #[arg(long, default_value_t = ResultType::Candidate)]
        output_type: ResultType,
        /// Format of the source file.
        #[arg(long, default_value_t = ParseMethod::Zip)]
        link_type: ParseMethod,
        /// Copy the resulting HTML to the system clipboard.
        #[arg(long)]
        copy: bool,
    },
    /// Print the effective configuration.
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = election_parser_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Submit {
            county,
            link,
            output_type,
            link_type,
            copy,
        } => {
            let input = FormInput {
                county_name: county,
                link,
                parse_method: link_type,
                result_type: output_type,
            };
            run_submit(&config, input, copy).await
        }
        Commands::Config => {
            println!("{config:#?}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn run_submit(config: &AppConfig, input: FormInput, copy: bool) -> anyhow::Result<ExitCode> {
    let client = ParseClient::from_config(config)?;
    let mut controller = FormController::with_input(client, input);

    if controller.submit().await.is_err() {
        eprintln!("{}", controller.state().result());
        return Ok(ExitCode::FAILURE);
    }
    println!("{}", controller.state().result());

    if copy {
        if controller.copy(&SystemClipboard::default()).await.is_err() {
            eprintln!("{}", controller.state().result());
            return Ok(ExitCode::FAILURE);
        }
        eprintln!("{}", controller.state().copy_label());
    }

    Ok(ExitCode::SUCCESS)
}
