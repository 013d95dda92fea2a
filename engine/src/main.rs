// Engine main entry point
use clap::{Parser, Subcommand};
use engine::config::settings::EngineSettings;
use engine::data::catalog::CatalogStore;
use engine::error::EngineError;
use engine::services::{
    FormatPriceRequest, ImportCatalogRequest, ParsePriceRequest, PriceService, TypingRequest,
};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nativo-engine", version, about = "Currency parsing and formatting for NATIVO price fields")]
struct Cli {
    /// JSON settings file (defaults to the embedded configuration)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse typed text into its canonical decimal value
    Parse { input: String },

    /// Format text the way a price field displays it
    Format {
        input: String,
        /// Also run the blur step (whole numbers get ",00")
        #[arg(long)]
        finalize: bool,
    },

    /// Replay the input one keystroke at a time, then blur
    Type { input: String },

    /// Import a product catalog CSV and print it as JSON
    Import { file: String },
}

fn main() -> Result<(), EngineError> {
    let cli = Cli::parse();
    let settings = match EngineSettings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // No usable log filter yet, so report with the built-in one.
            init_tracing(&EngineSettings::default().log_filter);
            error!(config = ?cli.config, error = %e, "Failed to load engine settings");
            return Err(e);
        }
    };
    init_tracing(&settings.log_filter);

    info!(config = ?cli.config, "Starting NATIVO price engine");

    let catalog = Arc::new(RwLock::new(CatalogStore::new()));
    let service = PriceService::new(settings, catalog);

    let result = run(&service, cli.command);
    if let Err(e) = &result {
        if e.is_user_input() {
            warn!(error = %e, "Rejected input");
        } else {
            error!(error = %e, "Engine command failed");
        }
    }
    result
}

// RUST_LOG wins over the configured filter.
fn init_tracing(log_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(service: &PriceService, command: Commands) -> Result<(), EngineError> {
    match command {
        Commands::Parse { input } => {
            let response = service.parse_price(ParsePriceRequest { input: input.into() });
            match response.value {
                Some(value) => println!("{}", value),
                None => println!("null"),
            }
        }
        Commands::Format { input, finalize } => {
            let response = service.format_price(FormatPriceRequest { input, finalize });
            println!("{}", service.display_with_symbol(&response.display));
        }
        Commands::Type { input } => {
            let response = service.simulate_typing(TypingRequest { input });
            for step in &response.steps {
                println!("{:<16} -> {}", step.typed, step.display);
            }
            println!("blur             -> {}", service.display_with_symbol(&response.finalized.display));
        }
        Commands::Import { file } => {
            let response = service.import_catalog(ImportCatalogRequest { file_path: file })?;
            info!(message = %response.message, "Import finished");
            println!("{}", serde_json::to_string_pretty(&service.list_products()?)?);
        }
    }

    Ok(())
}
