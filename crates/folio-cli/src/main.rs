//! Folio - main entry point.
//!
//! Initializes logging and configuration, loads the catalog, then renders the
//! requested view.

use clap::Parser;
use folio_cli::{
    load_catalog, render_detail, render_json, render_table, source_for, Args, LoadError,
    OutputFormat,
};
use folio_core::{AppConfig, ConfigError};
use folio_engine::CatalogSession;
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load catalog: {0}")]
    Load(#[from] LoadError),

    #[error("Failed to create runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("Card {0} is not in the current view")]
    NotInView(String),

    #[error("Failed to render JSON: {0}")]
    Render(#[from] serde_json::Error),
}

fn run(args: Args) -> Result<(), AppError> {
    let config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => match AppConfig::load() {
            Err(ConfigError::NoConfigDir) => {
                tracing::warn!("No config directory found, using defaults");
                AppConfig::default()
            }
            loaded => loaded?,
        },
    };
    tracing::info!("Theme preference: {:?}", config.appearance.theme);

    let location = args
        .catalog
        .clone()
        .unwrap_or_else(|| config.catalog.location.clone());
    let source = source_for(&location)?;

    // The only await in the program
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(AppError::Runtime)?;
    let store = rt.block_on(load_catalog(source.as_ref()))?;

    let mut session = CatalogSession::new(store, args.sort_spec(&config.display));
    session.set_criteria(args.criteria());

    if let Some(id) = &args.show {
        if session.open(&id.as_str().into()).is_none() {
            return Err(AppError::NotInView(id.clone()));
        }
        session.step_by(args.step);
    }

    let output = match (args.format, render_detail(&session)) {
        (OutputFormat::Json, _) => render_json(&session)?,
        (OutputFormat::Table, Some(detail)) => detail,
        (OutputFormat::Table, None) => render_table(&session.view()),
    };
    print!("{output}");
    if args.format == OutputFormat::Json {
        println!();
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        eprintln!("folio: {e}");
        std::process::exit(1);
    }
}
