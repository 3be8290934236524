//! NEO FOCUS API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use neofocus::api::{self, ApiError, Config};
use neofocus::api::routes::ApiDoc;
use neofocus::db::utils::resolve_db_path;
use neofocus::db::{Database, DbError, SqliteDatabase};
use thiserror::Error;
use utoipa::OpenApi;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(neofocus::binary::database))]
    Database(#[from] DbError),

    #[error("API server error: {0}")]
    #[diagnostic(code(neofocus::binary::api))]
    Api(#[from] ApiError),

    #[error("Failed to render OpenAPI document: {0}")]
    #[diagnostic(code(neofocus::binary::openapi))]
    OpenApi(#[from] serde_json::Error),
}

#[derive(Parser)]
#[command(name = "neofocus")]
#[command(author, version, about = "NEO FOCUS local API server", long_about = None)]
struct Cli {
    /// Database file path (defaults to $NEOFOCUS_DB, then data/neofocus.db)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Front-end asset directory (defaults to $NEOFOCUS_ASSETS_DIR, then out/)
    #[arg(long)]
    assets: Option<PathBuf>,

    /// First port to try
    #[arg(long, default_value = "8000")]
    port_start: u16,

    /// Last port to try
    #[arg(long, default_value = "8009")]
    port_end: u16,

    /// Print the OpenAPI document and exit
    #[arg(long)]
    openapi: bool,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    run().await.map_err(Into::into)
}

async fn run() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    if cli.openapi {
        println!("{}", ApiDoc::openapi().to_pretty_json()?);
        return Ok(());
    }

    let db_path = resolve_db_path(cli.db);
    eprintln!("Opening database at {:?}", db_path);

    let db = SqliteDatabase::open(&db_path).await?;
    db.initialize().await?;

    let mut config = Config::new().with_ports(cli.port_start..=cli.port_end);
    if let Some(assets) = cli.assets {
        config = config.with_assets_dir(assets);
    }

    api::run(config, db).await?;
    Ok(())
}
