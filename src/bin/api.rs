//! Todo API server binary.
//!
//! This binary resolves configuration, connects the concrete MongoDB
//! implementation and passes it to the API server. The API layer remains
//! agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use todo_api::api::{self, ApiError};
use todo_api::config::{Config, ConfigError, DEFAULT_ENV_FILE};
use todo_api::db::{DbError, MongoDatabase};
use tracing::info;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DbError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "todo-api")]
#[command(author, version, about = "Todo API server", long_about = None)]
struct Cli {
    /// Env file read before startup unless ENV=production
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Host address to bind to (overrides HOST)
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    api::init_tracing();

    run(cli).await.map_err(Into::into)
}

async fn run(cli: Cli) -> Result<(), BinaryError> {
    let mut config = Config::load(&cli.env_file)?;
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    let db = MongoDatabase::connect(&config.mongodb_uri, &config.database, &config.collection)
        .await?;
    info!(
        database = %config.database,
        collection = %config.collection,
        "Connected to MongoDB"
    );

    api::run(&config, db).await?;

    Ok(())
}
