//! Entry point for the recommendation front-end.
//!
//! Loads the catalog tables, the encodings bundle, and the model artifact
//! once, then serves requests over shared read-only state. Any load
//! failure aborts startup; the process never serves without its tables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use tracing::info;

use catalog::Catalog;
use encodings::EncodingTables;
use predictor::{HybridModel, Predictor};
use server::{create_router, AppState};

/// Genre-filtered movie recommendation web front-end
#[derive(Parser)]
#[command(name = "reel-serve")]
#[command(about = "Serves genre-filtered movie recommendations from a trained hybrid model", long_about = None)]
struct Cli {
    /// Path to the directory containing movies.dat and ratings.dat
    #[arg(long, default_value = "data/ml-1m")]
    data_dir: PathBuf,

    /// Path to the encodings bundle (JSON)
    #[arg(long, default_value = "model/encodings.json")]
    encodings: PathBuf,

    /// Path to the trained hybrid model artifact (JSON)
    #[arg(long, default_value = "model/hybrid_model.json")]
    model: PathBuf,

    /// Address to bind the HTTP server on
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!("Loading catalog tables from {:?}", cli.data_dir);
    let catalog = Arc::new(
        Catalog::load_from_files(&cli.data_dir).context("Loading catalog tables")?,
    );
    let (movies, rated) = catalog.counts();
    info!("Catalog ready: {} movies, {} with ratings", movies, rated);

    let encodings = Arc::new(
        EncodingTables::load(&cli.encodings).context("Loading encodings bundle")?,
    );

    let model = HybridModel::load(&cli.model).context("Loading model artifact")?;
    ensure!(
        model.genre_width() == encodings.genre_encoder().width(),
        "Model expects {} genre columns but the encoder has {}",
        model.genre_width(),
        encodings.genre_encoder().width()
    );
    let predictor: Arc<dyn Predictor> = Arc::new(model);

    let state = AppState::new(catalog, encodings, predictor);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("Binding {}", cli.bind))?;
    info!("Server running on http://{}", cli.bind);
    axum::serve(listener, app).await.context("Serving HTTP")?;

    Ok(())
}
