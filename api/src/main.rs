//! roman-chord-api - Roman-numeral chord knowledge-graph service
//!
//! Serves two lookups over the decomposition pipeline: a structured
//! JSON record per chord symbol, and an RDF fragment under the
//! Polifonia roman-chord ontology.

use anyhow::Result;
use clap::Parser;
use roman_chord_api::{build_router, AppState};
use roman_ontology::graph::RdfFormat;
use tracing::info;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "roman-chord-api", version, about)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// RDF serialization for the ontology route ("turtle" or "ntriples")
    #[arg(long, default_value = "turtle")]
    rdf_format: RdfFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!(
        "Starting roman-chord-api v{}",
        env!("CARGO_PKG_VERSION")
    );

    let state = AppState::new(args.rdf_format);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind((args.bind.as_str(), args.port)).await?;
    info!("roman-chord-api listening on http://{}:{}", args.bind, args.port);
    info!("Health check: http://{}:{}/health", args.bind, args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
