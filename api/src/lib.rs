//! roman-chord-api library - HTTP transport for chord decomposition
//!
//! A thin, stateless service over the decomposition pipeline: one
//! route returns the structured decomposition record as JSON, one
//! returns the knowledge-graph fragment as RDF text. All state is the
//! serialization format chosen at startup; handlers share nothing
//! mutable.

use axum::Router;
use roman_ontology::graph::RdfFormat;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone, Copy)]
pub struct AppState {
    /// RDF serialization used by the ontology route
    pub format: RdfFormat,
}

impl AppState {
    /// Create new application state
    #[must_use]
    pub fn new(format: RdfFormat) -> Self {
        Self { format }
    }
}

/// Build application router
///
/// `/:chord` captures any single path segment; the static routes take
/// priority over it in the route matcher.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/health", get(api::health_check))
        .route("/roman-chord-ontology/:chord", get(api::get_chord_graph))
        .route("/:chord", get(api::get_chord_decomposition))
        .with_state(state)
}
