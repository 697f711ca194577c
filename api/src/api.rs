//! HTTP handlers.
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /health` | service status JSON |
//! | `GET /:chord` | decomposition record JSON |
//! | `GET /roman-chord-ontology/:chord` | RDF text (Turtle or N-Triples) |
//!
//! Invalid chord symbols map to `404 Not Found` with a JSON `detail`
//! message; only an internal encoding defect yields a `500`.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{debug, error};

use roman_ontology::graph::RdfFormat;
use roman_ontology::{chord_graph, decompose_validated, ChordDecomposition, Error};

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "roman-chord-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Error envelope returned to clients.
#[derive(Debug, Serialize)]
struct ErrorDetail {
    detail: String,
}

/// Pipeline error wrapped for transport.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        ApiError(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            // A symbol the pipeline rejects is a resource that does
            // not exist, not a bad request.
            Error::InvalidChord(_) | Error::InvalidAlteration(_) | Error::Schema(_) => {
                StatusCode::NOT_FOUND
            }
            Error::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!("encoding failure: {}", self.0);
        } else {
            debug!("rejected chord symbol: {}", self.0);
        }
        (
            status,
            Json(ErrorDetail {
                detail: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// GET /:chord
///
/// Decomposes the symbol and returns the structured record.
pub async fn get_chord_decomposition(
    Path(chord): Path<String>,
) -> Result<Json<ChordDecomposition>, ApiError> {
    let record = decompose_validated(&chord)?;
    debug!("decomposed '{}' as {} (inversion {})", chord, record.plain_roman, record.inversion);
    Ok(Json(record))
}

/// GET /roman-chord-ontology/:chord
///
/// Runs the full pipeline and returns the serialized graph.
pub async fn get_chord_graph(
    State(state): State<AppState>,
    Path(chord): Path<String>,
) -> Result<Response, ApiError> {
    let graph = chord_graph(&chord)?;
    let body = graph.serialize(state.format);
    let content_type = match state.format {
        RdfFormat::Turtle => "text/turtle; charset=utf-8",
        RdfFormat::NTriples => "application/n-triples; charset=utf-8",
    };
    debug!("encoded '{}' as {} triples", chord, graph.len());
    Ok(([(header::CONTENT_TYPE, content_type)], body).into_response())
}
