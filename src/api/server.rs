//! # Beer API HTTP Server
//!
//! Axum-based HTTP server exposing the beer store at `/api/v1/beer`.

use std::io;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use uuid::Uuid;

use crate::config::ServerConfig;
use crate::domain::Beer;
use crate::observability::{Logger, Severity};
use crate::store::BeerStore;

use super::dto::BeerPayload;
use super::errors::{ApiError, ApiResult};

/// Beer API server state
pub struct ApiServer<S: BeerStore> {
    store: Arc<S>,
}

impl<S: BeerStore + 'static> ApiServer<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        let state = Arc::new(self);

        Router::new()
            .route("/api/v1/beer", post(create_beer))
            .route("/api/v1/beer/:beer_id", get(get_beer).put(update_beer))
            .with_state(state)
    }

    /// Bind and serve until the process is stopped
    pub async fn serve(self, config: &ServerConfig) -> io::Result<()> {
        let addr = config.socket_addr();
        let router = self.router().layer(cors_layer(config));

        let listener = TcpListener::bind(&addr).await?;
        Logger::log(Severity::Info, "SERVER_LISTENING", &[("addr", &addr)]);

        axum::serve(listener, router).await
    }
}

/// Shared state type
type ServerState<S> = Arc<ApiServer<S>>;

/// Build the CORS layer from configured origins
///
/// An empty origin list means permissive, for development.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Parse a path segment into a beer id
fn parse_beer_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidId(raw.to_string()))
}

/// Query parameters accepted by the get endpoint
///
/// `isCold` is part of the public contract but carries no behavior.
#[derive(Debug, Default, Deserialize)]
struct GetBeerParams {
    #[serde(rename = "isCold")]
    #[allow(dead_code)]
    is_cold: Option<String>,
}

/// Get a beer by id
async fn get_beer<S: BeerStore + 'static>(
    State(server): State<ServerState<S>>,
    Path(beer_id): Path<String>,
    Query(_params): Query<GetBeerParams>,
) -> ApiResult<Json<Beer>> {
    let id = parse_beer_id(&beer_id)?;
    let beer = server.store.get_by_id(id)?;
    Ok(Json(beer))
}

/// Create a new beer
async fn create_beer<S: BeerStore + 'static>(
    State(server): State<ServerState<S>>,
    Json(payload): Json<BeerPayload>,
) -> ApiResult<(StatusCode, Json<Beer>)> {
    let beer = server.store.create(payload.into())?;

    Logger::log(
        Severity::Info,
        "BEER_CREATED",
        &[("id", &beer.id.to_string())],
    );

    Ok((StatusCode::CREATED, Json(beer)))
}

/// Update an existing beer
async fn update_beer<S: BeerStore + 'static>(
    State(server): State<ServerState<S>>,
    Path(beer_id): Path<String>,
    Json(payload): Json<BeerPayload>,
) -> ApiResult<StatusCode> {
    let id = parse_beer_id(&beer_id)?;
    server.store.update_by_id(id, payload.into())?;

    Logger::log(Severity::Info, "BEER_UPDATED", &[("id", &beer_id)]);

    Ok(StatusCode::NO_CONTENT)
}
