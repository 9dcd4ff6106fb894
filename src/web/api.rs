use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use chrono::Utc;
use log::{error, warn};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::algorithm::AlgorithmKind;
use crate::compare::CompareOutcome;
use crate::graph::{normalize_label, Dimension, Graph};
use crate::web::models::*;
use crate::{Error, RouteEngine};

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Mutation and the invalidation it triggers happen under one lock
    pub engine: Arc<Mutex<RouteEngine>>,
}

impl AppState {
    pub fn new(engine: RouteEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, RouteEngine>, ApiError> {
        lock_engine(&self.engine)
    }
}

fn lock_engine(engine: &Mutex<RouteEngine>) -> Result<MutexGuard<'_, RouteEngine>, ApiError> {
    engine.lock().map_err(|_| {
        error!("Engine lock poisoned");
        internal_error("engine_unavailable", "Engine state is unavailable".to_string())
    })
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/routes", post(add_route))
        .route("/api/routes/directed", put(set_directed_route))
        .route("/api/path", get(find_path))
        .route("/api/compare", get(compare_all))
        .route("/api/reset", post(reset))
        .route("/api/preset", post(load_preset))
        .route("/api/graph", get(get_graph))
        .route("/api/health", get(health_check))
}

/// Add or update a two-way route
pub async fn add_route(
    State(state): State<AppState>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    let mut engine = state.lock()?;
    if !engine.add_route(&request.from, &request.to, request.cost, request.time) {
        return Err(rejected_route(&request));
    }
    Ok(Json(route_response(&engine, &request)))
}

/// Override one direction of a route
pub async fn set_directed_route(
    State(state): State<AppState>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    let mut engine = state.lock()?;
    if !engine.set_directed_route(&request.from, &request.to, request.cost, request.time) {
        return Err(rejected_route(&request));
    }
    Ok(Json(route_response(&engine, &request)))
}

/// Shortest path between two cities with one strategy
pub async fn find_path(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Result<Json<PathResponse>, ApiError> {
    let dimension: Dimension = query.dimension.parse().map_err(error_response)?;
    let algorithm = match &query.algorithm {
        Some(id) => id.parse::<AlgorithmKind>().map_err(error_response)?,
        None => AlgorithmKind::default(),
    };

    let mut engine = state.lock()?;
    let result = engine
        .find_path_with(algorithm, &query.start, &query.end, dimension)
        .map_err(error_response)?;
    let metrics = result
        .as_ref()
        .and_then(|result| engine.route_metrics(&result.path));

    Ok(Json(PathResponse {
        start: normalize_label(&query.start),
        end: normalize_label(&query.end),
        dimension: dimension.to_string(),
        algorithm: algorithm.id().to_string(),
        found: result.is_some(),
        result,
        metrics,
    }))
}

/// Run every strategy on both dimensions
pub async fn compare_all(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> Result<Json<CompareOutcome>, ApiError> {
    let shared = Arc::clone(&state.engine);
    // Exhaustive strategies can take a while; keep them off the async workers
    let outcome = tokio::task::spawn_blocking(move || {
        let mut engine = lock_engine(&shared)?;
        engine
            .compare_all(&query.start, &query.end)
            .map_err(error_response)
    })
    .await
    .map_err(|err| {
        error!("Comparison task failed: {}", err);
        internal_error("comparison_failed", err.to_string())
    })??;

    Ok(Json(outcome))
}

/// Clear the network, the cache and the landmark tables
pub async fn reset(State(state): State<AppState>) -> Result<Json<WebGraph>, ApiError> {
    let mut engine = state.lock()?;
    engine.reset();
    Ok(Json(WebGraph::from_engine(&engine)))
}

/// Replace the network with the bundled Gujarat one
pub async fn load_preset(State(state): State<AppState>) -> Result<Json<WebGraph>, ApiError> {
    let mut engine = state.lock()?;
    engine.load_gujarat_preset();
    Ok(Json(WebGraph::from_engine(&engine)))
}

/// Current network snapshot
pub async fn get_graph(State(state): State<AppState>) -> Result<Json<WebGraph>, ApiError> {
    let engine = state.lock()?;
    Ok(Json(WebGraph::from_engine(&engine)))
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let engine = state.lock()?;
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        node_count: engine.graph().node_count(),
        edge_count: engine.graph().edge_count(),
        timestamp: Utc::now(),
    }))
}

fn route_response(engine: &RouteEngine, request: &RouteRequest) -> RouteResponse {
    RouteResponse {
        from: normalize_label(&request.from),
        to: normalize_label(&request.to),
        node_count: engine.graph().node_count(),
        edge_count: engine.graph().edge_count(),
    }
}

fn rejected_route(request: &RouteRequest) -> ApiError {
    warn!("Rejected route request {:?}", request);
    error_response(Error::InvalidRoute(format!(
        "{} -> {} needs two distinct cities and non-negative finite cost and time",
        request.from, request.to
    )))
}

/// Maps an engine error onto a status code and JSON body
pub fn error_response(err: Error) -> ApiError {
    let (status, code) = match &err {
        Error::UnknownCity(_) => (StatusCode::NOT_FOUND, "unknown_city"),
        Error::UnknownDimension(_) => (StatusCode::BAD_REQUEST, "invalid_dimension"),
        Error::UnknownAlgorithm(_) => (StatusCode::BAD_REQUEST, "invalid_algorithm"),
        Error::InvalidRoute(_) => (StatusCode::BAD_REQUEST, "invalid_route"),
        Error::SearchLimitExceeded { .. } | Error::ExpansionLimitExceeded { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, "search_limit_exceeded")
        }
        Error::LandmarksUnavailable(_)
        | Error::MalformedResult { .. }
        | Error::Io(_)
        | Error::Json(_) => (StatusCode::INTERNAL_SERVER_ERROR, "algorithm_execution_failed"),
    };
    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
            details: None,
        }),
    )
}

fn internal_error(code: &str, message: String) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: code.to_string(),
            message,
            details: None,
        }),
    )
}
