use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::datamodel::{format_id, Info, Properties, QueryResult, SketchKind};
use crate::error::SkizzeError;
use crate::manager::Manager;

/// Application state shared across handlers.
pub struct AppState {
    pub manager: Arc<Manager>,
}

// ============================================================================
// Health Check
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

// ============================================================================
// Sketches
// ============================================================================

#[derive(Deserialize)]
pub struct CreateSketchRequest {
    pub name: String,
    pub kind: String,
    #[serde(default)]
    pub properties: Properties,
}

#[derive(Serialize)]
pub struct SketchEntry {
    pub name: String,
    pub kind: String,
}

#[derive(Serialize)]
pub struct SketchesResponse {
    pub sketches: Vec<SketchEntry>,
}

pub async fn create_sketch(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateSketchRequest>,
) -> Result<Json<SketchEntry>, ApiError> {
    let kind = SketchKind::from_tag(&request.kind)?;
    let info = Info::new(request.name.clone(), kind, request.properties);
    state.manager.create_sketch(info)?;

    Ok(Json(SketchEntry {
        name: request.name,
        kind: kind.tag().to_string(),
    }))
}

pub async fn list_sketches(State(state): State<Arc<AppState>>) -> Json<SketchesResponse> {
    let sketches = state
        .manager
        .get_sketches()
        .into_iter()
        .map(|(name, kind)| SketchEntry { name, kind })
        .collect();
    Json(SketchesResponse { sketches })
}

pub async fn delete_sketch(
    State(state): State<Arc<AppState>>,
    Path((name, kind)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = sketch_id(&name, &kind)?;
    state.manager.delete_sketch(&id)?;
    Ok(Json(serde_json::json!({ "deleted": id })))
}

#[derive(Deserialize)]
pub struct ValuesRequest {
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Serialize)]
pub struct AddResponse {
    pub added: usize,
}

pub async fn add_to_sketch(
    State(state): State<Arc<AppState>>,
    Path((name, kind)): Path<(String, String)>,
    Json(request): Json<ValuesRequest>,
) -> Result<Json<AddResponse>, ApiError> {
    let id = sketch_id(&name, &kind)?;
    state.manager.add_to_sketch(&id, &request.values)?;
    Ok(Json(AddResponse {
        added: request.values.len(),
    }))
}

pub async fn query_sketch(
    State(state): State<Arc<AppState>>,
    Path((name, kind)): Path<(String, String)>,
    Json(request): Json<ValuesRequest>,
) -> Result<Json<QueryResult>, ApiError> {
    let id = sketch_id(&name, &kind)?;
    let result = state.manager.get_from_sketch(&id, &request.values)?;
    Ok(Json(result))
}

fn sketch_id(name: &str, kind: &str) -> Result<String, ApiError> {
    let kind = SketchKind::from_tag(kind)?;
    Ok(format_id(name, kind))
}

// ============================================================================
// Domains
// ============================================================================

#[derive(Deserialize)]
pub struct CreateDomainRequest {
    pub name: String,
    #[serde(default)]
    pub properties: Properties,
}

#[derive(Serialize)]
pub struct DomainEntry {
    pub name: String,
    pub size: usize,
}

#[derive(Serialize)]
pub struct DomainsResponse {
    pub domains: Vec<DomainEntry>,
}

pub async fn create_domain(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateDomainRequest>,
) -> Result<Json<DomainEntry>, ApiError> {
    state
        .manager
        .create_domain(&request.name, request.properties)?;
    Ok(Json(DomainEntry {
        name: request.name,
        size: SketchKind::ALL.len(),
    }))
}

pub async fn list_domains(State(state): State<Arc<AppState>>) -> Json<DomainsResponse> {
    let domains = state
        .manager
        .get_domains()
        .into_iter()
        .map(|(name, size)| DomainEntry { name, size })
        .collect();
    Json(DomainsResponse { domains })
}

pub async fn delete_domain(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.manager.delete_domain(&name)?;
    Ok(Json(serde_json::json!({ "deleted": name })))
}

pub async fn add_to_domain(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(request): Json<ValuesRequest>,
) -> Result<Json<AddResponse>, ApiError> {
    state.manager.add_to_domain(&name, &request.values)?;
    Ok(Json(AddResponse {
        added: request.values.len(),
    }))
}

// ============================================================================
// Checkpoint
// ============================================================================

pub async fn save(State(state): State<Arc<AppState>>) -> Result<Json<serde_json::Value>, ApiError> {
    state.manager.save()?;
    Ok(Json(serde_json::json!({ "saved": true })))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub struct ApiError(SkizzeError);

impl From<SkizzeError> for ApiError {
    fn from(err: SkizzeError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.0 {
            SkizzeError::InvalidType(_) | SkizzeError::InvalidProperties(_) => {
                StatusCode::BAD_REQUEST
            }
            SkizzeError::AlreadyExists(_) | SkizzeError::Locked(_) => StatusCode::CONFLICT,
            SkizzeError::NotFound(_) => StatusCode::NOT_FOUND,
            SkizzeError::ShuttingDown => StatusCode::SERVICE_UNAVAILABLE,
            SkizzeError::CorruptData { .. } | SkizzeError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = serde_json::json!({
            "error": self.0.to_string()
        });
        (status, Json(body)).into_response()
    }
}
