//! # API REST
//!
//! REST API for the PharmOps registry.
//!
//! Handles:
//! - read-only HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, status codes, CORS)
//!
//! All data comes from `pharmops-registry`; handlers never mutate state.

#![warn(rust_2018_idioms)]

pub mod dto;

use axum::{
    extract::{Path as AxumPath, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use dto::{
    AdmissionRes, DepartmentRes, ErrorRes, HealthRes, ListAdmissionsRes, ListDepartmentsRes,
    ListMessagesRes, ListRolesRes, ListSeveritiesRes, MessageRes, MessagesQuery, RoleRes,
    RouteRes, SeverityRes, ValidateReq, ValidateRes,
};
use pharmops_registry::{
    departments, messages, severity, validation, Catalog, MessageCategory, RegistryError,
    RoleCapabilityRegistry, RuntimeConfig, ValidationPattern,
};

type ApiError = (StatusCode, Json<ErrorRes>);

/// Application state shared across REST handlers.
#[derive(Clone)]
pub struct AppState {
    cfg: Arc<RuntimeConfig>,
    registry: RoleCapabilityRegistry,
}

impl AppState {
    pub fn new(cfg: Arc<RuntimeConfig>) -> Self {
        Self {
            cfg,
            registry: RoleCapabilityRegistry::new(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_roles,
        describe_role,
        list_admissions,
        route_admission,
        list_severities,
        list_departments,
        list_messages,
        validate_value,
        catalog,
    ),
    components(schemas(
        HealthRes,
        ErrorRes,
        RoleRes,
        ListRolesRes,
        AdmissionRes,
        ListAdmissionsRes,
        RouteRes,
        SeverityRes,
        ListSeveritiesRes,
        DepartmentRes,
        ListDepartmentsRes,
        MessageRes,
        ListMessagesRes,
        ValidateReq,
        ValidateRes,
    ))
)]
pub struct ApiDoc;

/// Build the REST router with Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/roles", get(list_roles))
        .route("/roles/:role_id", get(describe_role))
        .route("/admissions", get(list_admissions))
        .route("/admissions/:admission_type/route", get(route_admission))
        .route("/severities", get(list_severities))
        .route("/departments", get(list_departments))
        .route("/messages", get(list_messages))
        .route("/validate", post(validate_value))
        .route("/catalog", get(catalog))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn error_response(status: StatusCode, err: RegistryError) -> ApiError {
    tracing::debug!("request rejected with {}: {}", status, err);
    (
        status,
        Json(ErrorRes {
            error: err.to_string(),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint.
async fn health(State(state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: format!("{} registry is alive", state.cfg.organisation_name()),
    })
}

#[utoipa::path(
    get,
    path = "/roles",
    responses(
        (status = 200, description = "Every role with its permissions and features", body = ListRolesRes)
    )
)]
async fn list_roles(State(state): State<AppState>) -> Json<ListRolesRes> {
    let roles = state
        .registry
        .roles()
        .into_iter()
        .map(RoleRes::from)
        .collect();
    Json(ListRolesRes { roles })
}

#[utoipa::path(
    get,
    path = "/roles/{role_id}",
    params(
        ("role_id" = String, Path, description = "Role identifier, for example `pharmacist`")
    ),
    responses(
        (status = 200, description = "Role description", body = RoleRes),
        (status = 404, description = "Unknown role", body = ErrorRes)
    )
)]
/// Describe a single role.
async fn describe_role(
    State(state): State<AppState>,
    AxumPath(role_id): AxumPath<String>,
) -> Result<Json<RoleRes>, ApiError> {
    state
        .registry
        .describe(&role_id)
        .map(|p| Json(RoleRes::from(p)))
        .map_err(|e| error_response(StatusCode::NOT_FOUND, e))
}

#[utoipa::path(
    get,
    path = "/admissions",
    responses(
        (status = 200, description = "Admission types in declaration order", body = ListAdmissionsRes)
    )
)]
async fn list_admissions(State(state): State<AppState>) -> Json<ListAdmissionsRes> {
    let admission_types = state
        .registry
        .admission_types()
        .into_iter()
        .map(AdmissionRes::from)
        .collect();
    Json(ListAdmissionsRes { admission_types })
}

#[utoipa::path(
    get,
    path = "/admissions/{admission_type}/route",
    params(
        ("admission_type" = String, Path, description = "Admission type, for example `emergency`")
    ),
    responses(
        (status = 200, description = "Priority and delivery mode", body = RouteRes),
        (status = 404, description = "Unknown admission type", body = ErrorRes)
    )
)]
/// Route an admission to its priority and delivery mode.
async fn route_admission(
    State(state): State<AppState>,
    AxumPath(admission_type): AxumPath<String>,
) -> Result<Json<RouteRes>, ApiError> {
    let route = state
        .registry
        .route_admission(&admission_type)
        .map_err(|e| error_response(StatusCode::NOT_FOUND, e))?;

    Ok(Json(RouteRes {
        admission_type,
        priority: route.priority,
        delivery_mode: route.delivery_mode.as_str().into(),
    }))
}

#[utoipa::path(
    get,
    path = "/severities",
    responses(
        (status = 200, description = "Severity levels, most severe first", body = ListSeveritiesRes)
    )
)]
async fn list_severities() -> Json<ListSeveritiesRes> {
    let severity_levels = severity::profiles().iter().map(SeverityRes::from).collect();
    Json(ListSeveritiesRes { severity_levels })
}

#[utoipa::path(
    get,
    path = "/departments",
    responses(
        (status = 200, description = "Hospital departments", body = ListDepartmentsRes)
    )
)]
async fn list_departments() -> Json<ListDepartmentsRes> {
    let departments = departments::profiles()
        .iter()
        .map(DepartmentRes::from)
        .collect();
    Json(ListDepartmentsRes { departments })
}

#[utoipa::path(
    get,
    path = "/messages",
    params(MessagesQuery),
    responses(
        (status = 200, description = "System message templates", body = ListMessagesRes),
        (status = 400, description = "Unknown category", body = ErrorRes)
    )
)]
/// List system message templates, optionally filtered by category.
async fn list_messages(
    Query(query): Query<MessagesQuery>,
) -> Result<Json<ListMessagesRes>, ApiError> {
    let messages: Vec<MessageRes> = match query.category {
        Some(raw) => {
            let category: MessageCategory = raw
                .parse()
                .map_err(|e| error_response(StatusCode::BAD_REQUEST, RegistryError::from(e)))?;
            messages::messages_in(category).map(MessageRes::from).collect()
        }
        None => messages::MESSAGES.iter().map(MessageRes::from).collect(),
    };
    Ok(Json(ListMessagesRes { messages }))
}

#[utoipa::path(
    post,
    path = "/validate",
    request_body = ValidateReq,
    responses(
        (status = 200, description = "Whether the value matches the pattern", body = ValidateRes),
        (status = 400, description = "Unknown pattern", body = ErrorRes)
    )
)]
/// Check a value against a named validation pattern.
///
/// A mismatch is a normal `200` response with `valid: false`; only an unknown pattern name is
/// an error.
async fn validate_value(Json(req): Json<ValidateReq>) -> Result<Json<ValidateRes>, ApiError> {
    let pattern: ValidationPattern = req
        .pattern
        .parse()
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, RegistryError::from(e)))?;

    Ok(Json(ValidateRes {
        pattern: pattern.as_str().into(),
        valid: validation::is_match(pattern, &req.value),
    }))
}

#[utoipa::path(
    get,
    path = "/catalog",
    responses(
        (status = 200, description = "Every registry table in one document")
    )
)]
async fn catalog() -> Json<Catalog> {
    Json(Catalog::snapshot())
}
