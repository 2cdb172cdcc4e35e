//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{SecondsFormat, Utc};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::analytics::{GroupBy, Period, RouteRecord};
use crate::auth::{
    AuthError, Credentials, FieldErrors, PasswordHash, PasswordHashError, RegistrationError,
    RegistrationRequest, Role, User,
};
use crate::domain::{AnalyticCode, DomainError, StationId};
use crate::loader::LoaderError;
use crate::network::RoutingError;
use crate::planner::RoutePlanner;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/register", post(register))
        .route("/api/v1/me", get(me))
        .route("/api/v1/stations", get(list_stations))
        .route("/api/v1/routes", post(create_route))
        .route("/api/v1/stats/distances", get(distance_stats))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Resolve the user named by the `Authorization` header.
fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<User, AppError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingCredentials)?
        .to_str()
        .map_err(|_| AuthError::MalformedCredentials("header is not visible ASCII"))?;

    let credentials = Credentials::from_header(value)?;
    Ok(credentials.authenticate(state.users.as_ref())?)
}

/// Register a new API user.
async fn register(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    // An unreadable body validates as an empty one, reporting every field as required
    let req: RegistrationRequest = serde_json::from_slice(&body).unwrap_or_else(|e| {
        debug!(error = %e, "Unreadable registration body");
        RegistrationRequest::default()
    });

    let valid = req.validate()?;
    let user = User::new(
        valid.username,
        valid.email,
        PasswordHash::new(&valid.password)?,
        vec![Role::Api],
    );
    let user = state.users.insert(user)?;
    info!(username = %user.username, id = %user.id, "Registered user");

    let body = RegisterResponse {
        message: "User registered successfully",
        user: UserSummary::from_user(&user),
    };
    Ok((StatusCode::CREATED, Json(body)).into_response())
}

/// Describe the authenticated user.
async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MeResponse>, AppError> {
    let user = authenticate(&state, &headers)?;
    Ok(Json(MeResponse::from_user(&user)))
}

/// List every station, sorted by name.
async fn list_stations(
    State(state): State<AppState>,
) -> Result<Json<Vec<StationResponse>>, AppError> {
    let network = state.network.network().await?;

    let mut stations = network.stations();
    stations.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(b.id())));

    Ok(Json(
        stations
            .into_iter()
            .map(StationResponse::from_station)
            .collect(),
    ))
}

/// Compute the shortest route between two stations and record it.
async fn create_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    authenticate(&state, &headers)?;

    // Parse JSON manually so we can log the body on failure
    let req: CreateRouteRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "Invalid route request JSON");
        AppError::BadRequest {
            message: "Invalid JSON".to_string(),
        }
    })?;
    let fields = req
        .into_fields()
        .map_err(|message| AppError::BadRequest { message })?;

    let origin = StationId::parse(&fields.from_station_id).map_err(DomainError::from)?;
    let destination = StationId::parse(&fields.to_station_id).map_err(DomainError::from)?;
    let analytic_code = AnalyticCode::parse(&fields.analytic_code).map_err(DomainError::from)?;

    let network = state.network.network().await?;
    let plan = RoutePlanner::new(&network, state.finder.as_ref()).plan(&origin, &destination)?;

    let record = RouteRecord::new(
        Uuid::new_v4(),
        analytic_code,
        plan.path.total_distance(),
        Utc::now(),
    );
    state.records.save(record.clone());
    info!(
        id = %record.id,
        from = %origin,
        to = %destination,
        distance_km = record.distance.kilometers(),
        "Recorded route"
    );

    let body = RouteResponse {
        id: record.id,
        from_station_id: origin.to_string(),
        to_station_id: destination.to_string(),
        analytic_code: record.analytic_code.to_string(),
        distance_km: record.distance.kilometers(),
        path: plan.path.station_ids(),
        station_names: plan.station_names,
        segment_distances: plan
            .path
            .segment_distances()
            .iter()
            .map(|d| d.kilometers())
            .collect(),
        created_at: record.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    };
    Ok((StatusCode::CREATED, Json(body)).into_response())
}

/// Total recorded distance per analytic code.
async fn distance_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    authenticate(&state, &headers)?;

    let group_by = GroupBy::parse(query.group_by.as_deref().unwrap_or("none")).ok_or_else(|| {
        AppError::BadRequest {
            message: "Invalid groupBy parameter. Must be one of: none, day, month, year"
                .to_string(),
        }
    })?;

    let from = query.from.filter(|s| !s.is_empty());
    let to = query.to.filter(|s| !s.is_empty());
    let period =
        Period::parse(from.as_deref(), to.as_deref()).map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;

    let items = state
        .records
        .aggregated_distances(&period, group_by)
        .iter()
        .map(AggregateItem::from_aggregate)
        .collect();

    Ok(Json(StatsResponse {
        from,
        to,
        group_by: group_by.as_str(),
        items,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unauthorized { message: String },
    Validation { errors: FieldErrors },
    Conflict { errors: FieldErrors },
    Unprocessable { message: String },
    Internal { message: String },
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        AppError::Unauthorized {
            message: e.to_string(),
        }
    }
}

impl From<RegistrationError> for AppError {
    fn from(e: RegistrationError) -> Self {
        match e {
            RegistrationError::Invalid(errors) => AppError::Validation { errors },
            RegistrationError::Conflict(errors) => AppError::Conflict { errors },
        }
    }
}

impl From<PasswordHashError> for AppError {
    fn from(e: PasswordHashError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<LoaderError> for AppError {
    fn from(e: LoaderError) -> Self {
        AppError::Internal {
            message: format!("rail network unavailable: {e}"),
        }
    }
}

impl From<RoutingError> for AppError {
    fn from(e: RoutingError) -> Self {
        match e {
            RoutingError::StationNotFound(_) | RoutingError::NoRouteFound { .. } => {
                AppError::Unprocessable {
                    message: e.to_string(),
                }
            }
            RoutingError::InvalidPath(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::Validation { errors } => {
                warn!(?errors, "Registration rejected");
                (StatusCode::BAD_REQUEST, Json(FieldErrorResponse { errors })).into_response()
            }
            AppError::Conflict { errors } => {
                warn!(?errors, "Registration conflict");
                (StatusCode::CONFLICT, Json(FieldErrorResponse { errors })).into_response()
            }
            AppError::Unauthorized { message } => {
                warn!(%message, "Unauthorized request");
                let mut response =
                    (StatusCode::UNAUTHORIZED, Json(ErrorResponse { message })).into_response();
                response.headers_mut().insert(
                    header::WWW_AUTHENTICATE,
                    HeaderValue::from_static("Basic realm=\"rail-server\""),
                );
                response
            }
            AppError::BadRequest { message } => message_response(StatusCode::BAD_REQUEST, message),
            AppError::Unprocessable { message } => {
                message_response(StatusCode::UNPROCESSABLE_ENTITY, message)
            }
            AppError::Internal { message } => {
                error!(%message, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { message }),
                )
                    .into_response()
            }
        }
    }
}

fn message_response(status: StatusCode, message: String) -> Response {
    warn!(%status, %message, "Request failed");
    (status, Json(ErrorResponse { message })).into_response()
}
