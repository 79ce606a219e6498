// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod seed;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Parser, ValueEnum};
use orgchart::{EngineOptions, UngroundedPolicy};
use orgchart_api::{
    ApiError, ChartPolicy, DEFAULT_MAX_PERSONS, DirectorySnapshot, OrgChartRequest,
    OrgChartResponse, OrgChartStatsResponse, build_org_chart_csv, build_org_chart_response,
    build_org_chart_stats_response, load_snapshot, validate_org_chart_request,
};
use orgchart_domain::OrganizationId;
use orgchart_persistence::SqlitePersistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Org Chart Server - HTTP server for the organization chart service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Largest number of active persons a chart is built from
    #[arg(long, default_value_t = DEFAULT_MAX_PERSONS)]
    max_persons: usize,

    /// Handling of non-executive persons with no senior colleague in their department
    #[arg(long, value_enum, default_value_t = UngroundedArg::Root)]
    ungrounded: UngroundedArg,

    /// JSON seed file loaded into the directory at startup
    #[arg(long)]
    seed: Option<std::path::PathBuf>,
}

/// Command-line spelling of [`UngroundedPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum UngroundedArg {
    /// Place them at the top level of the chart.
    Root,
    /// Leave them and their reports out of the chart.
    Drop,
}

impl From<UngroundedArg> for UngroundedPolicy {
    fn from(arg: UngroundedArg) -> Self {
        match arg {
            UngroundedArg::Root => Self::RootInBucket,
            UngroundedArg::Drop => Self::Drop,
        }
    }
}

/// Application state shared across handlers.
///
/// The directory sits behind a Mutex. Handlers hold the lock only while
/// reading a snapshot; the hierarchy is built after it is released.
#[derive(Clone)]
struct AppState {
    /// The directory store.
    persistence: Arc<Mutex<SqlitePersistence>>,
    /// Settings applied to every chart build.
    policy: ChartPolicy,
}

/// Query parameters for the org chart endpoint.
#[derive(Debug, Deserialize)]
struct OrgChartQuery {
    /// Free-text search.
    q: Option<String>,
    /// Exact department filter.
    department: Option<String>,
    /// Seniority filter.
    seniority: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::InputTooLarge { .. } => Self {
                status: StatusCode::PAYLOAD_TOO_LARGE,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: String::from("Internal server error"),
                }
            }
        }
    }
}

/// Reads a directory snapshot, holding the lock only for the read.
async fn read_snapshot(
    app_state: &AppState,
    organization_id: OrganizationId,
) -> Result<DirectorySnapshot, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let snapshot: DirectorySnapshot =
        load_snapshot(&mut *persistence, organization_id, &app_state.policy)?;
    drop(persistence);
    Ok(snapshot)
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for GET `/organizations/{organization_id}/org-chart` endpoint.
///
/// Builds the organization's chart, optionally narrowed by a search.
async fn handle_get_org_chart(
    AxumState(app_state): AxumState<AppState>,
    Path(organization_id): Path<i64>,
    Query(query): Query<OrgChartQuery>,
) -> Result<Json<OrgChartResponse>, HttpError> {
    info!(organization_id, "Handling get_org_chart request");

    let request: OrgChartRequest = OrgChartRequest {
        query: query.q,
        department: query.department,
        seniority: query.seniority,
        ..OrgChartRequest::new(OrganizationId::new(organization_id))
    };
    validate_org_chart_request(&request)?;

    let snapshot: DirectorySnapshot = read_snapshot(&app_state, request.organization_id).await?;
    let response: OrgChartResponse =
        build_org_chart_response(&snapshot, &request, &app_state.policy)?;

    Ok(Json(response))
}

/// Handler for GET `/organizations/{organization_id}/org-chart/stats` endpoint.
async fn handle_get_org_chart_stats(
    AxumState(app_state): AxumState<AppState>,
    Path(organization_id): Path<i64>,
) -> Result<Json<OrgChartStatsResponse>, HttpError> {
    info!(organization_id, "Handling get_org_chart_stats request");

    let snapshot: DirectorySnapshot =
        read_snapshot(&app_state, OrganizationId::new(organization_id)).await?;

    Ok(Json(build_org_chart_stats_response(
        &snapshot,
        &app_state.policy,
    )))
}

/// Handler for GET `/organizations/{organization_id}/org-chart/export` endpoint.
///
/// Returns the chart as a CSV attachment.
async fn handle_export_org_chart(
    AxumState(app_state): AxumState<AppState>,
    Path(organization_id): Path<i64>,
) -> Result<Response, HttpError> {
    info!(organization_id, "Handling export_org_chart request");

    let snapshot: DirectorySnapshot =
        read_snapshot(&app_state, OrganizationId::new(organization_id)).await?;
    let csv: String = build_org_chart_csv(&snapshot, &app_state.policy)?;

    let headers: [(header::HeaderName, String); 2] = [
        (
            header::CONTENT_TYPE,
            String::from("text/csv; charset=utf-8"),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"org-chart-{organization_id}.csv\""),
        ),
    ];
    Ok((headers, csv).into_response())
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route(
            "/organizations/{organization_id}/org-chart",
            get(handle_get_org_chart),
        )
        .route(
            "/organizations/{organization_id}/org-chart/stats",
            get(handle_get_org_chart_stats),
        )
        .route(
            "/organizations/{organization_id}/org-chart/export",
            get(handle_export_org_chart),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Org Chart Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqlitePersistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqlitePersistence::new_in_memory()?
    };

    if let Some(seed_path) = &args.seed {
        seed::load_seed_file(&mut persistence, seed_path)?;
    }

    let policy: ChartPolicy = ChartPolicy {
        engine: EngineOptions {
            ungrounded: args.ungrounded.into(),
        },
        max_persons: args.max_persons,
    };
    info!(
        max_persons = policy.max_persons,
        ungrounded = ?policy.engine.ungrounded,
        "Chart policy"
    );

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        policy,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
