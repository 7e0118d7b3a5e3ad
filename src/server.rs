//! Tool-dispatch HTTP server.
//!
//! Exposes the analysis core via a JSON HTTP API suitable for
//! integration with agent runtimes and other tool-calling clients.
//!
//! All tools — built-in and custom Rust trait implementations — are
//! registered in a unified [`ToolRegistry`] and dispatched through the
//! same `POST /tools/{name}` handler.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/tools/list` | List all registered tools with schemas |
//! | `POST` | `/tools/{name}` | Call any registered tool by name |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "bad_request", "message": "query must not be empty" } }
//! ```
//!
//! Error codes: `bad_request` (400), `not_found` (404), `tool_error` (500).
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted to support
//! browser-based clients and cross-origin tool calls.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::analyze::Analyzer;
use crate::config::Config;
use crate::error::CoreError;
use crate::store::DocumentStore;
use crate::traits::{validate_params, ToolContext, ToolRegistry};

/// Shared application state passed to all route handlers.
#[derive(Clone)]
struct AppState {
    tools: Arc<ToolRegistry>,
    ctx: Arc<ToolContext>,
}

/// Starts the tool server with the built-in tools only.
///
/// Binds to the address configured in `[server].bind` and runs until the
/// process is terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    run_server_with_extensions(config, ToolRegistry::new()).await
}

/// Starts the tool server with custom Rust tool extensions registered
/// alongside the built-ins.
///
/// Custom tools appear in `GET /tools/list` and can be called via
/// `POST /tools/{name}`.
pub async fn run_server_with_extensions(
    config: &Config,
    extra_tools: ToolRegistry,
) -> anyhow::Result<()> {
    let bind_addr = config.server.bind.clone();
    let app = build_router(Arc::new(config.clone()), extra_tools)?;

    info!(bind = %bind_addr, "tool server starting");
    println!("Tool server listening on http://{}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the axum router with a fresh store, analyzer, and registry.
///
/// Split out from [`run_server`] so tests and embedders can serve the
/// same app on their own listener.
pub fn build_router(config: Arc<Config>, extra_tools: ToolRegistry) -> anyhow::Result<Router> {
    let analyzer = Analyzer::from_config(&config.analysis)?;
    let store = if config.analysis.seed_samples {
        DocumentStore::with_samples()
    } else {
        DocumentStore::new()
    };

    let mut registry = ToolRegistry::with_builtins();
    registry.merge(extra_tools);

    for tool in registry.tools() {
        let tag = if tool.is_builtin() { "builtin" } else { "rust" };
        info!(tool = tool.name(), kind = tag, "registered tool");
    }

    let state = AppState {
        tools: Arc::new(registry),
        ctx: Arc::new(ToolContext::new(
            config,
            Arc::new(store),
            Arc::new(analyzer),
        )),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        .route("/tools/list", get(handle_list_tools))
        .route("/tools/{name}", post(handle_tool_call))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state))
}

// ============ Error response ============

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    /// Machine-readable error code (e.g., `"bad_request"`, `"not_found"`).
    code: String,
    /// Human-readable error message.
    message: String,
}

/// Internal error type that converts into an HTTP response.
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request".to_string(),
        message: message.into(),
    }
}

fn not_found(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::NOT_FOUND,
        code: "not_found".to_string(),
        message: message.into(),
    }
}

fn tool_error(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        code: "tool_error".to_string(),
        message: message.into(),
    }
}

/// Map tool execution errors to the most appropriate HTTP status.
///
/// Typed [`CoreError`]s carry their own classification; everything else
/// falls back on message inspection so custom tools can signal client
/// errors without a dedicated error type.
fn classify_tool_error(tool_name: &str, err: anyhow::Error) -> AppError {
    if let Some(core) = err.downcast_ref::<CoreError>() {
        return match core {
            CoreError::NotFound { .. } => not_found(format!("{}: {}", tool_name, core)),
            CoreError::InvalidArgument(_) => bad_request(format!("{}: {}", tool_name, core)),
        };
    }

    let msg = err.to_string();
    if msg.contains("not found") {
        not_found(format!("{}: {}", tool_name, msg))
    } else if msg.contains("must not be empty")
        || msg.contains("missing required parameter")
        || msg.contains("must be of type")
        || msg.contains("must be one of")
        || msg.contains("missing field")
        || msg.contains("invalid")
    {
        bad_request(format!("{}: {}", tool_name, msg))
    } else {
        tool_error(format!("{}: {}", tool_name, msg))
    }
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ GET /tools/list ============

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    description: String,
    builtin: bool,
    parameters: serde_json::Value,
}

#[derive(Serialize)]
struct ToolListResponse {
    tools: Vec<ToolInfo>,
}

/// Returns all registered tools with their parameter schemas, for agent
/// discovery.
async fn handle_list_tools(State(state): State<AppState>) -> Json<ToolListResponse> {
    let tools: Vec<ToolInfo> = state
        .tools
        .tools()
        .iter()
        .map(|t| ToolInfo {
            name: t.name().to_string(),
            description: t.description().to_string(),
            builtin: t.is_builtin(),
            parameters: t.parameters_schema(),
        })
        .collect();

    Json(ToolListResponse { tools })
}

// ============ POST /tools/{name} ============

/// Unified tool dispatch: look up the tool, validate parameters against
/// its schema, execute, and wrap the result.
async fn handle_tool_call(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(params): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, AppError> {
    let tool = state
        .tools
        .find(&name)
        .ok_or_else(|| not_found(format!("no tool registered with name: {}", name)))?;

    let validated_params = validate_params(&tool.parameters_schema(), &params)
        .map_err(|e| bad_request(e.to_string()))?;

    let result = tool
        .execute(validated_params, &state.ctx)
        .await
        .map_err(|e| classify_tool_error(&name, e))?;

    Ok(Json(serde_json::json!({ "result": result })))
}
