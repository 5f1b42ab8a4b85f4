//! Bachat Web Server
//!
//! Axum-based REST API for the Bachat budget planning engine.
//!
//! Endpoints:
//! - `POST /api/advice` - full analysis for a profile, with chart payloads
//! - `GET /api/health` - prediction backend availability
//! - `GET /api/strategies` - the static risk-tier allocation table
//!
//! Hardening:
//! - Restrictive CORS policy (explicit origins only)
//! - Security headers (nosniff, frame deny)
//! - Sanitized error responses with typed status mapping

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::{error, info, warn};

use bachat_core::Advisor;

mod handlers;


/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

/// Shared application state
pub struct AppState {
    /// The engine: loaded artifacts + predictor, frozen at startup
    pub advisor: Advisor,
}

/// Create the application router
pub fn create_router(advisor: Advisor, config: ServerConfig) -> Router {
    let state = Arc::new(AppState { advisor });

    let api_routes = Router::new()
        .route("/advice", post(handlers::post_advice))
        .route("/health", get(handlers::get_health))
        .route("/strategies", get(handlers::get_strategies));

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(AllowOrigin::list(origins));

    Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}

/// Start the server
pub async fn serve(
    advisor: Advisor,
    host: &str,
    port: u16,
    config: ServerConfig,
) -> anyhow::Result<()> {
    if advisor.health_check().await {
        info!(
            model = advisor.model(),
            backend = advisor.backend_host(),
            "Prediction backend ready"
        );
    } else {
        warn!(
            backend = advisor.backend_host(),
            "Prediction backend unreachable; advice requests will fail until it recovers"
        );
    }

    let app = create_router(advisor, config);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Bachat server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// API error with sanitized response body
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn unavailable(msg: &str) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<bachat_core::Error> for AppError {
    fn from(err: bachat_core::Error) -> Self {
        use bachat_core::Error;
        match err {
            // Actionable, caller-fixable
            Error::InvalidProfile(msg) => Self::bad_request(&msg),
            // Per-request recoverable; retry later
            Error::PredictionUnavailable(msg) => Self::unavailable(&msg),
            other => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Internal server error".to_string(),
                internal: Some(other.into()),
            },
        }
    }
}
