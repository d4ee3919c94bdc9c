// 🌐 HTTP Layer
// Form page, calculate endpoint and health check over an immutable food table

use crate::calculator::{calculate, CalculationRequest, CalculationResult};
use crate::error::CalculatorError;
use crate::food::FoodTable;
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Shared application state. The table is read-only, so no lock is needed.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<FoodTable>,
}

/// API Response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    fn err(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    foods: usize,
    foods_with_energy: usize,
}

impl IntoResponse for CalculatorError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(ApiResponse::err(self.to_string()))).into_response()
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET / - Serve the calculator form
async fn serve_index() -> impl IntoResponse {
    Html(include_str!("../web/index.html"))
}

/// GET /api/health - Health check
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(HealthStatus {
        status: "ok",
        foods: state.table.len(),
        foods_with_energy: state.table.parsed_count(),
    }))
}

/// POST /calculate - BMR, daily energy and the closest meals
async fn calculate_meals(
    State(state): State<AppState>,
    form: Result<Form<CalculationRequest>, FormRejection>,
) -> Response {
    let Form(request) = match form {
        Ok(form) => form,
        Err(rejection) => {
            warn!(status = %rejection.status(), "Rejected calculation form: {}", rejection.body_text());
            return (rejection.status(), Json(ApiResponse::err(rejection.body_text())))
                .into_response();
        }
    };

    match calculate(request, &state.table) {
        Ok(result) => Json::<CalculationResult>(result).into_response(),
        Err(e) => {
            warn!(field = e.field(), "Rejected calculation request: {}", e);
            e.into_response()
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router(table: Arc<FoodTable>) -> Router {
    let state = AppState { table };

    let api_routes = Router::new()
        .route("/health", get(health_check))
        .with_state(state.clone());

    Router::new()
        .route("/", get(serve_index))
        .route("/calculate", post(calculate_meals))
        .with_state(state)
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
