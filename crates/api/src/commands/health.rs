//! Health check for the SPA and load balancers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::context::AppContext;
use crate::utils::health::HealthStatus;

/// Get application health status
///
/// Responds `503 Service Unavailable` with the same body when the score drops
/// below the healthy threshold.
///
/// # Example Response
/// ```json
/// {
///   "isHealthy": true,
///   "score": 1.0,
///   "message": null,
///   "components": [
///     { "name": "store", "isHealthy": true, "message": null },
///     { "name": "spa_bundle", "isHealthy": true, "message": null },
///     { "name": "ticket_service", "isHealthy": true, "message": null }
///   ],
///   "store": { "tickets": 8, "clients": 5, "employees": 6, ... },
///   "uptimeSecs": 12,
///   "timestamp": "2024-06-03T10:00:00Z"
/// }
/// ```
pub async fn get_app_health(
    State(ctx): State<Arc<AppContext>>,
) -> (StatusCode, Json<HealthStatus>) {
    let status = ctx.health_check();
    let code = if status.is_healthy { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (code, Json(status))
}
