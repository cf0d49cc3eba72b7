use axum::Json;

use crate::dashboards::d401_executive;
use contracts::dashboards::d401_executive::ExecutiveStatsResponse;

/// GET /api/d401/executive-stats
pub async fn get_executive_stats(
) -> Result<Json<ExecutiveStatsResponse>, axum::http::StatusCode> {
    match d401_executive::service::executive_stats().await {
        Ok(stats) => Ok(Json(stats)),
        Err(e) => {
            tracing::error!("Failed to compute executive stats: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
