use axum::extract::Query;
use axum::Json;

use crate::dashboards::d400_summary_report;
use contracts::dashboards::d400_summary_report::{
    CategoryBreakdownResponse, ReportFilter, SummaryMatrixResponse,
};

/// GET /api/d400/summary-matrix
pub async fn get_summary_matrix(
    Query(filter): Query<ReportFilter>,
) -> Result<Json<SummaryMatrixResponse>, axum::http::StatusCode> {
    match d400_summary_report::service::summary_matrix(filter).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("Failed to build summary matrix: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/d400/category-breakdown
pub async fn get_category_breakdown(
    Query(filter): Query<ReportFilter>,
) -> Result<Json<CategoryBreakdownResponse>, axum::http::StatusCode> {
    match d400_summary_report::service::category_breakdown(filter).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("Failed to build category breakdown: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
