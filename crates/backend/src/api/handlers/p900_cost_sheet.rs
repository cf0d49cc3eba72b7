use axum::extract::Query;
use axum::Json;

use crate::projections::p900_cost_sheet;
use contracts::projections::p900_cost_sheet::{CostSheetRequest, CostSheetRow};

/// GET /api/p900/cost-sheet
pub async fn get_cost_sheet(
    Query(request): Query<CostSheetRequest>,
) -> Result<Json<Vec<CostSheetRow>>, axum::http::StatusCode> {
    match p900_cost_sheet::service::cost_sheet(request).await {
        Ok(rows) => Ok(Json(rows)),
        Err(e) => {
            tracing::error!("Failed to build cost sheet: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
