use axum::extract::Query;
use axum::Json;

use crate::dashboards::d402_salary_sheet;
use contracts::dashboards::d400_summary_report::ReportFilter;
use contracts::dashboards::d402_salary_sheet::SalarySheetResponse;

/// GET /api/d402/salary-sheet
pub async fn get_salary_sheet(
    Query(filter): Query<ReportFilter>,
) -> Result<Json<SalarySheetResponse>, axum::http::StatusCode> {
    match d402_salary_sheet::service::salary_sheet(filter).await {
        Ok(sheet) => Ok(Json(sheet)),
        Err(e) => {
            tracing::error!("Failed to build salary sheet: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
