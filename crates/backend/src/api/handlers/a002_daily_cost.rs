use axum::extract::{Path, Query};
use axum::Json;
use serde_json::json;

use crate::domain::a002_daily_cost;
use contracts::domain::a002_daily_cost::aggregate::{
    DailyCost, DailyCostDto, DailyCostFilter, DailyCostTotals,
};

/// GET /api/a002/daily-cost
pub async fn list_all(
    Query(filter): Query<DailyCostFilter>,
) -> Result<Json<Vec<DailyCost>>, axum::http::StatusCode> {
    match a002_daily_cost::service::list_filtered(filter).await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/a002/daily-cost/totals
pub async fn totals(
    Query(filter): Query<DailyCostFilter>,
) -> Result<Json<DailyCostTotals>, axum::http::StatusCode> {
    match a002_daily_cost::service::totals(filter).await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/a002/daily-cost/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<DailyCost>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a002_daily_cost::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/a002/daily-cost
pub async fn upsert(
    Json(dto): Json<DailyCostDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let result = if dto.id.is_some() {
        a002_daily_cost::service::update(dto)
            .await
            .map(|_| uuid::Uuid::nil().to_string())
    } else {
        a002_daily_cost::service::create(dto)
            .await
            .map(|id| id.to_string())
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => {
            tracing::error!("Failed to save daily_cost: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// DELETE /api/a002/daily-cost/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a002_daily_cost::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
