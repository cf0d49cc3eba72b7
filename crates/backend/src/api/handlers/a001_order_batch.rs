use axum::{extract::Path, Json};
use serde::Deserialize;
use serde_json::json;

use crate::domain::a001_order_batch;

/// GET /api/a001/order-batch
pub async fn list_all() -> Result<
    Json<Vec<contracts::domain::a001_order_batch::aggregate::OrderBatch>>,
    axum::http::StatusCode,
> {
    match a001_order_batch::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/a001/order-batch/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<contracts::domain::a001_order_batch::aggregate::OrderBatch>, axum::http::StatusCode>
{
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a001_order_batch::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/a001/order-batch
pub async fn upsert(
    Json(dto): Json<contracts::domain::a001_order_batch::aggregate::OrderBatchDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let result = if dto.id.is_some() {
        a001_order_batch::service::update(dto)
            .await
            .map(|_| uuid::Uuid::nil().to_string())
    } else {
        a001_order_batch::service::create(dto)
            .await
            .map(|id| id.to_string())
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => {
            tracing::error!("Failed to save order_batch: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// DELETE /api/a001/order-batch/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a001_order_batch::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

#[derive(Debug, Deserialize)]
pub struct ImportCsvRequest {
    pub content: String,
}

/// POST /api/a001/order-batch/import-csv
pub async fn import_csv(
    Json(request): Json<ImportCsvRequest>,
) -> Result<Json<a001_order_batch::csv_import::ImportResult>, axum::http::StatusCode> {
    match a001_order_batch::csv_import::import_batches_from_csv(&request.content).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            tracing::error!("Failed to import invoice CSV: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
