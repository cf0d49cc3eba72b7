use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a005_moderator;
use contracts::domain::a005_moderator::aggregate::{
    AttendanceRecord, AttendanceToggleDto, Moderator, ModeratorDto,
};

/// GET /api/a005/moderator
pub async fn list_all() -> Result<Json<Vec<Moderator>>, axum::http::StatusCode> {
    match a005_moderator::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/a005/moderator/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Moderator>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a005_moderator::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/a005/moderator
pub async fn upsert(
    Json(dto): Json<ModeratorDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let result = if dto.id.is_some() {
        a005_moderator::service::update(dto)
            .await
            .map(|_| uuid::Uuid::nil().to_string())
    } else {
        a005_moderator::service::create(dto)
            .await
            .map(|id| id.to_string())
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(e) => {
            tracing::error!("Failed to save moderator: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// DELETE /api/a005/moderator/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a005_moderator::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/a005/attendance
pub async fn list_attendance() -> Result<Json<Vec<AttendanceRecord>>, axum::http::StatusCode> {
    match a005_moderator::service::list_attendance().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/a005/attendance/toggle
pub async fn toggle_attendance(
    Json(dto): Json<AttendanceToggleDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a005_moderator::service::toggle_attendance(dto).await {
        Ok(absent) => Ok(Json(json!({"absent": absent}))),
        Err(e) => {
            tracing::error!("Failed to toggle attendance: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
