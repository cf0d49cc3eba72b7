use super::{attendance, repository};
use contracts::domain::a005_moderator::aggregate::{
    AttendanceRecord, AttendanceToggleDto, Moderator, ModeratorDto,
};
use uuid::Uuid;

pub async fn create(dto: ModeratorDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("MOD-{}", Uuid::new_v4()));

    let mut aggregate = Moderator::new_for_insert(
        code,
        dto.description,
        dto.moderator_name,
        dto.page_name,
        dto.monthly_salary,
        dto.comment,
    );

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: ModeratorDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.update(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::update(&aggregate).await
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Moderator>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Moderator>> {
    repository::list_all().await
}

pub async fn list_attendance() -> anyhow::Result<Vec<AttendanceRecord>> {
    attendance::list_all().await
}

/// Flips the absence mark for one moderator on one date
pub async fn toggle_attendance(dto: AttendanceToggleDto) -> anyhow::Result<bool> {
    Uuid::parse_str(&dto.moderator_id).map_err(|_| anyhow::anyhow!("Invalid moderator ID"))?;
    attendance::toggle(&dto.moderator_id, dto.absent_date).await
}
