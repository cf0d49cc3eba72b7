use chrono::NaiveDate;
use contracts::domain::a005_moderator::aggregate::AttendanceRecord;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

/// Absence marks keyed by (moderator, date)
///
/// A row exists only while the moderator is marked absent; deleting the
/// row marks them present again. No aggregate machinery on purpose.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a005_attendance")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub moderator_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub absent_date: String, // stored as YYYY-MM-DD
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for AttendanceRecord {
    fn from(m: Model) -> Self {
        let absent_date = NaiveDate::parse_from_str(&m.absent_date, "%Y-%m-%d")
            .unwrap_or_else(|_| chrono::Utc::now().date_naive());
        AttendanceRecord {
            moderator_id: m.moderator_id,
            absent_date,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<AttendanceRecord>> {
    let items = Entity::find()
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn is_absent(moderator_id: &str, date: NaiveDate) -> anyhow::Result<bool> {
    let found = Entity::find_by_id((
        moderator_id.to_string(),
        date.format("%Y-%m-%d").to_string(),
    ))
    .one(conn())
    .await?;
    Ok(found.is_some())
}

/// Flips the absence mark; returns the new state (true = absent)
pub async fn toggle(moderator_id: &str, date: NaiveDate) -> anyhow::Result<bool> {
    let date_str = date.format("%Y-%m-%d").to_string();
    let existing = Entity::find_by_id((moderator_id.to_string(), date_str.clone()))
        .one(conn())
        .await?;

    if existing.is_some() {
        Entity::delete_many()
            .filter(Column::ModeratorId.eq(moderator_id))
            .filter(Column::AbsentDate.eq(date_str))
            .exec(conn())
            .await?;
        Ok(false)
    } else {
        let active = ActiveModel {
            moderator_id: Set(moderator_id.to_string()),
            absent_date: Set(date_str),
        };
        active.insert(conn()).await?;
        Ok(true)
    }
}
