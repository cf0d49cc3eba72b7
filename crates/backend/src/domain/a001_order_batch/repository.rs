use chrono::{NaiveDate, Utc};
use contracts::domain::a001_order_batch::aggregate::{
    Logistics, OfficeCosts, OrderBatch, OrderBatchId, ProductLine, SharedCosts,
};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_order_batch")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub batch_date: String, // stored as YYYY-MM-DD
    pub products: String,   // JSON array of product lines
    pub page_name: String,
    pub shared_costs: String, // JSON object
    pub office_costs: String, // JSON object
    pub logistics: String,    // JSON object
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for OrderBatch {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let batch_date = NaiveDate::parse_from_str(&m.batch_date, "%Y-%m-%d")
            .unwrap_or_else(|_| Utc::now().date_naive());
        let products: Vec<ProductLine> = serde_json::from_str(&m.products).unwrap_or_default();
        let shared_costs: SharedCosts = serde_json::from_str(&m.shared_costs).unwrap_or_default();
        let office_costs: OfficeCosts = serde_json::from_str(&m.office_costs).unwrap_or_default();
        let logistics: Logistics = serde_json::from_str(&m.logistics).unwrap_or_default();

        OrderBatch {
            base: BaseAggregate::with_metadata(
                OrderBatchId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            batch_date,
            page_name: m.page_name,
            products,
            shared_costs,
            office_costs,
            logistics,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &OrderBatch) -> anyhow::Result<ActiveModel> {
    Ok(ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        batch_date: Set(aggregate.batch_date.format("%Y-%m-%d").to_string()),
        page_name: Set(aggregate.page_name.clone()),
        products: Set(serde_json::to_string(&aggregate.products)?),
        shared_costs: Set(serde_json::to_string(&aggregate.shared_costs)?),
        office_costs: Set(serde_json::to_string(&aggregate.office_costs)?),
        logistics: Set(serde_json::to_string(&aggregate.logistics)?),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    })
}

pub async fn list_all() -> anyhow::Result<Vec<OrderBatch>> {
    let mut items: Vec<OrderBatch> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| a.batch_date.cmp(&b.batch_date));
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<OrderBatch>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &OrderBatch) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = to_active(aggregate)?;
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &OrderBatch) -> anyhow::Result<()> {
    let mut active = to_active(aggregate)?;
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
