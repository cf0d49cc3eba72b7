use crate::domain::common::serde_date;
use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID type for a daily cost entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DailyCostId(pub Uuid);

impl DailyCostId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for DailyCostId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(DailyCostId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Daily advertising spend ledger entry (aggregate)
///
/// Independent of order batches. The executive dashboard reads ad spend
/// from this ledger, not from batch-level shared costs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyCost {
    #[serde(flatten)]
    pub base: BaseAggregate<DailyCostId>,

    /// Spend date (YYYY-MM-DD)
    #[serde(with = "serde_date")]
    #[serde(rename = "costDate")]
    pub cost_date: chrono::NaiveDate,

    /// Sales page the spend belongs to
    #[serde(rename = "pageName")]
    pub page_name: String,

    /// Ad spend in foreign currency
    pub dollar: f64,

    /// Conversion rate applied to the spend
    pub rate: f64,

    /// Denormalized spend in local currency (dollar * rate, fixed at entry)
    #[serde(rename = "totalAdCost")]
    pub total_ad_cost: f64,

    /// Moderator salary recorded alongside the spend
    pub salary: f64,
}

impl DailyCost {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        code: String,
        description: String,
        cost_date: chrono::NaiveDate,
        page_name: String,
        dollar: f64,
        rate: f64,
        salary: f64,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(DailyCostId::new_v4(), code, description);
        base.comment = comment;
        Self {
            base,
            cost_date,
            page_name,
            dollar,
            rate,
            total_ad_cost: dollar * rate,
            salary,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }
    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    /// Spend in local currency
    pub fn amount(&self) -> f64 {
        self.dollar * self.rate
    }

    pub fn update(&mut self, dto: &DailyCostDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.cost_date = dto.cost_date;
        self.page_name = dto.page_name.clone();
        self.dollar = dto.dollar;
        self.rate = dto.rate;
        self.salary = dto.salary;
        // Denormalized value is recomputed on every write
        self.total_ad_cost = self.dollar * self.rate;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Description cannot be empty".into());
        }
        if self.base.code.trim().is_empty() {
            return Err("Code cannot be empty".into());
        }
        if self.page_name.trim().is_empty() {
            return Err("Page name is required".into());
        }
        if self.dollar < 0.0 {
            return Err("Dollar amount cannot be negative".into());
        }
        if self.rate < 0.0 {
            return Err("Rate cannot be negative".into());
        }
        if self.salary < 0.0 {
            return Err("Salary cannot be negative".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.total_ad_cost = self.dollar * self.rate;
        self.touch_updated();
    }
}

impl AggregateRoot for DailyCost {
    type Id = DailyCostId;
    fn id(&self) -> Self::Id {
        self.base.id
    }
    fn code(&self) -> &str {
        &self.base.code
    }
    fn description(&self) -> &str {
        &self.base.description
    }
    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }
    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }
    fn events(&self) -> &EventStore {
        &self.base.events
    }
    fn events_mut(&mut self) -> &mut EventStore {
        &mut self.base.events
    }
    fn aggregate_index() -> &'static str {
        "a002"
    }
    fn collection_name() -> &'static str {
        "daily_cost"
    }
    fn element_name() -> &'static str {
        "Daily cost"
    }
    fn list_name() -> &'static str {
        "Daily costs"
    }
    fn origin() -> Origin {
        Origin::Manual
    }
}

// =============================================================================
// DTO
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyCostDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    #[serde(with = "serde_date")]
    #[serde(rename = "costDate")]
    pub cost_date: chrono::NaiveDate,
    #[serde(rename = "pageName")]
    pub page_name: String,
    pub dollar: f64,
    pub rate: f64,
    pub salary: f64,
    pub comment: Option<String>,
}

/// List filter: page substring match plus exact date match
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DailyCostFilter {
    #[serde(rename = "pageName")]
    pub page_name: Option<String>,
    pub date: Option<String>,
}

/// Totals across a filtered list of entries
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DailyCostTotals {
    pub dollar: f64,
    pub amount: f64,
    pub salary: f64,
    pub entries: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_is_dollar_times_rate() {
        let cost = DailyCost::new_for_insert(
            "ADC-001".into(),
            "Page One 2025-06-01".into(),
            chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            "Page One".into(),
            12.5,
            120.0,
            0.0,
            None,
        );
        assert_eq!(cost.amount(), 1500.0);
        assert_eq!(cost.total_ad_cost, 1500.0);
    }

    #[test]
    fn negative_dollar_is_rejected() {
        let cost = DailyCost::new_for_insert(
            "ADC-002".into(),
            "Page One 2025-06-01".into(),
            chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            "Page One".into(),
            -1.0,
            120.0,
            0.0,
            None,
        );
        assert!(cost.validate().is_err());
    }
}
