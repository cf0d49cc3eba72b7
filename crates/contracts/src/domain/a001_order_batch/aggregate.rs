use crate::domain::common::serde_date;
use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID type for an order batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderBatchId(pub Uuid);

impl OrderBatchId {
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

impl AggregateId for OrderBatchId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OrderBatchId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Product line inside a batch
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductLine {
    /// Product name as entered or imported
    pub name: String,
    /// Units ordered for this product
    pub quantity: f64,
    /// Purchase price per unit
    #[serde(rename = "buyRate")]
    pub buy_rate: f64,
    /// Sale price per unit
    #[serde(rename = "salePrice")]
    pub sale_price: f64,
}

/// Batch-level advertising and payroll costs
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SharedCosts {
    /// Ad spend in foreign currency
    pub dollar: f64,
    /// Conversion rate applied to the ad spend
    pub rate: f64,
    /// Denormalized ad cost in local currency (dollar * rate, fixed at entry)
    #[serde(rename = "adCost")]
    pub ad_cost: f64,
    /// Moderator salary attributed to this batch
    pub salary: f64,
    /// Expected return rate in percent
    #[serde(rename = "returnExpected")]
    pub return_expected: f64,
}

/// Day-level overheads entered alongside the batch
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OfficeCosts {
    /// Total orders of the day as known at entry time
    #[serde(rename = "totalOrders")]
    pub total_orders: f64,
    /// Management salary for the day
    #[serde(rename = "mngSalary")]
    pub mng_salary: f64,
    /// Office running cost for the day
    #[serde(rename = "officeCost")]
    pub office_cost: f64,
    /// Bonus pool for the day
    pub bonus: f64,
    /// Manual correction amount (carried, not yet applied anywhere)
    #[serde(rename = "manualAdjust")]
    pub manual_adjust: f64,
}

/// Per-unit logistics charges
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Logistics {
    /// Courier charge per unit
    #[serde(rename = "deliveryCharge")]
    pub delivery_charge: f64,
    /// Packing material cost per unit
    #[serde(rename = "packingCost")]
    pub packing_cost: f64,
    /// COD fee as percent of sale price
    #[serde(rename = "codPercentage")]
    pub cod_percentage: f64,
}

/// Order batch (aggregate)
///
/// One day's worth of orders for a single sales page together with the
/// costs entered against that day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBatch {
    #[serde(flatten)]
    pub base: BaseAggregate<OrderBatchId>,

    /// Batch date (YYYY-MM-DD)
    #[serde(with = "serde_date")]
    #[serde(rename = "batchDate")]
    pub batch_date: chrono::NaiveDate,

    /// Sales page the batch belongs to
    #[serde(rename = "pageName")]
    pub page_name: String,

    /// Product lines of the batch
    pub products: Vec<ProductLine>,

    /// Ad spend and payroll shared across the batch
    #[serde(rename = "sharedCosts")]
    pub shared_costs: SharedCosts,

    /// Day-level overheads
    #[serde(rename = "officeCosts")]
    pub office_costs: OfficeCosts,

    /// Per-unit logistics charges
    pub logistics: Logistics,
}

impl OrderBatch {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        code: String,
        description: String,
        batch_date: chrono::NaiveDate,
        page_name: String,
        products: Vec<ProductLine>,
        shared_costs: SharedCosts,
        office_costs: OfficeCosts,
        logistics: Logistics,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(OrderBatchId::new_v4(), code, description);
        base.comment = comment;
        Self {
            base,
            batch_date,
            page_name,
            products,
            shared_costs,
            office_costs,
            logistics,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new_with_id(
        id: OrderBatchId,
        code: String,
        description: String,
        batch_date: chrono::NaiveDate,
        page_name: String,
        products: Vec<ProductLine>,
        shared_costs: SharedCosts,
        office_costs: OfficeCosts,
        logistics: Logistics,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(id, code, description);
        base.comment = comment;
        Self {
            base,
            batch_date,
            page_name,
            products,
            shared_costs,
            office_costs,
            logistics,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }
    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    /// Total units across all product lines
    pub fn batch_quantity(&self) -> f64 {
        self.products.iter().map(|p| p.quantity).sum()
    }

    /// Ad cost in local currency (dollar * rate)
    pub fn total_ad_cost(&self) -> f64 {
        self.shared_costs.dollar * self.shared_costs.rate
    }

    pub fn update(&mut self, dto: &OrderBatchDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.batch_date = dto.batch_date;
        self.page_name = dto.page_name.clone();
        self.products = dto.products.clone();
        self.shared_costs = dto.shared_costs.clone();
        self.office_costs = dto.office_costs.clone();
        self.logistics = dto.logistics.clone();
        // Denormalized values are recomputed on every write
        self.shared_costs.ad_cost = self.shared_costs.dollar * self.shared_costs.rate;
        self.office_costs.total_orders = self.batch_quantity();
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
        if self.products.is_empty() {
            return Err("Batch must have at least one product line".into());
        }
        if self.batch_quantity() == 0.0 {
            return Err("Batch orders cannot be zero".into());
        }
        for line in &self.products {
            if line.name.trim().is_empty() {
                return Err("Product name is required".into());
            }
            if line.quantity < 0.0 {
                return Err("Product quantity cannot be negative".into());
            }
            if line.buy_rate < 0.0 || line.sale_price < 0.0 {
                return Err("Product prices cannot be negative".into());
            }
        }
        let shared = &self.shared_costs;
        if shared.dollar < 0.0
            || shared.rate < 0.0
            || shared.salary < 0.0
            || shared.return_expected < 0.0
        {
            return Err("Shared costs cannot be negative".into());
        }
        let office = &self.office_costs;
        if office.mng_salary < 0.0
            || office.office_cost < 0.0
            || office.bonus < 0.0
            || office.manual_adjust < 0.0
        {
            return Err("Office costs cannot be negative".into());
        }
        let logistics = &self.logistics;
        if logistics.delivery_charge < 0.0
            || logistics.packing_cost < 0.0
            || logistics.cod_percentage < 0.0
        {
            return Err("Logistics charges cannot be negative".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.shared_costs.ad_cost = self.shared_costs.dollar * self.shared_costs.rate;
        self.office_costs.total_orders = self.batch_quantity();
        self.touch_updated();
    }
}

impl AggregateRoot for OrderBatch {
    type Id = OrderBatchId;
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
        "a001"
    }
    fn collection_name() -> &'static str {
        "order_batch"
    }
    fn element_name() -> &'static str {
        "Order batch"
    }
    fn list_name() -> &'static str {
        "Order batches"
    }
    fn origin() -> Origin {
        Origin::Manual
    }
}

// =============================================================================
// DTO
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBatchDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    #[serde(with = "serde_date")]
    #[serde(rename = "batchDate")]
    pub batch_date: chrono::NaiveDate,
    #[serde(rename = "pageName")]
    pub page_name: String,
    pub products: Vec<ProductLine>,
    #[serde(rename = "sharedCosts")]
    pub shared_costs: SharedCosts,
    #[serde(rename = "officeCosts")]
    pub office_costs: OfficeCosts,
    pub logistics: Logistics,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_batch() -> OrderBatch {
        OrderBatch::new_for_insert(
            "BATCH-2025-001".into(),
            "Page One 2025-06-01".into(),
            chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            "Page One".into(),
            vec![
                ProductLine {
                    name: "Watch".into(),
                    quantity: 10.0,
                    buy_rate: 250.0,
                    sale_price: 500.0,
                },
                ProductLine {
                    name: "Belt".into(),
                    quantity: 5.0,
                    buy_rate: 80.0,
                    sale_price: 200.0,
                },
            ],
            SharedCosts {
                dollar: 10.0,
                rate: 120.0,
                ad_cost: 0.0,
                salary: 300.0,
                return_expected: 20.0,
            },
            OfficeCosts::default(),
            Logistics {
                delivery_charge: 100.0,
                packing_cost: 10.0,
                cod_percentage: 1.0,
            },
            None,
        )
    }

    #[test]
    fn batch_quantity_sums_lines() {
        let batch = sample_batch();
        assert_eq!(batch.batch_quantity(), 15.0);
    }

    #[test]
    fn before_write_fills_denormalized_fields() {
        let mut batch = sample_batch();
        batch.before_write();
        assert_eq!(batch.shared_costs.ad_cost, 1200.0);
        assert_eq!(batch.office_costs.total_orders, 15.0);
    }

    #[test]
    fn zero_quantity_batch_is_rejected() {
        let mut batch = sample_batch();
        for line in &mut batch.products {
            line.quantity = 0.0;
        }
        let err = batch.validate().unwrap_err();
        assert_eq!(err, "Batch orders cannot be zero");
    }

    #[test]
    fn valid_batch_passes_validation() {
        assert!(sample_batch().validate().is_ok());
    }

    #[test]
    fn negative_prices_and_costs_are_rejected() {
        let mut batch = sample_batch();
        batch.products[0].buy_rate = -250.0;
        assert!(batch.validate().is_err());

        let mut batch = sample_batch();
        batch.products[0].sale_price = -500.0;
        assert!(batch.validate().is_err());

        let mut batch = sample_batch();
        batch.shared_costs.salary = -300.0;
        assert!(batch.validate().is_err());

        let mut batch = sample_batch();
        batch.office_costs.office_cost = -90.0;
        assert!(batch.validate().is_err());

        let mut batch = sample_batch();
        batch.logistics.delivery_charge = -120.0;
        assert!(batch.validate().is_err());
    }
}
