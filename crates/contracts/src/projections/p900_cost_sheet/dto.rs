use serde::{Deserialize, Serialize};

/// Request for the allocated cost sheet
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CostSheetRequest {
    /// Optional exact-date filter ("YYYY-MM-DD"); filtering changes the
    /// day cohorts and therefore the day-level unit costs
    pub date: Option<String>,
}

/// One fully allocated row of the cost sheet (one per non-zero product line)
///
/// Every intermediate term is carried so the detail view can show the
/// full cost build-up, not just the bottom line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostSheetRow {
    /// Source batch id
    pub batch_id: String,
    /// Batch date in format "YYYY-MM-DD"
    pub date: String,
    /// Sales page of the batch
    pub page_name: String,
    /// Product name of the line
    pub product_name: String,
    /// Units ordered
    pub quantity: f64,
    /// Sale price per unit
    pub sale_price: f64,
    /// Purchase price per unit
    pub buy_rate: f64,
    /// Batch ad cost spread over batch quantity
    pub unit_ad_cost: f64,
    /// Batch salary spread over batch quantity
    pub unit_salary: f64,
    /// Management salary spread over the day cohort quantity
    pub unit_mng_salary: f64,
    /// Office cost spread over the day cohort quantity
    pub unit_office_cost: f64,
    /// Bonus spread over the day cohort quantity
    pub unit_bonus: f64,
    /// COD fee per unit (percent of sale price)
    pub unit_cod: f64,
    /// Expected return cost per unit (percent of sale price)
    pub unit_return: f64,
    /// Courier charge per unit
    pub delivery_charge: f64,
    /// Packing cost per unit
    pub packing_cost: f64,
    /// Sum of buy rate and every allocated cost term
    pub total_unit_cost: f64,
    /// Sale price minus total unit cost
    pub unit_profit: f64,
}
