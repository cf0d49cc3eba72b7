use serde::{Deserialize, Serialize};

/// Headline KPIs over the full batch set and the full ad spend ledger
///
/// `total_profit` is the buy/sell margin only. It deliberately ignores
/// shared, office and logistics costs and therefore differs from the
/// fully allocated profit shown on the cost sheet.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExecutiveStatsResponse {
    /// Ad spend summed over the daily cost ledger
    pub total_ad_cost: f64,
    /// Margin-only profit: sum of (sale - buy) x quantity
    pub total_profit: f64,
    /// Units summed over every line of every batch
    pub total_orders: f64,
    /// total_profit / total_ad_cost x 100, 0 when there is no spend
    pub efficiency: f64,
}
