use serde::{Deserialize, Serialize};

/// One moderator line of the salary sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeratorSalaryRow {
    pub moderator_id: String,
    pub moderator_name: String,
    pub monthly_salary: f64,
    /// monthly_salary / 30, zeroed when absent on the filtered day
    pub daily_rate: f64,
    /// Absence mark for the filtered day (false when no day filter is set)
    pub absent: bool,
}

/// Salary and efficiency figures for one page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSalaryGroup {
    pub page_name: String,
    pub moderators: Vec<ModeratorSalaryRow>,
    /// Sum of daily rates net of absences
    pub total_daily_salary: f64,
    /// Units ordered on this page within the active filter
    pub page_orders: f64,
    /// total_daily_salary / page_orders, 0 when the page had no orders
    pub salary_average: f64,
}

/// Page-grouped salary sheet
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SalarySheetResponse {
    pub groups: Vec<PageSalaryGroup>,
}
