use serde::{Deserialize, Serialize};

/// Fixed category order of the breakdown table
///
/// Derived rows (TOTAL COST, NET PROFIT, TOTAL RETURN TK) are computed
/// from rows defined earlier in this list, so the order is part of the
/// contract and must not be changed.
pub const CATEGORY_ORDER: [&str; 15] = [
    "TOTAL MAILER DAM",
    "TOTAL DOLLAR",
    "TOTAL SALARY",
    "BONUS",
    "OFFICE COST",
    "COD",
    "RETURN COST",
    "DELIVERY CHARGE",
    "PACKING COST",
    "TOTAL COST",
    "TOTAL ORDER",
    "TOTAL DELIVERED AMOUNT",
    "NET PROFIT",
    "TOTAL RETURN TK",
    "RETURN PICH",
];

/// Date filter shared by the summary reports
///
/// A day filter ("YYYY-MM-DD") takes precedence over a month filter
/// ("YYYY-MM"); with neither set every batch is in scope.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportFilter {
    pub day: Option<String>,
    pub month: Option<String>,
}

impl ReportFilter {
    pub fn for_day(day: &str) -> Self {
        Self {
            day: Some(day.to_string()),
            month: None,
        }
    }

    pub fn for_month(month: &str) -> Self {
        Self {
            day: None,
            month: Some(month.to_string()),
        }
    }

    /// Whether a "YYYY-MM-DD" date falls inside the filter
    pub fn matches(&self, date: &str) -> bool {
        if let Some(day) = &self.day {
            return date == day;
        }
        if let Some(month) = &self.month {
            return date.starts_with(month.as_str());
        }
        true
    }
}

/// Page x date matrix of partially allocated net profit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryMatrixResponse {
    /// Distinct dates present in the filtered batches, ascending
    pub dates: Vec<String>,
    /// One row per page present in the filtered batches, ascending
    pub rows: Vec<SummaryMatrixRow>,
    /// Column totals, aligned with `dates`
    pub date_totals: Vec<f64>,
    /// Sum of all cells
    pub grand_total: f64,
}

/// One page row of the summary matrix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryMatrixRow {
    pub page_name: String,
    /// Cell values aligned with the response's `dates`
    pub cells: Vec<f64>,
    pub row_total: f64,
}

/// Category x date breakdown table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBreakdownResponse {
    /// Distinct dates present in the filtered batches, ascending
    pub dates: Vec<String>,
    /// One row per category, in `CATEGORY_ORDER`
    pub rows: Vec<CategoryRow>,
}

/// One category row of the breakdown table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRow {
    pub category: String,
    /// Per-date values aligned with the response's `dates`
    pub values: Vec<f64>,
    /// Sum across all dates in view
    pub row_total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_filter_wins_over_month() {
        let filter = ReportFilter {
            day: Some("2025-06-01".into()),
            month: Some("2025-07".into()),
        };
        assert!(filter.matches("2025-06-01"));
        assert!(!filter.matches("2025-07-15"));
    }

    #[test]
    fn month_filter_matches_prefix() {
        let filter = ReportFilter::for_month("2025-06");
        assert!(filter.matches("2025-06-30"));
        assert!(!filter.matches("2025-07-01"));
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = ReportFilter::default();
        assert!(filter.matches("1999-01-01"));
    }
}
