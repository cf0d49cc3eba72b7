//! Page-grouped salary sheet
//!
//! Converts each moderator's monthly salary to a daily rate at
//! monthly / 30. The rate is zeroed only when a day filter is active
//! and the moderator is marked absent on that exact day; month filters
//! never zero anyone. Page order volume uses the same day/month filter
//! as the summary reports.

use contracts::dashboards::d400_summary_report::ReportFilter;
use contracts::dashboards::d402_salary_sheet::{
    ModeratorSalaryRow, PageSalaryGroup, SalarySheetResponse,
};
use contracts::domain::a001_order_batch::aggregate::OrderBatch;
use contracts::domain::a003_sales_page::aggregate::SalesPage;
use contracts::domain::a005_moderator::aggregate::{AttendanceRecord, Moderator};
use std::collections::HashSet;

use crate::domain::{a001_order_batch, a003_sales_page, a005_moderator};

pub async fn salary_sheet(filter: ReportFilter) -> anyhow::Result<SalarySheetResponse> {
    let pages = a003_sales_page::repository::list_all().await?;
    let moderators = a005_moderator::repository::list_all().await?;
    let batches = a001_order_batch::repository::list_all().await?;
    let attendance = a005_moderator::attendance::list_all().await?;
    Ok(build_salary_sheet(
        &pages,
        &moderators,
        &batches,
        &attendance,
        &filter,
    ))
}

/// Builds the sheet over the managed page list (not the batch set)
pub fn build_salary_sheet(
    pages: &[SalesPage],
    moderators: &[Moderator],
    batches: &[OrderBatch],
    attendance: &[AttendanceRecord],
    filter: &ReportFilter,
) -> SalarySheetResponse {
    let absent_keys: HashSet<(String, String)> = attendance
        .iter()
        .map(|a| {
            (
                a.moderator_id.clone(),
                a.absent_date.format("%Y-%m-%d").to_string(),
            )
        })
        .collect();

    let groups = pages
        .iter()
        .map(|page| {
            let page_orders: f64 = batches
                .iter()
                .filter(|b| {
                    b.page_name == page.page_name
                        && filter.matches(&b.batch_date.format("%Y-%m-%d").to_string())
                })
                .map(|b| b.batch_quantity())
                .sum();

            let rows: Vec<ModeratorSalaryRow> = moderators
                .iter()
                .filter(|m| m.page_name == page.page_name)
                .map(|m| {
                    let absent = match &filter.day {
                        Some(day) => absent_keys.contains(&(m.to_string_id(), day.clone())),
                        None => false,
                    };
                    let daily_rate = if absent { 0.0 } else { m.daily_rate() };
                    ModeratorSalaryRow {
                        moderator_id: m.to_string_id(),
                        moderator_name: m.moderator_name.clone(),
                        monthly_salary: m.monthly_salary,
                        daily_rate,
                        absent,
                    }
                })
                .collect();

            let total_daily_salary: f64 = rows.iter().map(|r| r.daily_rate).sum();
            let salary_average = if page_orders > 0.0 {
                total_daily_salary / page_orders
            } else {
                0.0
            };

            PageSalaryGroup {
                page_name: page.page_name.clone(),
                moderators: rows,
                total_daily_salary,
                page_orders,
                salary_average,
            }
        })
        .collect();

    SalarySheetResponse { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_order_batch::aggregate::{
        Logistics, OfficeCosts, ProductLine, SharedCosts,
    };

    fn page(name: &str) -> SalesPage {
        SalesPage::new_for_insert(format!("PAGE-{}", name), name.into(), name.into(), None)
    }

    fn moderator(name: &str, page: &str, monthly: f64) -> Moderator {
        Moderator::new_for_insert(
            format!("MOD-{}", name),
            name.into(),
            name.into(),
            page.into(),
            monthly,
            None,
        )
    }

    fn batch(date: &str, page: &str, qty: f64) -> OrderBatch {
        OrderBatch::new_for_insert(
            format!("BATCH-{}", page),
            format!("{} {}", page, date),
            chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            page.into(),
            vec![ProductLine {
                name: "Watch".into(),
                quantity: qty,
                buy_rate: 200.0,
                sale_price: 500.0,
            }],
            SharedCosts::default(),
            OfficeCosts::default(),
            Logistics::default(),
            None,
        )
    }

    fn absence(m: &Moderator, date: &str) -> AttendanceRecord {
        AttendanceRecord {
            moderator_id: m.to_string_id(),
            absent_date: chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        }
    }

    #[test]
    fn daily_rate_is_monthly_over_thirty() {
        let pages = vec![page("Page One")];
        let mods = vec![moderator("Rahim", "Page One", 15000.0)];
        let sheet =
            build_salary_sheet(&pages, &mods, &[], &[], &ReportFilter::default());
        assert_eq!(sheet.groups[0].moderators[0].daily_rate, 500.0);
        assert_eq!(sheet.groups[0].total_daily_salary, 500.0);
    }

    #[test]
    fn absence_zeroes_rate_only_for_that_day() {
        let pages = vec![page("Page One")];
        let mods = vec![
            moderator("Rahim", "Page One", 15000.0),
            moderator("Karim", "Page One", 9000.0),
        ];
        let marks = vec![absence(&mods[0], "2025-06-01")];

        let on_day = build_salary_sheet(
            &pages,
            &mods,
            &[],
            &marks,
            &ReportFilter::for_day("2025-06-01"),
        );
        assert_eq!(on_day.groups[0].moderators[0].daily_rate, 0.0);
        assert!(on_day.groups[0].moderators[0].absent);
        assert_eq!(on_day.groups[0].total_daily_salary, 300.0);

        let other_day = build_salary_sheet(
            &pages,
            &mods,
            &[],
            &marks,
            &ReportFilter::for_day("2025-06-02"),
        );
        assert_eq!(other_day.groups[0].total_daily_salary, 800.0);
    }

    #[test]
    fn month_filter_never_zeroes_rates() {
        let pages = vec![page("Page One")];
        let mods = vec![moderator("Rahim", "Page One", 15000.0)];
        let marks = vec![absence(&mods[0], "2025-06-01")];
        let sheet = build_salary_sheet(
            &pages,
            &mods,
            &[],
            &marks,
            &ReportFilter::for_month("2025-06"),
        );
        assert_eq!(sheet.groups[0].moderators[0].daily_rate, 500.0);
    }

    #[test]
    fn salary_average_divides_by_filtered_page_orders() {
        let pages = vec![page("Page One")];
        let mods = vec![moderator("Rahim", "Page One", 15000.0)];
        let batches = vec![
            batch("2025-06-01", "Page One", 10.0),
            batch("2025-07-01", "Page One", 99.0),
        ];
        let sheet = build_salary_sheet(
            &pages,
            &mods,
            &batches,
            &[],
            &ReportFilter::for_month("2025-06"),
        );
        assert_eq!(sheet.groups[0].page_orders, 10.0);
        assert_eq!(sheet.groups[0].salary_average, 50.0);
    }

    #[test]
    fn page_without_orders_has_zero_average() {
        let pages = vec![page("Page One")];
        let mods = vec![moderator("Rahim", "Page One", 15000.0)];
        let sheet =
            build_salary_sheet(&pages, &mods, &[], &[], &ReportFilter::default());
        assert_eq!(sheet.groups[0].page_orders, 0.0);
        assert_eq!(sheet.groups[0].salary_average, 0.0);
    }

    #[test]
    fn pages_without_moderators_still_appear() {
        let pages = vec![page("Page One"), page("Page Two")];
        let mods = vec![moderator("Rahim", "Page One", 15000.0)];
        let sheet =
            build_salary_sheet(&pages, &mods, &[], &[], &ReportFilter::default());
        assert_eq!(sheet.groups.len(), 2);
        assert!(sheet.groups[1].moderators.is_empty());
        assert_eq!(sheet.groups[1].total_daily_salary, 0.0);
    }
}
