//! Allocated cost sheet
//!
//! Distributes batch-level and day-level shared costs down to per-unit,
//! per-product rows. Batch costs (ad spend, salary) divide by the batch
//! quantity; day costs (management salary, office cost, bonus) divide by
//! the combined quantity of every batch sharing the date, regardless of
//! page. All arithmetic is total: a zero denominator yields 0.

use contracts::domain::a001_order_batch::aggregate::OrderBatch;
use contracts::projections::p900_cost_sheet::{CostSheetRequest, CostSheetRow};
use std::collections::HashMap;

use crate::domain::a001_order_batch::repository;

/// Loads the batch set and builds the sheet for the request
pub async fn cost_sheet(request: CostSheetRequest) -> anyhow::Result<Vec<CostSheetRow>> {
    let batches = repository::list_all().await?;
    Ok(build_sheet(&batches, request.date.as_deref()))
}

/// Flattens a batch set into allocated rows, in batch-then-product order
///
/// The date filter is applied before day cohorts are computed, so
/// filtering changes the day-level denominators along with the row set.
pub fn build_sheet(batches: &[OrderBatch], date_filter: Option<&str>) -> Vec<CostSheetRow> {
    let filtered: Vec<&OrderBatch> = batches
        .iter()
        .filter(|b| match date_filter {
            Some(date) => b.batch_date.format("%Y-%m-%d").to_string() == date,
            None => true,
        })
        .collect();

    let mut day_totals: HashMap<String, f64> = HashMap::new();
    for batch in &filtered {
        let date = batch.batch_date.format("%Y-%m-%d").to_string();
        *day_totals.entry(date).or_insert(0.0) += batch.batch_quantity();
    }

    let mut rows = Vec::new();
    for batch in &filtered {
        let date = batch.batch_date.format("%Y-%m-%d").to_string();
        let day_total = day_totals.get(&date).copied().unwrap_or(0.0);
        rows.extend(allocate_batch(batch, day_total));
    }
    rows
}

/// Allocates one batch into one row per product line with quantity > 0
pub fn allocate_batch(batch: &OrderBatch, day_total_quantity: f64) -> Vec<CostSheetRow> {
    let batch_qty = batch.batch_quantity();
    let unit_ad_cost = safe_div(batch.shared_costs.dollar * batch.shared_costs.rate, batch_qty);
    let unit_salary = safe_div(batch.shared_costs.salary, batch_qty);
    let unit_mng_salary = safe_div(batch.office_costs.mng_salary, day_total_quantity);
    let unit_office_cost = safe_div(batch.office_costs.office_cost, day_total_quantity);
    let unit_bonus = safe_div(batch.office_costs.bonus, day_total_quantity);

    let mut rows = Vec::new();
    for line in &batch.products {
        if line.quantity == 0.0 {
            continue;
        }
        let unit_cod = line.sale_price * batch.logistics.cod_percentage / 100.0;
        let unit_return = line.sale_price * batch.shared_costs.return_expected / 100.0;
        let total_unit_cost = line.buy_rate
            + unit_ad_cost
            + unit_salary
            + unit_mng_salary
            + unit_office_cost
            + unit_bonus
            + unit_cod
            + unit_return
            + batch.logistics.delivery_charge
            + batch.logistics.packing_cost;
        let unit_profit = line.sale_price - total_unit_cost;

        rows.push(CostSheetRow {
            batch_id: batch.to_string_id(),
            date: batch.batch_date.format("%Y-%m-%d").to_string(),
            page_name: batch.page_name.clone(),
            product_name: line.name.clone(),
            quantity: line.quantity,
            sale_price: line.sale_price,
            buy_rate: line.buy_rate,
            unit_ad_cost,
            unit_salary,
            unit_mng_salary,
            unit_office_cost,
            unit_bonus,
            unit_cod,
            unit_return,
            delivery_charge: batch.logistics.delivery_charge,
            packing_cost: batch.logistics.packing_cost,
            total_unit_cost,
            unit_profit,
        });
    }
    rows
}

fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_order_batch::aggregate::{
        Logistics, OfficeCosts, ProductLine, SharedCosts,
    };

    fn line(name: &str, qty: f64, sale: f64, buy: f64) -> ProductLine {
        ProductLine {
            name: name.into(),
            quantity: qty,
            buy_rate: buy,
            sale_price: sale,
        }
    }

    fn batch(date: &str, page: &str, products: Vec<ProductLine>) -> OrderBatch {
        OrderBatch::new_for_insert(
            format!("BATCH-{}", page),
            format!("{} {}", page, date),
            chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            page.into(),
            products,
            SharedCosts {
                dollar: 10.0,
                rate: 120.0,
                ad_cost: 1200.0,
                salary: 300.0,
                return_expected: 20.0,
            },
            OfficeCosts {
                total_orders: 0.0,
                mng_salary: 150.0,
                office_cost: 90.0,
                bonus: 0.0,
                manual_adjust: 0.0,
            },
            Logistics {
                delivery_charge: 120.0,
                packing_cost: 10.0,
                cod_percentage: 1.0,
            },
            None,
        )
    }

    #[test]
    fn allocates_worked_example() {
        let b = batch(
            "2025-06-01",
            "Page One",
            vec![line("A", 10.0, 500.0, 200.0), line("B", 5.0, 800.0, 300.0)],
        );
        let rows = allocate_batch(&b, 15.0);
        assert_eq!(rows.len(), 2);

        let a = &rows[0];
        assert_eq!(a.unit_ad_cost, 80.0);
        assert_eq!(a.unit_salary, 20.0);
        assert_eq!(a.unit_mng_salary, 10.0);
        assert_eq!(a.unit_office_cost, 6.0);
        assert_eq!(a.unit_bonus, 0.0);
        assert_eq!(a.unit_cod, 5.0);
        assert_eq!(a.unit_return, 100.0);
        assert_eq!(a.total_unit_cost, 551.0);
        assert_eq!(a.unit_profit, -51.0);
    }

    #[test]
    fn skips_zero_quantity_lines() {
        let b = batch(
            "2025-06-01",
            "Page One",
            vec![line("A", 10.0, 500.0, 200.0), line("B", 0.0, 800.0, 300.0)],
        );
        let rows = allocate_batch(&b, 10.0);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].product_name, "A");
    }

    #[test]
    fn zero_day_cohort_zeroes_day_level_terms() {
        let b = batch("2025-06-01", "Page One", vec![line("A", 10.0, 500.0, 200.0)]);
        let rows = allocate_batch(&b, 0.0);
        assert_eq!(rows[0].unit_mng_salary, 0.0);
        assert_eq!(rows[0].unit_office_cost, 0.0);
        assert_eq!(rows[0].unit_bonus, 0.0);
        // Batch-level terms are unaffected by the day cohort
        assert_eq!(rows[0].unit_ad_cost, 120.0);
    }

    #[test]
    fn day_cohort_spans_pages() {
        let b1 = batch("2025-06-01", "Page One", vec![line("A", 10.0, 500.0, 200.0)]);
        let b2 = batch("2025-06-01", "Page Two", vec![line("C", 5.0, 400.0, 150.0)]);
        let rows = build_sheet(&[b1, b2], None);
        assert_eq!(rows.len(), 2);
        // mng_salary 150 / 15 units across both pages
        assert_eq!(rows[0].unit_mng_salary, 10.0);
        assert_eq!(rows[1].unit_mng_salary, 10.0);
    }

    #[test]
    fn date_filter_changes_day_cohort() {
        let b1 = batch("2025-06-01", "Page One", vec![line("A", 10.0, 500.0, 200.0)]);
        let b2 = batch("2025-06-02", "Page One", vec![line("B", 5.0, 400.0, 150.0)]);
        let all = build_sheet(&[b1.clone(), b2.clone()], None);
        let filtered = build_sheet(&[b1, b2], Some("2025-06-01"));
        // Different dates never share a cohort, so the per-row numbers agree
        assert_eq!(filtered.len(), 1);
        assert_eq!(all[0], filtered[0]);
    }

    #[test]
    fn rows_keep_batch_then_product_order() {
        let b = batch(
            "2025-06-01",
            "Page One",
            vec![line("First", 1.0, 10.0, 5.0), line("Second", 2.0, 20.0, 8.0)],
        );
        let rows = build_sheet(&[b], None);
        assert_eq!(rows[0].product_name, "First");
        assert_eq!(rows[1].product_name, "Second");
    }
}
