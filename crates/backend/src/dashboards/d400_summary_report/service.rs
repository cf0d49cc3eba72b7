//! Summary matrix and category breakdown
//!
//! Both views share the same filtered batch set and the same derived
//! date list. The matrix profit allocates only batch-level costs (ad
//! spend, salary, COD, return, delivery, packing); day-level office
//! costs are left out of this view. The breakdown computes its derived
//! rows (TOTAL COST, NET PROFIT, TOTAL RETURN TK) strictly from rows
//! built earlier for the same date, never from the raw batches again.

use contracts::dashboards::d400_summary_report::{
    CategoryBreakdownResponse, CategoryRow, ReportFilter, SummaryMatrixResponse, SummaryMatrixRow,
    CATEGORY_ORDER,
};
use contracts::domain::a001_order_batch::aggregate::OrderBatch;
use std::collections::HashMap;

use crate::domain::a001_order_batch::repository;

pub async fn summary_matrix(filter: ReportFilter) -> anyhow::Result<SummaryMatrixResponse> {
    let batches = repository::list_all().await?;
    Ok(build_matrix(&batches, &filter))
}

pub async fn category_breakdown(filter: ReportFilter) -> anyhow::Result<CategoryBreakdownResponse> {
    let batches = repository::list_all().await?;
    Ok(build_breakdown(&batches, &filter))
}

fn filter_batches<'a>(batches: &'a [OrderBatch], filter: &ReportFilter) -> Vec<&'a OrderBatch> {
    batches
        .iter()
        .filter(|b| filter.matches(&b.batch_date.format("%Y-%m-%d").to_string()))
        .collect()
}

fn distinct_sorted<T: Ord + Clone>(mut values: Vec<T>) -> Vec<T> {
    values.sort();
    values.dedup();
    values
}

/// Batch-level profit of one batch: office-cost terms are excluded
fn batch_partial_profit(batch: &OrderBatch) -> f64 {
    let batch_qty = batch.batch_quantity();
    let unit_ad = if batch_qty > 0.0 {
        batch.shared_costs.dollar * batch.shared_costs.rate / batch_qty
    } else {
        0.0
    };
    let unit_salary = if batch_qty > 0.0 {
        batch.shared_costs.salary / batch_qty
    } else {
        0.0
    };

    let mut profit = 0.0;
    for line in &batch.products {
        let unit_cod = line.sale_price * batch.logistics.cod_percentage / 100.0;
        let unit_return = line.sale_price * batch.shared_costs.return_expected / 100.0;
        let total_unit_cost = line.buy_rate
            + unit_ad
            + unit_salary
            + unit_cod
            + unit_return
            + batch.logistics.delivery_charge
            + batch.logistics.packing_cost;
        profit += (line.sale_price - total_unit_cost) * line.quantity;
    }
    profit
}

/// Builds the page x date profit matrix over the filtered batch set
///
/// Pages and dates come from the batches actually present after
/// filtering; a page with no filtered batches gets no row.
pub fn build_matrix(batches: &[OrderBatch], filter: &ReportFilter) -> SummaryMatrixResponse {
    let filtered = filter_batches(batches, filter);

    let dates = distinct_sorted(
        filtered
            .iter()
            .map(|b| b.batch_date.format("%Y-%m-%d").to_string())
            .collect(),
    );
    let pages = distinct_sorted(filtered.iter().map(|b| b.page_name.clone()).collect());

    let mut cells: HashMap<(String, String), f64> = HashMap::new();
    for batch in &filtered {
        let key = (
            batch.page_name.clone(),
            batch.batch_date.format("%Y-%m-%d").to_string(),
        );
        *cells.entry(key).or_insert(0.0) += batch_partial_profit(batch);
    }

    let mut rows = Vec::new();
    let mut date_totals = vec![0.0; dates.len()];
    let mut grand_total = 0.0;
    for page in &pages {
        let mut row_cells = Vec::with_capacity(dates.len());
        let mut row_total = 0.0;
        for (i, date) in dates.iter().enumerate() {
            let value = cells
                .get(&(page.clone(), date.clone()))
                .copied()
                .unwrap_or(0.0);
            row_cells.push(value);
            row_total += value;
            date_totals[i] += value;
            grand_total += value;
        }
        rows.push(SummaryMatrixRow {
            page_name: page.clone(),
            cells: row_cells,
            row_total,
        });
    }

    SummaryMatrixResponse {
        dates,
        rows,
        date_totals,
        grand_total,
    }
}

/// Builds the fixed category x date table over the filtered batch set
pub fn build_breakdown(batches: &[OrderBatch], filter: &ReportFilter) -> CategoryBreakdownResponse {
    let filtered = filter_batches(batches, filter);

    let dates = distinct_sorted(
        filtered
            .iter()
            .map(|b| b.batch_date.format("%Y-%m-%d").to_string())
            .collect(),
    );

    // Direct rows first: derived rows read them by name for the same date
    let mut table: HashMap<&'static str, Vec<f64>> = HashMap::new();
    for category in CATEGORY_ORDER {
        let values: Vec<f64> = dates
            .iter()
            .map(|date| {
                let day_batches: Vec<&&OrderBatch> = filtered
                    .iter()
                    .filter(|b| b.batch_date.format("%Y-%m-%d").to_string() == *date)
                    .collect();
                category_value(category, &day_batches, &table, &dates, date)
            })
            .collect();
        table.insert(category, values);
    }

    let rows = CATEGORY_ORDER
        .iter()
        .map(|category| {
            let values = table.get(category).cloned().unwrap_or_default();
            let row_total = values.iter().sum();
            CategoryRow {
                category: category.to_string(),
                values,
                row_total,
            }
        })
        .collect();

    CategoryBreakdownResponse { dates, rows }
}

fn category_value(
    category: &str,
    day_batches: &[&&OrderBatch],
    table: &HashMap<&'static str, Vec<f64>>,
    dates: &[String],
    date: &str,
) -> f64 {
    let prior = |name: &str| -> f64 {
        let idx = dates.iter().position(|d| d == date).unwrap_or(0);
        table
            .get(name)
            .and_then(|values| values.get(idx))
            .copied()
            .unwrap_or(0.0)
    };

    match category {
        "TOTAL MAILER DAM" => sum_lines(day_batches, |_b, l| l.buy_rate * l.quantity),
        "TOTAL DOLLAR" => day_batches
            .iter()
            .map(|b| b.shared_costs.dollar * b.shared_costs.rate)
            .sum(),
        "TOTAL SALARY" => day_batches.iter().map(|b| b.shared_costs.salary).sum(),
        "BONUS" => day_batches.iter().map(|b| b.office_costs.bonus).sum(),
        "OFFICE COST" => day_batches.iter().map(|b| b.office_costs.office_cost).sum(),
        "COD" => sum_lines(day_batches, |b, l| {
            l.sale_price * b.logistics.cod_percentage / 100.0 * l.quantity
        }),
        "RETURN COST" => sum_lines(day_batches, |b, l| {
            l.sale_price * b.shared_costs.return_expected / 100.0 * l.quantity
        }),
        "DELIVERY CHARGE" => day_batches
            .iter()
            .map(|b| b.logistics.delivery_charge * b.batch_quantity())
            .sum(),
        "PACKING COST" => day_batches
            .iter()
            .map(|b| b.logistics.packing_cost * b.batch_quantity())
            .sum(),
        "TOTAL ORDER" => day_batches.iter().map(|b| b.batch_quantity()).sum(),
        "TOTAL DELIVERED AMOUNT" => sum_lines(day_batches, |_b, l| l.sale_price * l.quantity),
        "TOTAL COST" => {
            prior("TOTAL MAILER DAM")
                + prior("TOTAL DOLLAR")
                + prior("TOTAL SALARY")
                + prior("BONUS")
                + prior("OFFICE COST")
                + prior("COD")
                + prior("RETURN COST")
                + prior("DELIVERY CHARGE")
                + prior("PACKING COST")
        }
        "NET PROFIT" => prior("TOTAL DELIVERED AMOUNT") - prior("TOTAL COST"),
        "TOTAL RETURN TK" => prior("RETURN COST"),
        // Unit count, not currency
        "RETURN PICH" => sum_lines(day_batches, |b, l| {
            l.quantity * b.shared_costs.return_expected / 100.0
        }),
        _ => 0.0,
    }
}

fn sum_lines<F>(day_batches: &[&&OrderBatch], f: F) -> f64
where
    F: Fn(&OrderBatch, &contracts::domain::a001_order_batch::aggregate::ProductLine) -> f64,
{
    day_batches
        .iter()
        .map(|b| b.products.iter().map(|l| f(b, l)).sum::<f64>())
        .sum()
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
                bonus: 50.0,
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

    fn sample_batches() -> Vec<OrderBatch> {
        vec![
            batch(
                "2025-06-01",
                "Page One",
                vec![line("A", 10.0, 500.0, 200.0), line("B", 5.0, 800.0, 300.0)],
            ),
            batch("2025-06-01", "Page Two", vec![line("C", 4.0, 400.0, 150.0)]),
            batch("2025-06-02", "Page One", vec![line("A", 6.0, 500.0, 200.0)]),
        ]
    }

    fn row<'a>(response: &'a CategoryBreakdownResponse, name: &str) -> &'a CategoryRow {
        response.rows.iter().find(|r| r.category == name).unwrap()
    }

    #[test]
    fn matrix_derives_pages_and_dates_from_filtered_set() {
        let batches = sample_batches();
        let response = build_matrix(&batches, &ReportFilter::for_day("2025-06-01"));
        assert_eq!(response.dates, vec!["2025-06-01"]);
        let pages: Vec<&str> = response.rows.iter().map(|r| r.page_name.as_str()).collect();
        assert_eq!(pages, vec!["Page One", "Page Two"]);
    }

    #[test]
    fn matrix_grand_total_is_sum_of_cells() {
        let batches = sample_batches();
        let response = build_matrix(&batches, &ReportFilter::default());
        let cell_sum: f64 = response
            .rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .sum();
        assert!((response.grand_total - cell_sum).abs() < 1e-9);
    }

    #[test]
    fn matrix_profit_excludes_office_costs() {
        // Single line, single batch: profit is computable by hand
        let b = batch("2025-06-01", "Page One", vec![line("A", 10.0, 500.0, 200.0)]);
        let response = build_matrix(&[b], &ReportFilter::default());
        // unit costs: ad 120, salary 30, cod 5, return 100, delivery 120, packing 10
        // profit/unit = 500 - (200+120+30+5+100+120+10) = -85
        assert_eq!(response.grand_total, -850.0);
    }

    #[test]
    fn breakdown_total_cost_matches_constituents() {
        let batches = sample_batches();
        let response = build_breakdown(&batches, &ReportFilter::default());
        let constituents = [
            "TOTAL MAILER DAM",
            "TOTAL DOLLAR",
            "TOTAL SALARY",
            "BONUS",
            "OFFICE COST",
            "COD",
            "RETURN COST",
            "DELIVERY CHARGE",
            "PACKING COST",
        ];
        for (i, _date) in response.dates.iter().enumerate() {
            let expected: f64 = constituents
                .iter()
                .map(|name| row(&response, name).values[i])
                .sum();
            assert!((row(&response, "TOTAL COST").values[i] - expected).abs() < 1e-9);
            let net = row(&response, "TOTAL DELIVERED AMOUNT").values[i]
                - row(&response, "TOTAL COST").values[i];
            assert!((row(&response, "NET PROFIT").values[i] - net).abs() < 1e-9);
        }
    }

    #[test]
    fn breakdown_return_tk_aliases_return_cost() {
        let batches = sample_batches();
        let response = build_breakdown(&batches, &ReportFilter::default());
        assert_eq!(
            row(&response, "TOTAL RETURN TK").values,
            row(&response, "RETURN COST").values
        );
    }

    #[test]
    fn breakdown_return_pich_counts_units() {
        let b = batch("2025-06-01", "Page One", vec![line("A", 10.0, 500.0, 200.0)]);
        let response = build_breakdown(&[b], &ReportFilter::default());
        // 10 units x 20% expected return
        assert_eq!(row(&response, "RETURN PICH").values, vec![2.0]);
    }

    #[test]
    fn breakdown_delivery_charged_per_unit() {
        let b = batch(
            "2025-06-01",
            "Page One",
            vec![line("A", 10.0, 500.0, 200.0), line("B", 5.0, 800.0, 300.0)],
        );
        let response = build_breakdown(&[b], &ReportFilter::default());
        assert_eq!(row(&response, "DELIVERY CHARGE").values, vec![120.0 * 15.0]);
    }

    #[test]
    fn day_and_single_date_month_filters_agree() {
        let batches = vec![batch(
            "2025-06-01",
            "Page One",
            vec![line("A", 10.0, 500.0, 200.0)],
        )];
        let by_day = build_breakdown(&batches, &ReportFilter::for_day("2025-06-01"));
        let by_month = build_breakdown(&batches, &ReportFilter::for_month("2025-06"));
        assert_eq!(by_day.dates, by_month.dates);
        for (day_row, month_row) in by_day.rows.iter().zip(by_month.rows.iter()) {
            assert_eq!(day_row.values, month_row.values);
        }
    }

    #[test]
    fn zero_quantity_lines_do_not_move_report_totals() {
        let base = sample_batches();
        let mut with_zero = sample_batches();
        with_zero[0]
            .products
            .push(line("Ghost", 0.0, 900.0, 400.0));

        let matrix_a = build_matrix(&base, &ReportFilter::default());
        let matrix_b = build_matrix(&with_zero, &ReportFilter::default());
        assert_eq!(matrix_a.grand_total, matrix_b.grand_total);
        assert_eq!(matrix_a.date_totals, matrix_b.date_totals);

        let breakdown_a = build_breakdown(&base, &ReportFilter::default());
        let breakdown_b = build_breakdown(&with_zero, &ReportFilter::default());
        for (a, b) in breakdown_a.rows.iter().zip(breakdown_b.rows.iter()) {
            assert_eq!(a.values, b.values, "{}", a.category);
        }
    }

    #[test]
    fn breakdown_row_totals_sum_dates() {
        let batches = sample_batches();
        let response = build_breakdown(&batches, &ReportFilter::default());
        for r in &response.rows {
            let expected: f64 = r.values.iter().sum();
            assert!((r.row_total - expected).abs() < 1e-9);
        }
    }
}
