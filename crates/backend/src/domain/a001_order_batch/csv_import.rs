use contracts::domain::a001_order_batch::aggregate::{
    Logistics, OfficeCosts, OrderBatchDto, ProductLine, SharedCosts,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::service;

/// One parsed invoice line
///
/// Column order: date, page, product, quantity, buy rate, sale price.
/// Lines sharing (date, page) are grouped into one batch; cost fields
/// are left at zero and filled in later through the edit form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRow {
    pub date: String,
    pub page: String,
    pub product: String,
    pub quantity: f64,
    #[serde(rename = "buyRate")]
    pub buy_rate: f64,
    #[serde(rename = "salePrice")]
    pub sale_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ImportResult {
    pub created_count: usize,
    pub skipped_rows: Vec<String>,
}

/// Imports invoice CSV content: groups rows into batches and creates them
pub async fn import_batches_from_csv(content: &str) -> anyhow::Result<ImportResult> {
    let rows = parse_invoice_csv(content)?;
    import_batches_from_rows(rows).await
}

/// Creates one batch per (date, page) group of invoice rows
pub async fn import_batches_from_rows(rows: Vec<InvoiceRow>) -> anyhow::Result<ImportResult> {
    let mut skipped_rows = Vec::new();
    let mut groups: BTreeMap<(String, String), Vec<InvoiceRow>> = BTreeMap::new();

    for row in rows {
        if row.quantity <= 0.0 {
            skipped_rows.push(format!("{} / {} / {}", row.date, row.page, row.product));
            continue;
        }
        groups
            .entry((row.date.clone(), row.page.clone()))
            .or_default()
            .push(row);
    }

    let mut created_count = 0;
    for ((date, page), group) in groups {
        let batch_date = chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|e| anyhow::anyhow!("Invalid date '{}': {}", date, e))?;

        let products: Vec<ProductLine> = group
            .iter()
            .map(|r| ProductLine {
                name: r.product.trim().to_string(),
                quantity: r.quantity,
                buy_rate: r.buy_rate,
                sale_price: r.sale_price,
            })
            .collect();

        let dto = OrderBatchDto {
            id: None,
            code: None,
            description: format!("{} {}", page, date),
            batch_date,
            page_name: page,
            products,
            shared_costs: SharedCosts::default(),
            office_costs: OfficeCosts::default(),
            logistics: Logistics::default(),
            comment: Some("Imported from invoice".into()),
        };

        service::create(dto).await?;
        created_count += 1;
    }

    Ok(ImportResult {
        created_count,
        skipped_rows,
    })
}

/// Parses invoice CSV content into rows, skipping unreadable records
pub fn parse_invoice_csv(content: &str) -> anyhow::Result<Vec<InvoiceRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let idx = |name: &str| -> Option<usize> {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
    };
    let date_idx = idx("date").ok_or_else(|| anyhow::anyhow!("Missing 'date' column"))?;
    let page_idx = idx("page").ok_or_else(|| anyhow::anyhow!("Missing 'page' column"))?;
    let product_idx = idx("product").ok_or_else(|| anyhow::anyhow!("Missing 'product' column"))?;
    let quantity_idx =
        idx("quantity").ok_or_else(|| anyhow::anyhow!("Missing 'quantity' column"))?;
    let buy_idx = idx("buy_rate").ok_or_else(|| anyhow::anyhow!("Missing 'buy_rate' column"))?;
    let sale_idx =
        idx("sale_price").ok_or_else(|| anyhow::anyhow!("Missing 'sale_price' column"))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |i: usize| record.get(i).unwrap_or("").to_string();
        let number = |i: usize| field(i).parse::<f64>().unwrap_or(0.0);

        rows.push(InvoiceRow {
            date: field(date_idx),
            page: field(page_idx),
            product: field(product_idx),
            quantity: number(quantity_idx),
            buy_rate: number(buy_idx),
            sale_price: number(sale_idx),
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_invoice_csv() {
        let content = "date,page,product,quantity,buy_rate,sale_price\n\
                       2025-06-01,Page One,Watch,10,250,500\n\
                       2025-06-01,Page One,Belt,5,80,200\n";
        let rows = parse_invoice_csv(content).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].product, "Watch");
        assert_eq!(rows[0].quantity, 10.0);
        assert_eq!(rows[1].sale_price, 200.0);
    }

    #[test]
    fn test_parse_rejects_missing_column() {
        let content = "date,page,product\n2025-06-01,Page One,Watch\n";
        assert!(parse_invoice_csv(content).is_err());
    }

    #[test]
    fn test_parse_header_case_insensitive() {
        let content = "Date,Page,Product,Quantity,Buy_Rate,Sale_Price\n\
                       2025-06-01,Page One,Watch,10,250,500\n";
        let rows = parse_invoice_csv(content).unwrap();
        assert_eq!(rows.len(), 1);
    }
}
