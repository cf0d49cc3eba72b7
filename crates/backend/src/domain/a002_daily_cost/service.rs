use super::repository;
use contracts::domain::a002_daily_cost::aggregate::{
    DailyCost, DailyCostDto, DailyCostFilter, DailyCostTotals,
};
use uuid::Uuid;

pub async fn create(dto: DailyCostDto) -> anyhow::Result<Uuid> {
    let code = dto
        .code
        .clone()
        .unwrap_or_else(|| format!("ADC-{}", Uuid::new_v4()));

    let mut aggregate = DailyCost::new_for_insert(
        code,
        dto.description,
        dto.cost_date,
        dto.page_name,
        dto.dollar,
        dto.rate,
        dto.salary,
        dto.comment,
    );

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: DailyCostDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.update(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    aggregate.before_write();

    repository::update(&aggregate).await
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<DailyCost>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<DailyCost>> {
    repository::list_all().await
}

/// Filtered list: page substring match plus exact date match
pub async fn list_filtered(filter: DailyCostFilter) -> anyhow::Result<Vec<DailyCost>> {
    let items = repository::list_all().await?;
    Ok(apply_filter(items, &filter))
}

/// Totals over the same filtered list
pub async fn totals(filter: DailyCostFilter) -> anyhow::Result<DailyCostTotals> {
    let items = list_filtered(filter).await?;
    Ok(compute_totals(&items))
}

fn apply_filter(items: Vec<DailyCost>, filter: &DailyCostFilter) -> Vec<DailyCost> {
    items
        .into_iter()
        .filter(|c| {
            if let Some(page) = &filter.page_name {
                if !page.trim().is_empty()
                    && !c
                        .page_name
                        .to_lowercase()
                        .contains(page.trim().to_lowercase().as_str())
                {
                    return false;
                }
            }
            if let Some(date) = &filter.date {
                if !date.trim().is_empty()
                    && c.cost_date.format("%Y-%m-%d").to_string() != date.trim()
                {
                    return false;
                }
            }
            true
        })
        .collect()
}

fn compute_totals(items: &[DailyCost]) -> DailyCostTotals {
    DailyCostTotals {
        dollar: items.iter().map(|c| c.dollar).sum(),
        amount: items.iter().map(|c| c.total_ad_cost).sum(),
        salary: items.iter().map(|c| c.salary).sum(),
        entries: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cost(date: &str, page: &str, dollar: f64, rate: f64) -> DailyCost {
        DailyCost::new_for_insert(
            format!("ADC-{}", page),
            format!("{} {}", page, date),
            chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            page.into(),
            dollar,
            rate,
            0.0,
            None,
        )
    }

    #[test]
    fn filter_by_page_substring_is_case_insensitive() {
        let items = vec![
            cost("2025-06-01", "Page One", 10.0, 100.0),
            cost("2025-06-01", "Another", 5.0, 100.0),
        ];
        let filter = DailyCostFilter {
            page_name: Some("page".into()),
            date: None,
        };
        let filtered = apply_filter(items, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].page_name, "Page One");
    }

    #[test]
    fn filter_by_exact_date() {
        let items = vec![
            cost("2025-06-01", "Page One", 10.0, 100.0),
            cost("2025-06-02", "Page One", 5.0, 100.0),
        ];
        let filter = DailyCostFilter {
            page_name: None,
            date: Some("2025-06-02".into()),
        };
        let filtered = apply_filter(items, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].dollar, 5.0);
    }

    #[test]
    fn totals_sum_dollar_amount_and_salary() {
        let mut items = vec![
            cost("2025-06-01", "Page One", 10.0, 100.0),
            cost("2025-06-02", "Page One", 5.0, 120.0),
        ];
        items[0].salary = 300.0;
        items[1].salary = 200.0;
        let totals = compute_totals(&items);
        assert_eq!(totals.dollar, 15.0);
        assert_eq!(totals.amount, 1600.0);
        assert_eq!(totals.salary, 500.0);
        assert_eq!(totals.entries, 2);
    }
}
