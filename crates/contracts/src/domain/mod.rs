pub mod common;

pub mod a001_order_batch;
pub mod a002_daily_cost;
pub mod a003_sales_page;
pub mod a004_product;
pub mod a005_moderator;
