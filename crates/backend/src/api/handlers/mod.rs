pub mod a001_order_batch;
pub mod a002_daily_cost;
pub mod a003_sales_page;
pub mod a004_product;
pub mod a005_moderator;
pub mod d400_summary_report;
pub mod d401_executive;
pub mod d402_salary_sheet;
pub mod p900_cost_sheet;
