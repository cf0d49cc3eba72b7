pub mod d400_summary_report;
pub mod d401_executive;
pub mod d402_salary_sheet;
