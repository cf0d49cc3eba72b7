pub mod p900_cost_sheet;
