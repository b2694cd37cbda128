pub mod clean;
pub mod extract;
pub mod money;
pub mod raw_table;
