pub mod income_table;

pub use income_table::*;
