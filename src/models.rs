// src/models.rs
pub mod breakdown;
pub mod category_record;
pub mod ratio;

pub use breakdown::Breakdown;
pub use category_record::CategoryRecord;
pub use ratio::{RatioCell, RatioRow, RatioTable};
