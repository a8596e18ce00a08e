// src/core.rs
pub mod breakdown;
pub mod dataset;
pub mod ratio;
