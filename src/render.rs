// src/render.rs
pub mod heatmap;
pub mod palette;
pub mod stacked;
