pub mod update_chart;

pub use update_chart::*;
