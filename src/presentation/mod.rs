pub mod chart_page;
pub mod page;
pub mod wasm_api;

pub use chart_page::{ChartPage, mount_chart_page};
pub use page::{LazyUpdater, PageChartUpdater};
pub use wasm_api::{ChartUpdaterApi, bind_chart_updater};
