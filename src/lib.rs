//! Browser chart client: reads a symbol, fetches `/data?symbol=...` and
//! hands the returned `data`/`layout` to Plotly.

use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger, init_logger, init_time_provider};
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::{ChartUpdater, ChartUpdaterConfig, ResponseOrdering, TargetMode, UpdateOutcome};
pub use domain::chart::{ChartPayload, QueryEncoding, RequestToken, Symbol, build_chart_url};
pub use domain::errors::ChartUpdateError;

/// Install the panic hook, console logger and browser clock, then bind the
/// default `generate` control once the page has loaded
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    init_logger(Box::new(ConsoleLogger::new()));
    init_time_provider(Box::new(BrowserTimeProvider::new()));

    get_logger().info(LogComponent::Presentation("Initialize"), "chart updater module loaded");
    presentation::page::bind_page_defaults();
}

/// Mount the bundled chart page, for hosts that ship no markup of their own
#[wasm_bindgen(js_name = mountChartPage)]
pub fn mount_chart_page(config: JsValue) -> Result<(), JsValue> {
    let config = presentation::wasm_api::parse_config(&config)?;
    presentation::mount_chart_page(config);
    Ok(())
}
