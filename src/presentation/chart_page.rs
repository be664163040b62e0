use leptos::*;

use super::page::LazyUpdater;
use crate::application::ChartUpdaterConfig;
use crate::domain::logging::{self, LogComponent, get_logger};
use crate::infrastructure::UiErrorSink;
use std::rc::Rc;

/// Input, trigger, display region and status line, for hosts without their own markup.
///
/// The button carries no handler of its own: clicks go through the page
/// binding, so the trigger never fires two updates.
#[component]
pub fn ChartPage(#[prop(optional)] config: ChartUpdaterConfig) -> impl IntoView {
    let ChartUpdaterConfig { symbol_input_id, trigger_id, chart_id, .. } = config;
    let status_id = UiErrorSink::DEFAULT_STATUS_ID;

    view! {
        <div class="chart-page">
            <input type="text" id=symbol_input_id placeholder="Symbol"/>
            <button id=trigger_id>"Generate"</button>
            <div id=chart_id class="chart"></div>
            <p id=status_id class="chart-status"></p>
        </div>
    }
}

/// Mount [`ChartPage`] into `<body>` and bind its trigger, replacing any earlier binding
pub fn mount_chart_page(config: ChartUpdaterConfig) {
    logging::set_min_level(config.log_level);
    let markup = config.clone();
    mount_to_body(move || view! { <ChartPage config=markup.clone()/> });

    let updater = LazyUpdater::new(config, Rc::new(UiErrorSink::default()));
    if let Err(error) = updater.bind_when_ready() {
        get_logger().error(LogComponent::Presentation("ChartPage"), &error.to_string());
    }
}
