use gloo::utils::format::JsValueSerdeExt;
use js_sys::Promise;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use super::page::{self, LazyUpdater};
use crate::application::{ChartUpdaterConfig, ErrorSink};
use crate::domain::{
    chart::{Symbol, build_chart_url},
    errors::ChartUpdateError,
    logging::{self, LogComponent, get_logger},
};
use crate::infrastructure::UiErrorSink;

/// JavaScript entry point: owns the page wiring for one chart
#[wasm_bindgen]
pub struct ChartUpdaterApi {
    updater: LazyUpdater,
    last_error: Rc<RefCell<Option<String>>>,
}

/// Status line plus the text returned by `lastError()`
struct ApiErrorSink {
    ui: UiErrorSink,
    last_error: Rc<RefCell<Option<String>>>,
}

impl ErrorSink for ApiErrorSink {
    fn report(&self, error: &ChartUpdateError) {
        self.ui.report(error);
        *self.last_error.borrow_mut() = Some(error.to_string());
    }

    fn clear(&self) {
        self.ui.clear();
        self.last_error.borrow_mut().take();
    }
}

/// `undefined`/`null` select the defaults; anything else must match the config shape
pub fn parse_config(config: &JsValue) -> Result<ChartUpdaterConfig, ChartUpdateError> {
    if config.is_undefined() || config.is_null() {
        return Ok(ChartUpdaterConfig::default());
    }
    config
        .into_serde::<ChartUpdaterConfig>()
        .map_err(|e| ChartUpdateError::Configuration(e.to_string()))
}

#[wasm_bindgen]
impl ChartUpdaterApi {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ChartUpdaterApi, JsValue> {
        let config = parse_config(&config)?;
        logging::set_min_level(config.log_level);

        let last_error = Rc::new(RefCell::new(None));
        let sink: Rc<dyn ErrorSink> = Rc::new(ApiErrorSink {
            ui: UiErrorSink::default(),
            last_error: Rc::clone(&last_error),
        });

        get_logger().debug(
            LogComponent::Presentation("ChartUpdaterApi"),
            &format!("created with {config:?}"),
        );
        Ok(Self { updater: LazyUpdater::new(config, sink), last_error })
    }

    /// Attach to the trigger element once the document is loaded
    pub fn bind(&self) -> Result<(), JsValue> {
        self.updater.bind_when_ready().map_err(JsValue::from)
    }

    pub fn unbind(&self) {
        page::unbind_page();
    }

    #[wasm_bindgen(js_name = isBound)]
    pub fn is_bound(&self) -> bool {
        page::is_page_bound()
    }

    /// Resolves to `true` when drawn, `false` when superseded; rejects with the error text
    #[wasm_bindgen(js_name = updateChart)]
    pub fn update_chart(&self, symbol: String) -> Promise {
        let lazy = self.updater.clone();
        future_to_promise(async move {
            let updater = lazy.get()?;
            let outcome = updater.update_chart(Symbol::new(symbol)).await?;
            Ok(JsValue::from_bool(outcome.is_rendered()))
        })
    }

    #[wasm_bindgen(js_name = requestUrl)]
    pub fn request_url(&self, symbol: String) -> String {
        let config = self.updater.config();
        build_chart_url(&config.endpoint, &Symbol::new(symbol), config.query_encoding)
    }

    #[wasm_bindgen(js_name = lastError)]
    pub fn last_error(&self) -> Option<String> {
        self.last_error.borrow().clone()
    }
}

/// One-call page setup: build the API and bind it to the trigger
#[wasm_bindgen(js_name = bindChartUpdater)]
pub fn bind_chart_updater(config: JsValue) -> Result<ChartUpdaterApi, JsValue> {
    let api = ChartUpdaterApi::new(config)?;
    api.bind()?;
    Ok(api)
}
