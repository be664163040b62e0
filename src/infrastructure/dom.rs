use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::application::ports::ErrorSink;
use crate::domain::{
    chart::Symbol,
    errors::{ChartUpdateError, UiError},
    logging::{LogComponent, get_logger},
};

pub fn document() -> Result<Document, UiError> {
    web_sys::window().and_then(|window| window.document()).ok_or(UiError::WindowUnavailable)
}

pub fn element_by_id(id: &str) -> Result<Element, UiError> {
    document()?.get_element_by_id(id).ok_or_else(|| UiError::ElementNotFound(id.to_string()))
}

/// Current value of the text input `id`, untouched
pub fn read_symbol(id: &str) -> Result<Symbol, UiError> {
    let input = element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| UiError::WrongElementType(id.to_string()))?;
    Ok(Symbol::new(input.value()))
}

/// Run `callback` once the initial document has been parsed.
///
/// Runs immediately when `DOMContentLoaded` has already fired.
pub fn on_dom_ready(callback: impl FnOnce() + 'static) -> Result<(), UiError> {
    let document = document()?;
    if document.ready_state() != "loading" {
        callback();
        return Ok(());
    }
    EventListener::once(&document, "DOMContentLoaded", move |_| callback()).forget();
    Ok(())
}

/// Click listener on the trigger element; removed when dropped
pub struct TriggerBinding {
    trigger_id: String,
    _listener: EventListener,
}

impl TriggerBinding {
    pub fn trigger_id(&self) -> &str {
        &self.trigger_id
    }
}

impl std::fmt::Debug for TriggerBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggerBinding").field("trigger_id", &self.trigger_id).finish()
    }
}

pub fn bind_click(trigger_id: &str, mut on_click: impl FnMut() + 'static) -> Result<TriggerBinding, UiError> {
    let trigger = element_by_id(trigger_id)?;
    let listener = EventListener::new(&trigger, "click", move |_| on_click());
    get_logger().debug(
        LogComponent::Infrastructure("DOM"),
        &format!("click handler bound to #{trigger_id}"),
    );
    Ok(TriggerBinding { trigger_id: trigger_id.to_string(), _listener: listener })
}

/// Writes failures into an optional status element, next to the chart
#[derive(Debug, Clone)]
pub struct UiErrorSink {
    status_id: String,
}

impl UiErrorSink {
    pub const DEFAULT_STATUS_ID: &'static str = "chart-status";

    pub fn new(status_id: impl Into<String>) -> Self {
        Self { status_id: status_id.into() }
    }

    pub fn status_id(&self) -> &str {
        &self.status_id
    }
}

impl Default for UiErrorSink {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STATUS_ID)
    }
}

impl ErrorSink for UiErrorSink {
    fn report(&self, error: &ChartUpdateError) {
        match element_by_id(&self.status_id) {
            Ok(element) => element.set_text_content(Some(&error.to_string())),
            Err(_) => get_logger().debug(
                LogComponent::Infrastructure("UI"),
                &format!("status element '{}' not found (optional)", self.status_id),
            ),
        }
    }

    fn clear(&self) {
        if let Ok(element) = element_by_id(&self.status_id) {
            element.set_text_content(None);
        }
    }
}
