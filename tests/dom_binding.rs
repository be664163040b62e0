#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use symbol_chart_wasm::application::{ErrorSink, TargetMode};
use symbol_chart_wasm::domain::errors::{ChartUpdateError, UiError};
use symbol_chart_wasm::infrastructure::{PlotTarget, UiErrorSink, dom};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn append(tag: &str, id: &str) -> Element {
    let document = dom::document().unwrap();
    let element = document.create_element(tag).unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
fn reads_symbol_verbatim() {
    let input = append("input", "symbol-verbatim").dyn_into::<HtmlInputElement>().unwrap();
    input.set_value(" a&b ");

    assert_eq!(dom::read_symbol("symbol-verbatim").unwrap().value(), " a&b ");
}

#[wasm_bindgen_test]
fn missing_input_is_an_error() {
    assert_eq!(
        dom::read_symbol("no-such-input").unwrap_err(),
        UiError::ElementNotFound("no-such-input".to_string())
    );
}

#[wasm_bindgen_test]
fn non_input_element_is_rejected() {
    append("div", "symbol-div");
    assert_eq!(
        dom::read_symbol("symbol-div").unwrap_err(),
        UiError::WrongElementType("symbol-div".to_string())
    );
}

#[wasm_bindgen_test]
fn id_target_does_not_need_the_element() {
    let target = PlotTarget::resolve(TargetMode::Id, "chart-later").unwrap();
    assert!(matches!(target, PlotTarget::ElementId(id) if id == "chart-later"));
}

#[wasm_bindgen_test]
fn element_target_requires_the_region() {
    let error = PlotTarget::resolve(TargetMode::Element, "chart-missing").unwrap_err();
    assert_eq!(error, ChartUpdateError::Ui(UiError::ElementNotFound("chart-missing".to_string())));

    append("div", "chart-present");
    let target = PlotTarget::resolve(TargetMode::Element, "chart-present").unwrap();
    assert!(matches!(target, PlotTarget::Element(_)));
}

#[wasm_bindgen_test]
fn click_runs_handler_until_binding_is_dropped() {
    let button = append("button", "generate-click").dyn_into::<HtmlElement>().unwrap();
    let clicks = Rc::new(Cell::new(0));
    let counted = Rc::clone(&clicks);

    let binding = dom::bind_click("generate-click", move || counted.set(counted.get() + 1)).unwrap();
    button.click();
    button.click();
    assert_eq!(clicks.get(), 2);
    assert_eq!(binding.trigger_id(), "generate-click");

    drop(binding);
    button.click();
    assert_eq!(clicks.get(), 2);
}

#[wasm_bindgen_test]
fn dom_ready_callback_runs_after_load() {
    let ran = Rc::new(Cell::new(false));
    let flag = Rc::clone(&ran);
    dom::on_dom_ready(move || flag.set(true)).unwrap();
    assert!(ran.get());
}

#[wasm_bindgen_test]
fn ui_sink_writes_status_text() {
    let status = append("p", "status-sink");
    let sink = UiErrorSink::new("status-sink");

    sink.report(&ChartUpdateError::Decode("expected value".to_string()));
    assert_eq!(status.text_content().as_deref(), Some("Decode Error: expected value"));

    sink.clear();
    assert_eq!(status.text_content().as_deref(), Some(""));
}
