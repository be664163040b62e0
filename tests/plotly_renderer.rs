#![cfg(target_arch = "wasm32")]

use serde_json::json;
use symbol_chart_wasm::application::ChartRenderer;
use symbol_chart_wasm::domain::chart::ChartPayload;
use symbol_chart_wasm::domain::errors::ChartUpdateError;
use symbol_chart_wasm::infrastructure::{PlotTarget, PlotlyRenderer};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Replace Plotly with a stub that remembers its last call
fn stub_plotly() {
    js_sys::eval(
        "window.Plotly = { newPlot: function (target, data, layout) { \
            window.__lastPlot = { target: target, data: data, layout: layout, hasData: data !== undefined }; \
        } };",
    )
    .unwrap();
}

fn last_plot(field: &str) -> JsValue {
    js_sys::eval(&format!("window.__lastPlot.{field}")).unwrap()
}

fn last_plot_json(field: &str) -> serde_json::Value {
    let text = js_sys::JSON::stringify(&last_plot(field)).unwrap().as_string().unwrap();
    serde_json::from_str(&text).unwrap()
}

#[wasm_bindgen_test]
fn passes_data_and_layout_through() {
    stub_plotly();
    let renderer = PlotlyRenderer::new(PlotTarget::ElementId("chart".to_string()));
    let payload = ChartPayload::new(json!([{ "x": [1, 2], "y": [3, 4] }]), json!({ "title": "t" }));

    renderer.render(&payload).unwrap();

    assert_eq!(last_plot("target").as_string().as_deref(), Some("chart"));
    assert_eq!(last_plot_json("data"), json!([{ "x": [1, 2], "y": [3, 4] }]));
    assert_eq!(last_plot_json("layout"), json!({ "title": "t" }));
}

#[wasm_bindgen_test]
fn absent_data_is_undefined() {
    stub_plotly();
    let renderer = PlotlyRenderer::new(PlotTarget::ElementId("chart".to_string()));
    let payload = ChartPayload { data: None, layout: Some(json!({ "title": "t" })) };

    renderer.render(&payload).unwrap();

    assert_eq!(last_plot("hasData").as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn throwing_plot_call_is_a_render_error() {
    js_sys::eval("window.Plotly = { newPlot: function () { throw 'no layout engine'; } };").unwrap();
    let renderer = PlotlyRenderer::new(PlotTarget::ElementId("chart".to_string()));

    let error = renderer.render(&ChartPayload::default()).unwrap_err();

    assert_eq!(error, ChartUpdateError::Render("no layout engine".to_string()));
}
