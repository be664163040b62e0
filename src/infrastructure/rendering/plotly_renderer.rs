use gloo::utils::format::JsValueSerdeExt;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::application::{config::TargetMode, ports::ChartRenderer};
use crate::domain::{
    chart::ChartPayload,
    errors::{ChartUpdateError, UiError},
    logging::{LogComponent, get_logger},
};
use crate::infrastructure::dom;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(target: &JsValue, data: &JsValue, layout: &JsValue) -> Result<JsValue, JsValue>;
}

/// The display region as the plotting call receives it
#[derive(Debug, Clone)]
pub enum PlotTarget {
    ElementId(String),
    Element(HtmlElement),
}

impl PlotTarget {
    /// Resolve the chart region according to `mode`. `Id` never touches the DOM.
    pub fn resolve(mode: TargetMode, chart_id: &str) -> Result<Self, ChartUpdateError> {
        match mode {
            TargetMode::Id => Ok(PlotTarget::ElementId(chart_id.to_string())),
            TargetMode::Element => dom::element_by_id(chart_id)?
                .dyn_into::<HtmlElement>()
                .map(PlotTarget::Element)
                .map_err(|_| UiError::WrongElementType(chart_id.to_string()).into()),
        }
    }

    fn to_js(&self) -> JsValue {
        match self {
            PlotTarget::ElementId(id) => JsValue::from_str(id),
            PlotTarget::Element(element) => JsValue::from(element.clone()),
        }
    }
}

/// Hands payloads to `Plotly.newPlot` unchanged
#[derive(Debug, Clone)]
pub struct PlotlyRenderer {
    target: PlotTarget,
}

impl PlotlyRenderer {
    pub fn new(target: PlotTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &PlotTarget {
        &self.target
    }
}

/// Absent fields become `undefined`, as a plain property read would give
fn field_to_js(field: Option<&Value>) -> Result<JsValue, ChartUpdateError> {
    match field {
        Some(value) => JsValue::from_serde(value).map_err(ChartUpdateError::from),
        None => Ok(JsValue::UNDEFINED),
    }
}

impl ChartRenderer for PlotlyRenderer {
    fn render(&self, payload: &ChartPayload) -> Result<(), ChartUpdateError> {
        let data = field_to_js(payload.data.as_ref())?;
        let layout = field_to_js(payload.layout.as_ref())?;

        new_plot(&self.target.to_js(), &data, &layout).map_err(|e| {
            let message = e.as_string().unwrap_or_else(|| format!("{e:?}"));
            get_logger().error(LogComponent::Infrastructure("Plotly"), &message);
            ChartUpdateError::Render(message)
        })?;
        Ok(())
    }
}
