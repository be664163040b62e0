use serde::Serialize;
use serde_json::Value;

use crate::domain::errors::{ChartResult, ChartUpdateError};

/// Decoded `/data` response body.
///
/// Both fields are opaque to this crate and reach the plotting call
/// untouched. `None` means the key was absent from the body, which the
/// renderer forwards as `undefined`; an explicit `null` stays `Some(Null)`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Value>,
}

impl ChartPayload {
    pub fn new(data: Value, layout: Value) -> Self {
        Self { data: Some(data), layout: Some(layout) }
    }

    /// Splits a decoded body into its plot fields.
    ///
    /// Any JSON value is accepted. Non-objects and missing keys simply
    /// leave the corresponding field empty; other keys are ignored.
    pub fn from_value(body: Value) -> Self {
        match body {
            Value::Object(mut map) => Self { data: map.remove("data"), layout: map.remove("layout") },
            _ => Self::default(),
        }
    }

    pub fn from_json_str(body: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(body).map_err(ChartUpdateError::from)?;
        Ok(Self::from_value(value))
    }

    /// Number of traces when `data` is an array
    pub fn trace_count(&self) -> Option<usize> {
        self.data.as_ref().and_then(Value::as_array).map(Vec::len)
    }
}
