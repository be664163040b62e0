use derive_more::Display;

/// Every way a single chart update can fail
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ChartUpdateError {
    #[display(fmt = "Network Error: {}", _0)]
    Network(NetworkError),
    #[display(fmt = "Decode Error: {}", _0)]
    Decode(String),
    #[display(fmt = "Rendering Error: {}", _0)]
    Render(String),
    #[display(fmt = "UI Error: {}", _0)]
    Ui(UiError),
    #[display(fmt = "Configuration Error: {}", _0)]
    Configuration(String),
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum NetworkError {
    #[display(fmt = "request failed: {}", _0)]
    RequestFailed(String),
    #[display(fmt = "HTTP error: {} - {}", status, status_text)]
    HttpStatus { status: u16, status_text: String },
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum UiError {
    #[display(fmt = "element '{}' not found", _0)]
    ElementNotFound(String),
    #[display(fmt = "element '{}' has an unexpected type", _0)]
    WrongElementType(String),
    #[display(fmt = "window or document not available")]
    WindowUnavailable,
}

impl std::error::Error for ChartUpdateError {}

impl From<NetworkError> for ChartUpdateError {
    fn from(error: NetworkError) -> Self {
        ChartUpdateError::Network(error)
    }
}

impl From<UiError> for ChartUpdateError {
    fn from(error: UiError) -> Self {
        ChartUpdateError::Ui(error)
    }
}

impl From<serde_json::Error> for ChartUpdateError {
    fn from(error: serde_json::Error) -> Self {
        ChartUpdateError::Decode(error.to_string())
    }
}

impl From<ChartUpdateError> for wasm_bindgen::JsValue {
    fn from(error: ChartUpdateError) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}

pub type ChartResult<T> = Result<T, ChartUpdateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reads_like_http() {
        let error: ChartUpdateError = NetworkError::HttpStatus {
            status: 502,
            status_text: "Bad Gateway".to_string(),
        }
        .into();
        assert_eq!(error.to_string(), "Network Error: HTTP error: 502 - Bad Gateway");
    }

    #[test]
    fn json_errors_become_decode_errors() {
        let error: ChartUpdateError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(error, ChartUpdateError::Decode(_)));
    }
}
