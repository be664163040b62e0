use futures::FutureExt;
use futures::future::LocalBoxFuture;
use gloo::net::http::Request;
use std::collections::HashMap;

use crate::application::ports::ChartDataSource;
use crate::domain::{
    chart::ChartPayload,
    errors::{ChartUpdateError, NetworkError},
    logging::{LogComponent, get_logger},
};

/// Browser `fetch` backed data source, built on gloo
#[derive(Debug, Clone)]
pub struct GlooChartDataSource {
    default_headers: HashMap<String, String>,
}

impl Default for GlooChartDataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl GlooChartDataSource {
    pub fn new() -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        Self { default_headers }
    }

    async fn get_payload(&self, url: &str) -> Result<ChartPayload, ChartUpdateError> {
        let mut request = Request::get(url);
        for (key, value) in &self.default_headers {
            request = request.header(key, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| NetworkError::RequestFailed(e.to_string()))?;

        if !response.ok() {
            let error = NetworkError::HttpStatus {
                status: response.status(),
                status_text: response.status_text(),
            };
            get_logger().warn(LogComponent::Infrastructure("HTTP"), &error.to_string());
            return Err(error.into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| NetworkError::RequestFailed(format!("Failed to read response: {e}")))?;

        get_logger().debug(
            LogComponent::Infrastructure("HTTP"),
            &format!("GET {url} -> {} bytes", body.len()),
        );

        ChartPayload::from_json_str(&body)
    }
}

impl ChartDataSource for GlooChartDataSource {
    fn fetch_chart<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, Result<ChartPayload, ChartUpdateError>> {
        self.get_payload(url).boxed_local()
    }
}
