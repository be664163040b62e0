#![allow(dead_code)]

use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use serde_json::json;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use symbol_chart_wasm::application::{ChartDataSource, ChartRenderer};
use symbol_chart_wasm::domain::chart::ChartPayload;
use symbol_chart_wasm::domain::errors::{ChartUpdateError, NetworkError};

pub type FetchResult = Result<ChartPayload, ChartUpdateError>;

fn not_found() -> ChartUpdateError {
    NetworkError::HttpStatus { status: 404, status_text: "Not Found".to_string() }.into()
}

/// Answers immediately from a fixed table and records every URL
#[derive(Clone, Default)]
pub struct StaticSource {
    responses: Rc<RefCell<HashMap<String, FetchResult>>>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl StaticSource {
    pub fn respond(self, url: &str, result: FetchResult) -> Self {
        self.responses.borrow_mut().insert(url.to_string(), result);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl ChartDataSource for StaticSource {
    fn fetch_chart<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, FetchResult> {
        self.requests.borrow_mut().push(url.to_string());
        let result = self.responses.borrow().get(url).cloned().unwrap_or_else(|| Err(not_found()));
        futures::future::ready(result).boxed_local()
    }
}

/// Answers when the test says so, to control resolve order
#[derive(Clone, Default)]
pub struct ScriptedSource {
    pending: Rc<RefCell<HashMap<String, oneshot::Receiver<FetchResult>>>>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl ScriptedSource {
    pub fn expect(&self, url: &str) -> oneshot::Sender<FetchResult> {
        let (sender, receiver) = oneshot::channel();
        self.pending.borrow_mut().insert(url.to_string(), receiver);
        sender
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl ChartDataSource for ScriptedSource {
    fn fetch_chart<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, FetchResult> {
        self.requests.borrow_mut().push(url.to_string());
        let receiver = self.pending.borrow_mut().remove(url);
        async move {
            match receiver {
                Some(receiver) => receiver.await.unwrap_or_else(|_| {
                    Err(NetworkError::RequestFailed("response dropped".to_string()).into())
                }),
                None => Err(not_found()),
            }
        }
        .boxed_local()
    }
}

#[derive(Clone, Default)]
pub struct RecordingRenderer {
    rendered: Rc<RefCell<Vec<ChartPayload>>>,
    failure: Option<String>,
}

impl RecordingRenderer {
    pub fn failing(message: &str) -> Self {
        Self { failure: Some(message.to_string()), ..Self::default() }
    }

    pub fn rendered(&self) -> Vec<ChartPayload> {
        self.rendered.borrow().clone()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn render(&self, payload: &ChartPayload) -> Result<(), ChartUpdateError> {
        if let Some(message) = &self.failure {
            return Err(ChartUpdateError::Render(message.clone()));
        }
        self.rendered.borrow_mut().push(payload.clone());
        Ok(())
    }
}

/// Collects what reaches the error sink
pub fn recording_sink() -> (Rc<RefCell<Vec<ChartUpdateError>>>, impl Fn(&ChartUpdateError) + 'static) {
    let errors = Rc::new(RefCell::new(Vec::new()));
    let recorded = Rc::clone(&errors);
    (errors, move |error: &ChartUpdateError| recorded.borrow_mut().push(error.clone()))
}

pub fn price_payload(title: &str) -> ChartPayload {
    ChartPayload::new(
        json!([{ "x": ["2021-01-04", "2021-01-05"], "y": [129.41, 131.01], "name": "Price", "type": "scatter" }]),
        json!({ "title": title, "grid": { "rows": 2, "columns": 1 } }),
    )
}
