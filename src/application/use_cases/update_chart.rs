use futures::future::{AbortHandle, Abortable};
use std::rc::Rc;

use crate::application::{
    config::{ChartUpdaterConfig, ResponseOrdering},
    ports::{ChartDataSource, ChartRenderer, ErrorSink},
    sequencer::RequestSequencer,
};
use crate::domain::{
    chart::{ChartPayload, QueryEncoding, RequestToken, Symbol, build_chart_url},
    errors::ChartUpdateError,
    logging::{LogComponent, LogLevel, get_logger},
};
use crate::{log_debug, log_error, log_info};

const COMPONENT: LogComponent = LogComponent::Application("ChartUpdater");

/// What happened to one update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Rendered { token: RequestToken, symbol: Symbol },
    /// A newer update was started before this one could draw
    Superseded { token: RequestToken, latest: RequestToken },
}

impl UpdateOutcome {
    pub fn token(&self) -> RequestToken {
        match self {
            UpdateOutcome::Rendered { token, .. } | UpdateOutcome::Superseded { token, .. } => *token,
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, UpdateOutcome::Rendered { .. })
    }
}

/// Fetches the chart for a symbol and draws it.
///
/// Shared behind an `Rc` by every click handler on the page; all state is
/// interior and single-threaded.
pub struct ChartUpdater<S, R> {
    source: S,
    renderer: R,
    sink: Option<Rc<dyn ErrorSink>>,
    sequencer: RequestSequencer,
    endpoint: String,
    encoding: QueryEncoding,
    ordering: ResponseOrdering,
}

impl<S, R> ChartUpdater<S, R>
where
    S: ChartDataSource,
    R: ChartRenderer,
{
    pub fn new(source: S, renderer: R) -> Self {
        let defaults = ChartUpdaterConfig::default();
        Self {
            source,
            renderer,
            sink: None,
            sequencer: RequestSequencer::new(),
            endpoint: defaults.endpoint,
            encoding: defaults.query_encoding,
            ordering: defaults.ordering,
        }
    }

    pub fn from_config(source: S, renderer: R, config: &ChartUpdaterConfig) -> Self {
        Self::new(source, renderer)
            .with_endpoint(config.endpoint.clone())
            .with_query_encoding(config.query_encoding)
            .with_ordering(config.ordering)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_query_encoding(mut self, encoding: QueryEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_error_sink(self, sink: impl ErrorSink + 'static) -> Self {
        self.with_shared_error_sink(Rc::new(sink))
    }

    pub fn with_shared_error_sink(mut self, sink: Rc<dyn ErrorSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn sequencer(&self) -> &RequestSequencer {
        &self.sequencer
    }

    pub fn request_url(&self, symbol: &Symbol) -> String {
        build_chart_url(&self.endpoint, symbol, self.encoding)
    }

    /// Fetch, decode and draw the chart for `symbol`.
    ///
    /// Failures are logged, handed to the error sink and returned. A drawn
    /// chart clears whatever the sink is still showing.
    pub async fn update_chart(&self, symbol: Symbol) -> Result<UpdateOutcome, ChartUpdateError> {
        let token = self.sequencer.issue();
        let url = self.request_url(&symbol);
        get_logger().log_with_metadata(
            LogLevel::Debug,
            COMPONENT,
            &format!("GET {url}"),
            &format!("token={token} symbol={symbol:?}"),
        );

        let result = self.fetch_and_render(token, &symbol, &url).await;
        match &result {
            Ok(UpdateOutcome::Rendered { .. }) => {
                log_info!(COMPONENT, "{token} rendered chart for {symbol:?}");
                if let Some(sink) = &self.sink {
                    sink.clear();
                }
            }
            Ok(UpdateOutcome::Superseded { latest, .. }) => {
                log_debug!(COMPONENT, "{token} for {symbol:?} superseded by {latest}");
            }
            Err(error) => {
                log_error!(COMPONENT, "{token} for {symbol:?} failed: {error}");
                self.report(error);
            }
        }
        result
    }

    /// Hands `error` to the configured sink, if any
    pub fn report(&self, error: &ChartUpdateError) {
        if let Some(sink) = &self.sink {
            sink.report(error);
        }
    }

    async fn fetch_and_render(
        &self,
        token: RequestToken,
        symbol: &Symbol,
        url: &str,
    ) -> Result<UpdateOutcome, ChartUpdateError> {
        let payload = match self.ordering {
            ResponseOrdering::LatestRequest => match self.fetch_abortable(token, url).await {
                Some(payload) => payload?,
                None => return Ok(self.superseded(token)),
            },
            ResponseOrdering::LatestResponse => self.source.fetch_chart(url).await?,
        };

        if self.ordering == ResponseOrdering::LatestRequest && !self.sequencer.is_latest(token) {
            return Ok(self.superseded(token));
        }

        log_debug!(
            COMPONENT,
            "{token} drawing {} trace(s)",
            payload.trace_count().map_or_else(|| "no".to_string(), |n| n.to_string())
        );
        self.renderer.render(&payload)?;
        Ok(UpdateOutcome::Rendered { token, symbol: symbol.clone() })
    }

    /// `None` when a newer update aborted this fetch
    async fn fetch_abortable(
        &self,
        token: RequestToken,
        url: &str,
    ) -> Option<Result<ChartPayload, ChartUpdateError>> {
        let (handle, registration) = AbortHandle::new_pair();
        self.sequencer.replace_in_flight(token, handle);
        let fetched = Abortable::new(self.source.fetch_chart(url), registration).await.ok();
        self.sequencer.finish_in_flight(token);
        fetched
    }

    fn superseded(&self, token: RequestToken) -> UpdateOutcome {
        UpdateOutcome::Superseded { token, latest: self.sequencer.latest() }
    }
}
