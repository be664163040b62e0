use futures::future::LocalBoxFuture;

use crate::domain::{chart::ChartPayload, errors::ChartUpdateError};

/// Where chart payloads come from.
///
/// Futures are `!Send`: the browser fetch lives on the single JS thread.
pub trait ChartDataSource {
    fn fetch_chart<'a>(&'a self, url: &'a str) -> LocalBoxFuture<'a, Result<ChartPayload, ChartUpdateError>>;
}

/// Draws a payload into the display region, replacing what was there
pub trait ChartRenderer {
    fn render(&self, payload: &ChartPayload) -> Result<(), ChartUpdateError>;
}

/// Receives failures that would otherwise go unobserved
pub trait ErrorSink {
    fn report(&self, error: &ChartUpdateError);

    /// Called after a successful draw; sinks that display errors drop them here
    fn clear(&self) {}
}

impl<F> ErrorSink for F
where
    F: Fn(&ChartUpdateError),
{
    fn report(&self, error: &ChartUpdateError) {
        self(error)
    }
}
