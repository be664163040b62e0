pub mod dom;
pub mod http;
pub mod rendering;
pub mod services;

pub use dom::{TriggerBinding, UiErrorSink};
pub use http::GlooChartDataSource;
pub use rendering::{PlotTarget, PlotlyRenderer};
