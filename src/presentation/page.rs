use std::cell::RefCell;
use std::rc::Rc;

use crate::application::{ChartUpdater, ChartUpdaterConfig, ErrorSink, UpdateOutcome};
use crate::domain::{
    chart::Symbol,
    errors::ChartUpdateError,
    logging::{LogComponent, get_logger},
};
use crate::infrastructure::{
    GlooChartDataSource, PlotTarget, PlotlyRenderer, TriggerBinding, UiErrorSink, dom,
};

pub type PageChartUpdater = ChartUpdater<GlooChartDataSource, PlotlyRenderer>;

thread_local! {
    /// The page's single click binding; binding again replaces it
    static PAGE_BINDING: RefCell<Option<TriggerBinding>> = const { RefCell::new(None) };
}

pub fn build_page_updater(
    config: &ChartUpdaterConfig,
    sink: Rc<dyn ErrorSink>,
) -> Result<PageChartUpdater, ChartUpdateError> {
    let target = PlotTarget::resolve(config.target_mode, &config.chart_id)?;
    Ok(ChartUpdater::from_config(GlooChartDataSource::new(), PlotlyRenderer::new(target), config)
        .with_shared_error_sink(sink))
}

/// Builds the page updater on first use, once the chart region exists.
///
/// Clones share the same updater, so every handler draws through one
/// request sequencer.
#[derive(Clone)]
pub struct LazyUpdater {
    config: Rc<ChartUpdaterConfig>,
    sink: Rc<dyn ErrorSink>,
    slot: Rc<RefCell<Option<Rc<PageChartUpdater>>>>,
}

impl LazyUpdater {
    pub fn new(config: ChartUpdaterConfig, sink: Rc<dyn ErrorSink>) -> Self {
        Self { config: Rc::new(config), sink, slot: Rc::new(RefCell::new(None)) }
    }

    pub fn config(&self) -> &ChartUpdaterConfig {
        &self.config
    }

    pub fn get(&self) -> Result<Rc<PageChartUpdater>, ChartUpdateError> {
        if let Some(updater) = self.slot.borrow().as_ref() {
            return Ok(Rc::clone(updater));
        }
        let updater = build_page_updater(&self.config, Rc::clone(&self.sink))
            .map(Rc::new)
            .inspect_err(|error| self.report(error))?;
        *self.slot.borrow_mut() = Some(Rc::clone(&updater));
        Ok(updater)
    }

    /// Failures outside an update (missing elements, bad wiring)
    pub fn report(&self, error: &ChartUpdateError) {
        get_logger().error(LogComponent::Presentation("Page"), &error.to_string());
        self.sink.report(error);
    }

    /// Run one update on the JS event loop
    pub fn spawn_update(
        &self,
        symbol: Symbol,
        on_done: impl FnOnce(Result<UpdateOutcome, ChartUpdateError>) + 'static,
    ) {
        let lazy = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match lazy.get() {
                Ok(updater) => updater.update_chart(symbol).await,
                Err(error) => Err(error),
            };
            on_done(result);
        });
    }

    /// Click handler: the symbol is read at click time, then passed on explicitly
    pub fn handle_click(&self) {
        match dom::read_symbol(&self.config.symbol_input_id) {
            Ok(symbol) => self.spawn_update(symbol, |_| {}),
            Err(error) => self.report(&error.into()),
        }
    }

    /// Attach the click handler once the initial document is loaded
    pub fn bind_when_ready(&self) -> Result<(), ChartUpdateError> {
        let lazy = self.clone();
        dom::on_dom_ready(move || lazy.install_binding())?;
        Ok(())
    }

    /// Like [`Self::bind_when_ready`], but a page without the trigger is left alone
    pub fn bind_if_present(&self) -> Result<(), ChartUpdateError> {
        let lazy = self.clone();
        dom::on_dom_ready(move || {
            let trigger_id = &lazy.config.trigger_id;
            if dom::element_by_id(trigger_id).is_err() {
                get_logger().debug(
                    LogComponent::Presentation("Page"),
                    &format!("no #{trigger_id} on this page, click handler not bound"),
                );
                return;
            }
            lazy.install_binding();
        })?;
        Ok(())
    }

    fn install_binding(&self) {
        let handler = self.clone();
        match dom::bind_click(&self.config.trigger_id, move || handler.handle_click()) {
            Ok(binding) => PAGE_BINDING.with(|slot| *slot.borrow_mut() = Some(binding)),
            Err(error) => self.report(&error.into()),
        }
    }
}

/// Wiring done at module start: default ids, errors on the status line.
///
/// Skipped when the page has no trigger or something already bound it.
pub fn bind_page_defaults() {
    if is_page_bound() {
        return;
    }
    let lazy = LazyUpdater::new(ChartUpdaterConfig::default(), Rc::new(UiErrorSink::default()));
    if let Err(error) = lazy.bind_if_present() {
        get_logger().debug(LogComponent::Presentation("Page"), &format!("page not bound: {error}"));
    }
}

pub fn is_page_bound() -> bool {
    PAGE_BINDING.with(|slot| slot.borrow().is_some())
}

/// Remove the page's click handler, if any
pub fn unbind_page() {
    PAGE_BINDING.with(|slot| slot.borrow_mut().take());
}
