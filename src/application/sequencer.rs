use futures::future::AbortHandle;
use std::cell::{Cell, RefCell};

use crate::domain::chart::RequestToken;

/// Issues request tokens and remembers the abort handle of the newest fetch.
///
/// Starting a new fetch aborts the previous one, so only the most recent
/// invocation can reach the renderer.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: Cell<RequestToken>,
    in_flight: RefCell<Option<(RequestToken, AbortHandle)>>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestToken {
        let token = self.latest.get().next();
        self.latest.set(token);
        token
    }

    /// Newest token issued so far; the zero token before any issue
    pub fn latest(&self) -> RequestToken {
        self.latest.get()
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.latest.get() == token
    }

    /// Stores `handle` as the fetch of `token` and aborts the one it replaces
    pub fn replace_in_flight(&self, token: RequestToken, handle: AbortHandle) {
        if let Some((_, previous)) = self.in_flight.replace(Some((token, handle))) {
            previous.abort();
        }
    }

    /// Forgets the handle of `token` once its fetch has finished.
    ///
    /// A newer fetch's handle is left in place.
    pub fn finish_in_flight(&self, token: RequestToken) {
        let mut in_flight = self.in_flight.borrow_mut();
        if in_flight.as_ref().is_some_and(|(owner, _)| *owner == token) {
            *in_flight = None;
        }
    }

    pub fn has_in_flight(&self) -> bool {
        self.in_flight.borrow().is_some()
    }
}
