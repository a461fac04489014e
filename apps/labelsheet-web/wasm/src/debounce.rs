//! Trailing-edge debounce over the browser's timer.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Coalesces a burst of triggers into a single callback.
///
/// Every `poke` restarts the quiet window; the callback of the last poke
/// runs once the window elapses with no further pokes. At most one
/// callback is ever pending.
#[derive(Debug)]
pub struct Debounce {
    delay_ms: u32,
    pending: Option<Timeout>,
    armed: Rc<Cell<bool>>,
}

impl Debounce {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
            armed: Rc::new(Cell::new(false)),
        }
    }

    /// Restart the quiet window. `callback` runs only if no further poke
    /// arrives within it.
    pub fn poke(&mut self, callback: impl FnOnce() + 'static) {
        self.cancel();
        self.armed.set(true);
        let armed = Rc::clone(&self.armed);
        self.pending = Some(Timeout::new(self.delay_ms, move || {
            armed.set(false);
            callback();
        }));
    }

    /// Drop the pending callback, if any.
    pub fn cancel(&mut self) {
        self.armed.set(false);
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }

    /// Whether a callback is scheduled and has not yet run.
    pub fn is_pending(&self) -> bool {
        self.armed.get()
    }
}

impl Drop for Debounce {
    fn drop(&mut self) {
        self.cancel();
    }
}
