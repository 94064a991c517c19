//! Cross-view "data changed" notification.
//!
//! Saving an expense from one modal means the graph and the activity list
//! need to reload. Rather than an ambient global flag, the views that care
//! share a `RefreshSignal` handle injected from their common parent: writers
//! call `mark_stale`, readers either subscribe or poll `is_stale` and
//! `acknowledge` once they have reloaded.
//!
//! Single-threaded by design (`Rc`/`RefCell`); everything runs on the UI
//! thread.

use std::cell::RefCell;
use std::rc::Rc;

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct RefreshInner {
    stale: bool,
    listeners: Vec<Listener>,
}

/// Clonable handle to one shared refresh flag.
#[derive(Clone, Default)]
pub struct RefreshSignal {
    inner: Rc<RefCell<RefreshInner>>,
}

impl RefreshSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch the stale flag and notify every subscriber.
    pub fn mark_stale(&self) {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            inner.stale = true;
            inner.listeners.clone()
        };
        // Borrow released before callbacks run, so a listener may call back
        // into the signal (acknowledge, subscribe) without tripping RefCell.
        for listener in &listeners {
            listener();
        }
    }

    pub fn is_stale(&self) -> bool {
        self.inner.borrow().stale
    }

    /// Clear the latch after reloading.
    pub fn acknowledge(&self) {
        self.inner.borrow_mut().stale = false;
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        self.inner.borrow_mut().listeners.push(Rc::new(listener));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_mark_stale_latches() {
        let signal = RefreshSignal::new();
        assert!(!signal.is_stale());

        signal.mark_stale();
        assert!(signal.is_stale());

        signal.acknowledge();
        assert!(!signal.is_stale());
    }

    #[test]
    fn test_clones_share_state() {
        let signal = RefreshSignal::new();
        let other = signal.clone();

        signal.mark_stale();

        assert!(other.is_stale());
    }

    #[test]
    fn test_subscribers_fire_once_per_mark() {
        let signal = RefreshSignal::new();
        let count = Rc::new(Cell::new(0u32));

        let seen = count.clone();
        signal.subscribe(move || seen.set(seen.get() + 1));

        signal.mark_stale();
        signal.mark_stale();

        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_listener_may_acknowledge_inside_callback() {
        let signal = RefreshSignal::new();
        let inner = signal.clone();
        signal.subscribe(move || inner.acknowledge());

        signal.mark_stale();

        assert!(!signal.is_stale());
    }
}
