//! An incrementer is a value that supports two operations after it is
//! created:
//! - add 1 (increment)
//! - return the current value
//!
//! [make_incrementer] returns two closures, one for each of those operations.
//! Both closures share the same counter.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// A counter shared by all the clones of an incrementer.
///
/// The counter is only reachable through the incrementer: [Incrementer::new]
/// always allocates a fresh one, while [Clone] shares it.
#[derive(Debug, Clone, Default)]
pub struct Incrementer {
    n: Rc<Cell<i64>>,
}

impl Incrementer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc(&self) {
        self.n.set(self.n.get() + 1);
    }

    pub fn get(&self) -> i64 {
        self.n.get()
    }

    /// Turn the incrementer into its two operations.
    pub fn split(self) -> (impl Fn(), impl Fn() -> i64) {
        let reader = self.clone();
        let inc = move || self.inc();
        let get = move || reader.get();
        (inc, get)
    }
}

/// Returns the pair `(inc, get)`, closing over a counter initialized to 0.
///
/// The closures are not [Send]: the counter is meant to be used from a single
/// thread. See [make_shared_incrementer] otherwise.
pub fn make_incrementer() -> (impl Fn(), impl Fn() -> i64) {
    log::trace!("make_incrementer");
    Incrementer::new().split()
}

/// Same as [make_incrementer], but the counter is atomic and the closures can
/// be cloned and sent to other threads.
pub fn make_shared_incrementer() -> (
    impl Fn() + Send + Sync + Clone,
    impl Fn() -> i64 + Send + Sync + Clone,
) {
    log::trace!("make_shared_incrementer");
    let n = Arc::new(AtomicI64::new(0));
    let m = Arc::clone(&n);
    let inc = move || {
        n.fetch_add(1, Ordering::SeqCst);
    };
    let get = move || m.load(Ordering::SeqCst);
    (inc, get)
}
