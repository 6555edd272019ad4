//! Shared pieces of the demo binaries.

use std::fmt;

use covenant::{Valid, invariant_check, post_condition, pre_condition};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Square root that refuses negative input and checks its own result.
pub fn checked_sqrt(x: f32) -> f32 {
    pre_condition!(x >= 0.0);

    let root = post_condition!(x.sqrt() => |root| within_tolerance(root * root, x));
    debug!(x, root = *root, "computed square root");
    *root
}

/// Whether `actual` and `expected` differ by at most 0.1% of the larger
/// magnitude.
pub fn within_tolerance(actual: f32, expected: f32) -> bool {
    (actual - expected).abs() <= actual.abs().max(expected.abs()) * 0.001
}

/// A stack that is valid while it holds at most `capacity` items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedStack {
    items: Vec<i64>,
    capacity: usize,
}

impl Valid for BoundedStack {
    fn is_valid(&self) -> bool {
        self.items.len() <= self.capacity
    }
}

impl BoundedStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn items(&self) -> &[i64] {
        &self.items
    }

    /// Pushes under an invariant check; overflowing the capacity aborts
    /// once the push returns.
    pub fn push(&mut self, value: i64) {
        let stack = self;
        invariant_check!(stack);
        debug!(value, len = stack.items.len(), "push");
        stack.items.push(value);
    }

    /// Pushes without any check.
    pub fn push_unchecked(&mut self, value: i64) {
        debug!(value, len = self.items.len(), "push (unchecked)");
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<i64> {
        #[cfg_attr(not(feature = "checks"), allow(unused_variables))]
        let top = self.items.last().copied();

        let stack = self;
        invariant_check!(stack);
        let popped = post_condition!(stack.items.pop() => |popped| *popped == top);
        debug!(popped = ?*popped, len = stack.items.len(), "pop");
        *popped
    }

    /// Overfills the stack past its capacity.
    pub fn corrupt(&mut self) {
        self.items.resize(self.capacity + 1, 0);
    }
}

impl fmt::Display for BoundedStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} (capacity {})", self.items, self.capacity)
    }
}

/// Installs a stderr subscriber. `RUST_LOG` applies unless `verbose` is set.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
