use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Generation counter shared by every run of a pipeline. Starting a run
/// supersedes all runs started before it.
#[derive(Debug, Clone, Default)]
pub struct Epoch {
    current: Arc<AtomicU64>,
}

/// Proof of which generation a run belongs to.
#[derive(Debug, Clone)]
pub struct Ticket {
    current: Arc<AtomicU64>,
    generation: u64,
}

impl Epoch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Ticket {
        let generation = self.current.fetch_add(1, Ordering::AcqRel) + 1;
        Ticket { current: self.current.clone(), generation }
    }

    /// Supersede every outstanding ticket without starting a new run.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::AcqRel);
    }

    pub fn generation(&self) -> u64 {
        self.current.load(Ordering::Acquire)
    }
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::Acquire) == self.generation
    }
}
