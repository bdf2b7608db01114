//! Decision sinks: where engines publish their current best answer.
//!
//! Engines are anytime algorithms. They may push several improving answers
//! during one decision (one per completed deepening depth) and the driver
//! only ever acts on the most recent one.

/// Output channel for an engine's decisions.
pub trait DecisionSink<A> {
    /// Publish a new best action, superseding any earlier one.
    fn put(&mut self, action: A);
}

/// Single-slot sink that keeps only the latest pushed action.
#[derive(Clone, Debug)]
pub struct LatestDecision<A> {
    slot: Option<A>,
    pushes: u32,
}

impl<A> LatestDecision<A> {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: None,
            pushes: 0,
        }
    }

    /// The most recently pushed action, if any.
    #[must_use]
    pub fn get(&self) -> Option<&A> {
        self.slot.as_ref()
    }

    /// Take the most recent action, leaving the sink empty.
    pub fn take(&mut self) -> Option<A> {
        self.slot.take()
    }

    /// Number of pushes received since creation.
    #[must_use]
    pub fn pushes(&self) -> u32 {
        self.pushes
    }
}

impl<A> Default for LatestDecision<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> DecisionSink<A> for LatestDecision<A> {
    fn put(&mut self, action: A) {
        self.slot = Some(action);
        self.pushes += 1;
    }
}

/// Recording sink: keeps every push in order.
impl<A> DecisionSink<A> for Vec<A> {
    fn put(&mut self, action: A) {
        self.push(action);
    }
}
