pub const DEFAULT_ITERATION_BUDGET: u32 = 512;

/// Maximum escape-time iterations per pixel.
///
/// The budget can be changed at any time between steps, but never drops
/// below 1. Attempts to go lower are clamped silently rather than reported
/// as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationBudget(u32);

impl IterationBudget {
    #[must_use]
    pub fn new(max_iters: u32) -> Self {
        Self(max_iters.max(1))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    pub fn set(&mut self, max_iters: u32) {
        self.0 = max_iters.max(1);
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1).max(1);
    }
}

impl Default for IterationBudget {
    fn default() -> Self {
        Self(DEFAULT_ITERATION_BUDGET)
    }
}
