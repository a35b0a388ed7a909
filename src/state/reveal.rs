#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Fraction of an element's area that must be visible to trigger its reveal.
pub const REVEAL_RATIO: f64 = 0.1;

/// Whether an intersection ratio is enough to reveal an element.
#[must_use]
pub fn crosses_threshold(ratio: f64) -> bool {
    ratio >= REVEAL_RATIO
}

/// At-most-once reveal bookkeeping for a fixed set of observed elements.
///
/// Each slot transitions `unrevealed -> revealed` exactly once and never
/// reverts, even if the element later leaves and re-enters the viewport or
/// the observer delivers duplicate entries before the element is unobserved.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    /// Record that the element at `index` met the threshold.
    ///
    /// Returns `true` exactly once per element: on the first call. Later
    /// calls, and calls with an out-of-range index, return `false`.
    pub fn mark(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }
}
