//! Cart counter shown in the header badge.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

/// Number of add-to-cart activations since page load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CartCounter {
    count: u64,
}

impl CartCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Add one item and return the new total.
    pub fn increment(&mut self) -> u64 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    /// Badge text: the plain decimal total.
    #[must_use]
    pub fn badge_text(&self) -> String {
        self.count.to_string()
    }
}
