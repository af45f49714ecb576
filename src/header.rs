//! Sticky header drop-shadow driven by vertical scroll offset.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use crate::consts::NO_SHADOW;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderShadow {
    shadowed: bool,
}

impl HeaderShadow {
    #[must_use]
    pub fn is_shadowed(&self) -> bool {
        self.shadowed
    }

    /// Record a scroll position and return the `box-shadow` value to apply.
    ///
    /// No hysteresis: any positive offset shadows, zero (or an overscroll
    /// bounce below zero) clears.
    pub fn on_scroll<'a>(&mut self, offset_y: f64, shadow: &'a str) -> &'a str {
        self.shadowed = offset_y > 0.0;
        if self.shadowed { shadow } else { NO_SHADOW }
    }
}
