//! Page configuration: selectors, marker classes, toast and header settings.
//!
//! DESIGN
//! ======
//! Every field has a default matching the stock storefront markup, so a page
//! only needs to supply the keys it overrides. Hosts read the JSON from an
//! inline `<script type="application/json">` element.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::*;
use crate::drawer::OverlayPolicy;
use crate::error::ConfigError;

/// Full controller configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub selectors: Selectors,
    pub classes: MarkerClasses,
    pub toast: ToastConfig,
    pub header: HeaderConfig,
    pub overlay_policy: OverlayPolicy,
    /// Close the nav drawer even when an anchor's fragment target is missing.
    pub anchor_miss_closes_nav: bool,
}

impl Config {
    /// Parse a (possibly partial) JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] when `raw` is not valid JSON or a field
    /// has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// CSS selectors used to locate page regions.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub burger: String,
    pub nav_drawer: String,
    pub overlay: String,
    pub nav_close: String,
    pub cart_drawer: String,
    pub cart_open: String,
    pub cart_close: String,
    pub add_to_cart: String,
    pub cart_badge: String,
    pub toast: String,
    pub header: String,
    pub anchors: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            burger: BURGER_SELECTOR.to_owned(),
            nav_drawer: NAV_DRAWER_SELECTOR.to_owned(),
            overlay: OVERLAY_SELECTOR.to_owned(),
            nav_close: NAV_CLOSE_SELECTOR.to_owned(),
            cart_drawer: CART_DRAWER_SELECTOR.to_owned(),
            cart_open: CART_OPEN_SELECTOR.to_owned(),
            cart_close: CART_CLOSE_SELECTOR.to_owned(),
            add_to_cart: ADD_TO_CART_SELECTOR.to_owned(),
            cart_badge: CART_BADGE_SELECTOR.to_owned(),
            toast: TOAST_SELECTOR.to_owned(),
            header: HEADER_SELECTOR.to_owned(),
            anchors: ANCHOR_SELECTOR.to_owned(),
        }
    }
}

/// Classes whose presence marks a region as open, active, or visible.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MarkerClasses {
    pub open: String,
    pub active: String,
    pub visible: String,
}

impl Default for MarkerClasses {
    fn default() -> Self {
        Self { open: OPEN_CLASS.to_owned(), active: ACTIVE_CLASS.to_owned(), visible: VISIBLE_CLASS.to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Text shown after an add-to-cart activation.
    pub message: String,
    pub dismiss_after_ms: u32,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self { message: ADDED_TO_CART_MESSAGE.to_owned(), dismiss_after_ms: TOAST_DISMISS_MS }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// `box-shadow` applied while the page is scrolled.
    pub shadow: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self { shadow: HEADER_SHADOW.to_owned() }
    }
}
