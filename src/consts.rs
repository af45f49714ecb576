//! Default selectors, marker classes, and timings for the storefront page.

// ── Selectors ───────────────────────────────────────────────────

pub const BURGER_SELECTOR: &str = ".js-burger";
pub const NAV_DRAWER_SELECTOR: &str = ".js-nav-drawer";
pub const OVERLAY_SELECTOR: &str = ".js-overlay";
pub const NAV_CLOSE_SELECTOR: &str = ".js-nav-close";
pub const CART_DRAWER_SELECTOR: &str = ".js-cart-drawer";
pub const CART_OPEN_SELECTOR: &str = ".js-open-cart";
pub const CART_CLOSE_SELECTOR: &str = ".js-cart-close";
pub const ADD_TO_CART_SELECTOR: &str = ".js-add-to-cart";
pub const CART_BADGE_SELECTOR: &str = ".js-cart-badge";
pub const TOAST_SELECTOR: &str = ".js-toast";
pub const HEADER_SELECTOR: &str = ".js-header";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Id of the optional `<script type="application/json">` holding page config.
pub const CONFIG_ELEMENT_ID: &str = "storefront-config";

// ── Marker classes ──────────────────────────────────────────────

pub const OPEN_CLASS: &str = "is-open";
pub const ACTIVE_CLASS: &str = "is-active";
pub const VISIBLE_CLASS: &str = "is-visible";

// ── Toast ───────────────────────────────────────────────────────

/// Confirmation shown after an add-to-cart activation.
pub const ADDED_TO_CART_MESSAGE: &str = "Добавлено в корзину";

/// Delay before a visible toast hides itself.
pub const TOAST_DISMISS_MS: u32 = 2500;

// ── Header ──────────────────────────────────────────────────────

pub const HEADER_SHADOW: &str = "0 2px 16px rgba(0,0,0,0.12)";
pub const NO_SHADOW: &str = "none";
