//! Drawer state: navigation and cart panels sharing one overlay and scroll lock.
//!
//! DESIGN
//! ======
//! Both drawers write to the same overlay and body scroll lock. Under
//! [`OverlayPolicy::Derived`] those two flags are recomputed from the drawer
//! flags after every transition, so closing one drawer never dismisses the
//! overlay another open drawer still needs.
//!
//! TRADE-OFFS
//! ==========
//! [`OverlayPolicy::Legacy`] keeps the stock page behavior where any close
//! clears the overlay and scroll lock outright. Drawers are rarely open at the
//! same time, so pages that depend on the old visuals can opt back in.

#[cfg(test)]
#[path = "drawer_test.rs"]
mod drawer_test;

use serde::Deserialize;

/// Which slide-in panel a transition applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Drawer {
    Nav,
    Cart,
}

/// How closing a drawer affects the shared overlay and scroll lock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayPolicy {
    /// Overlay and scroll lock are active while any drawer is open.
    #[default]
    Derived,
    /// Any close clears overlay and scroll lock unconditionally.
    Legacy,
}

/// Open/closed flags for both drawers plus the shared overlay.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub nav_open: bool,
    pub cart_open: bool,
    pub overlay_active: bool,
    pub body_scroll_locked: bool,
}

impl UiState {
    #[must_use]
    pub fn is_open(&self, drawer: Drawer) -> bool {
        match drawer {
            Drawer::Nav => self.nav_open,
            Drawer::Cart => self.cart_open,
        }
    }

    #[must_use]
    pub fn any_open(&self) -> bool {
        self.nav_open || self.cart_open
    }

    /// Open `drawer`, activating the overlay and locking body scroll.
    pub fn open(&mut self, drawer: Drawer) {
        self.set_flag(drawer, true);
        self.overlay_active = true;
        self.body_scroll_locked = true;
    }

    /// Close `drawer`; the overlay follows `policy`.
    pub fn close(&mut self, drawer: Drawer, policy: OverlayPolicy) {
        self.set_flag(drawer, false);
        match policy {
            OverlayPolicy::Derived => {
                self.overlay_active = self.any_open();
                self.body_scroll_locked = self.overlay_active;
            }
            OverlayPolicy::Legacy => {
                self.overlay_active = false;
                self.body_scroll_locked = false;
            }
        }
    }

    /// Open `drawer` if closed, otherwise close it. Returns the new open flag.
    pub fn toggle(&mut self, drawer: Drawer, policy: OverlayPolicy) -> bool {
        if self.is_open(drawer) {
            self.close(drawer, policy);
        } else {
            self.open(drawer);
        }
        self.is_open(drawer)
    }

    fn set_flag(&mut self, drawer: Drawer, open: bool) {
        match drawer {
            Drawer::Nav => self.nav_open = open,
            Drawer::Cart => self.cart_open = open,
        }
    }
}
