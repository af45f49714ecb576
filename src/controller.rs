//! Drawer / cart / toast controller.
//!
//! ARCHITECTURE
//! ============
//! `ControllerCore` holds every piece of page state and turns each user
//! interaction into a list of [`Effect`]s. It never touches the DOM, so the
//! whole behavior is testable natively; the `dom` host applies the effects.
//!
//! Drawer handlers re-assert every marker they own instead of diffing, which
//! keeps the page consistent even if something else edits the classes.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::anchor::AnchorTarget;
use crate::cart::CartCounter;
use crate::config::Config;
use crate::drawer::{Drawer, UiState};
use crate::header::HeaderShadow;
use crate::toast::{TimerToken, Toast};

/// Page regions whose state is expressed through a marker class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Burger,
    NavDrawer,
    Overlay,
    CartDrawer,
    Toast,
}

/// DOM writes requested by the controller, applied in order by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Add (`on`) or remove the region's marker class.
    SetMarker { region: Region, on: bool },
    /// Lock or release body scrolling.
    ScrollLock(bool),
    BadgeText(String),
    ToastText(String),
    /// Replace any armed toast timer with one that fires `token` after `delay_ms`.
    ArmToastDismiss { token: TimerToken, delay_ms: u32 },
    /// Header `box-shadow` value.
    HeaderShadow(String),
    /// Suppress the default action of the triggering event.
    PreventDefault,
    /// Smooth-scroll the resolved anchor target into view.
    ScrollToTarget,
}

#[derive(Clone, Debug)]
pub struct ControllerCore {
    pub config: Config,
    pub ui: UiState,
    pub cart: CartCounter,
    pub toast: Toast,
    pub header: HeaderShadow,
    /// Whether the page has a toast element. Without one, toasts are not recorded.
    pub toast_mounted: bool,
}

impl ControllerCore {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ui: UiState::default(),
            cart: CartCounter::new(),
            toast: Toast::new(),
            header: HeaderShadow::default(),
            toast_mounted: true,
        }
    }

    // --- Navigation drawer ---

    pub fn open_nav(&mut self) -> Vec<Effect> {
        self.ui.open(Drawer::Nav);
        log::debug!("nav drawer opened");
        self.drawer_effects(Drawer::Nav)
    }

    pub fn close_nav(&mut self) -> Vec<Effect> {
        self.ui.close(Drawer::Nav, self.config.overlay_policy);
        log::debug!("nav drawer closed");
        self.drawer_effects(Drawer::Nav)
    }

    /// Burger control.
    pub fn toggle_nav(&mut self) -> Vec<Effect> {
        let open = self.ui.toggle(Drawer::Nav, self.config.overlay_policy);
        log::debug!("nav drawer toggled, open={open}");
        self.drawer_effects(Drawer::Nav)
    }

    // --- Cart drawer ---

    pub fn open_cart(&mut self) -> Vec<Effect> {
        self.ui.open(Drawer::Cart);
        log::debug!("cart drawer opened");
        self.drawer_effects(Drawer::Cart)
    }

    pub fn close_cart(&mut self) -> Vec<Effect> {
        self.ui.close(Drawer::Cart, self.config.overlay_policy);
        log::debug!("cart drawer closed");
        self.drawer_effects(Drawer::Cart)
    }

    /// Overlay click closes both drawers whatever their state.
    pub fn click_overlay(&mut self) -> Vec<Effect> {
        let mut effects = self.close_nav();
        effects.extend(self.close_cart());
        effects
    }

    // --- Cart counter / toast ---

    /// Add-to-cart control: bump the badge and confirm with a toast.
    pub fn add_to_cart(&mut self, now_ms: f64) -> Vec<Effect> {
        let total = self.cart.increment();
        log::debug!("cart count now {total}");
        let mut effects = vec![Effect::PreventDefault, Effect::BadgeText(self.cart.badge_text())];
        let message = self.config.toast.message.clone();
        effects.extend(self.show_toast(&message, now_ms));
        effects
    }

    /// Show `message` and arm its dismiss. No-op when the page has no toast element.
    pub fn show_toast(&mut self, message: &str, now_ms: f64) -> Vec<Effect> {
        if !self.toast_mounted {
            return Vec::new();
        }
        let delay_ms = self.config.toast.dismiss_after_ms;
        let token = self.toast.show(message, now_ms, delay_ms);
        vec![
            Effect::ToastText(self.toast.message().to_owned()),
            Effect::SetMarker { region: Region::Toast, on: true },
            Effect::ArmToastDismiss { token, delay_ms },
        ]
    }

    /// Toast timer fired. Stale tokens produce no effects.
    pub fn toast_timer_fired(&mut self, token: TimerToken) -> Vec<Effect> {
        if self.toast.dismiss(token) {
            log::debug!("toast dismissed");
            vec![Effect::SetMarker { region: Region::Toast, on: false }]
        } else {
            Vec::new()
        }
    }

    // --- Header / anchors ---

    pub fn scroll(&mut self, offset_y: f64) -> Vec<Effect> {
        let shadow = self.header.on_scroll(offset_y, &self.config.header.shadow);
        vec![Effect::HeaderShadow(shadow.to_owned())]
    }

    /// In-page anchor link activated; `target` says whether its fragment resolved.
    pub fn follow_anchor(&mut self, target: AnchorTarget) -> Vec<Effect> {
        match target {
            AnchorTarget::Found => {
                let mut effects = vec![Effect::PreventDefault, Effect::ScrollToTarget];
                effects.extend(self.close_nav());
                effects
            }
            AnchorTarget::Missing if self.config.anchor_miss_closes_nav => self.close_nav(),
            AnchorTarget::Missing => Vec::new(),
        }
    }

    fn drawer_effects(&self, drawer: Drawer) -> Vec<Effect> {
        let open = self.ui.is_open(drawer);
        let mut effects = match drawer {
            Drawer::Nav => vec![
                Effect::SetMarker { region: Region::Burger, on: open },
                Effect::SetMarker { region: Region::NavDrawer, on: open },
            ],
            Drawer::Cart => vec![Effect::SetMarker { region: Region::CartDrawer, on: open }],
        };
        effects.push(Effect::SetMarker { region: Region::Overlay, on: self.ui.overlay_active });
        effects.push(Effect::ScrollLock(self.ui.body_scroll_locked));
        effects
    }
}
