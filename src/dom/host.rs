//! Applies controller effects to the live document.
//!
//! The host owns the resolved regions and the single toast `Timeout`.
//! Replacing the stored `Timeout` drops the previous one, which cancels it, so
//! only one dismiss timer is ever pending.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use web_sys::{Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config::MarkerClasses;
use crate::controller::{ControllerCore, Effect, Region};
use crate::dom::regions::Regions;
use crate::toast::TimerToken;

pub type SharedHost = Rc<RefCell<Host>>;

pub struct Host {
    pub core: ControllerCore,
    pub regions: Regions,
    toast_timer: Option<Timeout>,
}

/// The DOM objects an effect list may refer to.
#[derive(Clone, Copy, Default)]
pub struct EventContext<'a> {
    pub event: Option<&'a Event>,
    pub anchor_target: Option<&'a Element>,
}

impl Host {
    pub fn new(core: ControllerCore, regions: Regions) -> Self {
        Self { core, regions, toast_timer: None }
    }
}

/// Run one controller handler and apply the resulting effects.
pub fn dispatch(
    host: &SharedHost,
    ctx: EventContext<'_>,
    handler: impl FnOnce(&mut ControllerCore) -> Vec<Effect>,
) {
    let mut guard = host.borrow_mut();
    let effects = handler(&mut guard.core);
    for effect in effects {
        apply(&mut guard, Rc::downgrade(host), ctx, effect);
    }
}

fn apply(host: &mut Host, weak: Weak<RefCell<Host>>, ctx: EventContext<'_>, effect: Effect) {
    match effect {
        Effect::SetMarker { region, on } => {
            let class = marker_class(&host.core.config.classes, region);
            if let Some(el) = host.regions.marker_target(region) {
                if let Err(err) = el.class_list().toggle_with_force(class, on) {
                    log::debug!("class toggle {class:?} failed: {err:?}");
                }
            }
        }
        Effect::ScrollLock(locked) => {
            if let Some(body) = &host.regions.body {
                let style = body.style();
                let result = if locked {
                    style.set_property("overflow", "hidden")
                } else {
                    style.remove_property("overflow").map(drop)
                };
                if let Err(err) = result {
                    log::debug!("scroll lock update failed: {err:?}");
                }
            }
        }
        Effect::BadgeText(text) => {
            if let Some(badge) = &host.regions.cart_badge {
                badge.set_text_content(Some(&text));
            }
        }
        Effect::ToastText(text) => {
            if let Some(toast) = &host.regions.toast {
                toast.set_text_content(Some(&text));
            }
        }
        Effect::ArmToastDismiss { token, delay_ms } => {
            host.toast_timer = Some(arm_dismiss(weak, token, delay_ms));
        }
        Effect::HeaderShadow(shadow) => {
            if let Some(header) = &host.regions.header {
                if let Err(err) = header.style().set_property("box-shadow", &shadow) {
                    log::debug!("header shadow update failed: {err:?}");
                }
            }
        }
        Effect::PreventDefault => {
            if let Some(event) = ctx.event {
                event.prevent_default();
            }
        }
        Effect::ScrollToTarget => {
            if let Some(target) = ctx.anchor_target {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }
}

// The dismiss path never re-arms, so a running timeout is never dropped from
// inside its own callback.
fn arm_dismiss(weak: Weak<RefCell<Host>>, token: TimerToken, delay_ms: u32) -> Timeout {
    Timeout::new(delay_ms, move || {
        if let Some(host) = weak.upgrade() {
            dispatch(&host, EventContext::default(), |core| core.toast_timer_fired(token));
        }
    })
}

fn marker_class(classes: &MarkerClasses, region: Region) -> &str {
    match region {
        Region::Burger | Region::NavDrawer | Region::CartDrawer => &classes.open,
        Region::Overlay => &classes.active,
        Region::Toast => &classes.visible,
    }
}
