//! Browser host: binds page controls to the controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with the `hydrate` feature. Everything here is glue between
//! web-sys and [`ControllerCore`]; behavior lives in the core so it can be
//! tested without a document.
//!
//! Listeners are plain `addEventListener` registrations kept alive by the
//! returned [`Mounted`] handle. The scroll listener is passive.

pub mod host;
pub mod regions;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget};

use crate::anchor::{AnchorTarget, fragment_selector};
use crate::config::Config;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::controller::ControllerCore;
use crate::error::MountError;

use self::host::{EventContext, Host, SharedHost, dispatch};
use self::regions::{Regions, query_one};

type Listener = Closure<dyn FnMut(Event)>;

/// A controller attached to the page. Dropping it invalidates every listener,
/// so keep it for the page's lifetime.
pub struct Mounted {
    _host: SharedHost,
    _listeners: Vec<Listener>,
}

/// Read page configuration from the inline JSON config element.
///
/// Falls back to defaults when the element is absent or malformed.
pub fn read_config(document: &Document) -> Config {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return Config::default();
    };
    match Config::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using default storefront config");
            Config::default()
        }
    }
}

/// Resolve page regions and register every listener.
///
/// A listener the browser rejects is logged and its control left unbound;
/// the listeners registered so far stay alive in the returned handle.
///
/// # Errors
///
/// Fails when there is no window or document.
pub fn mount(config: Config) -> Result<Mounted, MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let regions = Regions::resolve(&document, &config.selectors);
    let mut core = ControllerCore::new(config);
    core.toast_mounted = regions.toast.is_some();
    let host: SharedHost = Rc::new(RefCell::new(Host::new(core, regions)));

    let mut listeners = Vec::new();
    let shared = host.borrow();
    let regions = &shared.regions;

    if let Some(burger) = &regions.burger {
        let h = host.clone();
        keep(&mut listeners, listen(burger, "click", false, move |_| {
            dispatch(&h, EventContext::default(), ControllerCore::toggle_nav);
        }));
    }

    if let Some(close) = &regions.nav_close {
        let h = host.clone();
        keep(&mut listeners, listen(close, "click", false, move |_| {
            dispatch(&h, EventContext::default(), ControllerCore::close_nav);
        }));
    }

    for button in &regions.cart_open {
        let h = host.clone();
        keep(&mut listeners, listen(button, "click", false, move |_| {
            dispatch(&h, EventContext::default(), ControllerCore::open_cart);
        }));
    }

    if let Some(close) = &regions.cart_close {
        let h = host.clone();
        keep(&mut listeners, listen(close, "click", false, move |_| {
            dispatch(&h, EventContext::default(), ControllerCore::close_cart);
        }));
    }

    if let Some(overlay) = &regions.overlay {
        let h = host.clone();
        keep(&mut listeners, listen(overlay, "click", false, move |_| {
            dispatch(&h, EventContext::default(), ControllerCore::click_overlay);
        }));
    }

    for button in &regions.add_to_cart {
        let h = host.clone();
        keep(&mut listeners, listen(button, "click", false, move |event: Event| {
            let now_ms = js_sys::Date::now();
            let ctx = EventContext { event: Some(&event), anchor_target: None };
            dispatch(&h, ctx, |core| core.add_to_cart(now_ms));
        }));
    }

    {
        let h = host.clone();
        let scroll_source = window.clone();
        keep(&mut listeners, listen(&window, "scroll", true, move |_| {
            let offset_y = scroll_source.scroll_y().unwrap_or(0.0);
            dispatch(&h, EventContext::default(), |core| core.scroll(offset_y));
        }));
    }

    for link in &regions.anchors {
        let h = host.clone();
        let doc = document.clone();
        let anchor = link.clone();
        keep(&mut listeners, listen(link, "click", false, move |event: Event| {
            let target = resolve_anchor(&doc, &anchor);
            let outcome = if target.is_some() { AnchorTarget::Found } else { AnchorTarget::Missing };
            let ctx = EventContext { event: Some(&event), anchor_target: target.as_ref() };
            dispatch(&h, ctx, |core| core.follow_anchor(outcome));
        }));
    }

    drop(shared);
    log::info!("storefront mounted with {} listeners", listeners.len());
    Ok(Mounted { _host: host, _listeners: listeners })
}

fn keep(listeners: &mut Vec<Listener>, bound: Result<Listener, MountError>) {
    match bound {
        Ok(listener) => listeners.push(listener),
        Err(err) => log::warn!("{err}; control left unbound"),
    }
}

fn resolve_anchor(document: &Document, link: &Element) -> Option<Element> {
    let href = link.get_attribute("href")?;
    let selector = fragment_selector(&href)?;
    query_one(document, selector)
}

fn listen(
    target: &EventTarget,
    event: &'static str,
    passive: bool,
    handler: impl FnMut(Event) + 'static,
) -> Result<Listener, MountError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
    let registered = if passive {
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(event, callback, &options)
    } else {
        target.add_event_listener_with_callback(event, callback)
    };
    registered.map_err(|err| MountError::Listener { event, detail: format!("{err:?}") })?;
    Ok(closure)
}
