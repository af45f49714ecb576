//! Navigation drawer, cart drawer, and toast controller for storefront pages.
//!
//! The crate is compiled to WebAssembly and attaches to server-rendered store
//! markup. All page behavior lives in [`controller::ControllerCore`], which
//! turns user interactions into [`controller::Effect`]s; the `dom` host
//! (behind the `hydrate` feature) resolves page regions, registers listeners,
//! and applies those effects.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Interaction handlers and the effect list |
//! | [`drawer`] | Nav/cart drawer flags and the shared overlay policy |
//! | [`cart`] | Add-to-cart counter and badge text |
//! | [`toast`] | Depth-one toast with cancellable dismiss |
//! | [`header`] | Scroll-driven header shadow |
//! | [`anchor`] | Same-page anchor fragment handling |
//! | [`config`] | Selectors, marker classes, timings |
//! | [`error`] | Config and mount errors |
//! | [`consts`] | Defaults for the stock storefront markup |
//! | `dom` | web-sys host (`hydrate` only) |

pub mod anchor;
pub mod cart;
pub mod config;
pub mod consts;
pub mod controller;
pub mod drawer;
pub mod error;
pub mod header;
pub mod toast;

#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(feature = "hydrate")]
thread_local! {
    static MOUNTED: std::cell::RefCell<Option<dom::Mounted>> = const { std::cell::RefCell::new(None) };
}

/// WASM entry point: install logging and mount once the document is parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).unwrap_or_default();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("storefront: no document, skipping mount");
        return;
    };

    if document.ready_state() == web_sys::DocumentReadyState::Loading {
        let on_ready = Closure::once_into_js(mount_page);
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
            log::warn!("storefront: could not wait for DOMContentLoaded: {err:?}");
        }
    } else {
        mount_page();
    }
}

#[cfg(feature = "hydrate")]
fn mount_page() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    match dom::mount(dom::read_config(&document)) {
        Ok(mounted) => MOUNTED.with(|slot| *slot.borrow_mut() = Some(mounted)),
        Err(err) => log::warn!("storefront: mount failed: {err}"),
    }
}
