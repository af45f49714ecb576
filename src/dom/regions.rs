//! Page region lookup.
//!
//! Every region is optional. A selector that matches nothing, or that the
//! browser rejects, resolves to `None` (or an empty list) and every later
//! write to it is skipped.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::Selectors;
use crate::controller::Region;

pub struct Regions {
    pub burger: Option<Element>,
    pub nav_drawer: Option<Element>,
    pub overlay: Option<Element>,
    pub nav_close: Option<Element>,
    pub cart_drawer: Option<Element>,
    pub cart_open: Vec<Element>,
    pub cart_close: Option<Element>,
    pub add_to_cart: Vec<Element>,
    pub cart_badge: Option<Element>,
    pub toast: Option<Element>,
    pub header: Option<HtmlElement>,
    pub anchors: Vec<Element>,
    pub body: Option<HtmlElement>,
}

impl Regions {
    pub fn resolve(document: &Document, selectors: &Selectors) -> Self {
        Self {
            burger: query_one(document, &selectors.burger),
            nav_drawer: query_one(document, &selectors.nav_drawer),
            overlay: query_one(document, &selectors.overlay),
            nav_close: query_one(document, &selectors.nav_close),
            cart_drawer: query_one(document, &selectors.cart_drawer),
            cart_open: query_all(document, &selectors.cart_open),
            cart_close: query_one(document, &selectors.cart_close),
            add_to_cart: query_all(document, &selectors.add_to_cart),
            cart_badge: query_one(document, &selectors.cart_badge),
            toast: query_one(document, &selectors.toast),
            header: query_one(document, &selectors.header).and_then(|el| el.dyn_ref::<HtmlElement>().cloned()),
            anchors: query_all(document, &selectors.anchors),
            body: document.body(),
        }
    }

    /// Element carrying the marker class for `region`.
    pub fn marker_target(&self, region: Region) -> Option<&Element> {
        match region {
            Region::Burger => self.burger.as_ref(),
            Region::NavDrawer => self.nav_drawer.as_ref(),
            Region::Overlay => self.overlay.as_ref(),
            Region::CartDrawer => self.cart_drawer.as_ref(),
            Region::Toast => self.toast.as_ref(),
        }
    }
}

/// First element matching `selector`, if any.
pub fn query_one(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::debug!("selector {selector:?} rejected: {err:?}");
            None
        }
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::debug!("selector {selector:?} rejected: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}
