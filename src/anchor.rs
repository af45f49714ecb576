//! In-page anchor links: fragment extraction and lookup outcome.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Result of resolving an anchor's fragment against the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorTarget {
    Found,
    Missing,
}

/// Selector for the element an `href` points at, or `None` when the link has
/// no usable fragment.
///
/// Only same-page links (`#id`) qualify. A bare `#` or `#` followed by
/// whitespace names no element and is treated as a miss.
#[must_use]
pub fn fragment_selector(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.trim().is_empty() {
        return None;
    }
    Some(href)
}
