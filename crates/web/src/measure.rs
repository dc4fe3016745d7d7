//! Post-layout measurement of the timeline dots.

use deck_core::render::{SLIDE_SELECTOR, TIMELINE_DOT_SELECTOR};
use deck_core::timeline::{right_edge_offset, to_pixels, RIGHT_EDGE_OFFSET_VAR};
use deck_core::{Span, TimelineGeometry};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Horizontal extent of an element's border box.
fn span_of(element: &Element) -> Span {
    let rect = element.get_bounding_client_rect();
    Span::new(rect.left(), rect.width())
}

/// Set a custom property, logging instead of failing.
pub(crate) fn set_style(element: &HtmlElement, name: &str, value: &str) {
    if let Err(e) = element.style().set_property(name, value) {
        log::debug!("Could not set {}: {:?}", name, e);
    }
}

/// Measure the dots in `list` and publish the connector offsets.
///
/// Does nothing if the list was replaced by a newer render, has no dots, or
/// `active` is not one of them.
pub fn measure_timeline(list: &Element, active: usize) {
    if !list.is_connected() {
        return;
    }

    let Ok(nodes) = list.query_selector_all(TIMELINE_DOT_SELECTOR) else {
        return;
    };
    let dots: Vec<Span> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|dot| span_of(&dot))
        .collect();

    let Some(geometry) = TimelineGeometry::measure(span_of(list), &dots, active) else {
        return;
    };

    if let Some(list) = list.dyn_ref::<HtmlElement>() {
        for (name, value) in geometry.style_properties() {
            set_style(list, name, &value);
        }
    }

    if let Ok(Some(slide)) = list.closest(SLIDE_SELECTOR) {
        if let (Some(offset), Some(slide_el)) = (
            right_edge_offset(span_of(&slide), &dots),
            slide.dyn_ref::<HtmlElement>(),
        ) {
            set_style(slide_el, RIGHT_EDGE_OFFSET_VAR, &to_pixels(offset));
        }
    }
}
