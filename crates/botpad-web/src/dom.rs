//! Element factory and container attachment
//!
//! Thin wrappers over web-sys that turn `JsValue` failures into [`WebError`]
//! and apply the style lists computed in `botpad-core`.

use botpad_core::{Rect, Vec2};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Node};

use crate::error::WebError;

/// The page's document
pub fn document() -> Result<Document, WebError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| WebError::Dom("no document available".to_string()))
}

/// Create an element and cast it to its concrete type
pub fn create_element<T: JsCast>(tag: &str) -> Result<T, WebError> {
    document()?
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| WebError::Dom(format!("<{}> has an unexpected element type", tag)))
}

/// Set inline style properties in order
pub fn apply_styles(element: &HtmlElement, styles: &[(&str, &str)]) -> Result<(), WebError> {
    let style = element.style();
    for (name, value) in styles {
        style.set_property(name, value)?;
    }
    Ok(())
}

/// Current rendered bounds of an element, in viewport pixels
pub fn bounds(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.x(), r.y(), r.width(), r.height())
}

/// `clientX`/`clientY` of a pointer-like object as doubles.
///
/// web-sys types these as `i32` on `MouseEvent` and `Touch`, which drops the
/// fractional pixels browsers report. Missing or non-numeric fields read as 0.
pub fn client_point(source: &JsValue) -> Vec2 {
    let read = |key: &str| {
        js_sys::Reflect::get(source, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    };
    Vec2::new(read("clientX"), read("clientY"))
}

/// Look up a container by id
pub fn container(parent_id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(parent_id)
}

/// Fail unless the container exists.
///
/// Builders call this before creating anything so a bad id attaches nothing.
pub fn require_container(parent_id: &str) -> Result<Element, WebError> {
    container(parent_id).ok_or_else(|| WebError::missing_container(parent_id))
}

/// Append `element` to the container named `parent_id`.
///
/// Returns `false` when the container doesn't exist (or refused the child).
pub fn append_to_parent(parent_id: &str, element: &Node) -> bool {
    match container(parent_id) {
        Some(parent) => parent.append_child(element).is_ok(),
        None => false,
    }
}

/// [`append_to_parent`], converting failure into a missing-container error
pub fn attach(parent_id: &str, element: &Node) -> Result<(), WebError> {
    if append_to_parent(parent_id, element) {
        Ok(())
    } else {
        Err(WebError::missing_container(parent_id))
    }
}
