//! Arrow, slider and checkbox builders
//!
//! Each builder resolves its descriptor in `botpad-core`, checks that the
//! parent container exists, then creates and attaches the elements. A failed
//! call leaves the page untouched.

use botpad_core::{ArrowSpec, CheckboxSpec, SliderSpec};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Event, HtmlImageElement, HtmlInputElement, HtmlLabelElement, HtmlParagraphElement,
    HtmlSpanElement,
};

use crate::dom;
use crate::error::WebError;

/// Create an arrow `<img>` and append it to `parent_id`.
///
/// `image_file_name` (relative to `img/`) overrides the direction's default
/// image when non-empty.
pub fn create_arrow(
    direction: &str,
    parent_id: &str,
    size: u32,
    image_file_name: Option<&str>,
) -> Result<HtmlImageElement, WebError> {
    let spec = ArrowSpec::resolve(direction, size, image_file_name)?;
    dom::require_container(parent_id)?;

    let arrow: HtmlImageElement = dom::create_element("img")?;
    arrow.set_id(&spec.id);
    arrow.set_src(&spec.src);
    arrow.set_alt(&spec.alt);
    arrow.set_width(spec.size);
    arrow.set_height(spec.size);

    dom::attach(parent_id, &arrow)?;
    Ok(arrow)
}

/// Create a range slider followed by a `Value: <n>` line that tracks it.
///
/// Returns the `<input>`; the value line is its next sibling.
pub fn create_slider(
    slider_id: &str,
    parent_id: &str,
    min: f64,
    max: f64,
) -> Result<HtmlInputElement, WebError> {
    let spec = SliderSpec::new(slider_id, min, max);
    dom::require_container(parent_id)?;

    let slider: HtmlInputElement = dom::create_element("input")?;
    slider.set_type("range");
    slider.set_id(&spec.id);
    slider.set_value(SliderSpec::INITIAL_VALUE);
    slider.set_min(&spec.min_attr());
    slider.set_max(&spec.max_attr());

    let value_text: HtmlParagraphElement = dom::create_element("p")?;
    value_text.set_id(&spec.value_id());
    value_text.set_text_content(Some(SliderSpec::VALUE_LABEL));

    let value_span: HtmlSpanElement = dom::create_element("span")?;
    value_span.set_id(&spec.value_span_id());
    value_text.append_child(&value_span)?;

    dom::attach(parent_id, &slider)?;
    dom::attach(parent_id, &value_text)?;

    // Lives as long as the slider element
    let on_input = Closure::wrap(Box::new(move |event: Event| {
        let value = event
            .current_target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value());
        if let Some(value) = value {
            value_span.set_text_content(Some(&value));
        }
    }) as Box<dyn FnMut(Event)>);
    slider.set_oninput(Some(on_input.as_ref().unchecked_ref()));
    on_input.forget();

    Ok(slider)
}

/// Create a `<label>` holding a checkbox and its caption.
///
/// The caption defaults to `checkbox_id`. The label's contents are set from
/// the serialized checkbox and caption markup; the caption is escaped.
pub fn create_checkbox(
    checkbox_id: &str,
    parent_id: &str,
    text: Option<&str>,
) -> Result<HtmlLabelElement, WebError> {
    let spec = CheckboxSpec::new(checkbox_id, text);
    dom::require_container(parent_id)?;

    let checkbox: HtmlInputElement = dom::create_element("input")?;
    checkbox.set_type("checkbox");

    let caption: HtmlSpanElement = dom::create_element("span")?;
    caption.set_text_content(Some(&spec.text));

    let wrapper: HtmlLabelElement = dom::create_element("label")?;
    wrapper.set_inner_html(&format!("{}{}", checkbox.outer_html(), caption.outer_html()));
    wrapper.set_id(&spec.id);

    dom::attach(parent_id, &wrapper)?;
    Ok(wrapper)
}
