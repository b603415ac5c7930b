//! JS-facing exports
//!
//! Names and optional arguments follow the JavaScript API:
//! `createJoyStick`, `createArrow`, `createSlider`, `createCheckbox` and
//! `appendElToParentDiv`. Errors are thrown as JS `Error`s.

use botpad_core::{JoystickConfig, DEFAULT_ARROW_SIZE, DEFAULT_SLIDER_MAX, DEFAULT_SLIDER_MIN};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlImageElement, HtmlInputElement, HtmlLabelElement, Node};

use crate::dom;
use crate::error::WebError;
use crate::joystick::Joystick;
use crate::util::{log, set_panic_hook};
use crate::widgets;

/// Read a JS options object into a [`JoystickConfig`].
///
/// `undefined`/`null` yield an empty config, which then fails validation
/// with both sizes reported missing.
fn parse_config(config: &JsValue) -> Result<JoystickConfig, WebError> {
    if config.is_undefined() || config.is_null() {
        return Ok(JoystickConfig::default());
    }
    let json: String = js_sys::JSON::stringify(config)?.into();
    serde_json::from_str(&json).map_err(|e| WebError::InvalidConfig(e.to_string()))
}

/// Log a failed call before it is thrown back to JS
fn fail(call: &str, err: WebError) -> JsValue {
    log(&format!("[botpad] {} failed: {}", call, err));
    err.into()
}

/// Create a joystick.
///
/// `config` is `{ baseSize, stickSize, baseColor?, stickColor? }`;
/// `callback(x, y)` receives the stick position on every move and the
/// resting position on release. The listeners live as long as the
/// elements, so freeing the returned handle does not disable the joystick.
#[wasm_bindgen(js_name = createJoyStick)]
pub fn create_joy_stick(config: JsValue, callback: js_sys::Function) -> Result<Joystick, JsValue> {
    set_panic_hook();

    let config = parse_config(&config).map_err(|e| fail("createJoyStick", e))?;
    let mut joystick = Joystick::new(&config, move |x, y| {
        let this = JsValue::null();
        let _ = callback.call2(&this, &JsValue::from_f64(x), &JsValue::from_f64(y));
    })
    .map_err(|e| fail("createJoyStick", e))?;
    // JS callers rarely keep (or free) the handle; the elements must keep
    // working either way.
    joystick.release_listeners();
    Ok(joystick)
}

/// Create a directional arrow image inside `parentDivId`
#[wasm_bindgen(js_name = createArrow)]
pub fn create_arrow(
    direction: &str,
    parent_div_id: &str,
    size: Option<u32>,
    img_file_name: Option<String>,
) -> Result<HtmlImageElement, JsValue> {
    set_panic_hook();

    widgets::create_arrow(
        direction,
        parent_div_id,
        size.unwrap_or(DEFAULT_ARROW_SIZE),
        img_file_name.as_deref(),
    )
    .map_err(|e| fail("createArrow", e))
}

/// Create a range slider and its value display inside `parentDivId`
#[wasm_bindgen(js_name = createSlider)]
pub fn create_slider(
    slider_div_id: &str,
    parent_div_id: &str,
    min: Option<f64>,
    max: Option<f64>,
) -> Result<HtmlInputElement, JsValue> {
    set_panic_hook();

    widgets::create_slider(
        slider_div_id,
        parent_div_id,
        min.unwrap_or(DEFAULT_SLIDER_MIN),
        max.unwrap_or(DEFAULT_SLIDER_MAX),
    )
    .map_err(|e| fail("createSlider", e))
}

/// Create a labeled checkbox inside `parentDivId`
#[wasm_bindgen(js_name = createCheckbox)]
pub fn create_checkbox(
    checkbox_div_id: &str,
    parent_div_id: &str,
    checkbox_text: Option<String>,
) -> Result<HtmlLabelElement, JsValue> {
    set_panic_hook();

    widgets::create_checkbox(checkbox_div_id, parent_div_id, checkbox_text.as_deref())
        .map_err(|e| fail("createCheckbox", e))
}

/// Append `element` to the container `parentDivId`.
///
/// Returns 0 on success and -1 if the container does not exist.
#[wasm_bindgen(js_name = appendElToParentDiv)]
pub fn append_el_to_parent_div(parent_div_id: &str, element: &Node) -> i32 {
    if dom::append_to_parent(parent_div_id, element) {
        0
    } else {
        -1
    }
}
