//! Sample joystick for a bare page

use botpad_core::{JoystickConfig, ROUND_RADIUS};
use wasm_bindgen::prelude::*;

use crate::dom;
use crate::error::WebError;
use crate::joystick::Joystick;
use crate::util::{log, set_panic_hook};

/// Base size of the sample joystick
pub const DEMO_BASE_SIZE: &str = "192px";

/// Stick size of the sample joystick
pub const DEMO_STICK_SIZE: &str = "128px";

/// Build a round joystick, append it to `<body>` and log its positions
pub fn render_demo_joystick() -> Result<(), WebError> {
    let config = JoystickConfig::new(DEMO_BASE_SIZE, DEMO_STICK_SIZE);
    let joystick = Joystick::new(&config, |x, y| {
        log(&format!("[botpad] joystick {} {}", x, y));
    })?;

    let (base, _stick) = joystick.into_elements();
    base.style().set_property("border-radius", ROUND_RADIUS)?;

    let body = dom::document()?
        .body()
        .ok_or_else(|| WebError::Dom("document has no body".to_string()))?;
    body.append_child(&base)?;
    Ok(())
}

/// Render the sample joystick (JS: `renderJoystick()`)
#[wasm_bindgen(js_name = renderJoystick)]
pub fn render_joystick() -> Result<(), JsValue> {
    set_panic_hook();
    render_demo_joystick().map_err(|e| {
        log(&format!("[botpad] renderJoystick failed: {}", e));
        e.into()
    })
}
