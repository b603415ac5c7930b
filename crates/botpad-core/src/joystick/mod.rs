//! Virtual joystick
//!
//! A joystick is a base element with a draggable stick inside it. This
//! module holds the parts that don't need a DOM:
//!
//! - [`JoystickConfig`]: sizes and colors, validation, inline styles
//! - [`JoystickEngine`]: per-instance stick state and the coordinate mapping
//! - [`select_touch`]: which touch point of a multi-touch event drives the stick

mod config;
mod engine;
mod touch;

pub use config::{
    JoystickConfig, DEFAULT_BASE_COLOR, DEFAULT_STICK_COLOR, ROUND_RADIUS, STICK_SHADOW,
};
pub use engine::{JoystickEngine, StickPosition, StickUpdate};
pub use touch::select_touch;
