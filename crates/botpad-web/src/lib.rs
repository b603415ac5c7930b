//! Browser bindings for botpad
//!
//! Builds the joystick and control widgets out of real DOM nodes and exports
//! them to JavaScript through wasm-bindgen.
//!
//! ## Module Structure
//!
//! - `dom` - Element factory and the container attachment helper
//! - `joystick` - Joystick elements, event listeners and the position callback
//! - `widgets` - Arrow, slider and checkbox builders
//! - `api` - JS-facing exports (`createJoyStick`, `createArrow`, ...)
//! - `demo` - `renderJoystick()` sample page wiring
//! - `error` - Error type and its conversion to thrown JS errors
//! - `util` - Console logging and panic hook
//!
//! All geometry and defaults come from `botpad-core`; this crate only touches
//! the DOM.

// =============================================================================
// Module declarations
// =============================================================================

pub mod api;
pub mod demo;
pub mod dom;
pub(crate) mod error;
pub(crate) mod joystick;
pub(crate) mod util;
pub mod widgets;

// =============================================================================
// Public re-exports
// =============================================================================

pub use error::WebError;
pub use joystick::Joystick;

// Re-export the core types callers need to configure widgets
pub use botpad_core::{JoystickConfig, StickPosition, WidgetError};
