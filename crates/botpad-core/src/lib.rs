//! Core of the botpad control widgets
//!
//! This crate holds everything about the widgets that can be decided without
//! a browser:
//! - Joystick configuration, validation and inline style declarations
//! - The joystick coordinate engine (pointer position to stick offset)
//! - Touch selection for multi-touch events
//! - Descriptors for the arrow, slider and checkbox builders
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Rect`) in CSS pixels
//! - [`joystick`]: Config, engine and touch selection
//! - [`widgets`]: Arrow, slider and checkbox descriptors
//! - [`error`]: Error type shared with the browser layer
//!
//! The `botpad-web` crate applies these descriptors to real DOM nodes.
//!
//! ## Example
//!
//! ```rust
//! use botpad_core::{JoystickEngine, Rect, Vec2};
//!
//! let mut engine = JoystickEngine::new();
//! let base = Rect::new(100.0, 100.0, 192.0, 192.0);
//! let stick = Rect::new(132.0, 132.0, 128.0, 128.0);
//!
//! let update = engine.move_to(Vec2::new(200.0, 190.0), base, stick);
//! assert_eq!(update.report, Vec2::new(100.0, 90.0));
//!
//! let rest = engine.release(base);
//! assert_eq!(rest, Vec2::new(96.0, 96.0));
//! ```

pub mod error;
pub mod joystick;
pub mod math;
pub mod widgets;

pub use error::WidgetError;
pub use joystick::{
    select_touch, JoystickConfig, JoystickEngine, StickPosition, StickUpdate,
    DEFAULT_BASE_COLOR, DEFAULT_STICK_COLOR, ROUND_RADIUS, STICK_SHADOW,
};
pub use math::{Rect, Vec2};
pub use widgets::{
    ArrowSpec, CheckboxSpec, Direction, SliderSpec, DEFAULT_ARROW_SIZE, DEFAULT_SLIDER_MAX,
    DEFAULT_SLIDER_MIN, IMAGE_BASE_PATH,
};
