//! Geometry types in CSS pixel space
//!
//! Values come straight from `getBoundingClientRect()` and pointer events,
//! so everything is `f64` to match the DOM.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
