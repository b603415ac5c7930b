//! Widget descriptors
//!
//! Each builder on the browser side first resolves a descriptor here (ids,
//! image paths, defaults) and then creates the elements from it.

mod arrow;
mod checkbox;
mod slider;

pub use arrow::{ArrowSpec, Direction, DEFAULT_ARROW_SIZE, IMAGE_BASE_PATH};
pub use checkbox::CheckboxSpec;
pub use slider::{SliderSpec, DEFAULT_SLIDER_MAX, DEFAULT_SLIDER_MIN};
