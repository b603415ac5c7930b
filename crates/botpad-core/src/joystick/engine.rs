//! Joystick coordinate engine
//!
//! Turns pointer positions into stick positions. The engine owns the stored
//! position for one joystick; the browser layer feeds it bounding boxes and
//! applies the resulting offset as `top`/`left`.
//!
//! ## Coordinate spaces
//!
//! - Pointer: viewport pixels (`clientX`, `clientY`)
//! - Stored/reported: pixels relative to the base's top-left corner
//! - Offset: the stick's `top`/`left`, i.e. stored minus half the stick size

use serde::{Deserialize, Serialize};

use crate::math::{Rect, Vec2};

/// Stick position relative to the base's top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickPosition {
    pub x: f64,
    pub y: f64,
    /// Resting coordinate on both axes (half the base width)
    pub center_offset: f64,
}

impl StickPosition {
    /// Position at rest for a given center offset
    #[inline]
    pub fn centered(center_offset: f64) -> Self {
        Self {
            x: center_offset,
            y: center_offset,
            center_offset,
        }
    }

    /// The (x, y) pair as a vector
    #[inline]
    pub fn point(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Result of feeding one pointer position to the engine
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StickUpdate {
    /// Value for the position callback (base-relative)
    pub report: Vec2,
    /// `left` (x) and `top` (y) for the stick, in pixels
    pub offset: Vec2,
}

/// Per-joystick stick state
#[derive(Clone, Debug, Default)]
pub struct JoystickEngine {
    position: Option<StickPosition>,
}

impl JoystickEngine {
    /// Create an engine with no stored position
    pub fn new() -> Self {
        Self { position: None }
    }

    /// Stored position, `None` until the first move
    #[inline]
    pub fn position(&self) -> Option<StickPosition> {
        self.position
    }

    /// Whether the stick has been moved since creation
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.position.is_some()
    }

    /// Map a pointer position onto the stick.
    ///
    /// Each axis is updated only while the pointer keeps the whole stick
    /// inside the base on that axis. Outside that range the axis keeps its
    /// last stored value; it is not snapped to the edge.
    pub fn move_to(&mut self, pointer: Vec2, base: Rect, stick: Rect) -> StickUpdate {
        let center_offset = base.width / 2.0;
        let position = self
            .position
            .get_or_insert_with(|| StickPosition::centered(center_offset));

        let (top, bottom) = base.inset_y(stick.height);
        if pointer.y >= top && pointer.y <= bottom {
            position.y = pointer.y - base.y;
        }
        let (left, right) = base.inset_x(stick.width);
        if pointer.x >= left && pointer.x <= right {
            position.x = pointer.x - base.x;
        }

        let report = position.point();
        StickUpdate {
            report,
            offset: report - stick.half_extents(),
        }
    }

    /// End the gesture and return the resting value to report.
    ///
    /// The stored position is recentered as well, so the next gesture's
    /// frozen axes start from the middle rather than the last drag point.
    /// Before any move, the center comes from `base`.
    pub fn release(&mut self, base: Rect) -> Vec2 {
        let center_offset = self
            .position
            .map(|p| p.center_offset)
            .unwrap_or(base.width / 2.0);
        if let Some(position) = self.position.as_mut() {
            *position = StickPosition::centered(center_offset);
        }
        Vec2::splat(center_offset)
    }
}
