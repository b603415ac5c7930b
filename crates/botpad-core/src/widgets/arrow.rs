//! Directional arrow images

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

/// Directory arrow images are served from, relative to the page
pub const IMAGE_BASE_PATH: &str = "img/";

/// Width and height of an arrow when the caller gives none, in pixels
pub const DEFAULT_ARROW_SIZE: u32 = 10;

/// Arrow direction with a bundled default image
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Lowercase keyword
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// File name of the bundled image
    pub fn file_name(self) -> &'static str {
        match self {
            Direction::Up => "up-arrow.png",
            Direction::Down => "down-arrow.png",
            Direction::Left => "left-arrow.png",
            Direction::Right => "right-arrow.png",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(WidgetError::UnknownDirection(s.to_string())),
        }
    }
}

/// Resolved attributes of an arrow `<img>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrowSpec {
    pub id: String,
    pub src: String,
    pub alt: String,
    /// Width and height (images are assumed square)
    pub size: u32,
}

impl ArrowSpec {
    /// Resolve an arrow from a direction keyword.
    ///
    /// The keyword is lowercased. A non-empty `image_file_name` replaces the
    /// default image and lets any keyword through; without one, the keyword
    /// must name a [`Direction`].
    pub fn resolve(
        direction: &str,
        size: u32,
        image_file_name: Option<&str>,
    ) -> Result<Self, WidgetError> {
        let direction = direction.to_lowercase();
        let file_name = match image_file_name.filter(|name| !name.is_empty()) {
            Some(name) => name,
            None => direction.parse::<Direction>()?.file_name(),
        };

        Ok(Self {
            id: format!("{}-arrow", direction),
            src: format!("{}{}", IMAGE_BASE_PATH, file_name),
            alt: format!("{} arrow", direction),
            size,
        })
    }
}
