//! Visual element identities and geometry

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a visual element (container, presenter, button, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned rectangle in device-independent units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Thickness {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Thickness {
    pub fn uniform(value: f64) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }
}

/// Width of a grid column
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum GridLength {
    /// Size to the column's content
    #[default]
    Auto,
    /// Fixed width in device-independent units
    Pixels(f64),
    /// Weighted share of the remaining space
    Star(f64),
}

/// Explicit width assigned to a tab container
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum TabWidth {
    /// No explicit width; the tab measures its own content
    #[default]
    Auto,
    Fixed(f64),
}

impl TabWidth {
    pub fn fixed(&self) -> Option<f64> {
        match self {
            TabWidth::Auto => None,
            TabWidth::Fixed(width) => Some(*width),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScrollBarVisibility {
    #[default]
    Auto,
    Visible,
    Hidden,
    Disabled,
}

/// A column of the tab container grid
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridColumn {
    /// Width the column was last arranged at
    pub actual_width: f64,
    pub width: GridLength,
    pub min_width: f64,
    pub max_width: Option<f64>,
}

impl GridColumn {
    pub fn with_actual_width(actual_width: f64) -> Self {
        Self {
            actual_width,
            ..Self::default()
        }
    }
}
