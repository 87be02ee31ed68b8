//! Placement and leftover-region types.

use crate::tray::Orientation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One tray placed on the shelf.
///
/// `width` and `length` are the effective footprint after applying the
/// orientation, so a rotated placement carries the tray's dimensions
/// swapped. `(x, y)` is the top-left corner in shelf coordinates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Top-left corner, x (inches).
    pub x: f64,

    /// Top-left corner, y (inches).
    pub y: f64,

    /// Orientation of the tray in this placement.
    pub orientation: Orientation,

    /// Effective footprint width along the shelf's width axis.
    pub width: f64,

    /// Effective footprint length along the shelf's length axis.
    pub length: f64,
}

impl Placement {
    /// Creates a placement from a top-left corner and effective footprint.
    pub fn new(x: f64, y: f64, orientation: Orientation, width: f64, length: f64) -> Self {
        Self {
            x,
            y,
            orientation,
            width,
            length,
        }
    }

    /// Returns the right edge of the footprint.
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Returns the bottom edge of the footprint.
    pub fn max_y(&self) -> f64 {
        self.y + self.length
    }

    /// Returns the footprint area in square inches.
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Returns true if the interiors of the two footprints overlap.
    pub fn intersects(&self, other: &Placement) -> bool {
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }
}

/// An axis-aligned sub-rectangle of the shelf not covered by the main grid,
/// eligible for a secondary packing pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    /// Left edge in shelf coordinates.
    pub x: f64,

    /// Top edge in shelf coordinates.
    pub y: f64,

    /// Width of the region.
    pub width: f64,

    /// Height of the region.
    pub height: f64,
}

impl Region {
    /// Creates a new region.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the region area in square inches.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
