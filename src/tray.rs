//! Tray footprint and orientation types.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Main-grid orientation of a tray on the shelf.
///
/// The tray's default footprint puts its `width` along the shelf's width
/// (x) axis; `Vertical` swaps the two, running the tray's length along the
/// shelf's width axis instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Default footprint: tray width along the shelf's width axis.
    #[default]
    Horizontal,
    /// Rotated 90 degrees: tray length along the shelf's width axis.
    Vertical,
}

impl Orientation {
    /// Returns the effective `(width, length)` footprint of `tray` in this
    /// orientation.
    pub fn effective_dims(&self, tray: &Tray) -> (f64, f64) {
        match self {
            Orientation::Horizontal => (tray.width, tray.length),
            Orientation::Vertical => (tray.length, tray.width),
        }
    }

    /// Returns true if the tray is rotated relative to its default footprint.
    pub fn is_rotated(&self) -> bool {
        matches!(self, Orientation::Vertical)
    }

    /// Returns the opposite orientation.
    pub fn flipped(&self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A rectangular tray holding a fixed number of pots.
///
/// Dimensions are outer dimensions in inches, in the tray's default
/// orientation. One layout run packs a single tray type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tray {
    /// Display name, e.g. `"1 Pint 10-Regular Tray"`.
    pub name: String,

    /// Outer width in inches (x axis in the default orientation).
    pub width: f64,

    /// Outer length in inches (y axis in the default orientation).
    pub length: f64,

    /// Number of pots the tray carries.
    pub pot_count: u32,
}

impl Tray {
    /// Creates a new tray footprint.
    pub fn new(name: impl Into<String>, width: f64, length: f64, pot_count: u32) -> Self {
        Self {
            name: name.into(),
            width,
            length,
            pot_count,
        }
    }

    /// Returns the footprint area in square inches.
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Returns the shorter of the two outer dimensions.
    pub fn short_side(&self) -> f64 {
        self.width.min(self.length)
    }

    /// Returns the longer of the two outer dimensions.
    pub fn long_side(&self) -> f64 {
        self.width.max(self.length)
    }

    /// Validates the footprint and returns an error if it is unusable.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(Error::InvalidTray(format!(
                "width must be positive and finite, got {}",
                self.width
            )));
        }
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(Error::InvalidTray(format!(
                "length must be positive and finite, got {}",
                self.length
            )));
        }
        if self.pot_count == 0 {
            return Err(Error::InvalidTray("pot count must be nonzero".into()));
        }
        Ok(())
    }
}
