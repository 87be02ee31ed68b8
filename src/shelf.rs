//! Shelf surface type.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The rectangular surface being filled with trays.
///
/// Origin is the top-left corner at `(0, 0)`; x grows along the width and
/// y along the length. Dimensions are inches.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shelf {
    /// Usable width in inches.
    pub width: f64,

    /// Usable length (depth) in inches.
    pub length: f64,
}

impl Shelf {
    /// Creates a new shelf surface.
    pub fn new(width: f64, length: f64) -> Self {
        Self { width, length }
    }

    /// Returns the surface area in square inches.
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Validates the surface and returns an error if it is unusable.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(Error::InvalidShelf(format!(
                "width must be positive and finite, got {}",
                self.width
            )));
        }
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(Error::InvalidShelf(format!(
                "length must be positive and finite, got {}",
                self.length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_area() {
        let shelf = Shelf::new(60.25, 20.5);
        assert_relative_eq!(shelf.area(), 60.25 * 20.5, epsilon = 1e-9);
    }

    #[test]
    fn test_validation() {
        assert!(Shelf::new(60.25, 20.5).validate().is_ok());
        assert!(Shelf::new(0.0, 20.5).validate().is_err());
        assert!(Shelf::new(60.25, -3.0).validate().is_err());
        assert!(Shelf::new(f64::INFINITY, 20.5).validate().is_err());
        assert!(Shelf::new(60.25, f64::NAN).validate().is_err());
    }
}
