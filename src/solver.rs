//! Solver trait and configuration.

use crate::result::Layout;
use crate::shelf::Shelf;
use crate::tray::Tray;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Spacing used between trays for catalog-driven layouts, in inches.
pub const CATALOG_SPACING: f64 = 0.25;

/// Near-zero spacing used for custom tray layouts, in inches.
///
/// The catalog and custom calculators have always run the same algorithm
/// with different spacing constants; whether the gap is intentional is an
/// open question, so both regimes are kept and made explicit here instead
/// of being unified.
pub const CUSTOM_SPACING: f64 = 0.001;

/// Configuration for a layout computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Minimum spacing between adjacent tray edges, and between the used
    /// grid and the shelf's far edges, in inches. Trays may touch the near
    /// edges (x = 0, y = 0).
    pub spacing: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spacing: CATALOG_SPACING,
        }
    }
}

impl Config {
    /// Creates a configuration with the default (catalog) spacing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for catalog-driven layouts.
    pub fn catalog() -> Self {
        Self {
            spacing: CATALOG_SPACING,
        }
    }

    /// Configuration for custom tray layouts.
    pub fn custom() -> Self {
        Self {
            spacing: CUSTOM_SPACING,
        }
    }

    /// Sets the spacing between trays. Negative or NaN values clamp to zero.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }
}

/// Trait for shelf layout solvers.
///
/// A solver is a pure function of its inputs: no result may depend on
/// anything but the tray, the shelf, and the solver's own configuration,
/// and every input maps to some valid (possibly empty) [`Layout`].
pub trait Solver {
    /// Computes the best layout of `tray` on `shelf`.
    fn solve(&self, tray: &Tray, shelf: &Shelf) -> Layout;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_catalog_spacing() {
        assert_relative_eq!(Config::default().spacing, 0.25);
        assert_eq!(Config::new(), Config::catalog());
    }

    #[test]
    fn test_custom_spacing() {
        assert_relative_eq!(Config::custom().spacing, 0.001);
    }

    #[test]
    fn test_with_spacing_sanitizes() {
        assert_relative_eq!(Config::new().with_spacing(0.5).spacing, 0.5);
        assert_relative_eq!(Config::new().with_spacing(-1.0).spacing, 0.0);
        assert_relative_eq!(Config::new().with_spacing(f64::NAN).spacing, 0.0);
    }
}
