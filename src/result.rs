//! Layout result representation.

use crate::placement::Placement;
use crate::shelf::Shelf;
use crate::tray::Tray;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one layout computation.
///
/// Holds the winning placement sequence plus derived totals and the shelf
/// dimensions echoed back for rendering. Built fresh per computation; there
/// is no mutation after creation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layout {
    /// The tray type that was packed.
    pub tray: Tray,

    /// Placements, main grid first, then leftover-strip placements.
    pub placements: Vec<Placement>,

    /// Total trays placed (`placements.len()`).
    pub tray_count: usize,

    /// Total pots carried (`tray_count * tray.pot_count`).
    pub pot_count: u64,

    /// Shelf width the layout was computed for, in inches.
    pub shelf_width: f64,

    /// Shelf length the layout was computed for, in inches.
    pub shelf_length: f64,

    /// Covered fraction of the shelf surface (0.0 - 1.0).
    pub utilization: f64,
}

impl Layout {
    /// Assembles a layout from a placement sequence.
    pub fn new(tray: Tray, placements: Vec<Placement>, shelf: &Shelf) -> Self {
        let tray_count = placements.len();
        let pot_count = tray_count as u64 * u64::from(tray.pot_count);
        let placed_area: f64 = placements.iter().map(Placement::area).sum();
        let shelf_area = shelf.area();
        let utilization = if shelf_area > 0.0 {
            placed_area / shelf_area
        } else {
            0.0
        };
        Self {
            tray,
            placements,
            tray_count,
            pot_count,
            shelf_width: shelf.width,
            shelf_length: shelf.length,
            utilization,
        }
    }

    /// Creates an empty layout, used when the inputs cannot hold any tray.
    pub fn empty(tray: Tray, shelf: &Shelf) -> Self {
        Self::new(tray, Vec::new(), shelf)
    }

    /// Returns true if no tray was placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization * 100.0)
    }
}

/// Summary line for a layout, convenient for listings and logs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutSummary {
    /// Name of the tray type.
    pub tray_name: String,
    /// Trays placed.
    pub tray_count: usize,
    /// Pots carried.
    pub pot_count: u64,
    /// Utilization percentage (0.0 - 100.0).
    pub utilization_percent: f64,
    /// Shelf width in inches.
    pub shelf_width: f64,
    /// Shelf length in inches.
    pub shelf_length: f64,
}

impl From<&Layout> for LayoutSummary {
    fn from(layout: &Layout) -> Self {
        Self {
            tray_name: layout.tray.name.clone(),
            tray_count: layout.tray_count,
            pot_count: layout.pot_count,
            utilization_percent: layout.utilization * 100.0,
            shelf_width: layout.shelf_width,
            shelf_length: layout.shelf_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tray::Orientation;
    use approx::assert_relative_eq;

    fn tray() -> Tray {
        Tray::new("test", 10.0, 5.0, 8)
    }

    #[test]
    fn test_empty_layout() {
        let shelf = Shelf::new(60.0, 20.0);
        let layout = Layout::empty(tray(), &shelf);
        assert!(layout.is_empty());
        assert_eq!(layout.tray_count, 0);
        assert_eq!(layout.pot_count, 0);
        assert_relative_eq!(layout.utilization, 0.0);
        assert_relative_eq!(layout.shelf_width, 60.0);
        assert_relative_eq!(layout.shelf_length, 20.0);
    }

    #[test]
    fn test_derived_totals() {
        let shelf = Shelf::new(100.0, 10.0);
        let placements = vec![
            Placement::new(0.0, 0.0, Orientation::Horizontal, 10.0, 5.0),
            Placement::new(20.0, 0.0, Orientation::Horizontal, 10.0, 5.0),
        ];
        let layout = Layout::new(tray(), placements, &shelf);
        assert_eq!(layout.tray_count, 2);
        assert_eq!(layout.pot_count, 16);
        assert_relative_eq!(layout.utilization, 100.0 / 1000.0);
        assert_eq!(layout.utilization_percent(), "10.0%");
    }

    #[test]
    fn test_summary() {
        let shelf = Shelf::new(100.0, 10.0);
        let placements = vec![Placement::new(0.0, 0.0, Orientation::Horizontal, 10.0, 5.0)];
        let layout = Layout::new(tray(), placements, &shelf);
        let summary = LayoutSummary::from(&layout);
        assert_eq!(summary.tray_name, "test");
        assert_eq!(summary.tray_count, 1);
        assert_eq!(summary.pot_count, 8);
        assert_relative_eq!(summary.utilization_percent, 5.0);
    }

    #[test]
    fn test_zero_area_shelf_has_zero_utilization() {
        let shelf = Shelf::new(0.0, 10.0);
        let layout = Layout::empty(tray(), &shelf);
        assert_relative_eq!(layout.utilization, 0.0);
    }
}
