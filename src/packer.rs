//! Shelf layout solver.
//!
//! Runs the grid fill in both base orientations, tops each grid up from its
//! leftover strips, and keeps whichever orientation places more trays.

use crate::catalog::PotSizeGroup;
use crate::grid;
use crate::leftover;
use crate::placement::Placement;
use crate::result::Layout;
use crate::shelf::Shelf;
use crate::solver::{Config, Solver};
use crate::tray::{Orientation, Tray};

/// Greedy grid-based shelf layout solver.
///
/// The computation is a pure function of the tray, the shelf, and the
/// configured spacing; it is cheap enough to re-run on every input change,
/// and any memoization is the caller's concern.
#[derive(Debug, Clone)]
pub struct ShelfPacker {
    config: Config,
}

impl ShelfPacker {
    /// Creates a packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a packer with the default (catalog) configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Lays one base orientation: main grid first, then a secondary fit in
    /// each leftover strip (right strip before bottom strip).
    ///
    /// The leftover fit re-derives its own preferred orientation per strip
    /// from the tray's default footprint, regardless of `orientation`.
    pub fn run_orientation(
        &self,
        tray: &Tray,
        shelf: &Shelf,
        orientation: Orientation,
    ) -> Vec<Placement> {
        let spacing = self.config.spacing;
        let (eff_w, eff_l) = orientation.effective_dims(tray);
        let fill = grid::fill(shelf, orientation, eff_w, eff_l, spacing);

        let mut placements = fill.placements;
        for region in &fill.leftovers {
            placements.extend(leftover::fit(region, tray, spacing));
        }
        placements
    }

    /// Computes the best layout of `tray` on `shelf`.
    ///
    /// Tries the tray long-edge-horizontal and long-edge-vertical grids and
    /// returns the one with more trays, preferring horizontal on ties. An
    /// invalid tray or shelf (NaN, non-positive dimensions) yields an empty
    /// layout rather than an error, so the solver stays safe to call on
    /// partially-typed input.
    pub fn solve(&self, tray: &Tray, shelf: &Shelf) -> Layout {
        if tray.validate().is_err() || shelf.validate().is_err() {
            return Layout::empty(tray.clone(), shelf);
        }

        let horizontal = self.run_orientation(tray, shelf, Orientation::Horizontal);
        let vertical = self.run_orientation(tray, shelf, Orientation::Vertical);

        let winner = if horizontal.len() >= vertical.len() {
            horizontal
        } else {
            vertical
        };

        log::debug!(
            "layout for {:?} on {:.2}x{:.2}: {} trays (spacing {})",
            tray.name,
            shelf.width,
            shelf.length,
            winner.len(),
            self.config.spacing,
        );

        Layout::new(tray.clone(), winner, shelf)
    }

    /// Computes one layout per tray type in a catalog pot-size group.
    pub fn solve_group(&self, group: &PotSizeGroup, shelf: &Shelf) -> Vec<Layout> {
        group
            .trays
            .iter()
            .map(|spec| self.solve(&spec.to_tray(), shelf))
            .collect()
    }
}

impl Default for ShelfPacker {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Solver for ShelfPacker {
    fn solve(&self, tray: &Tray, shelf: &Shelf) -> Layout {
        ShelfPacker::solve(self, tray, shelf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packer() -> ShelfPacker {
        ShelfPacker::new(Config::catalog())
    }

    #[test]
    fn test_main_then_leftover_order() {
        let shelf = Shelf::new(60.25, 20.5);
        let tray = Tray::new("1 Pint 10-Regular Tray", 17.52, 5.99, 10);
        let placements = packer().run_orientation(&tray, &shelf, Orientation::Horizontal);

        // 3 across x 3 down main grid, then one rotated tray in the right
        // strip.
        assert_eq!(placements.len(), 10);
        assert!(placements[..9]
            .iter()
            .all(|p| p.orientation == Orientation::Horizontal));
        assert_eq!(placements[9].orientation, Orientation::Vertical);
        assert!(placements[9].x > placements[8].max_x());
    }

    #[test]
    fn test_tie_breaks_horizontal() {
        // A square tray fits identically either way; the horizontal run
        // must win the tie.
        let shelf = Shelf::new(30.0, 30.0);
        let tray = Tray::new("square", 9.0, 9.0, 4);
        let layout = packer().solve(&tray, &shelf);
        assert!(layout.tray_count > 0);
        assert!(layout
            .placements
            .iter()
            .all(|p| p.orientation == Orientation::Horizontal));
    }

    #[test]
    fn test_invalid_input_short_circuits() {
        let shelf = Shelf::new(60.25, 20.5);
        let bad_tray = Tray::new("bad", f64::NAN, 5.99, 10);
        let layout = packer().solve(&bad_tray, &shelf);
        assert!(layout.is_empty());
        assert_eq!(layout.pot_count, 0);

        let tray = Tray::new("ok", 17.52, 5.99, 10);
        let bad_shelf = Shelf::new(-1.0, 20.5);
        assert!(packer().solve(&tray, &bad_shelf).is_empty());
    }

    #[test]
    fn test_solver_trait_object() {
        let shelf = Shelf::new(60.25, 20.5);
        let tray = Tray::new("t", 17.52, 5.99, 10);
        let solver: &dyn Solver = &packer();
        assert_eq!(solver.solve(&tray, &shelf).tray_count, 10);
    }
}
