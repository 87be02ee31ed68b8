//! Secondary fit inside leftover strips.
//!
//! A leftover strip runs orthogonal to the main grid's long direction more
//! often than not, so the rotated orientation is tried first; the default
//! orientation is attempted only when the rotated pass places nothing. The
//! fit is single-shot: space left over by the secondary grid is discarded,
//! never fitted again.

use crate::grid::pitch_count;
use crate::placement::{Placement, Region};
use crate::tray::{Orientation, Tray};

/// Packs a single leftover region with as many trays as the preferred
/// orientation allows.
///
/// The orientation decision is made per region from the tray's *default*
/// footprint, independent of the orientation the main grid used.
pub fn fit(region: &Region, tray: &Tray, spacing: f64) -> Vec<Placement> {
    let placements = fit_oriented(region, Orientation::Vertical, tray.length, tray.width, spacing);
    if !placements.is_empty() {
        return placements;
    }
    fit_oriented(
        region,
        Orientation::Horizontal,
        tray.width,
        tray.length,
        spacing,
    )
}

/// Grids one orientation into the region. `eff_w`/`eff_l` are the effective
/// footprint for `orientation`.
fn fit_oriented(
    region: &Region,
    orientation: Orientation,
    eff_w: f64,
    eff_l: f64,
    spacing: f64,
) -> Vec<Placement> {
    if region.width < eff_w {
        return Vec::new();
    }

    let across = pitch_count(region.width, eff_w, spacing);
    let down = pitch_count(region.height, eff_l, spacing);

    let mut placements = Vec::with_capacity(across * down);
    for row in 0..down {
        for col in 0..across {
            placements.push(Placement::new(
                region.x + col as f64 * (eff_w + spacing),
                region.y + row as f64 * (eff_l + spacing),
                orientation,
                eff_w,
                eff_l,
            ));
        }
    }
    placements
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotated_preferred() {
        // Strip is wide enough for the tray's length: rotated wins even
        // though the default orientation would also fit.
        let region = Region::new(50.0, 0.0, 10.0, 30.0);
        let tray = Tray::new("t", 8.0, 6.0, 10);
        let placements = fit(&region, &tray, 0.25);
        assert!(!placements.is_empty());
        assert!(placements
            .iter()
            .all(|p| p.orientation == Orientation::Vertical));
        // Effective footprint is swapped.
        assert_relative_eq!(placements[0].width, 6.0);
        assert_relative_eq!(placements[0].length, 8.0);
        // across = floor(10.25 / 6.25) = 1, down = floor(30.25 / 8.25) = 3
        assert_eq!(placements.len(), 3);
    }

    #[test]
    fn test_falls_back_to_default_orientation() {
        // Too narrow for the length (8) but wide enough for the width (5).
        let region = Region::new(0.0, 0.0, 6.0, 30.0);
        let tray = Tray::new("t", 5.0, 8.0, 10);
        let placements = fit(&region, &tray, 0.25);
        assert!(!placements.is_empty());
        assert!(placements
            .iter()
            .all(|p| p.orientation == Orientation::Horizontal));
        // across = 1, down = floor(30.25 / 8.25) = 3
        assert_eq!(placements.len(), 3);
    }

    #[test]
    fn test_rotated_width_guard_passes_but_rows_fail() {
        // Rotated passes the width guard (20 >= length 5) but its rows need
        // the tray width (12) against a 6-inch height, so it places nothing
        // and the default orientation gets its turn: 1 across, 1 down.
        let region = Region::new(0.0, 0.0, 20.0, 6.0);
        let tray = Tray::new("t", 12.0, 5.0, 10);
        let placements = fit(&region, &tray, 0.25);
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].orientation, Orientation::Horizontal);
        assert_relative_eq!(placements[0].width, 12.0);
        assert_relative_eq!(placements[0].length, 5.0);
    }

    #[test]
    fn test_both_orientations_fail_on_rows() {
        // Both orientations clear the width guard but neither fits a row
        // into the 6.5-inch height (rotated needs 9, default needs 12).
        let region = Region::new(0.0, 0.0, 20.0, 6.5);
        let tray = Tray::new("t", 9.0, 12.0, 10);
        assert!(fit(&region, &tray, 0.25).is_empty());
    }

    #[test]
    fn test_too_small_in_both_orientations() {
        let region = Region::new(0.0, 0.0, 4.0, 4.0);
        let tray = Tray::new("t", 17.52, 5.99, 10);
        assert!(fit(&region, &tray, 0.25).is_empty());
    }

    #[test]
    fn test_placements_offset_by_region_origin() {
        let region = Region::new(40.0, 10.0, 13.0, 20.0);
        let tray = Tray::new("t", 9.0, 6.0, 10);
        let placements = fit(&region, &tray, 0.25);
        assert!(!placements.is_empty());
        assert_relative_eq!(placements[0].x, 40.0);
        assert_relative_eq!(placements[0].y, 10.0);
        for p in &placements {
            assert!(p.x >= region.x);
            assert!(p.y >= region.y);
            assert!(p.max_x() <= region.x + region.width + 1e-9);
            assert!(p.max_y() <= region.y + region.height + 1e-9);
        }
    }
}
