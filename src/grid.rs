//! Uniform main-grid fill.
//!
//! Lays a single-orientation grid of trays from the shelf origin and reports
//! the placements plus the (at most two) leftover strips: one to the right
//! of the used columns, one below the used rows. The bottom strip spans only
//! the used width, so the corner where the two strips would meet belongs to
//! neither. That corner is intentionally left unpacked; claiming it would
//! need an L-shaped secondary region and changes layout counts.

use crate::placement::{Placement, Region};
use crate::shelf::Shelf;
use crate::tray::Orientation;

/// Result of one grid pass: the placed trays and the leftover strips.
#[derive(Debug, Clone)]
pub struct GridFill {
    /// Placements in row-major order (rows outer, columns inner).
    pub placements: Vec<Placement>,

    /// Leftover strips eligible for a secondary fit, right strip first.
    pub leftovers: Vec<Region>,
}

/// Returns how many tray pitches fit in `span`, where pitch is the tray
/// dimension plus spacing and one extra spacing is credited up front.
///
/// Clamps to zero for degenerate inputs (non-positive pitch, NaN, spans
/// smaller than a single tray).
pub(crate) fn pitch_count(span: f64, tray_dim: f64, spacing: f64) -> usize {
    let pitch = tray_dim + spacing;
    if pitch <= 0.0 {
        return 0;
    }
    let n = ((span + spacing) / pitch).floor();
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}

/// Fills the shelf with a uniform grid of `tray_w` x `tray_l` footprints in
/// the given orientation, separated by `spacing`, starting at the origin.
///
/// `tray_w`/`tray_l` are the *effective* dimensions for `orientation`; the
/// caller applies the swap. Trays may touch the near shelf edges (x = 0,
/// y = 0); spacing separates adjacent trays and the used grid from the far
/// edges.
pub fn fill(
    shelf: &Shelf,
    orientation: Orientation,
    tray_w: f64,
    tray_l: f64,
    spacing: f64,
) -> GridFill {
    let across = pitch_count(shelf.width, tray_w, spacing);
    let down = pitch_count(shelf.length, tray_l, spacing);

    let mut placements = Vec::with_capacity(across * down);
    for row in 0..down {
        for col in 0..across {
            placements.push(Placement::new(
                col as f64 * (tray_w + spacing),
                row as f64 * (tray_l + spacing),
                orientation,
                tray_w,
                tray_l,
            ));
        }
    }

    // An empty grid claims no floor at all, leaving the full surface to the
    // leftover pass.
    let (used_width, used_length) = if across == 0 || down == 0 {
        (0.0, 0.0)
    } else {
        (
            across as f64 * (tray_w + spacing) - spacing,
            down as f64 * (tray_l + spacing) - spacing,
        )
    };

    let mut leftovers = Vec::new();

    if shelf.width - used_width > spacing {
        leftovers.push(Region::new(
            used_width + spacing,
            0.0,
            shelf.width - used_width - spacing,
            shelf.length,
        ));
    }

    if shelf.length - used_length > spacing {
        leftovers.push(Region::new(
            0.0,
            used_length + spacing,
            used_width,
            shelf.length - used_length - spacing,
        ));
    }

    GridFill {
        placements,
        leftovers,
    }
}
