//! # Tray Nesting
//!
//! Grid-based tray layout engine for rectangular shelf surfaces.
//!
//! Computes how many identical rectangular trays (each holding a fixed
//! number of pots) fit on a shelf, choosing tray orientation and secondary
//! placements to maximize the count. Built for configuring greenhouse
//! cart and shelf loadouts from the named tray catalogs or a custom tray.
//!
//! ## How it packs
//!
//! For each base orientation of the tray (long edge horizontal, long edge
//! vertical) the solver:
//!
//! 1. lays a uniform grid of that orientation from the shelf origin,
//! 2. carves the uncovered floor into up to two leftover strips (right of
//!    the used columns, below the used rows),
//! 3. grids each strip a second time, preferring the orthogonal
//!    orientation.
//!
//! The orientation with the larger total wins, horizontal on ties. This is
//! a greedy heuristic, not an exact 2D bin-packing solver; rotation is
//! axis-aligned only and one layout run packs a single tray type.
//!
//! ## Quick Start
//!
//! ```rust
//! use tray_nesting::{Config, Shelf, ShelfPacker, Tray};
//!
//! let tray = Tray::new("1 Pint 10-Regular Tray", 17.52, 5.99, 10);
//! let shelf = Shelf::new(60.25, 20.5);
//!
//! let packer = ShelfPacker::new(Config::catalog());
//! let layout = packer.solve(&tray, &shelf);
//!
//! assert_eq!(layout.tray_count, layout.placements.len());
//! println!(
//!     "{} trays, {} pots, {} covered",
//!     layout.tray_count,
//!     layout.pot_count,
//!     layout.utilization_percent()
//! );
//! ```
//!
//! ## Catalogs
//!
//! ```rust
//! use tray_nesting::{ProductLine, Shelf, ShelfPacker};
//!
//! let shelf = Shelf::new(60.25, 20.5);
//! let packer = ShelfPacker::default_config();
//!
//! for group in ProductLine::Classic.groups() {
//!     for layout in packer.solve_group(group, &shelf) {
//!         println!("{}: {} trays", layout.tray.name, layout.tray_count);
//!     }
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod catalog;
pub mod error;
pub mod grid;
pub mod leftover;
pub mod packer;
pub mod placement;
pub mod result;
pub mod shelf;
pub mod solver;
pub mod tray;

// Re-exports
pub use catalog::{PotSizeGroup, ProductLine, TraySpec};
pub use error::{Error, Result};
pub use packer::ShelfPacker;
pub use placement::{Placement, Region};
pub use result::{Layout, LayoutSummary};
pub use shelf::Shelf;
pub use solver::{Config, Solver, CATALOG_SPACING, CUSTOM_SPACING};
pub use tray::{Orientation, Tray};
