//! Error types for tray layout computation.

use thiserror::Error;

/// Errors reported by explicit validation of layout inputs.
///
/// The packing entry points themselves never return these: an invalid tray
/// or shelf short-circuits to an empty [`Layout`](crate::Layout) so the
/// algorithm stays safe to call on partially-typed input. `validate()` is
/// for callers that want to surface the problem instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The tray footprint is unusable (non-finite or non-positive values).
    #[error("invalid tray: {0}")]
    InvalidTray(String),

    /// The shelf surface is unusable (non-finite or non-positive values).
    #[error("invalid shelf: {0}")]
    InvalidShelf(String),
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, Error>;
