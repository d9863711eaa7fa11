//! Error types for the terminal surface.
//!
//! Every failure here is local: the operation is rejected without
//! mutating state, or (for window requests) left unhandled so an
//! upstream default can take over. Nothing in this crate is fatal.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by grid, coordinator, bridge, and config operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A grid was created or resized with a zero dimension.
    #[error("invalid grid dimension {cols}x{lines}: both must be at least 1")]
    InvalidDimension { cols: usize, lines: usize },

    /// A cell access fell outside the current grid extent.
    #[error("cell ({col}, {line}) out of bounds for {cols}x{lines} grid")]
    OutOfBounds {
        col: usize,
        line: usize,
        cols: usize,
        lines: usize,
    },

    /// No screen could be resolved for the host window.
    #[error("no screen contains the host window")]
    UnresolvedScreen,

    /// The execution context refused a scheduled flush.
    #[error("frame scheduling unavailable: {0}")]
    SchedulingUnavailable(String),

    /// The config file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`SurfaceConfig`](crate::SurfaceConfig).
    #[error("parse error in {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A color string was not `#RRGGBB` or `#RRGGBBAA`.
    #[error("invalid color {0:?}: expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
