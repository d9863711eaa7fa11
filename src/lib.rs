//! Embeddable terminal surface.
//!
//! The pieces a terminal view needs between a VT engine and a window:
//! a styled cell grid, drag selection with copy, a run-batching renderer
//! that emits backend-agnostic draw ops, a process-wide redraw throttle
//! shared by every surface, and a bridge that answers or applies the
//! window requests terminal programs send. It contains no GPU, font, PTY,
//! or platform code; those live with the embedder.

pub mod cell;
pub mod config;
pub mod error;
pub mod frame;
pub mod grid;
pub mod index;
pub mod render;
pub mod selection;
pub mod surface;
pub mod window;

pub use cell::{Cell, CellFlags, CellStyle, Decoration, FontSlant, FontWeight, Pen};
pub use config::SurfaceConfig;
pub use error::{Error, Result};
pub use frame::{FrameCoordinator, RedrawTarget, SurfaceId};
pub use grid::{Grid, Row};
pub use index::Point;
pub use render::{CellMetrics, DrawList, DrawOp, RunRenderer};
pub use selection::Selection;
pub use surface::TerminalSurface;
pub use window::{HostWindow, WindowCommand, WindowControlBridge, WindowRequest};
