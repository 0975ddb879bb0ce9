use thiserror::Error;

use super::{Cell, GridCoord};

/// Failures reported by an automaton engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Invalid grid dimensions {width}x{height}, both must be at least 1")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error("Engine fault: {0}")]
    Fault(String),
}

/// The capabilities the visualizer needs from an automaton engine.
///
/// Implementations own the cell buffer. `snapshot` borrows it, so a snapshot
/// can never outlive the next `step` or `toggle`.
pub trait Automaton {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Current cells, row-major, `width * height` long
    fn snapshot(&self) -> &[Cell];

    /// Advance one generation
    fn step(&mut self) -> Result<(), EngineError>;

    /// Flip one cell. Callers bounds-check first; engines may not.
    fn toggle(&mut self, coord: GridCoord) -> Result<(), EngineError>;

    /// Number of generations advanced so far
    fn generation(&self) -> u64 {
        0
    }

    /// Number of live cells in the current snapshot
    fn population(&self) -> usize {
        self.snapshot().iter().filter(|c| c.is_alive()).count()
    }
}
