// Domain layer - Engine, cells and coordinates
pub mod domain;

// Application layer - Hex layout, frame pacing and the interaction loop
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod input;
pub mod rendering;
pub mod ui;

pub mod config;
mod error;

// Re-exports for convenience
pub use application::{Command, FramePacer, HexLayout, Resolver, RunState, Session};
pub use config::{CliArgs, Config};
pub use domain::{Automaton, Cell, EngineError, GridCoord, HexUniverse};
pub use error::{Error, Result};
