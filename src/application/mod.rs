mod layout;
mod pacing;
mod session;

pub use layout::{HexLayout, Resolver, STROKE_MARGIN};
pub use pacing::FramePacer;
pub use session::{Command, RunState, Session};
