mod algorithm;
mod cell;
mod coord;
mod engine;
mod rules;
mod universe;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use coord::{GridCoord, all_coords};
pub use engine::{Automaton, EngineError};
pub use rules::{ConwayRule, HexLifeRule, Rule, SeedsRule, default_rule};
pub use universe::HexUniverse;
