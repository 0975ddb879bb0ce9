use super::Cell;

/// Trait for cellular automaton rules on a six-neighbor grid
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Apply rule to compute next cell state from the live neighbor count (0..=6)
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell;
}

/// Conway's rules (B3/S23) applied to the six hex neighbors
#[derive(Clone, Copy)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// HexLife (B2/S34)
/// Tuned for six neighbors, produces small gliders and oscillators
#[derive(Clone, Copy)]
pub struct HexLifeRule;

impl Rule for HexLifeRule {
    fn name(&self) -> &'static str {
        "HexLife"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Alive, 3 | 4) => Cell::Alive,
            (Cell::Dead, 2) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// Seeds (B2/S)
/// Every cell dies each generation
#[derive(Clone, Copy)]
pub struct SeedsRule;

impl Rule for SeedsRule {
    fn name(&self) -> &'static str {
        "Seeds"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Dead, 2) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// Get default rule (Conway's counts on hexagons)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(ConwayRule)
}
