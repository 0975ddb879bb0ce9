/// Cell represents one hexagon of the automaton.
/// Each cell can be either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Flip the cell state
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Glyph used by the text rendering of a universe
    pub const fn glyph(self) -> char {
        match self {
            Cell::Alive => '⬢',
            Cell::Dead => '⬡',
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_state() {
        assert_eq!(Cell::Dead.toggle(), Cell::Alive);
        assert_eq!(Cell::Alive.toggle(), Cell::Dead);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        assert_eq!(Cell::Alive.toggle().toggle(), Cell::Alive);
    }

    #[test]
    fn test_default_is_dead() {
        assert!(!Cell::default().is_alive());
        assert!(Cell::from(true).is_alive());
    }
}
