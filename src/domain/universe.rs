use std::fmt;

use rand::Rng;
use rayon::prelude::*;
use tracing::trace;

use super::{Algorithm, Automaton, Cell, EngineError, GridCoord, Rule, default_rule};

/// HexUniverse is the bundled automaton engine.
///
/// Cells live on an odd-row-offset hex grid that wraps like a torus. Each
/// generation is computed into a fresh buffer, so a snapshot taken before a
/// step never observes a half-updated grid.
pub struct HexUniverse {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    rule: Box<dyn Rule>,
    algorithm: Algorithm,
    generation: u64,
}

impl HexUniverse {
    /// Create a universe with every cell dead. Empty grids and grids whose
    /// cell count overflows `usize` are rejected.
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0)
            .ok_or(EngineError::InvalidDimensions { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
            rule: default_rule(),
            algorithm: Algorithm::default(),
            generation: 0,
        })
    }

    /// Create a universe where each cell is alive with probability `density`.
    /// Densities outside `[0, 1]` are clamped and NaN counts as 0.
    pub fn randomized<R: Rng>(
        width: usize,
        height: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let mut universe = Self::new(width, height)?;
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        universe
            .cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
        Ok(universe)
    }

    /// Set the rule (builder pattern)
    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.rule = rule;
        self
    }

    /// Set the evolution algorithm (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, coord: GridCoord) -> Option<Cell> {
        (coord.row < self.height && coord.col < self.width)
            .then(|| self.cells[coord.index(self.width)])
    }

    /// Set cell at position, ignoring out-of-range coordinates
    pub fn set(&mut self, coord: GridCoord, cell: Cell) {
        if coord.row < self.height && coord.col < self.width {
            let idx = coord.index(self.width);
            self.cells[idx] = cell;
        }
    }

    /// Count live neighbors among the six hex neighbors, wrapping at the edges.
    ///
    /// Rows above and below touch columns `{col-1, col}` from an even row and
    /// `{col, col+1}` from an odd row.
    fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let (w, h) = (self.width, self.height);
        let left = (col + w - 1) % w;
        let right = (col + 1) % w;
        let (near, far) = if row % 2 == 0 { (left, col) } else { (col, right) };

        let at = |r: usize, c: usize| self.cells[r * w + c].is_alive() as u8;

        [(row + h - 1) % h, (row + 1) % h]
            .into_iter()
            .map(|r| at(r, near) + at(r, far))
            .sum::<u8>()
            + at(row, left)
            + at(row, right)
    }

    fn evolve_row(&self, row: usize, out: &mut [Cell]) {
        for (col, next) in out.iter_mut().enumerate() {
            let current = self.cells[row * self.width + col];
            *next = self.rule.evolve(current, self.count_live_neighbors(row, col));
        }
    }
}

impl Automaton for HexUniverse {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn snapshot(&self) -> &[Cell] {
        &self.cells
    }

    fn step(&mut self) -> Result<(), EngineError> {
        let mut next = vec![Cell::Dead; self.cells.len()];

        match self.algorithm {
            Algorithm::Serial => next
                .chunks_mut(self.width)
                .enumerate()
                .for_each(|(row, out)| self.evolve_row(row, out)),
            Algorithm::Parallel => next
                .par_chunks_mut(self.width)
                .enumerate()
                .for_each(|(row, out)| self.evolve_row(row, out)),
        }

        self.cells = next;
        self.generation += 1;
        trace!(generation = self.generation, "universe stepped");
        Ok(())
    }

    fn toggle(&mut self, coord: GridCoord) -> Result<(), EngineError> {
        let cell = self.get(coord).ok_or(EngineError::OutOfBounds {
            row: coord.row,
            col: coord.col,
            width: self.width,
            height: self.height,
        })?;
        self.set(coord, cell.toggle());
        Ok(())
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}

impl fmt::Display for HexUniverse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row, line) in self.cells.chunks(self.width).enumerate() {
            if row % 2 == 1 {
                write!(f, " ")?;
            }

            let glyphs: Vec<String> = line.iter().map(|c| c.glyph().to_string()).collect();
            writeln!(f, "{}", glyphs.join(" "))?;
        }
        Ok(())
    }
}
