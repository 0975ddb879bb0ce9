/// A cell address on the hex grid.
///
/// Rows run top to bottom, columns left to right; odd rows are drawn shifted
/// right by half a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    pub row: usize,
    pub col: usize,
}

impl GridCoord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Build a coordinate from signed values, rejecting anything outside
    /// `[0, height) × [0, width)`.
    pub fn checked(row: i64, col: i64, width: usize, height: usize) -> Option<Self> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < height && col < width).then_some(Self { row, col })
    }

    /// Row-major index into a snapshot of the given width
    pub const fn index(self, width: usize) -> usize {
        self.row * width + self.col
    }

    /// Inverse of [`GridCoord::index`]
    pub const fn from_index(index: usize, width: usize) -> Self {
        Self {
            row: index / width,
            col: index % width,
        }
    }
}

/// Iterate every coordinate of a `width × height` grid in row-major order
pub fn all_coords(width: usize, height: usize) -> impl Iterator<Item = GridCoord> {
    (0..height).flat_map(move |row| (0..width).map(move |col| GridCoord::new(row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_checked_rejects_negative_and_overflow() {
        assert_eq!(GridCoord::checked(-1, 0, 3, 3), None);
        assert_eq!(GridCoord::checked(0, -1, 3, 3), None);
        assert_eq!(GridCoord::checked(3, 0, 3, 3), None);
        assert_eq!(GridCoord::checked(0, 3, 3, 3), None);
        assert_eq!(GridCoord::checked(2, 2, 3, 3), Some(GridCoord::new(2, 2)));
    }

    #[test]
    fn test_all_coords_is_row_major() {
        let indices: Vec<_> = all_coords(4, 3).map(|c| c.index(4)).collect();
        assert_eq!(indices, (0..12).collect::<Vec<_>>());
    }

    proptest! {
        #[test]
        fn index_is_a_bijection(width in 1usize..64, height in 1usize..64) {
            let mut seen = vec![false; width * height];
            for coord in all_coords(width, height) {
                let idx = coord.index(width);
                prop_assert!(idx < width * height);
                prop_assert!(!seen[idx]);
                seen[idx] = true;
                prop_assert_eq!(GridCoord::from_index(idx, width), coord);
            }
            prop_assert!(seen.iter().all(|&s| s));
        }
    }
}
