use std::f32::consts::FRAC_PI_3;

use macroquad::math::{Vec2, vec2};

use crate::domain::GridCoord;

/// Extra pixels around the canvas so outline strokes are not clipped
pub const STROKE_MARGIN: f32 = 2.0;

/// How a pixel is resolved back to a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Resolver {
    /// Score floor/ceil row candidates by Manhattan distance between the
    /// continuous estimates and their rounded values. Cheap, but can pick the
    /// wrong cell right next to a hexagon's slanted sides.
    Manhattan,
    /// Pick the nearest of the surrounding hex centers. Exact.
    #[default]
    Euclidean,
}

impl Resolver {
    pub fn name(&self) -> &'static str {
        match self {
            Resolver::Manhattan => "Manhattan",
            Resolver::Euclidean => "Euclidean",
        }
    }
}

/// Layout of a pointy-top hex tiling with odd rows shifted right.
///
/// Every measurement derives from the circumradius; there is no way to set
/// the other constants independently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexLayout {
    radius: f32,
    inradius: f32,
}

impl HexLayout {
    /// Returns `None` unless `radius` is finite and positive
    pub fn new(radius: f32) -> Option<Self> {
        (radius.is_finite() && radius > 0.0).then(|| Self {
            radius,
            inradius: radius * FRAC_PI_3.sin(),
        })
    }

    /// Center to corner distance `R`
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Center to flat side distance `r = R·sin(60°)`
    pub const fn inradius(&self) -> f32 {
        self.inradius
    }

    /// Horizontal distance between neighbors in one row
    pub fn column_pitch(&self) -> f32 {
        2.0 * self.inradius
    }

    /// Vertical distance between row centers
    pub fn row_pitch(&self) -> f32 {
        1.5 * self.radius
    }

    /// Horizontal shift applied to odd rows
    pub fn odd_row_offset(&self) -> f32 {
        self.inradius
    }

    fn parity_offset(&self, row: i64) -> f32 {
        row.rem_euclid(2) as f32 * self.odd_row_offset()
    }

    /// Pixel center of a cell. Row 0's top corner touches `y = 0` and column
    /// 0's left side touches `x = 0`.
    pub fn cell_to_pixel(&self, coord: GridCoord) -> Vec2 {
        self.center_of(coord.row as i64, coord.col as i64)
    }

    fn center_of(&self, row: i64, col: i64) -> Vec2 {
        let x = self.inradius + col as f32 * self.column_pitch() + self.parity_offset(row);
        let y = self.radius + row as f32 * self.row_pitch();
        vec2(x, y)
    }

    /// The six outline points around a center, corner `i` at `60°·i`
    /// measured from straight down.
    pub fn corners(&self, center: Vec2) -> [Vec2; 6] {
        std::array::from_fn(|i| {
            let angle = FRAC_PI_3 * i as f32;
            center + vec2(self.radius * angle.sin(), self.radius * angle.cos())
        })
    }

    /// Canvas size that fits a `width × height` grid
    pub fn canvas_size(&self, width: usize, height: usize) -> Vec2 {
        let w = width as f32 * self.column_pitch() + self.odd_row_offset();
        let h = 2.0 * self.radius + height.saturating_sub(1) as f32 * self.row_pitch();
        vec2(w + STROKE_MARGIN, h + STROKE_MARGIN)
    }

    /// Resolve a pixel to an unchecked `(row, col)` pair. The result may be
    /// negative or past the grid edge.
    pub fn pixel_to_cell(&self, point: Vec2, resolver: Resolver) -> (i64, i64) {
        match resolver {
            Resolver::Manhattan => self.resolve_manhattan(point),
            Resolver::Euclidean => self.resolve_euclidean(point),
        }
    }

    /// Resolve a pixel to a cell inside `width × height`, or `None`
    pub fn cell_at(
        &self,
        point: Vec2,
        width: usize,
        height: usize,
        resolver: Resolver,
    ) -> Option<GridCoord> {
        let (row, col) = self.pixel_to_cell(point, resolver);
        GridCoord::checked(row, col, width, height)
    }

    fn row_estimate(&self, y: f32) -> f32 {
        (y - self.radius) / self.row_pitch()
    }

    fn column_estimate(&self, x: f32, row: i64) -> f32 {
        (x - self.inradius - self.parity_offset(row)) / self.column_pitch()
    }

    fn resolve_manhattan(&self, point: Vec2) -> (i64, i64) {
        let ry = self.row_estimate(point.y);

        let score = |row: f32| {
            let row_i = row as i64;
            let rx = self.column_estimate(point.x, row_i);
            let col = rx.round();
            let distance = (row - ry).abs() + (col - rx).abs();
            ((row_i, col as i64), distance)
        };

        let (top, d_top) = score(ry.floor());
        let (bottom, d_bottom) = score(ry.ceil());

        // ties go to the top row
        if d_top <= d_bottom { top } else { bottom }
    }

    fn resolve_euclidean(&self, point: Vec2) -> (i64, i64) {
        let top = self.row_estimate(point.y).floor() as i64;

        let mut best = (top, 0);
        let mut best_distance = f32::INFINITY;
        for row in [top, top + 1] {
            let left = self.column_estimate(point.x, row).floor() as i64;
            for col in [left, left + 1] {
                let distance = self.center_of(row, col).distance_squared(point);
                if distance < best_distance {
                    best = (row, col);
                    best_distance = distance;
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn layout() -> HexLayout {
        HexLayout::new(20.0).unwrap()
    }

    #[test]
    fn test_rejects_bad_radius() {
        assert!(HexLayout::new(0.0).is_none());
        assert!(HexLayout::new(-3.0).is_none());
        assert!(HexLayout::new(f32::NAN).is_none());
        assert!(HexLayout::new(f32::INFINITY).is_none());
    }

    #[test]
    fn test_derived_constants() {
        let layout = layout();
        assert!((layout.inradius() - 17.320_508).abs() < 1e-4);
        assert_eq!(layout.row_pitch(), 30.0);
        assert_eq!(layout.column_pitch(), 2.0 * layout.inradius());
        assert_eq!(layout.odd_row_offset(), layout.inradius());
    }

    #[test]
    fn test_origin_cell_center() {
        let layout = layout();
        let center = layout.cell_to_pixel(GridCoord::new(0, 0));
        assert_eq!(center, vec2(layout.inradius(), layout.radius()));

        for resolver in [Resolver::Manhattan, Resolver::Euclidean] {
            assert_eq!(layout.cell_at(center, 3, 3, resolver), Some(GridCoord::new(0, 0)));
        }
    }

    #[test]
    fn test_odd_row_is_shifted() {
        let layout = layout();
        let even = layout.cell_to_pixel(GridCoord::new(0, 1));
        let odd = layout.cell_to_pixel(GridCoord::new(1, 1));
        assert!((odd.x - even.x - layout.inradius()).abs() < 1e-4);
        assert!((odd.y - even.y - 30.0).abs() < 1e-4);

        for resolver in [Resolver::Manhattan, Resolver::Euclidean] {
            assert_eq!(layout.cell_at(odd, 3, 3, resolver), Some(GridCoord::new(1, 1)));
        }
    }

    #[test]
    fn test_manhattan_tie_goes_to_top_row() {
        let layout = layout();
        // ry = 0.25, even row rx = 0.5, odd row rx = 0.0; both score 0.75
        let point = vec2(2.0 * layout.inradius(), 27.5);
        assert_eq!(layout.pixel_to_cell(point, Resolver::Manhattan), (0, 1));
    }

    #[test]
    fn test_outside_pixels_are_rejected() {
        let layout = layout();
        for resolver in [Resolver::Manhattan, Resolver::Euclidean] {
            assert_eq!(layout.cell_at(vec2(-5.0, -5.0), 3, 3, resolver), None);
            assert_eq!(layout.cell_at(vec2(1000.0, 30.0), 3, 3, resolver), None);
            assert_eq!(layout.cell_at(vec2(30.0, 1000.0), 3, 3, resolver), None);
        }
    }

    #[test]
    fn test_euclidean_near_slanted_side() {
        let layout = layout();
        // Just inside the lower-left side of (0, 1), close to where (1, 0) begins
        let center = layout.cell_to_pixel(GridCoord::new(0, 1));
        let corner_a = layout.corners(center)[0];
        let corner_b = layout.corners(center)[5];
        let side_mid = (corner_a + corner_b) / 2.0;
        let inside = side_mid + (center - side_mid) * 0.05;
        assert_eq!(layout.pixel_to_cell(inside, Resolver::Euclidean), (0, 1));

        let outside = side_mid - (center - side_mid) * 0.05;
        assert_ne!(layout.pixel_to_cell(outside, Resolver::Euclidean), (0, 1));
    }

    #[test]
    fn test_corners_are_on_the_circumcircle() {
        let layout = layout();
        let center = vec2(50.0, 60.0);
        let corners = layout.corners(center);
        assert!(corners.iter().all(|c| (c.distance(center) - 20.0).abs() < 1e-3));
        // pointy top: corner 3 is straight above the center
        assert!((corners[3].x - center.x).abs() < 1e-3);
        assert!((corners[3].y - (center.y - 20.0)).abs() < 1e-3);
    }

    #[test]
    fn test_canvas_fits_last_cell() {
        let layout = layout();
        let size = layout.canvas_size(3, 3);
        let last = layout.cell_to_pixel(GridCoord::new(1, 2));
        assert!(last.x + layout.inradius() <= size.x);
        let bottom = layout.cell_to_pixel(GridCoord::new(2, 0));
        assert!(bottom.y + layout.radius() <= size.y);
    }

    proptest! {
        #[test]
        fn centers_round_trip(row in 0usize..400, col in 0usize..400, radius in 4.0f32..60.0) {
            let layout = HexLayout::new(radius).unwrap();
            let coord = GridCoord::new(row, col);
            let center = layout.cell_to_pixel(coord);
            for resolver in [Resolver::Manhattan, Resolver::Euclidean] {
                prop_assert_eq!(layout.cell_at(center, 400, 400, resolver), Some(coord));
            }
        }

        #[test]
        fn euclidean_resolves_points_inside_the_inscribed_circle(
            row in 0usize..50,
            col in 0usize..50,
            angle in 0.0f32..std::f32::consts::TAU,
            fraction in 0.0f32..0.95,
        ) {
            let layout = layout();
            let coord = GridCoord::new(row, col);
            let center = layout.cell_to_pixel(coord);
            let offset = vec2(angle.cos(), angle.sin()) * layout.inradius() * fraction;
            prop_assert_eq!(
                layout.cell_at(center + offset, 50, 50, Resolver::Euclidean),
                Some(coord)
            );
        }
    }
}
