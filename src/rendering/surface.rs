use macroquad::prelude::*;

/// A drawing target for hexagons.
pub trait Surface {
    /// Wipe the whole surface
    fn clear(&mut self, background: Color);

    /// Stroke a closed outline through `corners`, filling it first when
    /// `fill` is set
    fn draw_hexagon(&mut self, corners: &[Vec2; 6], stroke: Color, fill: Option<Color>);
}

/// Draws into the macroquad window, clipped to the grid area on the left.
pub struct MacroquadSurface {
    area: Rect,
    line_thickness: f32,
}

impl MacroquadSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            area: Rect::new(0.0, 0.0, width, height),
            line_thickness: 1.0,
        }
    }

    pub fn area(&self) -> Rect {
        self.area
    }
}

impl Surface for MacroquadSurface {
    fn clear(&mut self, background: Color) {
        draw_rectangle(self.area.x, self.area.y, self.area.w, self.area.h, background);
    }

    fn draw_hexagon(&mut self, corners: &[Vec2; 6], stroke: Color, fill: Option<Color>) {
        if let Some(fill) = fill {
            // fan from the first corner
            for i in 1..5 {
                draw_triangle(corners[0], corners[i], corners[i + 1], fill);
            }
        }

        for i in 0..6 {
            let (a, b) = (corners[i], corners[(i + 1) % 6]);
            draw_line(a.x, a.y, b.x, b.y, self.line_thickness, stroke);
        }
    }
}
