use macroquad::prelude::*;

use crate::application::{HexLayout, Session};
use crate::domain::{Automaton, Cell, all_coords};
use crate::ui::{Button, PANEL_WIDTH};

mod surface;

pub use surface::{MacroquadSurface, Surface};

/// Colors used to draw the grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub grid: Color,
    pub alive: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: WHITE,
            grid: Color::from_rgba(0xCC, 0xCC, 0xCC, 255),
            alive: Color::from_rgba(0x1C, 0x1C, 0x1C, 255),
        }
    }
}

/// Clear the surface and draw every cell as a hexagon, filled when alive.
///
/// `snapshot` is row-major and `width * height` long.
pub fn draw_universe<S: Surface + ?Sized>(
    surface: &mut S,
    layout: &HexLayout,
    width: usize,
    height: usize,
    snapshot: &[Cell],
    palette: &Palette,
) {
    surface.clear(palette.background);

    for (coord, cell) in all_coords(width, height).zip(snapshot) {
        let corners = layout.corners(layout.cell_to_pixel(coord));
        let fill = cell.is_alive().then_some(palette.alive);
        surface.draw_hexagon(&corners, palette.grid, fill);
    }
}

/// Draw control panel background
fn draw_panel_background(x: f32) {
    draw_rectangle(x, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel with buttons and session info
pub fn draw_controls<E: Automaton>(
    session: &Session<E>,
    panel_x: f32,
    buttons: &[Button],
    mouse_pos: Vec2,
) {
    draw_panel_background(panel_x);

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x + 10.0;
    let engine = session.engine();
    let running = session.is_running();

    let status_color = if running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let labels = [
        ("Status:".to_string(), 150.0, 16.0, WHITE),
        (session.run_state().name().to_string(), 170.0, 16.0, status_color),
        ("Generation:".to_string(), 205.0, 16.0, WHITE),
        (engine.generation().to_string(), 225.0, 20.0, Color::from_rgba(0, 255, 150, 255)),
        (format!("Grid: {}x{}", engine.width(), engine.height()), 255.0, 13.0, GRAY),
        (format!("Alive: {}", engine.population()), 272.0, 13.0, GRAY),
        (format!("Step: {:.2}ms", session.last_step_time_ms), 300.0, 13.0, GRAY),
        (format!("Render: {:.2}ms", session.last_render_time_ms), 317.0, 13.0, GRAY),
        (format!("FPS: {}", get_fps()), 334.0, 13.0, GRAY),
        (format!("Picking: {}", session.resolver().name()), 351.0, 13.0, GRAY),
        ("Controls:".to_string(), 385.0, 14.0, WHITE),
        ("LMB: Toggle cell".to_string(), 400.0, 12.0, GRAY),
        ("Space: Run/Stop".to_string(), 413.0, 12.0, GRAY),
        ("N / Right: Tick".to_string(), 426.0, 12.0, GRAY),
    ];

    labels.iter().for_each(|(text, y, size, color)| {
        draw_text_label(text, px, *y, *size, *color);
    });
}
