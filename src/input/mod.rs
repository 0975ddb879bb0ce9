use macroquad::prelude::*;

use crate::application::Command;
use crate::ui::{Button, PLAY_BUTTON, TICK_BUTTON};

/// Collect this frame's keyboard commands
pub fn process_keyboard_input() -> Vec<Command> {
    let bindings: [(KeyCode, Command); 3] = [
        (KeyCode::Space, Command::TogglePlay),
        (KeyCode::N, Command::SingleStep),
        (KeyCode::Right, Command::SingleStep),
    ];

    bindings
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| *command)
        .collect()
}

/// Collect this frame's panel button commands
pub fn process_button_clicks(buttons: &[Button], mouse_pos: Vec2) -> Vec<Command> {
    buttons
        .iter()
        .enumerate()
        .filter(|(_, btn)| btn.is_clicked(mouse_pos))
        .filter_map(|(idx, _)| match idx {
            PLAY_BUTTON => Some(Command::TogglePlay),
            TICK_BUTTON => Some(Command::SingleStep),
            _ => None,
        })
        .collect()
}

/// A left click over the grid area becomes a cell toggle
pub fn process_grid_click(grid_area: Rect, mouse_pos: Vec2) -> Option<Command> {
    (is_mouse_button_pressed(MouseButton::Left) && grid_area.contains(mouse_pos))
        .then(|| Command::Click(mouse_pos - grid_area.point()))
}

/// All commands for this frame, in the order they should run
pub fn poll_commands(buttons: &[Button], grid_area: Rect, mouse_pos: Vec2) -> Vec<Command> {
    let mut commands = process_button_clicks(buttons, mouse_pos);
    commands.extend(process_grid_click(grid_area, mouse_pos));
    commands.extend(process_keyboard_input());
    commands
}
