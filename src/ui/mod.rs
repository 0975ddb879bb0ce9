mod button;

pub use button::Button;

use crate::application::RunState;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const MIN_WINDOW_HEIGHT: f32 = 450.0;

/// Index of each control in the list built by [`create_buttons`]
pub const PLAY_BUTTON: usize = 0;
pub const TICK_BUTTON: usize = 1;

/// Create the panel buttons. The play button names the action it performs,
/// so its label follows the run state.
pub fn create_buttons(panel_x: f32, run_state: RunState) -> Vec<Button> {
    let x = panel_x + 10.0;
    let width = PANEL_WIDTH - 20.0;
    vec![
        Button::new(x, 20.0, width, BUTTON_HEIGHT, run_state.control_label()),
        Button::new(x, 70.0, width, BUTTON_HEIGHT, "TICK"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_label_follows_run_state() {
        let paused = create_buttons(0.0, RunState::Paused);
        assert_eq!(paused[PLAY_BUTTON].text(), "RUN");
        assert_eq!(paused[TICK_BUTTON].text(), "TICK");

        let running = create_buttons(0.0, RunState::Running);
        assert_eq!(running[PLAY_BUTTON].text(), "STOP");
    }
}
