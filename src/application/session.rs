use std::time::Instant;

use macroquad::math::Vec2;
use tracing::{debug, error, info};

use super::{HexLayout, Resolver};
use crate::domain::{Automaton, EngineError, GridCoord};
use crate::rendering::{self, Palette, Surface};

/// Whether scheduled frames advance the automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

impl RunState {
    pub const fn is_running(self) -> bool {
        matches!(self, RunState::Running)
    }

    pub const fn toggled(self) -> Self {
        match self {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        }
    }

    /// Label for the play/pause control: the action it will perform
    pub const fn control_label(self) -> &'static str {
        match self {
            RunState::Paused => "RUN",
            RunState::Running => "STOP",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            RunState::Paused => "Paused",
            RunState::Running => "Running",
        }
    }
}

/// User input, already decoupled from whatever produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    TogglePlay,
    SingleStep,
    /// Pointer click at a position in grid-area pixels
    Click(Vec2),
}

/// Session owns the run state and coordinates the engine with the renderer.
///
/// Every handler runs to completion before the next frame reads the
/// snapshot, so input always lands ahead of the next step and redraw.
pub struct Session<E: Automaton> {
    engine: E,
    layout: HexLayout,
    resolver: Resolver,
    palette: Palette,
    run_state: RunState,
    pub last_step_time_ms: f32,
    pub last_render_time_ms: f32,
}

impl<E: Automaton> Session<E> {
    /// Create a paused session around an engine
    pub fn new(engine: E, layout: HexLayout) -> Self {
        Self {
            engine,
            layout,
            resolver: Resolver::default(),
            palette: Palette::default(),
            run_state: RunState::Paused,
            last_step_time_ms: 0.0,
            last_render_time_ms: 0.0,
        }
    }

    /// Set pixel resolution strategy (builder pattern)
    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.run_state = if running { RunState::Running } else { RunState::Paused };
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn layout(&self) -> &HexLayout {
        &self.layout
    }

    pub fn resolver(&self) -> Resolver {
        self.resolver
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state.is_running()
    }

    /// Flip between paused and running
    pub fn toggle_running(&mut self) -> RunState {
        self.run_state = self.run_state.toggled();
        info!(state = self.run_state.name(), "run state changed");
        self.run_state
    }

    /// Toggle the cell under `point`. Clicks off the grid are dropped and
    /// return `Ok(None)`. The change shows up on the next frame.
    pub fn click(&mut self, point: Vec2) -> Result<Option<GridCoord>, EngineError> {
        let (width, height) = (self.engine.width(), self.engine.height());
        let Some(coord) = self.layout.cell_at(point, width, height, self.resolver) else {
            debug!(x = point.x, y = point.y, "click outside the grid ignored");
            return Ok(None);
        };

        if let Err(e) = self.engine.toggle(coord) {
            return Err(self.halt(e));
        }
        debug!(row = coord.row, col = coord.col, "cell toggled");
        Ok(Some(coord))
    }

    /// Advance exactly one generation and redraw, whatever the run state
    pub fn single_step<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), EngineError> {
        self.step()?;
        self.redraw(surface);
        Ok(())
    }

    /// One scheduled cycle: step when running, then always redraw
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), EngineError> {
        if self.run_state.is_running() {
            self.step()?;
        }
        self.redraw(surface);
        Ok(())
    }

    /// Route a command to its handler
    pub fn dispatch<S: Surface + ?Sized>(
        &mut self,
        command: Command,
        surface: &mut S,
    ) -> Result<(), EngineError> {
        match command {
            Command::TogglePlay => {
                self.toggle_running();
            }
            Command::SingleStep => self.single_step(surface)?,
            Command::Click(point) => {
                self.click(point)?;
            }
        }
        Ok(())
    }

    /// Handle a frame's worth of input, then run the scheduled cycle. A
    /// single step already stepped and redrew, so it stands in for the
    /// cycle instead of adding a second generation and redraw.
    pub fn tick<S: Surface + ?Sized>(
        &mut self,
        commands: impl IntoIterator<Item = Command>,
        surface: &mut S,
    ) -> Result<(), EngineError> {
        let mut stepped = false;
        for command in commands {
            stepped |= command == Command::SingleStep;
            self.dispatch(command, surface)?;
        }
        if stepped {
            return Ok(());
        }
        self.frame(surface)
    }

    /// Clear the surface and draw the current snapshot
    pub fn redraw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let start = Instant::now();
        rendering::draw_universe(
            surface,
            &self.layout,
            self.engine.width(),
            self.engine.height(),
            self.engine.snapshot(),
            &self.palette,
        );
        self.last_render_time_ms = start.elapsed().as_secs_f32() * 1000.0;
    }

    fn step(&mut self) -> Result<(), EngineError> {
        let start = Instant::now();
        if let Err(e) = self.engine.step() {
            return Err(self.halt(e));
        }
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        Ok(())
    }

    /// Stop stepping after an engine failure so the display never runs ahead
    /// of a snapshot that failed to update.
    fn halt(&mut self, e: EngineError) -> EngineError {
        self.run_state = RunState::Paused;
        error!(error = %e, "engine failed, halting");
        e
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, HexUniverse};
    use macroquad::color::Color;
    use macroquad::math::vec2;

    #[derive(Default)]
    struct CountingSurface {
        clears: usize,
        hexagons: usize,
        filled: usize,
    }

    impl Surface for CountingSurface {
        fn clear(&mut self, _background: Color) {
            self.clears += 1;
            self.hexagons = 0;
            self.filled = 0;
        }

        fn draw_hexagon(&mut self, _corners: &[Vec2; 6], _stroke: Color, fill: Option<Color>) {
            self.hexagons += 1;
            self.filled += fill.is_some() as usize;
        }
    }

    fn session(width: usize, height: usize) -> Session<HexUniverse> {
        let engine = HexUniverse::new(width, height).unwrap();
        Session::new(engine, HexLayout::new(20.0).unwrap())
    }

    #[test]
    fn test_starts_paused() {
        let session = session(3, 3);
        assert_eq!(session.run_state(), RunState::Paused);
        assert_eq!(session.run_state().control_label(), "RUN");
    }

    #[test]
    fn test_toggle_running_twice_restores_state() {
        let mut session = session(3, 3);
        assert_eq!(session.toggle_running(), RunState::Running);
        assert_eq!(session.run_state().control_label(), "STOP");
        assert_eq!(session.toggle_running(), RunState::Paused);
        assert_eq!(session.engine().generation(), 0);
    }

    #[test]
    fn test_paused_frame_redraws_without_stepping() {
        let mut session = session(3, 3);
        let mut surface = CountingSurface::default();
        session.frame(&mut surface).unwrap();
        assert_eq!(session.engine().generation(), 0);
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.hexagons, 9);
    }

    #[test]
    fn test_running_frame_steps_then_redraws() {
        let mut session = session(3, 3).with_running(true);
        let mut surface = CountingSurface::default();
        session.frame(&mut surface).unwrap();
        session.frame(&mut surface).unwrap();
        assert_eq!(session.engine().generation(), 2);
        assert_eq!(surface.clears, 2);
    }

    #[test]
    fn test_click_toggles_cell_under_pointer() {
        let mut session = session(3, 3);
        let center = session.layout().cell_to_pixel(GridCoord::new(1, 2));
        assert_eq!(session.click(center).unwrap(), Some(GridCoord::new(1, 2)));
        assert_eq!(session.engine().snapshot()[5], Cell::Alive);

        let mut surface = CountingSurface::default();
        session.frame(&mut surface).unwrap();
        assert_eq!(surface.filled, 1);
    }

    #[test]
    fn test_click_off_grid_is_ignored() {
        let mut session = session(3, 3);
        assert_eq!(session.click(vec2(-5.0, -5.0)).unwrap(), None);
        assert_eq!(session.engine().population(), 0);
    }

    #[test]
    fn test_dispatch_routes_commands() {
        let mut session = session(3, 3);
        let mut surface = CountingSurface::default();

        session.dispatch(Command::TogglePlay, &mut surface).unwrap();
        assert!(session.is_running());

        session.dispatch(Command::SingleStep, &mut surface).unwrap();
        assert_eq!(session.engine().generation(), 1);
        assert_eq!(surface.clears, 1);

        let origin = session.layout().cell_to_pixel(GridCoord::new(0, 0));
        session.dispatch(Command::Click(origin), &mut surface).unwrap();
        assert_eq!(session.engine().population(), 1);
    }

    #[test]
    fn test_tick_single_step_replaces_scheduled_cycle() {
        let mut session = session(3, 3).with_running(true);
        let mut surface = CountingSurface::default();

        session.tick([Command::SingleStep], &mut surface).unwrap();
        assert_eq!(session.engine().generation(), 1);
        assert_eq!(surface.clears, 1);

        session.tick([], &mut surface).unwrap();
        assert_eq!(session.engine().generation(), 2);
        assert_eq!(surface.clears, 2);
    }

    #[test]
    fn test_paused_tick_with_click_redraws_once() {
        let mut session = session(3, 3);
        let mut surface = CountingSurface::default();
        let origin = session.layout().cell_to_pixel(GridCoord::new(0, 0));

        session.tick([Command::Click(origin)], &mut surface).unwrap();
        assert_eq!(session.engine().generation(), 0);
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.filled, 1);
    }
}
