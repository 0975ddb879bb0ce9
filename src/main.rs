use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hex_life::{
    Automaton, CliArgs, Config, HexUniverse, Session, input,
    rendering::{self, MacroquadSurface},
    ui,
};

fn window_conf(config: &Config) -> Conf {
    let size = config.window_size();
    Conf {
        window_title: "Hexagonal Game of Life".to_owned(),
        window_width: size.x.ceil() as i32,
        window_height: size.y.ceil() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_args(CliArgs::parse()).context("Invalid command-line options")?;
    let universe = config.build_universe().context("Failed to create the automaton")?;

    if let Some(generations) = config.headless {
        return run_headless(universe, &config, generations);
    }

    macroquad::Window::from_config(window_conf(&config), run_window(universe, config));
    Ok(())
}

/// Print paced generations to stdout instead of opening a window
fn run_headless(mut universe: HexUniverse, config: &Config, generations: u64) -> Result<()> {
    info!(generations, "running headless");
    println!("generation 0\n{universe}");

    for _ in 0..generations {
        let (outcome, _) = config.pacer.cycle(|| -> Result<()> {
            universe.step().context("Engine failed to step")?;
            println!("generation {}\n{universe}", universe.generation());
            Ok(())
        });
        outcome?;
    }
    Ok(())
}

async fn run_window(universe: HexUniverse, config: Config) {
    let canvas = config.canvas_size();
    let mut surface = MacroquadSurface::new(canvas.x, canvas.y);
    let panel_x = surface.area().w;
    let pacer = config.pacer;
    let mut session = Session::new(universe, config.layout).with_resolver(config.resolver);

    info!(fps = pacer.target_fps(), resolver = session.resolver().name(), "window opened");

    loop {
        let started = Instant::now();
        let mouse_pos = Vec2::from(mouse_position());

        clear_background(DARKGRAY);

        // Input handlers run to completion before this frame's step and redraw
        let buttons = ui::create_buttons(panel_x, session.run_state());
        let commands = input::poll_commands(&buttons, surface.area(), mouse_pos);

        if let Err(e) = session.tick(commands, &mut surface) {
            error!(error = %e, "stopping the render loop");
            break;
        }

        let buttons = ui::create_buttons(panel_x, session.run_state());
        rendering::draw_controls(&session, panel_x, &buttons, mouse_pos);

        pacer.wait(started);
        next_frame().await;
    }
}
