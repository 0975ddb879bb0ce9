//! Performance benchmark for stepping and redrawing the hex universe

use std::time::Instant;

use anyhow::{Context, Result};
use hex_life::domain::{Algorithm, HexLifeRule};
use hex_life::rendering::{Palette, Surface, draw_universe};
use hex_life::{Automaton, HexLayout, HexUniverse};
use macroquad::color::Color;
use macroquad::math::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Surface that only counts what it is asked to draw
#[derive(Default)]
struct CountingSurface {
    hexagons: usize,
}

impl Surface for CountingSurface {
    fn clear(&mut self, _background: Color) {}

    fn draw_hexagon(&mut self, _corners: &[Vec2; 6], _stroke: Color, _fill: Option<Color>) {
        self.hexagons += 1;
    }
}

fn universe(size: usize, algorithm: Algorithm) -> Result<HexUniverse> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    Ok(HexUniverse::randomized(size, size, 0.5, &mut rng)?
        .with_rule(Box::new(HexLifeRule))
        .with_algorithm(algorithm))
}

fn benchmark_step(size: usize, algorithm: Algorithm, iterations: u32) -> Result<f64> {
    let mut universe = universe(size, algorithm)?;

    let start = Instant::now();
    for _ in 0..iterations {
        universe.step()?;
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn benchmark_redraw(size: usize, iterations: u32) -> Result<f64> {
    let universe = universe(size, Algorithm::Serial)?;
    let layout = HexLayout::new(20.0).context("invalid hexagon radius")?;
    let palette = Palette::default();
    let mut surface = CountingSurface::default();

    let start = Instant::now();
    for _ in 0..iterations {
        draw_universe(&mut surface, &layout, size, size, universe.snapshot(), &palette);
    }
    let elapsed = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    assert_eq!(surface.hexagons, size * size * iterations as usize);
    Ok(elapsed)
}

fn main() -> Result<()> {
    println!("=== Hex Life Performance Benchmark ===\n");

    let sizes = [20, 100, 500, 1000, 2000];
    let iterations = 20;

    println!(
        "{:>10} {:>12} {:>12} {:>10} {:>12}",
        "Size", "Serial", "Parallel", "Speedup", "Redraw"
    );
    println!("{:-<60}", "");

    for size in sizes {
        let serial_ms = benchmark_step(size, Algorithm::Serial, iterations)?;
        let parallel_ms = benchmark_step(size, Algorithm::Parallel, iterations)?;
        let redraw_ms = benchmark_redraw(size, iterations.min(5))?;

        println!(
            "{:>10} {:>12.3} {:>12.3} {:>9.1}x {:>12.3}",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms,
            redraw_ms
        );
    }

    println!("\nAll timings are milliseconds per generation or per full redraw.");
    Ok(())
}
