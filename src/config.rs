//! Command-line options and their validated form.

use clap::{Parser, ValueEnum};
use macroquad::math::{Vec2, vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::info;

use crate::application::{FramePacer, HexLayout, Resolver};
use crate::domain::{Algorithm, ConwayRule, HexLifeRule, HexUniverse, Rule, SeedsRule};
use crate::ui::{MIN_WINDOW_HEIGHT, PANEL_WIDTH};

/// Largest accepted `--width` or `--height`
pub const MAX_DIMENSION: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Grid {width}x{height} is too large, each side is limited to {MAX_DIMENSION}")]
    GridTooLarge { width: usize, height: usize },

    #[error("Hexagon radius must be a positive number, got {0}")]
    InvalidRadius(f32),

    #[error("Target frame rate must be at least 1, got {0}")]
    InvalidFps(u32),

    #[error("Density must be between 0 and 1, got {0}")]
    InvalidDensity(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RuleArg {
    Conway,
    Hexlife,
    Seeds,
}

impl RuleArg {
    pub fn build(self) -> Box<dyn Rule> {
        match self {
            RuleArg::Conway => Box::new(ConwayRule),
            RuleArg::Hexlife => Box::new(HexLifeRule),
            RuleArg::Seeds => Box::new(SeedsRule),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Serial,
    Parallel,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Serial => Algorithm::Serial,
            AlgorithmArg::Parallel => Algorithm::Parallel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResolverArg {
    Manhattan,
    Euclidean,
}

impl From<ResolverArg> for Resolver {
    fn from(arg: ResolverArg) -> Self {
        match arg {
            ResolverArg::Manhattan => Resolver::Manhattan,
            ResolverArg::Euclidean => Resolver::Euclidean,
        }
    }
}

/// Command-line arguments for launching the visualizer.
#[derive(Debug, Parser)]
#[command(author, version, about = "Game of Life on a hexagonal grid", long_about = None)]
pub struct CliArgs {
    /// Number of columns
    #[arg(long, default_value_t = 20)]
    pub width: usize,

    /// Number of rows
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Hexagon circumradius in pixels
    #[arg(short, long, default_value_t = 20.0)]
    pub radius: f32,

    /// Frame rate cap
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Chance that a cell starts alive
    #[arg(short, long, default_value_t = 0.5)]
    pub density: f64,

    /// Seed for the initial random fill
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = RuleArg::Conway)]
    pub rule: RuleArg,

    #[arg(long, value_enum, default_value_t = AlgorithmArg::Serial)]
    pub algorithm: AlgorithmArg,

    /// How clicks are mapped to cells
    #[arg(long, value_enum, default_value_t = ResolverArg::Euclidean)]
    pub resolver: ResolverArg,

    /// Run this many generations in the terminal instead of opening a window
    #[arg(long, value_name = "GENERATIONS")]
    pub headless: Option<u64>,
}

/// Validated startup configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub layout: HexLayout,
    pub pacer: FramePacer,
    pub density: f64,
    pub seed: u64,
    pub rule: RuleArg,
    pub algorithm: Algorithm,
    pub resolver: Resolver,
    pub headless: Option<u64>,
}

impl Config {
    /// Check the arguments and pick a seed when none was given
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        if args.width > MAX_DIMENSION || args.height > MAX_DIMENSION {
            return Err(ConfigError::GridTooLarge {
                width: args.width,
                height: args.height,
            });
        }
        let layout = HexLayout::new(args.radius).ok_or(ConfigError::InvalidRadius(args.radius))?;
        let pacer = FramePacer::new(args.fps).ok_or(ConfigError::InvalidFps(args.fps))?;
        if !(0.0..=1.0).contains(&args.density) {
            return Err(ConfigError::InvalidDensity(args.density));
        }

        Ok(Self {
            width: args.width,
            height: args.height,
            layout,
            pacer,
            density: args.density,
            seed: args.seed.unwrap_or_else(|| rand::rng().random()),
            rule: args.rule,
            algorithm: args.algorithm.into(),
            resolver: args.resolver.into(),
            headless: args.headless,
        })
    }

    /// Build the engine. Invalid dimensions surface as an engine error.
    pub fn build_universe(&self) -> crate::Result<HexUniverse> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let universe = HexUniverse::randomized(self.width, self.height, self.density, &mut rng)?
            .with_rule(self.rule.build())
            .with_algorithm(self.algorithm);

        info!(
            width = self.width,
            height = self.height,
            seed = self.seed,
            rule = universe.rule().name(),
            algorithm = self.algorithm.name(),
            "universe created"
        );
        Ok(universe)
    }

    /// Size of the grid area in pixels
    pub fn canvas_size(&self) -> Vec2 {
        self.layout.canvas_size(self.width, self.height)
    }

    /// Window size: the grid area plus the control panel
    pub fn window_size(&self) -> Vec2 {
        let canvas = self.canvas_size();
        vec2(canvas.x + PANEL_WIDTH, canvas.y.max(MIN_WINDOW_HEIGHT))
    }
}
