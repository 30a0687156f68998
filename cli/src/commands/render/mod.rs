use std::path::PathBuf;

use clap::Parser;
use shared::{
    env,
    explorer::{DEFAULT_CENTER, DEFAULT_ITERATIONS, DEFAULT_RESOLUTION, DEFAULT_SIZE},
    models::{point::Point, view::ViewParameters},
};

use crate::report::render_view;

#[derive(Parser, Debug)]
pub struct RenderCommand {
    /// Real part of the view center
    #[arg(short, long, allow_hyphen_values = true, default_value_t = DEFAULT_CENTER.x)]
    pub x: f64,

    /// Imaginary part of the view center
    #[arg(short, long, allow_hyphen_values = true, default_value_t = DEFAULT_CENTER.y)]
    pub y: f64,

    /// Width of the view in the complex plane
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    pub size: f64,

    /// Pixels per side
    #[arg(short, long)]
    pub resolution: Option<u32>,

    #[arg(short, long)]
    pub iterations: Option<u32>,

    /// Evaluate every pixel instead of filling uniform chunks
    #[arg(long)]
    pub exact: bool,

    /// Write the grid as JSON
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RenderCommand {
    pub fn view(&self) -> ViewParameters {
        let resolution = match self.resolution {
            Some(resolution) => resolution,
            None => env::get_or(env::RESOLUTION_VAR, DEFAULT_RESOLUTION),
        };
        let iterations = match self.iterations {
            Some(iterations) => iterations,
            None => env::get_or(env::ITERATIONS_VAR, DEFAULT_ITERATIONS),
        };
        ViewParameters::new(Point::new(self.x, self.y), self.size, resolution, iterations)
    }

    pub fn run(self) -> anyhow::Result<()> {
        let view = self.view();
        render_view(&view, self.exact, self.output.as_deref())
    }
}
