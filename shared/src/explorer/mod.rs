use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{point::Point, view::ViewParameters};

pub const DEFAULT_CENTER: Point = Point { x: -0.5, y: 0.0 };
pub const DEFAULT_SIZE: f64 = 3.0;
pub const DEFAULT_RESOLUTION: u32 = 1000;
pub const DEFAULT_ITERATIONS: u32 = 100;
pub const MIN_RESOLUTION: u32 = 128;
const MULTIPLIER_STEP: f64 = 0.25;

/// Navigation state of an exploration session.
///
/// Pixel coordinates are grid coordinates: `x` grows with the real part and
/// `y` with the imaginary part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Explorer {
    pub center: Point,
    pub size: f64,
    pub resolution: u32,
    pub base_iterations: u32,
    pub iteration_multiplier: f64,
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLUTION, DEFAULT_ITERATIONS)
    }
}

impl Explorer {
    pub fn new(resolution: u32, base_iterations: u32) -> Self {
        Self {
            center: DEFAULT_CENTER,
            size: DEFAULT_SIZE,
            resolution,
            base_iterations,
            iteration_multiplier: 1.0,
        }
    }

    /// Moves the center onto pixel `(px, py)`.
    pub fn recenter(&mut self, px: f64, py: f64) {
        let resolution = self.resolution as f64;
        let step = self.size / resolution;
        self.center.x += (px - resolution / 2.0) * step;
        self.center.y += (py - resolution / 2.0) * step;
        debug!("Centered on ({}, {})", self.center.x, self.center.y);
    }

    pub fn zoom_in(&mut self, px: f64, py: f64) {
        self.recenter(px, py);
        self.size /= 2.0;
    }

    pub fn zoom_out(&mut self, px: f64, py: f64) {
        self.recenter(px, py);
        self.size *= 2.0;
    }

    pub fn more_iterations(&mut self) {
        self.iteration_multiplier = (self.iteration_multiplier + MULTIPLIER_STEP).max(MULTIPLIER_STEP);
    }

    pub fn fewer_iterations(&mut self) {
        self.iteration_multiplier = (self.iteration_multiplier - MULTIPLIER_STEP).max(MULTIPLIER_STEP);
    }

    pub fn finer(&mut self) {
        self.resolution = self.resolution.saturating_mul(2);
    }

    pub fn coarser(&mut self) {
        self.resolution = self.resolution.div_ceil(2).max(MIN_RESOLUTION);
    }

    /// Iteration bound for the current zoom: the base count times the number
    /// of halvings from the default size (at least one), times the multiplier.
    pub fn iterations(&self) -> u32 {
        let depth = (DEFAULT_SIZE / self.size).log2().round().max(1.0);
        let iterations = (self.base_iterations as f64 * depth * self.iteration_multiplier).round();
        iterations.clamp(1.0, u32::MAX as f64) as u32
    }

    pub fn view(&self) -> ViewParameters {
        ViewParameters::new(self.center, self.size, self.resolution, self.iterations())
    }
}
