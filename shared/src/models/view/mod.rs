use complex_rs::complex::Complex;
use serde::{Deserialize, Serialize};

use crate::{
    engine::CHUNK_SIZE,
    error::{result::FractalResult, FractalError},
};

use super::point::Point;

/// A square window on the complex plane sampled at `resolution` pixels per
/// side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewParameters {
    pub center: Point,
    /// Width (and height) of the window in the complex plane.
    pub size: f64,
    pub resolution: u32,
    pub max_iterations: u32,
}

impl ViewParameters {
    pub fn new(center: Point, size: f64, resolution: u32, max_iterations: u32) -> Self {
        Self {
            center,
            size,
            resolution,
            max_iterations,
        }
    }

    pub fn validate(&self) -> FractalResult<()> {
        if !Complex::from(self.center).is_finite() {
            return Err(FractalError::InvalidCenter {
                x: self.center.x,
                y: self.center.y,
            });
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(FractalError::InvalidSize(self.size));
        }
        if (self.resolution as usize) < CHUNK_SIZE {
            return Err(FractalError::InvalidResolution(self.resolution));
        }
        if (self.resolution as usize)
            .checked_mul(self.resolution as usize)
            .is_none()
        {
            return Err(FractalError::InvalidResolution(self.resolution));
        }
        if self.max_iterations == 0 {
            return Err(FractalError::InvalidIterations(self.max_iterations));
        }
        Ok(())
    }

    /// Bottom-left corner of the window.
    pub fn origin(&self) -> Complex {
        let half = self.size / 2.0;
        Complex::from(self.center) - Complex::new(half, half)
    }

    /// Distance between two neighbouring pixels.
    pub fn step(&self) -> f64 {
        self.size / self.resolution as f64
    }
}
