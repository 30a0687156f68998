use complex_rs::complex::Complex;

use crate::{error::result::FractalResult, models::view::ViewParameters};

/// Everything the escape-time loop needs, derived once per rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeContext {
    origin: Complex,
    step: f64,
    max_iterations: u32,
    resolution: usize,
}

impl EscapeContext {
    pub fn new(view: &ViewParameters) -> FractalResult<Self> {
        view.validate()?;
        Ok(Self {
            origin: view.origin(),
            step: view.step(),
            max_iterations: view.max_iterations,
            resolution: view.resolution as usize,
        })
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Point of the complex plane sampled by pixel `(x, y)`.
    pub fn point(&self, x: usize, y: usize) -> Complex {
        self.origin + Complex::new(x as f64, y as f64) * self.step
    }

    /// Number of iterations of `z <- z² + c` before `|z|² > 4`, modulo
    /// `max_iterations`. Points that never escape map to 0.
    pub fn escape_time(&self, x: usize, y: usize) -> u32 {
        let c = self.point(x, y);
        let (x0, y0) = (c.re, c.im);

        let mut x = 0.0;
        let mut y = 0.0;
        let mut x2 = 0.0;
        let mut y2 = 0.0;
        let mut count = 0;
        while x2 + y2 <= 4.0 && count < self.max_iterations {
            y = 2.0 * x * y + y0;
            x = x2 - y2 + x0;
            x2 = x * x;
            y2 = y * y;
            count += 1;
        }

        count % self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::point::Point;

    /// A 10x10 view whose pixel `(x, y)` samples `c = (x - 5, y - 5)`.
    fn unit_context(max_iterations: u32) -> EscapeContext {
        let view = ViewParameters::new(Point::new(0.0, 0.0), 10.0, 10, max_iterations);
        EscapeContext::new(&view).unwrap()
    }

    #[test]
    fn pixels_map_onto_the_plane() {
        let context = unit_context(10);
        assert_eq!(context.point(0, 0), Complex::new(-5.0, -5.0));
        assert_eq!(context.point(5, 5), Complex::new(0.0, 0.0));
        assert_eq!(context.point(7, 7), Complex::new(2.0, 2.0));
    }

    #[test]
    fn origin_never_escapes() {
        for max_iterations in [1, 2, 100, 1000] {
            assert_eq!(unit_context(max_iterations).escape_time(5, 5), 0);
        }
    }

    #[test]
    fn two_plus_two_i_escapes_on_first_iteration() {
        assert_eq!(unit_context(100).escape_time(7, 7), 1);
    }

    #[test]
    fn escape_on_last_iteration_wraps_to_zero() {
        // (2, 2) escapes after exactly one iteration
        assert_eq!(unit_context(1).escape_time(7, 7), 0);
    }

    #[test]
    fn points_outside_radius_two_escape() {
        for max_iterations in [1, 2, 3, 50] {
            let context = unit_context(max_iterations);
            for y in 0..10 {
                for x in 0..10 {
                    let c = context.point(x, y);
                    if c.arg_sq() > 4.0 {
                        assert!(context.escape_time(x, y) < max_iterations);
                        if max_iterations > 1 {
                            assert_eq!(context.escape_time(x, y), 1, "c = {:?}", c);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn minus_one_is_periodic() {
        // c = -1 cycles between 0 and -1
        assert_eq!(unit_context(500).escape_time(4, 5), 0);
    }

    #[test]
    fn slow_escape_near_the_boundary() {
        // c = 0.26 lies just outside the cusp of the main cardioid
        let view = ViewParameters::new(Point::new(0.26, 0.0), 1.0, 10, 1000);
        let context = EscapeContext::new(&view).unwrap();
        let count = context.escape_time(5, 5);
        assert!(count > 10 && count < 1000, "count = {}", count);
    }

    #[test]
    fn invalid_views_are_rejected() {
        let view = ViewParameters::new(Point::new(0.0, 0.0), 4.0, 100, 0);
        assert!(EscapeContext::new(&view).is_err());
    }
}
