pub mod result;

use std::fmt;

#[derive(Debug)]
pub enum FractalError {
    InvalidResolution(u32),
    InvalidIterations(u32),
    InvalidSize(f64),
    InvalidCenter { x: f64, y: f64 },
    UnknownPointOfInterest(String),
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractalError::InvalidResolution(resolution) => write!(
                f,
                "resolution {} is not supported, it must be at least 10 pixels per side",
                resolution
            ),
            FractalError::InvalidIterations(iterations) => write!(
                f,
                "{} is below the minimum of 1 iteration",
                iterations
            ),
            FractalError::InvalidSize(size) => {
                write!(f, "view size {} must be finite and strictly positive", size)
            }
            FractalError::InvalidCenter { x, y } => {
                write!(f, "view center ({}, {}) must be finite", x, y)
            }
            FractalError::UnknownPointOfInterest(name) => {
                write!(f, "no point of interest named '{}'", name)
            }
        }
    }
}

impl std::error::Error for FractalError {}

#[cfg(test)]
mod tests {
    use super::FractalError;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            FractalError::InvalidIterations(0).to_string(),
            "0 is below the minimum of 1 iteration"
        );
        assert!(FractalError::InvalidResolution(7).to_string().contains('7'));
        assert!(FractalError::UnknownPointOfInterest("atlantis".into())
            .to_string()
            .contains("atlantis"));
    }
}
