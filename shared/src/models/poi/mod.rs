use serde::Serialize;

use crate::error::{result::FractalResult, FractalError};

use super::{point::Point, view::ViewParameters};

/// A named view worth visiting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointOfInterest {
    pub name: &'static str,
    pub view: ViewParameters,
}

impl PointOfInterest {
    pub fn all() -> [PointOfInterest; 3] {
        [
            PointOfInterest {
                name: "seahorse-spiral",
                view: ViewParameters::new(
                    Point::new(-1.7693831791955150, 0.0042368479187367),
                    3.0 / 2f64.powi(39),
                    1000,
                    2000,
                ),
            },
            PointOfInterest {
                name: "tendrils",
                view: ViewParameters::new(
                    Point::new(-0.01759, 0.64456),
                    3.0 / 2f64.powi(12),
                    1500,
                    3000,
                ),
            },
            PointOfInterest {
                name: "seahorse-valley",
                view: ViewParameters::new(
                    Point::new(-0.759856, 0.125547),
                    3.0 / 2f64.powi(6),
                    1500,
                    600,
                ),
            },
        ]
    }

    pub fn find(name: &str) -> FractalResult<PointOfInterest> {
        Self::all()
            .into_iter()
            .find(|poi| poi.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| FractalError::UnknownPointOfInterest(name.to_string()))
    }
}
