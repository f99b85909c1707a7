use crate::serialize::Point2f64;
use ncollide2d::na::Point2;
use serde::Serialize;

pub mod naca4;

/// A CamberLine is an entity which can report the position and gradient of an
/// aerofoil mean line at fractions of the chord. This is all the information
/// the thin-aerofoil solver needs; section generators implement it alongside
/// their thickness distributions.
pub trait CamberLine {
    /// Height of the camber line above the chord at a fraction from 0.0 to 1.0,
    /// as a fraction of the chord length
    fn camber(&self, x: f64) -> f64;

    /// Gradient dz/dx of the camber line at a fraction from 0.0 to 1.0
    fn camber_slope(&self, x: f64) -> f64;
}

/// The camber point at a single chord fraction together with the upper and
/// lower surface points, each offset half a thickness along the local camber
/// normal.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CamberStation {
    #[serde(with = "Point2f64")]
    pub camber: Point2<f64>,

    #[serde(with = "Point2f64")]
    pub upper: Point2<f64>,

    #[serde(with = "Point2f64")]
    pub lower: Point2<f64>,
}

impl CamberStation {
    pub fn new(camber: Point2<f64>, upper: Point2<f64>, lower: Point2<f64>) -> CamberStation {
        CamberStation {
            camber,
            upper,
            lower,
        }
    }

    /// Full section thickness at this station, measured between the surfaces
    pub fn thickness(&self) -> f64 {
        (self.upper - self.lower).norm()
    }
}
