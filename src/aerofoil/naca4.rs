use crate::aerofoil::{CamberLine, CamberStation};
use crate::errors::AeroError;
use ncollide2d::na::Point2;
use std::str::FromStr;

/// Number of points per surface used when the caller does not ask for a
/// specific resolution.
pub const DEFAULT_RESOLUTION: usize = 100;

/// A NACA 4-digit section of the form MPTT, where M is the maximum camber, P
/// is the location of the maximum camber, and TT is the maximum thickness of
/// the aerofoil as a fraction of the chord. For example, a NACA 2412 aerofoil
/// has a 2% camber at 40% of the chord and a max thickness which is 12% of
/// the chord length. All geometry is normalized to a unit chord.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Naca4 {
    max_camber: f64,
    camber_location: f64,
    thickness: f64,
}

impl Naca4 {
    /// Create a section directly from its decoded parameters.
    ///
    /// # Arguments
    ///
    /// * `max_camber` - the maximum camber as a fraction of the chord, for
    /// example on a NACA 2412 this value should be 0.02
    ///
    /// * `camber_location` - the chord fraction where the camber peaks, which
    /// must lie strictly between 0.0 and 1.0. On a NACA 2412 this value
    /// should be 0.4
    ///
    /// * `thickness` - the maximum thickness of the aerofoil as a fraction of
    /// the chord length. For instance, on a NACA 2412 this should be 0.12
    pub fn new(max_camber: f64, camber_location: f64, thickness: f64) -> Result<Naca4, AeroError> {
        if !max_camber.is_finite() || max_camber < 0.0 {
            return Err(AeroError::InvalidParameter(
                "max camber must be finite and not negative",
            ));
        }
        if !camber_location.is_finite() || camber_location <= 0.0 || camber_location >= 1.0 {
            return Err(AeroError::InvalidParameter(
                "camber location must lie strictly between 0 and 1",
            ));
        }
        if !thickness.is_finite() || thickness < 0.0 {
            return Err(AeroError::InvalidParameter(
                "thickness must be finite and not negative",
            ));
        }
        Ok(Naca4 {
            max_camber,
            camber_location,
            thickness,
        })
    }

    /// Decode a 4-digit designation such as "2412" into its section
    /// parameters. Anything other than exactly four ASCII decimal digits is
    /// rejected. A second digit of zero would put the camber peak on the
    /// leading edge and a division by zero in the camber equations, so the
    /// customary substitute location of 0.3 chord is used instead.
    pub fn parse(code: &str) -> Result<Naca4, AeroError> {
        let digits: Vec<u32> = code
            .chars()
            .map(|c| c.to_digit(10))
            .collect::<Option<Vec<u32>>>()
            .ok_or_else(|| AeroError::InvalidCode(code.to_string()))?;
        if digits.len() != 4 {
            return Err(AeroError::InvalidCode(code.to_string()));
        }

        let m = digits[0] as f64 / 100.0;
        let p = if digits[1] > 0 {
            digits[1] as f64 / 10.0
        } else {
            0.3
        };
        let t = (10 * digits[2] + digits[3]) as f64 / 100.0;
        Naca4::new(m, p, t)
    }

    pub fn max_camber(&self) -> f64 {
        self.max_camber
    }

    pub fn camber_location(&self) -> f64 {
        self.camber_location
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Half thickness of the section at a chord fraction, measured
    /// perpendicular to the camber line
    pub fn half_thickness(&self, x: f64) -> f64 {
        5.0 * self.thickness
            * (0.2969 * x.sqrt()
                + -0.1260 * x
                + -0.3516 * x.powf(2.0)
                + 0.2843 * x.powf(3.0)
                + -0.1015 * x.powf(4.0))
    }

    fn camber_angle(&self, x: f64) -> f64 {
        self.camber_slope(x).atan()
    }

    /// The camber point at a chord fraction together with the surface points
    /// above and below it, offset along the local camber normal
    pub fn station(&self, x: f64) -> CamberStation {
        let z = self.camber(x);
        let theta = self.camber_angle(x);
        let yt = self.half_thickness(x);

        CamberStation::new(
            Point2::new(x, z),
            Point2::new(x - yt * theta.sin(), z + yt * theta.cos()),
            Point2::new(x + yt * theta.sin(), z - yt * theta.cos()),
        )
    }

    /// Generates the closed surface outline of the section. The outline runs
    /// along the upper surface from the trailing edge to the leading edge and
    /// back along the lower surface to the trailing edge, with the leading
    /// edge point appearing once, for 2n - 1 points in total.
    ///
    /// # Arguments
    ///
    /// * `resolution` - points per surface, defaulting to
    /// `DEFAULT_RESOLUTION`. Values below 2 are rejected.
    pub fn surface(&self, resolution: Option<usize>) -> Result<Vec<Point2<f64>>, AeroError> {
        let n = resolution.unwrap_or(DEFAULT_RESOLUTION);
        if n < 2 {
            return Err(AeroError::InvalidParameter(
                "surface resolution must be at least 2 points per side",
            ));
        }

        let xs: Vec<f64> = (0..n).map(|i| (n - 1 - i) as f64 / (n - 1) as f64).collect();
        let mut points = Vec::with_capacity(2 * n - 1);
        for &x in &xs {
            points.push(self.station(x).upper);
        }
        for &x in xs.iter().rev().skip(1) {
            points.push(self.station(x).lower);
        }
        Ok(points)
    }
}

impl CamberLine for Naca4 {
    fn camber(&self, x: f64) -> f64 {
        if x <= self.camber_location {
            (self.max_camber / self.camber_location.powf(2.0))
                * (2.0 * self.camber_location * x - x.powf(2.0))
        } else {
            (self.max_camber / (1.0 - self.camber_location).powf(2.0))
                * ((1.0 - 2.0 * self.camber_location) + 2.0 * self.camber_location * x
                    - x.powf(2.0))
        }
    }

    fn camber_slope(&self, x: f64) -> f64 {
        let scale = if x <= self.camber_location {
            self.camber_location.powf(2.0)
        } else {
            (1.0 - self.camber_location).powf(2.0)
        };
        2.0 * self.max_camber * (self.camber_location - x) / scale
    }
}

impl FromStr for Naca4 {
    type Err = AeroError;

    fn from_str(s: &str) -> Result<Naca4, AeroError> {
        Naca4::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use test_case::test_case;

    #[test_case("0012", 0.0, 0.3, 0.12)]
    #[test_case("0006", 0.0, 0.3, 0.06)]
    #[test_case("2412", 0.02, 0.4, 0.12)]
    #[test_case("4409", 0.04, 0.4, 0.09)]
    #[test_case("9901", 0.09, 0.9, 0.01)]
    fn test_parse_decodes_digits(code: &str, m: f64, p: f64, t: f64) {
        let naca = Naca4::parse(code).unwrap();
        assert_eq!(naca.max_camber(), m);
        assert_eq!(naca.camber_location(), p);
        assert_eq!(naca.thickness(), t);
    }

    #[test_case("12a4")]
    #[test_case("123")]
    #[test_case("12345")]
    #[test_case("")]
    #[test_case("24.1")]
    #[test_case(" 2412")]
    #[test_case("-412")]
    #[test_case("٢٤١٢" ; "arabic indic digits")]
    #[test_case("²412" ; "superscript digit")]
    #[test_case("2４12" ; "fullwidth digit")]
    fn test_parse_rejects_malformed_codes(code: &str) {
        let result = Naca4::parse(code);
        assert!(matches!(result, Err(AeroError::InvalidCode(_))));
    }

    #[test_case(0.02, 0.0, 0.12)]
    #[test_case(0.02, 1.0, 0.12)]
    #[test_case(-0.01, 0.4, 0.12)]
    #[test_case(0.02, 0.4, -0.12)]
    #[test_case(f64::NAN, 0.4, 0.12)]
    fn test_new_rejects_out_of_range_parameters(m: f64, p: f64, t: f64) {
        let result = Naca4::new(m, p, t);
        assert!(matches!(result, Err(AeroError::InvalidParameter(_))));
    }

    #[test]
    fn test_from_str_round_trip() {
        let parsed: Naca4 = "2412".parse().unwrap();
        assert_eq!(parsed, Naca4::parse("2412").unwrap());
    }

    #[test_case(1.000000, 0.001260)]
    #[test_case(0.840000, 0.021694)]
    #[test_case(0.680000, 0.038557)]
    #[test_case(0.520000, 0.051635)]
    #[test_case(0.360000, 0.059263)]
    #[test_case(0.200000, 0.057375)]
    #[test_case(0.040000, 0.032277)]
    fn test_naca_4_half_thickness(x: f64, e: f64) {
        let naca = Naca4::parse("0012").unwrap();
        let result = naca.half_thickness(x);
        assert_relative_eq!(e, result, epsilon = 1e-3);
    }

    #[test_case(1.0000, 0.0013)]
    #[test_case(0.9000, 0.0208)]
    #[test_case(0.7000, 0.0518)]
    #[test_case(0.5000, 0.0724)]
    #[test_case(0.3000, 0.0788)]
    #[test_case(0.2000, 0.0726)]
    #[test_case(0.1000, 0.0563)]
    fn test_naca_4_upper_surface(x: f64, e: f64) {
        let naca = Naca4::parse("2412").unwrap();
        let station = naca.station(x);
        assert_relative_eq!(e, station.upper.y, epsilon = 1e-3);
    }

    #[test]
    fn test_camber_peaks_at_its_location() {
        let naca = Naca4::parse("2412").unwrap();
        assert_relative_eq!(naca.camber(0.4), 0.02, epsilon = 1e-12);
        assert_eq!(naca.camber_slope(0.4), 0.0);
    }

    #[test]
    fn test_camber_slope_sign_change() {
        let naca = Naca4::parse("2412").unwrap();
        assert!(naca.camber_slope(0.1) > 0.0);
        assert!(naca.camber_slope(0.9) < 0.0);
    }

    #[test]
    fn test_camber_matches_central_difference() {
        let naca = Naca4::parse("4412").unwrap();
        let h = 1e-6;
        for &x in &[0.05, 0.2, 0.39, 0.41, 0.6, 0.95] {
            let numeric = (naca.camber(x + h) - naca.camber(x - h)) / (2.0 * h);
            assert_abs_diff_eq!(naca.camber_slope(x), numeric, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_symmetric_camber_is_flat() {
        let naca = Naca4::parse("0012").unwrap();
        for &x in &[0.0, 0.1, 0.3, 0.5, 0.9, 1.0] {
            assert_eq!(naca.camber(x), 0.0);
            assert_eq!(naca.camber_slope(x), 0.0);
        }
    }

    #[test_case(2, 3)]
    #[test_case(5, 9)]
    #[test_case(100, 199)]
    fn test_surface_point_count(n: usize, expected: usize) {
        let naca = Naca4::parse("2412").unwrap();
        let points = naca.surface(Some(n)).unwrap();
        assert_eq!(points.len(), expected);
    }

    #[test]
    fn test_surface_default_resolution() {
        let naca = Naca4::parse("0012").unwrap();
        let points = naca.surface(None).unwrap();
        assert_eq!(points.len(), 2 * DEFAULT_RESOLUTION - 1);
    }

    #[test_case(0)]
    #[test_case(1)]
    fn test_surface_rejects_degenerate_resolution(n: usize) {
        let naca = Naca4::parse("0012").unwrap();
        let result = naca.surface(Some(n));
        assert!(matches!(result, Err(AeroError::InvalidParameter(_))));
    }

    #[test]
    fn test_surface_straddles_trailing_edge() {
        let naca = Naca4::parse("2412").unwrap();
        let points = naca.surface(Some(50)).unwrap();
        let first = points.first().unwrap();
        let last = points.last().unwrap();
        assert_abs_diff_eq!(first.x, 1.0, epsilon = 1e-3);
        assert_abs_diff_eq!(last.x, 1.0, epsilon = 1e-3);
        assert!(first.y > 0.0);
        assert!(last.y < 0.0);
        assert_abs_diff_eq!(first.y, -last.y, epsilon = 1e-6);
    }

    #[test]
    fn test_surface_visits_leading_edge_once() {
        let naca = Naca4::parse("2412").unwrap();
        let points = naca.surface(Some(100)).unwrap();
        let at_origin = points.iter().filter(|p| p.x == 0.0).count();
        assert_eq!(at_origin, 1);
        assert_eq!(points[99].x, 0.0);
    }

    #[test]
    fn test_symmetric_surface_mirrors_about_chord() {
        let naca = Naca4::parse("0012").unwrap();
        let points = naca.surface(Some(25)).unwrap();
        let count = points.len();
        for i in 0..25 {
            let up = points[i];
            let lo = points[count - 1 - i];
            assert_eq!(up.x, lo.x);
            assert_abs_diff_eq!(up.y, -lo.y, epsilon = 1e-15);
        }
    }
}
