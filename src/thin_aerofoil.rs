use crate::aerofoil::CamberLine;
use crate::errors::AeroError;
use crate::quadrature::{adaptive_simpson, QuadParams};
use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::{Mutex, MutexGuard};

/// Number of Fourier terms used for the vortex sheet when the caller does
/// not specify a truncation order.
pub const DEFAULT_SERIES_TERMS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CoeffKey {
    alpha_bits: u64,
    nmax: usize,
}

/// Thin-aerofoil solution for a camber line: the Fourier series of the bound
/// vortex sheet which satisfies the fundamental equation of thin-aerofoil
/// theory and the Kutta condition.
///
/// All integrals run over the Glauert angle θ, where the chord fraction is
/// x = (1 - cos θ) / 2. Substituting the angle into the fundamental equation
/// removes the 1/sin θ weight analytically, so the quadrature only ever sees
/// smooth integrands. Angles are radians and speeds are unit-free; results
/// are per unit chord and unit span.
pub struct ThinAerofoil<C: CamberLine> {
    camber: C,
    quad: QuadParams,
    cache: Option<Mutex<HashMap<CoeffKey, Vec<f64>>>>,
}

impl<C: CamberLine> ThinAerofoil<C> {
    pub fn new(camber: C) -> ThinAerofoil<C> {
        ThinAerofoil::with_params(camber, QuadParams::default())
    }

    pub fn with_params(camber: C, quad: QuadParams) -> ThinAerofoil<C> {
        ThinAerofoil {
            camber,
            quad,
            cache: None,
        }
    }

    /// Turns on caching of coefficient vectors, keyed on the exact bit
    /// pattern of the angle of attack and the truncation order. Useful when
    /// sweeping the vortex sheet, which reuses one long coefficient vector
    /// at many chord positions.
    pub fn memoized(mut self) -> ThinAerofoil<C> {
        self.cache = Some(Mutex::new(HashMap::new()));
        self
    }

    pub fn camber(&self) -> &C {
        &self.camber
    }

    fn slope_at_theta(&self, theta: f64) -> f64 {
        self.camber.camber_slope(0.5 * (1.0 - theta.cos()))
    }

    /// Fourier coefficients A0..A(nmax) of the vortex sheet series at an
    /// angle of attack. A truncation order of zero yields just A0.
    pub fn fourier_coefficients(&self, alpha: f64, nmax: usize) -> Result<Vec<f64>, AeroError> {
        let key = CoeffKey {
            alpha_bits: alpha.to_bits(),
            nmax,
        };
        if let Some(cache) = &self.cache {
            if let Some(hit) = lock(cache).get(&key) {
                return Ok(hit.clone());
            }
        }

        let mut an = Vec::with_capacity(nmax + 1);
        let mean_slope = adaptive_simpson(|t| self.slope_at_theta(t), 0.0, PI, &self.quad)?;
        an.push(alpha - mean_slope / PI);
        for n in 1..=nmax {
            let weighted = adaptive_simpson(
                |t| self.slope_at_theta(t) * (n as f64 * t).cos(),
                0.0,
                PI,
                &self.quad,
            )?;
            an.push(2.0 * weighted / PI);
        }

        if let Some(cache) = &self.cache {
            lock(cache).entry(key).or_insert_with(|| an.clone());
        }
        Ok(an)
    }

    /// The angle of attack at which the section generates no lift. Zero for
    /// a symmetric section, negative for positive camber.
    pub fn zero_lift_angle(&self) -> Result<f64, AeroError> {
        let weighted = adaptive_simpson(
            |t| self.slope_at_theta(t) * (1.0 - t.cos()),
            0.0,
            PI,
            &self.quad,
        )?;
        Ok(weighted / PI)
    }

    pub fn lift_coefficient(&self, alpha: f64) -> Result<f64, AeroError> {
        let an = self.fourier_coefficients(alpha, 1)?;
        Ok(2.0 * PI * (an[0] + an[1] / 2.0))
    }

    /// Pitching moment coefficient about the leading edge, nose-up positive
    pub fn moment_coefficient_le(&self, alpha: f64) -> Result<f64, AeroError> {
        let an = self.fourier_coefficients(alpha, 2)?;
        Ok(-PI / 2.0 * (an[0] + an[1] - an[2] / 2.0))
    }

    /// Pitching moment coefficient about a chordwise reference point,
    /// transferred from the leading edge through the lift. At the quarter
    /// chord the result does not vary with angle of attack.
    pub fn moment_coefficient(&self, alpha: f64, x_ref: f64) -> Result<f64, AeroError> {
        let an = self.fourier_coefficients(alpha, 2)?;
        let cl = 2.0 * PI * (an[0] + an[1] / 2.0);
        let cm_le = -PI / 2.0 * (an[0] + an[1] - an[2] / 2.0);
        Ok(cm_le + x_ref * cl)
    }

    /// Local strength γ(x) of the bound vortex sheet at a chord fraction.
    ///
    /// The leading A0 term carries cot(θ/2), which vanishes at the trailing
    /// edge (the Kutta condition) and is unbounded at the leading edge, where
    /// a lifting solution genuinely blows up.
    ///
    /// # Arguments
    ///
    /// * `x` - chord fraction in [0, 1]
    ///
    /// * `freestream` - free-stream speed, which must not be negative
    ///
    /// * `alpha` - angle of attack in radians
    ///
    /// * `nmax` - series truncation order, defaulting to
    /// `DEFAULT_SERIES_TERMS`
    pub fn vortex_sheet_strength(
        &self,
        x: f64,
        freestream: f64,
        alpha: f64,
        nmax: Option<usize>,
    ) -> Result<f64, AeroError> {
        if !(0.0..=1.0).contains(&x) {
            return Err(AeroError::InvalidParameter(
                "chord fraction must lie in [0, 1]",
            ));
        }
        if !freestream.is_finite() || freestream < 0.0 {
            return Err(AeroError::InvalidParameter(
                "free-stream speed must be finite and not negative",
            ));
        }

        let an = self.fourier_coefficients(alpha, nmax.unwrap_or(DEFAULT_SERIES_TERMS))?;
        let theta = (1.0 - 2.0 * x).acos();
        let le_term = if theta == 0.0 {
            // At the leading edge the series limit is ±∞ unless A0 vanishes
            if an[0] == 0.0 {
                0.0
            } else {
                f64::INFINITY * an[0].signum()
            }
        } else {
            an[0] * (0.5 * theta).cos() / (0.5 * theta).sin()
        };

        let mut strength = le_term;
        for (n, a) in an.iter().enumerate().skip(1) {
            strength += a * (n as f64 * theta).sin();
        }
        Ok(2.0 * freestream * strength)
    }

    /// Total bound circulation of the vortex sheet, per unit chord and span
    pub fn circulation(&self, freestream: f64, alpha: f64) -> Result<f64, AeroError> {
        if !freestream.is_finite() || freestream < 0.0 {
            return Err(AeroError::InvalidParameter(
                "free-stream speed must be finite and not negative",
            ));
        }
        let an = self.fourier_coefficients(alpha, 1)?;
        Ok(PI * freestream * (an[0] + an[1] / 2.0))
    }
}

fn lock<'a>(
    cache: &'a Mutex<HashMap<CoeffKey, Vec<f64>>>,
) -> MutexGuard<'a, HashMap<CoeffKey, Vec<f64>>> {
    // Entries are only ever inserted whole, so a poisoned map is still valid
    cache.lock().unwrap_or_else(|e| e.into_inner())
}
