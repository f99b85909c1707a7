use crate::aerofoil::CamberLine;
use crate::errors::AeroError;
use crate::thin_aerofoil::ThinAerofoil;
use serde::Serialize;

/// Half width of the central difference used to estimate coefficient slopes
/// against angle of attack, in radians (about a hundredth of a degree)
const ALPHA_STEP: f64 = 1.745e-4;

/// Lift coefficient at one angle of attack
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LiftSample {
    pub alpha: f64,
    pub cl: f64,
}

/// Pitching moment slope dCm/dα at one chordwise reference point
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MomentSlopeSample {
    pub x: f64,
    pub cm_alpha: f64,
}

/// The reference point about which the pitching moment does not change with
/// angle of attack, and the moment coefficient held there
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AerodynamicCentre {
    pub x: f64,
    pub cm: f64,
}

/// Lift coefficient across a sweep of angles of attack, in radians
pub fn lift_curve<C: CamberLine>(
    foil: &ThinAerofoil<C>,
    alphas: &[f64],
) -> Result<Vec<LiftSample>, AeroError> {
    alphas
        .iter()
        .map(|&alpha| {
            Ok(LiftSample {
                alpha,
                cl: foil.lift_coefficient(alpha)?,
            })
        })
        .collect()
}

/// Moment slope dCm/dα at each of a set of chordwise reference points. The
/// slope runs linearly from -π/2 at the leading edge through zero at the
/// quarter chord.
pub fn moment_slope_curve<C: CamberLine>(
    foil: &ThinAerofoil<C>,
    positions: &[f64],
) -> Result<Vec<MomentSlopeSample>, AeroError> {
    positions
        .iter()
        .map(|&x| {
            let lo = foil.moment_coefficient(-ALPHA_STEP, x)?;
            let hi = foil.moment_coefficient(ALPHA_STEP, x)?;
            Ok(MomentSlopeSample {
                x,
                cm_alpha: (hi - lo) / (2.0 * ALPHA_STEP),
            })
        })
        .collect()
}

/// Locates the aerodynamic centre by comparing how the leading-edge moment
/// and the lift respond to angle of attack. Thin-aerofoil theory puts the
/// result at the quarter chord for any camber line.
pub fn aerodynamic_centre<C: CamberLine>(
    foil: &ThinAerofoil<C>,
) -> Result<AerodynamicCentre, AeroError> {
    let cm_le_slope = (foil.moment_coefficient_le(ALPHA_STEP)?
        - foil.moment_coefficient_le(-ALPHA_STEP)?)
        / (2.0 * ALPHA_STEP);
    let cl_slope = (foil.lift_coefficient(ALPHA_STEP)? - foil.lift_coefficient(-ALPHA_STEP)?)
        / (2.0 * ALPHA_STEP);
    let x = -cm_le_slope / cl_slope;
    Ok(AerodynamicCentre {
        x,
        cm: foil.moment_coefficient(0.0, x)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aerofoil::naca4::Naca4;
    use approx::assert_abs_diff_eq;
    use itertools::Itertools;
    use std::f64::consts::PI;

    fn solver(code: &str) -> ThinAerofoil<Naca4> {
        ThinAerofoil::new(Naca4::parse(code).unwrap())
    }

    #[test]
    fn test_lift_curve_samples_every_angle() {
        let foil = solver("2412");
        let alphas: Vec<f64> = (-5..=5).map(|d| (d as f64).to_radians()).collect();
        let curve = lift_curve(&foil, &alphas).unwrap();
        assert_eq!(curve.len(), alphas.len());
        assert!(curve.iter().tuple_windows().all(|(a, b)| a.cl < b.cl));
        assert_eq!(curve[0].alpha, alphas[0]);
    }

    #[test]
    fn test_moment_slope_endpoints() {
        let foil = solver("2412");
        let samples = moment_slope_curve(&foil, &[0.0, 0.25, 0.5]).unwrap();
        assert_abs_diff_eq!(samples[0].cm_alpha, -PI / 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(samples[1].cm_alpha, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(samples[2].cm_alpha, PI / 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_aerodynamic_centre_at_quarter_chord() {
        let centre = aerodynamic_centre(&solver("2412")).unwrap();
        assert_abs_diff_eq!(centre.x, 0.25, epsilon = 1e-9);
        assert_abs_diff_eq!(centre.cm, -0.0531199, epsilon = 1e-4);
    }

    #[test]
    fn test_symmetric_aerodynamic_centre_has_no_moment() {
        let centre = aerodynamic_centre(&solver("0012")).unwrap();
        assert_abs_diff_eq!(centre.x, 0.25, epsilon = 1e-9);
        assert_abs_diff_eq!(centre.cm, 0.0, epsilon = 1e-9);
    }
}
