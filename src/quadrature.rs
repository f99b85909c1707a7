use crate::errors::AeroError;

/// Number of equal panels the interval is cut into before any adaptive
/// subdivision happens. The thin-aerofoil integrands oscillate like cos(nθ)
/// for n up to ~100, and a whole-interval Simpson estimate can alias those
/// to zero and accept them; subdivision therefore starts from a uniform grid.
const BASE_PANELS: usize = 16;

/// Controls for the adaptive quadrature: an absolute tolerance on the whole
/// integral and a recursion depth cap per panel.
#[derive(Debug, Clone, Copy)]
pub struct QuadParams {
    pub tol: f64,
    pub max_depth: u32,
}

impl QuadParams {
    pub fn new(tol: f64, max_depth: u32) -> QuadParams {
        QuadParams { tol, max_depth }
    }
}

impl Default for QuadParams {
    fn default() -> QuadParams {
        QuadParams {
            tol: 1e-9,
            max_depth: 40,
        }
    }
}

/// Integrates `f` over `[a, b]` with adaptive Simpson quadrature.
///
/// Each panel is split until the Richardson error estimate |S2 - S1| / 15
/// falls under its share of the tolerance, with the extrapolated value
/// returned. Fails with `IntegrationFailure` if the integrand produces a
/// non-finite sample or a panel runs out of subdivision depth.
pub fn adaptive_simpson<F>(f: F, a: f64, b: f64, params: &QuadParams) -> Result<f64, AeroError>
where
    F: Fn(f64) -> f64,
{
    if !a.is_finite() || !b.is_finite() {
        return Err(AeroError::InvalidParameter(
            "integration limits must be finite",
        ));
    }
    if a == b {
        return Ok(0.0);
    }

    let width = (b - a) / BASE_PANELS as f64;
    let panel_tol = params.tol / BASE_PANELS as f64;
    let mut total = 0.0;
    for i in 0..BASE_PANELS {
        let x0 = a + i as f64 * width;
        let x1 = if i + 1 == BASE_PANELS {
            b
        } else {
            a + (i + 1) as f64 * width
        };
        let xm = 0.5 * (x0 + x1);
        let f0 = sample(&f, x0)?;
        let fm = sample(&f, xm)?;
        let f1 = sample(&f, x1)?;
        let whole = simpson(x0, x1, f0, fm, f1);
        total += subdivide(&f, x0, x1, f0, fm, f1, whole, panel_tol, params.max_depth)?;
    }
    Ok(total)
}

fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

fn sample<F>(f: &F, x: f64) -> Result<f64, AeroError>
where
    F: Fn(f64) -> f64,
{
    let y = f(x);
    if y.is_finite() {
        Ok(y)
    } else {
        Err(AeroError::IntegrationFailure(format!(
            "integrand is not finite at x = {}",
            x
        )))
    }
}

#[allow(clippy::too_many_arguments)]
fn subdivide<F>(
    f: &F,
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
    tol: f64,
    depth: u32,
) -> Result<f64, AeroError>
where
    F: Fn(f64) -> f64,
{
    let m = 0.5 * (a + b);
    let lm = 0.5 * (a + m);
    let rm = 0.5 * (m + b);
    let flm = sample(f, lm)?;
    let frm = sample(f, rm)?;
    let left = simpson(a, m, fa, flm, fm);
    let right = simpson(m, b, fm, frm, fb);
    let delta = left + right - whole;
    if delta.abs() <= 15.0 * tol {
        return Ok(left + right + delta / 15.0);
    }
    if depth == 0 {
        return Err(AeroError::IntegrationFailure(format!(
            "no convergence to {:e} on [{:.6}, {:.6}]",
            tol, a, b
        )));
    }
    let l = subdivide(f, a, m, fa, flm, fm, left, 0.5 * tol, depth - 1)?;
    let r = subdivide(f, m, b, fm, frm, fb, right, 0.5 * tol, depth - 1)?;
    Ok(l + r)
}
