use thiserror::Error;

/// Errors produced by section parsing, geometry generation, and the
/// thin-aerofoil solver.
#[derive(Debug, Error)]
pub enum AeroError {
    /// The designation string is not exactly four decimal digits.
    #[error("invalid 4-digit NACA code '{0}'")]
    InvalidCode(String),

    /// A caller-supplied value lies outside its physical or numeric range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// Adaptive quadrature exhausted its subdivision budget or sampled a
    /// non-finite integrand value.
    #[error("integration failure: {0}")]
    IntegrationFailure(String),
}
