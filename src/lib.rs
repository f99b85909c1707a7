pub mod aerofoil;
pub mod errors;
pub mod polar;
pub mod quadrature;
pub mod serialize;
pub mod thin_aerofoil;

pub use aerofoil::naca4::Naca4;
pub use aerofoil::{CamberLine, CamberStation};
pub use errors::AeroError;
pub use thin_aerofoil::ThinAerofoil;
