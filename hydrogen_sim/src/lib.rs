//! Hydrogen Radial Density
//!
//! Closed-form radial wavefunctions of hydrogen-like atoms for `n ≤ 4`, the
//! radial probability density built from them, and overlay plots per
//! azimuthal number.

pub mod radial;
pub mod figure;
pub mod equations;

pub use radial::{
    density_curve, density_curve_over, radial_probability_density, radial_wavefunction,
    DensityError, QuantumState, RadialDensityCurve, RadialOrbital, BOHR_RADIUS,
};
