//! Radial probability density of hydrogen-like atoms
//!
//! `P(r) = r²·R_nl(r)²` where each `R_nl` is a closed form in `ρ = Z·r/a0`:
//!
//! ```text
//! R_nl(r) = N_nl · (Z/a0)^{3/2} · poly_nl(ρ) · exp(−ρ/n)
//! ```
//!
//! Only the ten states with `n ≤ 4` are tabulated. Anything else is an error,
//! never a silent zero.

use common::numeric::{linspace, trapezoid};
use thiserror::Error;

/// Bohr radius (m)
pub const BOHR_RADIUS: f64 = 0.529e-10;

/// Samples in the default radial domain
pub const RADIAL_SAMPLES: usize = 1000;

/// Extent of the default radial domain in Bohr radii
pub const DOMAIN_BOHR_RADII: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DensityError {
    #[error("no radial function tabulated for n={n}, l={l}")]
    UnsupportedState { n: u32, l: u32 },
    #[error("atomic number must be at least 1, got {0}")]
    InvalidAtomicNumber(u32),
    #[error("radial domain end must be finite and greater than zero, got {r_max}")]
    InvalidDomain { r_max: f64 },
}

/// Quantum numbers and nuclear charge of one radial state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuantumState {
    /// Principal quantum number
    pub n: u32,
    /// Azimuthal quantum number
    pub l: u32,
    /// Atomic number
    pub z: u32,
}

impl QuantumState {
    /// A hydrogen state (Z = 1)
    pub fn new(n: u32, l: u32) -> Self {
        Self { n, l, z: 1 }
    }

    pub fn with_atomic_number(mut self, z: u32) -> Self {
        self.z = z;
        self
    }

    /// Spectroscopic name such as `2p`
    pub fn name(&self) -> String {
        let l_char = match self.l {
            0 => 's',
            1 => 'p',
            2 => 'd',
            3 => 'f',
            _ => 'g',
        };
        format!("{}{}", self.n, l_char)
    }

    /// Look up the tabulated radial function, checking Z first.
    pub fn orbital(&self) -> Result<RadialOrbital, DensityError> {
        if self.z == 0 {
            return Err(DensityError::InvalidAtomicNumber(self.z));
        }
        RadialOrbital::from_quantum_numbers(self.n, self.l).ok_or(DensityError::UnsupportedState {
            n: self.n,
            l: self.l,
        })
    }
}

/// The tabulated radial functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadialOrbital {
    S1,
    S2,
    P2,
    S3,
    P3,
    D3,
    S4,
    P4,
    D4,
    F4,
}

impl RadialOrbital {
    pub const ALL: [RadialOrbital; 10] = [
        Self::S1,
        Self::S2,
        Self::P2,
        Self::S3,
        Self::P3,
        Self::D3,
        Self::S4,
        Self::P4,
        Self::D4,
        Self::F4,
    ];

    pub fn from_quantum_numbers(n: u32, l: u32) -> Option<Self> {
        match (n, l) {
            (1, 0) => Some(Self::S1),
            (2, 0) => Some(Self::S2),
            (2, 1) => Some(Self::P2),
            (3, 0) => Some(Self::S3),
            (3, 1) => Some(Self::P3),
            (3, 2) => Some(Self::D3),
            (4, 0) => Some(Self::S4),
            (4, 1) => Some(Self::P4),
            (4, 2) => Some(Self::D4),
            (4, 3) => Some(Self::F4),
            _ => None,
        }
    }

    pub fn n(self) -> u32 {
        match self {
            Self::S1 => 1,
            Self::S2 | Self::P2 => 2,
            Self::S3 | Self::P3 | Self::D3 => 3,
            Self::S4 | Self::P4 | Self::D4 | Self::F4 => 4,
        }
    }

    pub fn l(self) -> u32 {
        match self {
            Self::S1 | Self::S2 | Self::S3 | Self::S4 => 0,
            Self::P2 | Self::P3 | Self::P4 => 1,
            Self::D3 | Self::D4 => 2,
            Self::F4 => 3,
        }
    }

    /// Dimensionless prefactor `N_nl`
    fn normalization(self) -> f64 {
        match self {
            Self::S1 => 2.0,
            Self::S2 => 1.0 / (2.0 * 2f64.sqrt()),
            Self::P2 => 1.0 / (2.0 * 6f64.sqrt()),
            Self::S3 => 2.0 / (81.0 * 3f64.sqrt()),
            Self::P3 => 8.0 / (27.0 * 6f64.sqrt()),
            Self::D3 => 4.0 / (81.0 * 30f64.sqrt()),
            Self::S4 => 1.0 / 768.0,
            Self::P4 => 1.0 / (256.0 * 15f64.sqrt()),
            Self::D4 => 1.0 / (768.0 * 5f64.sqrt()),
            Self::F4 => 1.0 / (768.0 * 35f64.sqrt()),
        }
    }

    fn polynomial(self, rho: f64) -> f64 {
        match self {
            Self::S1 => 1.0,
            Self::S2 => 2.0 - rho,
            Self::P2 => rho,
            Self::S3 => 27.0 - 18.0 * rho + 2.0 * rho * rho,
            Self::P3 => (1.0 - rho / 6.0) * rho,
            Self::D3 => rho * rho,
            Self::S4 => 192.0 - 144.0 * rho + 24.0 * rho.powi(2) - rho.powi(3),
            Self::P4 => rho * (80.0 - 20.0 * rho + rho * rho),
            Self::D4 => rho * rho * (12.0 - rho),
            Self::F4 => rho.powi(3),
        }
    }

    /// `R(r)` in m^{-3/2} for nuclear charge `z`
    pub fn evaluate(self, r: f64, z: u32) -> f64 {
        let z_over_a0 = f64::from(z) / BOHR_RADIUS;
        let rho = z_over_a0 * r;
        self.normalization()
            * z_over_a0.powf(1.5)
            * self.polynomial(rho)
            * (-rho / f64::from(self.n())).exp()
    }
}

/// `R_nl(r)` for `state`
pub fn radial_wavefunction(state: &QuantumState, r: f64) -> Result<f64, DensityError> {
    let orbital = state.orbital()?;
    Ok(orbital.evaluate(r, state.z))
}

/// `P(r) = r²·R_nl(r)²`
pub fn radial_probability_density(state: &QuantumState, r: f64) -> Result<f64, DensityError> {
    let radial = radial_wavefunction(state, r)?;
    Ok(r * r * radial * radial)
}

/// Sampled density for one state
#[derive(Debug, Clone, PartialEq)]
pub struct RadialDensityCurve {
    pub state: QuantumState,
    /// `(r, P(r))` pairs in increasing `r`
    pub points: Vec<(f64, f64)>,
}

impl RadialDensityCurve {
    /// Trapezoidal integral of `P` over the sampled domain
    pub fn integral(&self) -> f64 {
        let (rs, ps): (Vec<f64>, Vec<f64>) = self.points.iter().copied().unzip();
        trapezoid(&rs, &ps)
    }

    /// Radius of the largest sampled density; the first one on ties.
    pub fn most_probable_radius(&self) -> Option<f64> {
        self.points
            .iter()
            .copied()
            .reduce(|best, p| if p.1 > best.1 { p } else { best })
            .map(|(r, _)| r)
    }
}

/// Density over `[0, 20·a0]` with the default sample count
pub fn density_curve(state: &QuantumState) -> Result<RadialDensityCurve, DensityError> {
    density_curve_over(state, DOMAIN_BOHR_RADII * BOHR_RADIUS, RADIAL_SAMPLES)
}

/// Density at `samples` radii evenly spaced over `[0, r_max]`
pub fn density_curve_over(
    state: &QuantumState,
    r_max: f64,
    samples: usize,
) -> Result<RadialDensityCurve, DensityError> {
    let orbital = state.orbital()?;
    if !(r_max.is_finite() && r_max > 0.0) {
        return Err(DensityError::InvalidDomain { r_max });
    }
    let points: Vec<(f64, f64)> = linspace(0.0, r_max, samples)
        .into_iter()
        .map(|r| {
            let radial = orbital.evaluate(r, state.z);
            (r, r * r * radial * radial)
        })
        .collect();

    let curve = RadialDensityCurve {
        state: *state,
        points,
    };
    log::debug!(
        "{} (Z={}): {} samples up to {:.3e} m, integral {:.6}",
        state.name(),
        state.z,
        curve.points.len(),
        r_max,
        curve.integral()
    );
    Ok(curve)
}
