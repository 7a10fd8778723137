//! Sidebar content for the radial density plot

use common::equations_ui::Equation;

use crate::figure::MAX_N;
use crate::radial::{density_curve, QuantumState, BOHR_RADIUS};

pub const RADIAL_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Radial Probability Density",
        formula: "P(r) = r² |R_nl(r)|²",
        description: "Probability per unit radius",
    },
    Equation {
        name: "Radial Wavefunction",
        formula: "R_nl(r) = N_nl (Z/a₀)^{3/2} f_nl(ρ) e^{-ρ/n}",
        description: "Closed form for n ≤ 4",
    },
    Equation {
        name: "Scaled Radius",
        formula: "ρ = Z r / a₀",
        description: "Distance in units of a₀/Z",
    },
    Equation {
        name: "Ground State",
        formula: "R₁₀(r) = 2 (Z/a₀)^{3/2} e^{-ρ}",
        description: "Peaks at r = a₀/Z",
    },
    Equation {
        name: "Normalization",
        formula: "∫₀^∞ P(r) dr = 1",
        description: "Each state holds one electron",
    },
];

pub const RADIAL_VARIABLES: &[(&str, &str)] = &[
    ("n", "Principal quantum number"),
    ("l", "Azimuthal quantum number"),
    ("Z", "Atomic number"),
    ("a₀", "Bohr radius (0.529 Å)"),
    ("r", "Distance from the nucleus"),
];

/// Peak radius and captured probability of each plotted state
pub fn readouts(l: u32, z: u32) -> Vec<(String, String)> {
    (l.saturating_add(1)..=MAX_N)
        .filter_map(|n| {
            let state = QuantumState::new(n, l).with_atomic_number(z);
            let curve = density_curve(&state)
                .map_err(|e| log::debug!("no readout for {}: {e}", state.name()))
                .ok()?;
            let peak = curve.most_probable_radius()? / BOHR_RADIUS;
            Some((
                state.name(),
                format!("r_max = {peak:.2} a₀, ∫P = {:.3}", curve.integral()),
            ))
        })
        .collect()
}
