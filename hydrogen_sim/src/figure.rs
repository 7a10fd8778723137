//! Radial density plot description

use common::Figure;

use crate::radial::{density_curve, DensityError, QuantumState};

pub const TITLE: &str = "Radial Probability Density for Hydrogen Atom";
pub const X_LABEL: &str = "Radial Distance (m)";
pub const Y_LABEL: &str = "Probability Density";

/// Highest principal quantum number in the table
pub const MAX_N: u32 = 4;

/// Overlay of every tabulated `n` for azimuthal number `l`, axes fitted to the data.
pub fn density_figure(l: u32, z: u32) -> Result<Figure, DensityError> {
    if l >= MAX_N {
        return Err(DensityError::UnsupportedState {
            n: l.saturating_add(1),
            l,
        });
    }

    let mut figure = Figure::new(TITLE).with_labels(X_LABEL, Y_LABEL);
    for n in (l + 1)..=MAX_N {
        let state = QuantumState::new(n, l).with_atomic_number(z);
        let curve = density_curve(&state)?;
        let points = curve.points.iter().map(|&(r, p)| [r, p]).collect();
        figure = figure.plot(format!("n={n}, l={l}"), points);
    }

    Ok(figure.legend().grid())
}
