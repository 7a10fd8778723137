//! Sidebar content for the projectile plot

use common::equations_ui::Equation;

use crate::physics::Trajectory;

pub const PROJECTILE_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Horizontal Position",
        formula: "x(t) = v₀ cos(θ) t",
        description: "Uniform motion, no drag",
    },
    Equation {
        name: "Vertical Position",
        formula: "y(t) = h₀ + v₀ sin(θ) t - ½ g t²",
        description: "Constant downward acceleration",
    },
    Equation {
        name: "Impact Time",
        formula: "t* = (v₀ sin θ + √((v₀ sin θ)² + 2 g h₀)) / g",
        description: "Positive root of y(t) = 0",
    },
    Equation {
        name: "Range",
        formula: "x* = v₀ cos(θ) t*",
        description: "Horizontal distance at impact",
    },
];

pub const PROJECTILE_VARIABLES: &[(&str, &str)] = &[
    ("v₀", "Launch speed"),
    ("θ", "Launch angle"),
    ("h₀", "Launch height"),
    ("g", "Gravitational acceleration"),
    ("t*", "Impact time"),
    ("x*", "Impact distance"),
];

/// Derived quantities shown under the equations
pub fn readouts(trajectory: &Trajectory) -> Vec<(String, String)> {
    let (vx, vy) = trajectory.params.velocity_components();
    vec![
        ("v₀x".to_string(), format!("{vx:.3} m/s")),
        ("v₀y".to_string(), format!("{vy:.3} m/s")),
        ("Impact time".to_string(), format!("{:.4} s", trajectory.impact.time)),
        ("Impact distance".to_string(), format!("{:.4} m", trajectory.impact.x)),
        ("Apex time".to_string(), format!("{:.4} s", trajectory.apex.time)),
        ("Apex height".to_string(), format!("{:.4} m", trajectory.apex.height)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{simulate, ProjectileParams};

    #[test]
    fn readouts_report_impact_of_demonstration_throw() {
        let trajectory = simulate(&ProjectileParams::default()).unwrap();
        let rows = readouts(&trajectory);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[2], ("Impact time".to_string(), "0.6386 s".to_string()));
        assert_eq!(rows[3], ("Impact distance".to_string(), "0.6386 m".to_string()));
    }
}
