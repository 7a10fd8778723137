//! Projectile Throw
//!
//! Evaluates the closed-form trajectory of a projectile launched under constant
//! gravity and describes it as a plot that ends at ground impact.
//!
//! - [`physics`]: pure evaluators (samples, analytic impact, apex)
//! - [`figure`]: the plot description handed to the renderer
//! - [`equations`]: formulas and readouts for the sidebar

pub mod physics;
pub mod figure;
pub mod equations;

pub use physics::{
    apex, impact_event, sample_trajectory, simulate, Apex, ImpactEvent, ProjectileError,
    ProjectileParams, Trajectory, TrajectoryPoint,
};
