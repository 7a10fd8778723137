//! Projectile motion under constant gravity
//!
//! Closed-form kinematics only: positions are evaluated directly from
//!
//! ```text
//! x(t) = v0·cos(θ)·t
//! y(t) = h0 + v0·sin(θ)·t − ½·g·t²
//! ```
//!
//! and ground impact is the positive root of `y(t) = 0`. No drag, no
//! integration, no state between calls.

use common::numeric::linspace;
use thiserror::Error;

/// Standard gravity used by the demonstration throw (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Default simulated time span (s)
pub const DEFAULT_MAX_TIME: f64 = 10.0;

/// Default number of trajectory samples
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectileError {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Launch conditions and sampling settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileParams {
    /// Launch speed (m/s)
    pub initial_speed: f64,
    /// Launch angle above the horizontal (degrees)
    pub angle_degrees: f64,
    /// Launch height above the ground (m)
    pub initial_height: f64,
    /// Gravitational acceleration, positive downwards (m/s²)
    pub gravity: f64,
    /// End of the sampled time span (s)
    pub max_time: f64,
    pub sample_count: usize,
}

impl ProjectileParams {
    pub fn new(initial_speed: f64, angle_degrees: f64, initial_height: f64) -> Self {
        Self {
            initial_speed,
            angle_degrees,
            initial_height,
            gravity: STANDARD_GRAVITY,
            max_time: DEFAULT_MAX_TIME,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_max_time(mut self, max_time: f64) -> Self {
        self.max_time = max_time;
        self
    }

    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Reject settings the formulas cannot evaluate.
    ///
    /// Speed, angle and height are taken as given.
    pub fn validate(&self) -> Result<(), ProjectileError> {
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(ProjectileError::InvalidParameter {
                name: "gravity",
                value: self.gravity,
                reason: "must be finite and greater than zero",
            });
        }
        if !(self.max_time.is_finite() && self.max_time > 0.0) {
            return Err(ProjectileError::InvalidParameter {
                name: "max_time",
                value: self.max_time,
                reason: "must be finite and greater than zero",
            });
        }
        if self.sample_count == 0 {
            return Err(ProjectileError::InvalidParameter {
                name: "sample_count",
                value: 0.0,
                reason: "at least one sample is required",
            });
        }
        Ok(())
    }

    /// Horizontal and vertical launch velocity (m/s)
    pub fn velocity_components(&self) -> (f64, f64) {
        let angle = self.angle_degrees.to_radians();
        (
            self.initial_speed * angle.cos(),
            self.initial_speed * angle.sin(),
        )
    }

    /// Position at time `t`, ignoring the ground.
    pub fn position_at(&self, t: f64) -> (f64, f64) {
        let (vx, vy) = self.velocity_components();
        (
            vx * t,
            self.initial_height + vy * t - 0.5 * self.gravity * t * t,
        )
    }
}

impl Default for ProjectileParams {
    /// The demonstration throw: 1 m/s horizontally from 2 m.
    fn default() -> Self {
        Self::new(1.0, 0.0, 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub t: f64,
    pub x: f64,
    pub y: f64,
}

/// Ground impact from the analytic root, independent of the sampling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpactEvent {
    pub time: f64,
    pub x: f64,
}

/// Highest point of the flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Apex {
    pub time: f64,
    pub height: f64,
}

/// Everything derived from one set of parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub params: ProjectileParams,
    pub points: Vec<TrajectoryPoint>,
    pub impact: ImpactEvent,
    pub apex: Apex,
}

impl Trajectory {
    /// Largest sampled height
    pub fn max_sampled_height(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Positions at `sample_count` instants evenly spaced over `[0, max_time]`.
pub fn sample_trajectory(params: &ProjectileParams) -> Result<Vec<TrajectoryPoint>, ProjectileError> {
    params.validate()?;
    Ok(linspace(0.0, params.max_time, params.sample_count)
        .into_iter()
        .map(|t| {
            let (x, y) = params.position_at(t);
            TrajectoryPoint { t, x, y }
        })
        .collect())
}

/// Time and distance at which the projectile returns to `y = 0`.
///
/// A negative launch height deep enough to leave no real root yields NaN;
/// heights are not validated.
pub fn impact_event(params: &ProjectileParams) -> Result<ImpactEvent, ProjectileError> {
    params.validate()?;
    let (vx, vy) = params.velocity_components();
    let g = params.gravity;
    let time = (vy + (vy * vy + 2.0 * g * params.initial_height).sqrt()) / g;
    Ok(ImpactEvent { time, x: vx * time })
}

/// Highest point reached; a downward launch peaks at `t = 0`.
pub fn apex(params: &ProjectileParams) -> Result<Apex, ProjectileError> {
    params.validate()?;
    let (_, vy) = params.velocity_components();
    let time = (vy / params.gravity).max(0.0);
    let (_, height) = params.position_at(time);
    Ok(Apex { time, height })
}

pub fn simulate(params: &ProjectileParams) -> Result<Trajectory, ProjectileError> {
    let trajectory = Trajectory {
        params: *params,
        points: sample_trajectory(params)?,
        impact: impact_event(params)?,
        apex: apex(params)?,
    };
    log::debug!(
        "simulated throw v0={} angle={} h0={} g={}: impact at t={:.4} s, x={:.4} m",
        params.initial_speed,
        params.angle_degrees,
        params.initial_height,
        params.gravity,
        trajectory.impact.time,
        trajectory.impact.x
    );
    Ok(trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn demonstration_throw_lands_at_known_point() {
        let impact = impact_event(&ProjectileParams::default()).unwrap();
        let expected = (2.0 * 2.0 / 9.81f64).sqrt();
        assert_relative_eq!(impact.time, expected, max_relative = 1e-12);
        assert_relative_eq!(impact.x, expected, max_relative = 1e-12);
        assert_abs_diff_eq!(impact.time, 0.6386, epsilon = 1e-4);
    }

    #[test]
    fn samples_start_at_launch_point() {
        let params = ProjectileParams::new(12.0, 35.0, 4.0);
        let points = sample_trajectory(&params).unwrap();
        assert_eq!(points.len(), DEFAULT_SAMPLE_COUNT);
        assert_eq!(points[0].t, 0.0);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[0].y, 4.0);
        assert_eq!(points.last().unwrap().t, DEFAULT_MAX_TIME);
    }

    #[test]
    fn ground_launch_flat_is_a_zero_length_flight() {
        let impact = impact_event(&ProjectileParams::new(5.0, 0.0, 0.0)).unwrap();
        assert_eq!(impact.time, 0.0);
        assert_eq!(impact.x, 0.0);
    }

    #[test]
    fn vertical_throw_has_no_range() {
        let params = ProjectileParams::new(10.0, 90.0, 0.0);
        let impact = impact_event(&params).unwrap();
        assert_relative_eq!(impact.time, 2.0 * 10.0 / 9.81, max_relative = 1e-12);
        assert_abs_diff_eq!(impact.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn apex_of_upward_throw() {
        let params = ProjectileParams::new(10.0, 90.0, 1.0);
        let apex = apex(&params).unwrap();
        assert_relative_eq!(apex.time, 10.0 / 9.81, max_relative = 1e-12);
        assert_relative_eq!(apex.height, 1.0 + 100.0 / (2.0 * 9.81), max_relative = 1e-12);
    }

    #[test]
    fn apex_of_horizontal_throw_is_the_launch_point() {
        let apex = apex(&ProjectileParams::default()).unwrap();
        assert_eq!(apex.time, 0.0);
        assert_eq!(apex.height, 2.0);
    }

    #[test]
    fn zero_gravity_is_rejected() {
        let params = ProjectileParams::default().with_gravity(0.0);
        let err = impact_event(&params).unwrap_err();
        assert!(matches!(
            err,
            ProjectileError::InvalidParameter { name: "gravity", .. }
        ));
        assert!(sample_trajectory(&params).is_err());
        assert!(simulate(&params).is_err());
    }

    #[test]
    fn negative_and_nan_gravity_are_rejected() {
        for g in [-9.81, f64::NAN, f64::INFINITY] {
            assert!(ProjectileParams::default().with_gravity(g).validate().is_err());
        }
    }

    #[test]
    fn sampling_settings_are_validated() {
        let no_samples = ProjectileParams::default().with_sample_count(0);
        assert!(matches!(
            no_samples.validate(),
            Err(ProjectileError::InvalidParameter { name: "sample_count", .. })
        ));
        let no_time = ProjectileParams::default().with_max_time(0.0);
        assert!(matches!(
            no_time.validate(),
            Err(ProjectileError::InvalidParameter { name: "max_time", .. })
        ));
    }

    #[test]
    fn error_message_names_the_parameter() {
        let err = ProjectileParams::default().with_gravity(0.0).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid parameter `gravity` = 0: must be finite and greater than zero"
        );
    }

    #[test]
    fn single_sample_is_the_launch_point() {
        let params = ProjectileParams::default().with_sample_count(1);
        let points = sample_trajectory(&params).unwrap();
        assert_eq!(points, vec![TrajectoryPoint { t: 0.0, x: 0.0, y: 2.0 }]);
    }

    #[test]
    fn max_sampled_height_of_horizontal_throw_is_launch_height() {
        let trajectory = simulate(&ProjectileParams::default()).unwrap();
        assert_eq!(trajectory.max_sampled_height(), 2.0);
    }
}
