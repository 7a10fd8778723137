#![allow(clippy::uninlined_format_args)]

use projectile_sim::figure::trajectory_figure;
use projectile_sim::{apex, impact_event, sample_trajectory, simulate, ProjectileParams};
use proptest::prelude::*;

// =============================================================================
// Impact properties
// =============================================================================

proptest! {
    #[test]
    fn impact_lands_on_the_ground(
        speed in 0.0f64..100.0,
        angle in -89.0f64..90.0,
        height in 0.0f64..100.0,
        gravity in 0.5f64..30.0,
    ) {
        let params = ProjectileParams::new(speed, angle, height).with_gravity(gravity);
        let impact = impact_event(&params).unwrap();
        let (x, y) = params.position_at(impact.time);

        let scale = 1.0 + height + speed * speed / gravity;
        prop_assert!(
            y.abs() <= 1e-9 * scale,
            "y at impact = {}, speed={}, angle={}, height={}, g={}",
            y, speed, angle, height, gravity
        );
        prop_assert!(impact.time >= 0.0);
        prop_assert_eq!(x, impact.x);
    }

    #[test]
    fn impact_does_not_depend_on_sampling(
        speed in 0.0f64..50.0,
        angle in 0.0f64..90.0,
        height in 0.0f64..50.0,
        max_time in 0.1f64..100.0,
        samples in 1usize..2000,
    ) {
        let base = ProjectileParams::new(speed, angle, height);
        let resampled = base.with_max_time(max_time).with_sample_count(samples);
        prop_assert_eq!(impact_event(&base).unwrap(), impact_event(&resampled).unwrap());
    }

    #[test]
    fn apex_is_never_below_launch_height(
        speed in 0.0f64..100.0,
        angle in -90.0f64..90.0,
        height in 0.0f64..100.0,
    ) {
        let params = ProjectileParams::new(speed, angle, height);
        let apex = apex(&params).unwrap();
        prop_assert!(apex.time >= 0.0);
        prop_assert!(apex.height >= height - 1e-12);
    }
}

// =============================================================================
// Sampling properties
// =============================================================================

proptest! {
    #[test]
    fn forward_throws_never_move_backwards(
        speed in 0.0f64..100.0,
        angle in 0.0f64..=90.0,
        height in 0.0f64..100.0,
    ) {
        let points = sample_trajectory(&ProjectileParams::new(speed, angle, height)).unwrap();
        prop_assert!(points.windows(2).all(|w| w[1].x >= w[0].x));
        prop_assert!(points.windows(2).all(|w| w[1].t > w[0].t));
    }

    #[test]
    fn simulation_is_deterministic(
        speed in 0.0f64..100.0,
        angle in -90.0f64..90.0,
        height in 0.0f64..100.0,
    ) {
        let params = ProjectileParams::new(speed, angle, height);
        prop_assert_eq!(simulate(&params).unwrap(), simulate(&params).unwrap());
    }

    #[test]
    fn figure_bounds_are_always_drawable(
        speed in 0.0f64..100.0,
        angle in -90.0f64..90.0,
        height in 0.0f64..100.0,
    ) {
        let trajectory = simulate(&ProjectileParams::new(speed, angle, height)).unwrap();
        let bounds = trajectory_figure(&trajectory).bounds();
        prop_assert!(bounds.width() > 0.0 && bounds.width().is_finite());
        prop_assert!(bounds.height() > 0.0 && bounds.height().is_finite());
    }
}

// =============================================================================
// Edge cases
// =============================================================================

#[test]
fn ground_level_horizontal_launch_lands_immediately() {
    let trajectory = simulate(&ProjectileParams::new(7.5, 0.0, 0.0)).unwrap();
    assert_eq!(trajectory.impact.time, 0.0);
    assert_eq!(trajectory.impact.x, 0.0);
    assert_eq!(trajectory.points.len(), 1000);
}

#[test]
fn invalid_gravity_fails_every_operation() {
    let params = ProjectileParams::default().with_gravity(-1.0);
    assert!(sample_trajectory(&params).is_err());
    assert!(impact_event(&params).is_err());
    assert!(apex(&params).is_err());
    assert!(simulate(&params).is_err());
}
