//! Trajectory plot description

use common::Figure;

use crate::physics::Trajectory;

pub const TITLE: &str = "Horizontal Throw in a Gravitational Field";
pub const X_LABEL: &str = "Horizontal Distance (m)";
pub const Y_LABEL: &str = "Vertical Distance (m)";
pub const SERIES_LABEL: &str = "Projectile Trajectory";

/// Trajectory plot clipped to the flight: x from launch to impact, y from the
/// ground to the highest of launch height and sampled heights.
pub fn trajectory_figure(trajectory: &Trajectory) -> Figure {
    let points = trajectory.points.iter().map(|p| [p.x, p.y]).collect();
    let y_max = trajectory
        .params
        .initial_height
        .max(trajectory.max_sampled_height());

    Figure::new(TITLE)
        .with_labels(X_LABEL, Y_LABEL)
        .plot(SERIES_LABEL, points)
        .axhline(0.0)
        .axvline(0.0)
        .xlim(0.0, trajectory.impact.x)
        .ylim(0.0, y_max)
        .legend()
        .grid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{simulate, ProjectileParams};
    use approx::assert_relative_eq;
    use common::ReferenceLine;

    #[test]
    fn demonstration_figure_matches_flight() {
        let trajectory = simulate(&ProjectileParams::default()).unwrap();
        let figure = trajectory_figure(&trajectory);

        assert_eq!(figure.title, TITLE);
        assert_eq!(figure.series.len(), 1);
        assert_eq!(figure.series[0].label, SERIES_LABEL);
        assert_eq!(figure.series[0].points.len(), trajectory.points.len());
        assert_eq!(
            figure.reference_lines,
            vec![ReferenceLine::Horizontal(0.0), ReferenceLine::Vertical(0.0)]
        );
        assert!(figure.show_legend && figure.show_grid);

        let (x_lo, x_hi) = figure.x_limits.unwrap();
        assert_eq!(x_lo, 0.0);
        assert_relative_eq!(x_hi, (4.0 / 9.81f64).sqrt(), max_relative = 1e-12);
        assert_eq!(figure.y_limits, Some((0.0, 2.0)));
    }

    #[test]
    fn upward_throw_raises_the_y_limit_to_the_sampled_peak() {
        let trajectory = simulate(&ProjectileParams::new(10.0, 60.0, 1.0)).unwrap();
        let figure = trajectory_figure(&trajectory);
        let (_, y_hi) = figure.y_limits.unwrap();
        assert!(y_hi > 1.0);
        assert!(y_hi <= trajectory.apex.height);
    }

    #[test]
    fn degenerate_flight_still_has_drawable_bounds() {
        let trajectory = simulate(&ProjectileParams::new(3.0, 0.0, 0.0)).unwrap();
        let bounds = trajectory_figure(&trajectory).bounds();
        assert!(bounds.width() > 0.0);
        assert!(bounds.height() > 0.0);
    }
}
