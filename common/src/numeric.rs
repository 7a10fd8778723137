//! Sampling and quadrature helpers

/// `n` evenly spaced values over `[start, stop]`, both end points included.
///
/// A single sample is `start`; zero samples is an empty vector.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + i as f64 * step })
                .collect()
        }
    }
}

/// Composite trapezoidal rule over paired samples.
///
/// Extra samples in the longer slice are ignored; fewer than two pairs integrate to zero.
pub fn trapezoid(xs: &[f64], ys: &[f64]) -> f64 {
    xs.windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| 0.5 * (x[1] - x[0]) * (y[0] + y[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn linspace_includes_both_end_points() {
        let xs = linspace(0.0, 10.0, 1000);
        assert_eq!(xs.len(), 1000);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[999], 10.0);
        assert_relative_eq!(xs[1] - xs[0], 10.0 / 999.0, max_relative = 1e-12);
    }

    #[test]
    fn linspace_small_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
        assert_eq!(linspace(1.0, 2.0, 2), vec![1.0, 2.0]);
    }

    #[test]
    fn trapezoid_is_exact_for_linear_functions() {
        let xs = linspace(0.0, 2.0, 11);
        let ys: Vec<f64> = xs.iter().map(|x| 3.0 * x + 1.0).collect();
        assert_relative_eq!(trapezoid(&xs, &ys), 8.0, max_relative = 1e-12);
    }

    #[test]
    fn trapezoid_converges_for_quadratics() {
        let xs = linspace(0.0, 1.0, 1001);
        let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();
        assert_relative_eq!(trapezoid(&xs, &ys), 1.0 / 3.0, max_relative = 1e-5);
    }

    #[test]
    fn trapezoid_of_too_few_samples_is_zero() {
        assert_eq!(trapezoid(&[], &[]), 0.0);
        assert_eq!(trapezoid(&[1.0], &[5.0]), 0.0);
    }
}
