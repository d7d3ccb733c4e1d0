use crate::core::data::complex::Complex;

/// Outcome of the escape-time iteration for one point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// `|z|²` exceeded 4 after the iteration with this index.
    Escaped(u32),
    /// The point stayed within the escape radius for the whole budget.
    Bounded,
}

/// Iterates z ← z² + c from z = 0 and reports when (if ever) the orbit
/// leaves the radius-2 disc.
///
/// The escape test runs *after* each iteration and compares the squared
/// magnitude strictly against 4.0, so a point like c = 3+0i escapes at
/// iteration 0. Single-precision arithmetic and the strict threshold are
/// both part of the contract: the accelerated strategy must reproduce them
/// bit for bit.
#[must_use]
pub fn evaluate(c: Complex, max_iters: u32) -> Escape {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iters {
        z = z * z + c;
        if z.magnitude_squared() > 4.0 {
            return Escape::Escaped(iteration);
        }
    }

    Escape::Bounded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        for max_iters in [1, 10, 512, 10_000] {
            assert_eq!(evaluate(Complex::ZERO, max_iters), Escape::Bounded);
        }
    }

    #[test]
    fn test_point_outside_radius_escapes_at_iteration_zero() {
        let c = Complex { real: 3.0, imag: 0.0 };

        assert_eq!(evaluate(c, 10), Escape::Escaped(0));
    }

    #[test]
    fn test_repeated_evaluation_is_pure() {
        let c = Complex { real: -0.7435, imag: 0.1314 };

        let first = evaluate(c, 256);
        let second = evaluate(c, 256);

        assert_eq!(first, second);
    }

    #[test]
    fn test_budget_bounds_slowly_escaping_point() {
        // Just outside the cardioid: escapes eventually, but not within a
        // single iteration.
        let c = Complex { real: 0.26, imag: 0.0 };

        let with_tiny_budget = evaluate(c, 2);
        let with_large_budget = evaluate(c, 10_000);

        assert_eq!(with_tiny_budget, Escape::Bounded);
        assert!(matches!(with_large_budget, Escape::Escaped(_)));
    }

    #[test]
    fn test_escape_iteration_is_stable_across_budgets() {
        let c = Complex { real: 0.5, imag: 0.5 };

        let small = evaluate(c, 100);
        let large = evaluate(c, 10_000);

        assert_eq!(small, large);
        assert!(matches!(small, Escape::Escaped(_)));
    }

    #[test]
    fn test_interior_point_is_bounded() {
        let c = Complex { real: -1.0, imag: 0.0 };

        assert_eq!(evaluate(c, 1_000), Escape::Bounded);
    }
}
