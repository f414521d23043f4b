//! Generic one-dimensional root finders
//!
//! Non-convergence is signaled through `Option`, never a panic; callers
//! must decide what a missing root means.

/// Derivative magnitude below which Newton-Raphson aborts
const MIN_DERIVATIVE: f64 = 1e-10;

/// A located root and the iterations it took
#[derive(Debug, Clone, Copy)]
pub struct RootResult {
    pub root: f64,
    pub iterations: usize,
}

/// Bisection over `[a, b]`.
///
/// Requires a sign change: returns `None` when `f(a) * f(b) > 0`. Otherwise
/// halves the bracket until `|f(mid)| < tol` or the bracket is narrower than
/// `tol`. Exhausting `max_iter` returns the last midpoint rather than
/// failing; bisection cannot leave the bracket, so the midpoint is the best
/// available estimate.
pub fn bisection<F>(f: F, a: f64, b: f64, tol: f64, max_iter: usize) -> Option<RootResult>
where
    F: Fn(f64) -> f64,
{
    let fa = f(a);
    let fb = f(b);
    if fa * fb > 0.0 {
        return None;
    }

    let mut low = a;
    let mut high = b;
    let mut fa = fa;
    let mut mid = 0.5 * (low + high);

    for i in 0..max_iter {
        mid = 0.5 * (low + high);
        let fm = f(mid);

        if fm.abs() < tol || (high - low) < tol {
            return Some(RootResult {
                root: mid,
                iterations: i + 1,
            });
        }

        if fa * fm <= 0.0 {
            high = mid;
        } else {
            low = mid;
            fa = fm;
        }
    }

    Some(RootResult {
        root: mid,
        iterations: max_iter,
    })
}

/// Newton-Raphson from `x0`.
///
/// Standard update `x ← x − f(x)/f′(x)`. Aborts with `None` when the
/// derivative magnitude drops below 1e-10 (the step would blow up) or when
/// `max_iter` passes without `|f(x)| < tol` or successive iterates closer
/// than `tol`.
pub fn newton_raphson<F, D>(f: F, df: D, x0: f64, tol: f64, max_iter: usize) -> Option<RootResult>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let mut x = x0;

    for i in 0..max_iter {
        let fx = f(x);
        if fx.abs() < tol {
            return Some(RootResult {
                root: x,
                iterations: i,
            });
        }

        let dfx = df(x);
        if dfx.abs() < MIN_DERIVATIVE {
            return None;
        }

        let next = x - fx / dfx;
        if (next - x).abs() < tol {
            return Some(RootResult {
                root: next,
                iterations: i + 1,
            });
        }
        x = next;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bisection_finds_sqrt2() {
        let r = bisection(|x| x * x - 2.0, 0.0, 2.0, 1e-10, 200).unwrap();
        assert!((r.root - 2.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_bisection_rejects_unbracketed() {
        assert!(bisection(|x| x * x + 1.0, -1.0, 1.0, 1e-10, 100).is_none());
    }

    #[test]
    fn test_bisection_exhaustion_returns_midpoint() {
        // Two iterations can't converge to 1e-12 on a unit bracket, but the
        // midpoint still lands inside it
        let r = bisection(|x| x - 0.3, 0.0, 1.0, 1e-12, 2).unwrap();
        assert_eq!(r.iterations, 2);
        assert!(r.root > 0.0 && r.root < 1.0);
    }

    #[test]
    fn test_newton_finds_cube_root() {
        let r = newton_raphson(|x| x * x * x - 27.0, |x| 3.0 * x * x, 2.0, 1e-12, 100).unwrap();
        assert!((r.root - 3.0).abs() < 1e-10);
        assert!(r.iterations > 0);
    }

    #[test]
    fn test_newton_aborts_on_flat_derivative() {
        assert!(newton_raphson(|_| 1.0, |_| 0.0, 0.0, 1e-12, 100).is_none());
    }

    #[test]
    fn test_newton_gives_up_after_max_iter() {
        // Oscillates around x^(1/3)'s pathological basin, never converging
        let f = |x: f64| x.signum() * x.abs().powf(1.0 / 3.0);
        let df = |x: f64| (1.0 / 3.0) * x.abs().powf(-2.0 / 3.0);
        assert!(newton_raphson(f, df, 1.0, 1e-15, 50).is_none());
    }
}
