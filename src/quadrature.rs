//! Adaptive Simpson quadrature, 1D and iterated 2D.
//!
//! ## Method
//!
//! Classic adaptive Simpson with Richardson extrapolation: an interval is
//! accepted when the two-panel refinement S₂ agrees with the single-panel
//! estimate S₁ to within 15·tol, in which case S₂ + (S₂−S₁)/15 is returned
//! (error order h⁶). Otherwise the interval is bisected with the tolerance
//! split between halves. Function values at the five stencil points are
//! threaded through the recursion, so each subdivision costs two new
//! evaluations.
//!
//! The 2D routine iterates the 1D rule — an inner integral over y for every
//! outer abscissa in x — the same decomposition `scipy.integrate.dblquad`
//! uses. The reported error bound is the outer estimate plus the worst inner
//! estimate scaled by the outer width; crude, but an upper bound for the
//! smooth integrands used here.
//!
//! ## Failure mode
//!
//! A smooth bounded integrand converges long before `MAX_DEPTH`. Exhausting
//! the depth (singular integrand, NaN samples, or an unmeetable tolerance)
//! is the single fatal condition in the crate and surfaces as
//! [`QuadratureError::NonConvergence`].

use std::cell::{Cell, RefCell};

use thiserror::Error;

/// Default absolute error target, the same order as the usual library
/// defaults (SciPy's quadpack wrappers use 1.49e-8).
pub const DEFAULT_TOL: f64 = 1e-8;

/// Maximum bisection depth. 2⁵⁰ subintervals is far beyond anything a
/// well-posed integrand needs; hitting it means the integrand is hostile.
pub const MAX_DEPTH: u32 = 50;

/// Integral estimate plus an estimated absolute error bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrature {
    pub value: f64,
    pub error: f64,
}

#[derive(Debug, Error)]
pub enum QuadratureError {
    #[error(
        "adaptive quadrature failed to converge on [{a}, {b}]: \
         residual {residual:e} at max subdivision depth (requested tol {tol:e})"
    )]
    NonConvergence {
        a: f64,
        b: f64,
        residual: f64,
        tol: f64,
    },
}

/// Single-panel Simpson estimate over [a, b] from endpoint and midpoint values.
fn simpson_panel(fa: f64, fm: f64, fb: f64, a: f64, b: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

fn adapt<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    tol: f64,
    whole: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    depth: u32,
) -> Result<Quadrature, QuadratureError> {
    let m = 0.5 * (a + b);
    let lm = 0.5 * (a + m);
    let rm = 0.5 * (m + b);
    let flm = f(lm);
    let frm = f(rm);

    let left = simpson_panel(fa, flm, fm, a, m);
    let right = simpson_panel(fm, frm, fb, m, b);
    let delta = left + right - whole;

    // 15 = 2⁴ − 1 from the h⁴ error order of Simpson's rule. NaN residuals
    // fail this comparison and fall through to subdivision.
    if delta.abs() <= 15.0 * tol {
        return Ok(Quadrature {
            value: left + right + delta / 15.0,
            error: delta.abs() / 15.0,
        });
    }
    if depth == 0 {
        return Err(QuadratureError::NonConvergence {
            a,
            b,
            residual: delta.abs(),
            tol,
        });
    }

    let l = adapt(f, a, m, 0.5 * tol, left, fa, flm, fm, depth - 1)?;
    let r = adapt(f, m, b, 0.5 * tol, right, fm, frm, fb, depth - 1)?;
    Ok(Quadrature {
        value: l.value + r.value,
        error: l.error + r.error,
    })
}

/// ∫ₐᵇ f(x) dx to absolute tolerance `tol`.
pub fn integrate<F: Fn(f64) -> f64>(
    f: F,
    a: f64,
    b: f64,
    tol: f64,
) -> Result<Quadrature, QuadratureError> {
    let m = 0.5 * (a + b);
    let fa = f(a);
    let fm = f(m);
    let fb = f(b);
    let whole = simpson_panel(fa, fm, fb, a, b);
    adapt(&f, a, b, tol, whole, fa, fm, fb, MAX_DEPTH)
}

/// ∫∫ f(x, y) dy dx over the rectangle [x0, x1] × [y0, y1].
///
/// Iterated quadrature: the outer integrand evaluates a full inner integral
/// at each abscissa. An inner failure is stashed and re-raised after the
/// outer pass so the caller sees the innermost offending interval.
pub fn integrate_2d<F: Fn(f64, f64) -> f64>(
    f: F,
    x0: f64,
    x1: f64,
    y0: f64,
    y1: f64,
    tol: f64,
) -> Result<Quadrature, QuadratureError> {
    let inner_failure: RefCell<Option<QuadratureError>> = RefCell::new(None);
    let worst_inner_error = Cell::new(0.0_f64);

    let outer = integrate(
        |x| match integrate(|y| f(x, y), y0, y1, tol) {
            Ok(q) => {
                worst_inner_error.set(worst_inner_error.get().max(q.error));
                q.value
            }
            Err(e) => {
                inner_failure.borrow_mut().get_or_insert(e);
                0.0
            }
        },
        x0,
        x1,
        tol,
    )?;

    if let Some(e) = inner_failure.into_inner() {
        return Err(e);
    }
    Ok(Quadrature {
        value: outer.value,
        error: outer.error + worst_inner_error.get() * (x1 - x0).abs(),
    })
}

// ─── verification tests ──────────────────────────────────────────────────────
