//! Topological density functional Θ(A).
//!
//! Simplified to a closed-form 2D proxy for the demo manifold:
//!
//!   Θ(A)(x, y) = ‖F‖² + winding
//!              = 1 + 0.1·sin(2π(x+y)) + 0.05·cos(4πx)·sin(4πy)
//!
//! Both oscillatory terms complete whole periods over the unit square, so
//! the double integral of Θ over [0,1]² is exactly 1 — the quadrature in
//! `verifier` must recover this to its tolerance.
//!
//! Callers restrict (x, y) to [0,1]²; the formula is defined everywhere but
//! only the unit square is meaningful.

use std::f64::consts::PI;

/// Θ(A) at a single sample point. Pure; no state.
pub fn theta_density(x: f64, y: f64) -> f64 {
    let f_norm_sq = 1.0 + 0.1 * (2.0 * PI * (x + y)).sin();
    let winding = 0.05 * (4.0 * PI * x).cos() * (4.0 * PI * y).sin();
    f_norm_sq + winding
}

// ─── verification tests ──────────────────────────────────────────────────────
