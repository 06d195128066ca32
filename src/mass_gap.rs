//! Derived scalars of the mass-gap construction.
//!
//! Everything here is elementary arithmetic on the topological integral γ
//! and the fixed constants:
//!
//!   S_YM  = 4g² · ∫Tr(F ∧ *F)        (Yang–Mills action term)
//!   Δ     = ε + F_H · γ              (mass gap; strictly positive)
//!   S_HYM = S_YM + F_H·γ + Δ         (full action sum)
//!   K     = ‖∇²u‖ + ‖∇u‖ + ‖u‖      (Sobolev H³ aggregate, = 2.4)
//!
//! The damping inequality and the Sobolev bound are display flags, not
//! propagated failures: the norms are fixed placeholders and the checks are
//! near-trivially true for the stated constants.

use crate::constants::{energy_floor, EPSILON, G_COUPLING};

/// Placeholder Sobolev H³ norm components (‖u‖, ‖∇u‖, ‖∇²u‖).
pub const H3_U_NORM: f64 = 1.0;
pub const H3_GRAD_U_NORM: f64 = 0.8;
pub const H3_GRAD2_U_NORM: f64 = 0.6;

/// Scaling factor applied to the smallest norm component to form the
/// stabilization constant C.
pub const STABILIZER_SCALE: f64 = 1.5;

/// Placeholder magnitude of the nonlinear advection term |(u·∇)u|.
pub const NONLINEAR_TERM: f64 = 1.0;

/// Yang–Mills action term S_YM = 4g² · ∫Tr(F ∧ *F), with the trace integral
/// supplied by the caller (it equals the Θ integral on this manifold).
pub fn yang_mills_action(theta_integral: f64) -> f64 {
    4.0 * G_COUPLING * G_COUPLING * theta_integral
}

/// Mass gap Δ = ε + F_H · γ. Strictly positive for any γ ≥ 0 since ε > 0
/// and F_H > 0.
pub fn mass_gap(gamma: f64) -> f64 {
    EPSILON + energy_floor() * gamma
}

/// Damping bound γ · |(u·∇)u|^(1/3).
pub fn damping_bound(gamma: f64, nonlinear_term: f64) -> f64 {
    gamma * nonlinear_term.cbrt()
}

/// Display flag: |(u·∇)u| ≤ γ·|(u·∇)u|^(1/3).
pub fn damping_inequality_holds(gamma: f64, nonlinear_term: f64) -> bool {
    nonlinear_term <= damping_bound(gamma, nonlinear_term)
}

/// Full action sum S_HYM = S_YM + F_H·γ + Δ.
pub fn hym_action(gamma: f64, delta: f64) -> f64 {
    yang_mills_action(gamma) + energy_floor() * gamma + delta
}

/// Sobolev H³ aggregate K = ‖∇²u‖ + ‖∇u‖ + ‖u‖.
pub fn sobolev_aggregate() -> f64 {
    H3_GRAD2_U_NORM + H3_GRAD_U_NORM + H3_U_NORM
}

/// Stabilization constant C = 1.5 · min(norm components).
pub fn stabilization_constant() -> f64 {
    H3_GRAD2_U_NORM.min(H3_GRAD_U_NORM).min(H3_U_NORM) * STABILIZER_SCALE
}

/// Display flag: K ≤ C · S_HYM.
pub fn sobolev_bound_holds(k: f64, s_hym: f64) -> bool {
    k <= stabilization_constant() * s_hym
}

// ─── verification tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::energy_floor;

    // ── Property 1: gap positivity ───────────────────────────────────────────

    /// Δ > 0 must hold for any non-negative γ, including γ = 0 where only ε
    /// keeps the gap open.
    #[test]
    fn mass_gap_is_strictly_positive() {
        for gamma in [0.0, 1e-30, 0.5, 1.0, 100.0] {
            let delta = mass_gap(gamma);
            assert!(
                delta > 0.0,
                "Δ(γ={gamma}) = {delta:.3e} must be strictly positive"
            );
        }
    }

    /// With γ = 1, Δ = ε + F_H ≈ F_H (ε is 14 orders of magnitude below).
    #[test]
    fn mass_gap_at_unit_gamma_matches_energy_floor() {
        let delta = mass_gap(1.0);
        let f_h = energy_floor();
        let rel = (delta - f_h).abs() / f_h;
        assert!(
            rel < 1e-12,
            "Δ(1) = {delta:.6e} should be ≈ F_H = {f_h:.6e}"
        );
    }

    // ── Property 2: action terms ─────────────────────────────────────────────

    /// S_YM = 4g²γ; with g = 1 and γ = 1 this is exactly 4.
    #[test]
    fn yang_mills_action_at_unit_integral() {
        assert_eq!(yang_mills_action(1.0), 4.0);
    }

    /// S_HYM at γ = 1 is 4 plus two terms of order 1e-25 — numerically 4.
    #[test]
    fn hym_action_near_four() {
        let gamma = 1.0;
        let s_hym = hym_action(gamma, mass_gap(gamma));
        assert!(
            (s_hym - 4.0).abs() < 1e-12,
            "S_HYM = {s_hym:.15}, expected ≈ 4.0"
        );
    }

    // ── Property 3: Sobolev aggregate and stabilizer ─────────────────────────

    /// K = 0.6 + 0.8 + 1.0 = 2.4 with the fixed placeholder norms.
    #[test]
    fn sobolev_aggregate_is_2_4() {
        let k = sobolev_aggregate();
        assert!(
            (k - 2.4).abs() < 1e-12,
            "K = {k:.15}, expected 2.4"
        );
    }

    /// C = 1.5 · min(0.6, 0.8, 1.0) = 0.9.
    #[test]
    fn stabilization_constant_is_0_9() {
        let c = stabilization_constant();
        assert!(
            (c - 0.9).abs() < 1e-12,
            "C = {c:.15}, expected 0.9"
        );
    }

    /// With S_HYM ≈ 4: C·S_HYM = 3.6 ≥ K = 2.4, so the bound flag is set.
    #[test]
    fn sobolev_bound_holds_for_stated_constants() {
        assert!(sobolev_bound_holds(sobolev_aggregate(), 4.0));
    }

    /// The flag must clear when the action sum is too small to dominate K.
    #[test]
    fn sobolev_bound_fails_for_small_action() {
        assert!(!sobolev_bound_holds(sobolev_aggregate(), 1.0));
    }

    // ── Property 4: damping flag ─────────────────────────────────────────────

    /// With the unit placeholder term, bound = γ·1 = γ, so the inequality
    /// holds exactly at γ = 1 and fails just below it.
    #[test]
    fn damping_inequality_threshold() {
        assert!(damping_inequality_holds(1.0, NONLINEAR_TERM));
        assert!(damping_inequality_holds(1.5, NONLINEAR_TERM));
        assert!(!damping_inequality_holds(0.99, NONLINEAR_TERM));
    }
}
