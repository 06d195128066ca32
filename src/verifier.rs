//! End-to-end verification pipeline and result record.
//!
//! One pass, no state: constants → ∫∫Θ → derived scalars → ledger digest →
//! [`VerificationReport`]. The report is the only externally meaningful
//! output; its `Display` impl is the presentation layer and can change
//! freely without touching the computation.

use std::fmt;

use crate::constants::energy_floor;
use crate::ledger::ledger_hash;
use crate::mass_gap::{
    damping_inequality_holds, hym_action, mass_gap, sobolev_aggregate, sobolev_bound_holds,
    stabilization_constant, NONLINEAR_TERM,
};
use crate::quadrature::{integrate_2d, QuadratureError, DEFAULT_TOL};
use crate::theta_density::theta_density;

/// Immutable record of one verification run.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationReport {
    /// Energy floor F_H (= Harding identity S_H).
    pub energy_floor: f64,
    /// Damping coefficient γ = ∫∫ Θ(A) over the unit square.
    pub gamma: f64,
    /// Quadrature error bound on γ.
    pub gamma_error: f64,
    /// Mass gap Δ = ε + F_H·γ.
    pub mass_gap: f64,
    /// Sobolev H³ aggregate K.
    pub sobolev_k: f64,
    /// Full action sum S_HYM.
    pub hym_action: f64,
    /// Truncated SHA-256 ledger digest over the derived scalars.
    pub ledger_hash: String,
    /// Display flag: |(u·∇)u| ≤ γ·|(u·∇)u|^(1/3).
    pub damping_holds: bool,
    /// Display flag: K ≤ C·S_HYM.
    pub sobolev_holds: bool,
    /// Δ > 0 — the verification verdict.
    pub verified: bool,
}

/// Run the full verification once.
///
/// The only failure path is quadrature non-convergence, which cannot occur
/// for the smooth bounded Θ but is propagated rather than swallowed.
pub fn run_verification() -> Result<VerificationReport, QuadratureError> {
    let f_h = energy_floor();

    let q = integrate_2d(theta_density, 0.0, 1.0, 0.0, 1.0, DEFAULT_TOL)?;
    let gamma = q.value;

    let delta = mass_gap(gamma);
    let s_hym = hym_action(gamma, delta);
    let k = sobolev_aggregate();

    Ok(VerificationReport {
        energy_floor: f_h,
        gamma,
        gamma_error: q.error,
        mass_gap: delta,
        sobolev_k: k,
        hym_action: s_hym,
        ledger_hash: ledger_hash(f_h, gamma, delta, k),
        damping_holds: damping_inequality_holds(gamma, NONLINEAR_TERM),
        sobolev_holds: sobolev_bound_holds(k, s_hym),
        verified: delta > 0.0,
    })
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |b: bool| if b { "holds" } else { "FAILED" };
        writeln!(f, "HYM mass-gap verification")?;
        writeln!(f, "{}", "─".repeat(50))?;
        writeln!(f, "  F_H (energy floor)     = {:.6e}", self.energy_floor)?;
        writeln!(
            f,
            "  γ   (damping coeff.)   = {:.6}  (±{:.1e})",
            self.gamma, self.gamma_error
        )?;
        writeln!(f, "  Δ   (mass gap)         = {:.6e}", self.mass_gap)?;
        writeln!(f, "  K   (Sobolev H³)       = {:.2}", self.sobolev_k)?;
        writeln!(f, "  S_HYM (action sum)     = {:.6}", self.hym_action)?;
        writeln!(
            f,
            "  C·S_HYM (stab. bound)  = {:.2}",
            stabilization_constant() * self.hym_action
        )?;
        writeln!(f, "  damping inequality     : {}", mark(self.damping_holds))?;
        writeln!(f, "  Sobolev bound          : {}", mark(self.sobolev_holds))?;
        writeln!(f, "  ledger hash            : {}", self.ledger_hash)?;
        write!(
            f,
            "  verdict                : {}",
            if self.verified { "Δ > 0, gap established" } else { "NOT VERIFIED" }
        )
    }
}

// ─── verification tests ──────────────────────────────────────────────────────
