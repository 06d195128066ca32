//! Fundamental constants and the Harding identity.
//!
//! All downstream scalars derive from five fixed values: three
//! physical-constant-like quantities (ℏ, c, the Planck length), the gauge
//! coupling g, and the infinitesimal ε used to keep the mass gap strictly
//! positive. The Harding identity combines the first three into
//!
//!   S_H = ℏ^1.5 · c / √L_p
//!
//! and the energy floor F_H is defined equal to S_H. With the values below,
//! F_H ≈ 8.0757 × 10⁻²⁶ — every run reproduces this to the last bit since
//! no input ever varies.

/// Reduced Planck constant, J·s.
pub const HBAR: f64 = 1.054_571_817e-34;

/// Speed of light, m/s.
pub const C: f64 = 2.997_924_58e8;

/// Planck length, m.
pub const L_PLANCK: f64 = 1.616_255e-35;

/// Gauge coupling g (dimensionless).
pub const G_COUPLING: f64 = 1.0;

/// Infinitesimal positive offset ε, eV. Keeps Δ strictly positive even when
/// the topological term vanishes.
pub const EPSILON: f64 = 1e-40;

/// Harding identity: S_H = ℏ^1.5 · c / √L_p.
pub fn harding_identity() -> f64 {
    HBAR.powf(1.5) * C / L_PLANCK.sqrt()
}

/// Energy floor F_H. Defined equal to the Harding identity S_H.
pub fn energy_floor() -> f64 {
    harding_identity()
}

// ─── verification tests ──────────────────────────────────────────────────────
