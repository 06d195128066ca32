//! Numerical verification of the Harding–Yang–Mills mass-gap construction.
//!
//! A single pure pipeline: fixed constants feed a double integral of the
//! topological density Θ(A) over the unit square, the integral feeds a
//! handful of derived scalars, and the scalars feed a truncated SHA-256
//! ledger digest. Every input is fixed, so every run reproduces the same
//! record bit for bit.
//!
//! # Modules
//!
//! - [`constants`]     — ℏ, c, L_p, g, ε and the Harding identity / energy floor
//! - [`theta_density`] — the Θ(A) sample function on [0,1]²
//! - [`quadrature`]    — adaptive Simpson quadrature, 1D and iterated 2D
//! - [`mass_gap`]      — derived scalars: S_YM, Δ, S_HYM, Sobolev aggregate
//! - [`ledger`]        — payload template and truncated SHA-256 digest
//! - [`verifier`]      — orchestration and the immutable result record
//!
//! # Running tests
//!
//! ```bash
//! cargo test -- --nocapture
//! ```

pub mod constants;
pub mod ledger;
pub mod mass_gap;
pub mod quadrature;
pub mod theta_density;
pub mod verifier;
