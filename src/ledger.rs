//! Quantum ledger digest over the derived scalars.
//!
//! The four scalars are rendered into a fixed template and hashed with
//! SHA-256; the ledger id is the first 20 hex digits, uppercased:
//!
//!   F_H:{F_H:.2e}|γ:{γ:.6f}|Δ:{Δ:.2e}|K:{K:.2f}
//!
//! The template is load-bearing: the digest is only reproducible if the
//! rendering matches digit for digit, including the exponent form. Rust's
//! `{:e}` prints `8.08e-26` without a sign or zero padding on positive
//! exponents (`4e0`), so [`sci`] re-implements the printf-style `%.Ne`
//! rendering (`4.00e+00`, `8.08e-26`) the template was defined against.

use sha2::{Digest, Sha256};

/// Number of hex digits kept from the SHA-256 digest.
pub const LEDGER_DIGEST_LEN: usize = 20;

/// printf-style `%.*e` scientific rendering: fixed mantissa precision,
/// signed exponent zero-padded to two digits.
pub fn sci(v: f64, prec: usize) -> String {
    if v == 0.0 {
        return format!("{:.*}e+00", prec, 0.0);
    }
    let neg = v.is_sign_negative();
    let mut exp = v.abs().log10().floor() as i32;
    let mut mant = v.abs() / 10f64.powi(exp);
    // log10 + powi can land one decade off at power-of-ten boundaries
    if mant >= 10.0 {
        mant /= 10.0;
        exp += 1;
    }
    if mant < 1.0 {
        mant *= 10.0;
        exp -= 1;
    }
    // rounding the mantissa can carry into the next decade (9.999 → 10.00)
    let scale = 10f64.powi(prec as i32);
    mant = (mant * scale).round() / scale;
    if mant >= 10.0 {
        mant /= 10.0;
        exp += 1;
    }
    format!(
        "{}{:.*}e{}{:02}",
        if neg { "-" } else { "" },
        prec,
        mant,
        if exp < 0 { '-' } else { '+' },
        exp.abs(),
    )
}

/// The exact string the digest is computed over.
pub fn ledger_payload(f_h: f64, gamma: f64, delta: f64, k: f64) -> String {
    format!(
        "F_H:{}|γ:{gamma:.6}|Δ:{}|K:{k:.2}",
        sci(f_h, 2),
        sci(delta, 2),
    )
}

/// SHA-256 of the payload, truncated to [`LEDGER_DIGEST_LEN`] uppercase hex
/// digits. Deterministic in the scalar inputs.
pub fn ledger_hash(f_h: f64, gamma: f64, delta: f64, k: f64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(ledger_payload(f_h, gamma, delta, k).as_bytes());
    let digest = hex::encode(hasher.finalize());
    digest[..LEDGER_DIGEST_LEN].to_uppercase()
}

// ─── verification tests ──────────────────────────────────────────────────────
