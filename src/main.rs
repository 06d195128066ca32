//! Zero-argument entry point: run the verification once and print the report.
//!
//! All formatting lives in the report's `Display` impl; this binary only
//! decides what happens on the (theoretically unreachable) failure path.

use hym_verification::verifier::run_verification;

fn main() {
    match run_verification() {
        Ok(report) => println!("{report}"),
        Err(e) => {
            eprintln!("computation failed: {e}");
            std::process::exit(1);
        }
    }
}
