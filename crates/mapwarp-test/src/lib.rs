//! mapwarp-test - Regression test framework for mapwarp
//!
//! A small numeric regression harness supporting three modes:
//!
//! - **Generate**: write golden files from recorded values
//! - **Compare**: compare recorded values with golden files (default)
//! - **Display**: run checks without failing the test
//!
//! # Usage
//!
//! ```
//! use mapwarp_test::RegParams;
//!
//! let mut rp = RegParams::new("doc_example");
//! rp.compare_values(1.0, 1.0, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // mapwarp-test is at crates/mapwarp-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}
