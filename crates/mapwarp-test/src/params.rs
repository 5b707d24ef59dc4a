//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::golden_dir;
use std::fs;
use std::path::Path;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files from recorded values
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without failing the test
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of one regression test: name, running check index,
/// mode, success flag, and any values recorded for golden comparison.
pub struct RegParams {
    /// Name of the test (e.g., "transform_invert")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
    /// Values recorded for the golden file
    recorded: Vec<f64>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is read from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();
        let _ = fs::create_dir_all(golden_dir());

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
            recorded: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if the values match within `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        let ok = diff <= delta || (expected.is_nan() && actual.is_nan());

        if !ok {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            eprintln!("{}", msg);
            self.failures.push(msg);
            if !self.display() {
                self.success = false;
            }
        }
        ok
    }

    /// Compare two points component-wise within `delta`
    pub fn compare_point(&mut self, expected: (f64, f64), actual: (f64, f64), delta: f64) -> bool {
        let x_ok = self.compare_values(expected.0, actual.0, delta);
        let y_ok = self.compare_values(expected.1, actual.1, delta);
        x_ok && y_ok
    }

    /// Record a value for golden-file comparison
    ///
    /// In generate mode the recorded values are written out by
    /// [`RegParams::cleanup`]; in compare mode they are checked against the
    /// existing golden file.
    pub fn record_value(&mut self, value: f64) {
        self.recorded.push(value);
    }

    /// Finish the test: handle golden files and report overall success
    pub fn cleanup(&mut self) -> bool {
        if !self.recorded.is_empty() {
            match self.mode {
                RegTestMode::Generate => {
                    if let Err(e) = self.write_golden() {
                        eprintln!("Failed to write golden file: {}", e);
                        self.success = false;
                    }
                }
                RegTestMode::Compare => {
                    if let Err(e) = self.compare_golden() {
                        eprintln!("Golden comparison failed: {}", e);
                        self.success = false;
                    }
                }
                RegTestMode::Display => {}
            }
        }

        if self.success {
            eprintln!("SUCCESS: {}_reg ({} checks)", self.test_name, self.index);
        } else {
            eprintln!(
                "FAILURE: {}_reg ({} failures)",
                self.test_name,
                self.failures.len()
            );
        }
        self.success
    }

    fn golden_path(&self) -> String {
        format!("{}/{}.txt", golden_dir(), self.test_name)
    }

    fn write_golden(&self) -> TestResult<()> {
        let path = self.golden_path();
        let body: String = self
            .recorded
            .iter()
            .map(|v| format!("{:.12e}\n", v))
            .collect();
        fs::write(&path, body).map_err(|e| TestError::GoldenFile {
            path,
            message: e.to_string(),
        })
    }

    fn compare_golden(&mut self) -> TestResult<()> {
        let path = self.golden_path();
        if !Path::new(&path).exists() {
            // No golden yet; compare mode degrades to inline checks only.
            return Ok(());
        }
        let body = fs::read_to_string(&path).map_err(|e| TestError::GoldenFile {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let golden: Vec<f64> = body
            .lines()
            .filter_map(|l| l.trim().parse::<f64>().ok())
            .collect();
        if golden.len() != self.recorded.len() {
            return Err(TestError::GoldenShape {
                expected: self.recorded.len(),
                actual: golden.len(),
            });
        }
        let recorded = self.recorded.clone();
        for (g, r) in golden.into_iter().zip(recorded) {
            self.compare_values(g, r, 1e-9);
        }
        Ok(())
    }
}
