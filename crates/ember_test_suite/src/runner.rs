//! Test runner for executing test suites
//!
//! Manages test execution, result collection, and reporting.

use crate::harness::{TestContext, TestHarness, TestHarnessConfig, TestResult};
use anyhow::Result;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Boxed test body
pub type TestFn = Box<dyn FnOnce(&mut TestContext)>;

/// A single test case
pub struct TestCase {
    /// Test name
    pub name: String,
    /// Test category
    pub category: String,
    /// Test function
    pub test_fn: TestFn,
}

impl TestCase {
    pub fn new<F>(name: &str, category: &str, test_fn: F) -> Self
    where
        F: FnOnce(&mut TestContext) + 'static,
    {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            test_fn: Box::new(test_fn),
        }
    }

    /// `category::name`
    pub fn full_name(&self) -> String {
        format!("{}::{}", self.category, self.name)
    }
}

/// Result of running a test
pub struct TestRun {
    /// Test name
    pub name: String,
    /// Test category
    pub category: String,
    /// Test result
    pub result: TestResult,
    /// Time taken
    pub duration: Duration,
}

impl TestRun {
    pub fn is_passed(&self) -> bool {
        self.result.is_passed()
    }
}

/// Test suite containing multiple test cases
pub struct TestSuite {
    /// Suite name
    pub name: String,
    /// Test cases
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cases: Vec::new(),
        }
    }

    pub fn add<F>(&mut self, name: &str, test_fn: F) -> &mut Self
    where
        F: FnOnce(&mut TestContext) + 'static,
    {
        self.cases.push(TestCase::new(name, &self.name, test_fn));
        self
    }
}

/// Test runner for executing suites
pub struct TestRunner {
    /// Test harness
    harness: TestHarness,
    /// Test suites to run
    suites: Vec<TestSuite>,
    /// Filter pattern (None = run all)
    filter: Option<String>,
}

impl TestRunner {
    /// Create a new test runner
    pub fn new() -> Result<Self> {
        Ok(Self::with_harness(TestHarness::new()?))
    }

    /// Create a runner writing to a custom location
    pub fn with_config(config: TestHarnessConfig) -> Result<Self> {
        Ok(Self::with_harness(TestHarness::with_config(config)?))
    }

    /// Create with custom harness
    pub fn with_harness(harness: TestHarness) -> Self {
        Self {
            harness,
            suites: Vec::new(),
            filter: None,
        }
    }

    /// Add a test suite
    pub fn add_suite(&mut self, suite: TestSuite) -> &mut Self {
        self.suites.push(suite);
        self
    }

    /// Set a filter pattern
    pub fn filter(&mut self, pattern: &str) -> &mut Self {
        self.filter = Some(pattern.to_string());
        self
    }

    /// Run all tests
    pub fn run(&mut self) -> RunResult {
        let start = Instant::now();
        let mut results = Vec::new();

        for suite in self.suites.drain(..) {
            tracing::info!("Running suite: {}", suite.name);

            for case in suite.cases {
                // Apply filter if set
                if let Some(ref pattern) = self.filter {
                    if !case.name.contains(pattern) && !case.category.contains(pattern) {
                        continue;
                    }
                }

                let test_start = Instant::now();
                let full_name = case.full_name();

                tracing::debug!("Running test: {}", full_name);

                let result = match self.harness.run_test(&full_name, case.test_fn) {
                    Ok(result) => result,
                    Err(e) => {
                        tracing::error!("Test {} failed with error: {:#}", full_name, e);
                        TestResult::CheckFailed {
                            failures: vec![format!("{:#}", e)],
                        }
                    }
                };

                let duration = test_start.elapsed();
                if result.is_passed() {
                    tracing::info!("  ✓ {} ({:?})", case.name, duration);
                } else {
                    tracing::error!("  ✗ {} ({:?})", case.name, duration);
                }

                results.push(TestRun {
                    name: case.name,
                    category: case.category,
                    result,
                    duration,
                });
            }
        }

        RunResult::new(results, start.elapsed())
    }

    /// Get the harness
    pub fn harness(&self) -> &TestHarness {
        &self.harness
    }
}

/// Results from running tests
pub struct RunResult {
    /// Individual test results
    pub results: Vec<TestRun>,
    /// Total time taken
    pub duration: Duration,
}

impl RunResult {
    pub fn new(results: Vec<TestRun>, duration: Duration) -> Self {
        Self { results, duration }
    }

    /// Count of passed tests
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.is_passed()).count()
    }

    /// Count of failed tests
    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| !r.is_passed()).count()
    }

    /// Total test count
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// All tests passed
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.is_passed())
    }

    /// Get results by category
    pub fn by_category(&self) -> BTreeMap<&str, Vec<&TestRun>> {
        let mut map: BTreeMap<&str, Vec<&TestRun>> = BTreeMap::new();
        for result in &self.results {
            map.entry(result.category.as_str()).or_default().push(result);
        }
        map
    }

    /// Print summary
    pub fn print_summary(&self) {
        println!("\n╔══════════════════════════════════════════╗");
        println!("║           TEST RESULTS SUMMARY           ║");
        println!("╠══════════════════════════════════════════╣");
        for (category, runs) in self.by_category() {
            let passed = runs.iter().filter(|r| r.is_passed()).count();
            println!("║  {:<14} {:>3}/{:<3}                    ║", category, passed, runs.len());
        }
        println!("╠══════════════════════════════════════════╣");
        println!("║  Passed:  {:>5}                          ║", self.passed());
        println!("║  Failed:  {:>5}                          ║", self.failed());
        println!("║  Total:   {:>5}                          ║", self.total());
        println!("║  Time:    {:>8.2?}                      ║", self.duration);
        println!("╚══════════════════════════════════════════╝");

        if self.failed() > 0 {
            println!("\nFailed tests:");
            for run in self.results.iter().filter(|r| !r.is_passed()) {
                println!("  ✗ {}::{}", run.category, run.name);
                match &run.result {
                    TestResult::Failed {
                        difference,
                        diff_path,
                    } => println!(
                        "      snapshot differs by {:.1}% (see {:?})",
                        difference * 100.0,
                        diff_path
                    ),
                    TestResult::CheckFailed { failures } => {
                        for failure in failures {
                            println!("      {}", failure);
                        }
                    }
                    TestResult::Passed | TestResult::PassedWithNewReference => {}
                }
            }
        }
    }
}
