//! Test harness for render snapshot tests
//!
//! Provides infrastructure for running component tests, including:
//! - A fresh rendering surface and event log per test
//! - Snapshotting the rendered tree and emitted events to JSON
//! - Reference snapshot comparison

use anyhow::{Context, Result};
use ember_cn::{AnyConfig, Surface};
use ember_core::{ComponentEvent, Element, EventKind, EventLog};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

/// Result of a snapshot test
#[derive(Debug)]
pub enum TestResult {
    /// Test passed
    Passed,
    /// Test passed but the reference snapshot was created
    PassedWithNewReference,
    /// Snapshot differs from the reference (fraction of differing lines)
    Failed { difference: f32, diff_path: PathBuf },
    /// One or more checks inside the test failed
    CheckFailed { failures: Vec<String> },
}

impl TestResult {
    pub fn is_passed(&self) -> bool {
        matches!(
            self,
            TestResult::Passed | TestResult::PassedWithNewReference
        )
    }
}

/// An emitted event without its timestamp, so snapshots are stable
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordedEvent<'a> {
    component_id: &'a str,
    #[serde(flatten)]
    kind: &'a EventKind,
}

impl<'a> From<&'a ComponentEvent> for RecordedEvent<'a> {
    fn from(event: &'a ComponentEvent) -> Self {
        Self {
            component_id: &event.component_id,
            kind: &event.kind,
        }
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    elements: &'a [Element],
    events: Vec<RecordedEvent<'a>>,
}

/// Context handed to each test
pub struct TestContext {
    /// Test name
    pub name: String,
    /// Surface the test mounts components on
    surface: Surface,
    /// Every event emitted by the surface's components
    log: EventLog,
    /// Failed checks, in the order they were made
    failures: Vec<String>,
}

impl TestContext {
    pub fn new(name: &str) -> Self {
        let log = EventLog::new();
        Self {
            name: name.to_string(),
            surface: Surface::new(log.handlers()),
            log,
            failures: Vec::new(),
        }
    }

    /// The surface under test
    pub fn surface(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Events emitted so far
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Mount a component, recording a failure if mounting errors
    pub fn mount(&mut self, config: impl Into<AnyConfig>) {
        let config = config.into();
        let id = config.id().to_string();
        if let Err(e) = self.surface.mount(config) {
            self.fail(format!("mount {:?}: {}", id, e));
        }
    }

    /// Record a failure unless `condition` holds
    pub fn check(&mut self, condition: bool, message: impl Into<String>) {
        if !condition {
            self.fail(message);
        }
    }

    /// Record a failure unless `actual == expected`
    pub fn check_eq<T: PartialEq + Debug>(&mut self, what: &str, actual: T, expected: T) {
        if actual != expected {
            self.fail(format!("{}: expected {:?}, got {:?}", what, expected, actual));
        }
    }

    /// Record a failure
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("Test '{}': check failed: {}", self.name, message);
        self.failures.push(message);
    }

    /// Take the recorded failures
    pub fn take_failures(&mut self) -> Vec<String> {
        std::mem::take(&mut self.failures)
    }

    /// Render the surface and serialize it together with the event stream
    pub fn snapshot(&self) -> Result<Value> {
        let elements = self
            .surface
            .render()
            .with_context(|| format!("Failed to render surface for '{}'", self.name))?;
        let events = self.log.events();
        let snapshot = Snapshot {
            elements: &elements,
            events: events.iter().map(RecordedEvent::from).collect(),
        };
        serde_json::to_value(&snapshot).context("Failed to serialize snapshot")
    }
}

/// Test harness for running snapshot tests
pub struct TestHarness {
    /// Output directory for test results
    output_dir: PathBuf,
    /// Reference snapshot directory
    reference_dir: PathBuf,
    /// Difference threshold for snapshot comparison (0.0-1.0)
    threshold: f32,
}

impl TestHarness {
    /// Create a new test harness with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(TestHarnessConfig::default())
    }

    /// Create a new test harness with custom configuration
    pub fn with_config(config: TestHarnessConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.output_dir).context("Failed to create output directory")?;
        std::fs::create_dir_all(&config.reference_dir)
            .context("Failed to create reference directory")?;

        Ok(Self {
            output_dir: config.output_dir,
            reference_dir: config.reference_dir,
            threshold: config.threshold,
        })
    }

    /// Create a test context
    pub fn create_context(&self, name: &str) -> TestContext {
        TestContext::new(name)
    }

    /// Run a test and save its snapshot as JSON
    pub fn run_test<F>(&self, name: &str, test_fn: F) -> Result<TestResult>
    where
        F: FnOnce(&mut TestContext),
    {
        let mut ctx = self.create_context(name);

        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| test_fn(&mut ctx))) {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "test panicked".to_string());
            tracing::warn!("Test '{}' panicked: {}", name, message);
            return Ok(TestResult::CheckFailed {
                failures: vec![format!("panic: {}", message)],
            });
        }

        let failures = ctx.take_failures();
        if !failures.is_empty() {
            tracing::warn!("Test '{}' FAILED ({} check(s))", name, failures.len());
            return Ok(TestResult::CheckFailed { failures });
        }

        let snapshot = ctx.snapshot()?;
        let rendered = serde_json::to_string_pretty(&snapshot)?;
        let output_path = self.output_path(name);
        let reference_path = self.reference_path(name);

        std::fs::write(&output_path, &rendered)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::info!(
            "Test '{}': {} element(s), {} event(s)",
            name,
            snapshot["elements"].as_array().map_or(0, Vec::len),
            ctx.log().len()
        );

        // Compare with reference if it exists
        if reference_path.exists() {
            let reference_text = std::fs::read_to_string(&reference_path)
                .context("Failed to open reference snapshot")?;
            let reference: Value = serde_json::from_str(&reference_text)
                .with_context(|| format!("Malformed reference snapshot {:?}", reference_path))?;

            if reference == snapshot {
                tracing::info!("Test '{}' PASSED", name);
                return Ok(TestResult::Passed);
            }

            let expected = serde_json::to_string_pretty(&reference)?;
            let difference = Self::compare_snapshots(&rendered, &expected);
            if difference <= self.threshold {
                tracing::info!("Test '{}' PASSED (diff: {:.4}%)", name, difference * 100.0);
                return Ok(TestResult::Passed);
            }

            let diff_path = self.diff_path(name);
            std::fs::write(&diff_path, Self::generate_diff(&rendered, &expected))
                .with_context(|| format!("Failed to write {:?}", diff_path))?;
            tracing::warn!(
                "Test '{}' FAILED (diff: {:.4}%, threshold: {:.4}%)",
                name,
                difference * 100.0,
                self.threshold * 100.0
            );
            Ok(TestResult::Failed {
                difference,
                diff_path,
            })
        } else {
            // No reference exists - keep output as new reference
            std::fs::copy(&output_path, &reference_path)
                .context("Failed to create reference snapshot")?;
            tracing::info!(
                "Test '{}' created new reference at {:?}",
                name,
                reference_path
            );
            Ok(TestResult::PassedWithNewReference)
        }
    }

    /// Fraction of lines that differ between two pretty-printed snapshots
    pub fn compare_snapshots(actual: &str, expected: &str) -> f32 {
        let actual: Vec<&str> = actual.lines().collect();
        let expected: Vec<&str> = expected.lines().collect();
        let total = actual.len().max(expected.len());
        if total == 0 {
            return 0.0;
        }

        let differing = (0..total)
            .filter(|&i| actual.get(i) != expected.get(i))
            .count();
        differing as f32 / total as f32
    }

    /// Line-by-line listing of the differing lines
    pub fn generate_diff(actual: &str, expected: &str) -> String {
        let actual: Vec<&str> = actual.lines().collect();
        let expected: Vec<&str> = expected.lines().collect();
        let mut diff = String::new();

        for i in 0..actual.len().max(expected.len()) {
            let (a, e) = (actual.get(i), expected.get(i));
            if a == e {
                continue;
            }
            if let Some(e) = e {
                diff.push_str(&format!("{:>5} - {}\n", i + 1, e));
            }
            if let Some(a) = a {
                diff.push_str(&format!("{:>5} + {}\n", i + 1, a));
            }
        }
        diff
    }

    /// Get the reference snapshot path for a test
    pub fn reference_path(&self, name: &str) -> PathBuf {
        self.reference_dir.join(format!("{}.json", file_stem(name)))
    }

    /// Get the output snapshot path for a test
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{}.json", file_stem(name)))
    }

    /// Get the diff path for a test
    pub fn diff_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{}_diff.txt", file_stem(name)))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Test names use `category::case`; keep file names portable
fn file_stem(name: &str) -> String {
    name.replace("::", "__")
}

/// Configuration for test harness
#[derive(Debug, Clone)]
pub struct TestHarnessConfig {
    /// Output directory for test results
    pub output_dir: PathBuf,
    /// Reference snapshot directory
    pub reference_dir: PathBuf,
    /// Difference threshold for snapshot comparison (0.0-1.0)
    pub threshold: f32,
}

impl TestHarnessConfig {
    /// Default layout rooted at `output_dir`
    pub fn in_dir(output_dir: impl Into<PathBuf>) -> Self {
        let output_dir = output_dir.into();
        Self {
            reference_dir: output_dir.join("references"),
            output_dir,
            ..Self::default()
        }
    }
}

impl Default for TestHarnessConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("test_output"),
            reference_dir: PathBuf::from("test_output/references"),
            threshold: 0.0, // snapshots must match exactly
        }
    }
}
