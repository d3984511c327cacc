//! Ember Render Test Suite
//!
//! Snapshot testing for the Ember component library. Each test mounts
//! components on a fresh surface, drives them, and records the rendered
//! element tree together with the emitted event stream as JSON.
//!
//! # Test Categories
//!
//! - **Button**: modes, sizes, loading and icon content, press dispatch
//! - **Label**: size variants, text change notification, state sync
//! - **Visibility**: render gating and dynamic style precedence
//! - **Lifecycle**: hooks, teardown order and manifests
//!
//! The first run of a test writes its reference snapshot; later runs compare
//! against it and write a line diff next to the output on mismatch.

pub mod harness;
pub mod runner;
pub mod tests;

pub use harness::{TestContext, TestHarness, TestHarnessConfig, TestResult};
pub use runner::TestRunner;
