//! Render Test Runner
//!
//! Command-line tool for running render snapshot tests for Ember.
//!
//! Usage:
//!   ember-render-tests                  # Run all tests
//!   ember-render-tests --filter foo     # Run tests matching "foo"
//!   ember-render-tests --list           # List all tests
//!   ember-render-tests --output DIR     # Write snapshots under DIR

use anyhow::Result;
use ember_test_suite::{runner::TestRunner, tests, TestHarnessConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let flag_value = |flag: &str| {
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
            .cloned()
    };

    // Check for --list flag
    if args.iter().any(|a| a == "--list") {
        println!("Available test suites:");
        for suite in tests::all_suites() {
            println!("\n  {}:", suite.name);
            for case in &suite.cases {
                println!("    - {}", case.name);
            }
        }
        return Ok(());
    }

    let filter = flag_value("--filter");
    let config = match flag_value("--output") {
        Some(dir) => TestHarnessConfig::in_dir(dir),
        None => TestHarnessConfig::default(),
    };

    println!("╔══════════════════════════════════════════╗");
    println!("║       EMBER COMPONENT RENDER TESTS       ║");
    println!("╚══════════════════════════════════════════╝\n");

    // Create test runner
    let mut runner = TestRunner::with_config(config)?;

    // Add all test suites
    for suite in tests::all_suites() {
        runner.add_suite(suite);
    }

    // Apply filter if provided
    if let Some(ref pattern) = filter {
        println!("Running tests matching: {}\n", pattern);
        runner.filter(pattern);
    }

    // Run tests
    let result = runner.run();

    // Print summary
    result.print_summary();

    // Exit with error code if any tests failed
    if result.all_passed() {
        println!("\nAll tests passed!");
        Ok(())
    } else {
        std::process::exit(1);
    }
}
