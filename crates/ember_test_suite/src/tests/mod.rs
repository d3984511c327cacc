//! Render test cases organized by category

pub mod button;

use crate::runner::TestSuite;

/// Create all test suites
pub fn all_suites() -> Vec<TestSuite> {
    vec![
        button::suite(),
        label::suite(),
        visibility::suite(),
        lifecycle::suite(),
    ]
}
