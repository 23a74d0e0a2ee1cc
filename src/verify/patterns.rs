//! The expected output patterns.
//!
//! This table mirrors the checklist suite line for line. A new countable
//! check means a new entry here and a bumped marker count; the two sides
//! must move together.

use std::sync::LazyLock;

use regex::Regex;

/// The glyph counted as a successful check.
pub const SUCCESS_MARKER: &str = "✅";

/// How many success markers a complete run produces.
pub const EXPECTED_MARKER_COUNT: usize = 8;

/// Greeting line: marker, the word Hello, a username token, an exclamation.
pub static GREETING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"👋 Hello, \w+!").unwrap());

/// A named pattern the blob must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedPattern {
    /// Short name used when reporting an absence.
    pub name: &'static str,
    /// Literal text that must occur at least once.
    pub text: &'static str,
}

/// One pattern per countable check, in suite order.
pub const EXPECTED_PATTERNS: &[ExpectedPattern] = &[
    ExpectedPattern {
        name: "python-version",
        text: "✅ Current python version:",
    },
    ExpectedPattern {
        name: "pip-version",
        text: "✅ Current pip version:",
    },
    ExpectedPattern {
        name: "conda-version",
        text: "✅ Current conda version:",
    },
    ExpectedPattern {
        name: "environment",
        text: "✅ Current environment:",
    },
    ExpectedPattern {
        name: "dependencies",
        text: "✅ Current dependencies:",
    },
    ExpectedPattern {
        name: "git-version",
        text: "✅ Current git version:",
    },
    ExpectedPattern {
        name: "git-repository",
        text: "✅ Current directory is a git repository",
    },
    ExpectedPattern {
        name: "jupyter-version",
        text: "✅ Current jupyter version:",
    },
];
