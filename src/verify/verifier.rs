//! Blob verification against the checklist contract.

use std::fmt;

use crate::verify::patterns::{
    EXPECTED_MARKER_COUNT, EXPECTED_PATTERNS, GREETING_PATTERN, SUCCESS_MARKER,
};

/// One violated property of the output contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationFailure {
    /// No greeting line with a username was found.
    GreetingMissing,

    /// The number of success markers differs from the expected count.
    MarkerCountMismatch { expected: usize, actual: usize },

    /// One or more named patterns never occur; every absentee is listed.
    MissingPatterns { patterns: Vec<String> },
}

impl fmt::Display for VerificationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GreetingMissing => write!(f, "Hello message with username not found"),
            Self::MarkerCountMismatch { expected, actual } => {
                write!(f, "Expected {} success markers, found {}", expected, actual)
            }
            Self::MissingPatterns { patterns } => {
                write!(f, "Missing expected output patterns: {}", patterns.join(", "))
            }
        }
    }
}

/// Collected result of verifying a blob.
///
/// All three assertions are always evaluated so a single report names every
/// violated property, not just the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    /// The matched greeting line, if any.
    pub greeting: Option<String>,
    /// How many success markers the blob contains.
    pub marker_count: usize,
    /// Every violated property; empty means the blob passes.
    pub failures: Vec<VerificationFailure>,
}

impl VerificationReport {
    /// Whether the blob satisfies the full contract.
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// The named patterns reported missing, if any.
    pub fn missing_patterns(&self) -> &[String] {
        for failure in &self.failures {
            if let VerificationFailure::MissingPatterns { patterns } = failure {
                return patterns;
            }
        }
        &[]
    }
}

/// Verify a captured-output blob against the checklist contract.
///
/// Pure and idempotent: the same blob always yields the same report.
pub fn verify_output(blob: &str) -> VerificationReport {
    let mut failures = Vec::new();

    let greeting = GREETING_PATTERN
        .find(blob)
        .map(|m| m.as_str().to_string());
    if greeting.is_none() {
        failures.push(VerificationFailure::GreetingMissing);
    }

    let marker_count = blob.matches(SUCCESS_MARKER).count();
    if marker_count != EXPECTED_MARKER_COUNT {
        failures.push(VerificationFailure::MarkerCountMismatch {
            expected: EXPECTED_MARKER_COUNT,
            actual: marker_count,
        });
    }

    let missing: Vec<String> = EXPECTED_PATTERNS
        .iter()
        .filter(|pattern| !blob.contains(pattern.text))
        .map(|pattern| pattern.text.to_string())
        .collect();
    if !missing.is_empty() {
        failures.push(VerificationFailure::MissingPatterns { patterns: missing });
    }

    VerificationReport {
        greeting,
        marker_count,
        failures,
    }
}
