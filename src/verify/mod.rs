//! Captured-output verification.
//!
//! Validates a flat text blob (extracted from a notebook run or a plain
//! log) against the checklist's textual contract: one greeting line,
//! exactly eight success markers, and one named pattern per countable
//! check.

pub mod patterns;
pub mod verifier;

pub use patterns::{ExpectedPattern, EXPECTED_MARKER_COUNT, EXPECTED_PATTERNS, SUCCESS_MARKER};
pub use verifier::{verify_output, VerificationFailure, VerificationReport};
