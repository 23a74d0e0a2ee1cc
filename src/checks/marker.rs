//! Status-line vocabulary for checklist output.
//!
//! `Marker` is the canonical set of glyphs prefixing checklist lines. The
//! verifier counts `Success` glyphs and matches on rendered lines, so the
//! glyphs here are the contract, not decoration.

use std::fmt;

/// Canonical marker glyphs used in checklist output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The greeting line opening a run.
    Greeting,
    /// A check that passed.
    Success,
    /// A check that failed.
    Failure,
}

impl Marker {
    /// The glyph prefixing a rendered line.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Greeting => "👋",
            Self::Success => "✅",
            Self::Failure => "🚨",
        }
    }
}

/// One rendered check outcome: a marker plus a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub marker: Marker,
    pub message: String,
}

impl StatusLine {
    /// Create a greeting line.
    pub fn greeting(message: impl Into<String>) -> Self {
        Self {
            marker: Marker::Greeting,
            message: message.into(),
        }
    }

    /// Create a success line.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            marker: Marker::Success,
            message: message.into(),
        }
    }

    /// Create a failure line.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            marker: Marker::Failure,
            message: message.into(),
        }
    }

    /// Whether this line carries the success marker.
    pub fn is_success(&self) -> bool {
        self.marker == Marker::Success
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.marker.glyph(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_are_distinct() {
        assert_ne!(Marker::Greeting.glyph(), Marker::Success.glyph());
        assert_ne!(Marker::Success.glyph(), Marker::Failure.glyph());
    }

    #[test]
    fn success_line_renders_with_marker() {
        let line = StatusLine::success("Current git version: 2.39.5");
        assert_eq!(line.to_string(), "✅ Current git version: 2.39.5");
        assert!(line.is_success());
    }

    #[test]
    fn failure_line_renders_with_marker() {
        let line = StatusLine::failure("pip not found");
        assert_eq!(line.to_string(), "🚨 pip not found");
        assert!(!line.is_success());
    }

    #[test]
    fn greeting_line_renders_with_marker() {
        let line = StatusLine::greeting("Hello, abc12345!");
        assert_eq!(line.to_string(), "👋 Hello, abc12345!");
        assert!(!line.is_success());
    }
}
