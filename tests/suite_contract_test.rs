//! Contract tests: the checklist suite's rendered output must satisfy the
//! verifier, and the notebook adapter must deliver it intact.

use std::fs;

use kitcheck::checks::{CheckSuite, SuiteConfig, DEPENDENCY_INVENTORY};
use kitcheck::notebook;
use kitcheck::probe::{ProbeOutput, ScriptedProbe};
use kitcheck::verify::{verify_output, VerificationFailure};
use tempfile::TempDir;

fn resolve_script(import_name: &str) -> String {
    format!(
        "import importlib.util, sys; sys.exit(0 if importlib.util.find_spec('{}') else 1)",
        import_name
    )
}

fn healthy_probe() -> ScriptedProbe {
    let mut probe = ScriptedProbe::new();
    probe.respond("python --version", ProbeOutput::success("Python 3.11.4\n"));
    probe.respond("pip --version", ProbeOutput::success("pip 23.2\n"));
    probe.respond("conda --version", ProbeOutput::success("conda 24.1.2\n"));
    probe.respond("git --version", ProbeOutput::success("git version 2.39.5\n"));
    probe.respond(
        "git rev-parse --is-inside-work-tree",
        ProbeOutput::success("true\n"),
    );
    probe.respond(
        "jupyter --version",
        ProbeOutput::success("jupyter core: 5.3.1\n"),
    );
    for entry in DEPENDENCY_INVENTORY {
        probe.respond(
            &format!("python -c {}", resolve_script(entry.import_name)),
            ProbeOutput::success(""),
        );
    }
    probe
}

fn config() -> SuiteConfig {
    SuiteConfig::new("IT2053C")
        .with_username(Some("abc12345".to_string()))
        .with_active_env(Some("IT2053C".to_string()))
}

fn render(suite_lines: Vec<kitcheck::checks::StatusLine>) -> String {
    suite_lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn healthy_suite_output_verifies_clean() {
    let probe = healthy_probe();
    let blob = render(CheckSuite::new(config(), &probe).run());

    let report = verify_output(&blob);
    assert!(report.passed(), "failures: {:?}", report.failures);
    assert_eq!(report.marker_count, 8);
    assert_eq!(report.greeting.as_deref(), Some("👋 Hello, abc12345!"));
}

#[test]
fn missing_tool_breaks_verification_with_count_and_pattern() {
    let mut probe = healthy_probe();
    probe.forget("jupyter --version");
    let blob = render(CheckSuite::new(config(), &probe).run());

    let report = verify_output(&blob);
    assert!(!report.passed());
    assert_eq!(report.marker_count, 7);
    assert!(report
        .failures
        .contains(&VerificationFailure::MarkerCountMismatch {
            expected: 8,
            actual: 7,
        }));
    assert_eq!(
        report.missing_patterns(),
        &["✅ Current jupyter version:".to_string()]
    );
}

#[test]
fn unresolved_libraries_do_not_break_the_marker_count() {
    // a missing library adds failure lines but the dependency summary is
    // still exactly one success marker
    let mut probe = healthy_probe();
    probe.respond(
        &format!("python -c {}", resolve_script("seaborn")),
        ProbeOutput::failure(1, ""),
    );
    let blob = render(CheckSuite::new(config(), &probe).run());

    let report = verify_output(&blob);
    assert!(report.passed(), "failures: {:?}", report.failures);
    assert!(blob.contains("🚨 seaborn not found"));
}

#[test]
fn suite_output_round_trips_through_a_notebook_document() {
    let probe = healthy_probe();
    let blob = render(CheckSuite::new(config(), &probe).run());

    // persist the run the way a notebook does: one stream fragment per line
    let lines: Vec<String> = blob.lines().map(|l| format!("{}\n", l)).collect();
    let document = serde_json::json!({
        "cells": [
            {"cell_type": "markdown", "source": ["# Environment Setup Checker"]},
            {"cell_type": "code", "outputs": [
                {"output_type": "stream", "name": "stdout", "text": lines}
            ]}
        ]
    });

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("setup-checker.ipynb");
    fs::write(&path, serde_json::to_string(&document).unwrap()).unwrap();

    let extracted = notebook::extract_output(&path).unwrap();
    let report = verify_output(&extracted);
    assert!(report.passed(), "failures: {:?}", report.failures);
}

#[test]
fn verification_is_idempotent_across_runs() {
    let mut probe = healthy_probe();
    probe.forget("git --version");
    let blob = render(CheckSuite::new(config(), &probe).run());

    let first = verify_output(&blob);
    let second = verify_output(&blob);
    assert_eq!(first, second);
}
