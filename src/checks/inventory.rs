//! The course dependency inventory.
//!
//! A fixed enumeration of the Python libraries the course expects. The
//! display name is what students see in output; the import name is what the
//! interpreter resolves (they differ for scikit-learn).

/// One optional library to probe for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyEntry {
    /// Name shown in checklist output.
    pub display_name: &'static str,
    /// Name resolved by the interpreter.
    pub import_name: &'static str,
}

/// The libraries probed by the dependency check, in output order.
pub const DEPENDENCY_INVENTORY: &[DependencyEntry] = &[
    DependencyEntry {
        display_name: "pandas",
        import_name: "pandas",
    },
    DependencyEntry {
        display_name: "numpy",
        import_name: "numpy",
    },
    DependencyEntry {
        display_name: "matplotlib",
        import_name: "matplotlib",
    },
    DependencyEntry {
        display_name: "seaborn",
        import_name: "seaborn",
    },
    DependencyEntry {
        display_name: "scikit-learn",
        import_name: "sklearn",
    },
    DependencyEntry {
        display_name: "plotly",
        import_name: "plotly",
    },
    DependencyEntry {
        display_name: "ipywidgets",
        import_name: "ipywidgets",
    },
];

/// Format names as a Python-style list literal, matching how the course
/// notebook has always rendered the dependency summary.
pub fn format_python_list(names: &[&str]) -> String {
    let quoted: Vec<String> = names.iter().map(|name| format!("'{}'", name)).collect();
    format!("[{}]", quoted.join(", "))
}
