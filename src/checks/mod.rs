//! The environment checklist.
//!
//! A checklist run executes a fixed ordered sequence of independent probes
//! (interpreter, package manager, environment manager, version control,
//! notebook runner, importable libraries) and renders one marker-prefixed
//! status line per outcome. The rendered lines are the whole contract:
//! the [`crate::verify`] module counts and matches them later.

pub mod inventory;
pub mod marker;
pub mod suite;

pub use inventory::{format_python_list, DependencyEntry, DEPENDENCY_INVENTORY};
pub use marker::{Marker, StatusLine};
pub use suite::{CheckSuite, SuiteConfig, DEFAULT_ENV_NAME};
