//! Notebook document adapter.
//!
//! Extracts previously captured output from a Jupyter notebook file into a
//! single flat text blob for the verifier. Only two output shapes are read:
//! `stream` text and the `text/plain` value of an `execute_result`; both may
//! be a single string or a list of string fragments. Everything else in the
//! document is ignored.
//!
//! The verifier itself never sees the notebook schema: it consumes the
//! blob this adapter produces, so plain-log input can bypass this module
//! entirely.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{KitcheckError, Result};

#[derive(Debug, Deserialize)]
struct Notebook {
    cells: Vec<Cell>,
}

#[derive(Debug, Deserialize)]
struct Cell {
    cell_type: String,
    #[serde(default)]
    outputs: Vec<CellOutput>,
}

#[derive(Debug, Deserialize)]
struct CellOutput {
    output_type: String,
    #[serde(default)]
    text: Option<Value>,
    #[serde(default)]
    data: Option<BTreeMap<String, Value>>,
}

/// Join a notebook text value: either one string or a list of string
/// fragments concatenated with no separator. Anything else is not text.
fn join_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(parts) => Some(
            parts
                .iter()
                .filter_map(|part| part.as_str())
                .collect::<Vec<_>>()
                .concat(),
        ),
        _ => None,
    }
}

/// Extract captured output from notebook JSON source.
///
/// Walks code cells in document order, collecting `stream` text and
/// `execute_result` plain text, joined by newlines.
pub fn extract_from_str(source: &str) -> std::result::Result<String, serde_json::Error> {
    let notebook: Notebook = serde_json::from_str(source)?;

    let mut fragments = Vec::new();
    for cell in &notebook.cells {
        if cell.cell_type != "code" {
            continue;
        }
        for output in &cell.outputs {
            match output.output_type.as_str() {
                "stream" => {
                    if let Some(text) = output.text.as_ref().and_then(join_text) {
                        fragments.push(text);
                    }
                }
                "execute_result" => {
                    if let Some(text) = output
                        .data
                        .as_ref()
                        .and_then(|data| data.get("text/plain"))
                        .and_then(join_text)
                    {
                        fragments.push(text);
                    }
                }
                _ => {}
            }
        }
    }

    Ok(fragments.join("\n"))
}

/// Extract captured output from a notebook file.
pub fn extract_output(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(KitcheckError::OutputFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let source = fs::read_to_string(path)?;
    extract_from_str(&source).map_err(|e| KitcheckError::NotebookParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
