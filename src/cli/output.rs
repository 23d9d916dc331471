//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{DomDiffError, TreeError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &DomDiffError) -> String {
    match e {
        DomDiffError::Io { .. } => format!("Error: {}", e),
        DomDiffError::Tree(TreeError::NoRootElement { .. }) => {
            format!("Error: {}. Only complete documents can be compared.", e)
        }
        _ => e.to_string(),
    }
}
