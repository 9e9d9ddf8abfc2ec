//! Reading the context list and committed appointment group supplied by the host.
//!
//! The document is JSON: `{"contexts": [...], "appointment_group": {...}}`. Lookups of unknown
//! identifiers degrade silently elsewhere, so [`validate`] is only run when strict checking is
//! asked for.

use crate::context::{AppointmentGroup, Catalog, Context};
use crate::error::{Result, SelectorError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
/// Everything the host hands the selector.
pub struct SelectorInput {
    /// Calendar contexts in display order.
    pub contexts: Vec<Context>,
    /// Codes already saved, if editing an existing group.
    #[serde(default)]
    pub appointment_group: AppointmentGroup,
}

/// Reads and parses an input document.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid document.
pub fn load_input(path: &Path) -> Result<SelectorInput> {
    let contents = fs::read_to_string(path)?;
    let input = serde_json::from_str(&contents)?;
    Ok(input)
}

/// Rejects inputs with repeated identifiers or committed codes the catalog does not contain.
///
/// # Errors
///
/// Returns the first offending identifier found.
pub fn validate(catalog: &Catalog, group: &AppointmentGroup) -> Result<()> {
    let mut seen = HashSet::new();
    for context in catalog.contexts() {
        let ids = std::iter::once(&context.asset_string)
            .chain(context.sections.iter().map(|s| &s.asset_string));
        for id in ids {
            if !seen.insert(id.as_str()) {
                return Err(SelectorError::DuplicateId(id.clone()));
            }
        }
    }

    if let Some(code) = group
        .context_codes
        .iter()
        .chain(&group.sub_context_codes)
        .find(|code| !catalog.contains(code))
    {
        return Err(SelectorError::UnknownCode(code.clone()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
