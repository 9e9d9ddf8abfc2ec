//! Dropdown button text summarising the current selection.

use crate::context::Catalog;
use crate::selection::Selection;
use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Translatable strings used by the selector.
///
/// Count templates take `%{contextName}` and `%{count}` placeholders.
pub struct Messages {
    /// Button text when nothing is selected.
    pub placeholder: String,
    /// Label of the button that closes the dropdown.
    pub done: String,
    /// Summary when exactly one other item is selected.
    pub one_other: String,
    /// Summary when several other items are selected.
    pub many_others: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            placeholder: "Select Calendars".to_string(),
            done: "Done".to_string(),
            one_other: "%{contextName} and %{count} other".to_string(),
            many_others: "%{contextName} and %{count} others".to_string(),
        }
    }
}

impl Messages {
    #[must_use]
    /// Picks the singular or plural template for `count` others and fills it in.
    pub fn and_others(&self, context_name: &str, count: usize) -> String {
        let template = if count == 1 {
            &self.one_other
        } else {
            &self.many_others
        };
        template
            .replace("%{contextName}", context_name)
            .replace("%{count}", &count.to_string())
    }
}

fn context_and_count(catalog: &Catalog, ids: &BTreeSet<String>, messages: &Messages) -> String {
    let name = catalog
        .first_in_order(ids)
        .and_then(|id| catalog.name(id))
        .unwrap_or_default();
    if ids.len() > 1 {
        messages.and_others(name, ids.len() - 1)
    } else {
        name.to_string()
    }
}

#[must_use]
/// Text for the dropdown button.
///
/// Section picks take precedence over whole contexts; with neither, or when the only pick has
/// no known name, the placeholder is shown.
pub fn button_text(catalog: &Catalog, selection: &Selection, messages: &Messages) -> String {
    let text = if !selection.sub_contexts.is_empty() {
        context_and_count(catalog, &selection.sub_contexts, messages)
    } else if !selection.contexts.is_empty() {
        context_and_count(catalog, &selection.contexts, messages)
    } else {
        String::new()
    };
    if text.is_empty() {
        messages.placeholder.clone()
    } else {
        text
    }
}

#[cfg(test)]
#[path = "tests/summary.rs"]
mod tests;
