//! The three-state selection model over contexts and their sections.
//!
//! Appointment groups do not store section codes when every section of a course is included:
//! the course code alone means "all of it". A course code together with some of its section
//! codes means "only these sections", which the tree shows as an indeterminate checkbox.
//! Every mutation ends with [`Selection::normalize`] so two selections describing the same
//! choice compare equal.

use crate::context::{AppointmentGroup, Catalog};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Visual state of a context checkbox.
pub enum TriState {
    /// Every section is included.
    Checked,
    /// Nothing is included.
    Unchecked,
    /// Some but not all sections are included.
    Indeterminate,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Which contexts and sections are picked, and which courses are expanded in the tree.
pub struct Selection {
    /// Selected context identifiers, fully or partially.
    pub contexts: BTreeSet<String>,
    /// Individually selected sections of partially selected contexts.
    pub sub_contexts: BTreeSet<String>,
    /// Courses whose sections are shown.
    pub expanded: BTreeSet<String>,
}

impl Selection {
    #[must_use]
    /// Starts over from the codes saved on the appointment group, with every course collapsed.
    pub fn seeded(catalog: &Catalog, group: &AppointmentGroup) -> Self {
        let mut selection = Self {
            contexts: group.context_codes.clone(),
            sub_contexts: group.sub_context_codes.clone(),
            expanded: BTreeSet::new(),
        };
        selection.normalize(catalog);
        selection
    }

    /// Selects or clears a whole context.
    ///
    /// Any section-level choice for the context is discarded either way.
    pub fn toggle_context(&mut self, catalog: &Catalog, context: &str, select: bool) {
        if select {
            self.contexts.insert(context.to_string());
        } else {
            self.contexts.remove(context);
        }
        for section in catalog.sections_of(context) {
            self.sub_contexts.remove(section);
        }
        self.normalize(catalog);
    }

    /// Selects or clears a single section, reconciling the owning context.
    ///
    /// A section outside the context's own sections leaves the selection untouched.
    pub fn toggle_section(&mut self, catalog: &Catalog, context: &str, section: &str, select: bool) {
        let siblings: BTreeSet<&str> = catalog
            .sections_of(context)
            .iter()
            .map(String::as_str)
            .collect();
        if !siblings.contains(section) {
            return;
        }

        let mut checked: BTreeSet<&str> = siblings
            .iter()
            .copied()
            .filter(|s| self.sub_contexts.contains(*s))
            .collect();

        // a selected context with no listed sections implicitly has all of them
        if checked.is_empty() && self.contexts.contains(context) {
            checked.clone_from(&siblings);
        }

        if select {
            checked.insert(section);
        } else {
            checked.remove(section);
        }

        for sibling in &siblings {
            self.sub_contexts.remove(*sibling);
        }

        if checked == siblings {
            self.contexts.insert(context.to_string());
        } else if checked.is_empty() {
            self.contexts.remove(context);
        } else {
            self.contexts.insert(context.to_string());
            self.sub_contexts
                .extend(checked.into_iter().map(str::to_string));
        }
        self.normalize(catalog);
    }

    /// Rewrites the selection into its canonical form.
    ///
    /// A selected context with all of its sections listed keeps only its own code. Contexts that
    /// are not selected are left alone, so sections committed without their course do not check
    /// the course.
    pub fn normalize(&mut self, catalog: &Catalog) {
        for context in catalog.contexts() {
            if !self.contexts.contains(&context.asset_string) {
                continue;
            }
            let sections = catalog.sections_of(&context.asset_string);
            if sections.is_empty() {
                continue;
            }
            if sections.iter().all(|s| self.sub_contexts.contains(s)) {
                for section in sections {
                    self.sub_contexts.remove(section);
                }
            }
        }
    }

    #[must_use]
    /// Whether the context is selected, fully or partially.
    pub fn is_context_checked(&self, context: &str) -> bool {
        self.contexts.contains(context)
    }

    #[must_use]
    /// Whether the context is selected with only some of its sections.
    pub fn is_context_indeterminate(&self, catalog: &Catalog, context: &str) -> bool {
        self.contexts.contains(context)
            && catalog
                .sections_of(context)
                .iter()
                .any(|s| self.sub_contexts.contains(s))
    }

    #[must_use]
    /// Whether the section reads as checked, including implicitly through a full context.
    pub fn is_section_checked(&self, catalog: &Catalog, context: &str, section: &str) -> bool {
        self.sub_contexts.contains(section)
            || (self.is_context_checked(context) && !self.is_context_indeterminate(catalog, context))
    }

    #[must_use]
    /// Checkbox state of a context.
    pub fn tri_state(&self, catalog: &Catalog, context: &str) -> TriState {
        if self.is_context_indeterminate(catalog, context) {
            TriState::Indeterminate
        } else if self.is_context_checked(context) {
            TriState::Checked
        } else {
            TriState::Unchecked
        }
    }

    #[must_use]
    /// Checkbox state of every listed context, keyed by identifier.
    pub fn tri_states(&self, catalog: &Catalog) -> BTreeMap<String, TriState> {
        catalog
            .listed()
            .map(|c| (c.asset_string.clone(), self.tri_state(catalog, &c.asset_string)))
            .collect()
    }

    #[must_use]
    /// Whether the course's sections are shown.
    pub fn is_expanded(&self, context: &str) -> bool {
        self.expanded.contains(context)
    }

    /// Shows or hides a course's sections.
    pub fn toggle_expanded(&mut self, context: &str) {
        if !self.expanded.remove(context) {
            self.expanded.insert(context.to_string());
        }
    }
}

#[cfg(test)]
#[path = "tests/selection.rs"]
mod tests;
