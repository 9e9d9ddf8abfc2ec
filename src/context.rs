//! Calendar contexts, their sections, and the committed appointment group.
//!
//! A context is a course-like scope which may be split into sections. User calendars arrive
//! in the same list but carry no sections; they are kept in the catalog so lookups stay total,
//! but they are never listed in the selector tree.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// A section of a course, selectable on its own.
pub struct SubContext {
    /// Unique identifier token, e.g. `course_section_4`.
    #[serde(alias = "id")]
    pub asset_string: String,
    /// Label shown next to the checkbox.
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// A course-like calendar scope owning an ordered list of sections.
pub struct Context {
    /// Unique identifier token, e.g. `course_1` or `user_7`.
    #[serde(alias = "id")]
    pub asset_string: String,
    /// Label shown next to the checkbox.
    pub name: String,
    /// Sections in display order; empty for user calendars.
    #[serde(default)]
    pub sections: Vec<SubContext>,
}

impl Context {
    #[must_use]
    /// Whether the context appears in the selector tree.
    ///
    /// User calendars are filtered out, as is anything without sections to pick from.
    pub fn is_listed(&self) -> bool {
        !self.asset_string.contains("user") && !self.sections.is_empty()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Codes already saved on the appointment group. These are locked in the selector.
pub struct AppointmentGroup {
    /// Committed context identifiers.
    #[serde(default)]
    pub context_codes: BTreeSet<String>,
    /// Committed section identifiers.
    #[serde(default)]
    pub sub_context_codes: BTreeSet<String>,
}

impl AppointmentGroup {
    #[must_use]
    /// Whether the context was already saved and so cannot be toggled.
    pub fn is_context_committed(&self, context: &str) -> bool {
        self.context_codes.contains(context)
    }

    #[must_use]
    /// Whether the section (or the context owning it) was already saved.
    pub fn is_section_committed(&self, context: &str, section: &str) -> bool {
        self.is_context_committed(context) || self.sub_context_codes.contains(section)
    }
}

/// Context list with lookup tables computed once when the list is supplied.
pub struct Catalog {
    contexts: Vec<Context>,
    names: HashMap<String, String>,
    sections: HashMap<String, Vec<String>>,
    parents: HashMap<String, String>,
    order: HashMap<String, usize>,
}

impl Catalog {
    #[must_use]
    /// Indexes the supplied contexts by identifier.
    pub fn new(contexts: Vec<Context>) -> Self {
        let mut names = HashMap::new();
        let mut sections = HashMap::new();
        let mut parents = HashMap::new();
        let mut order = HashMap::new();

        for context in &contexts {
            let section_ids: Vec<String> = context
                .sections
                .iter()
                .map(|s| s.asset_string.clone())
                .collect();
            sections
                .entry(context.asset_string.clone())
                .or_insert(section_ids);

            // user calendars have no sections and no name in the summary
            if context.sections.is_empty() {
                continue;
            }
            let next = order.len();
            order.entry(context.asset_string.clone()).or_insert(next);
            names
                .entry(context.asset_string.clone())
                .or_insert_with(|| context.name.clone());
            for section in &context.sections {
                let next = order.len();
                order.entry(section.asset_string.clone()).or_insert(next);
                names
                    .entry(section.asset_string.clone())
                    .or_insert_with(|| section.name.clone());
                parents
                    .entry(section.asset_string.clone())
                    .or_insert_with(|| context.asset_string.clone());
            }
        }

        Self {
            contexts,
            names,
            sections,
            parents,
            order,
        }
    }

    #[must_use]
    /// All contexts in the order they were supplied.
    pub fn contexts(&self) -> &[Context] {
        &self.contexts
    }

    /// Contexts shown in the selector tree.
    pub fn listed(&self) -> impl Iterator<Item = &Context> {
        self.contexts.iter().filter(|c| c.is_listed())
    }

    #[must_use]
    /// Display name of a context or section.
    pub fn name(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    #[must_use]
    /// Section identifiers of a context. Unknown contexts have none.
    pub fn sections_of(&self, context: &str) -> &[String] {
        self.sections
            .get(context)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    /// The context owning a section.
    pub fn context_of(&self, section: &str) -> Option<&str> {
        self.parents.get(section).map(String::as_str)
    }

    #[must_use]
    /// Whether the identifier names any known context or section.
    pub fn contains(&self, id: &str) -> bool {
        self.sections.contains_key(id) || self.parents.contains_key(id)
    }

    #[must_use]
    /// The member of `ids` that comes first in tree order.
    ///
    /// Identifiers the catalog does not know sort after known ones, in set order.
    pub fn first_in_order<'a>(&self, ids: &'a BTreeSet<String>) -> Option<&'a str> {
        ids.iter()
            .min_by_key(|id| self.order.get(id.as_str()).copied().unwrap_or(usize::MAX))
            .map(String::as_str)
    }
}
