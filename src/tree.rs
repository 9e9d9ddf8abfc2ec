//! Flattens the context list into checkbox rows for drawing.
//!
//! Rows are built with a plain checked or unchecked state first; the indeterminate state is
//! applied afterwards from an identifier-keyed map, on every render.

use crate::context::{AppointmentGroup, Catalog};
use crate::selection::{Selection, TriState};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Whether a row stands for a whole context or one of its sections.
pub enum RowKind {
    /// A course row with an expand toggle.
    Context,
    /// A section row nested under its course.
    Section,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One visible checkbox in the tree.
pub struct CheckboxRow {
    /// Context or section.
    pub kind: RowKind,
    /// Identifier of the context or section this checkbox controls.
    pub id: String,
    /// Identifier of the owning context (equal to `id` for context rows).
    pub context: String,
    /// Label text.
    pub label: String,
    /// Nesting depth: 0 for contexts, 1 for sections.
    pub depth: usize,
    /// Checkbox state. [`render_rows`] only produces `Checked` or `Unchecked`;
    /// `Indeterminate` comes from [`apply_indeterminates`].
    pub state: TriState,
    /// Locked because the code is already saved on the appointment group.
    pub disabled: bool,
    /// Whether the course's sections follow this row. Always false for sections.
    pub expanded: bool,
    /// Whether this is the last row among its siblings, for drawing tree guides.
    pub is_last: bool,
}

fn checked_state(checked: bool) -> TriState {
    if checked {
        TriState::Checked
    } else {
        TriState::Unchecked
    }
}

impl CheckboxRow {
    #[must_use]
    /// Whether the checkbox reads as ticked, fully or partially.
    pub fn is_checked(&self) -> bool {
        self.state != TriState::Unchecked
    }

    #[must_use]
    /// Element id of the checkbox, `<id>_checkbox`.
    pub fn input_id(&self) -> String {
        format!("{}_checkbox", self.id)
    }
}

#[must_use]
/// Builds the rows for every listed context, with sections under expanded courses.
pub fn render_rows(
    catalog: &Catalog,
    selection: &Selection,
    group: &AppointmentGroup,
) -> Vec<CheckboxRow> {
    let listed: Vec<_> = catalog.listed().collect();
    let mut rows = Vec::new();

    for (i, context) in listed.iter().enumerate() {
        let id = &context.asset_string;
        let expanded = selection.is_expanded(id);
        rows.push(CheckboxRow {
            kind: RowKind::Context,
            id: id.clone(),
            context: id.clone(),
            label: context.name.clone(),
            depth: 0,
            state: checked_state(selection.is_context_checked(id)),
            disabled: group.is_context_committed(id),
            expanded,
            is_last: i + 1 == listed.len(),
        });

        if !expanded {
            continue;
        }
        for (j, section) in context.sections.iter().enumerate() {
            let section_id = &section.asset_string;
            rows.push(CheckboxRow {
                kind: RowKind::Section,
                id: section_id.clone(),
                context: id.clone(),
                label: section.name.clone(),
                depth: 1,
                state: checked_state(selection.is_section_checked(catalog, id, section_id)),
                disabled: group.is_section_committed(id, section_id),
                expanded: false,
                is_last: j + 1 == context.sections.len(),
            });
        }
    }

    rows
}

/// Marks context rows indeterminate where the tri-state map says so.
///
/// Section rows and contexts without an entry keep their checked value.
pub fn apply_indeterminates(rows: &mut [CheckboxRow], tri_states: &BTreeMap<String, TriState>) {
    for row in rows.iter_mut().filter(|r| r.kind == RowKind::Context) {
        if tri_states.get(&row.id) == Some(&TriState::Indeterminate) {
            row.state = TriState::Indeterminate;
        }
    }
}

#[must_use]
/// Renders the rows and applies the tri-state pass.
pub fn render_tree(
    catalog: &Catalog,
    selection: &Selection,
    group: &AppointmentGroup,
) -> Vec<CheckboxRow> {
    let mut rows = render_rows(catalog, selection, group);
    apply_indeterminates(&mut rows, &selection.tri_states(catalog));
    rows
}

#[cfg(test)]
#[path = "tests/tree.rs"]
mod tests;
