//! The state machine bridging the selection model and the keyboard.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated as the user moves
//! around the tree. The selection itself stays a plain set model; this layer decides which
//! toggles are allowed, so codes already saved on the appointment group stay locked.

use crate::context::{AppointmentGroup, Catalog, Context};
use crate::dropdown::{Controller, Dropdown, Focus};
use crate::selection::Selection;
use crate::summary::{self, Messages};
use crate::tree::{self, CheckboxRow, RowKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Codes picked in the selector, in the same shape as an appointment group.
pub struct SelectedCodes {
    /// Selected contexts, fully or partially.
    pub context_codes: BTreeSet<String>,
    /// Individually selected sections of partially selected contexts.
    pub sub_context_codes: BTreeSet<String>,
}

/// Owns everything the selector shows and routes user actions into the selection model.
pub struct AppState {
    /// Supplied contexts with their lookup tables.
    pub catalog: Catalog,
    /// Codes already saved, which lock their checkboxes.
    pub group: AppointmentGroup,
    /// Current picks and expanded courses.
    pub selection: Selection,
    /// Popover state and keyboard focus.
    pub controller: Controller,
    /// Highlighted row among the visible rows of the tree.
    pub cursor: usize,
    /// Styling class passed through to the root block.
    pub class_name: Option<String>,
    /// Translated strings.
    pub messages: Messages,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
}

impl AppState {
    #[must_use]
    /// Builds the selector over the supplied contexts, seeded from the committed group.
    pub fn new(contexts: Vec<Context>, group: AppointmentGroup, messages: Messages) -> Self {
        let catalog = Catalog::new(contexts);
        let selection = Selection::seeded(&catalog, &group);
        info!(
            contexts = catalog.contexts().len(),
            committed = group.context_codes.len() + group.sub_context_codes.len(),
            "selector ready"
        );
        Self {
            catalog,
            group,
            selection,
            controller: Controller::default(),
            cursor: 0,
            class_name: None,
            messages,
            message: None,
        }
    }

    #[must_use]
    /// Sets the styling class shown on the root block.
    pub fn with_class_name(mut self, class_name: Option<String>) -> Self {
        self.class_name = class_name.filter(|c| !c.is_empty());
        self
    }

    /// Accepts a new appointment group, discarding every pick and collapsing the tree.
    pub fn receive_group(&mut self, group: AppointmentGroup) {
        self.selection = Selection::seeded(&self.catalog, &group);
        self.group = group;
        self.cursor = 0;
        debug!("selection reset from appointment group");
    }

    /// Throws away unsaved picks by re-seeding from the current group.
    pub fn revert(&mut self) {
        self.receive_group(self.group.clone());
        self.message = Some("Reverted".to_string());
    }

    #[must_use]
    /// Rows currently visible in the tree, with the tri-state pass applied.
    pub fn rows(&self) -> Vec<CheckboxRow> {
        tree::render_tree(&self.catalog, &self.selection, &self.group)
    }

    #[must_use]
    /// The row under the cursor, if the tree has any rows.
    pub fn current_row(&self) -> Option<CheckboxRow> {
        self.rows().into_iter().nth(self.cursor)
    }

    #[must_use]
    /// Text for the summary button.
    pub fn button_text(&self) -> String {
        summary::button_text(&self.catalog, &self.selection, &self.messages)
    }

    #[must_use]
    /// Whether the dropdown is showing.
    pub fn is_open(&self) -> bool {
        self.controller.state == Dropdown::Open
    }

    /// Activates the summary button.
    pub fn activate_button(&mut self) {
        self.controller.activate_button();
        debug!(open = self.is_open(), "dropdown button activated");
    }

    /// Activates the Done button, closing the dropdown and focusing the summary button.
    pub fn activate_done(&mut self) {
        self.controller.activate_done();
        debug!("dropdown closed");
    }

    /// Moves the cursor up one row.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor down one row, stopping at the last.
    pub fn cursor_down(&mut self) {
        let len = self.rows().len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Flips the checkbox under the cursor unless it is locked.
    ///
    /// Returns whether anything changed.
    pub fn toggle_at_cursor(&mut self) -> bool {
        let Some(row) = self.current_row() else {
            return false;
        };
        if row.disabled {
            self.message = Some(format!("{} is already saved", row.label));
            debug!(id = %row.id, "ignored toggle of committed code");
            return false;
        }

        let select = !row.is_checked();
        match row.kind {
            RowKind::Context => {
                self.selection
                    .toggle_context(&self.catalog, &row.id, select);
            }
            RowKind::Section => {
                self.selection
                    .toggle_section(&self.catalog, &row.context, &row.id, select);
            }
        }
        self.message = None;
        debug!(id = %row.id, select, "toggled");
        true
    }

    /// Flips whether the course under the cursor shows its sections.
    ///
    /// On a section row this collapses the owning course and moves the cursor onto it.
    pub fn toggle_expand_at_cursor(&mut self) {
        let Some(row) = self.current_row() else {
            return;
        };
        match row.kind {
            RowKind::Context => self.selection.toggle_expanded(&row.id),
            RowKind::Section => self.collapse_at_cursor(),
        }
    }

    /// Shows the sections of the course under the cursor.
    pub fn expand_at_cursor(&mut self) {
        if let Some(row) = self.current_row() {
            if row.kind == RowKind::Context && !row.expanded {
                self.selection.toggle_expanded(&row.id);
            }
        }
    }

    /// Hides the sections of the course under (or owning the section under) the cursor.
    pub fn collapse_at_cursor(&mut self) {
        let Some(row) = self.current_row() else {
            return;
        };
        if !self.selection.is_expanded(&row.context) {
            return;
        }
        self.selection.toggle_expanded(&row.context);
        if let Some(index) = self
            .rows()
            .iter()
            .position(|r| r.kind == RowKind::Context && r.id == row.context)
        {
            self.cursor = index;
        }
    }

    /// Routes the primary action (Enter) to whichever control has focus.
    pub fn activate_focused(&mut self) {
        match self.controller.focus {
            Focus::Button => self.activate_button(),
            Focus::Tree => self.toggle_expand_at_cursor(),
            Focus::Done => self.activate_done(),
        }
    }

    #[must_use]
    /// The picks in appointment group form, for the host to read.
    pub fn selected_codes(&self) -> SelectedCodes {
        SelectedCodes {
            context_codes: self.selection.contexts.clone(),
            sub_context_codes: self.selection.sub_contexts.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
