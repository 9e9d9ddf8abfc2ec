//! Open/close and focus behaviour of the selector popover.

/// Identifier of the region the dropdown button controls.
pub const DROPDOWN_ID: &str = "context-selector-dropdown";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Whether the checkbox tree is showing.
pub enum Dropdown {
    /// Only the summary button is visible.
    #[default]
    Closed,
    /// The tree and the Done button are visible below the summary button.
    Open,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Which control receives key presses.
pub enum Focus {
    /// The summary button that opens the dropdown.
    #[default]
    Button,
    /// The checkbox tree.
    Tree,
    /// The button that closes the dropdown.
    Done,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Popover state machine together with keyboard focus.
pub struct Controller {
    /// Current popover state.
    pub state: Dropdown,
    /// Current keyboard focus.
    pub focus: Focus,
}

impl Controller {
    #[must_use]
    /// Value of the button's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> bool {
        self.state == Dropdown::Open
    }

    /// Handles activation of the summary button.
    ///
    /// Opening moves focus into the tree; activating it again while open closes it.
    pub fn activate_button(&mut self) {
        match self.state {
            Dropdown::Closed => {
                self.state = Dropdown::Open;
                self.focus = Focus::Tree;
            }
            Dropdown::Open => {
                self.state = Dropdown::Closed;
                self.focus = Focus::Button;
            }
        }
    }

    /// Handles activation of the Done button: closes and hands focus back to the summary button.
    pub fn activate_done(&mut self) {
        self.state = Dropdown::Closed;
        self.focus = Focus::Button;
    }

    /// Moves focus forward. Only the summary button is reachable while closed.
    pub fn next_focus(&mut self) {
        self.focus = match (self.state, self.focus) {
            (Dropdown::Closed, _) | (Dropdown::Open, Focus::Done) => Focus::Button,
            (Dropdown::Open, Focus::Button) => Focus::Tree,
            (Dropdown::Open, Focus::Tree) => Focus::Done,
        };
    }

    /// Moves focus backward.
    pub fn prev_focus(&mut self) {
        self.focus = match (self.state, self.focus) {
            (Dropdown::Closed, _) | (Dropdown::Open, Focus::Tree) => Focus::Button,
            (Dropdown::Open, Focus::Button) => Focus::Done,
            (Dropdown::Open, Focus::Done) => Focus::Tree,
        };
    }
}
