//! The UI renders the selector state into something visible and keyboard-driven.
//!
//! The summary button is always drawn; the checkbox tree and the Done button appear below it
//! while the dropdown is open. Context rows carry an expand arrow, section rows hang off their
//! course with box-drawing guides.

use crate::app_state::AppState;
use crate::config::Config;
use crate::dropdown::{Focus, DROPDOWN_ID};
use crate::selection::TriState;
use crate::tree::{CheckboxRow, RowKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

const ROOT_CLASS: &str = "ContextSelector";

/// Renders the selector for the current application state.
pub fn draw(f: &mut Frame, app: &AppState, cfg: &Config) {
    let root_title = match &app.class_name {
        Some(class) => format!("{ROOT_CLASS} {class}"),
        None => ROOT_CLASS.to_string(),
    };
    let root = Block::default().borders(Borders::ALL).title(root_title);
    let inner = root.inner(f.area());
    f.render_widget(root, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Summary button
            Constraint::Min(0),    // Dropdown
            Constraint::Length(3), // Help
        ])
        .split(inner);

    draw_button(f, app, chunks[0]);
    if app.is_open() {
        draw_dropdown(f, app, cfg, chunks[1]);
    }
    draw_help(f, app, chunks[2]);
}

fn focused_style(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    }
}

fn draw_button(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let arrow = if app.controller.aria_expanded() {
        "▾"
    } else {
        "▸"
    };
    let text = format!("{} {arrow}", app.button_text());
    let button = Paragraph::new(text)
        .style(focused_style(app.controller.focus == Focus::Button))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, area);
}

fn checkbox_glyph(row: &CheckboxRow) -> &'static str {
    match row.state {
        TriState::Indeterminate => "[-]",
        TriState::Checked => "[x]",
        TriState::Unchecked => "[ ]",
    }
}

/// Expand arrow for a course row, or the tree guide for a section row.
fn guide_prefix(row: &CheckboxRow, ascii: bool) -> &'static str {
    let open_or_last = match row.kind {
        RowKind::Context => row.expanded,
        RowKind::Section => row.is_last,
    };
    match (row.kind, open_or_last, ascii) {
        (RowKind::Context, true, false) => "▾ ",
        (RowKind::Context, false, false) => "▸ ",
        (RowKind::Context, true, true) => "v ",
        (RowKind::Context, false, true) => "> ",
        (RowKind::Section, true, false) => "  └── ",
        (RowKind::Section, false, false) => "  ├── ",
        (RowKind::Section, true, true) => "  `-- ",
        (RowKind::Section, false, true) => "  +-- ",
    }
}

fn row_line(row: &CheckboxRow, ascii: bool) -> Line<'static> {
    let prefix = guide_prefix(row, ascii);

    let label_style = match (row.disabled, row.kind) {
        (true, _) => Style::default().fg(Color::DarkGray),
        (false, RowKind::Context) => Style::default().add_modifier(Modifier::BOLD),
        (false, RowKind::Section) => Style::default(),
    };

    Line::from(vec![
        Span::raw(prefix),
        Span::styled(checkbox_glyph(row), label_style),
        Span::raw(" "),
        Span::styled(row.label.clone(), label_style),
    ])
}

fn draw_dropdown(f: &mut Frame, app: &AppState, cfg: &Config, area: ratatui::layout::Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    // rows come back from the tri-state pass, so indeterminate glyphs are current
    let rows = app.rows();
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(row_line(row, cfg.ascii_guides)))
        .collect();

    let tree_focused = app.controller.focus == Focus::Tree;
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(DROPDOWN_ID))
        .highlight_style(focused_style(tree_focused));
    let mut state = ListState::default().with_selected(Some(app.cursor));
    f.render_stateful_widget(list, chunks[0], &mut state);

    let done = Paragraph::new(format!("[ {} ]", app.messages.done))
        .alignment(Alignment::Right)
        .style(focused_style(app.controller.focus == Focus::Done));
    f.render_widget(done, chunks[1]);
}

fn draw_help(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let help = if let Some(ref msg) = app.message {
        msg.clone()
    } else if app.is_open() {
        "Tab: Focus | ↑/↓: Navigate | Space: Check | Enter/←/→: Expand | r: Revert | q: Quit"
            .to_string()
    } else {
        "Enter: Open | q: Quit".to_string()
    };
    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{AppointmentGroup, Context, SubContext};
    use crate::summary::Messages;
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> AppState {
        let contexts = vec![Context {
            asset_string: "course_1".to_string(),
            name: "Algebra".to_string(),
            sections: vec![
                SubContext {
                    asset_string: "sec_1".to_string(),
                    name: "Alg A".to_string(),
                },
                SubContext {
                    asset_string: "sec_2".to_string(),
                    name: "Alg B".to_string(),
                },
            ],
        }];
        AppState::new(contexts, AppointmentGroup::default(), Messages::default())
    }

    fn screen(app: &AppState) -> String {
        screen_with(app, &Config::default())
    }

    fn screen_with(app: &AppState, cfg: &Config) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| draw(f, app, cfg)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_closed_shows_placeholder_only() {
        let text = screen(&app());
        assert!(text.contains("Select Calendars"));
        assert!(!text.contains("Algebra"));
    }

    #[test]
    fn test_open_shows_indeterminate_glyph() {
        let mut app = app().with_class_name(Some("scheduler".to_string()));
        app.activate_button();
        app.expand_at_cursor();
        app.cursor_down();
        app.toggle_at_cursor();

        let text = screen(&app);
        assert!(text.contains("ContextSelector scheduler"));
        assert!(text.contains("[-] Algebra"));
        assert!(text.contains("[x] Alg A"));
        assert!(text.contains("[ ] Alg B"));
        assert!(text.contains("[ Done ]"));
    }

    #[test]
    fn test_guides_follow_row_position() {
        let mut app = app();
        app.activate_button();
        app.expand_at_cursor();

        let text = screen(&app);
        assert!(text.contains("▾ [ ] Algebra"));
        assert!(text.contains("├── [ ] Alg A"));
        assert!(text.contains("└── [ ] Alg B"));

        let ascii = Config {
            ascii_guides: true,
            ..Config::default()
        };
        let text = screen_with(&app, &ascii);
        assert!(text.contains("v [ ] Algebra"));
        assert!(text.contains("+-- [ ] Alg A"));
        assert!(text.contains("`-- [ ] Alg B"));
    }

    #[test]
    fn test_collapsed_last_course_shows_closed_arrow() {
        let mut app = app();
        app.activate_button();

        let rows = app.rows();
        assert!(rows[0].is_last && !rows[0].expanded);
        assert_eq!(guide_prefix(&rows[0], false), "▸ ");
        assert_eq!(guide_prefix(&rows[0], true), "> ");
    }
}
