use super::{AppState, SelectedCodes};
use crate::context::{AppointmentGroup, Context, SubContext};
use crate::dropdown::Focus;
use crate::selection::TriState;
use crate::summary::Messages;
use std::collections::BTreeSet;

fn contexts() -> Vec<Context> {
    let section = |id: &str, name: &str| SubContext {
        asset_string: id.to_string(),
        name: name.to_string(),
    };
    vec![
        Context {
            asset_string: "course_1".to_string(),
            name: "Algebra".to_string(),
            sections: vec![section("sec_1", "Alg A"), section("sec_2", "Alg B")],
        },
        Context {
            asset_string: "course_2".to_string(),
            name: "Biology".to_string(),
            sections: vec![section("sec_3", "Bio A"), section("sec_4", "Bio B")],
        },
    ]
}

fn set(ids: &[&str]) -> BTreeSet<String> {
    ids.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_toggle_course_then_section_under_cursor() {
    let mut app = AppState::new(contexts(), AppointmentGroup::default(), Messages::default());
    app.activate_button();
    assert_eq!(app.controller.focus, Focus::Tree);

    assert!(app.toggle_at_cursor());
    assert_eq!(app.button_text(), "Algebra");

    app.expand_at_cursor();
    app.cursor_down();
    app.cursor_down();
    assert_eq!(app.current_row().unwrap().id, "sec_2");
    assert!(app.toggle_at_cursor());

    assert_eq!(
        app.selected_codes(),
        SelectedCodes {
            context_codes: set(&["course_1"]),
            sub_context_codes: set(&["sec_1"]),
        }
    );
    assert_eq!(app.rows()[0].state, TriState::Indeterminate);
    assert_eq!(app.button_text(), "Alg A");
}

#[test]
fn test_committed_codes_cannot_be_toggled() {
    let group = AppointmentGroup {
        context_codes: set(&["course_1"]),
        sub_context_codes: BTreeSet::new(),
    };
    let mut app = AppState::new(contexts(), group, Messages::default());
    let before = app.selected_codes();

    assert!(!app.toggle_at_cursor());
    app.expand_at_cursor();
    app.cursor_down();
    assert_eq!(app.current_row().unwrap().id, "sec_1");
    assert!(!app.toggle_at_cursor());

    assert_eq!(app.selected_codes(), before);
    assert!(app.selection.is_expanded("course_1"));
    assert_eq!(app.message.as_deref(), Some("Alg A is already saved"));
}

#[test]
fn test_committed_section_survives_toggling_its_course() {
    let group = AppointmentGroup {
        context_codes: BTreeSet::new(),
        sub_context_codes: set(&["sec_1"]),
    };
    let mut app = AppState::new(contexts(), group, Messages::default());
    app.activate_button();
    app.expand_at_cursor();
    assert_eq!(app.rows()[0].state, TriState::Unchecked);

    assert!(app.toggle_at_cursor());

    let rows = app.rows();
    assert_eq!(rows[0].state, TriState::Checked);
    assert_eq!(rows[1].id, "sec_1");
    assert!(rows[1].disabled);
    assert_eq!(rows[1].state, TriState::Checked);
    assert_eq!(app.selected_codes().context_codes, set(&["course_1"]));
}

#[test]
fn test_collapse_from_section_moves_cursor_to_course() {
    let mut app = AppState::new(contexts(), AppointmentGroup::default(), Messages::default());
    app.cursor_down();
    app.expand_at_cursor();
    app.cursor_down();
    app.cursor_down();
    assert_eq!(app.current_row().unwrap().id, "sec_4");

    app.collapse_at_cursor();

    assert_eq!(app.cursor, 1);
    assert_eq!(app.rows().len(), 2);
}

#[test]
fn test_cursor_stays_in_bounds() {
    let mut app = AppState::new(contexts(), AppointmentGroup::default(), Messages::default());
    app.cursor_up();
    assert_eq!(app.cursor, 0);
    for _ in 0..5 {
        app.cursor_down();
    }
    assert_eq!(app.cursor, 1);
}

#[test]
fn test_receive_group_resets_selection() {
    let mut app = AppState::new(contexts(), AppointmentGroup::default(), Messages::default());
    app.toggle_at_cursor();
    app.expand_at_cursor();

    app.receive_group(AppointmentGroup {
        context_codes: set(&["course_2"]),
        sub_context_codes: set(&["sec_4"]),
    });

    assert_eq!(app.selection.contexts, set(&["course_2"]));
    assert_eq!(app.selection.sub_contexts, set(&["sec_4"]));
    assert!(app.selection.expanded.is_empty());
}

#[test]
fn test_revert_discards_unsaved_picks() {
    let mut app = AppState::new(contexts(), AppointmentGroup::default(), Messages::default());
    app.toggle_at_cursor();
    assert!(!app.selection.contexts.is_empty());

    app.revert();

    assert!(app.selection.contexts.is_empty());
    assert_eq!(app.button_text(), "Select Calendars");
}

#[test]
fn test_enter_routes_to_focused_control() {
    let mut app = AppState::new(contexts(), AppointmentGroup::default(), Messages::default());
    app.activate_focused();
    assert!(app.is_open());

    app.activate_focused();
    assert!(app.rows()[0].expanded);

    app.controller.next_focus();
    app.activate_focused();
    assert!(!app.is_open());
    assert_eq!(app.controller.focus, Focus::Button);
}

#[test]
fn test_empty_class_name_is_dropped() {
    let app = AppState::new(contexts(), AppointmentGroup::default(), Messages::default())
        .with_class_name(Some(String::new()));
    assert!(app.class_name.is_none());
}
