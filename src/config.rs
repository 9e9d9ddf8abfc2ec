//! Configuration to acknowledge deployment preferences as well as set defaults.
//!
//! We look for a ctxsel.toml in the working directory, and if present load settings from there.
//! This provides the translated strings, a default class name, and the tree guide style.

use crate::summary::Messages;
use facet::Facet;
use std::fs;
use std::path::Path;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "ctxsel.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// Selector preferences loaded from ctxsel.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "Select Calendars".to_string())]
    /// Button text when nothing is selected.
    pub placeholder: String,
    #[facet(default = "Done".to_string())]
    /// Label of the button closing the dropdown.
    pub done_label: String,
    #[facet(default = "%{contextName} and %{count} other".to_string())]
    /// Summary template for exactly one other item.
    pub one_other: String,
    #[facet(default = "%{contextName} and %{count} others".to_string())]
    /// Summary template for several other items.
    pub many_others: String,
    #[facet(default = String::new())]
    /// Extra styling class appended to the root block title.
    pub class_name: String,
    #[facet(default = false)]
    /// Draw tree guides with ASCII instead of box-drawing characters.
    pub ascii_guides: bool,
}

impl Default for Config {
    fn default() -> Self {
        let messages = Messages::default();
        Self {
            placeholder: messages.placeholder,
            done_label: messages.done,
            one_other: messages.one_other,
            many_others: messages.many_others,
            class_name: String::new(),
            ascii_guides: false,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from ctxsel.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from the given file, using defaults if it is missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|contents| facet_toml::from_str::<Self>(&contents).ok())
            .unwrap_or_default()
    }

    #[must_use]
    /// The translatable strings as used by the summary and the Done button.
    pub fn messages(&self) -> Messages {
        Messages {
            placeholder: self.placeholder.clone(),
            done: self.done_label.clone(),
            one_other: self.one_other.clone(),
            many_others: self.many_others.clone(),
        }
    }
}
