//! Toolkit-independent description of the history popup menu
//!
//! The platform layer renders a [`MenuSpec`] into native menu items and
//! resolves clicked item ids back through the same `MenuSpec`, so a click always
//! pastes exactly the text that was displayed.

use std::sync::{Arc, Mutex, MutexGuard};
use unicode_segmentation::UnicodeSegmentation;

use crate::core::transform::case_variants;

pub const NO_HISTORY_LABEL: &str = "No history";
pub const CLEAR_LABEL: &str = "Clear";
pub const CLEAR_ID: &str = "clear";
const ELLIPSIS: &str = "...";
const ACTION_ID_PREFIX: &str = "history";

/// Shorten `text` for display to at most `max_chars` user-perceived characters plus "..."
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    let mut graphemes = text.graphemes(true);
    let head: String = graphemes.by_ref().take(max_chars).collect();
    if graphemes.next().is_some() {
        format!("{}{}", head, ELLIPSIS)
    } else {
        head
    }
}

pub fn action_id(entry: usize, variant: usize) -> String {
    format!("{}:{}:{}", ACTION_ID_PREFIX, entry, variant)
}

/// Paste action for one case variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantAction {
    pub id: String,
    pub label: String,
    /// Full text written to the clipboard
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Disabled, informational item
    Info { label: String },
    Submenu { label: String, actions: Vec<VariantAction> },
    Separator,
    Clear { id: String, label: String },
}

/// What a clicked menu item asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    Paste(String),
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuSpec {
    pub entries: Vec<MenuEntry>,
}

impl MenuSpec {
    /// Build the popup menu for `history` (most recent first)
    pub fn build(history: &[String], label_max_chars: usize) -> Self {
        if history.is_empty() {
            return Self {
                entries: vec![MenuEntry::Info {
                    label: NO_HISTORY_LABEL.to_string(),
                }],
            };
        }

        let mut entries: Vec<MenuEntry> = history
            .iter()
            .enumerate()
            .map(|(entry, text)| {
                let actions = case_variants(text)
                    .into_iter()
                    .enumerate()
                    .map(|(variant, text)| VariantAction {
                        id: action_id(entry, variant),
                        label: truncate_label(&text, label_max_chars),
                        text,
                    })
                    .collect();

                MenuEntry::Submenu {
                    label: truncate_label(text, label_max_chars),
                    actions,
                }
            })
            .collect();

        entries.push(MenuEntry::Separator);
        entries.push(MenuEntry::Clear {
            id: CLEAR_ID.to_string(),
            label: CLEAR_LABEL.to_string(),
        });

        Self { entries }
    }

    pub fn find_action(&self, id: &str) -> Option<&VariantAction> {
        self.entries.iter().find_map(|entry| match entry {
            MenuEntry::Submenu { actions, .. } => actions.iter().find(|action| action.id == id),
            _ => None,
        })
    }

    /// Map a clicked item id to its command; ids not in this menu resolve to nothing
    pub fn resolve(&self, id: &str) -> Option<MenuCommand> {
        let has_clear = self
            .entries
            .iter()
            .any(|entry| matches!(entry, MenuEntry::Clear { id: clear_id, .. } if clear_id == id));
        if has_clear {
            return Some(MenuCommand::Clear);
        }
        self.find_action(id)
            .map(|action| MenuCommand::Paste(action.text.clone()))
    }
}

/// The most recently shown menu, kept so clicks resolve against what was displayed
#[derive(Clone, Default)]
pub struct LastMenu {
    spec: Arc<Mutex<MenuSpec>>,
}

impl LastMenu {
    fn lock_spec(&self) -> MutexGuard<'_, MenuSpec> {
        match self.spec.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("menu state mutex poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }

    pub fn replace(&self, spec: MenuSpec) {
        *self.lock_spec() = spec;
    }

    pub fn resolve(&self, id: &str) -> Option<MenuCommand> {
        self.lock_spec().resolve(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_history_shows_info_only() {
        let spec = MenuSpec::build(&[], 30);

        assert_eq!(
            spec.entries,
            vec![MenuEntry::Info {
                label: "No history".to_string()
            }]
        );
        assert!(spec.find_action(&action_id(0, 0)).is_none());
        assert_eq!(spec.resolve(CLEAR_ID), None);
    }

    #[test]
    fn test_submenus_follow_history_order() {
        let spec = MenuSpec::build(&history(&["newest", "hello world"]), 30);

        assert_eq!(spec.entries.len(), 4);
        match &spec.entries[0] {
            MenuEntry::Submenu { label, actions } => {
                assert_eq!(label, "newest");
                let texts: Vec<_> = actions.iter().map(|a| a.text.as_str()).collect();
                assert_eq!(texts, vec!["newest", "Newest", "NEWEST"]);
            }
            other => panic!("unexpected entry {:?}", other),
        }
        match &spec.entries[1] {
            MenuEntry::Submenu { label, actions } => {
                assert_eq!(label, "hello world");
                assert_eq!(actions.len(), 7);
                assert_eq!(actions[1].text, "helloWorld");
                assert_eq!(actions[1].id, "history:1:1");
            }
            other => panic!("unexpected entry {:?}", other),
        }
        assert_eq!(spec.entries[2], MenuEntry::Separator);
        assert_eq!(
            spec.entries[3],
            MenuEntry::Clear {
                id: "clear".to_string(),
                label: "Clear".to_string()
            }
        );
    }

    #[test]
    fn test_truncate_label() {
        let long = "abcdefghijklmnopqrstuvwxyz012345678"; // 35 chars
        assert_eq!(truncate_label(long, 30), "abcdefghijklmnopqrstuvwxyz0123...");

        let exact = "abcdefghijklmnopqrstuvwxyz0123"; // 30 chars
        assert_eq!(truncate_label(exact, 30), exact);
        assert_eq!(truncate_label("short", 30), "short");
        assert_eq!(truncate_label("", 30), "");
    }

    #[test]
    fn test_truncate_label_keeps_graphemes_whole() {
        let flags = "🇯🇵🇯🇵🇯🇵";
        assert_eq!(truncate_label(flags, 2), "🇯🇵🇯🇵...");

        let accented = "e\u{0301}e\u{0301}e\u{0301}";
        assert_eq!(truncate_label(accented, 3), accented);
    }

    #[test]
    fn test_long_entries_truncate_labels_not_text() {
        let text = "this is a rather long clipboard entry";
        let spec = MenuSpec::build(&history(&[text]), 30);

        let action = spec.find_action(&action_id(0, 0)).unwrap();
        assert_eq!(action.label, "this is a rather long clipboar...");
        assert_eq!(action.text, text);
        assert_eq!(
            spec.resolve(&action_id(0, 3)),
            Some(MenuCommand::Paste(
                "this_is_a_rather_long_clipboard_entry".to_string()
            ))
        );
    }

    #[test]
    fn test_resolve_clear_and_unknown_ids() {
        let spec = MenuSpec::build(&history(&["x"]), 30);

        assert_eq!(spec.resolve("clear"), Some(MenuCommand::Clear));
        assert_eq!(spec.resolve("history:5:0"), None);
        assert_eq!(spec.resolve("quit"), None);
    }

    #[test]
    fn test_last_menu_resolves_against_shown_spec() {
        let last = LastMenu::default();
        assert_eq!(last.resolve(&action_id(0, 0)), None);

        last.replace(MenuSpec::build(&history(&["first"]), 30));
        assert_eq!(
            last.resolve(&action_id(0, 0)),
            Some(MenuCommand::Paste("first".to_string()))
        );

        last.replace(MenuSpec::build(&[], 30));
        assert_eq!(last.resolve(&action_id(0, 0)), None);
    }
}
