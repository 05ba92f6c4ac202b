//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Open the JSON loader
    OpenJsonLoader,
    /// Clear every answer mark
    ClearAnswers,
    /// Reset all stored session state (asks first)
    ResetAll,
    /// Open display settings
    Settings,
    /// Flip the selected row's tape
    CycleTape,
    /// Mark the selected row known
    MarkKnown,
    /// Mark the selected row unknown
    MarkUnknown,
    /// Cover or uncover every row
    ToggleCoverAll,
    /// Move the tape to the other column
    SwitchTapes,
    /// Swap the left and right columns
    SwapColumns,
    /// Step the field shown in the left column
    CycleLeftColumn,
    /// Step the field shown in the right column
    CycleRightColumn,
    /// Select next row
    NextRow,
    /// Select previous row
    PrevRow,
    /// Jump to the first row
    ScrollTop,
    /// Jump to the last row
    ScrollBottom,
    /// Show help
    Help,
    /// Quit application
    Quit,
}

/// Categories for grouping actions in help display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionGroup {
    /// Loading, clearing and configuring the deck
    Deck,
    /// Per-row and bulk tape/answer actions
    Cards,
    /// Which fields are shown and covered
    Columns,
    /// Row navigation
    Navigation,
    /// Miscellaneous actions
    Other,
}

impl ActionGroup {
    /// Get the display title for this group
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Deck => "Deck",
            Self::Cards => "Cards",
            Self::Columns => "Columns",
            Self::Navigation => "Navigation",
            Self::Other => "Other",
        }
    }
}

impl Action {
    /// Get the display description for this action
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::OpenJsonLoader => "[O]pen JSON loader",
            Self::ClearAnswers => "[C]lear answers",
            Self::ResetAll => "[R]eset everything",
            Self::Settings => "Settings",
            Self::CycleTape => "Peek / cover row",
            Self::MarkKnown => "Mark known ([y]es)",
            Self::MarkUnknown => "Mark unknown ([n]o)",
            Self::ToggleCoverAll => "Cover / uncover [a]ll",
            Self::SwitchTapes => "Switch [t]aped column",
            Self::SwapColumns => "[S]wap columns",
            Self::CycleLeftColumn => "Change left field",
            Self::CycleRightColumn => "Change right field",
            Self::NextRow => "Select next",
            Self::PrevRow => "Select previous",
            Self::ScrollTop => "First row",
            Self::ScrollBottom => "Last row",
            Self::Help => "Show this help",
            Self::Quit => "[Q]uit",
        }
    }

    /// Get the group this action belongs to
    #[must_use]
    pub const fn group(self) -> ActionGroup {
        match self {
            Self::OpenJsonLoader | Self::ClearAnswers | Self::ResetAll | Self::Settings => {
                ActionGroup::Deck
            }
            Self::CycleTape | Self::MarkKnown | Self::MarkUnknown | Self::ToggleCoverAll => {
                ActionGroup::Cards
            }
            Self::SwitchTapes
            | Self::SwapColumns
            | Self::CycleLeftColumn
            | Self::CycleRightColumn => ActionGroup::Columns,
            Self::NextRow | Self::PrevRow | Self::ScrollTop | Self::ScrollBottom => {
                ActionGroup::Navigation
            }
            Self::Help | Self::Quit => ActionGroup::Other,
        }
    }

    /// All actions in display order for help
    pub const ALL_FOR_HELP: &'static [Self] = &[
        // Deck
        Self::OpenJsonLoader,
        Self::ClearAnswers,
        Self::ResetAll,
        Self::Settings,
        // Cards
        Self::CycleTape,
        Self::MarkKnown,
        Self::MarkUnknown,
        Self::ToggleCoverAll,
        // Columns
        Self::SwitchTapes,
        Self::SwapColumns,
        Self::CycleLeftColumn,
        Self::CycleRightColumn,
        // Navigation
        Self::NextRow,
        Self::PrevRow,
        Self::ScrollTop,
        Self::ScrollBottom,
        // Other
        Self::Help,
        Self::Quit,
    ];
}

/// Keybinding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Map of key strings to actions (for serialization)
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("o".to_string(), Action::OpenJsonLoader);
        bindings.insert("c".to_string(), Action::ClearAnswers);
        bindings.insert("R".to_string(), Action::ResetAll);
        bindings.insert(",".to_string(), Action::Settings);
        bindings.insert(" ".to_string(), Action::CycleTape);
        bindings.insert("Enter".to_string(), Action::CycleTape);
        bindings.insert("y".to_string(), Action::MarkKnown);
        bindings.insert("n".to_string(), Action::MarkUnknown);
        bindings.insert("a".to_string(), Action::ToggleCoverAll);
        bindings.insert("t".to_string(), Action::SwitchTapes);
        bindings.insert("s".to_string(), Action::SwapColumns);
        bindings.insert("[".to_string(), Action::CycleLeftColumn);
        bindings.insert("]".to_string(), Action::CycleRightColumn);
        bindings.insert("j".to_string(), Action::NextRow);
        bindings.insert("Down".to_string(), Action::NextRow);
        bindings.insert("k".to_string(), Action::PrevRow);
        bindings.insert("Up".to_string(), Action::PrevRow);
        bindings.insert("g".to_string(), Action::ScrollTop);
        bindings.insert("G".to_string(), Action::ScrollBottom);
        bindings.insert("?".to_string(), Action::Help);
        bindings.insert("q".to_string(), Action::Quit);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Merge in any missing default keybindings
    ///
    /// Keys the user has bound keep their action; defaults only fill gaps.
    pub fn merge_defaults(&mut self) {
        let defaults = Self::default();
        for (key, action) in defaults.bindings {
            self.bindings.entry(key).or_insert(action);
        }
    }

    /// Get the action for a key event
    #[must_use]
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Set a keybinding
    pub fn set(&mut self, key: &str, action: Action) {
        self.bindings.insert(key.to_string(), action);
    }

    /// Get all bindings for an action, simplest first
    #[must_use]
    pub fn keys_for_action(&self, action: Action) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter_map(|(k, &v)| if v == action { Some(k.clone()) } else { None })
            .collect();
        // Single chars before named keys, then alphabetical
        keys.sort_by(|a, b| {
            let a_simple = a.chars().count() == 1;
            let b_simple = b.chars().count() == 1;
            b_simple.cmp(&a_simple).then_with(|| a.cmp(b))
        });
        keys
    }

    /// Format key(s) for an action for display (e.g., "Space/Enter" or "j/Down")
    #[must_use]
    pub fn format_keys(&self, action: Action) -> String {
        self.keys_for_action(action)
            .iter()
            .map(|k| display_key(k))
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Generate status bar hint text
    #[must_use]
    pub fn status_hints(&self) -> String {
        let hints = [
            (Action::OpenJsonLoader, "load"),
            (Action::CycleTape, "peek"),
            (Action::MarkKnown, "known"),
            (Action::MarkUnknown, "unknown"),
            (Action::ToggleCoverAll, "all"),
            (Action::SwitchTapes, "switch"),
            (Action::Settings, "settings"),
            (Action::Help, "help"),
            (Action::Quit, "quit"),
        ];

        hints
            .iter()
            .filter_map(|(action, label)| {
                let key = self.keys_for_action(*action).into_iter().next()?;
                Some(format!("[{}]{label}", display_key(&key)))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn display_key(key: &str) -> String {
    if key == " " {
        "Space".to_string()
    } else {
        key.to_string()
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT) && !matches!(code, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}
