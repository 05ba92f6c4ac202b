//! Settings overlay state: which preference row is highlighted.

/// Rows of the settings overlay, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsItem {
    /// Tape palette entry.
    TapeColor,
    /// Opacity of covered tapes.
    CoveredOpacity,
    /// Opacity of peeking tapes.
    PeekOpacity,
    /// Light or dark theme.
    Theme,
    /// Restore tape color and opacities.
    ResetDefaults,
}

impl SettingsItem {
    /// All rows in display order.
    pub const ALL: &'static [Self] = &[
        Self::TapeColor,
        Self::CoveredOpacity,
        Self::PeekOpacity,
        Self::Theme,
        Self::ResetDefaults,
    ];

    /// Row label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TapeColor => "Tape color",
            Self::CoveredOpacity => "Covered opacity",
            Self::PeekOpacity => "Peek opacity",
            Self::Theme => "Theme",
            Self::ResetDefaults => "Reset to defaults",
        }
    }
}

/// Highlighted row of the settings overlay.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SettingsMenuState {
    /// Currently selected index in the menu list.
    pub selected: usize,
}

impl SettingsMenuState {
    /// Create a new settings menu state.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: 0 }
    }

    /// Reset selection back to the first entry.
    pub const fn reset(&mut self) {
        self.selected = 0;
    }

    /// Select the next menu item, wrapping.
    pub const fn select_next(&mut self) {
        self.selected = (self.selected + 1) % SettingsItem::ALL.len();
    }

    /// Select the previous menu item, wrapping.
    pub const fn select_prev(&mut self) {
        self.selected = if self.selected == 0 {
            SettingsItem::ALL.len() - 1
        } else {
            self.selected - 1
        };
    }

    /// The highlighted row; out-of-range indices fall back to the first.
    #[must_use]
    pub fn selected_item(self) -> SettingsItem {
        SettingsItem::ALL
            .get(self.selected)
            .copied()
            .unwrap_or(SettingsItem::TapeColor)
    }
}
