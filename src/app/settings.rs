//! Display preferences
//!
//! Tape color, tape opacities, theme and the pair of fields shown as the
//! left/right columns. Persisted as one JSON object by the store.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Opacity slider granularity, in percent.
pub const OPACITY_STEP: u8 = 5;

/// Default left column field.
pub const DEFAULT_LEFT_KEY: &str = "fr";

/// Default right column field.
pub const DEFAULT_RIGHT_KEY: &str = "de";

/// Tape palette entry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TapeColor {
    /// Rose.
    Red,
    /// Orange.
    Orange,
    /// Yellow.
    Yellow,
    /// Emerald (default).
    #[default]
    Green,
    /// Blue.
    Blue,
    /// Indigo.
    Indigo,
    /// Violet.
    Violet,
}

impl TapeColor {
    /// All palette entries, in display order.
    pub const ALL: &'static [Self] = &[
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
    ];

    /// Lowercase label shown in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Violet => "violet",
        }
    }

    /// Light stripe color.
    #[must_use]
    pub const fn light(self) -> (u8, u8, u8) {
        match self {
            Self::Red => (239, 68, 68),
            Self::Orange => (249, 115, 22),
            Self::Yellow => (234, 179, 8),
            Self::Green => (16, 185, 129),
            Self::Blue => (59, 130, 246),
            Self::Indigo => (99, 102, 241),
            Self::Violet => (139, 92, 246),
        }
    }

    /// Dark stripe color.
    #[must_use]
    pub const fn dark(self) -> (u8, u8, u8) {
        match self {
            Self::Red => (190, 18, 60),
            Self::Orange => (194, 65, 12),
            Self::Yellow => (161, 98, 7),
            Self::Green => (5, 150, 105),
            Self::Blue => (29, 78, 216),
            Self::Indigo => (67, 56, 202),
            Self::Violet => (109, 40, 217),
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Next palette entry, wrapping.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous palette entry, wrapping.
    #[must_use]
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// Color theme.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light background.
    Light,
    /// Dark background (default).
    #[default]
    Dark,
}

impl ThemeMode {
    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Lowercase label shown in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Quantize a slider percentage to the next 5% step and return it as a
/// fraction in `0.0..=1.0`.
///
/// `42` becomes `0.45`; values outside `0..=100` are clamped; non-finite
/// input yields `0.0`.
#[must_use]
pub fn sanitize_opacity(percent: f64) -> f64 {
    if !percent.is_finite() {
        return 0.0;
    }
    let step = f64::from(OPACITY_STEP);
    // Absorb float noise such as 0.45 * 100.0 = 45.00000000000001
    let stepped = (((percent - 1e-6) / step).ceil() * step).clamp(0.0, 100.0);
    stepped / 100.0
}

/// Opacity fraction as a whole percentage for display.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is clamped to 0..=100 before the cast"
)]
pub fn opacity_percent(opacity: f64) -> u8 {
    (opacity.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Persistent display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Tape palette entry.
    pub tape_color: TapeColor,

    /// Tape opacity for covered rows (0.0 to 1.0).
    pub tape_opacity_covered: f64,

    /// Tape opacity for peeking rows (0.0 to 1.0).
    pub tape_opacity_peek: f64,

    /// Light or dark theme.
    pub theme: ThemeMode,

    /// Field shown in the left column.
    pub left_key: String,

    /// Field shown in the right column.
    pub right_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tape_color: TapeColor::Green,
            tape_opacity_covered: 1.0,
            tape_opacity_peek: 0.1,
            theme: ThemeMode::Dark,
            left_key: DEFAULT_LEFT_KEY.to_string(),
            right_key: DEFAULT_RIGHT_KEY.to_string(),
        }
    }
}

impl Settings {
    /// Build settings from a stored JSON value, keeping defaults for any
    /// field that is missing or has the wrong type.
    #[must_use]
    pub fn from_stored(value: &Value) -> Self {
        let mut settings = Self::default();
        settings.merge_stored(value);
        settings
    }

    /// Overlay recognised fields of a stored JSON object onto `self`.
    pub fn merge_stored(&mut self, value: &Value) {
        let Some(object) = value.as_object() else {
            debug!("Stored settings are not an object, keeping defaults");
            return;
        };

        if let Some(color) = object
            .get("tapeColor")
            .and_then(|v| serde_json::from_value::<TapeColor>(v.clone()).ok())
        {
            self.tape_color = color;
        }
        if let Some(opacity) = object.get("tapeOpacityCovered").and_then(Value::as_f64) {
            self.tape_opacity_covered = sanitize_opacity(opacity * 100.0);
        }
        if let Some(opacity) = object.get("tapeOpacityPeek").and_then(Value::as_f64) {
            self.tape_opacity_peek = sanitize_opacity(opacity * 100.0);
        }
        if let Some(theme) = object
            .get("theme")
            .and_then(|v| serde_json::from_value::<ThemeMode>(v.clone()).ok())
        {
            self.theme = theme;
        }
        if let Some(key) = object.get("leftKey").and_then(Value::as_str) {
            self.left_key = key.to_string();
        }
        if let Some(key) = object.get("rightKey").and_then(Value::as_str) {
            self.right_key = key.to_string();
        }
    }

    /// Set the covered opacity from a slider percentage.
    pub fn set_opacity_covered(&mut self, percent: f64) {
        self.tape_opacity_covered = sanitize_opacity(percent);
    }

    /// Set the peek opacity from a slider percentage.
    pub fn set_opacity_peek(&mut self, percent: f64) {
        self.tape_opacity_peek = sanitize_opacity(percent);
    }

    /// Restore tape color and opacities; theme and columns are kept.
    pub fn reset_tape_defaults(&mut self) {
        let defaults = Self::default();
        self.tape_color = defaults.tape_color;
        self.tape_opacity_covered = defaults.tape_opacity_covered;
        self.tape_opacity_peek = defaults.tape_opacity_peek;
    }

    /// Exchange the left and right columns.
    pub fn swap_columns(&mut self) {
        std::mem::swap(&mut self.left_key, &mut self.right_key);
    }
}
