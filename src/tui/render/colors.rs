//! Color palettes for the TUI
//!
//! One palette per theme, plus the blending used to draw the striped tape
//! over the covered column.

use crate::app::{TapeColor, ThemeMode};
use ratatui::style::{Color, Style};
use ratatui::widgets::BorderType;

/// Width of one tape stripe in cells.
pub const STRIPE_WIDTH: u16 = 2;

/// Border style for every modal.
pub const BORDER_TYPE: BorderType = BorderType::Rounded;

/// An RGB triple.
pub type Rgb = (u8, u8, u8);

/// Theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background, also the tape's blend base.
    pub background: Rgb,
    /// Primary text, also blended under the tape.
    pub text: Rgb,
    /// Secondary text.
    pub text_dim: Color,
    /// Hints and placeholders.
    pub text_muted: Color,
    /// Panel borders.
    pub border: Color,
    /// Focused borders and accents.
    pub selected: Color,
    /// Selected row background.
    pub surface_highlight: Color,
    /// Modal background.
    pub modal_bg: Color,
    /// Text area background.
    pub input_bg: Color,
    /// Known answers and confirmations.
    pub positive: Color,
    /// Unknown answers and destructive choices.
    pub negative: Color,
    /// Warnings.
    pub warning: Color,
}

/// Dark theme.
pub const DARK: Palette = Palette {
    background: (30, 32, 40),
    text: (220, 220, 230),
    text_dim: Color::Rgb(130, 135, 150),
    text_muted: Color::Rgb(90, 95, 110),
    border: Color::Rgb(100, 110, 130),
    selected: Color::Rgb(100, 180, 220),
    surface_highlight: Color::Rgb(50, 55, 70),
    modal_bg: Color::Rgb(25, 27, 35),
    input_bg: Color::Rgb(35, 40, 50),
    positive: Color::Rgb(120, 180, 120),
    negative: Color::Rgb(200, 100, 100),
    warning: Color::Rgb(200, 160, 80),
};

/// Light theme.
pub const LIGHT: Palette = Palette {
    background: (248, 248, 244),
    text: (30, 32, 40),
    text_dim: Color::Rgb(90, 95, 110),
    text_muted: Color::Rgb(140, 145, 155),
    border: Color::Rgb(170, 175, 190),
    selected: Color::Rgb(30, 120, 180),
    surface_highlight: Color::Rgb(225, 230, 240),
    modal_bg: Color::Rgb(255, 255, 255),
    input_bg: Color::Rgb(238, 240, 245),
    positive: Color::Rgb(40, 140, 70),
    negative: Color::Rgb(190, 50, 50),
    warning: Color::Rgb(180, 120, 20),
};

impl Palette {
    /// Palette for a theme.
    #[must_use]
    pub const fn for_theme(theme: ThemeMode) -> &'static Self {
        match theme {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }

    /// Background as a color.
    #[must_use]
    pub const fn bg(&self) -> Color {
        rgb(self.background)
    }

    /// Primary text as a color.
    #[must_use]
    pub const fn fg(&self) -> Color {
        rgb(self.text)
    }
}

/// Convert a triple into a terminal color.
#[must_use]
pub const fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "a convex combination of two u8 values stays within 0..=255"
)]
fn mix(over: u8, under: u8, alpha: f64) -> u8 {
    f64::from(over)
        .mul_add(alpha, f64::from(under) * (1.0 - alpha))
        .round() as u8
}

/// Lay `over` on top of `under` with the given opacity (clamped to 0..=1).
#[must_use]
pub fn blend(over: Rgb, under: Rgb, alpha: f64) -> Rgb {
    let alpha = alpha.clamp(0.0, 1.0);
    (
        mix(over.0, under.0, alpha),
        mix(over.1, under.1, alpha),
        mix(over.2, under.2, alpha),
    )
}

/// Stripe color at screen column `x`.
#[must_use]
pub const fn stripe(color: TapeColor, x: u16) -> Rgb {
    if (x / STRIPE_WIDTH).is_multiple_of(2) {
        color.light()
    } else {
        color.dark()
    }
}

/// Style of one taped cell. At full opacity the text takes the tape color
/// and disappears.
#[must_use]
pub fn tape_style(palette: &Palette, color: TapeColor, opacity: f64, x: u16) -> Style {
    let tape = stripe(color, x);
    Style::default()
        .fg(rgb(blend(tape, palette.text, opacity)))
        .bg(rgb(blend(tape, palette.background, opacity)))
}
