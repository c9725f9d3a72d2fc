//! Theming for the Lookout TUI.
//!
//! A small semantic-roles palette: components ask for roles (text, accent,
//! selection) rather than raw colors, so palettes stay swappable. Two
//! built-in palettes ship; the active one persists via user preferences.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders};

/// Theme id used when no preference is saved.
pub const DEFAULT_THEME_ID: &str = "midnight";

/// Semantic color roles used throughout the UI.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub focus: Color,
}

/// A named palette plus style builders derived from its roles.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Canonical identifier, persisted in preferences.
    pub id: &'static str,
    roles: ThemeRoles,
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

impl Theme {
    /// Dark palette, the default.
    pub fn midnight() -> Self {
        Self {
            id: "midnight",
            roles: ThemeRoles {
                surface: Color::Rgb(18, 21, 28),
                border: Color::Rgb(60, 66, 82),
                text: Color::Rgb(205, 214, 230),
                text_secondary: Color::Rgb(150, 160, 180),
                text_muted: Color::Rgb(100, 108, 125),
                accent: Color::Rgb(122, 162, 247),
                selection_bg: Color::Rgb(45, 55, 80),
                selection_fg: Color::Rgb(225, 232, 245),
                focus: Color::Rgb(122, 162, 247),
            },
        }
    }

    /// Light palette.
    pub fn paper() -> Self {
        Self {
            id: "paper",
            roles: ThemeRoles {
                surface: Color::Rgb(246, 243, 238),
                border: Color::Rgb(180, 172, 160),
                text: Color::Rgb(50, 48, 45),
                text_secondary: Color::Rgb(105, 100, 92),
                text_muted: Color::Rgb(150, 144, 134),
                accent: Color::Rgb(166, 89, 30),
                selection_bg: Color::Rgb(225, 216, 200),
                selection_fg: Color::Rgb(40, 38, 35),
                focus: Color::Rgb(166, 89, 30),
            },
        }
    }

    /// Resolves a theme by id, falling back to the default palette for
    /// unknown ids.
    pub fn by_id(id: &str) -> Self {
        match id {
            "paper" => Self::paper(),
            DEFAULT_THEME_ID => Self::midnight(),
            other => {
                tracing::debug!(theme = other, "unknown theme id, using default");
                Self::midnight()
            }
        }
    }

    /// The next palette in the cycle, for the theme toggle key.
    pub fn next(&self) -> Self {
        match self.id {
            "midnight" => Self::paper(),
            _ => Self::midnight(),
        }
    }

    pub fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles.text)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles.text_secondary)
    }

    pub fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles.text_muted)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.roles.accent)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.roles.focus } else { self.roles.border };
        Style::default().fg(color)
    }

    pub fn selection_style(&self) -> Style {
        Style::default().fg(self.roles.selection_fg).bg(self.roles.selection_bg)
    }

    /// Style for panel-like containers (set as the widget background).
    pub fn panel_style(&self) -> Style {
        Style::default().bg(self.roles.surface).fg(self.roles.text)
    }
}

/// Standard bordered block with theme styling and an optional bold title.
pub fn block<'a>(theme: &Theme, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(theme.panel_style());
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Builds `(key, description)` hint pairs as styled spans for the hints row.
pub fn build_hint_spans(theme: &Theme, hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(*key, theme.accent_style().add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}
