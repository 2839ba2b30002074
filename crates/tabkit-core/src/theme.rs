//! Color palettes for the tab widgets.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Palette used by the menu and pane widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme display name
    pub name: String,
    /// Color palette
    pub colors: ThemeColors,
}

/// Colors used by the tab widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    /// Main background color
    pub background: Color,
    /// Body text
    pub foreground: Color,
    /// Active menu item
    pub accent: Color,
    /// Inactive menu items and placeholders
    pub muted: Color,
    /// Pane and menu borders
    pub border: Color,
}

/// Built-in theme names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Dark background
    #[default]
    Dark,
    /// Light background
    Light,
}

impl Theme {
    /// Dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Theme {
            name: "Dark".to_string(),
            colors: ThemeColors {
                background: Color::Rgb(30, 30, 46),
                foreground: Color::Rgb(205, 214, 244),
                accent: Color::Rgb(137, 180, 250),
                muted: Color::Rgb(108, 112, 134),
                border: Color::Rgb(88, 91, 112),
            },
        }
    }

    /// Light theme.
    #[must_use]
    pub fn light() -> Self {
        Theme {
            name: "Light".to_string(),
            colors: ThemeColors {
                background: Color::Rgb(239, 241, 245),
                foreground: Color::Rgb(76, 79, 105),
                accent: Color::Rgb(30, 102, 245),
                muted: Color::Rgb(140, 143, 161),
                border: Color::Rgb(172, 176, 190),
            },
        }
    }

    /// Theme for a built-in name.
    #[must_use]
    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Theme::dark(),
            ThemeName::Light => Theme::light(),
        }
    }

    /// Style of the active menu item.
    #[must_use]
    pub fn active_item(&self, inverted: bool) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if inverted {
            style.fg(self.colors.background).bg(self.colors.accent)
        } else {
            style.fg(self.colors.accent)
        }
    }

    /// Style of inactive menu items.
    #[must_use]
    pub fn inactive_item(&self) -> Style {
        Style::default().fg(self.colors.muted)
    }

    /// Style of borders and dividers.
    #[must_use]
    pub fn border(&self) -> Style {
        Style::default().fg(self.colors.border)
    }

    /// Style of pane body text.
    #[must_use]
    pub fn body(&self) -> Style {
        Style::default()
            .fg(self.colors.foreground)
            .bg(self.colors.background)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}
