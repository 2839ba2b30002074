//! Layout of the menu and pane regions.
//!
//! # Layout Structure
//!
//! Horizontal menu (default):
//!
//! ```text
//! +---------------------------------+
//! | Menu (1 line, 2 when tabular)   |
//! +---------------------------------+
//! | gap (1 line, only if detached)  |
//! +---------------------------------+
//! |                                 |
//! | Pane (remaining space)          |
//! |                                 |
//! +---------------------------------+
//! ```
//!
//! Vertical menu: the area is split into columns by [`Grid`] widths, with
//! the menu on the [`MenuPosition`] side.

use ratatui::prelude::*;
use serde::{Deserialize, Serialize};
use tabkit_core::MenuConfig;

/// Side of the pane a vertical menu sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuPosition {
    /// Menu left of the pane
    #[default]
    Left,
    /// Menu right of the pane
    Right,
}

/// Relative widths of a vertical menu and its pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grid {
    /// Width share of the menu column
    pub tab_width: u16,
    /// Width share of the pane column
    pub pane_width: u16,
}

impl Default for Grid {
    fn default() -> Self {
        Grid {
            tab_width: 4,
            pane_width: 12,
        }
    }
}

/// Screen regions for the menu and the pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabLayout {
    /// Area handed to the menu widget
    pub menu: Rect,
    /// Area handed to the pane widget
    pub pane: Rect,
}

impl TabLayout {
    /// Calculates the regions for `area`.
    ///
    /// # Example
    ///
    /// ```
    /// use tabkit_ui::layout::{Grid, MenuPosition, TabLayout};
    /// use tabkit_core::MenuConfig;
    /// use ratatui::prelude::Rect;
    ///
    /// let config = MenuConfig::defaults();
    /// let layout = TabLayout::new(Rect::new(0, 0, 80, 24), &config, MenuPosition::Left, Grid::default());
    ///
    /// assert_eq!(layout.menu, Rect::new(0, 0, 80, 2));
    /// assert_eq!(layout.pane, Rect::new(0, 2, 80, 22));
    /// ```
    #[must_use]
    pub fn new(area: Rect, config: &MenuConfig, position: MenuPosition, grid: Grid) -> Self {
        if config.vertical() {
            Self::vertical(area, position, grid)
        } else {
            Self::horizontal(area, config)
        }
    }

    fn horizontal(area: Rect, config: &MenuConfig) -> Self {
        let menu_height = menu_height(config);

        // Too small for a pane; the menu keeps whatever is there
        if area.height <= menu_height {
            return TabLayout {
                menu: area,
                pane: Rect::new(area.x, area.bottom(), area.width, 0),
            };
        }

        let remaining = area.height - menu_height;
        let gap = if config.attached() { 0 } else { 1.min(remaining) };

        TabLayout {
            menu: Rect::new(area.x, area.y, area.width, menu_height),
            pane: Rect::new(
                area.x,
                area.y + menu_height + gap,
                area.width,
                remaining - gap,
            ),
        }
    }

    fn vertical(area: Rect, position: MenuPosition, grid: Grid) -> Self {
        let grid = if grid.tab_width == 0 && grid.pane_width == 0 {
            Grid::default()
        } else {
            grid
        };
        let total = u32::from(grid.tab_width) + u32::from(grid.pane_width);
        let menu_width = (u32::from(area.width) * u32::from(grid.tab_width) / total) as u16;
        let pane_width = area.width - menu_width;

        match position {
            MenuPosition::Left => TabLayout {
                menu: Rect::new(area.x, area.y, menu_width, area.height),
                pane: Rect::new(area.x + menu_width, area.y, pane_width, area.height),
            },
            MenuPosition::Right => TabLayout {
                pane: Rect::new(area.x, area.y, pane_width, area.height),
                menu: Rect::new(area.x + pane_width, area.y, menu_width, area.height),
            },
        }
    }
}

/// Rows taken by a horizontal menu: the item row plus a rule when tabular.
#[must_use]
pub fn menu_height(config: &MenuConfig) -> u16 {
    if config.tabular() {
        2
    } else {
        1
    }
}
