//! Menu widget for displaying and selecting tabs
//!
//! The [`TabMenu`] widget renders one entry per pane, highlighting the active
//! entry with the theme's accent color. It also answers hit tests so a mouse
//! click can be mapped back to the entry under the cursor; rendering and hit
//! testing share the same geometry.
//!
//! ## Features
//!
//! - Horizontal tab strip with a divider and, when tabular, a rule line
//!   that opens under the active entry if the pane is attached
//! - Vertical list inside a border for `vertical` menus
//! - Inverted highlight when the menu configuration sets `inverted`
//! - Gracefully handles empty menus and narrow areas
//!
//! ## Example
//!
//! ```ignore
//! use tabkit_ui::widgets::TabMenu;
//!
//! let menu = TabMenu::new(&items, &config, active_index, &theme);
//! let clicked = menu.item_at(area, Position::new(column, row));
//! frame.render_widget(menu, area);
//! ```

use crate::view::MenuItem;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Widget};
use tabkit_core::{MenuConfig, Theme};

const TAB_DIVIDER: &str = "│";
const PLAIN_DIVIDER: &str = " ";
const RULE: &str = "─";

/// Menu widget that displays one entry per pane
pub struct TabMenu<'a> {
    /// Entries to display, in pane order
    items: &'a [MenuItem<'a>],
    /// Merged menu configuration
    config: &'a MenuConfig,
    /// Active index as resolved for this render, passed through verbatim
    active_index: usize,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> TabMenu<'a> {
    /// Creates a new menu
    ///
    /// # Arguments
    ///
    /// * `items` - Entries to display
    /// * `config` - Merged menu configuration
    /// * `active_index` - Resolved active index; may be out of range
    /// * `theme` - Theme for styling
    pub fn new(
        items: &'a [MenuItem<'a>],
        config: &'a MenuConfig,
        active_index: usize,
        theme: &'a Theme,
    ) -> Self {
        TabMenu {
            items,
            config,
            active_index,
            theme,
        }
    }

    /// Returns the number of entries
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the menu is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Active index this menu was given
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Configuration this menu was given
    pub fn config(&self) -> &MenuConfig {
        self.config
    }

    /// Screen region of every visible entry, as `(pane index, area)`.
    ///
    /// Entries that do not fit in `area` are left out.
    pub fn item_regions(&self, area: Rect) -> Vec<(usize, Rect)> {
        if self.config.vertical() {
            self.vertical_regions(area)
        } else {
            self.horizontal_regions(area)
        }
    }

    /// Pane index of the entry under `position`, if any.
    pub fn item_at(&self, area: Rect, position: Position) -> Option<usize> {
        self.item_regions(area)
            .into_iter()
            .find(|(_, region)| region.contains(position))
            .map(|(index, _)| index)
    }

    fn divider(&self) -> &'static str {
        if self.config.tabular() {
            TAB_DIVIDER
        } else {
            PLAIN_DIVIDER
        }
    }

    fn horizontal_regions(&self, area: Rect) -> Vec<(usize, Rect)> {
        if area.is_empty() {
            return Vec::new();
        }

        let divider_width = Span::raw(self.divider()).width() as u16;
        let mut regions = Vec::with_capacity(self.items.len());
        let mut x = area.x;

        for item in self.items {
            if x >= area.right() {
                break;
            }
            let width = Span::raw(entry_text(item)).width() as u16;
            let width = width.min(area.right() - x);
            regions.push((item.index, Rect::new(x, area.y, width, 1)));
            x = x.saturating_add(width).saturating_add(divider_width);
        }

        regions
    }

    fn vertical_block(&self) -> Option<Block<'static>> {
        self.config
            .tabular()
            .then(|| Block::bordered().border_style(self.theme.border()))
    }

    fn vertical_regions(&self, area: Rect) -> Vec<(usize, Rect)> {
        let inner = match self.vertical_block() {
            Some(block) => block.inner(area),
            None => area,
        };
        if inner.is_empty() {
            return Vec::new();
        }

        self.items
            .iter()
            .take(inner.height as usize)
            .enumerate()
            .map(|(row, item)| {
                (
                    item.index,
                    Rect::new(inner.x, inner.y + row as u16, inner.width, 1),
                )
            })
            .collect()
    }

    fn item_style(&self, item: &MenuItem<'_>) -> Style {
        if item.active {
            self.theme.active_item(self.config.inverted())
        } else {
            self.theme.inactive_item()
        }
    }

    fn render_horizontal(&self, area: Rect, buf: &mut Buffer) {
        let regions = self.horizontal_regions(area);
        let divider = self.divider();

        for (item, (_, region)) in self.items.iter().zip(&regions) {
            buf.set_stringn(
                region.x,
                region.y,
                entry_text(item),
                region.width as usize,
                self.item_style(item),
            );
            let divider_x = region.right();
            if divider_x < area.right() {
                buf.set_stringn(divider_x, area.y, divider, 1, self.theme.border());
            }
        }

        // Rule under the strip; attached menus open it below the active entry
        if self.config.tabular() && area.height >= 2 {
            let rule_y = area.y + 1;
            let open = if self.config.attached() {
                regions
                    .iter()
                    .find(|(index, _)| *index == self.active_index)
                    .map(|(_, region)| *region)
            } else {
                None
            };
            for x in area.left()..area.right() {
                let symbol = match open {
                    Some(region) if x >= region.left() && x < region.right() => " ",
                    _ => RULE,
                };
                buf[(x, rule_y)]
                    .set_symbol(symbol)
                    .set_style(self.theme.border());
            }
        }
    }

    fn render_vertical(&self, area: Rect, buf: &mut Buffer) {
        if let Some(block) = self.vertical_block() {
            block.render(area, buf);
        }

        for (item, (_, region)) in self.items.iter().zip(self.vertical_regions(area)) {
            let style = self.item_style(item);
            if item.active {
                buf.set_style(region, style);
            }
            buf.set_stringn(
                region.x,
                region.y,
                entry_text(item),
                region.width as usize,
                style,
            );
        }
    }
}

impl Widget for TabMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Handle empty menus gracefully
        if self.items.is_empty() || area.is_empty() {
            return;
        }

        if self.config.vertical() {
            self.render_vertical(area, buf);
        } else {
            self.render_horizontal(area, buf);
        }
    }
}

fn entry_text(item: &MenuItem<'_>) -> String {
    format!(" {} ", item.text())
}
