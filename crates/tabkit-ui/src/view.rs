//! Pane and menu derivation.
//!
//! Every render recomputes a [`TabView`] from the props and the resolved
//! active index: one [`MenuItem`] per pane, and the rendered pane(s). The
//! view has no state of its own.

use crate::layout::{Grid, MenuPosition, TabLayout};
use crate::tab::TabProps;
use crate::widgets::{TabMenu, TabPaneWidget};
use ratatui::prelude::*;
use ratatui::widgets::Widget;
use tabkit_core::{MenuConfig, MenuItemLabel, Pane, PaneContent, SelectionMode, Theme};

/// One menu entry.
///
/// Carries its own position and pane so an activation on it routes to the
/// dispatcher with exactly those.
#[derive(Debug, Clone)]
pub struct MenuItem<'a> {
    /// Position of the pane
    pub index: usize,
    /// Label of the pane, if it has one
    pub label: Option<&'a MenuItemLabel>,
    /// The pane this entry activates
    pub pane: &'a Pane,
    /// Set only for the entry matching the resolved index
    pub active: bool,
}

impl MenuItem<'_> {
    /// Label text as displayed, empty when the pane has no label.
    #[must_use]
    pub fn text(&self) -> String {
        self.label.map(MenuItemLabel::display).unwrap_or_default()
    }
}

/// Output of a pane for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPane {
    /// Position of the pane
    pub index: usize,
    /// Whether this is the active pane
    pub active: bool,
    /// What the pane produced; `None` for a pane with nothing to show
    pub content: Option<PaneContent>,
}

/// Builds the menu entries for `panes`.
#[must_use]
pub fn menu_items(panes: &[Pane], active_index: usize) -> Vec<MenuItem<'_>> {
    panes
        .iter()
        .enumerate()
        .map(|(index, pane)| MenuItem {
            index,
            label: pane.menu_item(),
            pane,
            active: index == active_index,
        })
        .collect()
}

/// Produces the rendered panes.
///
/// With `render_active_only`, only the active pane's render function runs,
/// and nothing is produced when the index is out of range. Otherwise every
/// pane contributes its pre-built content, flagged active or not.
#[must_use]
pub fn rendered_panes(
    panes: &[Pane],
    active_index: usize,
    render_active_only: bool,
) -> Vec<RenderedPane> {
    if render_active_only {
        return panes
            .get(active_index)
            .map(|pane| RenderedPane {
                index: active_index,
                active: true,
                content: pane.render(),
            })
            .into_iter()
            .collect();
    }

    panes
        .iter()
        .enumerate()
        .map(|(index, pane)| RenderedPane {
            index,
            active: index == active_index,
            content: pane.content().cloned(),
        })
        .collect()
}

/// Derives the view for one render.
#[must_use]
pub fn derive_view(props: &TabProps, active_index: usize, mode: SelectionMode) -> TabView<'_> {
    let panes = props.panes.as_slice();
    TabView {
        items: menu_items(panes, active_index),
        panes: rendered_panes(panes, active_index, props.render_active_only),
        menu: props.effective_menu(),
        active_index,
        mode,
        menu_position: props.menu_position,
        grid: props.grid,
        theme: &props.theme,
    }
}

/// Everything one render of a tab component shows.
#[derive(Debug, Clone)]
pub struct TabView<'a> {
    /// Menu entries, in pane order
    pub items: Vec<MenuItem<'a>>,
    /// Rendered panes
    pub panes: Vec<RenderedPane>,
    /// Merged menu configuration handed to the menu widget
    pub menu: MenuConfig,
    /// Resolved active index, unclamped
    pub active_index: usize,
    /// Mode the component rendered in
    pub mode: SelectionMode,
    menu_position: MenuPosition,
    grid: Grid,
    theme: &'a Theme,
}

impl TabView<'_> {
    /// Content of the visible pane.
    #[must_use]
    pub fn active_content(&self) -> Option<&PaneContent> {
        self.panes
            .iter()
            .find(|pane| pane.active)
            .and_then(|pane| pane.content.as_ref())
    }

    /// Menu entry flagged active, if the index is in range.
    #[must_use]
    pub fn active_item(&self) -> Option<&MenuItem<'_>> {
        self.items.iter().find(|item| item.active)
    }

    /// Regions for `area`.
    #[must_use]
    pub fn layout(&self, area: Rect) -> TabLayout {
        TabLayout::new(area, &self.menu, self.menu_position, self.grid)
    }

    /// Menu widget for this view.
    #[must_use]
    pub fn menu_widget(&self) -> TabMenu<'_> {
        TabMenu::new(&self.items, &self.menu, self.active_index, self.theme)
    }

    /// Pane index of the menu entry under `position` when drawn in `area`.
    #[must_use]
    pub fn item_at(&self, area: Rect, position: Position) -> Option<usize> {
        self.menu_widget()
            .item_at(self.layout(area).menu, position)
    }
}

impl Widget for &TabView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = self.layout(area);
        self.menu_widget().render(layout.menu, buf);

        if let Some(content) = self.active_content() {
            let attached = self.menu.attached() && !self.menu.vertical();
            TabPaneWidget::new(content, self.theme)
                .attached(attached)
                .render(layout.pane, buf);
        }
    }
}

impl Widget for TabView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}
