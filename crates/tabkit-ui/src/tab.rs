//! The tab component
//!
//! [`Tab`] is the stateful half of the component and lives as long as the
//! mounted widget. [`TabProps`] is rebuilt (or updated) by the caller for
//! every render. A render resolves the active index and derives a
//! [`TabView`]; an activation goes through [`Tab::on_item_activated`], which
//! updates the remembered index in uncontrolled mode and always notifies the
//! caller.
//!
//! # Example
//!
//! ```
//! use tabkit_core::{Pane, PaneContent};
//! use tabkit_ui::{Tab, TabProps};
//!
//! let mut props = TabProps::new().panes(vec![
//!     Pane::new("Tab 1", || PaneContent::new("Tab 1 Content")),
//!     Pane::new("Tab 2", || PaneContent::new("Tab 2 Content")),
//! ]);
//! let mut tab = Tab::mount(&props);
//!
//! tab.activate(&mut props, 1).unwrap();
//!
//! let view = tab.render(&props);
//! assert_eq!(view.active_index, 1);
//! assert_eq!(
//!     view.active_content().map(|c| c.plain_text()),
//!     Some("Tab 2 Content".to_string())
//! );
//! ```

use crate::layout::{Grid, MenuPosition, TabLayout};
use crate::view::{derive_view, menu_items, TabView};
use crate::widgets::TabMenu;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::prelude::*;
use std::fmt;
use tabkit_core::{
    ActivationEvent, MenuConfig, Pane, PaneSource, Selection, SelectionMode, TabChange,
    TabChangeHook, TabError, TabResult, Theme,
};

/// Caller-side configuration of a tab component.
pub struct TabProps {
    /// Normalized pane sequence
    pub panes: PaneSource,
    /// Caller-owned active index; presence means controlled mode
    pub active_index: Option<usize>,
    /// Initial remembered index for uncontrolled mode
    pub default_active_index: Option<usize>,
    /// Overrides merged over [`TabProps::default_menu`]
    pub menu: MenuConfig,
    /// Render only the active pane (the default) or every pane
    pub render_active_only: bool,
    /// Column widths for vertical menus
    pub grid: Grid,
    /// Side of a vertical menu
    pub menu_position: MenuPosition,
    /// Palette for the widgets
    pub theme: Theme,
    on_tab_change: Option<TabChangeHook>,
}

impl TabProps {
    /// Props with no panes and default settings.
    #[must_use]
    pub fn new() -> Self {
        TabProps {
            panes: PaneSource::Empty,
            active_index: None,
            default_active_index: None,
            menu: MenuConfig::new(),
            render_active_only: true,
            grid: Grid::default(),
            menu_position: MenuPosition::default(),
            theme: Theme::default(),
            on_tab_change: None,
        }
    }

    /// Default menu configuration: an attached, tabular menu.
    #[must_use]
    pub fn default_menu() -> MenuConfig {
        MenuConfig::defaults()
    }

    /// Sets the panes.
    #[must_use]
    pub fn panes(mut self, panes: Vec<Pane>) -> Self {
        self.panes = PaneSource::Panes(panes);
        self
    }

    /// Sets the panes in the legacy children form.
    ///
    /// Ignored when panes were already given through [`TabProps::panes`].
    #[must_use]
    pub fn children(mut self, children: Vec<Pane>) -> Self {
        if !matches!(self.panes, PaneSource::Panes(_)) {
            self.panes = PaneSource::Children(children);
        }
        self
    }

    /// Makes the component controlled at `index`.
    #[must_use]
    pub fn active_index(mut self, index: usize) -> Self {
        self.active_index = Some(index);
        self
    }

    /// Sets the initial remembered index.
    #[must_use]
    pub fn default_active_index(mut self, index: usize) -> Self {
        self.default_active_index = Some(index);
        self
    }

    /// Sets the menu overrides.
    #[must_use]
    pub fn menu(mut self, menu: MenuConfig) -> Self {
        self.menu = menu;
        self
    }

    /// Sets whether only the active pane is rendered.
    #[must_use]
    pub fn render_active_only(mut self, render_active_only: bool) -> Self {
        self.render_active_only = render_active_only;
        self
    }

    /// Sets the vertical menu grid.
    #[must_use]
    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the vertical menu side.
    #[must_use]
    pub fn menu_position(mut self, position: MenuPosition) -> Self {
        self.menu_position = position;
        self
    }

    /// Sets the theme.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Sets the change notification hook.
    #[must_use]
    pub fn on_tab_change<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&ActivationEvent, &TabChange<'_>) + 'static,
    {
        self.on_tab_change = Some(Box::new(hook));
        self
    }

    /// Updates the caller-owned index between renders.
    pub fn set_active_index(&mut self, index: Option<usize>) {
        self.active_index = index;
    }

    /// Whether a change hook is installed.
    #[must_use]
    pub fn has_on_tab_change(&self) -> bool {
        self.on_tab_change.is_some()
    }

    /// Menu configuration handed to the menu widget.
    #[must_use]
    pub fn effective_menu(&self) -> MenuConfig {
        MenuConfig::merged(&self.menu)
    }
}

impl Default for TabProps {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TabProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabProps")
            .field("panes", &self.panes)
            .field("active_index", &self.active_index)
            .field("default_active_index", &self.default_active_index)
            .field("menu", &self.menu)
            .field("render_active_only", &self.render_active_only)
            .field("grid", &self.grid)
            .field("menu_position", &self.menu_position)
            .field("theme", &self.theme.name)
            .field("on_tab_change", &self.on_tab_change.is_some())
            .finish()
    }
}

/// A mounted tab component.
///
/// # Thread Safety
///
/// Pane descriptors and hooks are single-threaded (`Rc`, `FnMut`), so a tab
/// and its props stay on the UI thread.
#[derive(Debug, Clone, Default)]
pub struct Tab {
    selection: Selection,
}

impl Tab {
    /// Mounts a component for `props`.
    ///
    /// The mode is decided here: a caller-supplied active index makes the
    /// component controlled, otherwise it remembers `default_active_index`
    /// (or 0).
    #[must_use]
    pub fn mount(props: &TabProps) -> Self {
        let selection = Selection::mount(props.active_index, props.default_active_index);
        tracing::debug!(
            mode = %selection.mode(),
            panes = props.panes.len(),
            "tab mounted"
        );
        Tab { selection }
    }

    /// Current selection state.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    /// Active index `props` would resolve to right now. Pure.
    #[must_use]
    pub fn active_index(&self, props: &TabProps) -> usize {
        self.selection.resolve(props.active_index)
    }

    /// Renders the component for `props`.
    ///
    /// The remembered index is read as it stands at the start of the call;
    /// activations only show up in the next render.
    pub fn render<'p>(&mut self, props: &'p TabProps) -> TabView<'p> {
        self.selection.observe(props.active_index);
        let active_index = self.selection.resolve(props.active_index);
        derive_view(props, active_index, self.selection.mode())
    }

    /// Handles activation of the menu entry at `candidate_index`.
    ///
    /// The mode is reconciled with `props` first, as a render would. Uncontrolled
    /// components remember the index; controlled ones leave
    /// everything to the caller, who must supply the new index on the next
    /// render for the view to move. Either way the caller's hook, if any, is
    /// invoked exactly once with the activated pane.
    ///
    /// # Errors
    ///
    /// Returns [`TabError::PaneNotFound`] when there is no pane at
    /// `candidate_index`. Nothing is changed or notified in that case.
    pub fn on_item_activated(
        &mut self,
        props: &mut TabProps,
        event: &ActivationEvent,
        candidate_index: usize,
    ) -> TabResult<()> {
        let pane = props
            .panes
            .get(candidate_index)
            .ok_or(TabError::PaneNotFound {
                index: candidate_index,
                len: props.panes.len(),
            })?;

        // Props may have changed mode since the last render
        self.selection.observe(props.active_index);
        let previous_index = self.selection.resolve(props.active_index);
        let mode = self.selection.mode();

        if self.selection.remember(candidate_index) {
            tracing::debug!(index = candidate_index, "remembered active index");
        }
        tracing::debug!(
            previous_index,
            active_index = candidate_index,
            key = ?pane.menu_item().and_then(|label| label.key.as_deref()),
            %mode,
            "tab activated"
        );

        if let Some(hook) = props.on_tab_change.as_mut() {
            let change = TabChange {
                active_pane: pane,
                active_index: candidate_index,
                previous_index,
                mode,
            };
            hook(event, &change);
        }

        Ok(())
    }

    /// Activates `index` from code.
    ///
    /// # Errors
    ///
    /// Same as [`Tab::on_item_activated`].
    pub fn activate(&mut self, props: &mut TabProps, index: usize) -> TabResult<()> {
        self.on_item_activated(props, &ActivationEvent::Programmatic, index)
    }

    /// Routes terminal input drawn in `area` to an activation.
    ///
    /// Left clicks on a menu entry activate it. `Right`/`Tab` and
    /// `Left`/`BackTab` move to the next/previous pane with wrap-around
    /// (`Down`/`Up` too for vertical menus), `Home`/`End` jump to the ends and
    /// `1`-`9` select by position. Keys held with Ctrl or Alt are left alone.
    ///
    /// Returns whether the event was consumed.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Tab::on_item_activated`].
    pub fn handle_event(
        &mut self,
        props: &mut TabProps,
        area: Rect,
        event: &ActivationEvent,
    ) -> TabResult<bool> {
        let len = props.panes.len();
        if len == 0 {
            return Ok(false);
        }

        self.selection.observe(props.active_index);
        let active = self.selection.resolve(props.active_index);
        let target = match event {
            ActivationEvent::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                menu_hit(props, active, area, Position::new(mouse.column, mouse.row))
            }
            ActivationEvent::Mouse(_) => None,
            ActivationEvent::Key(key) => {
                key_target(key, active, len, props.effective_menu().vertical())
            }
            ActivationEvent::Programmatic => None,
        };

        match target {
            Some(index) => {
                self.on_item_activated(props, event, index)?;
                Ok(true)
            }
            None => {
                tracing::trace!(?event, "event not routed to a menu item");
                Ok(false)
            }
        }
    }
}

/// Menu entry under `position`, using the same geometry as rendering.
fn menu_hit(props: &TabProps, active: usize, area: Rect, position: Position) -> Option<usize> {
    let config = props.effective_menu();
    let layout = TabLayout::new(area, &config, props.menu_position, props.grid);
    let items = menu_items(props.panes.as_slice(), active);
    TabMenu::new(&items, &config, active, &props.theme).item_at(layout.menu, position)
}

/// Pane a key press moves to.
fn key_target(key: &KeyEvent, active: usize, len: usize, vertical: bool) -> Option<usize> {
    if key.kind == KeyEventKind::Release
        || key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    let next = if active >= len { 0 } else { (active + 1) % len };
    let prev = if active == 0 || active >= len {
        len - 1
    } else {
        active - 1
    };

    match key.code {
        KeyCode::Right | KeyCode::Tab => Some(next),
        KeyCode::Left | KeyCode::BackTab => Some(prev),
        KeyCode::Down if vertical => Some(next),
        KeyCode::Up if vertical => Some(prev),
        KeyCode::Home => Some(0),
        KeyCode::End => Some(len - 1),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .map(|d| d as usize - 1)
            .filter(|&index| index < len),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tabkit_core::menu::VERTICAL;
    use tabkit_core::PaneContent;

    #[derive(Debug, Clone)]
    struct Call {
        event: ActivationEvent,
        pane: Pane,
        active_index: usize,
        previous_index: usize,
        mode: SelectionMode,
    }

    fn create_test_panes() -> Vec<Pane> {
        (1..=3)
            .map(|i| {
                Pane::new(format!("Tab {}", i), move || {
                    PaneContent::new(format!("Tab {} Content", i))
                })
            })
            .collect()
    }

    fn spy(props: TabProps) -> (TabProps, Rc<RefCell<Vec<Call>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let props = props.on_tab_change(move |event, change| {
            sink.borrow_mut().push(Call {
                event: *event,
                pane: change.active_pane.clone(),
                active_index: change.active_index,
                previous_index: change.previous_index,
                mode: change.mode,
            });
        });
        (props, calls)
    }

    fn content_of(view: &TabView<'_>) -> Option<String> {
        view.active_content().map(|c| c.plain_text())
    }

    // ==================== Props Tests ====================

    #[test]
    fn test_default_menu_is_attached_tabular() {
        assert_eq!(
            TabProps::default_menu().to_value(),
            serde_json::json!({ "attached": true, "tabular": true })
        );
    }

    #[test]
    fn test_props_defaults() {
        let props = TabProps::default();
        assert!(props.panes.is_empty());
        assert!(props.active_index.is_none());
        assert!(props.render_active_only);
        assert!(!props.has_on_tab_change());
        assert!(props.menu.is_empty());
    }

    #[test]
    fn test_children_are_normalized() {
        let props = TabProps::new().children(create_test_panes());
        assert!(matches!(props.panes, PaneSource::Children(_)));
        assert_eq!(props.panes.len(), 3);
    }

    #[test]
    fn test_panes_win_over_children() {
        let props = TabProps::new()
            .panes(create_test_panes())
            .children(vec![Pane::new("Other", || PaneContent::new("other"))]);
        assert!(matches!(props.panes, PaneSource::Panes(_)));
        assert_eq!(props.panes.len(), 3);
    }

    #[test]
    fn test_props_debug_hides_hook() {
        let (props, _) = spy(TabProps::new());
        let debug = format!("{:?}", props);
        assert!(debug.contains("on_tab_change: true"));
    }

    // ==================== Mount & Render Tests ====================

    #[test]
    fn test_mount_uncontrolled_defaults_to_first() {
        let props = TabProps::new().panes(create_test_panes());
        let mut tab = Tab::mount(&props);

        assert_eq!(tab.mode(), SelectionMode::Uncontrolled);
        let view = tab.render(&props);
        assert_eq!(view.active_index, 0);
        assert_eq!(content_of(&view).as_deref(), Some("Tab 1 Content"));
    }

    #[test]
    fn test_mount_uses_default_active_index() {
        let props = TabProps::new()
            .panes(create_test_panes())
            .default_active_index(2);
        let mut tab = Tab::mount(&props);

        assert_eq!(content_of(&tab.render(&props)).as_deref(), Some("Tab 3 Content"));
    }

    #[test]
    fn test_controlled_render_without_click() {
        let props = TabProps::new().panes(create_test_panes()).active_index(1);
        let mut tab = Tab::mount(&props);

        let view = tab.render(&props);
        assert_eq!(tab.mode(), SelectionMode::Controlled);
        assert_eq!(view.menu_widget().active_index(), 1);
        assert_eq!(content_of(&view).as_deref(), Some("Tab 2 Content"));
    }

    #[test]
    fn test_out_of_range_index_renders_no_pane() {
        let props = TabProps::new().panes(create_test_panes()).active_index(123);
        let mut tab = Tab::mount(&props);

        let view = tab.render(&props);
        assert_eq!(view.active_index, 123);
        assert!(view.panes.is_empty());
        assert!(view.items.iter().all(|item| !item.active));
    }

    #[test]
    fn test_render_is_repeatable() {
        let props = TabProps::new().panes(create_test_panes());
        let mut tab = Tab::mount(&props);
        let first = tab.render(&props).active_index;
        let second = tab.render(&props).active_index;
        assert_eq!(first, second);
        assert_eq!(tab.active_index(&props), first);
    }

    // ==================== Dispatcher Tests ====================

    #[test]
    fn test_uncontrolled_activation_moves_next_render() {
        let (mut props, calls) = spy(TabProps::new().panes(create_test_panes()));
        let mut tab = Tab::mount(&props);

        tab.on_item_activated(&mut props, &ActivationEvent::click(9, 0), 1)
            .expect("pane exists");

        let view = tab.render(&props);
        assert_eq!(view.active_index, 1);
        assert_eq!(content_of(&view).as_deref(), Some("Tab 2 Content"));

        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].active_index, 1);
        assert_eq!(calls[0].previous_index, 0);
        assert_eq!(calls[0].mode, SelectionMode::Uncontrolled);
        assert_eq!(calls[0].event, ActivationEvent::click(9, 0));
    }

    #[test]
    fn test_controlled_activation_does_not_move() {
        let (mut props, calls) =
            spy(TabProps::new().panes(create_test_panes()).active_index(0));
        let mut tab = Tab::mount(&props);

        tab.activate(&mut props, 2).expect("pane exists");

        let view = tab.render(&props);
        assert_eq!(view.active_index, 0);
        assert_eq!(content_of(&view).as_deref(), Some("Tab 1 Content"));

        let calls = calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].active_index, 2);
        assert_eq!(calls[0].mode, SelectionMode::Controlled);
    }

    #[test]
    fn test_controlled_moves_when_caller_resupplies() {
        let (mut props, calls) =
            spy(TabProps::new().panes(create_test_panes()).active_index(0));
        let mut tab = Tab::mount(&props);

        tab.activate(&mut props, 2).expect("pane exists");
        let requested = calls.borrow()[0].active_index;
        props.set_active_index(Some(requested));

        assert_eq!(content_of(&tab.render(&props)).as_deref(), Some("Tab 3 Content"));
    }

    #[test]
    fn test_notification_carries_pane_by_reference() {
        let panes = create_test_panes();
        let (mut props, calls) = spy(TabProps::new().panes(panes.clone()));
        let mut tab = Tab::mount(&props);

        for index in [2, 0, 1] {
            tab.activate(&mut props, index).expect("pane exists");
        }

        let calls = calls.borrow();
        assert_eq!(calls.len(), 3);
        for call in calls.iter() {
            assert!(Pane::ptr_eq(&call.pane, &panes[call.active_index]));
        }
        assert_eq!(calls[1].previous_index, 2);
        assert_eq!(calls[2].previous_index, 0);
    }

    #[test]
    fn test_activation_without_hook() {
        let mut props = TabProps::new().panes(create_test_panes());
        let mut tab = Tab::mount(&props);

        assert!(tab.activate(&mut props, 2).is_ok());
        assert_eq!(tab.active_index(&props), 2);
    }

    #[test]
    fn test_activation_out_of_range_is_error_without_side_effects() {
        let (mut props, calls) = spy(TabProps::new().panes(create_test_panes()));
        let mut tab = Tab::mount(&props);

        let result = tab.activate(&mut props, 5);
        assert_eq!(result, Err(TabError::PaneNotFound { index: 5, len: 3 }));
        assert_eq!(tab.active_index(&props), 0);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_reselecting_active_still_notifies() {
        let (mut props, calls) = spy(TabProps::new().panes(create_test_panes()));
        let mut tab = Tab::mount(&props);

        tab.activate(&mut props, 0).expect("pane exists");
        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(calls.borrow()[0].previous_index, 0);
    }

    // ==================== Mode Flip Tests ====================

    #[test]
    fn test_controlled_then_omitted_keeps_last_index() {
        let mut props = TabProps::new().panes(create_test_panes()).active_index(2);
        let mut tab = Tab::mount(&props);
        let _ = tab.render(&props);

        props.set_active_index(None);
        let view = tab.render(&props);

        assert_eq!(view.active_index, 2);
        assert_eq!(tab.mode(), SelectionMode::Uncontrolled);

        tab.activate(&mut props, 0).expect("pane exists");
        assert_eq!(tab.render(&props).active_index, 0);
    }

    #[test]
    fn test_uncontrolled_then_supplied_becomes_controlled() {
        let mut props = TabProps::new().panes(create_test_panes());
        let mut tab = Tab::mount(&props);

        props.set_active_index(Some(1));
        let view = tab.render(&props);

        assert_eq!(view.active_index, 1);
        assert_eq!(tab.mode(), SelectionMode::Controlled);
    }

    #[test]
    fn test_activation_after_dropping_index_is_remembered() {
        let (mut props, calls) =
            spy(TabProps::new().panes(create_test_panes()).active_index(0));
        let mut tab = Tab::mount(&props);
        let _ = tab.render(&props);

        props.set_active_index(None);
        tab.activate(&mut props, 2).expect("pane exists");

        assert_eq!(calls.borrow()[0].mode, SelectionMode::Uncontrolled);
        assert_eq!(calls.borrow()[0].previous_index, 0);

        let view = tab.render(&props);
        assert_eq!(view.active_index, 2);
        assert_eq!(content_of(&view).as_deref(), Some("Tab 3 Content"));
    }

    #[test]
    fn test_activation_after_supplying_index_is_controlled() {
        let (mut props, calls) = spy(TabProps::new().panes(create_test_panes()));
        let mut tab = Tab::mount(&props);
        let _ = tab.render(&props);

        props.set_active_index(Some(1));
        tab.activate(&mut props, 2).expect("pane exists");

        assert_eq!(calls.borrow()[0].mode, SelectionMode::Controlled);
        assert_eq!(calls.borrow()[0].previous_index, 1);
        assert_eq!(tab.selection(), Selection::Controlled { last_seen: 1 });

        // Nothing was remembered, so dropping the index falls back to the caller's last one
        props.set_active_index(None);
        assert_eq!(tab.render(&props).active_index, 1);
    }

    #[test]
    fn test_key_after_dropping_index_steps_from_last_seen() {
        let mut props = TabProps::new().panes(create_test_panes()).active_index(1);
        let mut tab = Tab::mount(&props);
        let _ = tab.render(&props);

        props.set_active_index(None);
        let right = ActivationEvent::key(KeyCode::Right);
        tab.handle_event(&mut props, Rect::new(0, 0, 40, 10), &right)
            .expect("routing succeeds");

        assert_eq!(tab.mode(), SelectionMode::Uncontrolled);
        assert_eq!(tab.render(&props).active_index, 2);
    }

    // ==================== Event Routing Tests ====================

    #[test]
    fn test_click_on_menu_item() {
        let (mut props, calls) = spy(TabProps::new().panes(create_test_panes()));
        let mut tab = Tab::mount(&props);
        let area = Rect::new(0, 0, 40, 10);

        // " Tab 1 " occupies 0..7, divider at 7, " Tab 2 " at 8..15
        let consumed = tab
            .handle_event(&mut props, area, &ActivationEvent::click(10, 0))
            .expect("routing succeeds");

        assert!(consumed);
        assert_eq!(tab.active_index(&props), 1);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_click_outside_menu_is_ignored() {
        let (mut props, calls) = spy(TabProps::new().panes(create_test_panes()));
        let mut tab = Tab::mount(&props);
        let area = Rect::new(0, 0, 40, 10);

        for (column, row) in [(7, 0), (10, 5), (39, 0)] {
            let consumed = tab
                .handle_event(&mut props, area, &ActivationEvent::click(column, row))
                .expect("routing succeeds");
            assert!(!consumed);
        }
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_non_left_click_is_ignored() {
        use crossterm::event::MouseEvent;

        let mut props = TabProps::new().panes(create_test_panes());
        let mut tab = Tab::mount(&props);
        let event = ActivationEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 10,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });

        let consumed = tab
            .handle_event(&mut props, Rect::new(0, 0, 40, 10), &event)
            .expect("routing succeeds");
        assert!(!consumed);
    }

    #[test]
    fn test_arrow_keys_wrap() {
        let mut props = TabProps::new().panes(create_test_panes());
        let mut tab = Tab::mount(&props);
        let area = Rect::new(0, 0, 40, 10);

        let left = ActivationEvent::key(KeyCode::Left);
        tab.handle_event(&mut props, area, &left).expect("routing succeeds");
        assert_eq!(tab.active_index(&props), 2);

        let right = ActivationEvent::key(KeyCode::Right);
        tab.handle_event(&mut props, area, &right).expect("routing succeeds");
        assert_eq!(tab.active_index(&props), 0);

        let tab_key = ActivationEvent::key(KeyCode::Tab);
        tab.handle_event(&mut props, area, &tab_key).expect("routing succeeds");
        assert_eq!(tab.active_index(&props), 1);
    }

    #[test]
    fn test_digit_keys_select_position() {
        let mut props = TabProps::new().panes(create_test_panes());
        let mut tab = Tab::mount(&props);
        let area = Rect::new(0, 0, 40, 10);

        let three = ActivationEvent::key(KeyCode::Char('3'));
        assert!(tab.handle_event(&mut props, area, &three).expect("routing succeeds"));
        assert_eq!(tab.active_index(&props), 2);

        for c in ['4', '0', 'x'] {
            let event = ActivationEvent::key(KeyCode::Char(c));
            assert!(!tab.handle_event(&mut props, area, &event).expect("routing succeeds"));
        }
        assert_eq!(tab.active_index(&props), 2);
    }

    #[test]
    fn test_up_down_only_for_vertical_menus() {
        let mut props = TabProps::new().panes(create_test_panes());
        let mut tab = Tab::mount(&props);
        let area = Rect::new(0, 0, 40, 10);
        let down = ActivationEvent::key(KeyCode::Down);

        assert!(!tab.handle_event(&mut props, area, &down).expect("routing succeeds"));

        let mut props = props.menu(MenuConfig::new().with(VERTICAL, true));
        assert!(tab.handle_event(&mut props, area, &down).expect("routing succeeds"));
        assert_eq!(tab.active_index(&props), 1);
    }

    #[test]
    fn test_modified_keys_pass_through() {
        let mut props = TabProps::new().panes(create_test_panes());
        let mut tab = Tab::mount(&props);
        let event = ActivationEvent::Key(KeyEvent::new(KeyCode::Right, KeyModifiers::CONTROL));

        let consumed = tab
            .handle_event(&mut props, Rect::new(0, 0, 40, 10), &event)
            .expect("routing succeeds");
        assert!(!consumed);
    }

    #[test]
    fn test_keys_in_controlled_mode_only_notify() {
        let (mut props, calls) =
            spy(TabProps::new().panes(create_test_panes()).active_index(1));
        let mut tab = Tab::mount(&props);

        let end = ActivationEvent::key(KeyCode::End);
        tab.handle_event(&mut props, Rect::new(0, 0, 40, 10), &end)
            .expect("routing succeeds");

        assert_eq!(tab.active_index(&props), 1);
        assert_eq!(calls.borrow()[0].active_index, 2);
    }

    #[test]
    fn test_events_with_no_panes() {
        let mut props = TabProps::new();
        let mut tab = Tab::mount(&props);

        let consumed = tab
            .handle_event(&mut props, Rect::new(0, 0, 40, 10), &ActivationEvent::key(KeyCode::Right))
            .expect("routing succeeds");
        assert!(!consumed);
    }

    #[test]
    fn test_key_target_from_out_of_range() {
        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(key_target(&right, 123, 3, false), Some(0));
        assert_eq!(key_target(&left, 123, 3, false), Some(2));
    }

    #[test]
    fn test_key_release_ignored() {
        let mut key = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(key_target(&key, 0, 3, false), None);
    }
}
