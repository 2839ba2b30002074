//! # tabkit-ui
//!
//! Tab component and ratatui widgets for tabkit.
//!
//! This crate builds the interactive component on top of [`tabkit_core`]:
//!
//! - [`Tab`] - Mounted component: resolves the active pane, dispatches activations
//! - [`TabProps`] - Caller configuration: panes, index, menu overrides, hook
//! - [`TabView`] - What one render shows, drawable as a ratatui widget
//! - [`TabMenu`] / [`TabPaneWidget`] - Presentation collaborators
//! - [`TabLayout`] - Menu and pane regions for an area
//!
//! ## Controlled and Uncontrolled
//!
//! A component mounted with an `active_index` is controlled: its caller owns
//! the index and must feed back what the change hook reports. Without one the
//! component remembers the last activated pane itself.
//!
//! ## Example
//!
//! ```
//! use ratatui::prelude::*;
//! use ratatui::widgets::Widget;
//! use tabkit_core::{ActivationEvent, Pane, PaneContent};
//! use tabkit_ui::{Tab, TabProps};
//!
//! let mut props = TabProps::new().panes(vec![
//!     Pane::new("Tab 1", || PaneContent::new("Tab 1 Content")),
//!     Pane::new("Tab 2", || PaneContent::new("Tab 2 Content")),
//! ]);
//! let mut tab = Tab::mount(&props);
//! let area = Rect::new(0, 0, 40, 10);
//!
//! // Click on the second menu entry
//! let consumed = tab
//!     .handle_event(&mut props, area, &ActivationEvent::click(10, 0))
//!     .unwrap();
//! assert!(consumed);
//!
//! let mut buf = Buffer::empty(area);
//! tab.render(&props).render(area, &mut buf);
//! ```

pub mod layout;
pub mod tab;
pub mod view;
pub mod widgets;

pub use layout::{menu_height, Grid, MenuPosition, TabLayout};
pub use tab::{Tab, TabProps};
pub use view::{derive_view, menu_items, rendered_panes, MenuItem, RenderedPane, TabView};
pub use widgets::{TabMenu, TabPaneWidget};
