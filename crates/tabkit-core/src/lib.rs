//! # tabkit-core
//!
//! Selection state machine and data model for the tabkit tab widget.
//!
//! A tab widget shows a menu of labeled items and one visible pane. This
//! crate decides *which* pane is visible; rendering lives in `tabkit-ui`.
//!
//! ## Core Abstractions
//!
//! - [`Selection`] - Controlled/uncontrolled ownership of the active index
//! - [`resolve_active_index`] - Pure per-render resolution
//! - [`Pane`] - Menu label plus content-producing function
//! - [`PaneSource`] - Normalized pane sequence (`panes` or children)
//! - [`MenuConfig`] - Menu configuration merged over fixed defaults
//! - [`ActivationEvent`] / [`TabChange`] - Interaction and notification payload
//! - [`Theme`] - Palette for the widgets
//! - [`TabError`] - Error types
//!
//! ## Example
//!
//! ```
//! use tabkit_core::{Pane, PaneContent, Selection};
//!
//! let panes = vec![
//!     Pane::new("Tab 1", || PaneContent::new("Tab 1 Content")),
//!     Pane::new("Tab 2", || PaneContent::new("Tab 2 Content")),
//! ];
//!
//! let mut selection = Selection::mount(None, None);
//! selection.remember(1);
//!
//! let active = selection.resolve(None);
//! let content = panes.get(active).and_then(Pane::render);
//! assert_eq!(content.map(|c| c.plain_text()), Some("Tab 2 Content".to_string()));
//! ```

pub mod error;
pub mod event;
pub mod menu;
pub mod pane;
pub mod selection;
pub mod theme;

pub use error::{TabError, TabResult};
pub use event::{ActivationEvent, TabChange, TabChangeHook};
pub use menu::MenuConfig;
pub use pane::{MenuItemLabel, Pane, PaneBuilder, PaneContent, PaneSource};
pub use selection::{resolve_active_index, Selection, SelectionMode};
pub use theme::{Theme, ThemeColors, ThemeName};
