//! Widgets for the tab component
//!
//! These are the presentation collaborators of the tab component. They draw
//! what the derived view tells them to and hold no selection state.
//!
//! ## Available Widgets
//!
//! - [`TabMenu`] - Menu of tab labels with active highlighting and hit testing
//! - [`TabPaneWidget`] - Content of the active pane

pub mod menu;
pub mod pane;

pub use menu::TabMenu;
pub use pane::TabPaneWidget;
