//! Core error types for tabkit-core
//!
//! Selection itself never fails: an out-of-range active index renders as an
//! absent pane. Errors are reserved for requests that name something that does
//! not exist, or for configuration that cannot be interpreted.

use thiserror::Error;

/// Errors that can occur while driving a tab component.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TabError {
    /// An activation named a position with no pane behind it.
    ///
    /// Activations routed from menu items always carry a valid position, so
    /// this only happens when a caller activates an index programmatically.
    #[error("pane not found at index {index} (pane count: {len})")]
    PaneNotFound {
        /// Requested position
        index: usize,
        /// Number of panes in the current render
        len: usize,
    },

    /// Menu configuration was not a key/value object.
    #[error("invalid menu configuration: {0}")]
    InvalidMenuConfig(String),
}

/// Result type alias using [`TabError`].
pub type TabResult<T> = Result<T, TabError>;
