//! Active-pane selection state machine.
//!
//! A tab component is either *controlled* (the caller supplies the active
//! index on every render and owns the truth) or *uncontrolled* (the component
//! remembers the index itself and updates it on activation). The mode is fixed
//! at mount as a [`Selection`] variant; resolving the active index is a match
//! over that variant.
//!
//! # Example
//!
//! ```
//! use tabkit_core::selection::{resolve_active_index, Selection, SelectionMode};
//!
//! assert_eq!(resolve_active_index(Some(2), 0), 2);
//! assert_eq!(resolve_active_index(None, 1), 1);
//!
//! let mut selection = Selection::mount(None, Some(1));
//! assert_eq!(selection.mode(), SelectionMode::Uncontrolled);
//! assert_eq!(selection.resolve(None), 1);
//!
//! selection.remember(2);
//! assert_eq!(selection.resolve(None), 2);
//! ```

use std::fmt;

/// Resolves the active index for a single render.
///
/// The caller's index wins whenever it is present, including `Some(0)`, and is
/// returned verbatim: it is not clamped to the pane count. Without a caller
/// index the component's remembered index is used.
#[must_use]
pub fn resolve_active_index(caller_index: Option<usize>, remembered_index: usize) -> usize {
    caller_index.unwrap_or(remembered_index)
}

/// Who owns the active index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// The caller supplies the active index on every render.
    Controlled,
    /// The component remembers the active index itself.
    Uncontrolled,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Controlled => f.write_str("controlled"),
            SelectionMode::Uncontrolled => f.write_str("uncontrolled"),
        }
    }
}

/// Selection state owned by one component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Caller-owned selection. `last_seen` is the most recent index the caller
    /// supplied, kept so a later omission has a well-defined fallback.
    Controlled {
        /// Last caller-supplied index
        last_seen: usize,
    },
    /// Component-owned selection.
    Uncontrolled {
        /// Index written by the last activation (or the initial default)
        remembered: usize,
    },
}

impl Selection {
    /// Creates the selection state at mount time.
    ///
    /// A caller-supplied active index selects controlled mode. Otherwise the
    /// remembered index starts at `default_active_index`, or 0.
    #[must_use]
    pub fn mount(active_index: Option<usize>, default_active_index: Option<usize>) -> Self {
        match active_index {
            Some(index) => Selection::Controlled { last_seen: index },
            None => Selection::Uncontrolled {
                remembered: default_active_index.unwrap_or(0),
            },
        }
    }

    /// Returns the mode of this selection.
    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        match self {
            Selection::Controlled { .. } => SelectionMode::Controlled,
            Selection::Uncontrolled { .. } => SelectionMode::Uncontrolled,
        }
    }

    /// Returns true when the caller owns the active index.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        matches!(self, Selection::Controlled { .. })
    }

    /// Index the component would fall back to without a caller index.
    #[must_use]
    pub fn fallback_index(&self) -> usize {
        match *self {
            Selection::Controlled { last_seen } => last_seen,
            Selection::Uncontrolled { remembered } => remembered,
        }
    }

    /// Resolves the active index for a render. Pure.
    #[must_use]
    pub fn resolve(&self, caller_index: Option<usize>) -> usize {
        resolve_active_index(caller_index, self.fallback_index())
    }

    /// Reconciles the variant with the props of a new render.
    ///
    /// Callers are expected to supply `active_index` consistently. When they
    /// do not, the flip is handled explicitly instead of silently:
    ///
    /// - controlled, index omitted: becomes uncontrolled and remembers the
    ///   last index the caller supplied, so the visible pane does not jump;
    /// - uncontrolled, index supplied: becomes controlled from that index.
    ///
    /// Returns true if the mode changed.
    pub fn observe(&mut self, caller_index: Option<usize>) -> bool {
        match (*self, caller_index) {
            (Selection::Controlled { .. }, Some(index)) => {
                *self = Selection::Controlled { last_seen: index };
                false
            }
            (Selection::Controlled { last_seen }, None) => {
                tracing::warn!(
                    last_seen,
                    "active_index omitted after mounting controlled; switching to uncontrolled"
                );
                *self = Selection::Uncontrolled {
                    remembered: last_seen,
                };
                true
            }
            (Selection::Uncontrolled { remembered }, Some(index)) => {
                tracing::warn!(
                    remembered,
                    index,
                    "active_index supplied after mounting uncontrolled; switching to controlled"
                );
                *self = Selection::Controlled { last_seen: index };
                true
            }
            (Selection::Uncontrolled { .. }, None) => false,
        }
    }

    /// Records an activation.
    ///
    /// Uncontrolled selections remember `index`; controlled selections are
    /// left untouched because the caller decides what the next render shows.
    /// Returns true if the state was written.
    pub fn remember(&mut self, index: usize) -> bool {
        match self {
            Selection::Uncontrolled { remembered } => {
                *remembered = index;
                true
            }
            Selection::Controlled { .. } => false,
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::mount(None, None)
    }
}
