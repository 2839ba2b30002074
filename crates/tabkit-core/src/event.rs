//! Activation events and change notifications.
//!
//! An [`ActivationEvent`] is the raw user interaction that asked for a pane
//! switch. After the component has processed it, the caller's notification
//! hook receives the same event together with a [`TabChange`].

use crate::pane::Pane;
use crate::selection::SelectionMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Interaction that triggered an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationEvent {
    /// Mouse input, usually a click on a menu item
    Mouse(MouseEvent),
    /// Keyboard input
    Key(KeyEvent),
    /// Activation requested by code rather than by the user
    Programmatic,
}

impl ActivationEvent {
    /// Left button press at the given cell.
    #[must_use]
    pub fn click(column: u16, row: u16) -> Self {
        ActivationEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    /// Key press without modifiers.
    #[must_use]
    pub fn key(code: KeyCode) -> Self {
        ActivationEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Converts a terminal event, keeping only mouse and key input.
    #[must_use]
    pub fn from_terminal(event: &crossterm::event::Event) -> Option<Self> {
        match event {
            crossterm::event::Event::Key(key) => Some(ActivationEvent::Key(*key)),
            crossterm::event::Event::Mouse(mouse) => Some(ActivationEvent::Mouse(*mouse)),
            _ => None,
        }
    }
}

/// Payload of a change notification.
#[derive(Debug, Clone, Copy)]
pub struct TabChange<'a> {
    /// The activated pane, by reference
    pub active_pane: &'a Pane,
    /// Position of the activated pane
    pub active_index: usize,
    /// Active index resolved before the activation
    pub previous_index: usize,
    /// Mode the component was in when the activation happened
    pub mode: SelectionMode,
}

impl TabChange<'_> {
    /// True when the activation targeted the pane that was already active.
    #[must_use]
    pub fn is_reselect(&self) -> bool {
        self.active_index == self.previous_index
    }
}

/// Caller-supplied notification hook.
pub type TabChangeHook = Box<dyn FnMut(&ActivationEvent, &TabChange<'_>)>;
