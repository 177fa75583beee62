//! Platform-agnostic input event types.
//!
//! The front end maps its native key events to these enums. The terminal
//! session never sees raw platform input.

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Character typed into the active field.
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
    /// A navigation or action key pressed.
    ButtonPress(Button),
    /// User requested quit (escape, ctrl-c, window close).
    Quit,
}

/// Non-text keys the terminal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Down arrow: skip straight to the home page from the shell.
    Down,
    /// Enter / return: submits the active field.
    Confirm,
}
