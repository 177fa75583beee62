//! Landing terminal subsystem.
//!
//! A visitor types a name, gets a time-of-day greeting typed back at them,
//! and lands in a tiny shell whose commands print canned text or navigate
//! to a site section. All timing goes through one cancellable scheduler.

pub mod commands;
pub mod fade;
pub mod greeting;
pub mod scheduler;
pub mod session;
pub mod typing;

/// Site sections reachable with `cd`.
pub use commands::Section;
/// Commands known to the shell.
pub use commands::ShellCommand;
/// Greeting text for a given hour.
pub use greeting::greeting_for;
/// Cancellable virtual-time scheduler.
pub use scheduler::{Scheduler, TaskHandle};
/// The terminal session state machine.
pub use session::{Phase, TerminalSession};
/// Character-by-character line revealer.
pub use typing::{TypingEngine, TypingStep};
