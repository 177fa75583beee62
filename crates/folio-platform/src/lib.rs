//! Platform capabilities consumed by the landing terminal.
//!
//! The terminal never touches the system clock, browser storage, or the
//! router directly. It receives them as trait objects bundled in
//! [`Services`], which lets tests and the desktop front end plug in their
//! own implementations.

pub mod memory;
pub mod services;
pub mod visitor;

pub use memory::{MemoryStore, RouteLog, UnavailableStore};
pub use services::{ClockService, DesktopPlatform, FixedClock, Navigator, Services, SessionStore};
pub use visitor::{DEFAULT_VISITOR_NAME, VISITOR_NAME_KEY, is_displayable_name, stored_visitor_name};
