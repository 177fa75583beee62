//! Foundation types for the folio landing terminal.
//!
//! Platform-agnostic types shared by every folio crate: input events,
//! terminal configuration, and the error type.

pub mod config;
pub mod error;
pub mod input;
