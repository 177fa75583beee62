//! Platform service traits and desktop implementation.

use chrono::Timelike;
use folio_types::error::{FolioError, Result};

// ---------------------------------------------------------------------------
// Clock service
// ---------------------------------------------------------------------------

/// Abstraction over the local wall clock.
pub trait ClockService {
    /// Current local hour of day, `0..=23`. No timezone normalization.
    fn local_hour(&self) -> Result<u8>;
}

// ---------------------------------------------------------------------------
// Session storage
// ---------------------------------------------------------------------------

/// Tab/session-scoped string key-value storage.
///
/// Callers treat every operation as best-effort.
pub trait SessionStore {
    /// Read a value, `Ok(None)` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// Router abstraction: swaps the current view for the one at `path`.
pub trait Navigator {
    fn navigate(&mut self, path: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Service bundle
// ---------------------------------------------------------------------------

/// Capabilities handed to a terminal session at construction.
pub struct Services {
    pub clock: Box<dyn ClockService>,
    pub store: Box<dyn SessionStore>,
    pub navigator: Box<dyn Navigator>,
}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Clock backed by the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopPlatform;

impl DesktopPlatform {
    pub fn new() -> Self {
        Self
    }
}

impl ClockService for DesktopPlatform {
    fn local_hour(&self) -> Result<u8> {
        let hour = chrono::Local::now().hour();
        u8::try_from(hour).map_err(|_| FolioError::Platform(format!("hour out of range: {hour}")))
    }
}

/// Clock pinned to a single hour.
///
/// Used for deterministic demos (`FOLIO_HOUR`) and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    hour: u8,
}

impl FixedClock {
    /// Create a clock that always reports `hour`. Fails unless `hour < 24`.
    pub fn new(hour: u8) -> Result<Self> {
        if hour >= 24 {
            return Err(FolioError::Platform(format!("invalid hour: {hour}")));
        }
        Ok(Self { hour })
    }
}

impl ClockService for FixedClock {
    fn local_hour(&self) -> Result<u8> {
        Ok(self.hour)
    }
}

// ---------------------------------------------------------------------------
// In-module tests
// ---------------------------------------------------------------------------
