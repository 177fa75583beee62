use folio_platform::{MemoryStore, RouteLog};
use folio_terminal::TerminalSession;

/// Everything the front end owns besides the output handle.
pub struct AppState {
    pub session: TerminalSession,
    /// Observer clone of the store handed to the session; read by the footer.
    pub store: MemoryStore,
    /// Observer clone of the session's navigator.
    pub routes: RouteLog,
    /// Destination path once the terminal has navigated away.
    pub page: Option<String>,
    pub frame_counter: u64,
}

impl AppState {
    pub fn new(session: TerminalSession, store: MemoryStore, routes: RouteLog) -> Self {
        Self {
            session,
            store,
            routes,
            page: None,
            frame_counter: 0,
        }
    }

    /// Pick up a navigation request, tearing the terminal down if one arrived.
    ///
    /// Returns `true` once the terminal is gone (navigated or quit).
    pub fn poll_navigation(&mut self) -> bool {
        if let Some(path) = self.routes.drain().pop() {
            log::info!("leaving terminal for {path}");
            self.page = Some(path);
            self.session.dispose();
        }
        self.session.is_disposed()
    }
}
