use std::io::Write;

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use folio_platform::{SessionStore, stored_visitor_name};
use folio_terminal::{Phase, Section, TerminalSession};

use crate::app_state::AppState;

const CURSOR: char = '▊';
const NAME_PLACEHOLDER: &str = "visitor";

/// One row of terminal output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub dim: bool,
}

impl Line {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            dim: false,
        }
    }

    fn dim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            dim: true,
        }
    }
}

/// Build the visible rows for the current session state, keeping the
/// header and the last `max_rows` body rows.
pub fn terminal_lines(session: &TerminalSession, max_rows: usize) -> Vec<Line> {
    let config = session.config();
    let mut header = vec![Line::dim(format!("terminal :: {}", config.host))];
    header.extend(config.boot_lines.iter().map(Line::dim));
    header.push(Line::plain(""));

    let mut body = Vec::new();
    match session.phase() {
        Phase::Name => {
            body.push(Line::plain("enter your name to continue:"));
            if session.pending_input().is_empty() {
                body.push(Line::dim(format!("→ {NAME_PLACEHOLDER}{CURSOR}")));
            } else {
                body.push(Line::plain(format!("→ {}{CURSOR}", session.pending_input())));
            }
            body.push(Line::plain(""));
            body.push(Line::dim("press enter to continue"));
        },
        phase => {
            body.extend(session.history().iter().map(Line::plain));
            let buffer = session.typing_buffer();
            if let Some((last, done)) = buffer.split_last() {
                body.extend(done.iter().map(Line::plain));
                body.push(Line::plain(format!("{last}{CURSOR}")));
            } else if phase == Phase::Shell {
                body.push(Line::plain(format!(
                    "{} {}{CURSOR}",
                    session.prompt(),
                    session.pending_input()
                )));
            }
        },
    }

    let keep = max_rows.saturating_sub(header.len());
    let skip = body.len().saturating_sub(keep);
    header.extend(body.into_iter().skip(skip));
    header
}

/// Colour for the fade-out; `None` means normal colours, and fully faded
/// output is not drawn at all.
fn fade_color(opacity: f32) -> Option<Option<Color>> {
    if opacity >= 0.66 {
        Some(None)
    } else if opacity >= 0.33 {
        Some(Some(Color::Grey))
    } else if opacity > 0.05 {
        Some(Some(Color::DarkGrey))
    } else {
        None
    }
}

/// Redraw the whole terminal view.
pub fn draw_terminal(out: &mut impl Write, state: &AppState) -> Result<()> {
    let (_, rows) = crossterm::terminal::size()?;
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    let Some(fade) = fade_color(state.session.opacity()) else {
        out.flush()?;
        return Ok(());
    };
    for (row, line) in terminal_lines(&state.session, usize::from(rows))
        .iter()
        .enumerate()
    {
        let color = match fade {
            Some(c) => Some(c),
            None if line.dim => Some(Color::DarkGrey),
            None => None,
        };
        let y = u16::try_from(row).unwrap_or(u16::MAX);
        queue!(out, MoveTo(0, y))?;
        if let Some(c) = color {
            queue!(out, SetForegroundColor(c), Print(&line.text), ResetColor)?;
        } else {
            queue!(out, Print(&line.text))?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Footer shown under every page.
pub fn footer_lines(store: &dyn SessionStore) -> Vec<String> {
    let mut lines = vec!["~/Gundrum.dev © 2026".to_string()];
    if let Some(name) = stored_visitor_name(store) {
        lines.push(format!("thanks for stopping by, {name}."));
    }
    lines.push("github · linkedin · twitter".to_string());
    lines
}

/// Landing text for the page the terminal navigated to.
pub fn page_lines(path: &str, store: &dyn SessionStore) -> Vec<String> {
    let title = Section::from_path(path).map_or("Not Found", Section::title);
    let mut lines = vec![format!("{title}  ({path})"), String::new()];
    lines.extend(footer_lines(store));
    lines
}

/// Print the destination page after the terminal has been torn down.
pub fn draw_page(out: &mut impl Write, state: &AppState) -> Result<()> {
    let Some(path) = state.page.as_deref() else {
        return Ok(());
    };
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    for line in page_lines(path, &state.store) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_platform::{FixedClock, MemoryStore, RouteLog, Services, VISITOR_NAME_KEY};
    use folio_types::config::TerminalConfig;
    use folio_types::input::InputEvent;

    fn session() -> TerminalSession {
        let services = Services {
            clock: Box::new(FixedClock::new(9).unwrap()),
            store: Box::new(MemoryStore::new()),
            navigator: Box::new(RouteLog::new()),
        };
        TerminalSession::new(TerminalConfig::default(), services)
    }

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn name_phase_shows_placeholder() {
        let s = session();
        let lines = terminal_lines(&s, 50);
        let t = texts(&lines);
        assert_eq!(t[0], "terminal :: portfolio");
        assert!(t.contains(&"system initialized..."));
        assert!(t.contains(&"enter your name to continue:"));
        let field = lines.iter().find(|l| l.text.starts_with('→')).unwrap();
        assert!(field.dim);
        assert!(field.text.contains(NAME_PLACEHOLDER));
    }

    #[test]
    fn name_phase_shows_typed_text() {
        let mut s = session();
        s.handle_input(&InputEvent::TextInput('a'));
        let lines = terminal_lines(&s, 50);
        assert!(texts(&lines).contains(&"→ a▊"));
    }

    #[test]
    fn typing_run_has_cursor_on_last_line() {
        let mut s = session();
        s.submit_name("ada");
        s.tick(18 * 3);
        let lines = terminal_lines(&s, 50);
        assert_eq!(lines.last().unwrap().text, "goo▊");
    }

    #[test]
    fn shell_prompt_after_greeting() {
        let mut s = session();
        s.submit_name("ada");
        s.tick(60_000);
        let lines = terminal_lines(&s, 50);
        assert_eq!(lines.last().unwrap().text, "ada@portfolio $ ▊");
        assert!(texts(&lines).contains(&"good morning, ada..."));
    }

    #[test]
    fn long_history_keeps_tail() {
        let mut s = session();
        s.submit_name("ada");
        s.tick(60_000);
        for _ in 0..30 {
            s.submit_command("nope");
        }
        let lines = terminal_lines(&s, 10);
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0].text, "terminal :: portfolio");
        assert_eq!(lines.last().unwrap().text, "ada@portfolio $ ▊");
    }

    #[test]
    fn fade_steps() {
        assert_eq!(fade_color(1.0), Some(None));
        assert_eq!(fade_color(0.5), Some(Some(Color::Grey)));
        assert_eq!(fade_color(0.1), Some(Some(Color::DarkGrey)));
        assert_eq!(fade_color(0.0), None);
    }

    #[test]
    fn footer_greets_valid_name() {
        let mut store = MemoryStore::new();
        store.set(VISITOR_NAME_KEY, "grace").unwrap();
        let lines = footer_lines(&store);
        assert_eq!(lines[0], "~/Gundrum.dev © 2026");
        assert!(lines.contains(&"thanks for stopping by, grace.".to_string()));
    }

    #[test]
    fn footer_skips_default_name() {
        let mut store = MemoryStore::new();
        store.set(VISITOR_NAME_KEY, "visitor").unwrap();
        let lines = footer_lines(&store);
        assert!(!lines.iter().any(|l| l.contains("thanks")));
    }

    #[test]
    fn page_title_from_path() {
        let store = MemoryStore::new();
        assert_eq!(page_lines("/devhub", &store)[0], "Dev Hub  (/devhub)");
        assert_eq!(page_lines("/nowhere", &store)[0], "Not Found  (/nowhere)");
    }
}
