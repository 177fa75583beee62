use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_types::input::{Button, InputEvent};

/// Map a crossterm event to a terminal input event.
///
/// Key releases and repeats are dropped so each press counts once on every
/// platform.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(InputEvent::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char(c) => Some(InputEvent::TextInput(c)),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Enter => Some(InputEvent::ButtonPress(Button::Confirm)),
        KeyCode::Down => Some(InputEvent::ButtonPress(Button::Down)),
        KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}
