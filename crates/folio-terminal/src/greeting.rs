//! Visitor name resolution and the time-of-day greeting.

use folio_platform::DEFAULT_VISITOR_NAME;

/// Hint typed under the greeting before the shell opens.
pub const HELP_HINT: &str = "type 'help' to look around, or press enter to continue.";

/// Trim the submitted name, falling back to the default for blank input.
pub fn resolve_visitor_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_VISITOR_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Greeting for the local `hour` (0-23).
pub fn greeting_for(hour: u8, name: &str) -> String {
    match hour {
        5..=11 => format!("good morning, {name}..."),
        12..=17 => format!("good afternoon, {name}..."),
        18..=21 => format!("good evening, {name}..."),
        _ => format!("still up, {name}?"),
    }
}

/// The full greeting block: greeting, blank line, hint.
pub fn greeting_lines(hour: u8, name: &str) -> Vec<String> {
    vec![
        greeting_for(hour, name),
        String::new(),
        HELP_HINT.to_string(),
    ]
}
