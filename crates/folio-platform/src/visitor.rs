//! The visitor name shared between the landing terminal and the site footer.

use crate::services::SessionStore;

/// Storage key the terminal writes and the footer reads.
pub const VISITOR_NAME_KEY: &str = "visitor-name";

/// Name used when the visitor submits a blank name field.
pub const DEFAULT_VISITOR_NAME: &str = "visitor";

/// Whether a stored name is fit to greet someone with.
///
/// Accepts names longer than one character made of letters, spaces, hyphens
/// and apostrophes, excluding the default name itself.
pub fn is_displayable_name(name: &str) -> bool {
    name.chars().count() > 1
        && name
            .chars()
            .all(|c| c.is_alphabetic() || c == ' ' || c == '-' || c == '\'')
        && name != DEFAULT_VISITOR_NAME
}

/// Read the stored visitor name, if present and displayable.
///
/// Storage failures and invalid content both read as "no name".
pub fn stored_visitor_name(store: &dyn SessionStore) -> Option<String> {
    match store.get(VISITOR_NAME_KEY) {
        Ok(Some(name)) if is_displayable_name(&name) => Some(name),
        Ok(_) => None,
        Err(e) => {
            log::debug!("visitor name unavailable: {e}");
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryStore, UnavailableStore};

    #[test]
    fn accepts_plain_names() {
        assert!(is_displayable_name("ada"));
        assert!(is_displayable_name("Mary Jane"));
        assert!(is_displayable_name("O'Brien"));
        assert!(is_displayable_name("Jean-Luc"));
        assert!(is_displayable_name("Zoë"));
    }

    #[test]
    fn rejects_single_char() {
        assert!(!is_displayable_name("a"));
        assert!(!is_displayable_name(""));
    }

    #[test]
    fn rejects_digits_and_symbols() {
        assert!(!is_displayable_name("r2d2"));
        assert!(!is_displayable_name("<script>"));
        assert!(!is_displayable_name("hi!"));
    }

    #[test]
    fn rejects_default_name() {
        assert!(!is_displayable_name("visitor"));
        // Only the exact default is hidden.
        assert!(is_displayable_name("Visitor"));
        assert!(is_displayable_name("VISITOR"));
    }

    #[test]
    fn stored_name_roundtrip() {
        let mut store = MemoryStore::new();
        store.set(VISITOR_NAME_KEY, "grace").unwrap();
        assert_eq!(stored_visitor_name(&store).as_deref(), Some("grace"));
    }

    #[test]
    fn stored_default_name_hidden() {
        let mut store = MemoryStore::new();
        store.set(VISITOR_NAME_KEY, DEFAULT_VISITOR_NAME).unwrap();
        assert_eq!(stored_visitor_name(&store), None);
    }

    #[test]
    fn absent_or_unavailable_is_none() {
        assert_eq!(stored_visitor_name(&MemoryStore::new()), None);
        assert_eq!(stored_visitor_name(&UnavailableStore), None);
    }
}
