//! Keyboard shortcuts inside a text node.
//!
//! - ⌘/Ctrl+Enter submits the prompt
//! - Escape dismisses the command palette

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Submit,
    DismissPalette,
}

/// Resolves key events into shortcut actions.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"Enter"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        _shift: bool,
        _alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        let cmd = ctrl || meta;
        match key {
            "Enter" if cmd => Some(ShortcutAction::Submit),
            "Escape" => Some(ShortcutAction::DismissPalette),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_submit() {
        // Cmd+Enter
        assert_eq!(
            ShortcutMap::resolve("Enter", false, false, false, true),
            Some(ShortcutAction::Submit)
        );
        // Ctrl+Enter
        assert_eq!(
            ShortcutMap::resolve("Enter", true, false, false, false),
            Some(ShortcutAction::Submit)
        );
    }

    #[test]
    fn plain_enter_is_a_newline() {
        assert_eq!(ShortcutMap::resolve("Enter", false, false, false, false), None);
        assert_eq!(ShortcutMap::resolve("Enter", false, true, false, false), None);
    }

    #[test]
    fn resolve_escape() {
        assert_eq!(
            ShortcutMap::resolve("Escape", false, false, false, false),
            Some(ShortcutAction::DismissPalette)
        );
    }

    #[test]
    fn unbound_keys() {
        assert_eq!(ShortcutMap::resolve("a", false, false, false, false), None);
        assert_eq!(ShortcutMap::resolve("z", false, false, false, true), None);
    }
}
