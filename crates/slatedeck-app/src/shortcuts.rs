//! Keyboard shortcut registry and documentation.

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Shift+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("S", true, false, "Save presentation"),
            Shortcut::new("Z", true, false, "Undo (current slide)"),
            Shortcut::new("Z", true, true, "Redo (current slide)"),
            Shortcut::new("Y", true, false, "Redo (current slide)"),
            Shortcut::new("Delete", false, false, "Delete selected element, or the slide"),
            Shortcut::new("Escape", false, false, "Clear selection / exit text edit"),
            Shortcut::new("Right", false, false, "Next slide (during playback)"),
            Shortcut::new("Left", false, false, "Previous slide (during playback)"),
        ]
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:16} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_includes_modifiers() {
        let s = Shortcut::new("Z", true, true, "Redo");
        assert_eq!(s.format(), "Ctrl+Shift+Z");
        let s = Shortcut::new("Escape", false, false, "Clear selection");
        assert_eq!(s.format(), "Escape");
    }

    #[test]
    fn test_registry_covers_save_and_history() {
        let all = ShortcutRegistry::all();
        assert!(all.iter().any(|s| s.key == "S" && s.ctrl));
        assert!(all.iter().any(|s| s.key == "Z" && s.ctrl && !s.shift));
        assert!(all.iter().any(|s| s.key == "Z" && s.ctrl && s.shift));
    }
}
