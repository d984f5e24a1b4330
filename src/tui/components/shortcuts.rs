//! Declarative builder for TUI shortcuts

use super::Shortcut;

/// Builder for creating shortcut lists with common patterns
#[derive(Default)]
pub struct ShortcutsBuilder {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add j/k, g/G for row navigation
    pub fn with_navigation(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("j/k", "Up/Down"));
        self.shortcuts.push(Shortcut::new("g/G", "Top/Bottom"));
        self
    }

    /// Add / for search
    pub fn with_search(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("/", "Search"));
        self
    }

    /// Add Tab/S-Tab and 1-9 for status filters
    pub fn with_filters(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("Tab", "Next Filter"));
        self.shortcuts.push(Shortcut::new("1-9", "Filter"));
        self
    }

    /// Add q / Ctrl+q for quit
    pub fn with_quit(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("q", "Quit"));
        self
    }

    /// Add a single custom shortcut
    pub fn add(mut self, key: &str, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(key, description));
        self
    }

    /// Build the shortcuts vector
    pub fn build(self) -> Vec<Shortcut> {
        self.shortcuts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_shortcuts() {
        let shortcuts = ShortcutsBuilder::new().with_navigation().build();

        assert_eq!(shortcuts.len(), 2);
        assert!(shortcuts.iter().any(|s| s.key == "j/k"));
        assert!(shortcuts.iter().any(|s| s.key == "g/G"));
    }

    #[test]
    fn test_empty_shortcuts() {
        assert!(ShortcutsBuilder::new().build().is_empty());
    }
}
