//! Theme struct: id, label, and the widget palette.

use std::collections::HashMap;

use console::Style;

/// A named visual variant.
///
/// A theme carries its canonical short id, the display label shown in the
/// selector, and a palette of named [`Style`]s used to draw the widget
/// itself. Builtin themes all define the same palette names.
///
/// # Example
///
/// ```rust
/// use tintbar::Theme;
/// use console::Style;
///
/// let theme = Theme::new("ocean", "Ocean")
///     .add("selected", Style::new().cyan().bold())
///     .add("option", Style::new().blue());
///
/// assert_eq!(theme.id(), "ocean");
/// assert_eq!(theme.label(), "Ocean");
/// assert!(theme.style("selected").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Theme {
    id: String,
    label: String,
    palette: HashMap<String, Style>,
}

impl Theme {
    /// Creates a theme with an empty palette.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            palette: HashMap::new(),
        }
    }

    /// Adds a named style, returning an updated theme for chaining.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.palette.insert(name.to_string(), style);
        self
    }

    /// The canonical identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display text shown in the selector.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Looks up a palette style by name.
    pub fn style(&self, name: &str) -> Option<&Style> {
        self.palette.get(name)
    }

    pub(crate) fn palette(&self) -> &HashMap<String, Style> {
        &self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_new_empty_palette() {
        let theme = Theme::new("dark", "Dark");
        assert_eq!(theme.id(), "dark");
        assert_eq!(theme.label(), "Dark");
        assert!(theme.style("selected").is_none());
    }

    #[test]
    fn test_theme_add_chains() {
        let theme = Theme::new("mint", "Mint")
            .add("option", Style::new().green())
            .add("selected", Style::new().green().bold());

        assert!(theme.style("option").is_some());
        assert!(theme.style("selected").is_some());
    }

    #[test]
    fn test_theme_add_overwrites() {
        let theme = Theme::new("mono", "Mono")
            .add("option", Style::new().dim())
            .add("option", Style::new().bold());

        assert_eq!(theme.palette().len(), 1);
    }
}
