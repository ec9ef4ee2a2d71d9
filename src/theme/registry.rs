//! Ordered theme registry with id lookup and normalization.

use std::fmt;

use super::builtin::builtin_themes;
use super::theme::Theme;

/// Fixed fallback id; every degraded path lands on it.
pub const DEFAULT_THEME: &str = "dark";

/// Error returned when registry validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two themes share an id.
    DuplicateId { id: String },
    /// The fallback theme is not a member.
    MissingDefault,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateId { id } => {
                write!(f, "duplicate theme id '{}'", id)
            }
            RegistryError::MissingDefault => {
                write!(
                    f,
                    "registry has no '{}' theme to fall back to",
                    DEFAULT_THEME
                )
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Ordered collection of themes; insertion order is display order.
///
/// Ids are unique, and the [`DEFAULT_THEME`] fallback is always a member,
/// so [`ThemeRegistry::normalize`] can map any string to a valid id.
///
/// # Example
///
/// ```rust
/// use tintbar::{ThemeRegistry, DEFAULT_THEME};
///
/// let registry = ThemeRegistry::builtin();
/// assert_eq!(registry.len(), 10);
/// assert_eq!(registry.normalize("ocean"), "ocean");
/// assert_eq!(registry.normalize("no-such-theme"), DEFAULT_THEME);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
}

impl ThemeRegistry {
    /// The ten compiled-in themes.
    pub fn builtin() -> Self {
        Self {
            themes: builtin_themes(),
        }
    }

    /// Builds a registry from custom themes.
    ///
    /// # Errors
    ///
    /// Returns an error if two themes share an id, or if the
    /// [`DEFAULT_THEME`] fallback is missing.
    pub fn from_themes(themes: Vec<Theme>) -> Result<Self, RegistryError> {
        for (i, theme) in themes.iter().enumerate() {
            if themes[..i].iter().any(|t| t.id() == theme.id()) {
                return Err(RegistryError::DuplicateId {
                    id: theme.id().to_string(),
                });
            }
        }
        if !themes.iter().any(|t| t.id() == DEFAULT_THEME) {
            return Err(RegistryError::MissingDefault);
        }
        Ok(Self { themes })
    }

    /// Looks up a theme by id.
    pub fn get(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.id() == id)
    }

    /// Returns true if `id` names a member theme.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Maps unknown ids to [`DEFAULT_THEME`]; member ids pass through.
    pub fn normalize<'a>(&self, id: &'a str) -> &'a str {
        if self.contains(id) {
            id
        } else {
            DEFAULT_THEME
        }
    }

    /// Iterates members in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_contains_fallback_targets() {
        let registry = ThemeRegistry::builtin();
        assert!(registry.contains(DEFAULT_THEME));
        assert!(registry.contains("light"));
    }

    #[test]
    fn test_normalize_member_passes_through() {
        let registry = ThemeRegistry::builtin();
        for theme in registry.iter() {
            assert_eq!(registry.normalize(theme.id()), theme.id());
        }
    }

    #[test]
    fn test_normalize_unknown_and_empty() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(registry.normalize("neon"), DEFAULT_THEME);
        assert_eq!(registry.normalize(""), DEFAULT_THEME);
        assert_eq!(registry.normalize("Dark"), DEFAULT_THEME);
    }

    #[test]
    fn test_from_themes_rejects_duplicate_id() {
        let themes = vec![
            Theme::new("dark", "Dark"),
            Theme::new("dusk", "Dusk"),
            Theme::new("dusk", "Dusk Again"),
        ];
        let err = ThemeRegistry::from_themes(themes).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateId {
                id: "dusk".to_string()
            }
        );
        assert!(err.to_string().contains("dusk"));
    }

    #[test]
    fn test_from_themes_rejects_missing_default() {
        let themes = vec![Theme::new("dusk", "Dusk")];
        let err = ThemeRegistry::from_themes(themes).unwrap_err();
        assert_eq!(err, RegistryError::MissingDefault);
        assert!(err.to_string().contains(DEFAULT_THEME));
    }

    #[test]
    fn test_from_themes_accepts_valid_set() {
        let themes = vec![Theme::new("dark", "Dark"), Theme::new("dusk", "Dusk")];
        let registry = ThemeRegistry::from_themes(themes).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.normalize("dusk"), "dusk");
    }
}
