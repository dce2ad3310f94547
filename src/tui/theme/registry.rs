use super::builtins::BUILT_IN_DEFINITIONS;
use super::types::{Theme, ThemeDefinition};

fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Every bundled theme, default first.
#[must_use]
pub fn definitions() -> &'static [ThemeDefinition] {
    BUILT_IN_DEFINITIONS
}

/// Canonical names of the bundled themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
    definitions()
        .iter()
        .map(|definition| definition.name)
        .collect()
}

/// Look a theme up by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    let normalized = normalize_name(name);
    BUILT_IN_DEFINITIONS
        .iter()
        .find(|definition| definition.matches(&normalized))
        .map(|definition| definition.theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::builtins::{LIGHT, SLATE};

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert_eq!(by_name(" Light "), Some(LIGHT));
    }

    #[test]
    fn aliases_resolve_to_their_theme() {
        assert_eq!(by_name("default"), Some(SLATE));
        assert_eq!(by_name("dark"), Some(SLATE));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(by_name("neon"), None);
    }

    #[test]
    fn default_theme_is_listed_first() {
        assert_eq!(names().first(), Some(&"slate"));
        assert_eq!(Theme::default(), SLATE);
    }

    #[test]
    fn definitions_carry_aliases_for_listing() {
        let slate = &definitions()[0];
        assert_eq!(slate.name, "slate");
        assert!(slate.aliases.contains(&"dark"));
        assert_eq!(
            definitions().iter().map(|definition| definition.name).collect::<Vec<_>>(),
            names()
        );
    }
}
