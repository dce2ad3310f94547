use ratatui::style::{Color, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Filled part of a progress indicator.
    pub progress_fill: Style,
    /// Unfilled part of a progress indicator.
    pub progress_track: Style,
    pub title: Style,
    pub body: Style,
    pub placeholder: Style,
    pub hint: Style,
    pub border: Style,
}

impl Theme {
    #[must_use]
    pub fn progress_fill_style(&self) -> Style {
        self.progress_fill
    }

    #[must_use]
    pub fn progress_track_style(&self) -> Style {
        self.progress_track
    }

    #[must_use]
    pub fn title_style(&self) -> Style {
        self.title
    }

    #[must_use]
    pub fn body_style(&self) -> Style {
        self.body
    }

    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        self.placeholder
    }

    #[must_use]
    pub fn hint_style(&self) -> Style {
        self.hint
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        self.border
    }

    #[must_use]
    pub fn accent(&self) -> Color {
        self.progress_fill.fg.unwrap_or(Color::Reset)
    }
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
    pub name: &'static str,
    pub theme: Theme,
    pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
    pub const fn new(name: &'static str, theme: Theme) -> Self {
        Self {
            name,
            theme,
            aliases: &[],
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Whether `name` (already normalised) refers to this theme.
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.aliases.contains(&name)
    }
}
