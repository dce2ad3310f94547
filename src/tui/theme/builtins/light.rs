use crate::tui::theme::{Theme, ThemeDefinition};
use ratatui::style::{Color, Modifier, Style};

pub const NAME: &str = "light";

pub const LIGHT: Theme = Theme {
    progress_fill: Style::new().fg(Color::Rgb(15, 23, 42)),
    progress_track: Style::new().fg(Color::Rgb(203, 213, 225)),
    title: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .add_modifier(Modifier::BOLD),
    body: Style::new().fg(Color::Rgb(51, 65, 85)),
    placeholder: Style::new()
        .fg(Color::Rgb(100, 100, 100))
        .add_modifier(Modifier::ITALIC),
    hint: Style::new().fg(Color::Rgb(120, 120, 0)),
    border: Style::new().fg(Color::Rgb(200, 200, 200)),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, LIGHT);
