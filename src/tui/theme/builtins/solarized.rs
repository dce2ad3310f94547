use crate::tui::theme::{Theme, ThemeDefinition};
use ratatui::style::{Color, Modifier, Style};

pub const NAME: &str = "solarized";

pub const SOLARIZED: Theme = Theme {
    progress_fill: Style::new().fg(Color::Rgb(181, 137, 0)),
    progress_track: Style::new().fg(Color::Rgb(7, 54, 66)),
    title: Style::new()
        .fg(Color::Rgb(253, 246, 227))
        .add_modifier(Modifier::BOLD),
    body: Style::new().fg(Color::Rgb(147, 161, 161)),
    placeholder: Style::new()
        .fg(Color::Rgb(88, 110, 117))
        .add_modifier(Modifier::ITALIC),
    hint: Style::new().fg(Color::Rgb(38, 139, 210)),
    border: Style::new().fg(Color::Rgb(0, 43, 54)),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, SOLARIZED);
