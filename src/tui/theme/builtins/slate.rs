use crate::tui::theme::{Theme, ThemeDefinition};
use ratatui::style::{Color, Modifier, Style};

pub const NAME: &str = "slate";

pub const SLATE: Theme = Theme {
    progress_fill: Style::new().fg(Color::Rgb(241, 245, 249)),
    progress_track: Style::new().fg(Color::Rgb(71, 85, 105)),
    title: Style::new()
        .fg(Color::Rgb(248, 250, 252))
        .add_modifier(Modifier::BOLD),
    body: Style::new().fg(Color::Rgb(203, 213, 225)),
    placeholder: Style::new()
        .fg(Color::Rgb(100, 116, 139))
        .add_modifier(Modifier::ITALIC),
    hint: Style::new().fg(Color::Rgb(100, 116, 139)),
    border: Style::new().fg(Color::Rgb(51, 65, 85)),
};

pub const DEFINITION: ThemeDefinition =
    ThemeDefinition::new(NAME, SLATE).with_aliases(&["default", "dark"]);
