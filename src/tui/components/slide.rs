use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Clear, Paragraph},
};
use reel_core::SlideContent;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::theme::Theme;

const ELLIPSIS: char = '…';

/// Everything needed to draw one full-bleed slide card.
#[derive(Debug, Clone, Copy)]
pub struct SlideFrame<'a> {
    pub title: &'a str,
    pub content: &'a SlideContent,
    /// Zero-based position of the slide in the carousel.
    pub position: usize,
    pub total: usize,
}

pub fn render_slide(frame: &mut Frame, area: Rect, slide: SlideFrame<'_>, theme: &Theme) {
    let block = Block::bordered()
        .border_style(theme.border_style())
        .title(Line::styled(
            format!(" {} ", truncate_to_width(slide.title, area.width.saturating_sub(4).into())),
            theme.title_style(),
        ))
        .title_bottom(
            Line::styled(
                format!(" {}/{} ", slide.position + 1, slide.total),
                theme.hint_style(),
            )
            .right_aligned(),
        );
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let lines = slide_lines(slide.content, inner.width.into(), theme);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let mut body = inner;
    if inner.height > height {
        let pad = (inner.height - height) / 2;
        body.y += pad;
        body.height -= pad;
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
}

fn slide_lines(content: &SlideContent, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    match content {
        SlideContent::Image { name, path, bytes } => vec![
            Line::styled(truncate_to_width(name, width), theme.title_style()),
            Line::default(),
            Line::styled(
                truncate_to_width(&path.display().to_string(), width),
                theme.body_style(),
            ),
            Line::styled(format_size(*bytes), theme.hint_style()),
        ],
        SlideContent::Placeholder { name } => vec![
            Line::styled("image unavailable", theme.placeholder_style()),
            Line::styled(truncate_to_width(name, width), theme.body_style()),
        ],
    }
}

/// Shorten `text` to at most `width` terminal columns, marking the cut.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KiB", "MiB", "GiB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}
