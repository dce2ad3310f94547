use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::theme::Theme;

/// Columns left empty between neighbouring indicators.
pub const SEGMENT_GAP: u16 = 1;

const BAR_GLYPH: &str = "━";

/// Split `area` into `count` equal-width indicator segments.
#[must_use]
pub fn segment_areas(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    Layout::horizontal((0..count).map(|_| Constraint::Fill(1)))
        .spacing(SEGMENT_GAP)
        .split(area)
        .to_vec()
}

/// Number of cells of a `width`-wide segment covered by `value`.
#[must_use]
pub fn filled_cells(value: f64, width: u16) -> u16 {
    (value.clamp(0.0, 1.0) * f64::from(width)).round() as u16
}

/// Render one indicator per value, laid out left to right across `area`.
pub fn render_progress_bank(frame: &mut Frame, area: Rect, values: &[f64], theme: &Theme) {
    for (value, segment) in values.iter().zip(segment_areas(area, values.len())) {
        if segment.width == 0 {
            continue;
        }
        let filled = filled_cells(*value, segment.width);
        let line = Line::from(vec![
            Span::styled(
                BAR_GLYPH.repeat(usize::from(filled)),
                theme.progress_fill_style(),
            ),
            Span::styled(
                BAR_GLYPH.repeat(usize::from(segment.width - filled)),
                theme.progress_track_style(),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), segment);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    #[test]
    fn filled_cells_rounds_and_clamps() {
        assert_eq!(filled_cells(0.0, 10), 0);
        assert_eq!(filled_cells(0.44, 10), 4);
        assert_eq!(filled_cells(0.45, 10), 5);
        assert_eq!(filled_cells(1.7, 10), 10);
        assert_eq!(filled_cells(-1.0, 10), 0);
    }

    #[test]
    fn segments_share_the_row_equally() {
        let segments = segment_areas(Rect::new(0, 0, 11, 1), 3);
        let widths: Vec<u16> = segments.iter().map(|segment| segment.width).collect();
        assert_eq!(widths, vec![3, 3, 3]);
        assert_eq!(segments[1].x, 4);
        assert!(segment_areas(Rect::new(0, 0, 11, 1), 0).is_empty());
    }

    #[test]
    fn bank_colours_filled_and_pending_cells() {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(11, 1)).unwrap();
        terminal
            .draw(|frame| render_progress_bank(frame, frame.area(), &[1.0, 0.5, 0.0], &theme))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let fill = theme.progress_fill.fg.unwrap();
        let track = theme.progress_track.fg.unwrap();

        assert_eq!(buffer[(0, 0)].fg, fill);
        assert_eq!(buffer[(2, 0)].fg, fill);
        assert_eq!(buffer[(3, 0)].symbol(), " ");
        assert_eq!(buffer[(4, 0)].fg, fill);
        assert_eq!(buffer[(5, 0)].fg, fill);
        assert_eq!(buffer[(6, 0)].fg, track);
        assert_eq!(buffer[(8, 0)].fg, track);
        assert_eq!(buffer[(10, 0)].fg, track);
        assert_eq!(buffer[(10, 0)].symbol(), BAR_GLYPH);
    }
}
