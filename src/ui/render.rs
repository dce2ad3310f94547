use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};
use reel_core::{NavigationDirection, Transition};

use super::host::PageSnapshot;
use super::state::{App, Screen, TerminalCarousel};
use crate::tui::components::{SlideFrame, render_progress_bank, render_slide};
use crate::tui::theme::Theme;

const LANDING_HINT: &str = "enter watch  ·  q quit";
const CAROUSEL_HINT: &str = "←/h previous  ·  →/l next  ·  ↓/q close";

impl App {
    pub(crate) fn draw(&mut self, frame: &mut Frame, now: Instant) {
        let area = frame.area();
        match self.screen {
            Screen::Landing => self.render_landing(frame, area),
            Screen::Carousel => {
                // The landing screen stays underneath while the cover slides in.
                if self.cover.is_some() {
                    self.render_landing(frame, area);
                }
                self.render_carousel(frame, area, now);
            }
        }
    }

    fn render_landing(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_style(self.theme.border_style())
            .title(Line::styled(" reel ", self.theme.title_style()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let slides = &self.config().slides;
        let mut lines = vec![
            Line::styled(
                format!("{} stories ready", slides.len()),
                self.theme.title_style(),
            ),
            Line::default(),
        ];
        lines.extend(
            slides
                .iter()
                .map(|slide| Line::styled(slide.title.clone(), self.theme.body_style())),
        );
        if let Some(session) = self.report().last() {
            lines.push(Line::default());
            lines.push(Line::styled(
                format!(
                    "last session {} at {}",
                    session.reason.as_str(),
                    session.last_title
                ),
                self.theme.hint_style(),
            ));
        }

        let [body, hint] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);
        frame.render_widget(
            Paragraph::new(Line::styled(LANDING_HINT, self.theme.hint_style()))
                .alignment(Alignment::Center),
            hint,
        );
    }

    fn render_carousel(&mut self, frame: &mut Frame, area: Rect, now: Instant) {
        let Some(carousel) = self.carousel.as_ref() else {
            return;
        };
        let mut area = if self.presentation.full_screen {
            area
        } else {
            area.inner(Margin {
                vertical: 1,
                horizontal: 2,
            })
        };

        let cover = self.cover.map(|cover| (cover.transition, cover.remaining(now)));
        if let Some((Transition::CoverVertical, remaining)) = cover {
            let offset = (f64::from(area.height) * remaining).round() as u16;
            area.y += offset;
            area.height -= offset;
        }
        self.carousel_area = area;
        if area.height == 0 {
            return;
        }

        frame.render_widget(Clear, area);
        let [bank, page, hint] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        render_progress_bank(
            frame,
            bank.inner(Margin {
                vertical: 0,
                horizontal: 1,
            }),
            &carousel.progress().values(now),
            &self.theme,
        );
        render_pages(frame, page, carousel, now, &self.theme);
        frame.render_widget(
            Paragraph::new(hint_line(carousel, now, &self.theme)).alignment(Alignment::Center),
            hint,
        );

        if let Some((Transition::CrossDissolve, remaining)) = cover
            && remaining > 0.0
        {
            frame
                .buffer_mut()
                .set_style(area, ratatui::style::Style::default().add_modifier(Modifier::DIM));
        }
    }
}

fn render_pages(frame: &mut Frame, area: Rect, carousel: &TerminalCarousel, now: Instant, theme: &Theme) {
    let host = carousel.host();
    let Some(front) = host.front() else {
        return;
    };
    let total = carousel.len();

    let Some(transition) = host.transition(now) else {
        render_page(frame, area, front, total, theme);
        return;
    };

    // The incoming page pushes the outgoing one off screen.
    let incoming = (f64::from(area.width) * transition.progress).round() as u16;
    let incoming = incoming.min(area.width);
    let outgoing = area.width - incoming;
    let (first, second) = match transition.direction {
        NavigationDirection::Forward => (
            (transition.outgoing, outgoing),
            (front, incoming),
        ),
        NavigationDirection::Backward => (
            (front, incoming),
            (transition.outgoing, outgoing),
        ),
    };
    let [left, right] = Layout::horizontal([Constraint::Length(first.1), Constraint::Length(second.1)])
        .areas(area);
    if left.width > 0 {
        render_page(frame, left, first.0, total, theme);
    }
    if right.width > 0 {
        render_page(frame, right, second.0, total, theme);
    }
}

fn render_page(frame: &mut Frame, area: Rect, page: &PageSnapshot, total: usize, theme: &Theme) {
    let slide = SlideFrame {
        title: &page.title,
        content: &page.content,
        position: page.index,
        total,
    };
    render_slide(frame, area, slide, theme);
}

fn hint_line(carousel: &TerminalCarousel, now: Instant, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled(CAROUSEL_HINT, theme.hint_style())];
    if let Some(remaining) = carousel.remaining(now) {
        spans.push(Span::styled(
            format!("  ·  next in {}s", remaining.as_secs() + 1),
            theme.hint_style(),
        ));
    }
    Line::from(spans)
}
