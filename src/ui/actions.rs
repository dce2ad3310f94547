use std::time::Instant;

use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use reel_core::Outcome;

use super::gesture::Gesture;
use super::outcome::ShowcaseReport;
use super::state::{App, Screen};

impl App {
    pub(crate) fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<Option<ShowcaseReport>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit(now);
            return Ok(self.take_report_if_finished());
        }

        match self.screen {
            Screen::Landing => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.open_carousel(now)?,
                KeyCode::Esc | KeyCode::Char('q' | 'j') | KeyCode::Down => self.quit(now),
                _ => {}
            },
            Screen::Carousel => {
                let Some(carousel) = self.carousel.as_mut() else {
                    return Ok(None);
                };
                let outcome = match key.code {
                    KeyCode::Left | KeyCode::Char('h') => carousel.tap_left(now),
                    KeyCode::Right | KeyCode::Char('l') => carousel.tap_right(now),
                    KeyCode::Esc | KeyCode::Char('q' | 'j') | KeyCode::Down => {
                        carousel.swipe_down(now)
                    }
                    _ => return Ok(None),
                };
                log_outcome(outcome);
                self.pump_presenter(now);
            }
        }
        Ok(self.take_report_if_finished())
    }

    pub(crate) fn handle_mouse(
        &mut self,
        event: MouseEvent,
        now: Instant,
    ) -> Result<Option<ShowcaseReport>> {
        let Some(gesture) = self.gestures.handle(event) else {
            return Ok(None);
        };
        match (self.screen, gesture) {
            (Screen::Landing, Gesture::Tap { .. }) => self.open_carousel(now)?,
            (Screen::Landing, Gesture::SwipeDown) => self.quit(now),
            (Screen::Carousel, gesture) => {
                let area = self.carousel_area;
                let Some(carousel) = self.carousel.as_mut() else {
                    return Ok(None);
                };
                let outcome = match gesture {
                    Gesture::Tap { column, .. } => {
                        let x = f64::from(column.saturating_sub(area.x));
                        carousel.tap_at(x, f64::from(area.width.max(1)), now)
                    }
                    Gesture::SwipeDown => carousel.swipe_down(now),
                };
                log_outcome(outcome);
                self.pump_presenter(now);
            }
        }
        Ok(self.take_report_if_finished())
    }
}

fn log_outcome(outcome: Outcome) {
    match outcome {
        Outcome::Ignored(reason) => tracing::trace!(?reason, "input ignored"),
        other => tracing::debug!(?other, "input handled"),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::crossterm::event::{KeyEventKind, KeyEventState, MouseButton, MouseEventKind};
    use ratatui::layout::Rect;
    use reel_core::{DismissReason, PageHost};

    use super::*;
    use crate::ui::config::{ShowcaseConfig, SlideSpec};

    fn app(direct: bool) -> App {
        let mut config = ShowcaseConfig::new(SlideSpec::showcase(), "does-not-exist");
        config.carousel.interval = Duration::from_secs(5);
        config.direct = direct;
        App::new(config).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn click(app: &mut App, column: u16, now: Instant) -> Option<ShowcaseReport> {
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), column, 5), now)
            .unwrap();
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), column, 5), now)
            .unwrap()
    }

    fn current(app: &App) -> usize {
        app.carousel().unwrap().current_index()
    }

    #[test]
    fn enter_opens_and_arrows_navigate() {
        let now = Instant::now();
        let mut app = app(false);
        assert!(app.handle_key(key(KeyCode::Enter), now).unwrap().is_none());
        assert_eq!(app.screen(), Screen::Carousel);

        app.handle_key(key(KeyCode::Right), now).unwrap();
        app.handle_key(key(KeyCode::Char('l')), now).unwrap();
        assert_eq!(current(&app), 2);

        app.handle_key(key(KeyCode::Left), now).unwrap();
        assert_eq!(current(&app), 1);
    }

    #[test]
    fn clicks_route_through_slide_tap_zones() {
        let now = Instant::now();
        let mut app = app(false);
        app.open_carousel(now).unwrap();
        app.carousel_area = Rect::new(10, 0, 40, 20);

        click(&mut app, 45, now);
        assert_eq!(current(&app), 1);

        click(&mut app, 12, now);
        assert_eq!(current(&app), 0);

        // Left of slide zero wraps to the last slide.
        click(&mut app, 29, now);
        assert_eq!(current(&app), 3);
    }

    #[test]
    fn swipe_down_closes_the_carousel_then_quits() {
        let now = Instant::now();
        let mut app = app(false);
        app.open_carousel(now).unwrap();

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 2), now)
            .unwrap();
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 6), now)
            .unwrap();
        assert_eq!(app.screen(), Screen::Landing);
        assert_eq!(
            app.report().last().map(|session| session.reason),
            Some(DismissReason::SwipedDown)
        );

        let report = app.handle_key(key(KeyCode::Char('q')), now).unwrap();
        assert_eq!(report.map(|report| report.sessions.len()), Some(1));
    }

    #[test]
    fn direct_mode_returns_report_when_dismissed() {
        let now = Instant::now();
        let mut app = app(true);
        app.open_carousel(now).unwrap();

        let report = app.handle_key(key(KeyCode::Esc), now).unwrap();
        let report = report.expect("direct session ends the showcase");
        assert_eq!(report.sessions[0].last_title, "Homelander");
    }

    #[test]
    fn sideways_scroll_neither_pages_nor_restarts_the_timer() {
        let start = Instant::now();
        let mut app = app(false);
        app.open_carousel(start).unwrap();

        let later = start + Duration::from_secs(3);
        for kind in [MouseEventKind::ScrollRight, MouseEventKind::ScrollLeft] {
            let report = app.handle_mouse(mouse(kind, 5, 5), later).unwrap();
            assert!(report.is_none());
        }
        let carousel = app.carousel().unwrap();
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.host().front_most(), Some(0));

        let deadline = start + app.config().carousel.interval;
        app.tick(deadline);
        assert_eq!(current(&app), 1);
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let now = Instant::now();
        let mut app = app(false);
        app.open_carousel(now).unwrap();

        let mut event = key(KeyCode::Char('c'));
        event.modifiers = KeyModifiers::CONTROL;
        let report = app.handle_key(event, now).unwrap().expect("quits");
        assert_eq!(report.sessions.len(), 1);
    }
}
