use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, ensure};
use ratatui::layout::Rect;
use reel_core::{
    AssetDirResolver, Carousel, CarouselItem, ContentResolver, ImageItem, Presentation, Transition,
};

use super::config::ShowcaseConfig;
use super::gesture::GestureTracker;
use super::host::TerminalPageHost;
use super::outcome::{SessionSummary, ShowcaseReport};
use super::presenter::{PresenterSignal, ScreenPresenter};
use crate::tui::theme::Theme;

/// How long presenting the carousel takes on screen.
pub const COVER_DURATION: Duration = Duration::from_millis(300);

pub(crate) type TerminalCarousel = Carousel<TerminalPageHost, ScreenPresenter>;

/// Which screen currently owns the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Carousel,
}

/// Presentation animation in flight.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CoverAnimation {
    pub(crate) transition: Transition,
    pub(crate) started: Instant,
}

impl CoverAnimation {
    /// Fraction of the animation still to run, in `[0.0, 1.0]`.
    pub(crate) fn remaining(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started).as_secs_f64();
        (1.0 - elapsed / COVER_DURATION.as_secs_f64()).clamp(0.0, 1.0)
    }
}

/// Application state for the terminal showcase.
pub struct App {
    config: ShowcaseConfig,
    pub(crate) theme: Theme,
    pub(crate) screen: Screen,
    pub(crate) carousel: Option<TerminalCarousel>,
    pub(crate) presentation: Presentation,
    pub(crate) cover: Option<CoverAnimation>,
    pub(crate) gestures: GestureTracker,
    /// Area the carousel was last drawn into; taps are measured against it.
    pub(crate) carousel_area: Rect,
    signals_tx: Sender<PresenterSignal>,
    signals_rx: Receiver<PresenterSignal>,
    report: ShowcaseReport,
    finished: bool,
}

impl App {
    pub fn new(config: ShowcaseConfig) -> Result<Self> {
        ensure!(!config.slides.is_empty(), "the showcase needs at least one slide");
        let (signals_tx, signals_rx) = mpsc::channel();
        Ok(Self {
            theme: config.theme,
            config,
            screen: Screen::Landing,
            carousel: None,
            presentation: Presentation::default(),
            cover: None,
            gestures: GestureTracker::new(),
            carousel_area: Rect::default(),
            signals_tx,
            signals_rx,
            report: ShowcaseReport::default(),
            finished: false,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn carousel(&self) -> Option<&Carousel<TerminalPageHost, ScreenPresenter>> {
        self.carousel.as_ref()
    }

    #[must_use]
    pub fn report(&self) -> &ShowcaseReport {
        &self.report
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Build a fresh carousel over the configured slides and present it.
    pub fn open_carousel(&mut self, now: Instant) -> Result<()> {
        if self.carousel.is_some() {
            return Ok(());
        }
        let resolver: Arc<dyn ContentResolver> =
            Arc::new(AssetDirResolver::new(self.config.assets_dir.clone()));
        let items: Vec<Box<dyn CarouselItem>> = self
            .config
            .slides
            .iter()
            .map(|slide| {
                Box::new(ImageItem::new(
                    slide.title.clone(),
                    slide.image.clone(),
                    Arc::clone(&resolver),
                )) as Box<dyn CarouselItem>
            })
            .collect();
        let presenter = ScreenPresenter::new(self.signals_tx.clone());
        let mut carousel = Carousel::new(
            items,
            TerminalPageHost::new(),
            presenter,
            self.config.carousel,
        )
        .context("failed to build the carousel")?;

        carousel.present(now);
        self.carousel = Some(carousel);
        self.gestures.reset();
        self.pump_presenter(now);
        Ok(())
    }

    /// Advance timers and animations to `now`.
    pub fn tick(&mut self, now: Instant) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.tick(now);
            carousel.host_mut().advance(now);
        }
        self.pump_presenter(now);
        if let Some(cover) = self.cover
            && cover.remaining(now) <= 0.0
        {
            self.cover = None;
        }
    }

    /// Leave the showcase, ending a running session first.
    pub fn quit(&mut self, now: Instant) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.swipe_down(now);
        }
        self.pump_presenter(now);
        self.finished = true;
    }

    /// Hand over the report once the showcase is done.
    pub(crate) fn take_report_if_finished(&mut self) -> Option<ShowcaseReport> {
        self.finished.then(|| std::mem::take(&mut self.report))
    }

    /// Apply the requests the carousel made of the screen stack.
    pub(crate) fn pump_presenter(&mut self, now: Instant) {
        while let Ok(signal) = self.signals_rx.try_recv() {
            match signal {
                PresenterSignal::Presented(presentation) => {
                    self.screen = Screen::Carousel;
                    self.presentation = presentation;
                    self.cover = Some(CoverAnimation {
                        transition: presentation.transition,
                        started: now,
                    });
                }
                PresenterSignal::Dismissed => self.close_carousel(),
            }
        }
    }

    fn close_carousel(&mut self) {
        let Some(carousel) = self.carousel.take() else {
            return;
        };
        if let Some(reason) = carousel.dismiss_reason() {
            self.report.sessions.push(SessionSummary {
                reason,
                last_index: carousel.current_index(),
                last_title: carousel.current_title().to_string(),
                slides: carousel.len(),
            });
        }
        self.screen = Screen::Landing;
        self.cover = None;
        self.gestures.reset();
        if self.config.direct {
            self.finished = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use reel_core::{DismissReason, PageHost, SessionPhase};

    use super::*;
    use crate::ui::config::SlideSpec;

    fn config(direct: bool) -> ShowcaseConfig {
        let mut config = ShowcaseConfig::new(SlideSpec::showcase(), "does-not-exist");
        config.carousel.interval = Duration::from_secs(5);
        config.direct = direct;
        config
    }

    #[test]
    fn rejects_empty_slide_list() {
        let config = ShowcaseConfig::new(Vec::new(), ".");
        assert!(App::new(config).is_err());
    }

    #[test]
    fn opening_with_an_oversized_interval_fails_without_a_session() {
        let mut config = config(true);
        config.carousel.interval = Duration::from_secs(u64::MAX);
        let mut app = App::new(config).unwrap();

        let err = app.open_carousel(Instant::now()).unwrap_err();
        assert!(format!("{err:#}").contains("must not exceed"));
        assert!(app.carousel().is_none());
        assert_eq!(app.screen(), Screen::Landing);
    }

    #[test]
    fn opening_presents_the_carousel_full_screen() {
        let now = Instant::now();
        let mut app = App::new(config(false)).unwrap();
        app.open_carousel(now).unwrap();

        assert_eq!(app.screen(), Screen::Carousel);
        assert!(app.presentation.full_screen);
        assert_eq!(app.presentation.transition, Transition::CoverVertical);
        let carousel = app.carousel().unwrap();
        assert_eq!(carousel.phase(), SessionPhase::Active);
        assert_eq!(carousel.host().front_most(), Some(0));
    }

    #[test]
    fn timer_wrap_returns_to_landing_and_records_session() {
        let start = Instant::now();
        let mut app = App::new(config(false)).unwrap();
        app.open_carousel(start).unwrap();

        for step in 1..=4 {
            app.tick(start + Duration::from_secs(5 * step));
        }

        assert_eq!(app.screen(), Screen::Landing);
        assert!(app.carousel().is_none());
        assert!(!app.is_finished());
        let session = app.report().last().unwrap();
        assert_eq!(session.reason, DismissReason::Completed);
        assert_eq!(session.last_index, 3);
        assert_eq!(session.last_title, "A-Train");
    }

    #[test]
    fn direct_mode_finishes_after_one_session() {
        let now = Instant::now();
        let mut app = App::new(config(true)).unwrap();
        app.open_carousel(now).unwrap();
        app.carousel.as_mut().unwrap().swipe_down(now);
        app.pump_presenter(now);

        assert!(app.is_finished());
        let report = app.take_report_if_finished().unwrap();
        assert_eq!(report.sessions.len(), 1);
        assert_eq!(report.sessions[0].reason, DismissReason::SwipedDown);
    }

    #[test]
    fn quitting_mid_session_records_it() {
        let now = Instant::now();
        let mut app = App::new(config(false)).unwrap();
        app.open_carousel(now).unwrap();
        app.quit(now);

        assert!(app.is_finished());
        assert_eq!(app.report().sessions.len(), 1);
        assert_eq!(app.report().sessions[0].last_index, 0);
    }

    #[test]
    fn cover_animation_expires() {
        let now = Instant::now();
        let mut app = App::new(config(false)).unwrap();
        app.open_carousel(now).unwrap();
        assert!(app.cover.is_some());

        app.tick(now + COVER_DURATION);
        assert!(app.cover.is_none());
    }
}
