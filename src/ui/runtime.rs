use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use ratatui::crossterm::execute;

use super::config::ShowcaseConfig;
use super::outcome::ShowcaseReport;
use super::state::App;

/// Construct an [`App`] for the provided configuration and run it to
/// completion.
pub fn run(config: ShowcaseConfig) -> Result<ShowcaseReport> {
    let mut app = App::new(config)?;
    app.run()
}

/// Puts the terminal back into cooked mode when dropped, so every exit path
/// out of [`App::run`] leaves the shell usable.
struct TerminalGuard {
    restore: fn(),
}

impl TerminalGuard {
    fn new(restore: fn()) -> Self {
        Self { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    if let Err(err) = execute!(stdout(), DisableMouseCapture) {
        tracing::warn!(%err, "failed to release mouse capture");
    }
    ratatui::restore();
}

impl App {
    /// Pump the terminal event loop until the user leaves the showcase.
    pub fn run(&mut self) -> Result<ShowcaseReport> {
        let mut terminal = ratatui::init();
        let guard = TerminalGuard::new(restore_terminal);
        execute!(stdout(), EnableMouseCapture)?;
        terminal.clear()?;
        tracing::info!(slides = self.config().slides.len(), "showcase started");

        if self.config().direct {
            self.open_carousel(Instant::now())?;
        }

        let (event_tx, event_rx) = mpsc::channel();
        let event_loop_running = Arc::new(AtomicBool::new(true));
        let event_loop_flag = Arc::clone(&event_loop_running);

        let event_thread = thread::spawn(move || -> Result<()> {
            while event_loop_flag.load(Ordering::Relaxed) {
                if event::poll(Duration::from_millis(50))? {
                    let event = event::read()?;
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(())
        });

        let mut pending_events = VecDeque::new();

        let result: Result<ShowcaseReport> = 'event_loop: loop {
            let now = Instant::now();
            self.tick(now);
            if let Some(report) = self.take_report_if_finished() {
                break Ok(report);
            }

            loop {
                match event_rx.try_recv() {
                    Ok(Event::Resize(_, _)) => {}
                    Ok(event) => pending_events.push_back(event),
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        break 'event_loop Err(anyhow!("input event channel disconnected"));
                    }
                }
            }

            if let Err(err) = terminal.draw(|frame| self.draw(frame, now)) {
                break Err(err.into());
            }

            let mut maybe_report = None;
            while let Some(event) = pending_events.pop_front() {
                let handled = match event {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key, Instant::now())
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse, Instant::now()),
                    _ => Ok(None),
                };
                match handled {
                    Ok(Some(report)) => {
                        maybe_report = Some(Ok(report));
                        break;
                    }
                    Ok(None) => {}
                    Err(err) => {
                        maybe_report = Some(Err(err));
                        break;
                    }
                }
            }

            if let Some(report) = maybe_report {
                break report;
            }

            thread::sleep(Duration::from_millis(16));
        };

        drop(guard);

        event_loop_running.store(false, Ordering::Relaxed);
        match event_thread.join() {
            Ok(join_result) => join_result?,
            Err(err) => std::panic::resume_unwind(err),
        }

        if let Ok(report) = &result {
            tracing::info!(sessions = report.sessions.len(), "showcase finished");
        }
        result
    }
}
