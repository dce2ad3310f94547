//! Turns raw mouse events into the two gestures the showcase understands.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Rows a press must travel downwards to count as a swipe down.
pub const SWIPE_DOWN_ROWS: u16 = 3;

/// Largest movement, in cells, a press may make and still count as a tap.
const TAP_SLOP: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap { column: u16, row: u16 },
    SwipeDown,
}

/// Tracks the left button between press and release.
#[derive(Debug, Default, Clone)]
pub struct GestureTracker {
    pressed: Option<(u16, u16)>,
}

impl GestureTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: MouseEvent) -> Option<Gesture> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed = Some((event.column, event.row));
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let (_, row) = self.pressed?;
                if event.row >= row.saturating_add(SWIPE_DOWN_ROWS) {
                    // Recognised mid-drag; the release that follows is noise.
                    self.pressed = None;
                    return Some(Gesture::SwipeDown);
                }
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (column, row) = self.pressed.take()?;
                if event.row >= row.saturating_add(SWIPE_DOWN_ROWS) {
                    Some(Gesture::SwipeDown)
                } else if column.abs_diff(event.column) <= TAP_SLOP
                    && row.abs_diff(event.row) <= TAP_SLOP
                {
                    Some(Gesture::Tap { column, row })
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Forget a press in progress, e.g. when the screen changes under it.
    pub fn reset(&mut self) {
        self.pressed = None;
    }
}

#[cfg(test)]
mod tests {
    use ratatui::crossterm::event::KeyModifiers;

    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn press_and_release_in_place_is_a_tap() {
        let mut tracker = GestureTracker::new();
        assert_eq!(
            tracker.handle(mouse(MouseEventKind::Down(MouseButton::Left), 12, 5)),
            None
        );
        assert_eq!(
            tracker.handle(mouse(MouseEventKind::Up(MouseButton::Left), 13, 5)),
            Some(Gesture::Tap { column: 12, row: 5 })
        );
    }

    #[test]
    fn dragging_down_is_recognised_before_release() {
        let mut tracker = GestureTracker::new();
        tracker.handle(mouse(MouseEventKind::Down(MouseButton::Left), 10, 2));
        assert_eq!(
            tracker.handle(mouse(MouseEventKind::Drag(MouseButton::Left), 10, 3)),
            None
        );
        assert_eq!(
            tracker.handle(mouse(MouseEventKind::Drag(MouseButton::Left), 11, 5)),
            Some(Gesture::SwipeDown)
        );
        assert_eq!(
            tracker.handle(mouse(MouseEventKind::Up(MouseButton::Left), 11, 6)),
            None
        );
    }

    #[test]
    fn sideways_drag_is_neither_tap_nor_swipe() {
        let mut tracker = GestureTracker::new();
        tracker.handle(mouse(MouseEventKind::Down(MouseButton::Left), 10, 2));
        assert_eq!(
            tracker.handle(mouse(MouseEventKind::Up(MouseButton::Left), 30, 2)),
            None
        );
    }

    #[test]
    fn upward_drag_is_ignored() {
        let mut tracker = GestureTracker::new();
        tracker.handle(mouse(MouseEventKind::Down(MouseButton::Left), 10, 9));
        assert_eq!(
            tracker.handle(mouse(MouseEventKind::Up(MouseButton::Left), 10, 2)),
            None
        );
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = GestureTracker::new();
        assert_eq!(
            tracker.handle(mouse(MouseEventKind::Up(MouseButton::Left), 1, 1)),
            None
        );
        assert_eq!(
            tracker.handle(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)),
            None
        );
    }
}
