//! Swipe and press recognition over crossterm mouse events.
//!
//! A gesture starts with a left-button press and ends with its release. While
//! the button is held, horizontal travel beyond the column threshold fires a
//! single swipe; vertical travel beyond the row threshold means the user is
//! not swiping horizontally and the drag is ignored. A release without a
//! swipe is reported as a press so the owner can resolve what was hit.

use crate::calendar::HorizontalDirection;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanOutcome {
    None,
    Swipe(HorizontalDirection),
    /// Button released without swiping; positions are `(column, row)`
    Press { origin: (u16, u16), release: (u16, u16) },
}

#[derive(Debug, Clone)]
pub struct PanResponder {
    threshold_columns: u16,
    threshold_rows: u16,
    origin: Option<(u16, u16)>,
    handled: bool,
}

impl PanResponder {
    pub fn new(threshold_columns: u16, threshold_rows: u16) -> Self {
        Self {
            threshold_columns,
            threshold_rows,
            origin: None,
            handled: false,
        }
    }

    fn reset(&mut self) {
        self.origin = None;
        self.handled = false;
    }

    pub fn handle(&mut self, mouse: &MouseEvent) -> PanOutcome {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.reset();
                self.origin = Some((mouse.column, mouse.row));
                PanOutcome::None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some((x0, y0)) = self.origin else {
                    return PanOutcome::None;
                };
                if self.handled {
                    return PanOutcome::None;
                }

                let dy = i32::from(mouse.row) - i32::from(y0);
                if dy.abs() > i32::from(self.threshold_rows) {
                    return PanOutcome::None;
                }

                let dx = i32::from(mouse.column) - i32::from(x0);
                let threshold = i32::from(self.threshold_columns);
                if dx < -threshold {
                    self.handled = true;
                    PanOutcome::Swipe(HorizontalDirection::Left)
                } else if dx > threshold {
                    self.handled = true;
                    PanOutcome::Swipe(HorizontalDirection::Right)
                } else {
                    PanOutcome::None
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (origin, swiped) = (self.origin, self.handled);
                self.reset();
                match origin {
                    Some(origin) if !swiped => PanOutcome::Press {
                        origin,
                        release: (mouse.column, mouse.row),
                    },
                    _ => PanOutcome::None,
                }
            }
            // Horizontal wheels and trackpads scroll opposite to the finger
            MouseEventKind::ScrollRight => PanOutcome::Swipe(HorizontalDirection::Left),
            MouseEventKind::ScrollLeft => PanOutcome::Swipe(HorizontalDirection::Right),
            _ => PanOutcome::None,
        }
    }
}

impl Default for PanResponder {
    fn default() -> Self {
        Self::new(
            crate::constants::DEFAULT_SWIPE_THRESHOLD_COLUMNS,
            crate::constants::DEFAULT_SWIPE_THRESHOLD_ROWS,
        )
    }
}
