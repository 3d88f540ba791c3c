//! Pointer and touch translation
//!
//! Mouse play: moving steers the paddle, clicking the overlay launches or
//! starts a new round. Touch play is drag-to-play: pressing launches or
//! resumes, dragging steers, lifting the finger pauses.

use crate::sim::{GamePhase, TickInput};

/// Raw input from the host, x already relative to the play area's left edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    MouseMove { x: f32 },
    /// Click/tap on the overlay
    Click,
    TouchStart { x: f32 },
    TouchMove { x: f32 },
    TouchEnd,
    TouchCancel,
    Resize { width: f32, height: f32 },
}

/// Accumulates events between two ticks
#[derive(Debug, Default)]
pub struct InputAdapter {
    pending: TickInput,
    resize: Option<(f32, f32)>,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the pending input. `phase` is the phase the
    /// overlay is currently showing.
    pub fn handle(&mut self, event: PointerEvent, phase: GamePhase) {
        match event {
            PointerEvent::MouseMove { x } | PointerEvent::TouchMove { x } => {
                self.pending.paddle_x = Some(x);
            }
            PointerEvent::Click => {
                if phase == GamePhase::Ready {
                    self.pending.launch = true;
                } else if phase.is_terminal() {
                    self.pending.restart = true;
                }
            }
            PointerEvent::TouchStart { x } => {
                self.pending.paddle_x = Some(x);
                self.pending.pause = false;
                self.pending.launch = true;
                self.pending.resume = true;
            }
            PointerEvent::TouchEnd | PointerEvent::TouchCancel => {
                self.pending.pause = true;
            }
            PointerEvent::Resize { width, height } => {
                self.resize = Some((width, height));
            }
        }
    }

    pub fn set_idle_mode(&mut self, enabled: bool) {
        self.pending.idle_mode = enabled;
    }

    pub fn idle_mode(&self) -> bool {
        self.pending.idle_mode
    }

    /// Input for the next tick. One-shot triggers are consumed; the paddle
    /// target and idle mode persist.
    pub fn take(&mut self) -> TickInput {
        let input = self.pending.clone();
        self.pending.clear_triggers();
        input
    }

    /// Latest container size reported since the last call
    pub fn take_resize(&mut self) -> Option<(f32, f32)> {
        self.resize.take()
    }
}
