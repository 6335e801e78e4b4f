use serde::{Deserialize, Serialize};

/// Drag phase of the pointer state machine.
///
/// Resize and refresh are concurrent triggers, not phases; they fire the
/// same way whether a drag is in progress or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Pointer-drag state machine.
///
/// Tracks the last horizontal pointer position so absolute move events can
/// be turned into per-event pixel deltas. Out-of-sequence events (a move
/// while idle, a second down, an up while idle) are absorbed without state
/// damage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    phase: DragPhase,
    last_pointer_x: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            phase: DragPhase::Idle,
            last_pointer_x: 0.0,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn phase(self) -> DragPhase {
        self.phase
    }

    /// `Idle -> Dragging`. Returns `true` when the transition happened so the
    /// caller can acquire pointer capture exactly once.
    pub fn on_pointer_down(&mut self, x: f64) -> bool {
        if self.phase == DragPhase::Dragging {
            return false;
        }
        self.phase = DragPhase::Dragging;
        self.last_pointer_x = x;
        true
    }

    /// Returns the pixel delta since the previous event while dragging,
    /// `None` while idle.
    pub fn on_pointer_move(&mut self, x: f64) -> Option<f64> {
        if self.phase != DragPhase::Dragging {
            return None;
        }
        let dx = x - self.last_pointer_x;
        self.last_pointer_x = x;
        Some(dx)
    }

    /// `Dragging -> Idle`. Returns `true` when a drag actually ended so
    /// capture release runs exactly once.
    pub fn on_pointer_up(&mut self) -> bool {
        if self.phase != DragPhase::Dragging {
            return false;
        }
        self.phase = DragPhase::Idle;
        true
    }
}

/// Converts a drag pixel delta into the time delta applied to the window
/// offset.
///
/// Dragging right (`dx > 0`) moves the window offset left so the content
/// follows the pointer.
#[must_use]
pub fn drag_time_delta(dx_pixels: f64, window_width: f64, inner_width_px: f64) -> f64 {
    if !(inner_width_px > 0.0) {
        return 0.0;
    }
    -dx_pixels * window_width / inner_width_px
}
