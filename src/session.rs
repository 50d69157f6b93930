// Pointer state machine for one whiteboard.
// Idle until the pointer goes down; while Active every move yields the
// segment from the previous sample to the new one.

use crate::types::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrokeState {
    #[default]
    Idle,
    /// Pointer is down; `last` is the previous local sample.
    Active { last: Point },
}

impl StrokeState {
    pub fn is_active(self) -> bool {
        matches!(self, StrokeState::Active { .. })
    }
}

#[derive(Clone, Debug, Default)]
pub struct DrawingSession {
    state: StrokeState,
}

impl DrawingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Start (or restart) a stroke at `local`. Nothing is drawn yet.
    pub fn pointer_down(&mut self, local: Point) {
        self.state = StrokeState::Active { last: local };
    }

    /// Returns the segment to rasterize, or None while Idle.
    pub fn pointer_move(&mut self, local: Point) -> Option<(Point, Point)> {
        match &mut self.state {
            StrokeState::Idle => None,
            StrokeState::Active { last } => {
                let from = std::mem::replace(last, local);
                Some((from, local))
            }
        }
    }

    pub fn pointer_up(&mut self) {
        self.state = StrokeState::Idle;
    }
}
