use super::constants::DRAG_RADIANS_PER_PX;

/// Horizontal drag tracking shared by mouse and touch input.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub last_x: f32,
}

impl DragState {
    #[inline]
    pub fn begin(&mut self, x: f32) {
        self.active = true;
        self.last_x = x;
    }

    /// Record a pointer move and return the rotation it produces, if dragging.
    pub fn move_to(&mut self, x: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        let delta = x - self.last_x;
        self.last_x = x;
        Some(delta * DRAG_RADIANS_PER_PX)
    }

    #[inline]
    pub fn end(&mut self) {
        self.active = false;
    }
}
