/// The region of the complex plane currently visible.
///
/// `zoom` is the width of the complex plane spanned by the viewport, so a
/// *larger* value means the view is zoomed further out. Centre and zoom are
/// plain fields: the surrounding application mutates them freely between
/// steps. The aspect ratio is fixed when the session is created and stays
/// read-only for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub zoom: f32,
    pub center_x: f32,
    pub center_y: f32,
    aspect: f32,
}

impl ViewState {
    /// Initial view: the classic full set, centred on the origin with a
    /// complex-plane width of 4.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            zoom: 4.0,
            center_x: 0.0,
            center_y: 0.0,
            aspect: height as f32 / width as f32,
        }
    }

    /// Height/width ratio of the viewport, fixed at creation.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }
}
