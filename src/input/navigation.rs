use crate::core::session::Session;

/// Explicit per-frame input state: which navigation controls are held, plus
/// one-shot budget adjustments. The surrounding event loop fills this in
/// and applies it to the session between steps; no global key state exists
/// anywhere.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavigationInput {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    budget_up_pending: bool,
    budget_down_pending: bool,
}

impl NavigationInput {
    /// Registers a one-shot iteration budget increase, consumed by the next
    /// [`apply`](Self::apply).
    pub fn request_budget_up(&mut self) {
        self.budget_up_pending = true;
    }

    pub fn request_budget_down(&mut self) {
        self.budget_down_pending = true;
    }

    /// Applies the held controls to the session's view parameters for one
    /// frame and consumes any pending budget edges.
    ///
    /// Pan speed scales with the zoom level (`zoom / 32` per frame) so
    /// navigation feels uniform at any depth; zooming moves by a tenth of
    /// the current zoom per frame. Opposing controls held together cancel
    /// in favour of up/right/in.
    pub fn apply(&mut self, session: &mut Session) {
        let speed = session.view.zoom / 32.0;

        if self.move_up {
            session.view.center_y += speed;
        } else if self.move_down {
            session.view.center_y -= speed;
        }

        if self.move_right {
            session.view.center_x += speed;
        } else if self.move_left {
            session.view.center_x -= speed;
        }

        if self.zoom_in {
            session.view.zoom -= session.view.zoom / 10.0;
        } else if self.zoom_out {
            session.view.zoom += session.view.zoom / 10.0;
        }

        if self.budget_up_pending {
            session.budget.increment();
            self.budget_up_pending = false;
        }
        if self.budget_down_pending {
            session.budget.decrement();
            self.budget_down_pending = false;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
