//! Repaint scheduling for a purely event-driven app.
//!
//! Every engine operation completes synchronously inside the frame that
//! delivered the input, so an idle frame has nothing new to paint and no
//! repaint timer ever runs. The one exception is a state change made
//! *during* a frame that egui only picks up on the next one — switching
//! screens and resizing the viewport, for instance. The controller
//! coalesces those into a single `request_repaint` at frame end.

/// Coalesces repaint requests raised during a frame.
///
/// Drop this into the app struct, call [`mark_needs_repaint`] when state
/// changes outside of a direct input response, and [`end_frame`] at the
/// bottom of `update()`.
///
/// [`mark_needs_repaint`]: RepaintController::mark_needs_repaint
/// [`end_frame`]: RepaintController::end_frame
#[derive(Default)]
pub struct RepaintController {
    needs_repaint: bool,
}

impl RepaintController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request one repaint on the next opportunity.
    pub fn mark_needs_repaint(&mut self) {
        self.needs_repaint = true;
    }

    /// Call at the end of `update()`. Issues at most one repaint request;
    /// otherwise egui sleeps until the next input event.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        if std::mem::take(&mut self.needs_repaint) {
            ctx.request_repaint();
        }
    }
}
