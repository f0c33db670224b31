//! Custom widgets — white fill, 1px outline, dithered press states.

use egui::{Response, Sense, Stroke, Ui, Widget};

use crate::dither;
use crate::theme::Palette;

/// A keypad or launcher button with a fixed size.
///
/// Keypad grids need exact cell sizes, so unlike a plain `egui::Button`
/// the size is passed in rather than derived from the label.
pub struct PadButton<'a> {
    label: &'a str,
    size: egui::Vec2,
    font_size: f32,
}

impl<'a> PadButton<'a> {
    pub fn new(label: &'a str, size: egui::Vec2) -> Self {
        Self {
            label,
            size,
            font_size: 16.0,
        }
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }
}

impl Widget for PadButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            painter.rect_filled(rect, 0.0, Palette::PAPER);
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Palette::INK));

            let pressed = response.is_pointer_button_down_on();
            if pressed {
                dither::draw_dither_selection(painter, rect);
            } else if response.hovered() {
                dither::draw_dither_hover(painter, rect);
            }

            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(self.font_size),
                if pressed { Palette::PAPER } else { Palette::INK },
            );
        }

        response
    }
}
