//! Launcher menu — one button per calculator variant, laid out in a grid
//! that re-flows its column count as the window is resized.

use egui::Context;
use tallycore::engine::KeySet;
use tallycore::theme::Palette;
use tallycore::widgets::PadButton;

use crate::app::ScreenAction;

/// Preferred launcher button size; the column count is derived from it.
const BUTTON_WIDTH: f32 = 180.0;
const BUTTON_HEIGHT: f32 = 56.0;

const ENTRIES: [(&str, KeySet); 2] = [
    ("simple calculator", KeySet::Basic),
    ("scientific calculator", KeySet::Scientific),
];

pub struct MenuScreen;

impl MenuScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ctx: &Context) -> Option<ScreenAction> {
        let mut action = None;

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(Palette::PAPER)
                    .inner_margin(egui::Margin::same(10.0)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.heading("calculator");
                });
                ui.add_space(16.0);

                // Re-flow: as many columns as whole buttons fit the width.
                let gap = ui.spacing().item_spacing.x;
                let available = ui.available_width();
                let columns = (((available + gap) / (BUTTON_WIDTH + gap)).floor() as usize).max(1);

                for row in ENTRIES.chunks(columns) {
                    ui.horizontal(|ui| {
                        for (label, keyset) in row {
                            let button = ui.add(PadButton::new(
                                label,
                                egui::vec2(BUTTON_WIDTH, BUTTON_HEIGHT),
                            ));
                            if button.clicked() {
                                action = Some(ScreenAction::OpenCalculator(*keyset));
                            }
                        }
                    });
                }
            });

        action
    }
}
