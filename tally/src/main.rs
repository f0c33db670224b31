//! tally — a calculator with simple and scientific modes.
//!
//! Opens on a menu screen; picking a variant swaps in the matching
//! calculator keypad.

mod app;
mod calc;
mod menu;

use app::TallyApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([app::MENU_WIDTH, app::MENU_HEIGHT])
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(|cc| {
            tallycore::TallyTheme::default().apply(&cc.egui_ctx);
            Box::new(TallyApp::new(cc))
        }),
    )
}
