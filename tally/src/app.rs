//! Top-level screen switching between the launcher menu and a calculator.

use egui::Context;
use tallycore::engine::KeySet;
use tallycore::RepaintController;

use crate::calc::CalcScreen;
use crate::menu::MenuScreen;

/// Window size while the menu is showing.
pub const MENU_WIDTH: f32 = 400.0;
pub const MENU_HEIGHT: f32 = 280.0;

/// Window height for the basic keypad.
const BASIC_HEIGHT: f32 = 420.0;
/// Window height for the scientific keypad (extra 2x3 grid below).
const SCIENTIFIC_HEIGHT: f32 = 540.0;
/// Calculator window width, both variants.
const CALC_WIDTH: f32 = 280.0;

/// Transition requested by a screen.
pub enum ScreenAction {
    OpenCalculator(KeySet),
    BackToMenu,
}

enum Screen {
    Menu(MenuScreen),
    Calculator(CalcScreen),
}

pub struct TallyApp {
    screen: Screen,
    repaint: RepaintController,
}

impl TallyApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            screen: Screen::Menu(MenuScreen::new()),
            repaint: RepaintController::new(),
        }
    }

    /// Replace the menu with a calculator window of the chosen variant.
    /// Each calculator starts with a fresh engine.
    fn open_calculator(&mut self, ctx: &Context, keyset: KeySet) {
        let height = match keyset {
            KeySet::Basic => BASIC_HEIGHT,
            KeySet::Scientific => SCIENTIFIC_HEIGHT,
        };
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
            CALC_WIDTH, height,
        )));
        self.screen = Screen::Calculator(CalcScreen::new(keyset));
        self.repaint.mark_needs_repaint();
    }

    /// Close the calculator (its state is discarded) and show the menu.
    fn open_menu(&mut self, ctx: &Context) {
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(
            MENU_WIDTH,
            MENU_HEIGHT,
        )));
        self.screen = Screen::Menu(MenuScreen::new());
        self.repaint.mark_needs_repaint();
    }
}

impl eframe::App for TallyApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        tallycore::theme::consume_special_keys(ctx);

        let action = match &mut self.screen {
            Screen::Menu(menu) => menu.show(ctx),
            Screen::Calculator(calc) => calc.show(ctx),
        };

        match action {
            Some(ScreenAction::OpenCalculator(keyset)) => self.open_calculator(ctx, keyset),
            Some(ScreenAction::BackToMenu) => self.open_menu(ctx),
            None => {}
        }

        self.repaint.end_frame(ctx);
    }
}
