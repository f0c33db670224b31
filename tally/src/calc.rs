//! Calculator screen — display field, keypad grids, and the error dialog.
//!
//! Every button and keyboard shortcut funnels into `tallycore::keys::press`
//! as a plain label string; this module only lays out the buttons and shows
//! whatever comes back.

use egui::{Context, Key, Ui};
use tallycore::dither;
use tallycore::engine::{Engine, KeySet};
use tallycore::keys;
use tallycore::theme::{menu_bar, Palette};
use tallycore::widgets::PadButton;

use crate::app::ScreenAction;

const KEY_HEIGHT: f32 = 48.0;
const SCI_KEY_HEIGHT: f32 = 38.0;
const DISPLAY_HEIGHT: f32 = 48.0;

/// The classic 4x4 keypad.
const BASIC_ROWS: [[&str; 4]; 4] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
];

/// Scientific keys, a 2x3 grid below the basic keypad.
const SCIENTIFIC_ROWS: [[&str; 3]; 2] = [
    ["sin", "cos", "sqrt"],
    ["log", "x^2", "x^n"],
];

pub struct CalcScreen {
    engine: Engine,
    display: String,
    error: Option<String>,
    show_about: bool,
}

impl CalcScreen {
    pub fn new(keyset: KeySet) -> Self {
        Self {
            engine: Engine::new(keyset),
            display: String::new(),
            error: None,
            show_about: false,
        }
    }

    fn title(&self) -> &'static str {
        match self.engine.keyset() {
            KeySet::Basic => "simple calculator",
            KeySet::Scientific => "scientific calculator",
        }
    }

    /// Route one button label through the core and pick up the outcome.
    fn press(&mut self, label: &str) {
        let outcome = keys::press(&mut self.engine, label);
        self.display = outcome.display;
        if outcome.error.is_some() {
            self.error = outcome.error;
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        // While the error dialog is up, keys only dismiss it.
        if self.error.is_some() {
            let dismiss =
                ctx.input(|i| i.key_pressed(Key::Escape) || i.key_pressed(Key::Enter));
            if dismiss {
                self.error = None;
            }
            return;
        }

        let mut pressed: Vec<&'static str> = Vec::new();
        ctx.input(|i| {
            let shift = i.modifiers.shift;

            const DIGITS: [(Key, &str); 10] = [
                (Key::Num0, "0"),
                (Key::Num1, "1"),
                (Key::Num2, "2"),
                (Key::Num3, "3"),
                (Key::Num4, "4"),
                (Key::Num5, "5"),
                (Key::Num6, "6"),
                (Key::Num7, "7"),
                (Key::Num8, "8"),
                (Key::Num9, "9"),
            ];
            for (key, label) in DIGITS {
                // shift+8 is "*", not "8"
                if i.key_pressed(key) && !(shift && key == Key::Num8) {
                    pressed.push(label);
                }
            }

            if i.key_pressed(Key::Period) {
                pressed.push(".");
            }
            if i.key_pressed(Key::Plus) || (shift && i.key_pressed(Key::Equals)) {
                pressed.push("+");
            }
            if i.key_pressed(Key::Minus) {
                pressed.push("-");
            }
            if shift && i.key_pressed(Key::Num8) {
                pressed.push("*");
            }
            if i.key_pressed(Key::Slash) {
                pressed.push("/");
            }
            if i.key_pressed(Key::Enter) || (!shift && i.key_pressed(Key::Equals)) {
                pressed.push("=");
            }
            if i.key_pressed(Key::Escape) || i.key_pressed(Key::C) {
                pressed.push("C");
            }
        });

        for label in pressed {
            self.press(label);
        }
    }

    pub fn show(&mut self, ctx: &Context) -> Option<ScreenAction> {
        let mut action = None;

        self.handle_keys(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("calculator", |ui| {
                    if ui.button("back to menu").clicked() {
                        action = Some(ScreenAction::BackToMenu);
                        ui.close_menu();
                    }
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
                ui.label(self.title());
            });
        });

        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(Palette::PAPER)
                    .inner_margin(egui::Margin::same(8.0)),
            )
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(8.0);
                self.render_keypad(ui);

                if self.engine.keyset() == KeySet::Scientific {
                    ui.add_space(4.0);
                    ui.separator();
                    ui.add_space(4.0);
                    self.render_scientific(ui);
                }
            });

        self.render_error(ctx);
        self.render_about(ctx);

        action
    }

    fn render_display(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let clear = ui.add(
                PadButton::new("C", egui::vec2(40.0, DISPLAY_HEIGHT)).font_size(18.0),
            );
            if clear.clicked() {
                self.press("C");
            }

            egui::Frame::none()
                .fill(Palette::PAPER)
                .stroke(egui::Stroke::new(1.0, Palette::INK))
                .inner_margin(egui::Margin::symmetric(8.0, 4.0))
                .show(ui, |ui| {
                    ui.set_min_size(egui::vec2(ui.available_width(), DISPLAY_HEIGHT - 8.0));
                    ui.set_max_height(DISPLAY_HEIGHT - 8.0);
                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            ui.label(
                                egui::RichText::new(&self.display)
                                    .font(egui::FontId::proportional(26.0))
                                    .strong(),
                            );
                        },
                    );
                });
        });
    }

    fn render_keypad(&mut self, ui: &mut Ui) {
        let gap = ui.spacing().item_spacing.x;
        let key_w = (ui.available_width() - 3.0 * gap) / 4.0;

        for row in BASIC_ROWS {
            ui.horizontal(|ui| {
                for label in row {
                    let button = ui.add(PadButton::new(label, egui::vec2(key_w, KEY_HEIGHT)));
                    if button.clicked() {
                        self.press(label);
                    }
                }
            });
        }
    }

    fn render_scientific(&mut self, ui: &mut Ui) {
        let gap = ui.spacing().item_spacing.x;
        let key_w = (ui.available_width() - 2.0 * gap) / 3.0;

        for row in SCIENTIFIC_ROWS {
            ui.horizontal(|ui| {
                for label in row {
                    let button = ui.add(
                        PadButton::new(label, egui::vec2(key_w, SCI_KEY_HEIGHT)).font_size(14.0),
                    );
                    if button.clicked() {
                        self.press(label);
                    }
                }
            });
        }
    }

    /// Modal error dialog. The engine was already reset by the router;
    /// dismissing just hides the message.
    fn render_error(&mut self, ctx: &Context) {
        let Some(message) = self.error.clone() else {
            return;
        };

        let resp = egui::Window::new("error")
            .collapsible(false)
            .resizable(false)
            .default_width(220.0)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(4.0);
                    ui.label(&message);
                    ui.add_space(8.0);
                    if ui.button("ok").clicked() {
                        self.error = None;
                    }
                    ui.add_space(4.0);
                });
            });
        if let Some(r) = &resp {
            dither::draw_window_shadow(ctx, r.response.rect);
        }
    }

    fn render_about(&mut self, ctx: &Context) {
        if !self.show_about {
            return;
        }

        let resp = egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(220.0)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label("version 0.1.0");
                    ui.add_space(4.0);
                    ui.label(self.title());
                });
                ui.add_space(4.0);
                ui.separator();
                ui.add_space(2.0);
                ui.label("keys: 0-9 . + - * / Enter Esc");
                ui.add_space(4.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
        if let Some(r) = &resp {
            dither::draw_window_shadow(ctx, r.response.rect);
        }
    }
}
