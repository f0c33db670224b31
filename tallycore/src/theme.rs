//! tally theme — flat black and white, 1px outlines, square corners.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Only two colors exist in this app.
pub struct Palette;

impl Palette {
    pub const PAPER: Color32 = Color32::from_rgb(255, 255, 255);
    pub const INK: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Theme configuration for the tally windows.
pub struct TallyTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for TallyTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 22.0,
            font_size_small: 11.0,
            window_padding: 8.0,
            item_spacing: 5.0,
        }
    }
}

impl TallyTheme {
    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        // --- visuals: pure black & white ---
        let mut visuals = Visuals::light();

        visuals.window_fill = Palette::PAPER;
        visuals.panel_fill = Palette::PAPER;
        visuals.faint_bg_color = Palette::PAPER;
        visuals.extreme_bg_color = Palette::PAPER;

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, Palette::INK);

        let bw = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = Palette::PAPER;
            ws.bg_stroke = Stroke::new(1.0, Palette::INK);
            ws.fg_stroke = Stroke::new(1.0, Palette::INK);
            ws.rounding = Rounding::ZERO;
        };
        bw(&mut visuals.widgets.noninteractive);
        bw(&mut visuals.widgets.inactive);
        bw(&mut visuals.widgets.hovered);
        bw(&mut visuals.widgets.active);
        bw(&mut visuals.widgets.open);

        // Shadows are drawn by hand as dither patterns.
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        visuals.selection.bg_fill = Color32::from_rgb(160, 160, 160);
        visuals.selection.stroke = Stroke::new(1.0, Palette::INK);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }
}

/// Menu bar styling helper: white fill, 1px black outline.
pub fn menu_bar<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    let frame_resp = egui::Frame::none()
        .fill(Palette::PAPER)
        .stroke(Stroke::new(1.0, Palette::INK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner);
    egui::InnerResponse {
        inner: frame_resp.inner,
        response: frame_resp.response,
    }
}

/// Strip key events that trigger unwanted egui behavior: Tab focus cycling
/// and Cmd+/Cmd- zoom scaling. Call at the start of `update()`.
pub fn consume_special_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| match event {
            egui::Event::Key {
                key: egui::Key::Tab,
                ..
            } => false,
            egui::Event::Key { key, modifiers, .. } => !(modifiers.command
                && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals)),
            _ => true,
        });
    });
}
