//! Dither pattern drawing — checkerboard overlays instead of opaque fills,
//! so content stays readable under selections and highlights.

use egui::{Color32, Painter, Pos2, Rect};

/// Draw a checkerboard dither pattern over a rectangle.
/// `density` controls spacing: 1 = tight checkerboard, 2 = sparse.
///
/// Bounds are clamped inward once (ceil for the start edge, floor for the
/// end edge) so the inner loop needs no per-pixel bounds check.
pub fn draw_dither_rect(painter: &Painter, rect: Rect, color: Color32, density: u32) {
    let density = density.max(1) as i32;

    let x0 = rect.min.x.ceil() as i32;
    let y0 = rect.min.y.ceil() as i32;
    let x1 = rect.max.x.floor() as i32;
    let y1 = rect.max.y.floor() as i32;

    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let y_step = if density == 1 { 1 } else { density };
    let x_step = if density == 1 { 2 } else { density * 2 };

    let pixel = egui::Vec2::splat(1.0);

    let mut y = y0;
    while y < y1 {
        let row_offset = if density == 1 {
            (y - y0).rem_euclid(2)
        } else {
            if ((y - y0) / density) % 2 == 0 {
                0
            } else {
                density
            }
        };

        let mut x = x0 + row_offset;
        while x < x1 {
            painter.rect_filled(
                Rect::from_min_size(Pos2::new(x as f32, y as f32), pixel),
                0.0,
                color,
            );
            x += x_step;
        }
        y += y_step;
    }
}

/// Tight 1px checkerboard for pressed/selected states.
pub fn draw_dither_selection(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::BLACK, 1);
}

/// Lighter 2px dither for hover states.
pub fn draw_dither_hover(painter: &Painter, rect: Rect) {
    draw_dither_rect(painter, rect, Color32::BLACK, 2);
}

/// Dithered drop shadow for a dialog window. Call after
/// `egui::Window::show()` with the window rect. Rendered on the
/// PanelResizeLine layer so it sits between panels and windows.
pub fn draw_window_shadow(ctx: &egui::Context, window_rect: Rect) {
    let shadow_rect = window_rect.translate(egui::vec2(4.0, 4.0));
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::PanelResizeLine,
        egui::Id::new("dither_shadows"),
    ));
    draw_dither_rect(&painter, shadow_rect, Color32::BLACK, 2);
}
