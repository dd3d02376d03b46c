use eframe::egui::{Color32, Painter, Pos2, Rect};

pub(super) fn draw_background(painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, 4.0, Color32::WHITE);
}

pub(super) fn surface_to_screen(rect: Rect, surface: Pos2) -> Pos2 {
    rect.left_top() + surface.to_vec2()
}

pub(super) fn screen_to_surface(rect: Rect, screen: Pos2) -> Pos2 {
    (screen - rect.left_top()).to_pos2()
}
