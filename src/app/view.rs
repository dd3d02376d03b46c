use eframe::egui::{self, Align2, Color32, FontId, Sense, Stroke, Ui, vec2};

use crate::data::{SURFACE_HEIGHT, SURFACE_WIDTH};

use super::render_utils::{draw_background, surface_to_screen};
use super::{DragState, ViewModel};

// Extra positional collision passes per frame on top of the ones inside the
// engine tick. Quality knob: more passes, less visible overlap.
const EXTRA_COLLIDE_PASSES: usize = 6;

impl ViewModel {
    pub(in crate::app) fn draw_graph(&mut self, ui: &mut Ui, loading: bool) {
        let (rect, response) =
            ui.allocate_exact_size(vec2(SURFACE_WIDTH, SURFACE_HEIGHT), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        draw_background(&painter, rect);

        self.handle_drag(ui, rect, &response);

        let moving = self.sim.tick();
        if moving {
            self.sim.resolve_overlaps(EXTRA_COLLIDE_PASSES);
        }
        if moving || !matches!(self.drag, DragState::Idle) || loading {
            ui.ctx().request_repaint();
        }

        for link in self.sim.links() {
            let source = self.sim.nodes()[link.source].pos;
            let target = self.sim.nodes()[link.target].pos;
            painter.line_segment(
                [
                    surface_to_screen(rect, source),
                    surface_to_screen(rect, target),
                ],
                Stroke::new(1.0, Color32::from_rgba_unmultiplied(153, 153, 153, 153)),
            );
        }

        for node in self.sim.nodes() {
            let position = surface_to_screen(rect, node.pos);
            painter.circle_filled(position, node.radius, Color32::from_rgb(173, 216, 230));
            painter.circle_stroke(
                position,
                node.radius,
                Stroke::new(1.5, Color32::from_rgb(70, 130, 180)),
            );
            painter.text(
                position,
                Align2::CENTER_CENTER,
                &node.label,
                FontId::proportional(12.0),
                Color32::BLACK,
            );
        }

        if loading {
            painter.rect_filled(rect, 0.0, Color32::from_rgba_unmultiplied(255, 255, 255, 170));
            ui.put(rect, egui::Spinner::new().size(22.0));
        }
    }
}
