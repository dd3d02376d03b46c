use eframe::egui::{self, Pos2, Rect, Response, Ui};

use super::render_utils::screen_to_surface;
use super::{DragState, ViewModel};

const DRAG_ALPHA_TARGET: f32 = 0.3;

impl ViewModel {
    fn node_at(&self, surface: Pos2) -> Option<usize> {
        self.sim
            .nodes()
            .iter()
            .enumerate()
            .filter_map(|(index, node)| {
                let distance = node.pos.distance(surface);
                (distance <= node.radius).then_some((index, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _distance)| index)
    }

    pub(in crate::app) fn handle_drag(&mut self, ui: &Ui, rect: Rect, response: &Response) {
        if let Some(pointer) = response.hover_pos()
            && self.node_at(screen_to_surface(rect, pointer)).is_some()
        {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        if response.drag_started()
            && let Some(pointer) = response.interact_pointer_pos()
            && let Some(index) = self.node_at(screen_to_surface(rect, pointer))
        {
            let current = self.sim.nodes()[index].pos;
            self.sim.set_pin(index, current);
            self.sim.set_alpha_target(DRAG_ALPHA_TARGET);
            self.sim.restart();
            self.drag = DragState::Dragging(index);
            log::debug!("drag start on node {}", self.sim.nodes()[index].id);
        }

        if let DragState::Dragging(index) = self.drag {
            if response.dragged()
                && let Some(pointer) = response.interact_pointer_pos()
            {
                self.sim.set_pin(index, screen_to_surface(rect, pointer));
            }

            if response.drag_stopped() {
                self.sim.clear_pin(index);
                self.sim.set_alpha_target(0.0);
                self.drag = DragState::Idle;
                log::debug!("drag end on node {}", self.sim.nodes()[index].id);
            }
        }
    }
}
