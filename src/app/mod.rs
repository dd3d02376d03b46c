use std::time::{Duration, Instant};

use eframe::egui::{self, Context};

use crate::sim::Simulation;

mod interaction;
mod render_utils;
mod view;

pub const WINDOW_TITLE: &str = "Force Layout";

const LOADING_DELAY: Duration = Duration::from_millis(100);
// Resume at a low alpha once visible so the initial settling stays gentle.
const POST_LOAD_ALPHA: f32 = 0.1;

pub struct ForceLayoutApp {
    model: ViewModel,
    started: Instant,
    loading: bool,
}

struct ViewModel {
    sim: Simulation,
    drag: DragState,
}

enum DragState {
    Idle,
    Dragging(usize),
}

impl ForceLayoutApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, sim: Simulation) -> Self {
        Self {
            model: ViewModel {
                sim,
                drag: DragState::Idle,
            },
            started: Instant::now(),
            loading: true,
        }
    }
}

impl eframe::App for ForceLayoutApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if self.loading && self.started.elapsed() >= LOADING_DELAY {
            self.loading = false;
            self.model.sim.set_alpha(POST_LOAD_ALPHA);
            self.model.sim.restart();
            log::debug!("loading finished, resuming at alpha {POST_LOAD_ALPHA}");
        }

        let loading = self.loading;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.heading(WINDOW_TITLE);
                ui.add_space(12.0);
                self.model.draw_graph(ui, loading);
            });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.model.sim.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_title_names_the_demo() {
        assert!(WINDOW_TITLE.contains("Force Layout"));
    }
}
