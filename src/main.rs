mod app;
mod data;
mod pack;
mod sim;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let sim = data::sample_simulation()?;
    log::info!(
        "seeded {} nodes and {} links",
        sim.nodes().len(),
        sim.links().len()
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([660.0, 520.0])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        app::WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(app::ForceLayoutApp::new(cc, sim)))),
    )
    .map_err(|error| anyhow::anyhow!("failed to run ui: {error}"))
}
