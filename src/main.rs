#![warn(clippy::all, rust_2018_idioms)]

use eframe_figure::{EditorConfig, FigureApp};

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EditorConfig::from_env();
    log::info!("Starting with {config:?}");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Figure Editor")
            .with_inner_size([1440.0, 900.0])
            .with_min_inner_size([800.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "eframe_figure",
        native_options,
        Box::new(|cc| Ok(Box::new(FigureApp::new(cc, config)))),
    )
}
