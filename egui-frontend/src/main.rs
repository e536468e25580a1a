use eframe::egui;
use log::{error, info};

mod backend;
mod ui;

use ui::SensorTrackerApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Sensor Tracker egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 620.0]) // Two cards side by side
            .with_min_inner_size([640.0, 480.0])
            .with_title("Sensor Tracker")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Sensor Tracker",
        options,
        Box::new(|_cc| match SensorTrackerApp::new() {
            Ok(app) => {
                info!("Successfully initialized Sensor Tracker app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
