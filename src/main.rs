mod gui;

use eframe::egui;
use dual_player::core::PlayerConfig;
use gui::FeedPlayerApp;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = PlayerConfig::load()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 860.0])
            .with_title("Dual Player"),
        ..Default::default()
    };

    eframe::run_native(
        "Dual Player",
        options,
        Box::new(move |cc| {
            match FeedPlayerApp::new(cc, config) {
                Ok(app) => Ok(Box::new(app)),
                Err(e) => {
                    eprintln!("Failed to initialize app: {}", e);
                    std::process::exit(1);
                }
            }
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
