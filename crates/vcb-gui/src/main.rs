//! VC Brief - Desktop GUI Application
//!
//! The 4StudentLives investor dossier: intro sequence, ten tabbed panels
//! and the investor update export.

use eframe::egui;
use vcb_gui::VcBriefApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("VC Brief")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([1024.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "VC Brief",
        options,
        Box::new(|cc| Ok(Box::new(VcBriefApp::new(cc)?))),
    )
}
