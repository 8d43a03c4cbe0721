use eframe::egui;
use flashdeck::gui::FlashdeckApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 680.0])
            .with_min_inner_size([480.0, 420.0])
            .with_title("Flashdeck"),
        ..Default::default()
    };

    eframe::run_native("Flashdeck", options, Box::new(|cc| Ok(Box::new(FlashdeckApp::new(cc)))))
}
