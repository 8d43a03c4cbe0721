use eframe::egui;

use crate::gui::{
    actions::{
        ActionQueue,
        UiAction,
    },
    theme::Theme,
};

/// Page-level error banner. A menu fetch failure leaves an empty menu behind
/// it; a deck fetch failure leaves the menu usable underneath.
pub struct ErrorBanner {
    message: Option<String>,
    details: Option<String>,
}

impl ErrorBanner {
    pub fn new() -> Self {
        Self { message: None, details: None }
    }

    pub fn show_error(&mut self, message: impl Into<String>, details: Option<impl Into<String>>) {
        self.message = Some(message.into());
        self.details = details.map(|d| d.into());
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.details = None;
    }

    pub fn show(&self, ctx: &egui::Context, theme: &Theme, actions: &mut ActionQueue) {
        let Some(message) = &self.message else {
            return;
        };

        egui::TopBottomPanel::top("error_banner").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(16.0).color(theme.red(ui.ctx())));
                let text = egui::RichText::new(message).color(theme.red(ui.ctx())).strong();
                match &self.details {
                    Some(details) => {
                        ui.label(text).on_hover_text(details);
                    }
                    None => {
                        ui.label(text);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Dismiss").clicked() {
                        actions.push(UiAction::DismissError);
                    }
                });
            });
            ui.add_space(4.0);
        });
    }
}

impl Default for ErrorBanner {
    fn default() -> Self {
        Self::new()
    }
}
