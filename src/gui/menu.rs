use eframe::egui::{
    self,
    text::LayoutJob,
    FontId,
    TextFormat,
};

use crate::{
    core::VocabSet,
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        theme::Theme,
    },
};

const TILE_SIZE: egui::Vec2 = egui::Vec2::new(236.0, 132.0);

/// Grid of loadable sets. Clicking a tile queues the deck fetch.
pub struct MenuView;

impl MenuView {
    pub fn show(ui: &mut egui::Ui, menu: &[VocabSet], theme: &Theme, actions: &mut ActionQueue) {
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.heading(theme.heading(ui.ctx(), "Flashdeck"));
            ui.label(theme.muted(ui.ctx(), "Master your vocabulary, one card at a time."));
        });
        ui.add_space(12.0);

        if menu.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label(theme.muted(ui.ctx(), "No card sets available."));
            });
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.spacing_mut().item_spacing = egui::Vec2::new(12.0, 12.0);
            ui.horizontal_wrapped(|ui| {
                for set in menu {
                    let tile = egui::Button::new(tile_text(ui.ctx(), set, theme)).wrap();
                    if ui.add_sized(TILE_SIZE, tile).clicked() {
                        actions.push(UiAction::OpenSet {
                            id: set.id.clone(),
                            title: set.title.clone(),
                        });
                    }
                }
            });
        });
    }
}

fn tile_text(ctx: &egui::Context, set: &VocabSet, theme: &Theme) -> LayoutJob {
    let mut job = LayoutJob::default();

    job.append(
        &set.title,
        0.0,
        TextFormat {
            font_id: FontId::proportional(17.0),
            color: theme.purple(ctx),
            ..Default::default()
        },
    );

    if let Some(description) = &set.description {
        job.append(
            &format!("\n{description}"),
            0.0,
            TextFormat {
                font_id: FontId::proportional(12.5),
                color: theme.comment(ctx),
                ..Default::default()
            },
        );
    }

    job.append(
        &format!("\n{} cards", set.count),
        0.0,
        TextFormat {
            font_id: FontId::proportional(12.5),
            color: theme.cyan(ctx),
            ..Default::default()
        },
    );

    job
}
