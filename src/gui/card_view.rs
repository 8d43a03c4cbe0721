use eframe::egui::{
    self,
    Align2,
    Color32,
    CornerRadius,
    FontId,
    Id,
    Rect,
    RichText,
    Sense,
    Stroke,
    StrokeKind,
    Vec2,
};

use crate::{
    core::{
        DeckSession,
        Direction,
    },
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        theme::Theme,
    },
};

const CARD_MAX_WIDTH: f32 = 420.0;
const CARD_HEIGHT: f32 = 260.0;
const SWIPE_THRESHOLD: f32 = 60.0;
const SLIDE_DISTANCE: f32 = 80.0;

/// Active deck view: the flippable card plus its navigation controls.
/// Holds only animation scratch state; the deck itself lives in the app.
pub struct CardView {
    drag_x: f32,
    pending_slide: Option<f32>,
    snap_flip: bool,
}

impl CardView {
    pub fn new() -> Self {
        Self { drag_x: 0.0, pending_slide: None, snap_flip: false }
    }

    /// Arms the slide-in animation for the card that just became current.
    /// The incoming card is also snapped face-down so it never tweens out of
    /// the previous card's flipped pose.
    pub fn begin_slide(&mut self, direction: Direction) {
        self.pending_slide = match direction {
            Direction::Forward => Some(SLIDE_DISTANCE),
            Direction::Backward => Some(-SLIDE_DISTANCE),
            Direction::None => None,
        };
        self.snap_flip = true;
    }

    /// Drops the flip tween to face-down with no transition frames. Used when
    /// the shown card changes without a slide (shuffle, reset, mode toggle).
    pub fn snap_face_down(&mut self) {
        self.snap_flip = true;
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        session: &DeckSession,
        theme: &Theme,
        actions: &mut ActionQueue,
    ) {
        self.show_header(ui, session, theme, actions);
        ui.add_space(16.0);

        if session.is_empty() {
            ui.vertical_centered(|ui| {
                ui.label(theme.muted(ui.ctx(), "This set has no cards."));
            });
            return;
        }

        self.show_card(ui, session, theme, actions);
        ui.add_space(20.0);
        self.show_controls(ui, theme, actions);
    }

    fn show_header(
        &self,
        ui: &mut egui::Ui,
        session: &DeckSession,
        theme: &Theme,
        actions: &mut ActionQueue,
    ) {
        ui.horizontal(|ui| {
            if ui.button("← Back").clicked() {
                actions.push(UiAction::BackToMenu);
            }

            ui.label(theme.heading(ui.ctx(), session.title()));

            let mode_label = match session.def_first() {
                true => "Mode: Def ➔ Term",
                false => "Mode: Term ➔ Def",
            };
            if ui
                .button(RichText::new(mode_label).size(11.0).color(theme.purple(ui.ctx())))
                .clicked()
            {
                actions.push(UiAction::ToggleMode);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if !session.is_empty() {
                    ui.label(
                        theme.muted(
                            ui.ctx(),
                            &format!("{} / {}", session.cursor() + 1, session.len()),
                        ),
                    );
                }
            });
        });
    }

    fn show_card(
        &mut self,
        ui: &mut egui::Ui,
        session: &DeckSession,
        theme: &Theme,
        actions: &mut ActionQueue,
    ) {
        let avail = ui.available_width();
        let card_width = avail.min(CARD_MAX_WIDTH);

        let (outer_rect, response) =
            ui.allocate_exact_size(Vec2::new(avail, CARD_HEIGHT), Sense::click_and_drag());

        if response.clicked() {
            actions.push(UiAction::Flip);
        }

        // Swipe: accumulate horizontal drag and decide on release.
        if response.dragged() {
            self.drag_x += response.drag_delta().x;
        }
        if response.drag_stopped() {
            if self.drag_x <= -SWIPE_THRESHOLD {
                actions.push(UiAction::Next);
            } else if self.drag_x >= SWIPE_THRESHOLD {
                actions.push(UiAction::Previous);
            }
            self.drag_x = 0.0;
        }

        let ctx = ui.ctx().clone();

        // Slide-in offset decays to zero after a navigation.
        let slide_id = Id::new("card_slide");
        if let Some(from) = self.pending_slide.take() {
            ctx.animate_value_with_time(slide_id, from, 0.0);
        }
        let slide_offset = ctx.animate_value_with_time(slide_id, 0.0, 0.25);

        // The flip squashes the card through zero width, swapping faces at
        // the midpoint.
        let flip_id = Id::new("card_flip");
        if self.snap_flip {
            self.snap_flip = false;
            ctx.animate_bool_with_time(flip_id, session.flipped(), 0.0);
        }
        let flip_t = ctx.animate_bool_with_time(flip_id, session.flipped(), 0.3);
        let showing_back = flip_t > 0.5;
        let squash = ((flip_t - 0.5).abs() * 2.0).max(0.02);

        let center = outer_rect.center() + Vec2::new(slide_offset, 0.0);
        let card_rect =
            Rect::from_center_size(center, Vec2::new(card_width * squash, CARD_HEIGHT));

        let painter = ui.painter();

        if showing_back {
            painter.rect(
                card_rect,
                CornerRadius::same(16),
                theme.surface(&ctx),
                Stroke::new(1.5, theme.surface_edge(&ctx)),
                StrokeKind::Inside,
            );
        } else {
            painter.rect(
                card_rect,
                CornerRadius::same(16),
                theme.card_front(&ctx),
                Stroke::new(1.5, theme.purple(&ctx)),
                StrokeKind::Inside,
            );
            painter.text(
                card_rect.center_bottom() - Vec2::new(0.0, 18.0),
                Align2::CENTER_BOTTOM,
                "Click to flip",
                FontId::proportional(10.0),
                Color32::from_white_alpha(160),
            );
        }

        let (text, color) = match showing_back {
            true => (session.back_text(), theme.foreground(&ctx)),
            false => (session.front_text(), Color32::WHITE),
        };

        // Definitions run long, so whichever face shows one gets the small font.
        let definition_face = session.def_first() != showing_back;
        let font_size = if definition_face { 17.0 } else { 26.0 };

        if let Some(text) = text {
            let galley = painter.layout(
                text.to_string(),
                FontId::proportional(font_size),
                color,
                (card_rect.width() - 48.0).max(8.0),
            );
            let text_pos = card_rect.center() - galley.size() * 0.5;
            painter.galley(text_pos, galley, color);
        }
    }

    fn show_controls(&self, ui: &mut egui::Ui, theme: &Theme, actions: &mut ActionQueue) {
        let avail = ui.available_width();

        ui.horizontal(|ui| {
            ui.add_space(((avail - 200.0) * 0.5).max(0.0));
            if ui.button("Previous").clicked() {
                actions.push(UiAction::Previous);
            }
            if ui
                .add(egui::Button::new(RichText::new("Next Card").strong())
                    .fill(theme.purple(ui.ctx())))
                .clicked()
            {
                actions.push(UiAction::Next);
            }
        });

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.add_space(((avail - 160.0) * 0.5).max(0.0));
            if ui.small_button("Shuffle").clicked() {
                actions.push(UiAction::Shuffle);
            }
            if ui.small_button("Reset order").clicked() {
                actions.push(UiAction::Reset);
            }
        });
    }
}

impl Default for CardView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_arms_slide_and_face_down_snap() {
        let mut view = CardView::new();
        assert!(!view.snap_flip);

        view.begin_slide(Direction::Forward);
        assert_eq!(view.pending_slide, Some(SLIDE_DISTANCE));
        assert!(view.snap_flip);

        view.begin_slide(Direction::Backward);
        assert_eq!(view.pending_slide, Some(-SLIDE_DISTANCE));
        assert!(view.snap_flip);

        // Shuffle and reset report no travel direction but still swap the
        // shown card, so they snap without sliding.
        let mut view = CardView::new();
        view.begin_slide(Direction::None);
        assert_eq!(view.pending_slide, None);
        assert!(view.snap_flip);

        let mut view = CardView::new();
        view.snap_face_down();
        assert_eq!(view.pending_slide, None);
        assert!(view.snap_flip);
    }
}
