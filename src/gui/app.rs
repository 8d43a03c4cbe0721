use eframe::egui::{
    self,
    containers,
};

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    card_view::CardView,
    error_banner::ErrorBanner,
    menu::MenuView,
    message_overlay::MessageOverlay,
    theme::{
        set_theme,
        Theme,
    },
};
use crate::core::{
    source::DeckSource,
    tasks::{
        TaskManager,
        TaskResult,
    },
    DeckSession,
    VocabSet,
};

/// Which screen is on. Returning to the menu discards the deck; opening a
/// set always starts from a fresh fetch.
enum View {
    Menu,
    Deck(DeckSession),
}

pub struct FlashdeckApp {
    // Data
    menu: Vec<VocabSet>,
    view: View,

    // UI state
    theme: Theme,
    message_overlay: MessageOverlay,
    error_banner: ErrorBanner,
    card_view: CardView,
    actions: ActionQueue,

    task_manager: TaskManager,
}

impl FlashdeckApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let source = DeckSource::new().expect("Failed to build HTTP client");
        let task_manager = TaskManager::new(source);

        let mut message_overlay = MessageOverlay::new();
        message_overlay.set_message("Loading card sets...".to_string());
        task_manager.load_menu();

        let theme = Theme::dracula();
        set_theme(&cc.egui_ctx, theme.clone());
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);

        Self {
            menu: Vec::new(),
            view: View::Menu,
            theme,
            message_overlay,
            error_banner: ErrorBanner::new(),
            card_view: CardView::new(),
            actions: ActionQueue::new(),
            task_manager,
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        println!("Task finished: {}", result.task_type());

        match result {
            TaskResult::MenuLoaded(result) => {
                self.message_overlay.clear_message();
                match result {
                    Ok(menu) => {
                        self.menu = menu;
                    }
                    Err(error_msg) => {
                        // Menu stays empty behind the banner.
                        self.error_banner.show_error("Failed to load menu", Some(error_msg));
                    }
                }
            }

            TaskResult::DeckLoaded { title, result } => {
                self.message_overlay.clear_message();
                match result {
                    Ok(cards) => {
                        self.view = View::Deck(DeckSession::new(title, cards));
                    }
                    Err(error_msg) => {
                        // The menu underneath stays usable.
                        eprintln!("Deck load failed: {}", error_msg);
                        self.error_banner
                            .show_error("Failed to load flashcards.", Some(error_msg));
                    }
                }
            }
        }
    }

    fn apply_action(&mut self, action: UiAction) {
        match action {
            UiAction::OpenSet { id, title } => {
                self.error_banner.clear();
                self.message_overlay.set_message(format!("Loading \"{}\"...", title));
                self.task_manager.load_deck(id, title);
            }

            UiAction::DismissError => self.error_banner.clear(),

            UiAction::BackToMenu => {
                self.view = View::Menu;
            }

            UiAction::Flip => {
                if let View::Deck(session) = &mut self.view {
                    session.flip();
                }
            }

            UiAction::Next => {
                if let View::Deck(session) = &mut self.view {
                    session.next();
                    self.card_view.begin_slide(session.direction());
                }
            }

            UiAction::Previous => {
                if let View::Deck(session) = &mut self.view {
                    session.previous();
                    self.card_view.begin_slide(session.direction());
                }
            }

            UiAction::Shuffle => {
                if let View::Deck(session) = &mut self.view {
                    session.shuffle();
                    self.card_view.snap_face_down();
                }
            }

            UiAction::Reset => {
                if let View::Deck(session) = &mut self.view {
                    session.reset();
                    self.card_view.snap_face_down();
                }
            }

            UiAction::ToggleMode => {
                if let View::Deck(session) = &mut self.view {
                    session.toggle_mode();
                    self.card_view.snap_face_down();
                }
            }
        }
    }

    fn show_top_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }
}

impl eframe::App for FlashdeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let task_results = self.task_manager.poll_results();
        for result in task_results {
            self.handle_task_result(result);
        }

        self.show_top_bar(ctx);
        self.error_banner.show(ctx, &self.theme, &mut self.actions);

        egui::CentralPanel::default().show(ctx, |ui| {
            match &self.view {
                View::Menu => MenuView::show(ui, &self.menu, &self.theme, &mut self.actions),
                View::Deck(session) => {
                    self.card_view.show(ui, session, &self.theme, &mut self.actions)
                }
            }
        });

        self.message_overlay.show(ctx, &self.theme);

        let actions: Vec<UiAction> = self.actions.drain().collect();
        for action in actions {
            self.apply_action(action);
        }
    }
}
