use crate::core::{
    VocabCard,
    VocabSet,
};

#[derive(Debug, Clone)]
pub enum TaskResult {
    MenuLoaded(Result<Vec<VocabSet>, String>),
    DeckLoaded { title: String, result: Result<Vec<VocabCard>, String> },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::MenuLoaded(_) => "menu_loaded",
            TaskResult::DeckLoaded { .. } => "deck_loaded",
        }
    }
}
