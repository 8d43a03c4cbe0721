// A simple ui action queue so the menu and card views don't need mutable
// references back into the app while they are being drawn.
#[derive(Debug, Clone)]
pub enum UiAction {
    // Menu
    OpenSet { id: String, title: String },
    DismissError,

    // Card view
    BackToMenu,
    Flip,
    Next,
    Previous,
    Shuffle,
    Reset,
    ToggleMode,
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
