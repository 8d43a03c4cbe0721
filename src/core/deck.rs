use super::{
    models::VocabCard,
    shuffle::shuffle_cards,
};

/// Rendering hint for the card transition animation. Carries no invariant
/// beyond matching the most recent navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Forward,
    Backward,
    #[default]
    None,
}

/// State of one open deck: the original order as fetched, the active
/// (possibly shuffled) order, and the cursor/flip/mode flags.
///
/// The original order is never mutated; the active deck is always a
/// permutation of it. The cursor stays in `[0, len)` for any non-empty deck,
/// and every operation other than `flip` clears the flip flag so a newly
/// shown card starts face-down.
pub struct DeckSession {
    title: String,
    original: Vec<VocabCard>,
    active: Vec<VocabCard>,
    cursor: usize,
    flipped: bool,
    def_first: bool,
    direction: Direction,
}

impl DeckSession {
    pub fn new(title: impl Into<String>, cards: Vec<VocabCard>) -> Self {
        Self {
            title: title.into(),
            active: cards.clone(),
            original: cards,
            cursor: 0,
            flipped: false,
            def_first: false,
            direction: Direction::None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn flipped(&self) -> bool {
        self.flipped
    }

    pub fn def_first(&self) -> bool {
        self.def_first
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn current_card(&self) -> Option<&VocabCard> {
        self.active.get(self.cursor)
    }

    /// Text on the front face: the definition in def-first mode, the word
    /// otherwise. Pure function of the current card and the mode flag.
    pub fn front_text(&self) -> Option<&str> {
        self.current_card().map(|card| {
            if self.def_first {
                card.definition.as_str()
            } else {
                card.word.as_str()
            }
        })
    }

    /// Text on the back face: whichever field the front is not showing.
    pub fn back_text(&self) -> Option<&str> {
        self.current_card().map(|card| {
            if self.def_first {
                card.word.as_str()
            } else {
                card.definition.as_str()
            }
        })
    }

    pub fn next(&mut self) {
        if self.active.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.active.len();
        self.flipped = false;
        self.direction = Direction::Forward;
    }

    pub fn previous(&mut self) {
        if self.active.is_empty() {
            return;
        }
        self.cursor = (self.cursor + self.active.len() - 1) % self.active.len();
        self.flipped = false;
        self.direction = Direction::Backward;
    }

    /// Reshuffles the current active order, so repeated shuffles compound
    /// rather than re-dealing from the original.
    pub fn shuffle(&mut self) {
        self.active = shuffle_cards(&self.active);
        self.cursor = 0;
        self.flipped = false;
        self.direction = Direction::None;
    }

    /// Restores the deck exactly as fetched.
    pub fn reset(&mut self) {
        self.active = self.original.clone();
        self.cursor = 0;
        self.flipped = false;
        self.direction = Direction::None;
    }

    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Swaps which field is the front face. Clears the flip flag so a stale
    /// back face is never shown under the swapped front.
    pub fn toggle_mode(&mut self) {
        self.def_first = !self.def_first;
        self.flipped = false;
    }
}
