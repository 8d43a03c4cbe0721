pub mod deck;
pub mod errors;
pub mod models;
pub mod shuffle;
pub mod source;
pub mod tasks;

#[cfg(test)]
mod deck_tests;

pub use deck::{
    DeckSession,
    Direction,
};
pub use errors::FlashdeckError;
pub use models::{
    VocabCard,
    VocabSet,
};
