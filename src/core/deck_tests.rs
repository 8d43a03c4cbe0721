use crate::core::{
    deck::{
        DeckSession,
        Direction,
    },
    models::VocabCard,
};

fn card(word: &str, definition: &str) -> VocabCard {
    VocabCard { word: word.to_string(), definition: definition.to_string() }
}

fn sample_deck() -> Vec<VocabCard> {
    vec![card("cat", "a small feline"), card("dog", "a domestic canine")]
}

fn numbered_deck(n: usize) -> Vec<VocabCard> {
    (0..n).map(|i| card(&format!("word {i}"), &format!("definition {i}"))).collect()
}

#[test]
fn next_wraps_forward() {
    let mut session = DeckSession::new("Animals", sample_deck());
    assert_eq!(session.cursor(), 0);

    session.next();
    assert_eq!(session.cursor(), 1);
    assert_eq!(session.direction(), Direction::Forward);

    session.next();
    assert_eq!(session.cursor(), 0);
}

#[test]
fn previous_wraps_backward() {
    let mut session = DeckSession::new("Animals", sample_deck());

    session.previous();
    assert_eq!(session.cursor(), 1);
    assert_eq!(session.direction(), Direction::Backward);

    session.previous();
    assert_eq!(session.cursor(), 0);
}

#[test]
fn full_cycle_returns_to_start() {
    for n in 1..=7 {
        let mut session = DeckSession::new("Cycle", numbered_deck(n));
        session.next();
        let start = session.cursor();

        for _ in 0..n {
            session.next();
        }
        assert_eq!(session.cursor(), start, "next cycle broke at length {n}");

        for _ in 0..n {
            session.previous();
        }
        assert_eq!(session.cursor(), start, "previous cycle broke at length {n}");
    }
}

#[test]
fn every_operation_clears_flip() {
    let mut session = DeckSession::new("Animals", sample_deck());

    session.flip();
    assert!(session.flipped());
    session.next();
    assert!(!session.flipped());

    session.flip();
    session.previous();
    assert!(!session.flipped());

    session.flip();
    session.shuffle();
    assert!(!session.flipped());

    session.flip();
    session.reset();
    assert!(!session.flipped());

    session.flip();
    session.toggle_mode();
    assert!(!session.flipped());
}

#[test]
fn shuffle_keeps_cards_and_resets_cursor() {
    let original = numbered_deck(20);
    let mut session = DeckSession::new("Big", original.clone());
    session.next();
    session.next();

    session.shuffle();
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.len(), original.len());

    let mut seen: Vec<&VocabCard> = Vec::new();
    for _ in 0..session.len() {
        seen.push(original.iter().find(|c| Some(*c) == session.current_card()).unwrap());
        session.next();
    }
    seen.sort_by(|a, b| a.word.cmp(&b.word));
    seen.dedup();
    assert_eq!(seen.len(), original.len());
}

#[test]
fn reset_restores_fetched_order_after_repeated_shuffles() {
    let original = numbered_deck(12);
    let mut session = DeckSession::new("Big", original.clone());

    for _ in 0..5 {
        session.shuffle();
    }
    session.reset();

    for expected in &original {
        assert_eq!(session.current_card(), Some(expected));
        session.next();
    }
}

#[test]
fn mode_toggle_is_untouched_by_navigation() {
    let mut session = DeckSession::new("Animals", sample_deck());
    session.toggle_mode();
    assert!(session.def_first());

    session.next();
    session.shuffle();
    session.reset();
    assert!(session.def_first());
}

#[test]
fn walkthrough_scenario() {
    let mut session = DeckSession::new("Animals", sample_deck());

    // Initial: cursor 0, face-down, word first.
    assert_eq!(session.front_text(), Some("cat"));
    assert!(!session.flipped());

    session.flip();
    assert!(session.flipped());
    assert_eq!(session.back_text(), Some("a small feline"));

    session.next();
    assert_eq!(session.cursor(), 1);
    assert!(!session.flipped());
    assert_eq!(session.front_text(), Some("dog"));

    session.next();
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.front_text(), Some("cat"));
}

#[test]
fn mode_toggle_swaps_faces() {
    let mut session = DeckSession::new("Animals", sample_deck());
    session.toggle_mode();

    assert_eq!(session.front_text(), Some("a small feline"));
    assert_eq!(session.back_text(), Some("cat"));
}

#[test]
fn empty_deck_renders_nothing_and_ignores_operations() {
    let mut session = DeckSession::new("Empty", Vec::new());

    assert!(session.is_empty());
    assert_eq!(session.current_card(), None);
    assert_eq!(session.front_text(), None);

    session.next();
    session.previous();
    session.shuffle();
    session.reset();
    assert_eq!(session.cursor(), 0);
    assert_eq!(session.current_card(), None);
}
