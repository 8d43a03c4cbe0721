use rand::Rng;

/// Fisher-Yates over a copy. The input order is left untouched so a deck can
/// always be restored to it later.
pub fn shuffle_cards<T: Clone>(cards: &[T]) -> Vec<T> {
    let mut shuffled = cards.to_vec();
    shuffle_in_place(&mut shuffled, &mut rand::rng());
    shuffled
}

fn shuffle_in_place<T, R: Rng>(cards: &mut [T], rng: &mut R) {
    for i in (1..cards.len()).rev() {
        let j = rng.random_range(0..=i);
        cards.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn preserves_elements_and_input_order() {
        let original: Vec<u32> = (0..50).collect();
        let shuffled = shuffle_cards(&original);

        assert_eq!(shuffled.len(), original.len());
        assert_eq!(original, (0..50).collect::<Vec<u32>>());

        let mut counts: HashMap<u32, usize> = HashMap::new();
        for value in &shuffled {
            *counts.entry(*value).or_default() += 1;
        }
        assert!(original.iter().all(|v| counts.get(v) == Some(&1)));
    }

    #[test]
    fn trivial_inputs_return_copies() {
        let empty: Vec<u32> = Vec::new();
        assert!(shuffle_cards(&empty).is_empty());
        assert_eq!(shuffle_cards(&[7]), vec![7]);
    }

    #[test]
    fn every_position_eventually_moves() {
        // With 8 elements and 200 shuffles the odds of any index staying
        // fixed every time are negligible.
        let original: Vec<u32> = (0..8).collect();
        let mut moved = vec![false; original.len()];

        for _ in 0..200 {
            let shuffled = shuffle_cards(&original);
            for (i, value) in shuffled.iter().enumerate() {
                if *value != original[i] {
                    moved[i] = true;
                }
            }
        }

        assert!(moved.iter().all(|m| *m));
    }
}
