use crate::models::{Combo, FoodItem};

/// Default upper bound on items per meal
pub const MAX_COMBO_SIZE: usize = 2;

/// Enumerate every singleton and unordered pair of eligible items
pub fn generate_combos<'a>(eligible: &[&'a FoodItem]) -> Vec<Combo<'a>> {
    generate_combos_up_to(eligible, MAX_COMBO_SIZE)
}

/// Enumerate every combination of 1 to `max_size` distinct items
///
/// Combinations are emitted depth-first in index order, so each prefix is
/// followed by its extensions: `[a], [a, b], [a, c], [b], [b, c], [c]` for
/// three items and `max_size = 2`. Work grows as O(n^max_size).
pub fn generate_combos_up_to<'a>(eligible: &[&'a FoodItem], max_size: usize) -> Vec<Combo<'a>> {
    let mut combos = Vec::with_capacity(combo_count(eligible.len(), max_size));
    let mut current = Vec::with_capacity(max_size);

    extend_from(eligible, 0, max_size, &mut current, &mut combos);

    tracing::debug!(
        eligible = eligible.len(),
        max_size,
        combos = combos.len(),
        "Generated meal combinations"
    );

    combos
}

fn extend_from<'a>(
    eligible: &[&'a FoodItem],
    start: usize,
    max_size: usize,
    current: &mut Vec<&'a FoodItem>,
    combos: &mut Vec<Combo<'a>>,
) {
    if current.len() == max_size {
        return;
    }

    for (index, item) in eligible.iter().enumerate().skip(start) {
        current.push(*item);
        combos.push(Combo::new(current.clone()));
        extend_from(eligible, index + 1, max_size, current, combos);
        current.pop();
    }
}

/// Number of combinations of 1 to `max_size` items drawn from `n`
pub fn combo_count(n: usize, max_size: usize) -> usize {
    let mut total = 0usize;
    let mut binomial = 1usize;
    for k in 1..=max_size.min(n) {
        binomial = binomial * (n - k + 1) / k;
        total += binomial;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_items(count: usize) -> Vec<FoodItem> {
        (0..count)
            .map(|i| FoodItem {
                name: format!("item{}", i),
                kcal: 100.0,
                protein_g: 5.0,
                carbs_g: 10.0,
                price_ksh: 20.0,
                tags: Default::default(),
            })
            .collect()
    }

    fn names<'a>(combo: &Combo<'a>) -> Vec<&'a str> {
        combo.items.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn test_four_items_yield_ten_combos() {
        let items = create_items(4);
        let eligible: Vec<&FoodItem> = items.iter().collect();

        let combos = generate_combos(&eligible);

        assert_eq!(combos.len(), 10);
        assert_eq!(combos.iter().filter(|c| c.len() == 1).count(), 4);
        assert_eq!(combos.iter().filter(|c| c.len() == 2).count(), 6);
    }

    #[test]
    fn test_enumeration_order() {
        let items = create_items(3);
        let eligible: Vec<&FoodItem> = items.iter().collect();

        let order: Vec<Vec<&str>> = generate_combos(&eligible).iter().map(names).collect();

        assert_eq!(
            order,
            vec![
                vec!["item0"],
                vec!["item0", "item1"],
                vec!["item0", "item2"],
                vec!["item1"],
                vec!["item1", "item2"],
                vec!["item2"],
            ]
        );
    }

    #[test]
    fn test_no_self_pairs_or_duplicates() {
        let items = create_items(6);
        let eligible: Vec<&FoodItem> = items.iter().collect();

        let combos = generate_combos(&eligible);
        let mut seen = std::collections::HashSet::new();
        for combo in &combos {
            let key = names(combo);
            if key.len() == 2 {
                assert_ne!(key[0], key[1]);
            }
            let mut sorted = key.clone();
            sorted.sort();
            assert!(seen.insert(sorted), "duplicate combo {:?}", key);
        }
        assert_eq!(combos.len(), 6 + 6 * 5 / 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(generate_combos(&[]).is_empty());
    }

    #[test]
    fn test_larger_combo_size() {
        let items = create_items(5);
        let eligible: Vec<&FoodItem> = items.iter().collect();

        let combos = generate_combos_up_to(&eligible, 3);

        assert_eq!(combos.len(), 5 + 10 + 10);
        assert_eq!(combos.len(), combo_count(5, 3));
        assert!(combos.iter().all(|c| (1..=3).contains(&c.len())));
    }

    #[test]
    fn test_combo_count() {
        assert_eq!(combo_count(0, 2), 0);
        assert_eq!(combo_count(1, 2), 1);
        assert_eq!(combo_count(4, 2), 10);
        assert_eq!(combo_count(10, 2), 55);
        assert_eq!(combo_count(3, 5), 7);
    }
}
