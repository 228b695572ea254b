use homerow::combos::{
    combinations, custom_combinations, expected_count, generate, permutations, EnumerationMode,
};
use rstest::rstest;

fn letters(n: usize) -> Vec<char> {
    "dsafkljh".chars().take(n).collect()
}

// --- CARDINALITY ---
#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(2, 4)] // 2 + 2
#[case(3, 15)] // 3 + 6 + 6
#[case(4, 40)] // 4 + 12 + 24
#[case(8, 400)] // 8 + 56 + 336
fn test_permutation_counts_bounded_at_three(#[case] n: usize, #[case] expected: usize) {
    let items = letters(n);
    let groups = custom_combinations(&items);
    assert_eq!(groups.len(), expected);
    assert_eq!(expected_count(n, 3, EnumerationMode::Permutations), expected);
    assert!(groups.iter().all(|g| !g.is_empty() && g.len() <= 3));
}

#[rstest]
#[case(1, 1)]
#[case(2, 4)] // 2 + 2
#[case(3, 10)] // 3 + 6 + 1
#[case(4, 21)] // 4 + 12 + 4 + 1
#[case(8, 283)] // 8 + 56 + (256 - 1 - 8 - 28)
fn test_mixed_counts_unbounded(#[case] n: usize, #[case] expected: usize) {
    let items = letters(n);
    let groups = generate(&items, n, EnumerationMode::Mixed);
    assert_eq!(groups.len(), expected);
    assert_eq!(expected_count(n, n, EnumerationMode::Mixed), expected);
}

#[rstest]
#[case(1)]
#[case(4)]
#[case(8)]
fn test_combination_counts_are_power_set(#[case] n: usize) {
    let items = letters(n);
    let groups = generate(&items, n, EnumerationMode::Combinations);
    assert_eq!(groups.len(), (1 << n) - 1);
}

// --- CONCRETE SCENARIOS ---
#[test]
fn test_four_home_keys_permutations() {
    let items = vec!["d", "s", "a", "f"];
    let groups = generate(&items, 3, EnumerationMode::Permutations);

    assert_eq!(groups.len(), 40);
    assert!(groups[..24].iter().all(|g| g.len() == 3));
    assert!(groups[24..36].iter().all(|g| g.len() == 2));
    assert_eq!(groups[36..], [vec!["d"], vec!["s"], vec!["a"], vec!["f"]]);

    // First-element-major inside the size-3 block.
    assert_eq!(groups[0], vec!["d", "s", "a"]);
    assert_eq!(groups[1], vec!["d", "s", "f"]);
    assert_eq!(groups[2], vec!["d", "a", "s"]);
    assert_eq!(groups[6], vec!["s", "d", "a"]);
    assert_eq!(groups[23], vec!["f", "a", "s"]);

    // Size-2 block starts with d's pairs.
    assert_eq!(groups[24], vec!["d", "s"]);
    assert_eq!(groups[27], vec!["s", "d"]);
}

#[test]
fn test_two_keys_combination_mode() {
    let groups = generate(&["d", "s"], 2, EnumerationMode::Combinations);
    assert_eq!(groups, vec![vec!["d", "s"], vec!["d"], vec!["s"]]);
}

#[test]
fn test_mixed_keeps_both_pair_orders_but_one_triple() {
    let groups = generate(&["d", "s", "a"], 3, EnumerationMode::Mixed);
    assert_eq!(groups[0], vec!["d", "s", "a"]);
    assert_eq!(groups.iter().filter(|g| g.len() == 3).count(), 1);
    assert!(groups.contains(&vec!["d", "s"]));
    assert!(groups.contains(&vec!["s", "d"]));
}

// --- EDGE CASES ---
#[test]
fn test_empty_input() {
    let empty: Vec<&str> = Vec::new();
    for mode in [
        EnumerationMode::Permutations,
        EnumerationMode::Combinations,
        EnumerationMode::Mixed,
    ] {
        assert!(generate(&empty, 3, mode).is_empty());
    }
    assert!(custom_combinations(&empty).is_empty());
}

#[test]
fn test_zero_bound_is_empty() {
    assert!(generate(&["d", "s"], 0, EnumerationMode::Permutations).is_empty());
}

#[test]
fn test_bound_clamps_to_input_length() {
    let clamped = generate(&["d", "s"], 10, EnumerationMode::Permutations);
    let exact = generate(&["d", "s"], 2, EnumerationMode::Permutations);
    assert_eq!(clamped, exact);
    assert_eq!(clamped.len(), 4);
}

#[test]
fn test_singletons_follow_input_order() {
    let items = letters(5);
    let groups = generate(&items, 1, EnumerationMode::Mixed);
    let flat: Vec<char> = groups.into_iter().flatten().collect();
    assert_eq!(flat, items);
}

#[test]
fn test_primitives_agree_with_generate() {
    let items = letters(4);
    assert_eq!(permutations(&items, 3).len(), 24);
    assert_eq!(combinations(&items, 3).len(), 4);
    assert_eq!(combinations(&items, 4), vec![items.clone()]);
    assert!(combinations(&items, 0).is_empty());
}

#[test]
fn test_repeated_calls_are_identical() {
    let items = letters(6);
    let a = generate(&items, 6, EnumerationMode::Mixed);
    let b = generate(&items, 6, EnumerationMode::Mixed);
    assert_eq!(a, b);
}
