use crate::error::{HomerowError, HrResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use strum_macros::{Display, EnumIter, EnumString};

/// Bound used by the permutation-only generator.
pub const CUSTOM_MAX_GROUP: usize = 3;

/// How groups of two or more keys are enumerated.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EnumerationMode {
    /// Every ordering of a group is its own entry.
    Permutations,
    /// One entry per set of keys, members kept in input order.
    Combinations,
    /// Orderings for pairs, sets for three keys and up.
    Mixed,
}

impl EnumerationMode {
    /// Whether groups of size `k` are ordered arrangements under this mode.
    pub fn is_ordered(&self, k: usize) -> bool {
        match self {
            Self::Permutations => true,
            Self::Combinations => k <= 1,
            Self::Mixed => k <= 2,
        }
    }
}

/// All `k`-permutations of `items`, first-element-major.
pub fn permutations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    if k == 0 || k > items.len() {
        return Vec::new();
    }
    if k == 1 {
        return items.iter().map(|item| vec![item.clone()]).collect();
    }

    let mut out = Vec::new();
    for (i, first) in items.iter().enumerate() {
        let rest: Vec<T> = items[..i].iter().chain(&items[i + 1..]).cloned().collect();
        for tail in permutations(&rest, k - 1) {
            let mut group = Vec::with_capacity(k);
            group.push(first.clone());
            group.extend(tail);
            out.push(group);
        }
    }
    out
}

/// All `k`-combinations of `items`, lexicographic by position.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    if k == 0 || k > items.len() {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(k);
    choose_or_skip(items, k, &mut current, &mut out);
    out
}

fn choose_or_skip<T: Clone>(rest: &[T], k: usize, current: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
    if current.len() == k {
        out.push(current.clone());
        return;
    }
    // Not enough items left to finish the group.
    if rest.len() < k - current.len() {
        return;
    }

    current.push(rest[0].clone());
    choose_or_skip(&rest[1..], k, current, out);
    current.pop();

    choose_or_skip(&rest[1..], k, current, out);
}

/// Every group of `items` with size in `1..=max_size`, longest first.
///
/// `max_size` is clamped to `items.len()`. Within one size the order is the
/// enumeration order of the chosen algorithm, so the result is deterministic.
/// `items` must not contain duplicates; see [`ensure_unique`].
pub fn generate<T: Clone>(items: &[T], max_size: usize, mode: EnumerationMode) -> Vec<Vec<T>> {
    let max = max_size.min(items.len());
    let mut result: Vec<Vec<T>> = Vec::new();

    for k in 1..=max {
        let groups = if mode.is_ordered(k) {
            permutations(items, k)
        } else {
            combinations(items, k)
        };
        result.extend(groups);
    }

    // Stable: keeps generation order inside a size class.
    result.sort_by(|a, b| b.len().cmp(&a.len()));
    result
}

/// Permutations of every size up to three.
pub fn custom_combinations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    generate(items, CUSTOM_MAX_GROUP, EnumerationMode::Permutations)
}

/// Number of groups `generate` yields for `n` distinct items.
pub fn expected_count(n: usize, max_size: usize, mode: EnumerationMode) -> usize {
    let max = max_size.min(n);
    (1..=max)
        .map(|k| {
            if mode.is_ordered(k) {
                falling_factorial(n, k)
            } else {
                binomial(n, k)
            }
        })
        .sum()
}

fn falling_factorial(n: usize, k: usize) -> usize {
    (n - k + 1..=n).product()
}

fn binomial(n: usize, k: usize) -> usize {
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Rejects a symbol list with repeated entries.
pub fn ensure_unique<T: Eq + Hash + Debug>(items: &[T]) -> HrResult<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item) {
            return Err(HomerowError::InvalidKeymap(format!(
                "duplicate key {:?}",
                item
            )));
        }
    }
    Ok(())
}
