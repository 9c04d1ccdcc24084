//! Bijection enumeration
//!
//! A bijection between two categories of N items is a permutation of
//! `0..N`: position `x` of the anchor category pairs with position
//! `targets[x]` of the other. Permutations are produced lazily in
//! lexicographic order, so each search level holds one `Vec` instead of all
//! N! of them.

/// One-to-one pairing of anchor positions with positions in another category
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bijection {
    targets: Vec<usize>,
}

impl Bijection {
    /// `(x, y)` position pairs; no `x` and no `y` appears twice
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.targets.iter().copied().enumerate()
    }
}

/// Iterator over every bijection of size `n`, starting from the identity
#[derive(Debug, Clone)]
pub struct Bijections {
    current: Vec<usize>,
    done: bool,
}

impl Bijections {
    pub fn new(n: usize) -> Self {
        Self {
            current: (0..n).collect(),
            done: false,
        }
    }
}

impl Iterator for Bijections {
    type Item = Bijection;

    fn next(&mut self) -> Option<Bijection> {
        if self.done {
            return None;
        }
        let bijection = Bijection {
            targets: self.current.clone(),
        };
        self.done = !next_permutation(&mut self.current);
        Some(bijection)
    }
}

/// Advance to the next lexicographic permutation, false after the last one
fn next_permutation(values: &mut [usize]) -> bool {
    let Some(pivot) = values.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    // values[pivot + 1..] is non-increasing, so this finds the rightmost successor
    let successor = values
        .iter()
        .rposition(|&v| v > values[pivot])
        .unwrap_or(pivot + 1);
    values.swap(pivot, successor);
    values[pivot + 1..].reverse();
    true
}

/// n! as u128, `None` once it overflows
pub fn factorial(n: usize) -> Option<u128> {
    (1..=n as u128).try_fold(1u128, |acc, k| acc.checked_mul(k))
}

/// Number of full assignments for `categories` categories of `size` items
pub fn search_space(size: usize, categories: usize) -> Option<u128> {
    let per_category = factorial(size)?;
    let exponent = u32::try_from(categories.saturating_sub(1)).ok()?;
    per_category.checked_pow(exponent)
}
