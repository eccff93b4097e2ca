//! Random choice
//!
//! All randomness in the engine goes through [`Chooser`], so callers decide
//! whether picks are seeded, entropy-backed or scripted.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks an index in `0..len`
///
/// Implemented for any `FnMut(usize) -> usize`, so tests can pass a closure
/// such as `|_| 0`.
pub trait Chooser {
    /// Return an index in `0..len`; `len` is never zero
    fn pick(&mut self, len: usize) -> usize;
}

impl<F: FnMut(usize) -> usize> Chooser for F {
    fn pick(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Uniform random chooser
pub struct RandomChooser {
    rng: StdRng,
}

impl RandomChooser {
    /// Chooser seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible chooser
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl Chooser for RandomChooser {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Pick one element of `items`, or `None` if it is empty
///
/// Out-of-range picks are clamped to the last element.
pub fn choose<'a, T, C: Chooser + ?Sized>(items: &'a [T], chooser: &mut C) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = chooser.pick(items.len()).min(items.len() - 1);
    items.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_chooser_is_used() {
        let items = ["a", "b", "c"];
        assert_eq!(choose(&items, &mut |_: usize| 1), Some(&"b"));
        assert_eq!(choose(&items, &mut |len: usize| len - 1), Some(&"c"));
    }

    #[test]
    fn choose_from_empty_is_none() {
        let items: [u8; 0] = [];
        assert_eq!(choose(&items, &mut |_: usize| 0), None);
    }

    #[test]
    fn out_of_range_pick_is_clamped() {
        let items = [1, 2];
        assert_eq!(choose(&items, &mut |_: usize| 10), Some(&2));
    }

    #[test]
    fn seeded_chooser_is_reproducible() {
        let items: Vec<u32> = (0..100).collect();
        let mut first = RandomChooser::seeded(7);
        let mut second = RandomChooser::seeded(7);

        for _ in 0..20 {
            assert_eq!(choose(&items, &mut first), choose(&items, &mut second));
        }
    }

    #[test]
    fn random_chooser_stays_in_range() {
        let mut chooser = RandomChooser::new();
        for len in 1..50 {
            assert!(chooser.pick(len) < len);
        }
    }
}
