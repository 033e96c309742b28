//! Injectable randomness for the tools that pick canned responses.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::{index, IndexedRandom};
use rand::SeedableRng;
use std::sync::Arc;

/// Pseudo-random source shared by the tools of one registry.
///
/// Seeded sources make tool output reproducible, which is what the tests
/// (and `--seed`) rely on. Clones share the same underlying generator.
#[derive(Clone)]
pub struct SharedRng {
    inner: Arc<Mutex<StdRng>>,
}

impl Default for SharedRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl SharedRng {
    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Deterministic generator for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is set, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or_else(Self::from_entropy)
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rng)),
        }
    }

    /// Uniformly pick one element. `None` only for an empty slice.
    pub fn choose<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut *self.inner.lock())
    }

    /// Pick up to `amount` distinct elements in random order.
    ///
    /// `amount` is clamped to `items.len()`.
    pub fn sample<'a, T>(&self, items: &'a [T], amount: usize) -> Vec<&'a T> {
        let amount = amount.min(items.len());
        let picked = index::sample(&mut *self.inner.lock(), items.len(), amount);
        picked.into_iter().map(|i| &items[i]).collect()
    }
}
