//! The short-horizon plan cache.

use std::collections::VecDeque;

use mantle_core::{Action, Point};
use rand::Rng;

/// A memoized prefix of the most recent oracle path, plus the destination
/// it leads to.
///
/// Only a bounded, randomly sized prefix of each fetched path is retained
/// (1..=`max_prefix` actions). The bound limits how stale a plan can get
/// before the next re-evaluation; the random size staggers re-query turns
/// when several planner instances run against shared terrain. The length
/// is sampled from the injected RNG, so a seeded run replays identically.
#[derive(Debug)]
pub struct PlanCache {
    destination: Option<Point>,
    actions: VecDeque<Action>,
    max_prefix: usize,
}

impl PlanCache {
    /// Create an empty cache with the given prefix bound.
    pub fn new(max_prefix: usize) -> Self {
        Self {
            destination: None,
            actions: VecDeque::new(),
            max_prefix,
        }
    }

    /// Whether a cached action is available.
    pub fn has_next(&self) -> bool {
        !self.actions.is_empty()
    }

    /// Number of cached actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The destination the cached actions lead to, while any remain.
    pub fn peek_destination(&self) -> Option<Point> {
        if self.has_next() {
            self.destination
        } else {
            None
        }
    }

    /// The next cached action without consuming it.
    pub fn peek_next(&self) -> Option<&Action> {
        self.actions.front()
    }

    /// Consume and return the next cached action.
    ///
    /// Draining the last action also clears the destination.
    pub fn pop_next(&mut self) -> Option<Action> {
        let action = self.actions.pop_front();
        if self.actions.is_empty() {
            self.destination = None;
        }
        action
    }

    /// Replace the cached plan with a random-length prefix of `path`.
    ///
    /// The retained length is uniform in 1..=`max_prefix`, clamped to the
    /// path length. An empty `path` just invalidates.
    pub fn replace<R: Rng>(&mut self, destination: Point, path: &[Action], rng: &mut R) {
        if path.is_empty() {
            self.invalidate();
            return;
        }
        let keep = rng.random_range(1..=self.max_prefix).min(path.len());
        self.actions = path[..keep].iter().copied().collect();
        self.destination = Some(destination);
    }

    /// Drop the cached plan entirely.
    pub fn invalidate(&mut self) {
        self.actions.clear();
        self.destination = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mantle_core::Heading;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn moves(n: usize) -> Vec<Action> {
        vec![Action::Move(Heading::East); n]
    }

    const DEST: Point = Point::new(9, 9);

    #[test]
    fn new_cache_is_empty() {
        let cache = PlanCache::new(15);
        assert!(!cache.has_next());
        assert_eq!(cache.peek_destination(), None);
        assert_eq!(cache.peek_next(), None);
    }

    #[test]
    fn replace_keeps_between_one_and_max_prefix() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut cache = PlanCache::new(15);
            cache.replace(DEST, &moves(40), &mut rng);
            assert!((1..=15).contains(&cache.len()), "kept {}", cache.len());
            assert_eq!(cache.peek_destination(), Some(DEST));
        }
    }

    #[test]
    fn replace_clamps_to_path_length() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut cache = PlanCache::new(15);
            cache.replace(DEST, &moves(2), &mut rng);
            assert!((1..=2).contains(&cache.len()));
        }
    }

    #[test]
    fn replace_is_deterministic_for_a_seed() {
        let mut a = PlanCache::new(15);
        let mut b = PlanCache::new(15);
        a.replace(DEST, &moves(40), &mut ChaCha8Rng::seed_from_u64(7));
        b.replace(DEST, &moves(40), &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn replace_with_empty_path_invalidates() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut cache = PlanCache::new(15);
        cache.replace(DEST, &moves(5), &mut rng);
        cache.replace(DEST, &[], &mut rng);
        assert!(!cache.has_next());
        assert_eq!(cache.peek_destination(), None);
    }

    #[test]
    fn draining_clears_destination() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut cache = PlanCache::new(15);
        cache.replace(DEST, &moves(3), &mut rng);
        while cache.pop_next().is_some() {}
        assert_eq!(cache.peek_destination(), None);
        assert_eq!(cache.pop_next(), None);
    }

    #[test]
    fn invalidate_drops_everything() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut cache = PlanCache::new(15);
        cache.replace(DEST, &moves(10), &mut rng);
        cache.invalidate();
        assert!(!cache.has_next());
        assert_eq!(cache.peek_destination(), None);
    }

    proptest! {
        #[test]
        fn replace_invariants(
            len in 1usize..60,
            max in 1usize..20,
            seed in any::<u64>(),
        ) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut cache = PlanCache::new(max);
            let path = moves(len);
            cache.replace(DEST, &path, &mut rng);
            prop_assert!(cache.len() >= 1);
            prop_assert!(cache.len() <= max.min(len));
            prop_assert_eq!(cache.peek_destination(), Some(DEST));
            prop_assert_eq!(cache.peek_next(), Some(&path[0]));
        }
    }
}
