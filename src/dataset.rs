//! Synthetic key streams for the benchmark trials.
//!
//! Each scenario is a deterministic generation policy, so a (scenario, count)
//! pair always produces the same stream and a trial's remove pass can replay
//! an exact copy of its insert pass.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Seed for the `average` scenario's RNG. Fixed so results reproduce
/// run-to-run.
pub const AVERAGE_SEED: u64 = 42;

/// Lower bound (inclusive) of the `average` scenario's key range.
pub const AVERAGE_KEY_MIN: i64 = 1;
/// Upper bound (inclusive) of the `average` scenario's key range.
pub const AVERAGE_KEY_MAX: i64 = 1_000_000;

/// A named key-generation policy.
///
/// The labels are kept literal: `optimistic` means sequential ascending keys
/// and `pessimistic` means exact multiples of the bucket count, regardless of
/// whether either is truly best or worst for a given bucket-index function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Sequential ascending keys `0, 1, 2, …`.
    Optimistic,
    /// Uniform draws from `[AVERAGE_KEY_MIN, AVERAGE_KEY_MAX]`, fixed seed.
    Average,
    /// Multiples of the bucket count; all keys collide in bucket 0 under
    /// plain modulo.
    Pessimistic,
}

impl Scenario {
    /// All scenarios, in reporting order.
    pub const ALL: [Scenario; 3] = [Scenario::Optimistic, Scenario::Average, Scenario::Pessimistic];

    /// The scenario's report label.
    pub fn label(self) -> &'static str {
        match self {
            Scenario::Optimistic => "optimistic",
            Scenario::Average => "average",
            Scenario::Pessimistic => "pessimistic",
        }
    }

    /// Resolves a label back to its scenario. Unknown labels resolve to
    /// `None`.
    pub fn from_label(label: &str) -> Option<Scenario> {
        Scenario::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// Generates the key stream for `scenario`.
///
/// `table_size` only shapes the `pessimistic` stream; the other scenarios
/// ignore it.
pub fn generate(scenario: Scenario, n: usize, table_size: usize) -> Vec<i64> {
    match scenario {
        Scenario::Optimistic => (0..n as i64).collect(),
        Scenario::Average => {
            let mut rng = SmallRng::seed_from_u64(AVERAGE_SEED);
            (0..n)
                .map(|_| rng.random_range(AVERAGE_KEY_MIN..=AVERAGE_KEY_MAX))
                .collect()
        }
        Scenario::Pessimistic => (0..n as i64).map(|i| i * table_size as i64).collect(),
    }
}

/// Label-driven variant of [`generate`].
///
/// Any label that names no scenario yields an empty stream rather than an
/// error; downstream passes over it simply do nothing.
pub fn generate_labeled(label: &str, n: usize, table_size: usize) -> Vec<i64> {
    Scenario::from_label(label)
        .map(|scenario| generate(scenario, n, table_size))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash_fn::HashFn;

    #[test]
    fn optimistic_is_sequential() {
        assert_eq!(generate(Scenario::Optimistic, 5, 10007), vec![0, 1, 2, 3, 4]);
        assert!(generate(Scenario::Optimistic, 0, 10007).is_empty());
    }

    #[test]
    fn pessimistic_pins_every_key_to_bucket_zero() {
        let keys = generate(Scenario::Pessimistic, 100, 10007);
        assert_eq!(keys[0], 0);
        assert_eq!(keys[1], 10007);
        for &key in &keys {
            assert_eq!(HashFn::Modulo.bucket(key, 10007), 0);
        }
    }

    #[test]
    fn average_is_reproducible_and_in_range() {
        let first = generate(Scenario::Average, 1000, 10007);
        let second = generate(Scenario::Average, 1000, 10007);
        assert_eq!(first, second);
        assert_eq!(first.len(), 1000);
        for &key in &first {
            assert!((AVERAGE_KEY_MIN..=AVERAGE_KEY_MAX).contains(&key));
        }

        // A shorter stream is a prefix of a longer one: same seed, same draws.
        let three = generate(Scenario::Average, 3, 10007);
        assert_eq!(three, first[..3]);
    }

    #[test]
    fn table_size_only_shapes_pessimistic() {
        assert_eq!(
            generate(Scenario::Optimistic, 10, 7),
            generate(Scenario::Optimistic, 10, 10007)
        );
        assert_eq!(
            generate(Scenario::Average, 10, 7),
            generate(Scenario::Average, 10, 10007)
        );
        assert_ne!(
            generate(Scenario::Pessimistic, 10, 7),
            generate(Scenario::Pessimistic, 10, 10007)
        );
    }

    #[test]
    fn labels_round_trip() {
        for scenario in Scenario::ALL {
            assert_eq!(Scenario::from_label(scenario.label()), Some(scenario));
        }
        assert_eq!(Scenario::from_label("worst-case"), None);
    }

    #[test]
    fn unknown_label_yields_empty_stream() {
        assert!(generate_labeled("worst-case", 100, 10007).is_empty());
        assert!(generate_labeled("", 100, 10007).is_empty());
        assert_eq!(
            generate_labeled("pessimistic", 4, 3),
            generate(Scenario::Pessimistic, 4, 3)
        );
    }
}
