//! Deterministic random number generation and tie-breaking.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Create independent per-match streams for self-play
//! - **Serializable**: O(1) state capture and restore
//! - **Injectable**: The AI only sees the `TieBreak` trait, so tests can pin
//!   tie outcomes with `FirstTie` or `FixedTie`
//!
//! ```
//! use shadow_pursuit::core::{GameRng, TieBreak};
//!
//! let mut rng = GameRng::new(42);
//! let mut match_rng = rng.fork();
//!
//! let pick = match_rng.pick(3);
//! assert!(pick < 3);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniform choices among equally scored candidates.
pub trait TieBreak {
    /// Pick an index in `0..candidates`. `candidates` is always at least 1.
    fn pick(&mut self, candidates: usize) -> usize;
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl TieBreak for GameRng {
    fn pick(&mut self, candidates: usize) -> usize {
        if candidates <= 1 {
            0
        } else {
            self.gen_range_usize(0..candidates)
        }
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// Always picks the first tied candidate (lowest lane index).
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstTie;

impl TieBreak for FirstTie {
    fn pick(&mut self, _candidates: usize) -> usize {
        0
    }
}

/// Picks a fixed position among tied candidates, wrapping when fewer exist.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedTie(pub usize);

impl TieBreak for FixedTie {
    fn pick(&mut self, candidates: usize) -> usize {
        self.0 % candidates.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(rng1.fork().seed(), rng2.fork().seed());
        assert_ne!(rng1.fork().seed(), rng1.seed());
    }

    #[test]
    fn test_pick_stays_in_range() {
        let mut rng = GameRng::new(7);
        for n in 1..6 {
            for _ in 0..50 {
                assert!(rng.pick(n) < n);
            }
        }
    }

    #[test]
    fn test_pick_covers_all_candidates() {
        let mut rng = GameRng::new(3);
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[rng.pick(3)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_single_candidate_consumes_nothing() {
        let mut a = GameRng::new(11);
        let mut b = GameRng::new(11);
        assert_eq!(a.pick(1), 0);
        assert_eq!(a.state(), b.state());
        assert_eq!(a.pick(4), b.pick(4));
    }

    #[test]
    fn test_fixed_ties() {
        assert_eq!(FirstTie.pick(4), 0);
        assert_eq!(FixedTie(2).pick(4), 2);
        assert_eq!(FixedTie(5).pick(3), 2);
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            rng.pick(5);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.pick(5)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.pick(5)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
