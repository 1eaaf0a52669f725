//! RNG module - seedable randomness and the anti-streak piece selector
//!
//! The selector is deliberately not a 7-bag. Each draw is a uniform pick from
//! all seven kinds (a shuffle, take first), except that once one kind has been
//! dealt twice in a row it is excluded from the next draw.
//!
//! Also provides a simple LCG so that games are reproducible from a seed.

use crate::types::{PieceKind, MAX_CONSECUTIVE_SAME_PIECE};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG with a power-of-two modulus
    /// cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        assert!(max > 0, "next_range called with an empty range");
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// History the anti-streak rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionHistory {
    pub current: Option<PieceKind>,
    pub previous: Option<PieceKind>,
    /// How many consecutive selections returned `current`.
    pub consecutive: u32,
}

/// Draw the next kind and return the updated history.
///
/// This is the pure form of the policy; [`PieceSelector`] wraps it with an
/// owned history.
pub fn select_next(history: SelectionHistory, rng: &mut SimpleRng) -> SelectionHistory {
    let streak_capped = history.consecutive >= MAX_CONSECUTIVE_SAME_PIECE
        && history.current.is_some()
        && history.current == history.previous;

    if streak_capped {
        let mut candidates = [PieceKind::I; 6];
        let mut n = 0;
        for kind in PieceKind::ALL {
            if Some(kind) != history.current {
                candidates[n] = kind;
                n += 1;
            }
        }
        debug_assert_eq!(n, candidates.len());
        let pick = candidates[rng.next_range(n as u32) as usize];
        SelectionHistory {
            current: Some(pick),
            previous: history.current,
            consecutive: 1,
        }
    } else {
        let mut bag = PieceKind::ALL;
        rng.shuffle(&mut bag);
        let pick = bag[0];
        let consecutive = if Some(pick) == history.current {
            history.consecutive + 1
        } else {
            1
        };
        SelectionHistory {
            current: Some(pick),
            previous: history.current,
            consecutive,
        }
    }
}

/// Piece generator applying the anti-streak rule
#[derive(Debug, Clone)]
pub struct PieceSelector {
    history: SelectionHistory,
    rng: SimpleRng,
}

impl PieceSelector {
    /// Create a new selector with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            history: SelectionHistory::default(),
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next piece kind
    pub fn next(&mut self) -> PieceKind {
        self.history = select_next(self.history, &mut self.rng);
        match self.history.current {
            Some(kind) => kind,
            None => unreachable!("select_next always produces a kind"),
        }
    }

    pub fn history(&self) -> SelectionHistory {
        self.history
    }
}

impl Default for PieceSelector {
    fn default() -> Self {
        Self::new(1)
    }
}
