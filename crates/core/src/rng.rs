//! RNG module - piece selection
//!
//! The engine draws each new piece from a [`PieceSource`]. Play uses
//! [`UniformSource`], an independent uniform draw over the seven kinds per
//! spawn. Tests inject [`SequenceSource`] to script the exact order.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Capability that picks the kind of every spawned piece.
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Uniform random kind per draw.
#[derive(Debug, Clone)]
pub struct UniformSource {
    rng: StdRng,
    seed: Option<u64>,
}

impl UniformSource {
    /// Reproducible sequence for the given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Seed this source was built from, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl PieceSource for UniformSource {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }
}

impl Default for UniformSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Replays a fixed list of kinds, wrapping at the end.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl SequenceSource {
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let kinds = kinds.into();
        assert!(!kinds.is_empty(), "sequence source needs at least one kind");
        Self { kinds, index: 0 }
    }

    /// Same kind forever.
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }

    /// Total kinds handed out so far.
    pub fn drawn(&self) -> usize {
        self.index
    }
}

impl PieceSource for SequenceSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.index % self.kinds.len()];
        self.index += 1;
        kind
    }
}
