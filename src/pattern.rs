//! Sources of blocks for fills.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::block::Block;
use crate::core::types::IVec3;

/// Produces the block to write at a position. May be stateful.
pub trait Pattern {
    fn next(&mut self, pos: IVec3) -> Block;
}

impl Pattern for Block {
    fn next(&mut self, _pos: IVec3) -> Block {
        self.clone()
    }
}

impl<F> Pattern for F
where
    F: FnMut(IVec3) -> Block,
{
    fn next(&mut self, pos: IVec3) -> Block {
        self(pos)
    }
}

/// Weighted random choice between several blocks.
#[derive(Clone, Debug)]
pub struct RandomPattern {
    entries: Vec<(Block, f64)>,
    total: f64,
    rng: StdRng,
}

impl RandomPattern {
    pub fn new(seed: u64) -> Self {
        Self {
            entries: Vec::new(),
            total: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Add a block with a relative weight. Non-positive weights are ignored.
    pub fn add(mut self, block: Block, weight: f64) -> Self {
        if weight > 0.0 {
            self.total += weight;
            self.entries.push((block, weight));
        }
        self
    }
}

impl Pattern for RandomPattern {
    fn next(&mut self, _pos: IVec3) -> Block {
        let mut pick = self.rng.r#gen::<f64>() * self.total;
        for (block, weight) in &self.entries {
            if pick < *weight {
                return block.clone();
            }
            pick -= weight;
        }
        self.entries
            .last()
            .map(|(b, _)| b.clone())
            .unwrap_or_default()
    }
}
