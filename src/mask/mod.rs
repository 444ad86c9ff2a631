//! Masks: per-position write filters.
//!
//! A session with a mask consults it before every recorded write. Positions
//! that fail the mask are left alone and the write reports no change.

use crate::block::Block;
use crate::core::types::IVec3;
use crate::world::World;

/// Decides whether a position may be written.
pub trait Mask {
    fn matches(&self, world: &dyn World, pos: IVec3) -> bool;
}

impl<F> Mask for F
where
    F: Fn(&dyn World, IVec3) -> bool,
{
    fn matches(&self, world: &dyn World, pos: IVec3) -> bool {
        self(world, pos)
    }
}

/// Passes when the existing block fuzzily equals one of a set.
#[derive(Clone, Debug, Default)]
pub struct BlockMask {
    blocks: Vec<Block>,
}

impl BlockMask {
    pub fn new(blocks: impl IntoIterator<Item = Block>) -> Self {
        Self {
            blocks: blocks.into_iter().collect(),
        }
    }

    pub fn add(&mut self, block: Block) {
        self.blocks.push(block);
    }
}

impl Mask for BlockMask {
    fn matches(&self, world: &dyn World, pos: IVec3) -> bool {
        let existing = world.get_block(pos);
        self.blocks.iter().any(|b| b.fuzzy_eq(&existing))
    }
}

/// Passes on any non-air block.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExistingBlockMask;

impl Mask for ExistingBlockMask {
    fn matches(&self, world: &dyn World, pos: IVec3) -> bool {
        !world.get_block(pos).is_air()
    }
}

/// Inverts another mask.
pub struct InvertedMask<M: Mask>(pub M);

impl<M: Mask> Mask for InvertedMask<M> {
    fn matches(&self, world: &dyn World, pos: IVec3) -> bool {
        !self.0.matches(world, pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::id;
    use crate::world::MemoryWorld;

    fn world() -> MemoryWorld {
        let mut world = MemoryWorld::new(64);
        world.put(IVec3::ZERO, Block::new(id::CLOTH, 14));
        world
    }

    #[test]
    fn test_block_mask_fuzzy() {
        let world = world();
        let mask = BlockMask::new([Block::any_data(id::CLOTH)]);
        assert!(mask.matches(&world, IVec3::ZERO));
        assert!(!mask.matches(&world, IVec3::ONE));
    }

    #[test]
    fn test_existing_and_inverted() {
        let world = world();
        assert!(ExistingBlockMask.matches(&world, IVec3::ZERO));
        assert!(!InvertedMask(ExistingBlockMask).matches(&world, IVec3::ZERO));
        assert!(InvertedMask(ExistingBlockMask).matches(&world, IVec3::ONE));
    }

    #[test]
    fn test_closure_mask() {
        let world = world();
        let below_ten = |_: &dyn World, pos: IVec3| pos.y < 10;
        assert!(below_ten.matches(&world, IVec3::ZERO));
        assert!(!below_ten.matches(&world, IVec3::new(0, 20, 0)));
    }
}
