//! The world an edit session reads from and writes to.

pub mod memory;

pub use memory::MemoryWorld;

use std::collections::HashSet;

use crate::block::{Block, BlockPayload};
use crate::core::types::{DVec3, IVec2, IVec3};
use crate::region::Region;

/// A non-block object in the world (item frame, painting, mob).
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub position: DVec3,
    pub payload: BlockPayload,
}

impl Entity {
    pub fn new(position: DVec3, payload: BlockPayload) -> Self {
        Self { position, payload }
    }
}

/// Block storage backing an edit session.
///
/// Positions outside `0..=max_y` are never written; implementations may
/// return `false` for them.
pub trait World {
    fn get_block(&self, pos: IVec3) -> Block;

    fn block_type(&self, pos: IVec3) -> u16 {
        self.get_block(pos).type_id
    }

    fn block_data(&self, pos: IVec3) -> i8 {
        self.get_block(pos).data
    }

    /// Set the type only, with data 0. Returns whether the cell changed.
    fn set_block_type(&mut self, pos: IVec3, type_id: u16) -> bool;

    /// Write a full block. `notify` requests neighbour updates and lighting.
    fn set_block(&mut self, pos: IVec3, block: &Block, notify: bool) -> bool;

    fn is_valid_block_type(&self, type_id: u16) -> bool;

    /// Empty the inventory of a container block at `pos`.
    fn clear_container_contents(&mut self, pos: IVec3);

    fn max_y(&self) -> i32;

    /// Relight and resend the given chunk columns after fast-mode writes.
    fn fix_after_fast_mode(&mut self, chunks: &HashSet<IVec2>);

    fn entities_in(&self, _region: &dyn Region) -> Vec<Entity> {
        Vec::new()
    }

    fn spawn_entity(&mut self, _pos: DVec3, _entity: &Entity) -> bool {
        false
    }
}
