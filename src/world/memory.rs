//! In-memory world backed by a hash map

use std::collections::{HashMap, HashSet};

use super::{Entity, World};
use crate::block::{id, Block};
use crate::core::types::{DVec3, IVec2, IVec3};
use crate::region::Region;

/// Sparse world with every unset cell reading as air.
///
/// Every accepted write is appended to [`MemoryWorld::write_log`], which lets
/// callers observe the order in which a session committed its changes.
#[derive(Clone, Debug)]
pub struct MemoryWorld {
    blocks: HashMap<IVec3, Block>,
    max_y: i32,
    entities: Vec<Entity>,
    /// Every successful write in order.
    pub write_log: Vec<(IVec3, Block)>,
    /// Number of writes requested with neighbour notification off.
    pub quiet_writes: usize,
    /// Chunk sets passed to [`World::fix_after_fast_mode`].
    pub fixups: Vec<HashSet<IVec2>>,
    /// Positions whose container contents were cleared.
    pub cleared_containers: Vec<IVec3>,
}

impl MemoryWorld {
    pub fn new(max_y: i32) -> Self {
        Self {
            blocks: HashMap::new(),
            max_y,
            entities: Vec::new(),
            write_log: Vec::new(),
            quiet_writes: 0,
            fixups: Vec::new(),
            cleared_containers: Vec::new(),
        }
    }

    /// Place a block without recording it in the write log.
    pub fn put(&mut self, pos: IVec3, block: Block) {
        if block.is_air() {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, block);
        }
    }

    /// Number of non-air cells.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Snapshot of all non-air cells.
    pub fn snapshot(&self) -> HashMap<IVec3, Block> {
        self.blocks.clone()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    fn in_height(&self, pos: IVec3) -> bool {
        pos.y >= 0 && pos.y <= self.max_y
    }
}

impl Default for MemoryWorld {
    fn default() -> Self {
        Self::new(255)
    }
}

impl World for MemoryWorld {
    fn get_block(&self, pos: IVec3) -> Block {
        self.blocks.get(&pos).cloned().unwrap_or_default()
    }

    fn set_block_type(&mut self, pos: IVec3, type_id: u16) -> bool {
        self.set_block(pos, &Block::of(type_id), true)
    }

    fn set_block(&mut self, pos: IVec3, block: &Block, notify: bool) -> bool {
        if !self.in_height(pos) {
            return false;
        }
        if !notify {
            self.quiet_writes += 1;
        }

        let previous = self.get_block(pos);
        self.put(pos, block.clone());
        self.write_log.push((pos, block.clone()));
        previous != *block
    }

    fn is_valid_block_type(&self, type_id: u16) -> bool {
        type_id <= id::MAX_KNOWN
    }

    fn clear_container_contents(&mut self, pos: IVec3) {
        self.cleared_containers.push(pos);
    }

    fn max_y(&self) -> i32 {
        self.max_y
    }

    fn fix_after_fast_mode(&mut self, chunks: &HashSet<IVec2>) {
        self.fixups.push(chunks.clone());
    }

    fn entities_in(&self, region: &dyn Region) -> Vec<Entity> {
        self.entities
            .iter()
            .filter(|e| region.contains(e.position.floor().as_ivec3()))
            .cloned()
            .collect()
    }

    fn spawn_entity(&mut self, pos: DVec3, entity: &Entity) -> bool {
        let mut spawned = entity.clone();
        spawned.position = pos;
        self.entities.push(spawned);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::CuboidRegion;

    #[test]
    fn test_unset_reads_air() {
        let world = MemoryWorld::new(64);
        assert!(world.get_block(IVec3::new(5, 5, 5)).is_air());
        assert!(world.is_empty());
    }

    #[test]
    fn test_set_block_reports_change() {
        let mut world = MemoryWorld::new(64);
        let pos = IVec3::new(1, 2, 3);
        assert!(world.set_block(pos, &Block::of(id::STONE), true));
        assert!(!world.set_block(pos, &Block::of(id::STONE), true));
        assert_eq!(world.block_type(pos), id::STONE);
        assert_eq!(world.write_log.len(), 2);
    }

    #[test]
    fn test_out_of_height_rejected() {
        let mut world = MemoryWorld::new(64);
        assert!(!world.set_block(IVec3::new(0, -1, 0), &Block::of(id::STONE), true));
        assert!(!world.set_block(IVec3::new(0, 65, 0), &Block::of(id::STONE), true));
        assert!(world.write_log.is_empty());
    }

    #[test]
    fn test_quiet_writes_counted() {
        let mut world = MemoryWorld::new(64);
        world.set_block(IVec3::ZERO, &Block::of(id::DIRT), false);
        assert_eq!(world.quiet_writes, 1);
    }

    #[test]
    fn test_entities_in_region() {
        let mut world = MemoryWorld::new(64);
        let entity = Entity::new(DVec3::ZERO, serde_json::json!({ "kind": "painting" }));
        world.spawn_entity(DVec3::new(1.5, 1.0, 1.5), &entity);
        world.spawn_entity(DVec3::new(9.5, 1.0, 9.5), &entity);

        let region = CuboidRegion::new(IVec3::ZERO, IVec3::splat(2));
        let found = world.entities_in(&region);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].position, DVec3::new(1.5, 1.0, 1.5));
    }
}
