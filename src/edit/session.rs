//! Edit session - mediates every block write and records it for undo.

use std::collections::{HashMap, HashSet};

use rand::Rng;

use super::change_log::ChangeLog;
use super::change_set::ChangeSet;
use super::reorder::resolve_final_order;
use crate::bag::{BlockBag, BlockBagError};
use crate::block::metadata::{can_pass_through, is_container, is_natural_terrain, place_order};
use crate::block::{id, Block, PlaceOrder};
use crate::core::config::EditConfig;
use crate::core::error::Error;
use crate::core::types::{DVec3, IVec2, IVec3, Result};
use crate::mask::Mask;
use crate::pattern::Pattern;
use crate::region::Region;
use crate::world::{Entity, World};

/// A batch of block changes against one world.
///
/// The first write to a coordinate records the block it replaced in the
/// original log; every write records the new block in the current log.
/// Together they let the batch be undone and redone.
///
/// With the queue enabled, blocks that need support from their neighbours
/// are held back and written by [`EditSession::flush_queue`] once the
/// blocks they rest on are in place. Queued writes are not visible through
/// [`EditSession::get_block`] until then.
///
/// When the change limit is hit the offending write is refused with
/// [`Error::LimitExceeded`]. Writes already made by the same operation stay
/// in the world and in the logs; undo is the way back.
pub struct EditSession<'w> {
    world: &'w mut dyn World,
    /// Max distinct coordinates in the original log
    limit: Option<usize>,
    /// First-seen block per coordinate
    original: ChangeLog,
    /// Latest requested block per coordinate
    current: ChangeLog,
    queue_enabled: bool,
    /// Set once the queue has been turned on; flushing is a no-op before that
    queue_was_enabled: bool,
    /// Normal blocks, written first on flush
    queue_after: ChangeLog,
    /// Blocks that rest on others, written second
    queue_last: ChangeLog,
    /// Blocks with attachment chains, written last in dependency order
    queue_final: ChangeLog,
    fast_mode: bool,
    /// Chunk columns written in fast mode
    dirty_chunks: HashSet<IVec2>,
    mask: Option<Box<dyn Mask + 'w>>,
    bag: Option<&'w mut dyn BlockBag>,
    /// Shortfall per block type since the last pop
    missing_blocks: HashMap<u16, usize>,
}

impl<'w> EditSession<'w> {
    /// Create a session with the queue off. `limit` of `None` is unbounded.
    pub fn new(world: &'w mut dyn World, limit: Option<usize>) -> Self {
        Self {
            world,
            limit,
            original: ChangeLog::new(),
            current: ChangeLog::new(),
            queue_enabled: false,
            queue_was_enabled: false,
            queue_after: ChangeLog::new(),
            queue_last: ChangeLog::new(),
            queue_final: ChangeLog::new(),
            fast_mode: false,
            dirty_chunks: HashSet::new(),
            mask: None,
            bag: None,
            missing_blocks: HashMap::new(),
        }
    }

    /// Create a session with limit, queue and fast mode taken from config.
    pub fn from_config(world: &'w mut dyn World, config: &EditConfig) -> Self {
        let mut session = Self::new(world, config.max_changed_blocks);
        if config.queue_enabled {
            session.enable_queue();
        }
        session.fast_mode = config.fast_mode;
        session
    }

    pub fn world(&self) -> &dyn World {
        &*self.world
    }

    pub fn max_y(&self) -> i32 {
        self.world.max_y()
    }

    pub fn block_change_limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn set_block_change_limit(&mut self, limit: Option<usize>) {
        self.limit = limit;
    }

    pub fn is_queue_enabled(&self) -> bool {
        self.queue_enabled
    }

    pub fn enable_queue(&mut self) {
        self.queue_enabled = true;
        self.queue_was_enabled = true;
    }

    /// Turn the queue off, writing out anything still pending.
    pub fn disable_queue(&mut self) {
        if self.queue_enabled {
            self.flush_queue();
        }
        self.queue_enabled = false;
    }

    pub fn has_fast_mode(&self) -> bool {
        self.fast_mode
    }

    /// Skip neighbour updates on write; the world is fixed up on flush.
    pub fn set_fast_mode(&mut self, enabled: bool) {
        self.fast_mode = enabled;
    }

    pub fn set_mask(&mut self, mask: Option<Box<dyn Mask + 'w>>) {
        self.mask = mask;
    }

    pub fn has_mask(&self) -> bool {
        self.mask.is_some()
    }

    pub fn set_block_bag(&mut self, bag: Option<&'w mut dyn BlockBag>) {
        self.bag = bag;
    }

    pub fn has_block_bag(&self) -> bool {
        self.bag.is_some()
    }

    /// Take the shortfall tally, leaving it empty.
    pub fn pop_missing_blocks(&mut self) -> HashMap<u16, usize> {
        std::mem::take(&mut self.missing_blocks)
    }

    /// Number of distinct coordinates touched.
    pub fn block_change_count(&self) -> usize {
        self.original.len()
    }

    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    /// Blocks as they were before this session touched them.
    pub fn original(&self) -> &ChangeLog {
        &self.original
    }

    /// Blocks this session has asked for.
    pub fn current(&self) -> &ChangeLog {
        &self.current
    }

    /// Lowest corner of every touched coordinate.
    pub fn minimum_point(&self) -> Option<IVec3> {
        self.original.bounds().map(|b| b.min)
    }

    /// Highest corner of every touched coordinate.
    pub fn maximum_point(&self) -> Option<IVec3> {
        self.original.bounds().map(|b| b.max)
    }

    /// Read straight from the world. Pending queued writes are not seen.
    pub fn get_block(&self, pos: IVec3) -> Block {
        self.world.get_block(pos)
    }

    pub fn block_type(&self, pos: IVec3) -> u16 {
        self.world.block_type(pos)
    }

    pub fn block_data(&self, pos: IVec3) -> i8 {
        self.world.block_data(pos)
    }

    pub fn entities_in(&self, region: &dyn Region) -> Vec<Entity> {
        self.world.entities_in(region)
    }

    pub fn spawn_entity(&mut self, pos: DVec3, entity: &Entity) -> bool {
        self.world.spawn_entity(pos, entity)
    }

    /// Write to the world with no logging, limit or queueing.
    ///
    /// Applies height bounds, the block bag and fast mode. Returns whether
    /// the world changed.
    pub fn raw_set_block(&mut self, pos: IVec3, block: &Block) -> bool {
        if pos.y < 0 || pos.y > self.world.max_y() {
            return false;
        }
        let type_id = block.type_id;
        if !self.world.is_valid_block_type(type_id) {
            return false;
        }

        let existing = self.world.get_block(pos);

        if let Some(bag) = self.bag.as_deref_mut() {
            if type_id != id::AIR {
                match bag.fetch_placed_block(type_id, block.data.max(0)) {
                    Ok(()) => {}
                    Err(BlockBagError::OutOfStock) => {
                        *self.missing_blocks.entry(type_id).or_default() += 1;
                        return false;
                    }
                    Err(BlockBagError::Unplaceable) => return false,
                }
            }
            if !existing.is_air() {
                if let Err(e) = bag.store_dropped_block(existing.type_id, existing.data) {
                    log::trace!("Bag refused dropped block {} at {:?}: {}", existing.type_id, pos, e);
                }
            }
        } else if is_container(existing.type_id) {
            self.world.clear_container_contents(pos);
        }

        let changed = if type_id == id::AIR && !self.fast_mode {
            self.world.set_block_type(pos, id::AIR)
        } else {
            self.world.set_block(pos, block, !self.fast_mode)
        };

        if self.fast_mode {
            self.dirty_chunks.insert(IVec2::new(pos.x >> 4, pos.z >> 4));
        }

        changed
    }

    /// Write through the placement queue without touching the logs.
    ///
    /// With the queue on, the return value compares against the world as it
    /// is now and may not match what the flush ends up doing. A coordinate
    /// is pending in at most one queue, holding its latest block.
    pub fn smart_set_block(&mut self, pos: IVec3, block: &Block) -> bool {
        if self.queue_enabled {
            self.dequeue(pos);
            match place_order(block.type_id) {
                PlaceOrder::Last => {
                    self.queue_last.put(pos, block.clone());
                    return self.world.get_block(pos) != *block;
                }
                PlaceOrder::Final => {
                    self.queue_final.put(pos, block.clone());
                    return self.world.get_block(pos) != *block;
                }
                PlaceOrder::Normal => {
                    if place_order(self.world.block_type(pos)) == PlaceOrder::Last {
                        // Remove the attached block before its support goes
                        self.raw_set_block(pos, &Block::AIR);
                    } else {
                        self.queue_after.put(pos, block.clone());
                        return self.world.get_block(pos) != *block;
                    }
                }
            }
        }

        self.raw_set_block(pos, block)
    }

    fn dequeue(&mut self, pos: IVec3) {
        self.queue_after.remove(pos);
        self.queue_last.remove(pos);
        self.queue_final.remove(pos);
    }

    /// Record and write one block.
    ///
    /// Returns `Ok(false)` when the mask rejects the position or nothing
    /// changed. Fails when this is a new coordinate beyond the change limit;
    /// the coordinate stays in the original log.
    pub fn set_block(&mut self, pos: IVec3, block: &Block) -> Result<bool> {
        if let Some(mask) = &self.mask {
            if !mask.matches(&*self.world, pos) {
                return Ok(false);
            }
        }

        if !self.original.contains(pos) {
            let existing = self.world.get_block(pos);
            self.original.put(pos, existing);

            if let Some(limit) = self.limit {
                if self.original.len() > limit {
                    log::warn!("Change limit of {} blocks reached at {:?}", limit, pos);
                    return Err(Error::LimitExceeded { limit });
                }
            }
        }

        self.current.put(pos, block.clone());
        Ok(self.smart_set_block(pos, block))
    }

    /// Write the block a pattern yields for `pos`.
    pub fn set_block_with(&mut self, pos: IVec3, pattern: &mut dyn Pattern) -> Result<bool> {
        let block = pattern.next(pos);
        self.set_block(pos, &block)
    }

    pub fn set_block_if_air(&mut self, pos: IVec3, block: &Block) -> Result<bool> {
        if !self.world.get_block(pos).is_air() {
            return Ok(false);
        }
        self.set_block(pos, block)
    }

    /// Write into air with the given probability.
    pub fn set_chance_block_if_air<R: Rng + ?Sized>(
        &mut self,
        pos: IVec3,
        block: &Block,
        probability: f64,
        rng: &mut R,
    ) -> Result<bool> {
        if rng.r#gen::<f64>() <= probability {
            return self.set_block_if_air(pos, block);
        }
        Ok(false)
    }

    /// Highest block in a column that is solid, or natural ground when
    /// `natural_only` is set. Returns `min_y` when none is found.
    pub fn highest_terrain_block(&self, x: i32, z: i32, min_y: i32, max_y: i32, natural_only: bool) -> i32 {
        for y in (min_y..=max_y).rev() {
            let block = self.world.get_block(IVec3::new(x, y, z));
            let hit = if natural_only {
                is_natural_terrain(block.type_id)
            } else {
                !can_pass_through(block.type_id, block.data as i32)
            };
            if hit {
                return y;
            }
        }
        min_y
    }

    /// Write out everything the queue holds, then hand fast-mode chunks to
    /// the world for fixup.
    ///
    /// Does nothing if the queue was never enabled. Decorations are skipped
    /// when the block bag ran short during this session.
    pub fn flush_queue(&mut self) {
        if !self.queue_was_enabled {
            return;
        }
        self.commit_queues();

        if !self.dirty_chunks.is_empty() {
            let dirty = std::mem::take(&mut self.dirty_chunks);
            log::debug!("Fixing {} chunk columns after fast mode", dirty.len());
            self.world.fix_after_fast_mode(&dirty);
        }

        if let Some(bag) = self.bag.as_deref_mut() {
            bag.flush_changes();
        }
    }

    fn commit_queues(&mut self) {
        if self.queue_after.is_empty() && self.queue_last.is_empty() && self.queue_final.is_empty() {
            return;
        }
        log::debug!(
            "Flushing queue: {} after, {} last, {} final",
            self.queue_after.len(),
            self.queue_last.len(),
            self.queue_final.len()
        );

        let after = self.queue_after.take();
        log::trace!("Writing {} queued blocks", after.len());
        for (pos, block) in after {
            self.raw_set_block(pos, &block);
        }

        let last = self.queue_last.take();
        if self.missing_blocks.is_empty() {
            log::trace!("Writing {} supported blocks", last.len());
            for (pos, block) in last {
                self.raw_set_block(pos, &block);
            }
        } else if !last.is_empty() {
            log::warn!(
                "Block bag ran short of {} types, skipping {} supported blocks",
                self.missing_blocks.len(),
                last.len()
            );
        }

        let ordered = resolve_final_order(self.queue_final.take());
        log::trace!("Writing {} attached blocks", ordered.len());
        for (pos, block) in ordered {
            self.raw_set_block(pos, &block);
        }
    }

    /// Restore the blocks this session replaced, through `target`.
    pub fn undo(&self, target: &mut EditSession<'_>) {
        log::debug!("Undoing {} block changes", self.original.len());
        replay(target, self.original.iter().rev());
    }

    /// Reapply this session's writes through `target`.
    pub fn redo(&self, target: &mut EditSession<'_>) {
        log::debug!("Redoing {} block changes", self.current.len());
        replay(target, self.current.iter());
    }

    /// Flush and keep only the two logs.
    pub fn into_change_set(mut self) -> ChangeSet {
        self.flush_queue();
        ChangeSet::new(self.original, self.current)
    }
}

/// Write logged blocks through `target`'s queue and flush it.
pub(crate) fn replay<'b>(target: &mut EditSession<'_>, entries: impl Iterator<Item = (IVec3, &'b Block)>) {
    for (pos, block) in entries {
        target.smart_set_block(pos, block);
    }
    target.flush_queue();
}
