//! Bounded undo and redo over finished sessions.

use crate::bag::BlockBag;
use crate::core::config::EditConfig;
use crate::edit::ChangeSet;
use crate::world::World;

/// Finished change sets with a cursor between the undone and the redoable.
///
/// Entries before `position` can be undone, entries from `position` on can
/// be redone. Remembering a new set drops everything redoable.
#[derive(Debug)]
pub struct History {
    entries: Vec<ChangeSet>,
    position: usize,
    max_size: usize,
}

impl History {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            position: 0,
            max_size,
        }
    }

    pub fn from_config(config: &EditConfig) -> Self {
        Self::new(config.history_size)
    }

    /// Store a finished change set. Empty sets are ignored.
    pub fn remember(&mut self, change_set: ChangeSet) {
        if change_set.is_empty() {
            return;
        }

        self.entries.truncate(self.position);
        self.entries.push(change_set);
        if self.entries.len() > self.max_size {
            let evicted = self.entries.len() - self.max_size;
            self.entries.drain(..evicted);
            log::debug!("History full, dropped {} oldest entries", evicted);
        }
        self.position = self.entries.len();
    }

    /// Undo the newest remembered set. Returns it, or `None` when there is
    /// nothing left to undo.
    pub fn undo<'a>(&mut self, world: &'a mut dyn World, bag: Option<&'a mut dyn BlockBag>) -> Option<&ChangeSet> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        let entry = &self.entries[self.position];
        entry.undo(world, bag);
        Some(entry)
    }

    /// Redo the oldest undone set. Returns it, or `None` when nothing has
    /// been undone.
    pub fn redo<'a>(&mut self, world: &'a mut dyn World, bag: Option<&'a mut dyn BlockBag>) -> Option<&ChangeSet> {
        let entry = self.entries.get(self.position)?;
        entry.redo(world, bag);
        self.position += 1;
        Some(entry)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.position = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that can currently be undone.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl Default for History {
    fn default() -> Self {
        Self::from_config(&EditConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bag::InventoryBag;
    use crate::block::{id, Block};
    use crate::core::types::IVec3;
    use crate::edit::EditSession;
    use crate::world::MemoryWorld;

    fn edit(world: &mut MemoryWorld, pos: IVec3, block: Block) -> ChangeSet {
        let mut session = EditSession::new(world, None);
        session.set_block(pos, &block).unwrap();
        session.into_change_set()
    }

    #[test]
    fn test_undo_redo() {
        let mut world = MemoryWorld::new(64);
        let mut history = History::default();
        let pos = IVec3::new(1, 2, 3);

        let first = edit(&mut world, pos, Block::of(id::STONE));
        history.remember(first);
        let second = edit(&mut world, pos, Block::of(id::GLASS));
        history.remember(second);
        assert_eq!(history.len(), 2);
        assert_eq!(history.position(), 2);

        assert!(history.undo(&mut world, None).is_some());
        assert_eq!(world.block_type(pos), id::STONE);
        assert!(history.undo(&mut world, None).is_some());
        assert!(world.get_block(pos).is_air());
        assert!(history.undo(&mut world, None).is_none());
        assert_eq!(history.position(), 0);

        assert!(history.redo(&mut world, None).is_some());
        assert_eq!(world.block_type(pos), id::STONE);
        assert!(history.redo(&mut world, None).is_some());
        assert_eq!(world.block_type(pos), id::GLASS);
        assert!(history.redo(&mut world, None).is_none());
    }

    #[test]
    fn test_remember_drops_redo_branch() {
        let mut world = MemoryWorld::new(64);
        let mut history = History::new(10);

        let change = edit(&mut world, IVec3::new(0, 1, 0), Block::of(id::STONE));
        history.remember(change);
        let change = edit(&mut world, IVec3::new(0, 2, 0), Block::of(id::STONE));
        history.remember(change);
        history.undo(&mut world, None);

        let change = edit(&mut world, IVec3::new(0, 3, 0), Block::of(id::DIRT));
        history.remember(change);
        assert_eq!(history.len(), 2);
        assert_eq!(history.position(), 2);
        assert!(history.redo(&mut world, None).is_none());
    }

    #[test]
    fn test_bounded_size() {
        let mut world = MemoryWorld::new(64);
        let config = EditConfig {
            history_size: 3,
            ..EditConfig::default()
        };
        let mut history = History::from_config(&config);
        for y in 1..=5 {
            let change = edit(&mut world, IVec3::new(0, y, 0), Block::of(id::STONE));
            history.remember(change);
        }
        assert_eq!(history.len(), 3);

        while history.undo(&mut world, None).is_some() {}
        // The two oldest edits were evicted and stay in place
        assert_eq!(world.block_type(IVec3::new(0, 1, 0)), id::STONE);
        assert_eq!(world.block_type(IVec3::new(0, 2, 0)), id::STONE);
        assert!(world.get_block(IVec3::new(0, 3, 0)).is_air());
    }

    #[test]
    fn test_empty_sets_ignored() {
        let mut world = MemoryWorld::new(64);
        let session = EditSession::new(&mut world, None);
        let mut history = History::default();
        history.remember(session.into_change_set());
        assert!(history.is_empty());
    }

    #[test]
    fn test_undo_returns_blocks_to_bag() {
        let mut world = MemoryWorld::new(64);
        let mut history = History::default();
        let change = edit(&mut world, IVec3::new(0, 5, 0), Block::of(id::STONE));
        history.remember(change);

        let mut bag = InventoryBag::new();
        history.undo(&mut world, Some(&mut bag));
        assert!(world.get_block(IVec3::new(0, 5, 0)).is_air());
        assert_eq!(bag.count(id::STONE), 1);

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.position(), 0);
    }
}
