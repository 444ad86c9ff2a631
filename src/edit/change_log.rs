//! Ordered, key-deduplicated coordinate to block mapping.

use std::collections::HashMap;

use crate::block::Block;
use crate::core::types::IVec3;
use crate::math::Aabb;

/// Coordinate to block map that remembers first-insertion order.
///
/// Writing an existing key replaces the value in place; the key keeps its
/// original position. Used for the original and current snapshots of a
/// session as well as for its deferred placement queues.
#[derive(Clone, Debug, Default)]
pub struct ChangeLog {
    entries: Vec<(IVec3, Block)>,
    index: HashMap<IVec3, usize>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, pos: IVec3) -> bool {
        self.index.contains_key(&pos)
    }

    pub fn get(&self, pos: IVec3) -> Option<&Block> {
        self.index.get(&pos).map(|&i| &self.entries[i].1)
    }

    /// Insert or overwrite. Returns `true` when the key is new.
    pub fn put(&mut self, pos: IVec3, block: Block) -> bool {
        match self.index.get(&pos) {
            Some(&i) => {
                self.entries[i].1 = block;
                false
            }
            None => {
                self.index.insert(pos, self.entries.len());
                self.entries.push((pos, block));
                true
            }
        }
    }

    /// Insert only when the key is absent. Returns `true` when inserted.
    pub fn put_if_absent(&mut self, pos: IVec3, block: Block) -> bool {
        if self.contains(pos) {
            return false;
        }
        self.put(pos, block)
    }

    /// Drop an entry, keeping the order of the rest.
    pub fn remove(&mut self, pos: IVec3) -> Option<Block> {
        let i = self.index.remove(&pos)?;
        let (_, block) = self.entries.remove(i);
        for (p, _) in &self.entries[i..] {
            if let Some(slot) = self.index.get_mut(p) {
                *slot -= 1;
            }
        }
        Some(block)
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (IVec3, &Block)> + '_ {
        self.entries.iter().map(|(p, b)| (*p, b))
    }

    pub fn positions(&self) -> impl DoubleEndedIterator<Item = IVec3> + '_ {
        self.entries.iter().map(|(p, _)| *p)
    }

    /// Take every entry, leaving the log empty.
    pub fn take(&mut self) -> Vec<(IVec3, Block)> {
        self.index.clear();
        std::mem::take(&mut self.entries)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Box around every recorded coordinate.
    pub fn bounds(&self) -> Option<Aabb> {
        let mut positions = self.positions();
        let first = positions.next()?;
        let mut bounds = Aabb::new(first, first);
        for p in positions {
            bounds.expand(p);
        }
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::id;

    #[test]
    fn test_overwrite_keeps_position() {
        let mut log = ChangeLog::new();
        assert!(log.put(IVec3::new(1, 0, 0), Block::of(id::STONE)));
        assert!(log.put(IVec3::new(2, 0, 0), Block::of(id::DIRT)));
        assert!(!log.put(IVec3::new(1, 0, 0), Block::of(id::GLASS)));

        let order: Vec<_> = log.iter().map(|(p, b)| (p.x, b.type_id)).collect();
        assert_eq!(order, vec![(1, id::GLASS), (2, id::DIRT)]);
    }

    #[test]
    fn test_put_if_absent() {
        let mut log = ChangeLog::new();
        assert!(log.put_if_absent(IVec3::ZERO, Block::of(id::STONE)));
        assert!(!log.put_if_absent(IVec3::ZERO, Block::of(id::DIRT)));
        assert_eq!(log.get(IVec3::ZERO), Some(&Block::of(id::STONE)));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_take_empties() {
        let mut log = ChangeLog::new();
        log.put(IVec3::ZERO, Block::of(id::STONE));
        let taken = log.take();
        assert_eq!(taken.len(), 1);
        assert!(log.is_empty());
        assert!(!log.contains(IVec3::ZERO));
    }

    #[test]
    fn test_remove_keeps_index() {
        let mut log = ChangeLog::new();
        for x in 0..4 {
            log.put(IVec3::new(x, 0, 0), Block::of(id::STONE));
        }
        assert_eq!(log.remove(IVec3::new(1, 0, 0)), Some(Block::of(id::STONE)));
        assert!(log.remove(IVec3::new(1, 0, 0)).is_none());

        log.put(IVec3::new(3, 0, 0), Block::of(id::GLASS));
        assert_eq!(log.get(IVec3::new(3, 0, 0)), Some(&Block::of(id::GLASS)));
        assert_eq!(log.get(IVec3::new(2, 0, 0)), Some(&Block::of(id::STONE)));
        let xs: Vec<_> = log.positions().map(|p| p.x).collect();
        assert_eq!(xs, vec![0, 2, 3]);
    }

    #[test]
    fn test_bounds() {
        let mut log = ChangeLog::new();
        assert!(log.bounds().is_none());
        log.put(IVec3::new(3, -1, 2), Block::AIR);
        log.put(IVec3::new(-2, 4, 0), Block::AIR);
        let bounds = log.bounds().unwrap();
        assert_eq!(bounds.min, IVec3::new(-2, -1, 0));
        assert_eq!(bounds.max, IVec3::new(3, 4, 2));
    }
}
