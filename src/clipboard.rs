//! Dense copy of a box of blocks that can be rotated, flipped and pasted.
//!
//! Cells are addressed relative to the clipboard's own corner. `origin` is
//! where that corner sat in the world at copy time and `offset` is added to
//! the paste target, so a clipboard copied relative to a player pastes
//! relative to them again.

use crate::block::Block;
use crate::core::error::Error;
use crate::core::types::{DVec3, IVec3, Result};
use crate::edit::EditSession;
use crate::math::vector::{quarter_turns, rotate_y};
use crate::math::FlipDirection;
use crate::ops::distribution::tally;
use crate::ops::Countable;
use crate::region::Region;
use crate::world::Entity;

/// An entity captured with the clipboard, positioned relative to the origin.
#[derive(Clone, Debug)]
struct CopiedEntity {
    entity: Entity,
    relative: DVec3,
}

#[derive(Clone, Debug)]
pub struct Clipboard {
    /// Empty cells were outside the copied region and are never pasted.
    data: Vec<Option<Block>>,
    size: IVec3,
    origin: IVec3,
    offset: IVec3,
    entities: Vec<CopiedEntity>,
}

impl Clipboard {
    pub fn new(size: IVec3, origin: IVec3, offset: IVec3) -> Self {
        let size = size.max(IVec3::ZERO);
        Self {
            data: vec![None; (size.x * size.y * size.z) as usize],
            size,
            origin,
            offset,
            entities: Vec::new(),
        }
    }

    /// Clipboard sized to a region's bounding box, with its origin at the
    /// region's minimum corner.
    pub fn for_region(region: &dyn Region, offset: IVec3) -> Self {
        let aabb = region.bounding_box();
        Self::new(aabb.size(), aabb.min, offset)
    }

    pub fn size(&self) -> IVec3 {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }

    pub fn length(&self) -> i32 {
        self.size.z
    }

    pub fn origin(&self) -> IVec3 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: IVec3) {
        self.origin = origin;
    }

    pub fn offset(&self) -> IVec3 {
        self.offset
    }

    pub fn set_offset(&mut self, offset: IVec3) {
        self.offset = offset;
    }

    fn index(&self, pos: IVec3) -> Option<usize> {
        if pos.cmplt(IVec3::ZERO).any() || pos.cmpge(self.size).any() {
            return None;
        }
        Some(((pos.x * self.size.y + pos.y) * self.size.z + pos.z) as usize)
    }

    /// Relative positions, x outermost, then y, then z.
    fn positions(size: IVec3) -> impl Iterator<Item = IVec3> {
        (0..size.x).flat_map(move |x| {
            (0..size.y).flat_map(move |y| (0..size.z).map(move |z| IVec3::new(x, y, z)))
        })
    }

    /// The stored block, or `None` for an empty or out-of-range cell.
    pub fn block(&self, pos: IVec3) -> Option<&Block> {
        self.index(pos).and_then(|i| self.data[i].as_ref())
    }

    /// The stored block, reading empty cells as air.
    pub fn point(&self, pos: IVec3) -> Block {
        self.block(pos).cloned().unwrap_or(Block::AIR)
    }

    pub fn set_block(&mut self, pos: IVec3, block: Option<Block>) -> Result<()> {
        let i = self
            .index(pos)
            .ok_or_else(|| Error::invalid(format!("{} is outside a clipboard of size {}", pos, self.size)))?;
        self.data[i] = block;
        Ok(())
    }

    /// Read every cell of the box from the session.
    pub fn copy(&mut self, session: &EditSession<'_>) {
        for pos in Self::positions(self.size) {
            let i = self.index_unchecked(pos);
            self.data[i] = Some(session.get_block(self.origin + pos));
        }
    }

    /// Read only cells inside `region`; the rest become empty.
    pub fn copy_region(&mut self, session: &EditSession<'_>, region: &dyn Region) {
        for pos in Self::positions(self.size) {
            let world = self.origin + pos;
            let i = self.index_unchecked(pos);
            self.data[i] = region.contains(world).then(|| session.get_block(world));
        }
    }

    fn index_unchecked(&self, pos: IVec3) -> usize {
        ((pos.x * self.size.y + pos.y) * self.size.z + pos.z) as usize
    }

    /// Write the clipboard at `target + offset`.
    pub fn paste(
        &self,
        session: &mut EditSession<'_>,
        target: IVec3,
        no_air: bool,
        entities: bool,
    ) -> Result<usize> {
        let pos = target + self.offset;
        let affected = self.place(session, pos, no_air)?;
        if entities {
            let spawned = self.paste_entities(session, pos);
            log::debug!("Pasted {} of {} entities", spawned.len(), self.entities.len());
        }
        Ok(affected)
    }

    /// Write the clipboard with its corner at `pos`, ignoring the offset.
    pub fn place(&self, session: &mut EditSession<'_>, pos: IVec3, no_air: bool) -> Result<usize> {
        let mut affected = 0;
        for rel in Self::positions(self.size) {
            let Some(block) = &self.data[self.index_unchecked(rel)] else {
                continue;
            };
            if no_air && block.is_air() {
                continue;
            }
            if session.set_block(pos + rel, block)? {
                affected += 1;
            }
        }
        Ok(affected)
    }

    /// Remember an entity, keeping its position relative to the origin.
    pub fn store_entity(&mut self, entity: Entity) {
        let relative = entity.position - self.origin.as_dvec3();
        self.entities.push(CopiedEntity { entity, relative });
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Spawn stored entities relative to `pos`. Returns the ones the world
    /// accepted, at their new positions.
    pub fn paste_entities(&self, session: &mut EditSession<'_>, pos: IVec3) -> Vec<Entity> {
        let mut spawned = Vec::new();
        for copied in &self.entities {
            let at = pos.as_dvec3() + copied.relative;
            if session.spawn_entity(at, &copied.entity) {
                spawned.push(Entity::new(at, copied.entity.payload.clone()));
            }
        }
        spawned
    }

    /// Rotate around the Y axis. Angles that are not a multiple of 90
    /// degrees leave the clipboard unchanged.
    pub fn rotate_2d(&mut self, angle: i32) {
        let Some(turns) = quarter_turns(angle) else {
            return;
        };
        let reverse = angle < 0;

        let rotated = rotate_y(self.size, turns);
        let shift = IVec3::new(
            if rotated.x < 0 { -rotated.x - 1 } else { 0 },
            0,
            if rotated.z < 0 { -rotated.z - 1 } else { 0 },
        );
        let new_size = rotated.abs();

        let mut data = vec![None; self.data.len()];
        for pos in Self::positions(self.size) {
            let i = self.index_unchecked(pos);
            let Some(mut block) = self.data[i].take() else {
                continue;
            };
            for _ in 0..turns.abs() {
                if reverse {
                    block.rotate90_reverse();
                } else {
                    block.rotate90();
                }
            }
            let moved = rotate_y(pos, turns) + shift;
            data[((moved.x * new_size.y + moved.y) * new_size.z + moved.z) as usize] = Some(block);
        }

        self.data = data;
        self.size = new_size;
        self.offset = rotate_y(self.offset, turns) - shift;
    }

    /// Mirror across one axis. With `around_player` the offset is mirrored
    /// too, so the paste lands on the other side of the paster.
    pub fn flip(&mut self, direction: FlipDirection, around_player: bool) {
        let axis = match direction {
            FlipDirection::WestEast => 0,
            FlipDirection::UpDown => 1,
            FlipDirection::NorthSouth => 2,
        };
        let extent = self.size[axis];

        for pos in Self::positions(self.size) {
            let mirror_coord = extent - pos[axis] - 1;
            if pos[axis] > mirror_coord {
                continue;
            }
            let mut mirror = pos;
            mirror[axis] = mirror_coord;

            let a = self.index_unchecked(pos);
            let b = self.index_unchecked(mirror);
            if let Some(block) = &mut self.data[a] {
                block.flip(direction);
            }
            // The pivot layer of an odd extent is flipped in place
            if a == b {
                continue;
            }
            if let Some(block) = &mut self.data[b] {
                block.flip(direction);
            }
            self.data.swap(a, b);
        }

        if around_player {
            self.offset[axis] = 1 - self.offset[axis] - extent;
        }
    }

    /// Count block types, skipping empty cells.
    pub fn block_distribution(&self) -> Vec<Countable<u16>> {
        tally(self.data.iter().flatten().map(|block| block.type_id))
    }

    /// Count type and data pairs, skipping empty cells.
    pub fn block_distribution_with_data(&self) -> Vec<Countable<Block>> {
        tally(self.data.iter().flatten().map(|block| Block::new(block.type_id, block.data)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::id;
    use crate::region::{CuboidRegion, EllipsoidRegion};
    use crate::world::{MemoryWorld, World};

    fn stone() -> Block {
        Block::of(id::STONE)
    }

    #[test]
    fn test_copy_and_paste() {
        let mut world = MemoryWorld::new(64);
        world.put(IVec3::new(10, 5, 10), stone());
        world.put(IVec3::new(11, 6, 11), Block::new(id::CLOTH, 4));

        let mut clipboard = Clipboard::new(IVec3::splat(2), IVec3::new(10, 5, 10), IVec3::ZERO);
        {
            let session = EditSession::new(&mut world, None);
            clipboard.copy(&session);
        }
        assert_eq!(clipboard.point(IVec3::ZERO), stone());
        assert_eq!(clipboard.point(IVec3::ONE), Block::new(id::CLOTH, 4));
        assert_eq!(clipboard.block(IVec3::new(1, 0, 0)), Some(&Block::AIR));

        {
            let mut session = EditSession::new(&mut world, None);
            let affected = clipboard.paste(&mut session, IVec3::new(20, 5, 20), false, false).unwrap();
            assert_eq!(affected, 2);
        }
        assert_eq!(world.get_block(IVec3::new(20, 5, 20)), stone());
        assert_eq!(world.get_block(IVec3::new(21, 6, 21)), Block::new(id::CLOTH, 4));
    }

    #[test]
    fn test_paste_skips_air() {
        let mut world = MemoryWorld::new(64);
        let mut clipboard = Clipboard::new(IVec3::new(2, 1, 1), IVec3::ZERO, IVec3::new(0, 1, 0));
        clipboard.set_block(IVec3::ZERO, Some(stone())).unwrap();
        clipboard.set_block(IVec3::new(1, 0, 0), Some(Block::AIR)).unwrap();
        world.put(IVec3::new(6, 6, 5), Block::of(id::GLASS));

        {
            let mut session = EditSession::new(&mut world, None);
            clipboard.paste(&mut session, IVec3::new(5, 5, 5), true, false).unwrap();
        }
        assert_eq!(world.get_block(IVec3::new(5, 6, 5)), stone());
        assert_eq!(world.block_type(IVec3::new(6, 6, 5)), id::GLASS);

        {
            let mut session = EditSession::new(&mut world, None);
            clipboard.paste(&mut session, IVec3::new(5, 5, 5), false, false).unwrap();
        }
        assert!(world.get_block(IVec3::new(6, 6, 5)).is_air());
    }

    #[test]
    fn test_copy_region_leaves_outside_empty() {
        let mut world = MemoryWorld::new(64);
        for pos in CuboidRegion::new(IVec3::new(-2, 8, -2), IVec3::new(2, 12, 2)).iter() {
            world.put(pos, stone());
        }
        let region = EllipsoidRegion::new(IVec3::new(0, 10, 0), DVec3::splat(2.0));
        let mut clipboard = Clipboard::for_region(&region, IVec3::ZERO);
        assert_eq!(clipboard.size(), IVec3::splat(5));
        {
            let session = EditSession::new(&mut world, None);
            clipboard.copy_region(&session, &region);
        }

        // Corner lies outside the ellipsoid
        assert_eq!(clipboard.block(IVec3::ZERO), None);
        assert!(clipboard.point(IVec3::ZERO).is_air());
        assert_eq!(clipboard.block(IVec3::splat(2)), Some(&stone()));

        let counts = clipboard.block_distribution();
        assert_eq!(counts, vec![Countable { id: id::STONE, amount: region.volume() }]);

        let mut world = MemoryWorld::new(64);
        {
            let mut session = EditSession::new(&mut world, None);
            let affected = clipboard.paste(&mut session, IVec3::new(0, 20, 0), false, false).unwrap();
            assert_eq!(affected, region.volume());
        }
        assert!(world.get_block(IVec3::new(0, 20, 0)).is_air());
    }

    #[test]
    fn test_set_block_out_of_range() {
        let mut clipboard = Clipboard::new(IVec3::ONE, IVec3::ZERO, IVec3::ZERO);
        assert!(clipboard.set_block(IVec3::new(1, 0, 0), Some(stone())).is_err());
        assert!(clipboard.set_block(IVec3::new(0, -1, 0), Some(stone())).is_err());
        assert_eq!(clipboard.block(IVec3::new(5, 5, 5)), None);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let mut clipboard = Clipboard::new(IVec3::new(3, 1, 2), IVec3::ZERO, IVec3::ZERO);
        clipboard.set_block(IVec3::new(0, 0, 0), Some(stone())).unwrap();
        clipboard.set_block(IVec3::new(2, 0, 1), Some(Block::of(id::GLASS))).unwrap();
        let torch = Block::new(id::TORCH, 1);
        clipboard.set_block(IVec3::new(1, 0, 0), Some(torch.clone())).unwrap();

        clipboard.rotate_2d(90);

        assert_eq!(clipboard.size(), IVec3::new(2, 1, 3));
        assert_eq!(clipboard.offset(), IVec3::new(-1, 0, 0));
        assert_eq!(clipboard.block(IVec3::new(1, 0, 0)), Some(&stone()));
        assert_eq!(clipboard.block(IVec3::new(0, 0, 2)), Some(&Block::of(id::GLASS)));

        let mut turned = torch;
        turned.rotate90();
        assert_eq!(clipboard.block(IVec3::new(1, 0, 1)), Some(&turned));
    }

    #[test]
    fn test_rotate_back_and_forth() {
        let mut clipboard = Clipboard::new(IVec3::new(3, 2, 2), IVec3::ZERO, IVec3::new(1, 0, 2));
        clipboard.set_block(IVec3::new(2, 1, 0), Some(Block::new(id::TORCH, 3))).unwrap();
        let before = clipboard.clone();

        clipboard.rotate_2d(-90);
        assert_eq!(clipboard.size(), IVec3::new(2, 2, 3));
        clipboard.rotate_2d(90);

        assert_eq!(clipboard.size(), before.size());
        assert_eq!(clipboard.offset(), before.offset());
        assert_eq!(clipboard.block(IVec3::new(2, 1, 0)), Some(&Block::new(id::TORCH, 3)));
    }

    #[test]
    fn test_rotate_ignores_odd_angles() {
        let mut clipboard = Clipboard::new(IVec3::new(3, 1, 2), IVec3::ZERO, IVec3::ZERO);
        clipboard.set_block(IVec3::ZERO, Some(stone())).unwrap();
        clipboard.rotate_2d(45);
        assert_eq!(clipboard.size(), IVec3::new(3, 1, 2));
        assert_eq!(clipboard.block(IVec3::ZERO), Some(&stone()));
    }

    #[test]
    fn test_flip_swaps_slabs() {
        let mut clipboard = Clipboard::new(IVec3::new(3, 1, 1), IVec3::ZERO, IVec3::ZERO);
        clipboard.set_block(IVec3::new(0, 0, 0), Some(stone())).unwrap();
        let torch = Block::new(id::TORCH, 1);
        clipboard.set_block(IVec3::new(1, 0, 0), Some(torch.clone())).unwrap();

        clipboard.flip(FlipDirection::WestEast, true);

        assert_eq!(clipboard.block(IVec3::new(0, 0, 0)), None);
        assert_eq!(clipboard.block(IVec3::new(2, 0, 0)), Some(&stone()));
        let mut flipped = torch;
        flipped.flip(FlipDirection::WestEast);
        assert_eq!(clipboard.block(IVec3::new(1, 0, 0)), Some(&flipped));
        assert_eq!(clipboard.offset(), IVec3::new(-2, 0, 0));
    }

    #[test]
    fn test_flip_up_down_even() {
        let mut clipboard = Clipboard::new(IVec3::new(1, 4, 1), IVec3::ZERO, IVec3::new(0, 3, 0));
        for y in 0..4 {
            clipboard.set_block(IVec3::new(0, y, 0), Some(Block::new(id::CLOTH, y as i8))).unwrap();
        }
        clipboard.flip(FlipDirection::UpDown, false);
        for y in 0..4 {
            assert_eq!(clipboard.point(IVec3::new(0, y, 0)).data, 3 - y as i8);
        }
        assert_eq!(clipboard.offset(), IVec3::new(0, 3, 0));
    }

    #[test]
    fn test_entities_relative_to_origin() {
        let mut world = MemoryWorld::new(64);
        let mut clipboard = Clipboard::new(IVec3::splat(4), IVec3::new(10, 5, 10), IVec3::ZERO);
        clipboard.store_entity(Entity::new(DVec3::new(12.5, 6.0, 10.0), serde_json::json!({"kind": "painting"})));
        assert_eq!(clipboard.entity_count(), 1);

        let mut session = EditSession::new(&mut world, None);
        let spawned = clipboard.paste_entities(&mut session, IVec3::new(0, 20, 0));
        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned[0].position, DVec3::new(2.5, 21.0, 0.0));
        drop(session);
        assert_eq!(world.entities()[0].position, DVec3::new(2.5, 21.0, 0.0));
    }

    #[test]
    fn test_distribution_with_data() {
        let mut clipboard = Clipboard::new(IVec3::new(3, 1, 1), IVec3::ZERO, IVec3::ZERO);
        clipboard.set_block(IVec3::new(0, 0, 0), Some(Block::new(id::CLOTH, 2))).unwrap();
        clipboard.set_block(IVec3::new(1, 0, 0), Some(Block::new(id::CLOTH, 2))).unwrap();
        clipboard.set_block(IVec3::new(2, 0, 0), Some(Block::new(id::CLOTH, 5))).unwrap();

        let counts = clipboard.block_distribution_with_data();
        assert_eq!(counts[0], Countable { id: Block::new(id::CLOTH, 5), amount: 1 });
        assert_eq!(counts[1], Countable { id: Block::new(id::CLOTH, 2), amount: 2 });
        assert_eq!(clipboard.block_distribution(), vec![Countable { id: id::CLOTH, amount: 3 }]);
    }
}
