//! Fills, replacements and clearing around a point.

use std::collections::HashSet;

use crate::block::Block;
use crate::core::error::Error;
use crate::core::types::{IVec3, Result};
use crate::edit::EditSession;
use crate::mask::{BlockMask, ExistingBlockMask, Mask};
use crate::math::vector::{distance_sq, round_half_up, to_block};
use crate::math::Aabb;
use crate::pattern::Pattern;
use crate::region::{CuboidRegion, Region};

impl EditSession<'_> {
    /// Write the pattern into every cell of a region.
    pub fn set_blocks(&mut self, region: &dyn Region, pattern: &mut dyn Pattern) -> Result<usize> {
        let mut affected = 0;
        for pos in region.iter() {
            if self.set_block_with(pos, pattern)? {
                affected += 1;
            }
        }
        Ok(affected)
    }

    /// Replace cells matching `from` (fuzzy), or every non-air cell when
    /// `from` is `None`.
    pub fn replace_blocks(
        &mut self,
        region: &dyn Region,
        from: Option<&[Block]>,
        pattern: &mut dyn Pattern,
    ) -> Result<usize> {
        match from {
            Some(blocks) => {
                let mask = BlockMask::new(blocks.iter().cloned());
                self.replace_blocks_masked(region, &mask, pattern)
            }
            None => self.replace_blocks_masked(region, &ExistingBlockMask, pattern),
        }
    }

    /// Replace the cells of a region that pass a mask.
    pub fn replace_blocks_masked(
        &mut self,
        region: &dyn Region,
        mask: &dyn Mask,
        pattern: &mut dyn Pattern,
    ) -> Result<usize> {
        let mut affected = 0;
        for pos in region.iter() {
            if mask.matches(self.world(), pos) && self.set_block_with(pos, pattern)? {
                affected += 1;
            }
        }
        Ok(affected)
    }

    /// Count cells fuzzily matching any of `blocks`.
    pub fn count_blocks(&self, region: &dyn Region, blocks: &[Block]) -> usize {
        let mask = BlockMask::new(blocks.iter().cloned());
        region.iter().filter(|pos| mask.matches(self.world(), *pos)).count()
    }

    /// Fill air below `origin` within `radius`, never rising above it.
    ///
    /// Recursive mode spreads through connected air over all six faces and
    /// reaches at most `depth` layers down. Column mode drops straight down
    /// from `origin.y` in every column within the radius, stopping at the
    /// first solid block.
    pub fn fill_xz(
        &mut self,
        origin: IVec3,
        pattern: &mut dyn Pattern,
        radius: f64,
        depth: i32,
        recursive: bool,
    ) -> Result<usize> {
        if radius < 0.0 {
            return Err(Error::invalid("radius must be non-negative"));
        }
        if depth < 1 {
            return Err(Error::invalid("depth must be at least 1"));
        }

        let min_y = (origin.y - depth + 1).max(0);
        if recursive {
            self.fill_connected(origin, pattern, radius, min_y)
        } else {
            self.fill_columns(origin, pattern, radius, min_y)
        }
    }

    fn fill_connected(&mut self, origin: IVec3, pattern: &mut dyn Pattern, radius: f64, min_y: i32) -> Result<usize> {
        let radius_sq = radius * radius;
        let mut visited = HashSet::new();
        let mut stack = vec![origin];
        let mut affected = 0;

        while let Some(pos) = stack.pop() {
            if !visited.insert(pos) {
                continue;
            }
            if pos.y > origin.y || pos.y < min_y || distance_sq(pos, origin) > radius_sq {
                continue;
            }
            if !self.get_block(pos).is_air() {
                continue;
            }

            if self.set_block_with(pos, pattern)? {
                affected += 1;
            }

            stack.push(pos + IVec3::NEG_Y);
            stack.push(pos + IVec3::Y);
            stack.push(pos + IVec3::X);
            stack.push(pos + IVec3::NEG_X);
            stack.push(pos + IVec3::Z);
            stack.push(pos + IVec3::NEG_Z);
        }

        Ok(affected)
    }

    fn fill_columns(&mut self, origin: IVec3, pattern: &mut dyn Pattern, radius: f64, min_y: i32) -> Result<usize> {
        let radius_sq = radius * radius;
        let ceil = radius.ceil() as i32;
        let mut affected = 0;

        for dx in -ceil..=ceil {
            for dz in -ceil..=ceil {
                if (dx * dx + dz * dz) as f64 > radius_sq {
                    continue;
                }
                for y in (min_y..=origin.y).rev() {
                    let pos = IVec3::new(origin.x + dx, y, origin.z + dz);
                    if !self.get_block(pos).is_air() {
                        break;
                    }
                    if self.set_block_with(pos, pattern)? {
                        affected += 1;
                    }
                }
            }
        }

        Ok(affected)
    }

    /// Fill the one or two cells nearest the region center on each axis.
    pub fn center(&mut self, region: &dyn Region, pattern: &mut dyn Pattern) -> Result<usize> {
        let center = region.center();
        let low = to_block(center);
        let high = IVec3::new(round_half_up(center.x), round_half_up(center.y), round_half_up(center.z));
        self.set_blocks(&CuboidRegion::new(low, high), pattern)
    }

    /// Clear a square column of `height` cells starting at `pos` and going up.
    pub fn remove_above(&mut self, pos: IVec3, apothem: i32, height: i32) -> Result<usize> {
        if apothem < 1 || height < 1 {
            return Err(Error::invalid("apothem and height must be at least 1"));
        }
        let bounds = Aabb::new(
            pos + IVec3::new(-apothem + 1, 0, -apothem + 1),
            pos + IVec3::new(apothem - 1, height - 1, apothem - 1),
        );
        self.clear_box(bounds)
    }

    /// Clear a square column of `height` cells starting at `pos` and going down.
    pub fn remove_below(&mut self, pos: IVec3, apothem: i32, height: i32) -> Result<usize> {
        if apothem < 1 || height < 1 {
            return Err(Error::invalid("apothem and height must be at least 1"));
        }
        let bounds = Aabb::new(
            pos + IVec3::new(-apothem + 1, 0, -apothem + 1),
            pos + IVec3::new(apothem - 1, -height + 1, apothem - 1),
        );
        self.clear_box(bounds)
    }

    /// Clear every block of `type_id`, any data, in a cube around `pos`.
    pub fn remove_near(&mut self, pos: IVec3, type_id: u16, apothem: i32) -> Result<usize> {
        if apothem < 1 {
            return Err(Error::invalid("apothem must be at least 1"));
        }
        let Some(bounds) = self.clamp_to_world(Aabb::from_center(pos, apothem - 1)) else {
            return Ok(0);
        };
        let mask = BlockMask::new([Block::any_data(type_id)]);
        self.replace_blocks_masked(&CuboidRegion::from_aabb(bounds), &mask, &mut Block::AIR)
    }

    fn clear_box(&mut self, bounds: Aabb) -> Result<usize> {
        match self.clamp_to_world(bounds) {
            Some(bounds) => self.set_blocks(&CuboidRegion::from_aabb(bounds), &mut Block::AIR),
            None => Ok(0),
        }
    }
}
