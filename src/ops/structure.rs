//! Operations on region structure: faces, walls, surfaces, copies.

use crate::block::{id, Block};
use crate::core::error::Error;
use crate::core::types::{IVec3, Result};
use crate::edit::EditSession;
use crate::pattern::Pattern;
use crate::region::{CuboidRegion, Region};

use super::touches_outside;

impl EditSession<'_> {
    /// Draw the outer shell of a region.
    pub fn make_faces(&mut self, region: &dyn Region, pattern: &mut dyn Pattern) -> Result<usize> {
        if let Some(bounds) = region.as_cuboid() {
            return self.set_blocks(&CuboidRegion::from_aabb(bounds).faces(), pattern);
        }

        let mut affected = 0;
        for pos in region.iter() {
            if touches_outside(pos, |p| region.contains(p)) && self.set_block_with(pos, pattern)? {
                affected += 1;
            }
        }
        Ok(affected)
    }

    /// Draw the vertical sides of a region, leaving floor and ceiling open.
    pub fn make_walls(&mut self, region: &dyn Region, pattern: &mut dyn Pattern) -> Result<usize> {
        if let Some(bounds) = region.as_cuboid() {
            return self.set_blocks(&CuboidRegion::from_aabb(bounds).walls(), pattern);
        }

        let min_y = region.minimum_point().y;
        let max_y = region.maximum_point().y;
        let inside = |p: IVec3| p.y < min_y || p.y > max_y || region.contains(p);

        let mut affected = 0;
        for pos in region.iter() {
            if touches_outside(pos, inside) && self.set_block_with(pos, pattern)? {
                affected += 1;
            }
        }
        Ok(affected)
    }

    /// Put one layer on top of the highest block in each column.
    ///
    /// Only the region's own cells are searched; columns with nothing but air
    /// are skipped.
    pub fn overlay_blocks(&mut self, region: &dyn Region, pattern: &mut dyn Pattern) -> Result<usize> {
        let min = region.minimum_point();
        let max = region.maximum_point();
        let mut affected = 0;

        for x in min.x..=max.x {
            for z in min.z..=max.z {
                for y in (min.y..=max.y).rev() {
                    let pos = IVec3::new(x, y, z);
                    if !region.contains(pos) || self.get_block(pos).is_air() {
                        continue;
                    }
                    if self.set_block_with(pos + IVec3::Y, pattern)? {
                        affected += 1;
                    }
                    break;
                }
            }
        }

        Ok(affected)
    }

    /// Turn the ground in each column into grass over dirt over stone.
    ///
    /// Depth is counted from the first grass, dirt or stone block found
    /// going down. Other blocks keep counting depth but are left as they are.
    pub fn naturalize(&mut self, region: &dyn Region) -> Result<usize> {
        let min = region.minimum_point();
        let max = region.maximum_point();
        let grass = Block::of(id::GRASS);
        let dirt = Block::of(id::DIRT);
        let stone = Block::of(id::STONE);
        let mut affected = 0;

        for x in min.x..=max.x {
            for z in min.z..=max.z {
                let mut level: Option<i32> = None;
                for y in (min.y..=max.y).rev() {
                    let pos = IVec3::new(x, y, z);
                    if !region.contains(pos) {
                        continue;
                    }
                    let transformable = matches!(self.block_type(pos), id::GRASS | id::DIRT | id::STONE);
                    let depth = match level {
                        Some(depth) => depth,
                        None if transformable => 0,
                        None => continue,
                    };

                    if transformable {
                        let block = match depth {
                            0 => &grass,
                            1..=3 => &dirt,
                            _ => &stone,
                        };
                        if self.set_block(pos, block)? {
                            affected += 1;
                        }
                    }
                    level = Some(depth + 1);
                }
            }
        }

        Ok(affected)
    }

    /// Repeat a region `count` times along `dir`, one region size per step.
    pub fn stack(&mut self, region: &dyn Region, dir: IVec3, count: i32, copy_air: bool) -> Result<usize> {
        if count < 1 {
            return Err(Error::invalid("count must be at least 1"));
        }

        let size = region.maximum_point() - region.minimum_point() + IVec3::ONE;
        let step = dir * size;
        let mut affected = 0;

        for i in 1..=count {
            let offset = step * i;
            for pos in region.iter() {
                let block = self.get_block(pos);
                if !copy_air && block.is_air() {
                    continue;
                }
                if self.set_block(pos + offset, &block)? {
                    affected += 1;
                }
            }
        }

        Ok(affected)
    }

    /// Shift a region's contents by `dir * distance`.
    ///
    /// The whole source is read before anything is written, so source and
    /// destination may overlap. Vacated cells get `replacement`, or air.
    pub fn move_region(
        &mut self,
        region: &dyn Region,
        dir: IVec3,
        distance: i32,
        copy_air: bool,
        replacement: Option<&Block>,
    ) -> Result<usize> {
        if distance < 1 {
            return Err(Error::invalid("distance must be at least 1"));
        }

        let offset = dir * distance;
        let mut moved = Vec::new();
        for pos in region.iter() {
            let block = self.get_block(pos);
            if copy_air || !block.is_air() {
                moved.push((pos, block));
            }
        }

        let fill = replacement.cloned().unwrap_or(Block::AIR);
        for (pos, _) in &moved {
            self.set_block(*pos, &fill)?;
        }

        let mut affected = 0;
        for (pos, block) in &moved {
            if self.set_block(*pos + offset, block)? {
                affected += 1;
            }
        }

        Ok(affected)
    }
}
