//! Top-down surface rules: thaw, snow and grass.

use crate::block::metadata::{can_pass_through, is_translucent};
use crate::block::{id, Block};
use crate::core::error::Error;
use crate::core::types::{IVec3, Result};
use crate::edit::EditSession;
use crate::math::vector::distance_sq_2d;

/// What a column rule does with the block it is looking at.
enum Step {
    /// Keep looking further down.
    Descend,
    /// Stop without writing.
    Stop,
    /// Write and stop.
    Set(IVec3, Block),
}

impl EditSession<'_> {
    /// Walk each column within `radius` of `pos` from the top of the world
    /// down to y 1, letting `rule` decide at each block.
    fn for_each_surface(
        &mut self,
        pos: IVec3,
        radius: f64,
        mut rule: impl FnMut(IVec3, &Block) -> Step,
    ) -> Result<usize> {
        if radius < 0.0 {
            return Err(Error::invalid("radius must be non-negative"));
        }

        let radius_sq = radius * radius;
        let ceil = radius.ceil() as i32;
        let max_y = self.max_y();
        let mut affected = 0;

        for x in pos.x - ceil..=pos.x + ceil {
            for z in pos.z - ceil..=pos.z + ceil {
                if distance_sq_2d(IVec3::new(x, pos.y, z), pos) > radius_sq {
                    continue;
                }
                for y in (1..=max_y).rev() {
                    let at = IVec3::new(x, y, z);
                    let block = self.get_block(at);
                    match rule(at, &block) {
                        Step::Descend => continue,
                        Step::Stop => break,
                        Step::Set(target, new_block) => {
                            if self.set_block(target, &new_block)? {
                                affected += 1;
                            }
                            break;
                        }
                    }
                }
            }
        }

        Ok(affected)
    }

    /// Melt the top ice into still water and clear the top snow layer.
    pub fn thaw(&mut self, pos: IVec3, radius: f64) -> Result<usize> {
        self.for_each_surface(pos, radius, |at, block| match block.type_id {
            id::ICE => Step::Set(at, Block::of(id::STATIONARY_WATER)),
            id::SNOW => Step::Set(at, Block::AIR),
            id::AIR => Step::Descend,
            _ => Step::Stop,
        })
    }

    /// Freeze surface water and lay snow on the highest solid block.
    pub fn simulate_snow(&mut self, pos: IVec3, radius: f64) -> Result<usize> {
        let max_y = self.max_y();
        self.for_each_surface(pos, radius, |at, block| match block.type_id {
            id::AIR => Step::Descend,
            id::WATER | id::STATIONARY_WATER => Step::Set(at, Block::of(id::ICE)),
            type_id if is_translucent(type_id) || at.y == max_y => Step::Stop,
            _ => Step::Set(at + IVec3::Y, Block::of(id::SNOW)),
        })
    }

    /// Turn the top dirt block into grass where nothing solid covers it.
    ///
    /// With `only_normal_dirt`, dirt variants with a data value are skipped.
    pub fn green(&mut self, pos: IVec3, radius: f64, only_normal_dirt: bool) -> Result<usize> {
        self.for_each_surface(pos, radius, |at, block| match block.type_id {
            id::DIRT if only_normal_dirt && block.data != 0 => Step::Stop,
            id::DIRT => Step::Set(at, Block::of(id::GRASS)),
            id::WATER | id::STATIONARY_WATER | id::LAVA | id::STATIONARY_LAVA => Step::Stop,
            type_id if can_pass_through(type_id, block.data as i32) => Step::Descend,
            _ => Step::Stop,
        })
    }
}
