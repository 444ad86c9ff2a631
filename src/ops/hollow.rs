//! Hollowing out solid objects.

use std::collections::{HashSet, VecDeque};

use crate::block::can_pass_through;
use crate::core::types::{IVec3, Result};
use crate::edit::EditSession;
use crate::math::FACE_OFFSETS;
use crate::pattern::Pattern;
use crate::region::Region;

use super::touches_outside;

impl EditSession<'_> {
    /// Replace the inside of every solid object in a region, keeping a shell
    /// `thickness` cells deep.
    ///
    /// Open space connected to the region's bounding faces counts as outside,
    /// and so does everything the region does not contain.
    pub fn hollow_out_region(&mut self, region: &dyn Region, thickness: i32, pattern: &mut dyn Pattern) -> Result<usize> {
        let mut outside = HashSet::new();
        let min = region.minimum_point();
        let max = region.maximum_point();

        for x in min.x..=max.x {
            for y in min.y..=max.y {
                self.flood_outside(region, IVec3::new(x, y, min.z), &mut outside);
                self.flood_outside(region, IVec3::new(x, y, max.z), &mut outside);
            }
        }
        for y in min.y..=max.y {
            for z in min.z..=max.z {
                self.flood_outside(region, IVec3::new(min.x, y, z), &mut outside);
                self.flood_outside(region, IVec3::new(max.x, y, z), &mut outside);
            }
        }
        for z in min.z..=max.z {
            for x in min.x..=max.x {
                self.flood_outside(region, IVec3::new(x, min.y, z), &mut outside);
                self.flood_outside(region, IVec3::new(x, max.y, z), &mut outside);
            }
        }

        for _ in 1..thickness {
            let grown: Vec<IVec3> = region
                .iter()
                .filter(|pos| !outside.contains(pos))
                .filter(|pos| touches_outside(*pos, |p| region.contains(p) && !outside.contains(&p)))
                .collect();
            outside.extend(grown);
        }

        let mut affected = 0;
        for pos in region.iter() {
            if outside.contains(&pos) || touches_outside(pos, |p| region.contains(p) && !outside.contains(&p)) {
                continue;
            }
            if self.set_block_with(pos, pattern)? {
                affected += 1;
            }
        }

        Ok(affected)
    }

    /// Breadth-first walk through passable cells, stopping at the region edge.
    fn flood_outside(&self, region: &dyn Region, start: IVec3, outside: &mut HashSet<IVec3>) {
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            let block = self.get_block(current);
            if !can_pass_through(block.type_id, block.data as i32) {
                continue;
            }
            if !outside.insert(current) {
                continue;
            }
            if !region.contains(current) {
                continue;
            }
            queue.extend(FACE_OFFSETS.iter().map(|offset| current + *offset));
        }
    }
}
