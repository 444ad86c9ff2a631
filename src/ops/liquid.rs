//! Draining and settling liquids.

use std::collections::{HashSet, VecDeque};

use crate::block::{id, is_liquid, Block};
use crate::core::error::Error;
use crate::core::types::{DVec3, IVec3, Result};
use crate::edit::EditSession;
use crate::math::{Aabb, FACE_OFFSETS};
use crate::region::{EllipsoidRegion, Region};

/// Face directions without straight up.
const NON_RISING: [IVec3; 5] = [
    IVec3::new(1, 0, 0),
    IVec3::new(-1, 0, 0),
    IVec3::new(0, 0, 1),
    IVec3::new(0, 0, -1),
    IVec3::new(0, -1, 0),
];

impl EditSession<'_> {
    /// Breadth-first walk from `seeds` over cells that pass `visitable`,
    /// writing `block` into each one reached.
    fn flood_with(
        &mut self,
        seeds: impl IntoIterator<Item = IVec3>,
        directions: &[IVec3],
        visitable: impl Fn(&Self, IVec3) -> bool,
        block: &Block,
    ) -> Result<usize> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        for seed in seeds {
            if visitable(self, seed) && visited.insert(seed) {
                queue.push_back(seed);
            }
        }

        let mut affected = 0;
        while let Some(pos) = queue.pop_front() {
            if self.set_block(pos, block)? {
                affected += 1;
            }
            for dir in directions {
                let next = pos + *dir;
                if !visited.contains(&next) && visitable(self, next) {
                    visited.insert(next);
                    queue.push_back(next);
                }
            }
        }

        Ok(affected)
    }

    /// Remove connected liquid within `radius` of `origin`.
    pub fn drain_area(&mut self, origin: IVec3, radius: f64) -> Result<usize> {
        if radius < 0.0 {
            return Err(Error::invalid("radius must be non-negative"));
        }

        let max_y = self.max_y();
        let sphere = EllipsoidRegion::new(origin, DVec3::splat(radius));
        let visitable = move |session: &Self, pos: IVec3| {
            pos.y >= 0 && pos.y <= max_y && sphere.contains(pos) && is_liquid(session.block_type(pos))
        };

        self.flood_with(Aabb::from_center(origin, 1).iter(), &FACE_OFFSETS, visitable, &Block::AIR)
    }

    /// Turn connected flowing liquid into still liquid, filling air below
    /// `origin` on the way. The walk never moves upward.
    pub fn fix_liquid(&mut self, origin: IVec3, radius: f64, moving: u16, stationary: u16) -> Result<usize> {
        if radius < 0.0 {
            return Err(Error::invalid("radius must be non-negative"));
        }

        let top = origin.y.min(self.max_y());
        let sphere = EllipsoidRegion::new(origin, DVec3::splat(radius));
        let in_bounds = move |pos: IVec3| pos.y >= 0 && pos.y <= top && sphere.contains(pos);
        let is_target = move |type_id: u16| type_id == moving || type_id == stationary;

        let seeds: Vec<IVec3> = Aabb::from_center(origin, 1)
            .iter()
            .filter(|pos| in_bounds(*pos) && is_target(self.block_type(*pos)))
            .collect();
        let visitable = move |session: &Self, pos: IVec3| {
            let type_id = session.block_type(pos);
            in_bounds(pos) && (is_target(type_id) || type_id == id::AIR)
        };

        self.flood_with(seeds, &NON_RISING, visitable, &Block::of(stationary))
    }
}
