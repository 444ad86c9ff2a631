//! Axis-aligned box region

use super::{Region, RegionUnion};
use crate::core::types::IVec3;
use crate::math::Aabb;

/// Box between two corners, both inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CuboidRegion {
    bounds: Aabb,
}

impl CuboidRegion {
    /// Corners may be given in any order.
    pub fn new(pos1: IVec3, pos2: IVec3) -> Self {
        Self {
            bounds: Aabb::new(pos1, pos2),
        }
    }

    pub fn from_aabb(bounds: Aabb) -> Self {
        Self { bounds }
    }

    pub fn aabb(&self) -> Aabb {
        self.bounds
    }

    /// The six one-cell-thick faces of the box.
    pub fn faces(&self) -> RegionUnion {
        let Aabb { min, max } = self.bounds;
        let mut faces = self.walls();
        faces.push(CuboidRegion::new(min, IVec3::new(max.x, min.y, max.z)));
        faces.push(CuboidRegion::new(IVec3::new(min.x, max.y, min.z), max));
        faces
    }

    /// The four vertical faces of the box.
    pub fn walls(&self) -> RegionUnion {
        let Aabb { min, max } = self.bounds;
        let mut walls = RegionUnion::new();
        walls.push(CuboidRegion::new(min, IVec3::new(min.x, max.y, max.z)));
        walls.push(CuboidRegion::new(IVec3::new(max.x, min.y, min.z), max));
        walls.push(CuboidRegion::new(min, IVec3::new(max.x, max.y, min.z)));
        walls.push(CuboidRegion::new(IVec3::new(min.x, min.y, max.z), max));
        walls
    }

    /// Move the whole box.
    pub fn shift(&mut self, offset: IVec3) {
        self.bounds = self.bounds.shifted(offset);
    }
}

impl Region for CuboidRegion {
    fn minimum_point(&self) -> IVec3 {
        self.bounds.min
    }

    fn maximum_point(&self) -> IVec3 {
        self.bounds.max
    }

    fn contains(&self, pt: IVec3) -> bool {
        self.bounds.contains_point(pt)
    }

    fn as_cuboid(&self) -> Option<Aabb> {
        Some(self.bounds)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = IVec3> + '_> {
        Box::new(self.bounds.iter())
    }
}
