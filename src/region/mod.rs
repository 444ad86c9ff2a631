//! Volumes that operations iterate over.
//!
//! A [`Region`] exposes its inclusive corners, a containment test and a
//! stable iteration order. Axis-aligned regions additionally report their
//! box through [`Region::as_cuboid`] so callers can take a bounds-based path
//! without testing the concrete type.

pub mod cuboid;
pub mod ellipsoid;
pub mod union;

pub use cuboid::CuboidRegion;
pub use ellipsoid::EllipsoidRegion;
pub use union::RegionUnion;

use crate::core::types::{DVec3, IVec3};
use crate::math::Aabb;

/// A set of block coordinates with inclusive bounds.
pub trait Region {
    /// Lowest corner of the bounding box.
    fn minimum_point(&self) -> IVec3;

    /// Highest corner of the bounding box.
    fn maximum_point(&self) -> IVec3;

    /// Whether `pt` belongs to the region.
    fn contains(&self, pt: IVec3) -> bool;

    /// The box itself when the region is exactly axis-aligned.
    fn as_cuboid(&self) -> Option<Aabb> {
        None
    }

    fn bounding_box(&self) -> Aabb {
        Aabb::new(self.minimum_point(), self.maximum_point())
    }

    /// Center of the bounding box; may lie between cells.
    fn center(&self) -> DVec3 {
        self.bounding_box().center()
    }

    /// Contained coordinates with x outermost, then y, then z.
    fn iter(&self) -> Box<dyn Iterator<Item = IVec3> + '_> {
        Box::new(self.bounding_box().iter().filter(move |p| self.contains(*p)))
    }

    /// Number of contained coordinates.
    fn volume(&self) -> usize {
        match self.as_cuboid() {
            Some(aabb) => aabb.volume(),
            None => self.iter().count(),
        }
    }

    fn width(&self) -> i32 {
        self.maximum_point().x - self.minimum_point().x + 1
    }

    fn height(&self) -> i32 {
        self.maximum_point().y - self.minimum_point().y + 1
    }

    fn length(&self) -> i32 {
        self.maximum_point().z - self.minimum_point().z + 1
    }
}
