//! Axis-aligned integer bounding box

use crate::core::types::{DVec3, IVec3};

/// Inclusive axis-aligned box of block coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Aabb {
    pub min: IVec3,
    pub max: IVec3,
}

impl Aabb {
    /// Create from two arbitrary corners; the box is normalized.
    pub fn new(a: IVec3, b: IVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Cube of `apothem` cells around `center` in every direction.
    pub fn from_center(center: IVec3, apothem: i32) -> Self {
        Self::new(center - IVec3::splat(apothem), center + IVec3::splat(apothem))
    }

    /// Get center point (may lie between cells)
    pub fn center(&self) -> DVec3 {
        (self.min.as_dvec3() + self.max.as_dvec3()) * 0.5
    }

    /// Number of cells along each axis
    pub fn size(&self) -> IVec3 {
        self.max - self.min + IVec3::ONE
    }

    /// Total number of cells
    pub fn volume(&self) -> usize {
        let s = self.size();
        s.x as usize * s.y as usize * s.z as usize
    }

    /// Check if point is inside
    pub fn contains_point(&self, p: IVec3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y &&
        p.z >= self.min.z && p.z <= self.max.z
    }

    /// Check if two boxes share at least one cell
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y &&
        self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Expand to include point
    pub fn expand(&mut self, point: IVec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Return merged box containing both
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Translate by an offset
    pub fn shifted(&self, offset: IVec3) -> Aabb {
        Aabb {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Restrict the Y range to `[min_y, max_y]`.
    pub fn clamp_y(&self, min_y: i32, max_y: i32) -> Aabb {
        let mut out = *self;
        out.min.y = out.min.y.clamp(min_y, max_y);
        out.max.y = out.max.y.clamp(min_y, max_y);
        out
    }

    /// Iterate every cell, x outermost, then y, then z.
    pub fn iter(&self) -> AabbIter {
        AabbIter {
            bounds: *self,
            next: Some(self.min),
        }
    }
}

/// Iterator over the cells of an [`Aabb`].
#[derive(Clone, Debug)]
pub struct AabbIter {
    bounds: Aabb,
    next: Option<IVec3>,
}

impl Iterator for AabbIter {
    type Item = IVec3;

    fn next(&mut self) -> Option<IVec3> {
        let current = self.next?;
        let b = &self.bounds;

        let mut n = current;
        n.z += 1;
        if n.z > b.max.z {
            n.z = b.min.z;
            n.y += 1;
            if n.y > b.max.y {
                n.y = b.min.y;
                n.x += 1;
            }
        }
        self.next = if n.x > b.max.x { None } else { Some(n) };

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes() {
        let aabb = Aabb::new(IVec3::new(3, 0, -1), IVec3::new(1, 2, 1));
        assert_eq!(aabb.min, IVec3::new(1, 0, -1));
        assert_eq!(aabb.max, IVec3::new(3, 2, 1));
        assert_eq!(aabb.size(), IVec3::new(3, 3, 3));
        assert_eq!(aabb.volume(), 27);
    }

    #[test]
    fn test_contains_point() {
        let aabb = Aabb::new(IVec3::ZERO, IVec3::ONE);
        assert!(aabb.contains_point(IVec3::ONE));
        assert!(!aabb.contains_point(IVec3::splat(2)));
    }

    #[test]
    fn test_intersects() {
        let a = Aabb::new(IVec3::ZERO, IVec3::ONE);
        let b = Aabb::new(IVec3::ONE, IVec3::splat(3));
        let c = Aabb::new(IVec3::splat(2), IVec3::splat(3));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_iteration_order() {
        let aabb = Aabb::new(IVec3::ZERO, IVec3::new(1, 1, 1));
        let cells: Vec<_> = aabb.iter().collect();
        assert_eq!(cells.len(), 8);
        assert_eq!(cells[0], IVec3::new(0, 0, 0));
        assert_eq!(cells[1], IVec3::new(0, 0, 1));
        assert_eq!(cells[2], IVec3::new(0, 1, 0));
        assert_eq!(cells[4], IVec3::new(1, 0, 0));
        assert_eq!(cells[7], IVec3::new(1, 1, 1));
    }

    #[test]
    fn test_center_between_cells() {
        let aabb = Aabb::new(IVec3::ZERO, IVec3::new(3, 0, 2));
        assert_eq!(aabb.center(), DVec3::new(1.5, 0.0, 1.0));
    }

    #[test]
    fn test_clamp_y() {
        let aabb = Aabb::new(IVec3::new(0, -4, 0), IVec3::new(0, 300, 0)).clamp_y(0, 255);
        assert_eq!(aabb.min.y, 0);
        assert_eq!(aabb.max.y, 255);
    }
}
