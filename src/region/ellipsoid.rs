//! Ellipsoid region

use super::Region;
use crate::core::types::{DVec3, IVec3};

/// Ellipsoid centered on a block.
///
/// The radius is widened by half a block on each axis so that a radius of
/// `n` covers `2n + 1` cells along that axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipsoidRegion {
    center: IVec3,
    radius: DVec3,
}

impl EllipsoidRegion {
    pub fn new(center: IVec3, radius: DVec3) -> Self {
        Self {
            center,
            radius: radius.abs() + DVec3::splat(0.5),
        }
    }

    /// Effective radius including the half-block margin.
    pub fn radius(&self) -> DVec3 {
        self.radius
    }
}

impl Region for EllipsoidRegion {
    fn minimum_point(&self) -> IVec3 {
        (self.center.as_dvec3() - self.radius).ceil().as_ivec3()
    }

    fn maximum_point(&self) -> IVec3 {
        (self.center.as_dvec3() + self.radius).floor().as_ivec3()
    }

    fn contains(&self, pt: IVec3) -> bool {
        ((pt - self.center).as_dvec3() / self.radius).length_squared() <= 1.0
    }

    fn center(&self) -> DVec3 {
        self.center.as_dvec3()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let region = EllipsoidRegion::new(IVec3::new(10, 10, 10), DVec3::new(2.0, 1.0, 3.0));
        assert_eq!(region.minimum_point(), IVec3::new(8, 9, 7));
        assert_eq!(region.maximum_point(), IVec3::new(12, 11, 13));
    }

    #[test]
    fn test_contains() {
        let region = EllipsoidRegion::new(IVec3::ZERO, DVec3::splat(2.0));
        assert!(region.contains(IVec3::ZERO));
        assert!(region.contains(IVec3::new(2, 0, 0)));
        assert!(!region.contains(IVec3::new(2, 2, 0)));
        assert!(region.as_cuboid().is_none());
    }

    #[test]
    fn test_radius_zero_is_single_cell() {
        let region = EllipsoidRegion::new(IVec3::new(1, 2, 3), DVec3::ZERO);
        let cells: Vec<_> = region.iter().collect();
        assert_eq!(cells, vec![IVec3::new(1, 2, 3)]);
    }
}
