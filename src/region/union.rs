//! Union of several regions

use super::Region;
use crate::core::types::IVec3;

/// Every coordinate contained in at least one member.
///
/// Iteration scans the combined bounding box, so overlapping members yield
/// each coordinate once.
#[derive(Default)]
pub struct RegionUnion {
    members: Vec<Box<dyn Region>>,
}

impl RegionUnion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, region: impl Region + 'static) {
        self.members.push(Box::new(region));
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Region for RegionUnion {
    fn minimum_point(&self) -> IVec3 {
        self.members
            .iter()
            .map(|r| r.minimum_point())
            .reduce(|a, b| a.min(b))
            .unwrap_or(IVec3::ZERO)
    }

    fn maximum_point(&self) -> IVec3 {
        self.members
            .iter()
            .map(|r| r.maximum_point())
            .reduce(|a, b| a.max(b))
            .unwrap_or(IVec3::ZERO)
    }

    fn contains(&self, pt: IVec3) -> bool {
        self.members.iter().any(|r| r.contains(pt))
    }

    fn iter(&self) -> Box<dyn Iterator<Item = IVec3> + '_> {
        if self.members.is_empty() {
            return Box::new(std::iter::empty());
        }
        Box::new(self.bounding_box().iter().filter(move |p| self.contains(*p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::CuboidRegion;

    #[test]
    fn test_overlap_counted_once() {
        let mut union = RegionUnion::new();
        union.push(CuboidRegion::new(IVec3::ZERO, IVec3::new(1, 0, 0)));
        union.push(CuboidRegion::new(IVec3::new(1, 0, 0), IVec3::new(2, 0, 0)));
        assert_eq!(union.len(), 2);
        assert_eq!(union.volume(), 3);
    }

    #[test]
    fn test_empty_union() {
        let union = RegionUnion::new();
        assert!(union.is_empty());
        assert_eq!(union.iter().count(), 0);
        assert!(!union.contains(IVec3::ZERO));
    }
}
