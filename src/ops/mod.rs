//! Bulk geometric operations on an [`EditSession`].
//!
//! Every operation writes through [`EditSession::set_block`], returns the
//! number of cells that changed, and stops at the first
//! [`Error::LimitExceeded`](crate::core::Error::LimitExceeded) without
//! undoing what it already wrote.

pub mod distribution;
pub mod expression;
pub mod fill;
pub mod generation;
pub mod hollow;
pub mod lines;
pub mod liquid;
pub mod shapes;
pub mod structure;
pub mod surface;

pub use distribution::Countable;
pub use expression::{Deformation, ShapeExpression};
pub use generation::{PineTreeGenerator, TreeGenerator};

use std::collections::HashSet;

use crate::core::types::{IVec3, Result};
use crate::edit::EditSession;
use crate::math::{Aabb, FACE_OFFSETS};
use crate::pattern::Pattern;

impl EditSession<'_> {
    /// Restrict a box to the world's height range, or `None` if nothing is left.
    pub(crate) fn clamp_to_world(&self, bounds: Aabb) -> Option<Aabb> {
        let max_y = self.max_y();
        if bounds.max.y < 0 || bounds.min.y > max_y {
            return None;
        }
        Some(bounds.clamp_y(0, max_y))
    }

    /// Write a set of cells in ascending coordinate order.
    pub(crate) fn set_cells(&mut self, cells: &HashSet<IVec3>, pattern: &mut dyn Pattern) -> Result<usize> {
        let mut sorted: Vec<IVec3> = cells.iter().copied().collect();
        sorted.sort_by_key(|p| (p.x, p.y, p.z));

        let mut affected = 0;
        for pos in sorted {
            if self.set_block_with(pos, pattern)? {
                affected += 1;
            }
        }
        Ok(affected)
    }
}

#[inline]
pub(crate) fn length_sq(x: f64, y: f64, z: f64) -> f64 {
    x * x + y * y + z * z
}

#[inline]
pub(crate) fn length_sq_2d(x: f64, z: f64) -> f64 {
    x * x + z * z
}

/// Whether some face neighbour of `pos` fails `inside`.
pub(crate) fn touches_outside(pos: IVec3, mut inside: impl FnMut(IVec3) -> bool) -> bool {
    FACE_OFFSETS.iter().any(|offset| !inside(pos + *offset))
}
