//! Shapes and deformations driven by caller-supplied expressions.
//!
//! Expression parsing lives outside this crate. Callers hand in anything
//! implementing [`ShapeExpression`] or [`Deformation`]; closures work too.
//! Positions are passed in a normalized space: the block position minus
//! `zero`, divided per axis by `unit`.

use std::collections::HashMap;

use crate::block::Block;
use crate::core::error::Error;
use crate::core::types::{DVec3, IVec3, Result};
use crate::edit::EditSession;
use crate::math::vector::round_half_up;
use crate::math::FACE_OFFSETS;
use crate::pattern::Pattern;
use crate::region::Region;

/// Scalar field deciding which cells belong to a shape.
pub trait ShapeExpression {
    /// Evaluate at a normalized position.
    ///
    /// `material` holds the block the pattern proposed and may be replaced.
    /// A positive result puts the cell in the shape.
    fn evaluate(&mut self, pos: DVec3, material: &mut Block) -> Result<f64>;
}

impl<F> ShapeExpression for F
where
    F: FnMut(DVec3, &mut Block) -> Result<f64>,
{
    fn evaluate(&mut self, pos: DVec3, material: &mut Block) -> Result<f64> {
        self(pos, material)
    }
}

/// Maps a destination position to the position its block is read from.
/// Both are in normalized space.
pub trait Deformation {
    fn source(&mut self, pos: DVec3) -> Result<DVec3>;
}

impl<F> Deformation for F
where
    F: FnMut(DVec3) -> Result<DVec3>,
{
    fn source(&mut self, pos: DVec3) -> Result<DVec3> {
        self(pos)
    }
}

/// Memoized shape membership for the hollow rule.
struct ShapeSampler<'a> {
    expression: &'a mut dyn ShapeExpression,
    zero: DVec3,
    unit: DVec3,
    cache: HashMap<IVec3, Option<Block>>,
}

impl ShapeSampler<'_> {
    fn evaluate(&mut self, pos: IVec3, pattern: &mut dyn Pattern) -> Option<Block> {
        let mut material = pattern.next(pos);
        let scaled = (pos.as_dvec3() - self.zero) / self.unit;
        match self.expression.evaluate(scaled, &mut material) {
            Ok(value) if value > 0.0 => Some(material),
            Ok(_) => None,
            Err(err) => {
                log::warn!("Shape expression failed at {:?}: {}", pos, err);
                None
            }
        }
    }

    fn material(&mut self, pos: IVec3, pattern: &mut dyn Pattern) -> Option<Block> {
        if let Some(cached) = self.cache.get(&pos) {
            return cached.clone();
        }
        let material = self.evaluate(pos, pattern);
        self.cache.insert(pos, material.clone());
        material
    }
}

fn check_unit(unit: DVec3) -> Result<()> {
    if unit.x == 0.0 || unit.y == 0.0 || unit.z == 0.0 {
        return Err(Error::invalid("unit must be non-zero on every axis"));
    }
    Ok(())
}

impl EditSession<'_> {
    /// Fill the cells of a region where the expression is positive.
    ///
    /// With `hollow`, a cell is only written when one of its face neighbours
    /// is outside the shape. Neighbours beyond the region are evaluated too.
    pub fn make_shape(
        &mut self,
        region: &dyn Region,
        zero: DVec3,
        unit: DVec3,
        pattern: &mut dyn Pattern,
        expression: &mut dyn ShapeExpression,
        hollow: bool,
    ) -> Result<usize> {
        check_unit(unit)?;

        let mut sampler = ShapeSampler {
            expression,
            zero,
            unit,
            cache: HashMap::new(),
        };
        let mut affected = 0;

        for pos in region.iter() {
            let material = if hollow {
                sampler.material(pos, pattern)
            } else {
                sampler.evaluate(pos, pattern)
            };
            let Some(material) = material else {
                continue;
            };

            if hollow {
                let on_surface = FACE_OFFSETS
                    .iter()
                    .any(|offset| sampler.material(pos + *offset, pattern).is_none());
                if !on_surface {
                    continue;
                }
            }

            if self.set_block(pos, &material)? {
                affected += 1;
            }
        }

        Ok(affected)
    }

    /// Rewrite each cell of a region with the block found at the position
    /// the deformation maps it to.
    ///
    /// Every source is read before anything is written.
    pub fn deform_region(
        &mut self,
        region: &dyn Region,
        zero: DVec3,
        unit: DVec3,
        deformation: &mut dyn Deformation,
    ) -> Result<usize> {
        check_unit(unit)?;

        let mut queued = Vec::new();
        for pos in region.iter() {
            let scaled = (pos.as_dvec3() - zero) / unit;
            let source = deformation.source(scaled)? * unit + zero;
            let source = IVec3::new(round_half_up(source.x), round_half_up(source.y), round_half_up(source.z));
            queued.push((pos, self.get_block(source)));
        }

        let mut affected = 0;
        for (pos, block) in queued {
            if self.set_block(pos, &block)? {
                affected += 1;
            }
        }
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::id;
    use crate::region::CuboidRegion;
    use crate::world::{MemoryWorld, World};

    fn ball(pos: DVec3, _material: &mut Block) -> Result<f64> {
        Ok(1.0 - pos.length_squared())
    }

    #[test]
    fn test_shape_sphere_expression() {
        let mut world = MemoryWorld::new(64);
        let mut session = EditSession::new(&mut world, None);
        let region = CuboidRegion::new(IVec3::new(-3, 17, -3), IVec3::new(3, 23, 3));
        let zero = DVec3::new(0.0, 20.0, 0.0);
        let affected = session
            .make_shape(&region, zero, DVec3::splat(2.5), &mut Block::of(id::GLASS), &mut ball, false)
            .unwrap();
        assert!(affected > 0);
        assert_eq!(session.block_type(IVec3::new(0, 20, 0)), id::GLASS);
        assert_eq!(session.block_type(IVec3::new(2, 20, 0)), id::GLASS);
        assert!(session.get_block(IVec3::new(3, 20, 0)).is_air());
    }

    #[test]
    fn test_shape_hollow_skips_interior() {
        let mut world = MemoryWorld::new(64);
        let mut session = EditSession::new(&mut world, None);
        let region = CuboidRegion::new(IVec3::new(-3, 17, -3), IVec3::new(3, 23, 3));
        let zero = DVec3::new(0.0, 20.0, 0.0);
        session
            .make_shape(&region, zero, DVec3::splat(2.5), &mut Block::of(id::GLASS), &mut ball, true)
            .unwrap();
        assert!(session.get_block(IVec3::new(0, 20, 0)).is_air());
        assert_eq!(session.block_type(IVec3::new(2, 20, 0)), id::GLASS);
    }

    #[test]
    fn test_shape_expression_sets_material() {
        let mut world = MemoryWorld::new(64);
        let mut session = EditSession::new(&mut world, None);
        let region = CuboidRegion::new(IVec3::new(0, 1, 0), IVec3::new(3, 1, 0));
        let mut stripes = |pos: DVec3, material: &mut Block| -> Result<f64> {
            if pos.x >= 2.0 {
                *material = Block::new(id::CLOTH, 14);
            }
            Ok(1.0)
        };
        session
            .make_shape(&region, DVec3::ZERO, DVec3::ONE, &mut Block::of(id::STONE), &mut stripes, false)
            .unwrap();
        assert_eq!(session.block_type(IVec3::new(1, 1, 0)), id::STONE);
        assert_eq!(session.get_block(IVec3::new(3, 1, 0)), Block::new(id::CLOTH, 14));
    }

    #[test]
    fn test_shape_failure_skips_cell() {
        let mut world = MemoryWorld::new(64);
        let mut session = EditSession::new(&mut world, None);
        let region = CuboidRegion::new(IVec3::new(0, 1, 0), IVec3::new(3, 1, 0));
        let mut failing = |pos: DVec3, _: &mut Block| -> Result<f64> {
            if pos.x == 1.0 {
                return Err(Error::Expression("division by zero".into()));
            }
            Ok(1.0)
        };
        let affected = session
            .make_shape(&region, DVec3::ZERO, DVec3::ONE, &mut Block::of(id::STONE), &mut failing, false)
            .unwrap();
        assert_eq!(affected, 3);
        assert!(session.get_block(IVec3::new(1, 1, 0)).is_air());
    }

    #[test]
    fn test_zero_unit_rejected() {
        let mut world = MemoryWorld::new(64);
        let mut session = EditSession::new(&mut world, None);
        let region = CuboidRegion::new(IVec3::ZERO, IVec3::ONE);
        let unit = DVec3::new(1.0, 0.0, 1.0);
        assert!(session
            .make_shape(&region, DVec3::ZERO, unit, &mut Block::AIR, &mut ball, false)
            .is_err());
    }

    #[test]
    fn test_deform_reads_before_writing() {
        let mut world = MemoryWorld::new(64);
        for x in 0..4 {
            world.put(IVec3::new(x, 1, 0), Block::new(id::CLOTH, x as i8));
        }
        {
            let mut session = EditSession::new(&mut world, None);
            let region = CuboidRegion::new(IVec3::new(0, 1, 0), IVec3::new(3, 1, 0));
            // Mirror along x around 1.5
            let mut mirror = |pos: DVec3| -> Result<DVec3> { Ok(DVec3::new(3.0 - pos.x, pos.y, pos.z)) };
            session.deform_region(&region, DVec3::ZERO, DVec3::ONE, &mut mirror).unwrap();
        }
        for x in 0..4 {
            assert_eq!(world.get_block(IVec3::new(x, 1, 0)).data, (3 - x) as i8);
        }
    }

    #[test]
    fn test_deform_error_propagates() {
        let mut world = MemoryWorld::new(64);
        let mut session = EditSession::new(&mut world, None);
        let region = CuboidRegion::new(IVec3::ZERO, IVec3::ONE);
        let mut broken = |_: DVec3| -> Result<DVec3> { Err(Error::Expression("unknown variable".into())) };
        let err = session
            .deform_region(&region, DVec3::ZERO, DVec3::ONE, &mut broken)
            .unwrap_err();
        assert!(matches!(err, Error::Expression(_)));
        assert!(session.is_empty());
    }
}
