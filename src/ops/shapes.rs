//! Rasterized cylinders, spheres and pyramids.
//!
//! Radii are widened by half a block before use, so radius `n` spans
//! `2n + 1` cells and radius 0 is a single cell. Offsets are walked in one
//! octant against the normalized boundary and mirrored into the others.

use crate::core::error::Error;
use crate::core::types::{DVec3, IVec3, Result};
use crate::edit::EditSession;
use crate::pattern::Pattern;

use super::{length_sq, length_sq_2d};

/// Every distinct sign flip of `offset` over x and z, and y when asked.
fn mirrored(offset: IVec3, mirror_y: bool) -> Vec<IVec3> {
    let mut out = Vec::with_capacity(8);
    for sx in [1, -1] {
        if sx < 0 && offset.x == 0 {
            continue;
        }
        for sy in [1, -1] {
            if sy < 0 && (offset.y == 0 || !mirror_y) {
                continue;
            }
            for sz in [1, -1] {
                if sz < 0 && offset.z == 0 {
                    continue;
                }
                out.push(IVec3::new(offset.x * sx, offset.y * sy, offset.z * sz));
            }
        }
    }
    out
}

impl EditSession<'_> {
    /// Upright cylinder with its base at `pos`. A negative height grows down.
    pub fn make_cylinder(
        &mut self,
        pos: IVec3,
        pattern: &mut dyn Pattern,
        radius: f64,
        height: i32,
        filled: bool,
    ) -> Result<usize> {
        self.make_elliptical_cylinder(pos, pattern, radius, radius, height, filled)
    }

    pub fn make_elliptical_cylinder(
        &mut self,
        pos: IVec3,
        pattern: &mut dyn Pattern,
        radius_x: f64,
        radius_z: f64,
        height: i32,
        filled: bool,
    ) -> Result<usize> {
        if radius_x < 0.0 || radius_z < 0.0 {
            return Err(Error::invalid("radius must be non-negative"));
        }
        if height == 0 {
            return Ok(0);
        }

        let mut pos = pos;
        let mut height = height;
        if height < 0 {
            height = -height;
            pos.y -= height;
        }
        let max_y = self.max_y();
        if pos.y < 0 {
            pos.y = 0;
        } else if pos.y + height - 1 > max_y {
            height = max_y - pos.y + 1;
        }

        let radius_x = radius_x + 0.5;
        let radius_z = radius_z + 0.5;
        let inv_x = 1.0 / radius_x;
        let inv_z = 1.0 / radius_z;
        let ceil_x = radius_x.ceil() as i32;
        let ceil_z = radius_z.ceil() as i32;

        let mut affected = 0;
        let mut next_xn = 0.0;
        'x: for x in 0..=ceil_x {
            let xn = next_xn;
            next_xn = (x + 1) as f64 * inv_x;
            let mut next_zn = 0.0;
            for z in 0..=ceil_z {
                let zn = next_zn;
                next_zn = (z + 1) as f64 * inv_z;

                if length_sq_2d(xn, zn) > 1.0 {
                    if z == 0 {
                        break 'x;
                    }
                    break;
                }

                if !filled && length_sq_2d(next_xn, zn) <= 1.0 && length_sq_2d(xn, next_zn) <= 1.0 {
                    continue;
                }

                for y in 0..height {
                    for offset in mirrored(IVec3::new(x, y, z), false) {
                        if self.set_block_with(pos + offset, pattern)? {
                            affected += 1;
                        }
                    }
                }
            }
        }

        Ok(affected)
    }

    /// Sphere centered on `pos`.
    pub fn make_sphere(&mut self, pos: IVec3, pattern: &mut dyn Pattern, radius: f64, filled: bool) -> Result<usize> {
        self.make_ellipsoid(pos, pattern, DVec3::splat(radius), filled)
    }

    pub fn make_ellipsoid(&mut self, pos: IVec3, pattern: &mut dyn Pattern, radius: DVec3, filled: bool) -> Result<usize> {
        if radius.min_element() < 0.0 {
            return Err(Error::invalid("radius must be non-negative"));
        }

        let radius = radius + DVec3::splat(0.5);
        let inv = radius.recip();
        let ceil = radius.ceil().as_ivec3();

        let mut affected = 0;
        let mut next_xn = 0.0;
        'x: for x in 0..=ceil.x {
            let xn = next_xn;
            next_xn = (x + 1) as f64 * inv.x;
            let mut next_yn = 0.0;
            'y: for y in 0..=ceil.y {
                let yn = next_yn;
                next_yn = (y + 1) as f64 * inv.y;
                let mut next_zn = 0.0;
                for z in 0..=ceil.z {
                    let zn = next_zn;
                    next_zn = (z + 1) as f64 * inv.z;

                    if length_sq(xn, yn, zn) > 1.0 {
                        if z == 0 {
                            if y == 0 {
                                break 'x;
                            }
                            break 'y;
                        }
                        break;
                    }

                    if !filled
                        && length_sq(next_xn, yn, zn) <= 1.0
                        && length_sq(xn, next_yn, zn) <= 1.0
                        && length_sq(xn, yn, next_zn) <= 1.0
                    {
                        continue;
                    }

                    for offset in mirrored(IVec3::new(x, y, z), true) {
                        if self.set_block_with(pos + offset, pattern)? {
                            affected += 1;
                        }
                    }
                }
            }
        }

        Ok(affected)
    }

    /// Square pyramid with its base centered on `pos`, `size` layers tall.
    pub fn make_pyramid(&mut self, pos: IVec3, pattern: &mut dyn Pattern, size: i32, filled: bool) -> Result<usize> {
        if size < 0 {
            return Err(Error::invalid("size must be non-negative"));
        }

        let mut affected = 0;
        let mut half = size;
        for y in 0..=size {
            half -= 1;
            for x in 0..=half {
                for z in 0..=half {
                    if !filled && x != half && z != half {
                        continue;
                    }
                    for offset in mirrored(IVec3::new(x, y, z), false) {
                        if self.set_block_with(pos + offset, pattern)? {
                            affected += 1;
                        }
                    }
                }
            }
        }

        Ok(affected)
    }
}
