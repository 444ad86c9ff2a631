//! Thick lines and curves.

use std::collections::HashSet;

use crate::core::error::Error;
use crate::core::types::{DVec3, IVec3, Result};
use crate::edit::EditSession;
use crate::math::vector::round_half_up;
use crate::math::{KochanekBartels, Node, FACE_OFFSETS};
use crate::pattern::Pattern;

/// Cells of a straight line, stepping one cell at a time along the axis
/// with the largest extent.
fn line_cells(from: IVec3, to: IVec3) -> HashSet<IVec3> {
    let start = from.to_array();
    let delta = (to - from).to_array();
    let extent = delta.map(i32::abs);
    let sign = delta.map(|d| if d > 0 { 1 } else { -1 });

    let mut cells = HashSet::new();
    let dominant = extent[1..]
        .iter()
        .zip(1..)
        .fold(0, |best, (&e, i)| if e > extent[best] { i } else { best });
    let steps = extent[dominant];
    if steps == 0 {
        cells.insert(from);
        return cells;
    }

    for step in 0..=steps {
        let mut cell = [0; 3];
        for axis in 0..3 {
            cell[axis] = if axis == dominant {
                start[axis] + step * sign[axis]
            } else {
                let offset = step as f64 * extent[axis] as f64 / steps as f64 * sign[axis] as f64;
                round_half_up(start[axis] as f64 + offset)
            };
        }
        cells.insert(IVec3::from_array(cell));
    }
    cells
}

/// Every cell within `radius` of any cell of the set.
fn balloon(cells: &HashSet<IVec3>, radius: f64) -> HashSet<IVec3> {
    let ceil = radius.ceil() as i32;
    let mut out = HashSet::new();
    for center in cells {
        for x in -ceil..=ceil {
            for y in -ceil..=ceil {
                for z in -ceil..=ceil {
                    let offset = IVec3::new(x, y, z);
                    if offset.as_dvec3().length() <= radius {
                        out.insert(*center + offset);
                    }
                }
            }
        }
    }
    out
}

/// Cells with at least one face neighbour missing from the set.
fn hollowed(cells: &HashSet<IVec3>) -> HashSet<IVec3> {
    cells
        .iter()
        .filter(|pos| FACE_OFFSETS.iter().any(|offset| !cells.contains(&(**pos + *offset))))
        .copied()
        .collect()
}

impl EditSession<'_> {
    /// Line between two points, thickened to `radius`.
    pub fn draw_line(
        &mut self,
        pattern: &mut dyn Pattern,
        from: IVec3,
        to: IVec3,
        radius: f64,
        filled: bool,
    ) -> Result<usize> {
        if radius < 0.0 {
            return Err(Error::invalid("radius must be non-negative"));
        }
        self.draw_thick(line_cells(from, to), pattern, radius, filled)
    }

    /// Kochanek-Bartels curve through `nodes`, thickened to `radius`.
    ///
    /// `quality` is the number of samples per block of curve length.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_spline(
        &mut self,
        pattern: &mut dyn Pattern,
        nodes: &[DVec3],
        tension: f64,
        bias: f64,
        continuity: f64,
        quality: f64,
        radius: f64,
        filled: bool,
    ) -> Result<usize> {
        if nodes.is_empty() {
            return Err(Error::invalid("a spline needs at least one node"));
        }
        if quality <= 0.0 {
            return Err(Error::invalid("quality must be positive"));
        }
        if radius < 0.0 {
            return Err(Error::invalid("radius must be non-negative"));
        }

        let spline = KochanekBartels::new(
            nodes
                .iter()
                .map(|&position| Node {
                    position,
                    tension,
                    bias,
                    continuity,
                })
                .collect(),
        );

        let length = spline.arc_length(0.0, 1.0);
        let step = 1.0 / length / quality;
        let mut cells = HashSet::new();
        let mut t = 0.0;
        while t <= 1.0 {
            if let Some(p) = spline.position(t) {
                cells.insert(IVec3::new(round_half_up(p.x), round_half_up(p.y), round_half_up(p.z)));
            }
            t += step;
        }

        self.draw_thick(cells, pattern, radius, filled)
    }

    fn draw_thick(
        &mut self,
        cells: HashSet<IVec3>,
        pattern: &mut dyn Pattern,
        radius: f64,
        filled: bool,
    ) -> Result<usize> {
        let mut cells = balloon(&cells, radius);
        if !filled {
            cells = hollowed(&cells);
        }
        self.set_cells(&cells, pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{id, Block};
    use crate::world::MemoryWorld;

    #[test]
    fn test_line_cells_dominant_axis() {
        let cells = line_cells(IVec3::new(0, 0, 0), IVec3::new(4, 2, 0));
        assert_eq!(cells.len(), 5);
        assert!(cells.contains(&IVec3::new(0, 0, 0)));
        assert!(cells.contains(&IVec3::new(2, 1, 0)));
        assert!(cells.contains(&IVec3::new(4, 2, 0)));

        let down = line_cells(IVec3::new(0, 5, 0), IVec3::new(1, 0, -1));
        assert_eq!(down.len(), 6);
        assert!(down.contains(&IVec3::new(1, 0, -1)));
    }

    #[test]
    fn test_line_single_point() {
        let cells = line_cells(IVec3::ONE, IVec3::ONE);
        assert_eq!(cells, HashSet::from([IVec3::ONE]));
    }

    #[test]
    fn test_balloon_and_hollow() {
        let point = HashSet::from([IVec3::ZERO]);
        let ball = balloon(&point, 1.0);
        assert_eq!(ball.len(), 7);
        let shell = hollowed(&ball);
        assert_eq!(shell.len(), 6);
        assert!(!shell.contains(&IVec3::ZERO));
    }

    #[test]
    fn test_draw_line() {
        let mut world = MemoryWorld::new(64);
        let mut session = EditSession::new(&mut world, None);
        let affected = session
            .draw_line(&mut Block::of(id::GLASS), IVec3::new(0, 10, 0), IVec3::new(5, 10, 0), 0.0, true)
            .unwrap();
        assert_eq!(affected, 6);
        assert!(session.draw_line(&mut Block::AIR, IVec3::ZERO, IVec3::ONE, -1.0, true).is_err());
    }

    #[test]
    fn test_draw_spline_straight() {
        let mut world = MemoryWorld::new(64);
        {
            let mut session = EditSession::new(&mut world, None);
            let nodes = [DVec3::new(0.0, 10.0, 0.0), DVec3::new(10.0, 10.0, 0.0)];
            let affected = session
                .draw_spline(&mut Block::of(id::GLASS), &nodes, 0.0, 0.0, 0.0, 4.0, 0.0, true)
                .unwrap();
            assert_eq!(affected, 11);
        }
        for (pos, _) in world.snapshot() {
            assert_eq!((pos.y, pos.z), (10, 0));
        }
    }

    #[test]
    fn test_draw_spline_arguments() {
        let mut world = MemoryWorld::new(64);
        let mut session = EditSession::new(&mut world, None);
        let mut glass = Block::of(id::GLASS);
        assert!(session.draw_spline(&mut glass, &[], 0.0, 0.0, 0.0, 1.0, 0.0, true).is_err());
        assert!(session
            .draw_spline(&mut glass, &[DVec3::ZERO], 0.0, 0.0, 0.0, 0.0, 0.0, true)
            .is_err());
    }
}
