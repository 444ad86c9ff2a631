//! Block-coordinate helpers: snapping, cardinal directions and quarter turns.
//!
//! Positions are plain [`IVec3`] values. Real-valued positions are snapped to
//! the containing cell with [`to_block`] at the point of use, so there is one
//! coordinate type rather than a hierarchy of vector wrappers.

use crate::core::types::{DVec3, IVec2, IVec3};

/// Snap a real position to the cell that contains it.
#[inline]
pub fn to_block(v: DVec3) -> IVec3 {
    v.floor().as_ivec3()
}

/// Round half up, matching the usual "nearest block" convention.
#[inline]
pub fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Horizontal projection of a position.
#[inline]
pub fn to_column(v: IVec3) -> IVec2 {
    IVec2::new(v.x, v.z)
}

/// Squared horizontal distance between two positions.
#[inline]
pub fn distance_sq_2d(a: IVec3, b: IVec3) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dz = (a.z - b.z) as f64;
    dx * dx + dz * dz
}

/// Squared distance between two positions.
#[inline]
pub fn distance_sq(a: IVec3, b: IVec3) -> f64 {
    (a - b).as_dvec3().length_squared()
}

/// The six face directions. North is -Z, east is +X.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit offset to the neighbouring cell.
    pub fn offset(self) -> IVec3 {
        match self {
            Direction::North => IVec3::new(0, 0, -1),
            Direction::East => IVec3::new(1, 0, 0),
            Direction::South => IVec3::new(0, 0, 1),
            Direction::West => IVec3::new(-1, 0, 0),
            Direction::Up => IVec3::new(0, 1, 0),
            Direction::Down => IVec3::new(0, -1, 0),
        }
    }
}

/// Neighbour offsets used by every six-connected traversal.
pub const FACE_OFFSETS: [IVec3; 6] = [
    IVec3::new(1, 0, 0),
    IVec3::new(-1, 0, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(0, -1, 0),
    IVec3::new(0, 0, 1),
    IVec3::new(0, 0, -1),
];

/// Axis a clipboard or block is mirrored across.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlipDirection {
    NorthSouth,
    WestEast,
    UpDown,
}

/// Number of clockwise quarter turns for `angle` degrees, or `None` when the
/// angle is not a multiple of 90. The result is signed and lies in `-3..=3`.
pub fn quarter_turns(angle: i32) -> Option<i32> {
    let angle = angle % 360;
    if angle % 90 != 0 {
        return None;
    }
    Some(angle / 90)
}

/// Rotate around the Y axis by `turns` quarter turns.
///
/// Same result as `x' = x·cos θ − z·sin θ`, `z' = x·sin θ + z·cos θ` for
/// `θ = turns · 90°`, computed exactly.
pub fn rotate_y(v: IVec3, turns: i32) -> IVec3 {
    match turns.rem_euclid(4) {
        0 => v,
        1 => IVec3::new(-v.z, v.y, v.x),
        2 => IVec3::new(-v.x, v.y, -v.z),
        _ => IVec3::new(v.z, v.y, -v.x),
    }
}
