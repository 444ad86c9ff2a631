//! Orientation tables for block data values.
//!
//! Each function maps `(type, data)` to the data value the same block has
//! after the world is rotated or mirrored. Types without orientation return
//! their data unchanged. For every type, `rotate90` and `rotate90_reverse`
//! are inverses, four rotations are the identity, and flipping twice along
//! the same axis is the identity.

use super::id::*;
use crate::math::FlipDirection;

fn is_stairs(t: u16) -> bool {
    matches!(
        t,
        OAK_WOOD_STAIRS
            | COBBLESTONE_STAIRS
            | BRICK_STAIRS
            | STONE_BRICK_STAIRS
            | NETHER_BRICK_STAIRS
            | SANDSTONE_STAIRS
            | SPRUCE_WOOD_STAIRS
            | BIRCH_WOOD_STAIRS
            | JUNGLE_WOOD_STAIRS
            | QUARTZ_STAIRS
            | ACACIA_STAIRS
            | DARK_OAK_STAIRS
    )
}

fn is_facing_block(t: u16) -> bool {
    matches!(
        t,
        LADDER | WALL_SIGN | CHEST | FURNACE | BURNING_FURNACE | ENDER_CHEST | TRAPPED_CHEST | HOPPER
    )
}

fn rail_rotate(data: i32, reverse: bool) -> i32 {
    let power = data & !0x7;
    let shape = match (data & 0x7, reverse) {
        (0, _) => 1,
        (1, _) => 0,
        (2, false) => 5,
        (3, false) => 4,
        (4, false) => 2,
        (5, false) => 3,
        (5, true) => 2,
        (4, true) => 3,
        (2, true) => 4,
        (3, true) => 5,
        _ => return data,
    };
    shape | power
}

/// Rotate a data value 90 degrees clockwise.
pub fn rotate90(type_id: u16, data: i32) -> i32 {
    match type_id {
        TORCH | REDSTONE_TORCH_OFF | REDSTONE_TORCH_ON => match data {
            1 => 3,
            2 => 4,
            3 => 2,
            4 => 1,
            _ => data,
        },

        MINECART_TRACKS => match data {
            6 => 7,
            7 => 8,
            8 => 9,
            9 => 6,
            _ => rail_rotate(data, false),
        },

        POWERED_RAIL | DETECTOR_RAIL | ACTIVATOR_RAIL => rail_rotate(data, false),

        t if is_stairs(t) => match data {
            0 => 2,
            1 => 3,
            2 => 1,
            3 => 0,
            4 => 6,
            5 => 7,
            6 => 5,
            7 => 4,
            _ => data,
        },

        LEVER | STONE_BUTTON | WOODEN_BUTTON => {
            let thrown = data & 0x8;
            let facing = match data & !0x8 {
                1 => 3,
                2 => 4,
                3 => 2,
                4 => 1,
                5 => 6,
                6 => 5,
                7 => 0,
                0 => 7,
                _ => return data,
            };
            facing | thrown
        }

        // Door top halves carry no orientation
        WOODEN_DOOR | IRON_DOOR if data & 0x8 != 0 => data,
        WOODEN_DOOR | IRON_DOOR | COCOA_PLANT | TRIPWIRE_HOOK => {
            ((data & 0x3) + 1) & 0x3 | (data & !0x3)
        }

        SIGN_POST => (data + 4) % 16,

        t if is_facing_block(t) || t == HEAD => match data {
            2 => 5,
            3 => 4,
            4 => 2,
            5 => 3,
            _ => data,
        },

        DISPENSER | DROPPER => {
            let power = data & 0x8;
            match data & !0x8 {
                2 => 5 | power,
                3 => 4 | power,
                4 => 2 | power,
                5 => 3 | power,
                _ => data,
            }
        }

        PUMPKIN | JACKOLANTERN if (0..=3).contains(&data) => (data + 1) & 0x3,

        LOG | LOG2 | HAY_BLOCK if (4..=11).contains(&data) => data ^ 0xc,

        COMPARATOR_OFF | COMPARATOR_ON | REDSTONE_REPEATER_OFF | REDSTONE_REPEATER_ON => {
            let dir = data & 0x3;
            ((dir + 1) & 0x3) | (data - dir)
        }

        TRAP_DOOR => {
            let rest = data & !0x3;
            match data & 0x3 {
                0 => 3 | rest,
                1 => 2 | rest,
                2 => rest,
                _ => 1 | rest,
            }
        }

        PISTON_BASE | PISTON_STICKY_BASE | PISTON_EXTENSION => {
            let rest = data & !0x7;
            match data & 0x7 {
                2 => 5 | rest,
                3 => 4 | rest,
                4 => 2 | rest,
                5 => 3 | rest,
                _ => data,
            }
        }

        BROWN_MUSHROOM_CAP | RED_MUSHROOM_CAP if data < 10 => (data * 3) % 10,

        VINE => ((data << 1) | (data >> 3)) & 0xf,

        FENCE_GATE => ((data + 1) & 0x3) | (data & !0x3),

        ANVIL => data ^ 0x1,

        BED => (data & !0x3) | ((data + 1) & 0x3),

        _ => data,
    }
}

/// Rotate a data value 90 degrees counter-clockwise.
pub fn rotate90_reverse(type_id: u16, data: i32) -> i32 {
    match type_id {
        TORCH | REDSTONE_TORCH_OFF | REDSTONE_TORCH_ON => match data {
            3 => 1,
            4 => 2,
            2 => 3,
            1 => 4,
            _ => data,
        },

        MINECART_TRACKS => match data {
            7 => 6,
            8 => 7,
            9 => 8,
            6 => 9,
            _ => rail_rotate(data, true),
        },

        POWERED_RAIL | DETECTOR_RAIL | ACTIVATOR_RAIL => rail_rotate(data, true),

        t if is_stairs(t) => match data {
            2 => 0,
            3 => 1,
            1 => 2,
            0 => 3,
            6 => 4,
            7 => 5,
            5 => 6,
            4 => 7,
            _ => data,
        },

        LEVER | STONE_BUTTON | WOODEN_BUTTON => {
            let thrown = data & 0x8;
            let facing = match data & !0x8 {
                3 => 1,
                4 => 2,
                2 => 3,
                1 => 4,
                6 => 5,
                5 => 6,
                0 => 7,
                7 => 0,
                _ => return data,
            };
            facing | thrown
        }

        WOODEN_DOOR | IRON_DOOR if data & 0x8 != 0 => data,
        WOODEN_DOOR | IRON_DOOR | COCOA_PLANT | TRIPWIRE_HOOK => {
            ((data & 0x3) + 3) & 0x3 | (data & !0x3)
        }

        SIGN_POST => (data + 12) % 16,

        t if is_facing_block(t) || t == HEAD => match data {
            5 => 2,
            4 => 3,
            2 => 4,
            3 => 5,
            _ => data,
        },

        DISPENSER | DROPPER => {
            let power = data & 0x8;
            match data & !0x8 {
                5 => 2 | power,
                4 => 3 | power,
                2 => 4 | power,
                3 => 5 | power,
                _ => data,
            }
        }

        PUMPKIN | JACKOLANTERN if (0..=3).contains(&data) => (data + 3) & 0x3,

        LOG | LOG2 | HAY_BLOCK if (4..=11).contains(&data) => data ^ 0xc,

        COMPARATOR_OFF | COMPARATOR_ON | REDSTONE_REPEATER_OFF | REDSTONE_REPEATER_ON => {
            let dir = data & 0x3;
            ((dir + 3) & 0x3) | (data - dir)
        }

        TRAP_DOOR => {
            let rest = data & !0x3;
            match data & 0x3 {
                3 => rest,
                2 => 1 | rest,
                0 => 2 | rest,
                _ => 3 | rest,
            }
        }

        PISTON_BASE | PISTON_STICKY_BASE | PISTON_EXTENSION => {
            let rest = data & !0x7;
            match data & 0x7 {
                5 => 2 | rest,
                4 => 3 | rest,
                2 => 4 | rest,
                3 => 5 | rest,
                _ => data,
            }
        }

        BROWN_MUSHROOM_CAP | RED_MUSHROOM_CAP if data < 10 => (data * 7) % 10,

        VINE => ((data >> 1) | (data << 3)) & 0xf,

        FENCE_GATE => ((data + 3) & 0x3) | (data & !0x3),

        ANVIL => data ^ 0x1,

        BED => (data & !0x3) | ((data - 1) & 0x3),

        _ => data,
    }
}

/// Mirror a data value across the given axis.
pub fn flip(type_id: u16, data: i32, direction: FlipDirection) -> i32 {
    let (flip_x, flip_y, flip_z) = match direction {
        FlipDirection::WestEast => (1, 0, 0),
        FlipDirection::UpDown => (0, 1, 0),
        FlipDirection::NorthSouth => (0, 0, 1),
    };

    match type_id {
        TORCH | REDSTONE_TORCH_OFF | REDSTONE_TORCH_ON if !(1..=4).contains(&data) => data,
        TORCH | REDSTONE_TORCH_OFF | REDSTONE_TORCH_ON | LEVER | STONE_BUTTON | WOODEN_BUTTON => {
            match data & !0x8 {
                1 => data + flip_x,
                2 => data - flip_x,
                3 => data + flip_z,
                4 => data - flip_z,
                5 | 7 => data ^ (flip_y << 1),
                6 | 0 => data ^ (flip_y * 6),
                _ => data,
            }
        }

        MINECART_TRACKS if (6..=9).contains(&data) => match data {
            6 => data + flip_x + flip_z * 3,
            7 => data - flip_x + flip_z,
            8 => data + flip_x - flip_z,
            _ => data - flip_x - flip_z * 3,
        },
        MINECART_TRACKS | POWERED_RAIL | DETECTOR_RAIL | ACTIVATOR_RAIL => match data & 0x7 {
            2 | 3 => data ^ flip_x,
            4 | 5 => data ^ flip_z,
            _ => data,
        },

        STEP | WOODEN_STEP => data ^ (flip_y << 3),

        t if is_stairs(t) => {
            let data = data ^ (flip_y << 2);
            match data {
                0 | 1 | 4 | 5 => data ^ flip_x,
                2 | 3 | 6 | 7 => data ^ flip_z,
                _ => data,
            }
        }

        WOODEN_DOOR | IRON_DOOR if data & 0x8 != 0 => data,
        WOODEN_DOOR | IRON_DOOR => match data & 0x3 {
            0 => data + flip_x + flip_z * 3,
            1 => data - flip_x + flip_z,
            2 => data + flip_x - flip_z,
            _ => data - flip_x - flip_z * 3,
        },

        SIGN_POST => match direction {
            FlipDirection::NorthSouth => (16 - data) & 0xf,
            FlipDirection::WestEast => (8 - data) & 0xf,
            FlipDirection::UpDown => data,
        },

        t if is_facing_block(t) || t == HEAD => match data {
            2 | 3 => data ^ flip_z,
            4 | 5 => data ^ flip_x,
            _ => data,
        },

        DISPENSER | DROPPER => match data & !0x8 {
            2 | 3 => data ^ flip_z,
            4 | 5 => data ^ flip_x,
            0 | 1 => data ^ flip_y,
            _ => data,
        },

        PUMPKIN | JACKOLANTERN if data > 3 => data,
        PUMPKIN | JACKOLANTERN | REDSTONE_REPEATER_OFF | REDSTONE_REPEATER_ON | COMPARATOR_OFF
        | COMPARATOR_ON | COCOA_PLANT | TRIPWIRE_HOOK | FENCE_GATE | BED => match data & 0x3 {
            0 | 2 => data ^ (flip_z << 1),
            _ => data ^ (flip_x << 1),
        },

        TRAP_DOOR => match data & 0x3 {
            0 | 1 => data ^ flip_z,
            _ => data ^ flip_x,
        },

        PISTON_BASE | PISTON_STICKY_BASE | PISTON_EXTENSION => match data & !0x8 {
            0 | 1 => data ^ flip_y,
            2 | 3 => data ^ flip_z,
            4 | 5 => data ^ flip_x,
            _ => data,
        },

        RED_MUSHROOM_CAP | BROWN_MUSHROOM_CAP => {
            let data = match data {
                1 | 4 | 7 => data + flip_x * 2,
                3 | 6 | 9 => data - flip_x * 2,
                _ => data,
            };
            match data {
                1..=3 => data + flip_z * 6,
                7..=9 => data - flip_z * 6,
                _ => data,
            }
        }

        VINE => {
            let (bit1, bit2) = match direction {
                FlipDirection::NorthSouth => (0x2, 0x8),
                FlipDirection::WestEast => (0x1, 0x4),
                FlipDirection::UpDown => return data,
            };
            let mut out = data & !(bit1 | bit2);
            if data & bit1 != 0 {
                out |= bit2;
            }
            if data & bit2 != 0 {
                out |= bit1;
            }
            out
        }

        _ => data,
    }
}
