//! Static block metadata: placement order, attachments and material classes.

use super::id::*;
use crate::math::Direction;

/// When a block may be written during a queued edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlaceOrder {
    /// Written immediately after the edit in insertion order.
    Normal,
    /// Needs a supporting block; written after all normal blocks.
    Last,
    /// Depends on other blocks being complete; written in dependency order.
    Final,
}

const PLACE_LAST: &[u16] = &[
    SAPLING,
    BED,
    POWERED_RAIL,
    DETECTOR_RAIL,
    LONG_GRASS,
    DEAD_BUSH,
    PISTON_EXTENSION,
    YELLOW_FLOWER,
    RED_FLOWER,
    BROWN_MUSHROOM,
    RED_MUSHROOM,
    TORCH,
    FIRE,
    REDSTONE_WIRE,
    CROPS,
    LADDER,
    MINECART_TRACKS,
    LEVER,
    STONE_PRESSURE_PLATE,
    WOODEN_PRESSURE_PLATE,
    REDSTONE_TORCH_OFF,
    REDSTONE_TORCH_ON,
    STONE_BUTTON,
    SNOW,
    PORTAL,
    REDSTONE_REPEATER_OFF,
    REDSTONE_REPEATER_ON,
    TRAP_DOOR,
    VINE,
    LILY_PAD,
    NETHER_WART,
    PISTON_BASE,
    PISTON_STICKY_BASE,
    PISTON_MOVING_PIECE,
    COCOA_PLANT,
    TRIPWIRE_HOOK,
    TRIPWIRE,
    FLOWER_POT,
    CARROTS,
    POTATOES,
    WOODEN_BUTTON,
    ANVIL,
    PRESSURE_PLATE_LIGHT,
    PRESSURE_PLATE_HEAVY,
    COMPARATOR_OFF,
    COMPARATOR_ON,
    ACTIVATOR_RAIL,
    CARPET,
    DOUBLE_PLANT,
];

const PLACE_FINAL: &[u16] = &[
    SIGN_POST,
    WOODEN_DOOR,
    WALL_SIGN,
    IRON_DOOR,
    CACTUS,
    REED,
    CAKE_BLOCK,
    PISTON_EXTENSION,
    PISTON_MOVING_PIECE,
];

/// Placement class of a block type. A type listed in both the "last" and
/// "final" tables is treated as "last".
pub fn place_order(type_id: u16) -> PlaceOrder {
    if PLACE_LAST.contains(&type_id) {
        PlaceOrder::Last
    } else if PLACE_FINAL.contains(&type_id) {
        PlaceOrder::Final
    } else {
        PlaceOrder::Normal
    }
}

pub fn should_place_last(type_id: u16) -> bool {
    place_order(type_id) == PlaceOrder::Last
}

pub fn should_place_final(type_id: u16) -> bool {
    PLACE_FINAL.contains(&type_id)
}

/// Direction towards the block this one is attached to, if any.
///
/// Door top halves report no attachment; the bottom half hangs on the block
/// below. The final-placement walk pulls the top half in ahead of the bottom.
pub fn attachment(type_id: u16, data: i32) -> Option<Direction> {
    use Direction::*;

    let data = data & 0xf;
    match type_id {
        SAPLING | LONG_GRASS | DEAD_BUSH | YELLOW_FLOWER | RED_FLOWER | BROWN_MUSHROOM
        | RED_MUSHROOM | REDSTONE_WIRE | CROPS | SIGN_POST | STONE_PRESSURE_PLATE
        | WOODEN_PRESSURE_PLATE | CACTUS | REED | CAKE_BLOCK | REDSTONE_REPEATER_OFF
        | REDSTONE_REPEATER_ON | PUMPKIN_STEM | MELON_STEM | NETHER_WART | TRIPWIRE
        | FLOWER_POT | CARROTS | POTATOES | ANVIL | PRESSURE_PLATE_LIGHT | PRESSURE_PLATE_HEAVY
        | COMPARATOR_OFF | COMPARATOR_ON | CARPET | DOUBLE_PLANT => Some(Down),

        WOODEN_DOOR | IRON_DOOR if data & 0x8 != 0 => None,
        WOODEN_DOOR | IRON_DOOR => Some(Down),

        PISTON_EXTENSION => match data & 0x7 {
            0 => Some(Up),
            1 => Some(Down),
            2 => Some(West),
            5 => Some(North),
            3 => Some(East),
            4 => Some(South),
            _ => None,
        },

        TORCH | REDSTONE_TORCH_ON | REDSTONE_TORCH_OFF => match data {
            0 | 5 => Some(Down),
            4 => Some(West),
            1 => Some(North),
            3 => Some(East),
            2 => Some(South),
            _ => None,
        },

        LADDER | WALL_SIGN => match data {
            2 => Some(West),
            5 => Some(North),
            3 => Some(East),
            4 => Some(South),
            _ => None,
        },

        LEVER => match data & 0x7 {
            4 => Some(West),
            1 => Some(North),
            3 => Some(East),
            2 => Some(South),
            5 | 6 => Some(Down),
            _ => Some(Up),
        },

        STONE_BUTTON | WOODEN_BUTTON => match data & 0x7 {
            4 => Some(West),
            1 => Some(North),
            3 => Some(East),
            2 => Some(South),
            _ => None,
        },

        TRAP_DOOR => match data & 0x3 {
            0 => Some(West),
            3 => Some(North),
            1 => Some(East),
            _ => Some(South),
        },

        VINE => match data {
            0 => Some(Up),
            1 => Some(West),
            2 => Some(North),
            4 => Some(East),
            8 => Some(South),
            _ => None,
        },

        COCOA_PLANT => match data & 0x3 {
            0 => Some(West),
            1 => Some(North),
            2 => Some(East),
            _ => Some(South),
        },

        TRIPWIRE_HOOK => match data & 0x3 {
            2 => Some(West),
            3 => Some(North),
            0 => Some(East),
            _ => Some(South),
        },

        POWERED_RAIL | DETECTOR_RAIL | MINECART_TRACKS | ACTIVATOR_RAIL => match data & 0x7 {
            3 => Some(West),
            4 => Some(North),
            2 => Some(East),
            5 => Some(South),
            _ => None,
        },

        _ => None,
    }
}

pub fn is_door(type_id: u16) -> bool {
    matches!(type_id, WOODEN_DOOR | IRON_DOOR)
}

/// Whether an entity can move through the block.
pub fn can_pass_through(type_id: u16, data: i32) -> bool {
    match type_id {
        SNOW => data == 0 || data == 8,
        AIR | WATER | STATIONARY_WATER | SAPLING | POWERED_RAIL | DETECTOR_RAIL | WEB
        | LONG_GRASS | DEAD_BUSH | YELLOW_FLOWER | RED_FLOWER | BROWN_MUSHROOM | RED_MUSHROOM
        | TORCH | FIRE | REDSTONE_WIRE | CROPS | SIGN_POST | LADDER | MINECART_TRACKS
        | WALL_SIGN | LEVER | STONE_PRESSURE_PLATE | WOODEN_PRESSURE_PLATE | REDSTONE_TORCH_OFF
        | REDSTONE_TORCH_ON | STONE_BUTTON | REED | PORTAL | REDSTONE_REPEATER_OFF
        | REDSTONE_REPEATER_ON | PUMPKIN_STEM | MELON_STEM | VINE | NETHER_WART | END_PORTAL
        | TRIPWIRE_HOOK | TRIPWIRE | CARROTS | POTATOES | WOODEN_BUTTON | PRESSURE_PLATE_LIGHT
        | PRESSURE_PLATE_HEAVY | COMPARATOR_OFF | COMPARATOR_ON | ACTIVATOR_RAIL | CARPET
        | DOUBLE_PLANT => true,
        _ => false,
    }
}

/// Blocks that hold an inventory.
pub fn is_container(type_id: u16) -> bool {
    matches!(
        type_id,
        DISPENSER
            | FURNACE
            | BURNING_FURNACE
            | CHEST
            | BREWING_STAND
            | TRAPPED_CHEST
            | HOPPER
            | DROPPER
            | ENDER_CHEST
    )
}

/// Blocks that occur naturally as ground.
pub fn is_natural_terrain(type_id: u16) -> bool {
    matches!(
        type_id,
        STONE
            | GRASS
            | DIRT
            | BEDROCK
            | SAND
            | GRAVEL
            | CLAY
            | MYCELIUM
            | PACKED_ICE
            | STAINED_CLAY
            | NETHERRACK
            | SOUL_SAND
            | GLOWSTONE
            | QUARTZ_ORE
            | COAL_ORE
            | IRON_ORE
            | GOLD_ORE
            | LAPIS_LAZULI_ORE
            | DIAMOND_ORE
            | REDSTONE_ORE
            | GLOWING_REDSTONE_ORE
            | EMERALD_ORE
    )
}

/// Blocks that let light through.
pub fn is_translucent(type_id: u16) -> bool {
    matches!(
        type_id,
        AIR | SAPLING
            | WATER
            | STATIONARY_WATER
            | LEAVES
            | GLASS
            | BED
            | POWERED_RAIL
            | DETECTOR_RAIL
            | PISTON_STICKY_BASE
            | WEB
            | LONG_GRASS
            | DEAD_BUSH
            | PISTON_BASE
            | PISTON_EXTENSION
            | PISTON_MOVING_PIECE
            | YELLOW_FLOWER
            | RED_FLOWER
            | BROWN_MUSHROOM
            | RED_MUSHROOM
            | TORCH
            | FIRE
            | MOB_SPAWNER
            | OAK_WOOD_STAIRS
            | CHEST
            | REDSTONE_WIRE
            | CROPS
            | SIGN_POST
            | WOODEN_DOOR
            | LADDER
            | MINECART_TRACKS
            | COBBLESTONE_STAIRS
            | WALL_SIGN
            | LEVER
            | STONE_PRESSURE_PLATE
            | IRON_DOOR
            | WOODEN_PRESSURE_PLATE
            | REDSTONE_TORCH_OFF
            | REDSTONE_TORCH_ON
            | STONE_BUTTON
            | SNOW
            | ICE
            | CACTUS
            | REED
            | FENCE
            | PORTAL
            | CAKE_BLOCK
            | REDSTONE_REPEATER_OFF
            | REDSTONE_REPEATER_ON
            | TRAP_DOOR
            | IRON_BARS
            | GLASS_PANE
            | PUMPKIN_STEM
            | MELON_STEM
            | VINE
            | FENCE_GATE
            | BRICK_STAIRS
            | STONE_BRICK_STAIRS
            | LILY_PAD
            | NETHER_BRICK_FENCE
            | NETHER_BRICK_STAIRS
            | NETHER_WART
            | ENCHANTMENT_TABLE
            | BREWING_STAND
            | CAULDRON
            | WOODEN_STEP
            | COCOA_PLANT
            | SANDSTONE_STAIRS
            | ENDER_CHEST
            | TRIPWIRE_HOOK
            | TRIPWIRE
            | SPRUCE_WOOD_STAIRS
            | BIRCH_WOOD_STAIRS
            | JUNGLE_WOOD_STAIRS
            | COBBLESTONE_WALL
            | FLOWER_POT
            | CARROTS
            | POTATOES
            | WOODEN_BUTTON
            | HEAD
            | ANVIL
            | TRAPPED_CHEST
            | PRESSURE_PLATE_LIGHT
            | PRESSURE_PLATE_HEAVY
            | COMPARATOR_OFF
            | COMPARATOR_ON
            | DAYLIGHT_SENSOR
            | HOPPER
            | QUARTZ_STAIRS
            | ACTIVATOR_RAIL
            | CARPET
            | STAINED_GLASS_PANE
            | DOUBLE_PLANT
    )
}

/// Whether the data value carries meaning for this type.
pub fn uses_data(type_id: u16) -> bool {
    matches!(
        type_id,
        DIRT | WOOD
            | SAPLING
            | WATER
            | STATIONARY_WATER
            | LAVA
            | STATIONARY_LAVA
            | SAND
            | LOG
            | LOG2
            | LEAVES
            | LEAVES2
            | DISPENSER
            | SANDSTONE
            | BED
            | POWERED_RAIL
            | DETECTOR_RAIL
            | PISTON_STICKY_BASE
            | LONG_GRASS
            | PISTON_BASE
            | PISTON_EXTENSION
            | CLOTH
            | RED_FLOWER
            | DOUBLE_STEP
            | STEP
            | TORCH
            | FIRE
            | OAK_WOOD_STAIRS
            | CHEST
            | REDSTONE_WIRE
            | CROPS
            | SOIL
            | FURNACE
            | BURNING_FURNACE
            | SIGN_POST
            | WOODEN_DOOR
            | LADDER
            | MINECART_TRACKS
            | COBBLESTONE_STAIRS
            | WALL_SIGN
            | LEVER
            | STONE_PRESSURE_PLATE
            | IRON_DOOR
            | WOODEN_PRESSURE_PLATE
            | REDSTONE_TORCH_OFF
            | REDSTONE_TORCH_ON
            | STONE_BUTTON
            | SNOW
            | CACTUS
            | REED
            | JUKEBOX
            | PUMPKIN
            | JACKOLANTERN
            | CAKE_BLOCK
            | REDSTONE_REPEATER_OFF
            | REDSTONE_REPEATER_ON
            | TRAP_DOOR
            | SILVERFISH_BLOCK
            | STONE_BRICK
            | BROWN_MUSHROOM_CAP
            | RED_MUSHROOM_CAP
            | PUMPKIN_STEM
            | MELON_STEM
            | VINE
            | FENCE_GATE
            | BRICK_STAIRS
            | STONE_BRICK_STAIRS
            | NETHER_BRICK_STAIRS
            | NETHER_WART
            | BREWING_STAND
            | CAULDRON
            | END_PORTAL_FRAME
            | DOUBLE_WOODEN_STEP
            | WOODEN_STEP
            | COCOA_PLANT
            | SANDSTONE_STAIRS
            | ENDER_CHEST
            | TRIPWIRE_HOOK
            | TRIPWIRE
            | SPRUCE_WOOD_STAIRS
            | BIRCH_WOOD_STAIRS
            | JUNGLE_WOOD_STAIRS
            | COBBLESTONE_WALL
            | FLOWER_POT
            | CARROTS
            | POTATOES
            | WOODEN_BUTTON
            | HEAD
            | ANVIL
            | TRAPPED_CHEST
            | PRESSURE_PLATE_LIGHT
            | PRESSURE_PLATE_HEAVY
            | COMPARATOR_OFF
            | COMPARATOR_ON
            | QUARTZ_BLOCK
            | QUARTZ_STAIRS
            | ACTIVATOR_RAIL
            | DROPPER
            | HOPPER
            | STAINED_CLAY
            | STAINED_GLASS_PANE
            | ACACIA_STAIRS
            | DARK_OAK_STAIRS
            | HAY_BLOCK
            | CARPET
            | DOUBLE_PLANT
    )
}

/// Moving or stationary water or lava.
pub fn is_liquid(type_id: u16) -> bool {
    matches!(type_id, WATER | STATIONARY_WATER | LAVA | STATIONARY_LAVA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_order_classes() {
        assert_eq!(place_order(STONE), PlaceOrder::Normal);
        assert_eq!(place_order(TORCH), PlaceOrder::Last);
        assert_eq!(place_order(WOODEN_DOOR), PlaceOrder::Final);
        assert_eq!(place_order(SIGN_POST), PlaceOrder::Final);
    }

    #[test]
    fn test_overlapping_place_order_prefers_last() {
        assert_eq!(place_order(PISTON_EXTENSION), PlaceOrder::Last);
        assert_eq!(place_order(PISTON_MOVING_PIECE), PlaceOrder::Last);
        assert!(should_place_final(PISTON_EXTENSION));
    }

    #[test]
    fn test_torch_attachments() {
        assert_eq!(attachment(TORCH, 5), Some(Direction::Down));
        assert_eq!(attachment(TORCH, 4), Some(Direction::West));
        assert_eq!(attachment(TORCH, 1), Some(Direction::North));
        assert_eq!(attachment(TORCH, 9), None);
    }

    #[test]
    fn test_door_halves() {
        assert_eq!(attachment(WOODEN_DOOR, 1), Some(Direction::Down));
        assert_eq!(attachment(WOODEN_DOOR, 8), None);
        assert_eq!(attachment(IRON_DOOR, 9), None);
    }

    #[test]
    fn test_lever_and_button_ignore_power_bit() {
        assert_eq!(attachment(LEVER, 4 | 8), Some(Direction::West));
        assert_eq!(attachment(LEVER, 6), Some(Direction::Down));
        assert_eq!(attachment(LEVER, 0), Some(Direction::Up));
        assert_eq!(attachment(STONE_BUTTON, 2 | 8), Some(Direction::South));
    }

    #[test]
    fn test_vine_attachment() {
        assert_eq!(attachment(VINE, 0), Some(Direction::Up));
        assert_eq!(attachment(VINE, 2), Some(Direction::North));
        assert_eq!(attachment(VINE, 3), None);
    }

    #[test]
    fn test_material_classes() {
        assert!(can_pass_through(AIR, 0));
        assert!(can_pass_through(SNOW, 0));
        assert!(!can_pass_through(SNOW, 3));
        assert!(!can_pass_through(STONE, 0));
        assert!(is_container(CHEST));
        assert!(!is_container(STONE));
        assert!(is_natural_terrain(GRASS));
        assert!(!is_natural_terrain(WOOD));
        assert!(is_translucent(GLASS));
        assert!(!is_translucent(STONE));
        assert!(uses_data(CLOTH));
        assert!(!uses_data(STONE));
        assert!(is_liquid(STATIONARY_LAVA));
    }
}
