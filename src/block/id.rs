//! Numeric block type identifiers.

pub const AIR: u16 = 0;
pub const STONE: u16 = 1;
pub const GRASS: u16 = 2;
pub const DIRT: u16 = 3;
pub const COBBLESTONE: u16 = 4;
pub const WOOD: u16 = 5;
pub const SAPLING: u16 = 6;
pub const BEDROCK: u16 = 7;
pub const WATER: u16 = 8;
pub const STATIONARY_WATER: u16 = 9;
pub const LAVA: u16 = 10;
pub const STATIONARY_LAVA: u16 = 11;
pub const SAND: u16 = 12;
pub const GRAVEL: u16 = 13;
pub const GOLD_ORE: u16 = 14;
pub const IRON_ORE: u16 = 15;
pub const COAL_ORE: u16 = 16;
pub const LOG: u16 = 17;
pub const LEAVES: u16 = 18;
pub const SPONGE: u16 = 19;
pub const GLASS: u16 = 20;
pub const LAPIS_LAZULI_ORE: u16 = 21;
pub const LAPIS_LAZULI_BLOCK: u16 = 22;
pub const DISPENSER: u16 = 23;
pub const SANDSTONE: u16 = 24;
pub const NOTE_BLOCK: u16 = 25;
pub const BED: u16 = 26;
pub const POWERED_RAIL: u16 = 27;
pub const DETECTOR_RAIL: u16 = 28;
pub const PISTON_STICKY_BASE: u16 = 29;
pub const WEB: u16 = 30;
pub const LONG_GRASS: u16 = 31;
pub const DEAD_BUSH: u16 = 32;
pub const PISTON_BASE: u16 = 33;
pub const PISTON_EXTENSION: u16 = 34;
pub const CLOTH: u16 = 35;
pub const PISTON_MOVING_PIECE: u16 = 36;
pub const YELLOW_FLOWER: u16 = 37;
pub const RED_FLOWER: u16 = 38;
pub const BROWN_MUSHROOM: u16 = 39;
pub const RED_MUSHROOM: u16 = 40;
pub const GOLD_BLOCK: u16 = 41;
pub const IRON_BLOCK: u16 = 42;
pub const DOUBLE_STEP: u16 = 43;
pub const STEP: u16 = 44;
pub const BRICK: u16 = 45;
pub const TNT: u16 = 46;
pub const BOOKCASE: u16 = 47;
pub const MOSSY_COBBLESTONE: u16 = 48;
pub const OBSIDIAN: u16 = 49;
pub const TORCH: u16 = 50;
pub const FIRE: u16 = 51;
pub const MOB_SPAWNER: u16 = 52;
pub const OAK_WOOD_STAIRS: u16 = 53;
pub const CHEST: u16 = 54;
pub const REDSTONE_WIRE: u16 = 55;
pub const DIAMOND_ORE: u16 = 56;
pub const DIAMOND_BLOCK: u16 = 57;
pub const WORKBENCH: u16 = 58;
pub const CROPS: u16 = 59;
pub const SOIL: u16 = 60;
pub const FURNACE: u16 = 61;
pub const BURNING_FURNACE: u16 = 62;
pub const SIGN_POST: u16 = 63;
pub const WOODEN_DOOR: u16 = 64;
pub const LADDER: u16 = 65;
pub const MINECART_TRACKS: u16 = 66;
pub const COBBLESTONE_STAIRS: u16 = 67;
pub const WALL_SIGN: u16 = 68;
pub const LEVER: u16 = 69;
pub const STONE_PRESSURE_PLATE: u16 = 70;
pub const IRON_DOOR: u16 = 71;
pub const WOODEN_PRESSURE_PLATE: u16 = 72;
pub const REDSTONE_ORE: u16 = 73;
pub const GLOWING_REDSTONE_ORE: u16 = 74;
pub const REDSTONE_TORCH_OFF: u16 = 75;
pub const REDSTONE_TORCH_ON: u16 = 76;
pub const STONE_BUTTON: u16 = 77;
pub const SNOW: u16 = 78;
pub const ICE: u16 = 79;
pub const SNOW_BLOCK: u16 = 80;
pub const CACTUS: u16 = 81;
pub const CLAY: u16 = 82;
pub const REED: u16 = 83;
pub const JUKEBOX: u16 = 84;
pub const FENCE: u16 = 85;
pub const PUMPKIN: u16 = 86;
pub const NETHERRACK: u16 = 87;
pub const SOUL_SAND: u16 = 88;
pub const GLOWSTONE: u16 = 89;
pub const PORTAL: u16 = 90;
pub const JACKOLANTERN: u16 = 91;
pub const CAKE_BLOCK: u16 = 92;
pub const REDSTONE_REPEATER_OFF: u16 = 93;
pub const REDSTONE_REPEATER_ON: u16 = 94;
pub const STAINED_GLASS: u16 = 95;
pub const TRAP_DOOR: u16 = 96;
pub const SILVERFISH_BLOCK: u16 = 97;
pub const STONE_BRICK: u16 = 98;
pub const BROWN_MUSHROOM_CAP: u16 = 99;
pub const RED_MUSHROOM_CAP: u16 = 100;
pub const IRON_BARS: u16 = 101;
pub const GLASS_PANE: u16 = 102;
pub const MELON_BLOCK: u16 = 103;
pub const PUMPKIN_STEM: u16 = 104;
pub const MELON_STEM: u16 = 105;
pub const VINE: u16 = 106;
pub const FENCE_GATE: u16 = 107;
pub const BRICK_STAIRS: u16 = 108;
pub const STONE_BRICK_STAIRS: u16 = 109;
pub const MYCELIUM: u16 = 110;
pub const LILY_PAD: u16 = 111;
pub const NETHER_BRICK: u16 = 112;
pub const NETHER_BRICK_FENCE: u16 = 113;
pub const NETHER_BRICK_STAIRS: u16 = 114;
pub const NETHER_WART: u16 = 115;
pub const ENCHANTMENT_TABLE: u16 = 116;
pub const BREWING_STAND: u16 = 117;
pub const CAULDRON: u16 = 118;
pub const END_PORTAL: u16 = 119;
pub const END_PORTAL_FRAME: u16 = 120;
pub const END_STONE: u16 = 121;
pub const DRAGON_EGG: u16 = 122;
pub const REDSTONE_LAMP_OFF: u16 = 123;
pub const REDSTONE_LAMP_ON: u16 = 124;
pub const DOUBLE_WOODEN_STEP: u16 = 125;
pub const WOODEN_STEP: u16 = 126;
pub const COCOA_PLANT: u16 = 127;
pub const SANDSTONE_STAIRS: u16 = 128;
pub const EMERALD_ORE: u16 = 129;
pub const ENDER_CHEST: u16 = 130;
pub const TRIPWIRE_HOOK: u16 = 131;
pub const TRIPWIRE: u16 = 132;
pub const EMERALD_BLOCK: u16 = 133;
pub const SPRUCE_WOOD_STAIRS: u16 = 134;
pub const BIRCH_WOOD_STAIRS: u16 = 135;
pub const JUNGLE_WOOD_STAIRS: u16 = 136;
pub const COMMAND_BLOCK: u16 = 137;
pub const BEACON: u16 = 138;
pub const COBBLESTONE_WALL: u16 = 139;
pub const FLOWER_POT: u16 = 140;
pub const CARROTS: u16 = 141;
pub const POTATOES: u16 = 142;
pub const WOODEN_BUTTON: u16 = 143;
pub const HEAD: u16 = 144;
pub const ANVIL: u16 = 145;
pub const TRAPPED_CHEST: u16 = 146;
pub const PRESSURE_PLATE_LIGHT: u16 = 147;
pub const PRESSURE_PLATE_HEAVY: u16 = 148;
pub const COMPARATOR_OFF: u16 = 149;
pub const COMPARATOR_ON: u16 = 150;
pub const DAYLIGHT_SENSOR: u16 = 151;
pub const REDSTONE_BLOCK: u16 = 152;
pub const QUARTZ_ORE: u16 = 153;
pub const HOPPER: u16 = 154;
pub const QUARTZ_BLOCK: u16 = 155;
pub const QUARTZ_STAIRS: u16 = 156;
pub const ACTIVATOR_RAIL: u16 = 157;
pub const DROPPER: u16 = 158;
pub const STAINED_CLAY: u16 = 159;
pub const STAINED_GLASS_PANE: u16 = 160;
pub const LEAVES2: u16 = 161;
pub const LOG2: u16 = 162;
pub const ACACIA_STAIRS: u16 = 163;
pub const DARK_OAK_STAIRS: u16 = 164;
pub const HAY_BLOCK: u16 = 170;
pub const CARPET: u16 = 171;
pub const HARDENED_CLAY: u16 = 172;
pub const COAL_BLOCK: u16 = 173;
pub const PACKED_ICE: u16 = 174;
pub const DOUBLE_PLANT: u16 = 175;

/// Highest identifier known to the metadata tables.
pub const MAX_KNOWN: u16 = DOUBLE_PLANT;
