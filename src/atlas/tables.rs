// src/atlas/tables.rs
//! Built-in icon tabs, in sprite-sheet order.

use super::{AtlasItem, AtlasTable, TileLayout};

const SIZE32: u32 = 32;
const SIZE48: u32 = 48;
const SIZE64: u32 = 64;
const SIZE128: u32 = 128;
const SIZE256: u32 = 256;

const fn item(icon: &'static str, half_size: u32) -> AtlasItem {
    AtlasItem::new(icon, half_size)
}

const fn sized(icon: &'static str, half_size: u32, tile_size: u32) -> AtlasItem {
    AtlasItem::sized(icon, half_size, tile_size)
}

// roles and jobs
const TAB1_ITEMS: &[AtlasItem] = &[
    item("tank", SIZE32),
    item("tank_1", SIZE32),
    item("tank_2", SIZE32),
    item("healer", SIZE32),
    item("healer_1", SIZE32),
    item("healer_2", SIZE32),
    item("pure_healer", SIZE32),
    item("barrier_healer", SIZE32),
    item("dps", SIZE32),
    item("dps_1", SIZE32),
    item("dps_2", SIZE32),
    item("dps_3", SIZE32),
    item("dps_4", SIZE32),
    item("melee_dps", SIZE32),
    item("ranged_dps", SIZE32),
    item("physical_ranged_dps", SIZE32),
    item("magical_ranged_dps", SIZE32),
    item("paladin", SIZE32),
    item("warrior", SIZE32),
    item("dark_knight", SIZE32),
    item("gunbreaker", SIZE32),
    item("white_mage", SIZE32),
    item("scholar", SIZE32),
    item("astrologian", SIZE32),
    item("sage", SIZE32),
    item("monk", SIZE32),
    item("dragoon", SIZE32),
    item("ninja", SIZE32),
    item("samurai", SIZE32),
    item("reaper", SIZE32),
    item("viper", SIZE32),
    item("bard", SIZE32),
    item("machinist", SIZE32),
    item("dancer", SIZE32),
    item("black_mage", SIZE32),
    item("summoner", SIZE32),
    item("red_mage", SIZE32),
    item("pictomancer", SIZE32),
    item("blue_mage", SIZE32),
    item("gladiator", SIZE32),
    item("marauder", SIZE32),
    item("conjurer", SIZE32),
    item("pugilist", SIZE32),
    item("lancer", SIZE32),
    item("rogue", SIZE32),
    item("archer", SIZE32),
    item("thaumaturge", SIZE32),
    item("arcanist", SIZE32),
];

// mechanics (64x64 in game)
const TAB2_ITEMS: &[AtlasItem] = &[
    item("gaze", SIZE128),
    item("stack", SIZE128),
    item("line_stack", SIZE128),
    item("proximity", SIZE256),
    item("stack_multi", SIZE128),
    item("proximity_player", SIZE128),
    item("tankbuster", SIZE64),
    item("radial_knockback", SIZE256),
    item("linear_knockback", SIZE256),
    item("tower", SIZE64),
    item("targeting", SIZE64),
    item("moving_circle_aoe", SIZE128),
    item("1person_aoe", SIZE64),
    item("2person_aoe", SIZE64),
    item("3person_aoe", SIZE64),
    item("4person_aoe", SIZE64),
];

// enemies, debuffs, markers, waymarks: tiles are as wide as each sprite
const TAB3_ITEMS: &[AtlasItem] = &[
    sized("small_enemy", SIZE64, SIZE64),
    sized("medium_enemy", SIZE64, SIZE64),
    sized("large_enemy", SIZE64, SIZE64),
    sized("enhancement", SIZE32, SIZE64),
    sized("enfeeblement", SIZE32, SIZE64),
    sized("attack_1", SIZE32, SIZE48),
    sized("attack_2", SIZE32, SIZE48),
    sized("attack_3", SIZE32, SIZE48),
    sized("attack_4", SIZE32, SIZE48),
    sized("attack_5", SIZE32, SIZE48),
    sized("attack_6", SIZE32, SIZE48),
    sized("attack_7", SIZE32, SIZE48),
    sized("attack_8", SIZE32, SIZE48),
    sized("bind_1", SIZE32, SIZE48),
    sized("bind_2", SIZE32, SIZE48),
    sized("bind_3", SIZE32, SIZE48),
    sized("ignore_1", SIZE32, SIZE48),
    sized("ignore_2", SIZE32, SIZE48),
    sized("square_marker", SIZE32, SIZE48),
    sized("circle_marker", SIZE32, SIZE48),
    sized("plus_marker", SIZE32, SIZE48),
    sized("triangle_marker", SIZE32, SIZE48),
    sized("waymark_a", SIZE48, SIZE48),
    sized("waymark_b", SIZE48, SIZE48),
    sized("waymark_c", SIZE48, SIZE48),
    sized("waymark_d", SIZE48, SIZE48),
    sized("waymark_1", SIZE48, SIZE48),
    sized("waymark_2", SIZE48, SIZE48),
    sized("waymark_3", SIZE48, SIZE48),
    sized("waymark_4", SIZE48, SIZE48),
    sized("lockon_red", SIZE48, SIZE48),
    sized("lockon_blue", SIZE48, SIZE48),
    sized("lockon_purple", SIZE48, SIZE48),
    sized("lockon_green", SIZE48, SIZE48),
];

// shapes and arrows
const TAB4_ITEMS: &[AtlasItem] = &[
    item("shape_circle", SIZE48),
    item("shape_x", SIZE48),
    item("shape_triangle", SIZE48),
    item("shape_square", SIZE48),
    item("up_arrow", SIZE48),
    item("rotate", SIZE48),
    item("highlighted_circle", SIZE48),
    item("highlighted_x", SIZE48),
    item("highlighted_square", SIZE48),
    item("highlighted_triangle", SIZE48),
    item("rotate_clockwise", SIZE48),
    item("rotate_counterclockwise", SIZE48),
];

// field shapes
const TAB5_ITEMS: &[AtlasItem] = &[
    item("checkered_circle", SIZE256),
    item("checkered_square", SIZE256),
    item("grey_circle", SIZE256),
    item("grey_square", SIZE256),
];

/// The five standard tabs, in merge order.
pub const STANDARD_TABLES: [AtlasTable; 5] = [
    AtlasTable {
        sheet: "tab1",
        layout: TileLayout::Uniform { tile_width: 128 },
        items: TAB1_ITEMS,
    },
    AtlasTable {
        sheet: "tab2",
        layout: TileLayout::Uniform { tile_width: 512 },
        items: TAB2_ITEMS,
    },
    AtlasTable {
        sheet: "tab3",
        layout: TileLayout::Variable,
        items: TAB3_ITEMS,
    },
    AtlasTable {
        sheet: "tab4",
        layout: TileLayout::Uniform { tile_width: 96 },
        items: TAB4_ITEMS,
    },
    AtlasTable {
        sheet: "tab5",
        layout: TileLayout::Uniform { tile_width: 512 },
        items: TAB5_ITEMS,
    },
];
