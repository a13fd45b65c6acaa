use std::fmt::Display;

use anyhow::{bail, Context, Result};
use hashbrown::{hash_map::Entry, HashMap};
use log::{debug, info};
use serde::Serialize;

use crate::{
    common::{Pixels, TileIdx, TileRecord, EMPTY, PATTERN_TABLE_BYTES, TILES_PER_TABLE},
    encode::encode_tile,
    glyph::parse_glyph,
    sprites::*,
};

// Where the digit glyphs start in the background table, so that tile `$30 + n`
// shows digit `n` just like its ASCII code.
pub const DIGIT_BASE: TileIdx = 0x30;

#[derive(Clone, Debug)]
pub struct TileSlot {
    pub id: TileIdx,
    pub name: String,
    pub pixels: Pixels,
}

impl TileSlot {
    pub fn new(id: TileIdx, name: &str, pixels: Pixels) -> Self {
        Self {
            id,
            name: name.to_string(),
            pixels,
        }
    }
}

/// 256 encoded tiles, indexed by tile ID.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternTable {
    pub name: String,
    tiles: Vec<TileRecord>,
}

impl PatternTable {
    pub fn tile(&self, id: TileIdx) -> &TileRecord {
        &self.tiles[id as usize]
    }

    pub fn bytes(&self) -> Vec<u8> {
        (0..=TileIdx::MAX).flat_map(|id| *self.tile(id)).collect()
    }
}

/// Encodes each slot at its tile ID. Every ID without a slot gets the empty
/// tile, so the table always holds exactly 256 tiles.
pub fn assemble_table(name: &str, slots: &[TileSlot]) -> Result<PatternTable> {
    let mut owners: HashMap<TileIdx, &str> = HashMap::new();
    let mut tiles = vec![encode_tile(&EMPTY); TILES_PER_TABLE];
    for slot in slots {
        match owners.entry(slot.id) {
            Entry::Occupied(e) => bail!(
                "{} table: tile ${:02X} is assigned to both {} and {}",
                name,
                slot.id,
                e.get(),
                slot.name
            ),
            Entry::Vacant(e) => {
                e.insert(&slot.name);
            }
        }
        debug!("{} table: ${:02X} = {}", name, slot.id, slot.name);
        tiles[slot.id as usize] = encode_tile(&slot.pixels);
    }
    info!(
        "Assembled {} table ({} of {} tiles defined, {} bytes)",
        name,
        slots.len(),
        TILES_PER_TABLE,
        PATTERN_TABLE_BYTES
    );
    Ok(PatternTable {
        name: name.to_string(),
        tiles,
    })
}

pub fn sprite_slots() -> Vec<TileSlot> {
    vec![
        TileSlot::new(0x00, "player_top_left", PLAYER_TOP_LEFT),
        TileSlot::new(0x01, "player_top_right", PLAYER_TOP_RIGHT),
        TileSlot::new(0x02, "player_bottom_left", PLAYER_BOTTOM_LEFT),
        TileSlot::new(0x03, "player_bottom_right", PLAYER_BOTTOM_RIGHT),
        TileSlot::new(0x04, "player_bullet", PLAYER_BULLET),
        TileSlot::new(0x08, "enemy1", ENEMY1),
        TileSlot::new(0x09, "enemy2", ENEMY2),
        TileSlot::new(0x0A, "enemy3", ENEMY3),
        TileSlot::new(0x0C, "enemy_bullet", ENEMY_BULLET),
        TileSlot::new(0x10, "powerup_weapon", POWERUP_WEAPON),
        TileSlot::new(0x11, "powerup_shield", POWERUP_SHIELD),
        TileSlot::new(0x12, "powerup_life", POWERUP_LIFE),
        TileSlot::new(0x14, "explosion1", EXPLOSION1),
        TileSlot::new(0x15, "explosion2", EXPLOSION2),
        TileSlot::new(0x16, "explosion3", EXPLOSION3),
        TileSlot::new(0x17, "explosion4", EXPLOSION4),
        TileSlot::new(0x1C, "boss_top_left", BOSS_TOP_LEFT),
        TileSlot::new(0x1D, "boss_top_right", BOSS_TOP_RIGHT),
        TileSlot::new(0x1E, "boss_bottom_left", BOSS_BOTTOM_LEFT),
        TileSlot::new(0x1F, "boss_bottom_right", BOSS_BOTTOM_RIGHT),
        TileSlot::new(0xFE, "particle", PARTICLE),
    ]
}

pub fn background_slots() -> Result<Vec<TileSlot>> {
    let mut slots = vec![
        TileSlot::new(0x00, "black", EMPTY),
        TileSlot::new(0x01, "stars", STARS),
        TileSlot::new(0x02, "stars_sparse", STARS_SPARSE),
    ];
    for (i, text) in DIGIT_GLYPHS.iter().enumerate() {
        let name = format!("digit_{}", i);
        let pixels = parse_glyph(text).with_context(|| format!("Unable to parse {}", name))?;
        slots.push(TileSlot::new(DIGIT_BASE + i as TileIdx, &name, pixels));
    }
    Ok(slots)
}

// Pattern table 0 ($0000-$0FFF in CHR-ROM).
pub fn sprite_table() -> Result<PatternTable> {
    assemble_table("sprite", &sprite_slots())
}

// Pattern table 1 ($1000-$1FFF in CHR-ROM).
pub fn background_table() -> Result<PatternTable> {
    assemble_table("background", &background_slots()?)
}

#[derive(Serialize, Clone, Copy, Debug)]
pub struct LegendEntry {
    pub table: u8,
    pub first: TileIdx,
    pub last: TileIdx,
    pub description: &'static str,
}

impl Display for LegendEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.first == self.last {
            write!(f, "${:02X}: {}", self.first, self.description)?;
        } else {
            write!(
                f,
                "${:02X}-${:02X}: {}",
                self.first, self.last, self.description
            )?;
        }
        Ok(())
    }
}

const fn legend(table: u8, first: TileIdx, last: TileIdx, description: &'static str) -> LegendEntry {
    LegendEntry {
        table,
        first,
        last,
        description,
    }
}

pub const LEGEND: &[LegendEntry] = &[
    legend(0, 0x00, 0x03, "Player ship (16x16)"),
    legend(0, 0x04, 0x04, "Player bullet"),
    legend(0, 0x08, 0x0A, "Enemies (3 variants)"),
    legend(0, 0x0C, 0x0C, "Enemy bullet"),
    legend(0, 0x10, 0x12, "Powerups (weapon, shield, life)"),
    legend(0, 0x14, 0x17, "Explosion frames"),
    legend(0, 0x1C, 0x1F, "Boss (16x16)"),
    legend(0, 0xFE, 0xFE, "Particle"),
    legend(1, 0x00, 0x00, "Solid black"),
    legend(1, 0x01, 0x02, "Star fields"),
    legend(1, 0x30, 0x39, "Digits 0-9"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::decode_tile;
    use itertools::Itertools;

    fn on_columns(pixels: &Pixels) -> Vec<usize> {
        pixels
            .iter()
            .flat_map(|row| row.iter().positions(|&c| c != 0))
            .sorted()
            .dedup()
            .collect()
    }

    #[test]
    fn bytes_are_tiles_in_id_order() {
        let table = sprite_table().unwrap();
        let bytes = table.bytes();
        for id in 0..=TileIdx::MAX {
            let start = id as usize * 16;
            assert_eq!(bytes[start..start + 16], table.tile(id)[..]);
        }
    }

    #[test]
    fn tables_hold_256_tiles() {
        let sprite = sprite_table().unwrap();
        let background = background_table().unwrap();
        assert_eq!(sprite.bytes().len(), PATTERN_TABLE_BYTES);
        assert_eq!(background.bytes().len(), PATTERN_TABLE_BYTES);
    }

    #[test]
    fn unlisted_slots_are_empty() {
        let slots = sprite_slots();
        let table = sprite_table().unwrap();
        let listed = slots.iter().map(|s| s.id).collect_vec();
        for id in 0..=TileIdx::MAX {
            if !listed.contains(&id) {
                assert_eq!(table.tile(id), &[0; 16], "tile ${:02X}", id);
            }
        }
    }

    #[test]
    fn slots_land_at_their_tile_id() {
        let table = sprite_table().unwrap();
        assert_eq!(table.tile(0x08), &encode_tile(&ENEMY1));
        assert_eq!(table.tile(0x10), &encode_tile(&POWERUP_WEAPON));
        assert_eq!(table.tile(0x17), &encode_tile(&EXPLOSION4));
        assert_eq!(table.tile(0xFE), &encode_tile(&PARTICLE));
    }

    #[test]
    fn every_authored_tile_round_trips() {
        let slots = sprite_slots()
            .into_iter()
            .chain(background_slots().unwrap())
            .collect_vec();
        for slot in slots {
            // Index 2 shares its bit pattern with 3.
            let expected = slot.pixels.map(|row| row.map(|c| if c == 2 { 3 } else { c }));
            assert_eq!(decode_tile(&encode_tile(&slot.pixels)), expected, "{}", slot.name);
        }
    }

    #[test]
    fn slot_order_does_not_matter() {
        let mut slots = sprite_slots();
        slots.reverse();
        assert_eq!(assemble_table("sprite", &slots).unwrap(), sprite_table().unwrap());
    }

    #[test]
    fn duplicate_tile_id_is_rejected() {
        let slots = vec![
            TileSlot::new(0x08, "enemy1", ENEMY1),
            TileSlot::new(0x08, "enemy2", ENEMY2),
        ];
        let err = assemble_table("sprite", &slots).unwrap_err();
        assert!(err.to_string().contains("$08"));
        assert!(err.to_string().contains("enemy1"));
        assert!(err.to_string().contains("enemy2"));
    }

    #[test]
    fn digit_1_is_a_stroke_in_columns_3_and_4() {
        let slots = background_slots().unwrap();
        let digit_1 = slots.iter().find(|s| s.name == "digit_1").unwrap();
        assert_eq!(digit_1.id, 0x31);
        assert_eq!(on_columns(&digit_1.pixels), vec![3, 4]);
        for row in &digit_1.pixels[..7] {
            assert_eq!(row[3..5], [3, 3]);
        }
        assert_eq!(digit_1.pixels[7], [0; 8]);
    }

    #[test]
    fn digits_use_color_3_and_fit_the_tile() {
        for slot in background_slots().unwrap() {
            if slot.name.starts_with("digit_") {
                let values = slot.pixels.iter().flatten().copied().unique().sorted().collect_vec();
                assert_eq!(values, vec![0, 3], "{}", slot.name);
                assert_eq!(slot.pixels[7], [0; 8], "{}", slot.name);
            }
        }
    }

    #[test]
    fn digit_8_is_symmetric() {
        let slots = background_slots().unwrap();
        let digit_8 = &slots.iter().find(|s| s.name == "digit_8").unwrap().pixels;
        for row in digit_8 {
            let mirrored = row.iter().rev().copied().collect_vec();
            assert_eq!(row.to_vec(), mirrored);
        }
    }

    #[test]
    fn legend_matches_layout() {
        let layouts = [sprite_slots(), background_slots().unwrap()];
        for entry in LEGEND {
            let ids = layouts[entry.table as usize].iter().map(|s| s.id).collect_vec();
            for id in entry.first..=entry.last {
                assert!(ids.contains(&id), "legend {} names an unused tile", entry);
            }
        }
        for (table, slots) in layouts.iter().enumerate() {
            for slot in slots {
                assert!(
                    LEGEND.iter().any(|e| e.table as usize == table
                        && (e.first..=e.last).contains(&slot.id)),
                    "{} is missing from the legend",
                    slot.name
                );
            }
        }
    }

    #[test]
    fn legend_formats_ranges() {
        assert_eq!(LEGEND[0].to_string(), "$00-$03: Player ship (16x16)");
        assert_eq!(LEGEND[1].to_string(), "$04: Player bullet");
    }
}
