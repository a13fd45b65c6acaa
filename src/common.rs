pub type ColorIdx = u8; // Index into 2bpp palette (0-3)
pub type TileIdx = u8; // Index into a pattern table (0x00-0xFF)

pub type Pixels = [[ColorIdx; 8]; 8];

// Bitplane 0 (bytes 0-7) followed by bitplane 1 (bytes 8-15).
pub type TileRecord = [u8; TILE_BYTES];

pub const TILE_BYTES: usize = 16;
pub const TILES_PER_TABLE: usize = 256;
pub const PATTERN_TABLE_BYTES: usize = TILE_BYTES * TILES_PER_TABLE;
pub const CHR_SIZE: usize = PATTERN_TABLE_BYTES * 2;

pub const EMPTY: Pixels = [[0; 8]; 8];
