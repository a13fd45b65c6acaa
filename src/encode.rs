use crate::common::{Pixels, TileRecord, TILE_BYTES};

/// Packs an 8x8 grid of palette indices into a 16-byte CHR tile.
///
/// Row `y` of bitplane 0 lands in byte `y` and row `y` of bitplane 1 in byte
/// `8 + y`; column `x` maps to bit `7 - x`. A pixel sets its plane 0 bit when
/// it is at least 1 and its plane 1 bit when it is at least 2, so 2 and
/// anything above it are stored the same way as 3.
pub fn encode_tile(pixels: &Pixels) -> TileRecord {
    let mut record = [0; TILE_BYTES];
    for (y, row) in pixels.iter().enumerate() {
        for (x, &c) in row.iter().enumerate() {
            if c >= 1 {
                record[y] |= 1 << (7 - x);
            }
            if c >= 2 {
                record[y + 8] |= 1 << (7 - x);
            }
        }
    }
    record
}

/// Reads a tile back as `plane0 | plane1 << 1`. Pixels written as 2 come back
/// as 3.
pub fn decode_tile(record: &TileRecord) -> Pixels {
    let mut pixels: Pixels = [[0; 8]; 8];
    for y in 0..8 {
        for x in 0..8 {
            let c0 = (record[y] >> (7 - x)) & 1;
            let c1 = (record[y + 8] >> (7 - x)) & 1;
            pixels[y][x] = c0 | (c1 << 1);
        }
    }
    pixels
}
