use anyhow::{bail, Result};

use crate::common::{ColorIdx, Pixels, EMPTY};

/// Parses ASCII-art tile notation: `.` is background, a decimal digit is that
/// palette index.
///
/// Blank lines around the block are dropped and each row is trimmed, so glyphs
/// can be written as indented raw strings. Short rows and short blocks are
/// padded with zeros; anything past 8 rows or 8 columns is ignored.
pub fn parse_glyph(text: &str) -> Result<Pixels> {
    let mut pixels = EMPTY;
    let rows = text
        .lines()
        .map(str::trim)
        .skip_while(|line| line.is_empty())
        .collect::<Vec<_>>();
    let rows_end = rows
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(0, |i| i + 1);

    for (y, line) in rows[..rows_end].iter().take(8).enumerate() {
        for (x, ch) in line.chars().take(8).enumerate() {
            pixels[y][x] = match ch {
                '.' => 0,
                '0'..='9' => ch as ColorIdx - b'0',
                _ => bail!("Invalid glyph character {:?} at row {}, column {}", ch, y, x),
            };
        }
    }
    Ok(pixels)
}
