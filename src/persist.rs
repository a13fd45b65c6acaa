use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{ensure, Context, Result};
use itertools::Itertools;
use json_pretty_compact::PrettyCompactFormatter;
use log::{info, warn};
use serde::Serialize;
use serde_json::Serializer;

use crate::{
    common::{TileRecord, CHR_SIZE, PATTERN_TABLE_BYTES, TILES_PER_TABLE, TILE_BYTES},
    encode::decode_tile,
    layout::{PatternTable, LEGEND},
};

pub const DEFAULT_OUTPUT: &str = "assets/chr/chr_data.chr";

// Gray levels used for palette indices 0-3 in the preview.
const PREVIEW_SHADES: [u8; 4] = [0x00, 0x55, 0xAA, 0xFF];
const PREVIEW_WIDTH: usize = 256;
const PREVIEW_HEIGHT: usize = 128;

fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    info!("Saving {}", path.display());
    let formatter = PrettyCompactFormatter::new();
    let mut data_bytes = vec![];
    let mut ser = Serializer::with_formatter(&mut data_bytes, formatter);
    data.serialize(&mut ser)?;
    create_parent_dir(path)?;
    fs::write(path, &data_bytes)
        .with_context(|| format!("Unable to write {}", path.display()))?;
    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Unable to create directory {}", dir.display()))?;
    }
    Ok(())
}

/// Concatenates the sprite and background tables and fits the result to the
/// 8KB CHR-ROM size.
pub fn finalize_image(sprite: &PatternTable, background: &PatternTable) -> Result<Vec<u8>> {
    let mut data = vec![];
    for table in [sprite, background] {
        let bytes = table.bytes();
        ensure!(
            bytes.len() == PATTERN_TABLE_BYTES,
            "{} table must be {} bytes, got {} bytes",
            table.name,
            PATTERN_TABLE_BYTES,
            bytes.len()
        );
        data.extend(bytes);
    }
    fit_to_chr_size(data)
}

fn fit_to_chr_size(mut data: Vec<u8>) -> Result<Vec<u8>> {
    if data.len() < CHR_SIZE {
        warn!("Padding CHR-ROM from {} to {} bytes", data.len(), CHR_SIZE);
        data.resize(CHR_SIZE, 0);
    } else if data.len() > CHR_SIZE {
        warn!("Truncating CHR-ROM from {} to {} bytes", data.len(), CHR_SIZE);
        data.truncate(CHR_SIZE);
    }
    ensure!(
        data.len() == CHR_SIZE,
        "CHR-ROM must be 8KB, got {} bytes",
        data.len()
    );
    Ok(data)
}

pub fn write_chr(path: &Path, data: &[u8]) -> Result<()> {
    ensure!(
        data.len() == CHR_SIZE,
        "Refusing to write {}: CHR-ROM must be 8KB, got {} bytes",
        path.display(),
        data.len()
    );
    info!("Saving {}", path.display());
    create_parent_dir(path)?;
    let mut file =
        File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
    file.write_all(data)?;
    file.flush()?;
    Ok(())
}

pub fn read_chr(path: &Path) -> Result<Vec<u8>> {
    info!("Loading {}", path.display());
    let data = fs::read(path).with_context(|| format!("Unable to read {}", path.display()))?;
    ensure!(
        data.len() == CHR_SIZE,
        "{}: CHR-ROM must be 8KB, got {} bytes",
        path.display(),
        data.len()
    );
    Ok(data)
}

/// Reads the written file back and checks it matches `expected` byte for byte.
pub fn verify_chr(path: &Path, expected: &[u8]) -> Result<()> {
    let data = read_chr(path)?;
    ensure!(
        data == expected,
        "{} does not match the generated CHR-ROM",
        path.display()
    );
    info!("Verified {} ({} bytes)", path.display(), data.len());
    Ok(())
}

/// Renders both pattern tables side by side as a 16x16 grid of tiles each,
/// sprite table on the left.
pub fn save_preview_png(path: &Path, data: &[u8]) -> Result<()> {
    ensure!(
        data.len() == CHR_SIZE,
        "CHR-ROM must be 8KB, got {} bytes",
        data.len()
    );
    let mut pixels = vec![0; PREVIEW_WIDTH * PREVIEW_HEIGHT];
    for (i, chunk) in data.chunks_exact(TILE_BYTES).enumerate() {
        let record: TileRecord = chunk.try_into()?;
        let tile = decode_tile(&record);
        let table = i / TILES_PER_TABLE;
        let idx = i % TILES_PER_TABLE;
        let x0 = table * 128 + (idx % 16) * 8;
        let y0 = (idx / 16) * 8;
        for (y, x) in (0..8).cartesian_product(0..8) {
            pixels[(y0 + y) * PREVIEW_WIDTH + x0 + x] = PREVIEW_SHADES[tile[y][x] as usize];
        }
    }

    info!("Saving {}", path.display());
    create_parent_dir(path)?;
    let file = File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
    let mut encoder = png::Encoder::new(
        BufWriter::new(file),
        PREVIEW_WIDTH as u32,
        PREVIEW_HEIGHT as u32,
    );
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixels)?;
    writer.finish()?;
    Ok(())
}

pub fn save_legend_json(path: &Path) -> Result<()> {
    save_json(path, &LEGEND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{background_table, sprite_table};
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("stellar_chr_{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn short_image_is_zero_padded() {
        let data = fit_to_chr_size(vec![0xAB; 100]).unwrap();
        assert_eq!(data.len(), CHR_SIZE);
        assert_eq!(data[99], 0xAB);
        assert!(data[100..].iter().all(|&b| b == 0));
    }

    #[test]
    fn long_image_is_truncated() {
        let mut input = vec![0x11; CHR_SIZE];
        input.extend([0x22; 32]);
        let data = fit_to_chr_size(input).unwrap();
        assert_eq!(data, vec![0x11; CHR_SIZE]);
    }

    #[test]
    fn tables_concatenate_to_8k() {
        let sprite = sprite_table().unwrap();
        let background = background_table().unwrap();
        let data = finalize_image(&sprite, &background).unwrap();
        assert_eq!(data.len(), CHR_SIZE);
        assert_eq!(data[..PATTERN_TABLE_BYTES], sprite.bytes()[..]);
        assert_eq!(data[PATTERN_TABLE_BYTES..], background.bytes()[..]);
    }

    #[test]
    fn write_refuses_wrong_size() {
        let path = temp_path("wrong_size.chr");
        let err = write_chr(&path, &[0; 100]).unwrap_err();
        assert!(err.to_string().contains("got 100 bytes"));
        assert!(!path.exists());
    }

    #[test]
    fn write_then_verify() {
        let path = temp_path("nested/dir/chr_data.chr");
        let data = (0..CHR_SIZE).map(|i| (i % 251) as u8).collect_vec();
        write_chr(&path, &data).unwrap();
        assert_eq!(fs::read(&path).unwrap(), data);
        verify_chr(&path, &data).unwrap();

        let mut other = data.clone();
        other[4000] ^= 0xFF;
        assert!(verify_chr(&path, &other).is_err());
    }

    #[test]
    fn read_rejects_wrong_size() {
        let path = temp_path("short.chr");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, [0u8; 10]).unwrap();
        let err = read_chr(&path).unwrap_err();
        assert!(err.to_string().contains("got 10 bytes"));
    }

    #[test]
    fn preview_has_both_tables() {
        let path = temp_path("preview.png");
        let sprite = sprite_table().unwrap();
        let background = background_table().unwrap();
        let data = finalize_image(&sprite, &background).unwrap();
        save_preview_png(&path, &data).unwrap();

        let decoder = png::Decoder::new(File::open(&path).unwrap());
        let mut reader = decoder.read_info().unwrap();
        assert_eq!(reader.info().width, PREVIEW_WIDTH as u32);
        assert_eq!(reader.info().height, PREVIEW_HEIGHT as u32);
        let mut buf = vec![0; reader.output_buffer_size()];
        reader.next_frame(&mut buf).unwrap();
        // Top-left pixel of the background table's star tile, column 3 of row 0.
        assert_eq!(buf[128 + 8 + 3], PREVIEW_SHADES[1]);
        assert_eq!(buf[128 + 8], PREVIEW_SHADES[0]);
    }

    #[test]
    fn legend_json_lists_every_entry() {
        let path = temp_path("legend.json");
        save_legend_json(&path).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), LEGEND.len());
        assert_eq!(entries[0]["description"], "Player ship (16x16)");
        assert_eq!(entries[0]["last"], 3);
    }

    #[test]
    fn legend_write_error_names_the_path() {
        let path = temp_path("legend_is_a_dir");
        fs::create_dir_all(&path).unwrap();
        let err = save_legend_json(&path).unwrap_err();
        assert!(err.to_string().contains("Unable to write"));
        assert!(err.to_string().contains("legend_is_a_dir"));
    }
}
