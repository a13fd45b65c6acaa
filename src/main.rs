use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use itertools::Itertools;

mod common;
mod encode;
mod glyph;
mod layout;
mod persist;
mod sprites;

/// Generate the Stellar Assault CHR-ROM (two 4KB pattern tables).
#[derive(Parser, Debug)]
struct Args {
    /// Path of the CHR-ROM image to write
    #[arg(long, default_value = persist::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Also write a PNG preview of both pattern tables
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Also write the tile legend as JSON
    #[arg(long)]
    legend: Option<PathBuf>,
}

fn build_image() -> Result<Vec<u8>> {
    let sprite = layout::sprite_table()?;
    let background = layout::background_table()?;
    persist::finalize_image(&sprite, &background)
}

fn print_summary(image: &[u8]) {
    println!("Generated {} bytes of CHR-ROM data", image.len());
    for (table, entries) in &layout::LEGEND.iter().chunk_by(|e| e.table) {
        match table {
            0 => println!("Pattern table 0 (sprites):"),
            _ => println!("Pattern table 1 (background):"),
        }
        for entry in entries {
            println!("  {}", entry);
        }
    }
}

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let image = build_image()?;
    persist::write_chr(&args.output, &image)?;
    persist::verify_chr(&args.output, &image)?;
    if let Some(path) = &args.preview {
        persist::save_preview_png(path, &image)?;
    }
    if let Some(path) = &args.legend {
        persist::save_legend_json(path)?;
    }

    print_summary(&image);
    Ok(())
}
