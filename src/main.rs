use std::{fs::File, io::{BufWriter, Write}, path::PathBuf};
use anyhow::Context;
use clap::Parser;
use rgb::RGB8;
use tracing::{debug, info};

use color_harmony::{render, RGBColor};

#[derive(Debug, Parser)]
#[command(name = "color-harmony", version,
          about = "Generate harmonized color schemes from a base hex color")]
struct Cli {
    /// Base hex color (e.g. #32a852).
    #[arg(short, long)]
    color: String,

    /// Number of color variations per scheme (at least 2).
    #[arg(short, long, default_value_t = 4)]
    variations: usize,

    /// Write an HTML swatch sheet to this path.
    #[arg(long)]
    html: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    debug!(color = %cli.color, variations = cli.variations,
           "generating schemes");
    let base = RGB8::from_hex(&cli.color)
        .with_context(|| format!("parse base color {}", cli.color))?;
    let harmony = base.harmonize(cli.variations)?;
    let rows = harmony.rows()?;

    println!("Harmonized Color Schemes Hex Codes:");
    for row in &rows {
        println!("{} Scheme Colors: {}", row.name, row.colors.join(", "));
    }

    if let Some(path) = &cli.html {
        let mut fh = BufWriter::new(File::create(path)
            .with_context(|| format!("create {}", path.display()))?);
        render::swatch_sheet(&mut fh, &cli.color, &rows)
            .with_context(|| format!("write {}", path.display()))?;
        fh.flush()
            .with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "wrote swatch sheet");
    }
    Ok(())
}
