use std::fs::{create_dir_all, write};

use anyhow::Context;
use args::{Args, Mode};
use clap::Parser;
use epd_fontgen::{
    charset, emit,
    font::FontFace,
    metrics::{CellGeometry, FixedMetrics},
    table,
};
use log::{info, warn};

mod args;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let face = FontFace::open(&args.font, args.size)?;

    let selection = match args.mode {
        Mode::Ascii => charset::printable_ascii().collect(),
        Mode::Full => charset::curated_full(),
        Mode::Lite => charset::curated_lite(),
    };

    let mut metrics = FixedMetrics::measure(&face, selection.iter().copied());
    let auto = metrics.cell;

    if args.mode != Mode::Ascii {
        // Full-width tables default to a square cell at the requested size.
        metrics.cell = CellGeometry { width: args.size, height: args.size };
    }
    metrics.cell = metrics.cell.with_overrides(args.force_width, args.force_height);

    info!(
        "Metrics: ascent={} descent={} auto={}x{} final={}x{}",
        metrics.ascent, metrics.descent, auto.width, auto.height, metrics.cell.width, metrics.cell.height,
    );
    info!(
        "{} bytes per glyph, {} candidate characters",
        metrics.cell.bytes_per_glyph(),
        selection.len(),
    );

    let narrow_width = args.size * 3 / 4;
    let (table, report) = match args.mode {
        Mode::Ascii => table::build_range_table(
            &face,
            &args.name,
            &metrics,
            charset::ASCII_START,
            charset::ASCII_END,
            args.digits_only.then_some(charset::DIGITS_AND_PUNCT),
        ),
        Mode::Full | Mode::Lite => {
            table::build_keyed_table(&face, &args.name, &metrics, narrow_width, &selection)
        }
    };

    create_dir_all(&args.out)
        .with_context(|| format!("failed to create {}", args.out.display()))?;

    let artifacts = emit::render(&table, args.include_struct);
    let header_path = args.out.join(format!("{}.h", args.name));
    let source_path = args.out.join(format!("{}.c", args.name));

    write(&header_path, artifacts.header)
        .with_context(|| format!("failed to write {}", header_path.display()))?;
    write(&source_path, artifacts.source)
        .with_context(|| format!("failed to write {}", source_path.display()))?;

    for anomaly in &report.anomalies {
        warn!("{anomaly}");
    }

    println!("Wrote {} and {}", header_path.display(), source_path.display());
    println!(
        "{} glyphs, {} table bytes, {} warnings",
        report.glyph_count,
        report.table_bytes,
        report.anomalies.len(),
    );

    Ok(())
}
