//! Fixed-cell bitmap font table generator for e-paper display drivers.
//!
//! Embedded display drivers (Waveshare's sFONT/cFONT conventions and friends)
//! have no font renderer of their own; they expect every glyph pre-rendered
//! into a fixed-size cell, 1 bit per pixel, rows packed MSB first. This crate
//! turns a TTF font into such tables:
//!
//! 1. [`charset`] decides which code points a run renders and in what order.
//! 2. [`metrics`] derives the shared [`CellGeometry`] for the run from the
//!    glyph bounding boxes (or takes a forced override).
//! 3. [`render`] paints each character into the cell under an [`Alignment`]
//!    policy, thresholds it to 1 bit and packs the rows.
//! 4. [`table`] folds the selection into an immutable [`FontTable`] plus a
//!    [`RunReport`] of non-fatal anomalies.
//! 5. [`emit`] serializes the table into a C header and a C source artifact.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use epd_fontgen::{charset, emit, font::FontFace, metrics::FixedMetrics, table};
//!
//! # fn main() -> Result<(), epd_fontgen::font::FontError> {
//! let face = FontFace::open(Path::new("font.ttf"), 48)?;
//! let metrics = FixedMetrics::measure(&face, charset::printable_ascii());
//!
//! let (table, report) = table::build_range_table(
//!     &face,
//!     "Font48",
//!     &metrics,
//!     charset::ASCII_START,
//!     charset::ASCII_END,
//!     None,
//! );
//!
//! let artifacts = emit::render(&table, true);
//! println!("{} glyphs, {} bytes", report.glyph_count, report.table_bytes);
//! # Ok(())
//! # }
//! ```
//!
//! [`CellGeometry`]: metrics::CellGeometry
//! [`Alignment`]: render::Alignment
//! [`FontTable`]: table::FontTable
//! [`RunReport`]: table::RunReport

#[cfg(test)]
#[macro_use]
extern crate test_case;

#[macro_use]
extern crate log;

pub mod charset;
pub mod emit;
pub mod font;
pub mod metrics;
pub mod render;
pub mod table;
