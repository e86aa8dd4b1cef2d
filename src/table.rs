//! Folds a character selection into the finished, immutable font table.

use thiserror::Error;

use crate::font::GlyphSource;
use crate::metrics::{CellGeometry, FixedMetrics};
use crate::render::{render_glyph, Alignment, GlyphBitmap};

/// Address of a glyph inside an emitted table. Keys within one table are
/// pairwise distinct.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GlyphKey {
    /// Implicit: the glyph's data starts at `position * bytes_per_glyph`.
    Position(usize),
    /// The character's UTF-8 bytes, zero padded to 3.
    Utf8([u8; 3]),
}

impl GlyphKey {
    pub fn utf8(c: char) -> Self {
        let mut scratch = [0u8; 4];
        let encoded = c.encode_utf8(&mut scratch).as_bytes();

        let mut key = [0u8; 3];
        let len = encoded.len().min(3);
        key[..len].copy_from_slice(&encoded[..len]);
        Self::Utf8(key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub code: char,
    pub key: GlyphKey,
    pub bitmap: GlyphBitmap,
}

/// How the emitted table is addressed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TableKind {
    /// Flat bitmap concatenation, addressed by position in the range.
    Positional,
    /// Key + bitmap records. `narrow_width` is the advance recorded for the
    /// non-full-width (ASCII) entries of the table.
    Keyed { narrow_width: u32 },
}

/// One run's complete output: the ordered entries plus the descriptor fields
/// the emitter needs. Never mutated after the builder returns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontTable {
    pub name: String,
    pub cell: CellGeometry,
    pub kind: TableKind,
    pub entries: Vec<Entry>,
}

impl FontTable {
    /// Total data artifact size in bytes, keys included for keyed tables.
    pub fn data_len(&self) -> usize {
        let per_entry = self.cell.bytes_per_glyph()
            + match self.kind {
                TableKind::Positional => 0,
                TableKind::Keyed { .. } => 3,
            };
        self.entries.len() * per_entry
    }
}

/// Per-glyph non-fatal anomaly. Accumulated during the run and surfaced to
/// the caller afterwards; never aborts anything.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    #[error("Blank glyph rendered for visible character {code:?} (U+{:04X})", codepoint(.code))]
    BlankGlyph { code: char },
}

fn codepoint(c: &char) -> u32 {
    *c as u32
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub glyph_count: usize,
    pub table_bytes: usize,
    pub anomalies: Vec<Anomaly>,
}

/// Builds a positionally addressed table over `[start, end]` inclusive.
///
/// With an `allowed` filter, excluded code points still occupy their slot as
/// a deliberate blank (no warning), keeping the table densely indexable by
/// offset.
pub fn build_range_table(
    source: &impl GlyphSource,
    name: &str,
    metrics: &FixedMetrics,
    start: char,
    end: char,
    allowed: Option<&str>,
) -> (FontTable, RunReport) {
    let cell = metrics.cell;
    let align = Alignment::Baseline { advance: cell.width };

    let mut entries = Vec::new();
    let mut anomalies = Vec::new();

    for (position, c) in (start..=end).enumerate() {
        let blanked = allowed.is_some_and(|set| !set.contains(c));
        let bitmap = if blanked {
            GlyphBitmap::blank(&cell)
        } else {
            let bitmap = render_glyph(source, c, metrics.ascent, &cell, align);
            note_blank(&mut anomalies, c, &bitmap);
            bitmap
        };

        debug!("Rendered {c:?} at position {position}");
        entries.push(Entry {
            code: c,
            key: GlyphKey::Position(position),
            bitmap,
        });
    }

    finish(
        FontTable {
            name: name.to_owned(),
            cell,
            kind: TableKind::Positional,
            entries,
        },
        anomalies,
    )
}

/// Builds a UTF-8 keyed table over an already ordered, de-duplicated
/// selection. ASCII entries render baseline-anchored within `narrow_width`
/// columns; everything else is centered full-width.
pub fn build_keyed_table(
    source: &impl GlyphSource,
    name: &str,
    metrics: &FixedMetrics,
    narrow_width: u32,
    chars: &[char],
) -> (FontTable, RunReport) {
    let cell = metrics.cell;

    let mut entries = Vec::with_capacity(chars.len());
    let mut anomalies = Vec::new();

    for &c in chars {
        let align = if c.is_ascii() {
            Alignment::Baseline { advance: narrow_width }
        } else {
            Alignment::Center
        };

        let bitmap = render_glyph(source, c, metrics.ascent, &cell, align);
        note_blank(&mut anomalies, c, &bitmap);

        entries.push(Entry {
            code: c,
            key: GlyphKey::utf8(c),
            bitmap,
        });

        if entries.len() % 2000 == 0 {
            info!("Rendered {} of {} glyphs", entries.len(), chars.len());
        }
    }

    finish(
        FontTable {
            name: name.to_owned(),
            cell,
            kind: TableKind::Keyed { narrow_width },
            entries,
        },
        anomalies,
    )
}

/// Blank output for a character that should have ink is worth a warning.
/// Whitespace renders blank legitimately, so it is exempt; this also keeps
/// the warning list free of false positives for the space slot.
fn note_blank(anomalies: &mut Vec<Anomaly>, c: char, bitmap: &GlyphBitmap) {
    if bitmap.is_blank() && !c.is_whitespace() {
        anomalies.push(Anomaly::BlankGlyph { code: c });
    }
}

fn finish(table: FontTable, anomalies: Vec<Anomaly>) -> (FontTable, RunReport) {
    let report = RunReport {
        glyph_count: table.entries.len(),
        table_bytes: table.data_len(),
        anomalies,
    };
    (table, report)
}
