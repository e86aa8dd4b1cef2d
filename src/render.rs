//! Renders one character into the fixed cell and packs it to 1 bit per pixel.

use crate::font::{GlyphBounds, GlyphSource};
use crate::metrics::CellGeometry;

/// A pixel is ink when its coverage reaches the midpoint of the value range.
/// The same cut is applied to every glyph of a run.
const INK_THRESHOLD: u8 = 128;

/// Where the glyph's bounding box lands inside the cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Alignment {
    /// Bounding box centered on both axes. Used for full-width entries.
    Center,
    /// Baseline anchored `ascent` rows below the cell top; horizontally
    /// centered within the leading `advance` columns.
    ///
    /// Punctuation with an asymmetric advance gets special treatment:
    /// brackets and the comma keep their natural origin instead of being
    /// centered, and the comma is additionally pushed down so it sits on the
    /// cell's bottom padding.
    Baseline { advance: u32 },
}

/// A packed 1-bit glyph raster of exactly
/// [`bytes_per_glyph`](CellGeometry::bytes_per_glyph) bytes: `height` rows of
/// `width` bits, MSB first, rows padded with zero bits to whole bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap(Vec<u8>);

impl GlyphBitmap {
    /// All-background bitmap of the correct length for `cell`.
    pub fn blank(cell: &CellGeometry) -> Self {
        Self(vec![0; cell.bytes_per_glyph()])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when not a single bit of ink was packed.
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Unpacks back into a `height × width` 0/1 matrix.
    pub fn unpack(&self, cell: &CellGeometry) -> Vec<Vec<u8>> {
        self.0
            .chunks(cell.bytes_per_row())
            .map(|row| {
                (0..cell.width as usize)
                    .map(|x| (row[x / 8] >> (7 - x % 8)) & 1)
                    .collect()
            })
            .collect()
    }
}

/// Renders `c` into a cell-sized canvas under `align` and packs the result.
///
/// Characters without a visible outline produce an all-zero bitmap; that is
/// not an error. Glyphs larger than the cell are clipped at the cell edges.
pub fn render_glyph(
    source: &impl GlyphSource,
    c: char,
    ascent: u32,
    cell: &CellGeometry,
    align: Alignment,
) -> GlyphBitmap {
    let Some(raster) = source.raster(c) else {
        return GlyphBitmap::blank(cell);
    };

    let b = raster.bounds;
    let (x0, y0) = place(c, &b, ascent, cell, align);

    let mut rows = vec![vec![0u8; cell.width as usize]; cell.height as usize];
    for gy in 0..b.height as i64 {
        let cy = y0 + gy;
        if cy < 0 || cy >= cell.height as i64 {
            continue;
        }
        for gx in 0..b.width as i64 {
            let cx = x0 + gx;
            if cx < 0 || cx >= cell.width as i64 {
                continue;
            }
            if raster.coverage[(gy * b.width as i64 + gx) as usize] >= INK_THRESHOLD {
                rows[cy as usize][cx as usize] = 1;
            }
        }
    }

    let mut packed = Vec::with_capacity(cell.bytes_per_glyph());
    for row in &rows {
        pack_row(row, &mut packed);
    }

    GlyphBitmap(packed)
}

/// Top-left cell coordinate of the glyph's ink.
///
/// Never returns a negative coordinate on an axis the policy controls: when
/// centering would place the box off-canvas the glyph falls back to its
/// natural origin at the cell edge.
fn place(c: char, b: &GlyphBounds, ascent: u32, cell: &CellGeometry, align: Alignment) -> (i64, i64) {
    let (w, h) = (b.width as i64, b.height as i64);

    match align {
        Alignment::Center => {
            let x = ((cell.width as i64 - w) / 2).max(0);
            let y = ((cell.height as i64 - h) / 2).max(0);
            (x, y)
        }
        Alignment::Baseline { advance } => {
            let x = match c {
                '[' | ']' | ',' => 0,
                _ => ((advance as i64 - w) / 2).max(0),
            };
            let y = match c {
                ',' => {
                    let padding = (cell.height as i64 * 15 / 100).max(1);
                    cell.height as i64 - padding - h
                }
                _ => ascent as i64 - (b.ymin as i64 + h),
            };
            (x, y.max(0))
        }
    }
}

/// Packs one row of 0/1 pixels MSB first, padding the low-order bits of the
/// final byte with zeroes when the row is not a multiple of 8 wide.
pub fn pack_row(row: &[u8], out: &mut Vec<u8>) {
    let mut acc = 0u8;
    let mut filled = 0u8;

    for &px in row {
        acc = (acc << 1) | (px & 1);
        filled += 1;
        if filled == 8 {
            out.push(acc);
            acc = 0;
            filled = 0;
        }
    }

    if filled != 0 {
        out.push(acc << (8 - filled));
    }
}

#[cfg(test)]
mod tests {
    use super::{pack_row, render_glyph, Alignment, GlyphBitmap};
    use crate::font::testing::ScriptedSource;
    use crate::font::GlyphBounds;
    use crate::metrics::CellGeometry;

    #[test_case(&[1, 0, 0, 0, 0, 0, 0, 0] => vec![0b1000_0000]; "left bit")]
    #[test_case(&[0, 0, 0, 0, 0, 0, 0, 1] => vec![0b0000_0001]; "right bit")]
    #[test_case(&[1, 1, 1, 1, 1, 1, 1, 1, 1] => vec![0xFF, 0b1000_0000]; "nine bits pad low")]
    #[test_case(&[1, 0, 1] => vec![0b1010_0000]; "three bits pad low")]
    #[test_case(&[] => Vec::<u8>::new(); "empty row")]
    fn pack(row: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        pack_row(row, &mut out);
        out
    }

    #[test]
    fn pack_unpack_round_trip() {
        let cell = CellGeometry { width: 11, height: 3 };
        let matrix: Vec<Vec<u8>> = vec![
            vec![1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
            vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        ];

        let mut packed = Vec::new();
        for row in &matrix {
            pack_row(row, &mut packed);
        }
        assert_eq!(packed.len(), cell.bytes_per_glyph());

        assert_eq!(GlyphBitmap(packed).unpack(&cell), matrix);
    }

    const CELL: CellGeometry = CellGeometry { width: 16, height: 16 };

    #[test]
    fn missing_outline_is_blank() {
        let source = ScriptedSource::new(12, 4);

        let bitmap = render_glyph(&source, ' ', 12, &CELL, Alignment::Center);

        assert_eq!(bitmap.len(), CELL.bytes_per_glyph());
        assert!(bitmap.is_blank());
    }

    #[test]
    fn center_alignment_centers_the_box() {
        let bounds = GlyphBounds { xmin: 1, ymin: -2, width: 4, height: 4 };
        let source = ScriptedSource::new(12, 4).with_glyph('가', bounds);

        let bitmap = render_glyph(&source, '가', 12, &CELL, Alignment::Center);
        let matrix = bitmap.unpack(&CELL);

        // A 4x4 box centered in 16x16 occupies rows/cols 6..10.
        for (y, row) in matrix.iter().enumerate() {
            for (x, &px) in row.iter().enumerate() {
                let inside = (6..10).contains(&x) && (6..10).contains(&y);
                assert_eq!(px == 1, inside, "pixel at ({x}, {y})");
            }
        }
    }

    #[test]
    fn baseline_alignment_anchors_ascent() {
        // Box sitting on the baseline: ymin = 0, so ink spans the 4 rows
        // right above the baseline row at `ascent`.
        let bounds = GlyphBounds { xmin: 0, ymin: 0, width: 4, height: 4 };
        let source = ScriptedSource::new(12, 4).with_glyph('x', bounds);

        let bitmap = render_glyph(&source, 'x', 12, &CELL, Alignment::Baseline { advance: 16 });
        let matrix = bitmap.unpack(&CELL);

        let ink_rows: Vec<usize> = matrix
            .iter()
            .enumerate()
            .filter(|(_, row)| row.contains(&1))
            .map(|(y, _)| y)
            .collect();
        assert_eq!(ink_rows, vec![8, 9, 10, 11]);
    }

    #[test]
    fn baseline_descender_reaches_below_ascent_row() {
        let bounds = GlyphBounds { xmin: 0, ymin: -3, width: 4, height: 6 };
        let source = ScriptedSource::new(12, 4).with_glyph('g', bounds);

        let bitmap = render_glyph(&source, 'g', 12, &CELL, Alignment::Baseline { advance: 16 });
        let matrix = bitmap.unpack(&CELL);

        let ink_rows: Vec<usize> = matrix
            .iter()
            .enumerate()
            .filter(|(_, row)| row.contains(&1))
            .map(|(y, _)| y)
            .collect();
        // Top at ascent - (ymin + h) = 12 - 3 = 9, bottom 3 rows past the baseline.
        assert_eq!(ink_rows, (9..15).collect::<Vec<_>>());
    }

    #[test]
    fn narrow_advance_centers_within_advance() {
        let bounds = GlyphBounds { xmin: 0, ymin: 0, width: 4, height: 4 };
        let source = ScriptedSource::new(12, 4).with_glyph('x', bounds);

        let bitmap = render_glyph(&source, 'x', 12, &CELL, Alignment::Baseline { advance: 12 });
        let matrix = bitmap.unpack(&CELL);

        let ink_cols: Vec<usize> = (0..CELL.width as usize)
            .filter(|&x| matrix.iter().any(|row| row[x] == 1))
            .collect();
        assert_eq!(ink_cols, vec![4, 5, 6, 7]);
    }

    #[test]
    fn brackets_keep_natural_origin() {
        let bounds = GlyphBounds { xmin: 2, ymin: 0, width: 3, height: 10 };
        let source = ScriptedSource::new(12, 4).with_glyph('[', bounds);

        let bitmap = render_glyph(&source, '[', 12, &CELL, Alignment::Baseline { advance: 12 });
        let matrix = bitmap.unpack(&CELL);

        assert_eq!(matrix[5][0], 1, "bracket ink starts at column 0");
    }

    #[test]
    fn comma_sits_on_bottom_padding() {
        let bounds = GlyphBounds { xmin: 0, ymin: -1, width: 2, height: 3 };
        let source = ScriptedSource::new(12, 4).with_glyph(',', bounds);

        let bitmap = render_glyph(&source, ',', 12, &CELL, Alignment::Baseline { advance: 12 });
        let matrix = bitmap.unpack(&CELL);

        let ink_rows: Vec<usize> = matrix
            .iter()
            .enumerate()
            .filter(|(_, row)| row.contains(&1))
            .map(|(y, _)| y)
            .collect();
        // padding = max(1, 16 * 15 / 100) = 2, ink bottom at height - padding.
        assert_eq!(ink_rows, vec![11, 12, 13]);
    }

    #[test]
    fn oversized_glyph_clips_to_forced_cell() {
        let small = CellGeometry { width: 6, height: 4 };
        let bounds = GlyphBounds { xmin: 0, ymin: 0, width: 10, height: 10 };
        let source = ScriptedSource::new(12, 4).with_glyph('W', bounds);

        let bitmap = render_glyph(&source, 'W', 12, &small, Alignment::Center);

        // Size stays authoritative; the overflow is silently dropped.
        assert_eq!(bitmap.len(), small.bytes_per_glyph());
        assert!(!bitmap.is_blank());
    }
}
