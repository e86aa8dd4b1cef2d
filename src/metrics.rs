//! Derives the fixed cell every glyph of a run is rendered into.

use crate::font::{GlyphSource, LineMetrics};

/// The shared pixel cell of one output table. Computed once per run and
/// read-only afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CellGeometry {
    pub width: u32,
    pub height: u32,
}

impl CellGeometry {
    pub fn bytes_per_row(&self) -> usize {
        (self.width as usize + 7) / 8
    }

    pub fn bytes_per_glyph(&self) -> usize {
        self.bytes_per_row() * self.height as usize
    }

    /// A non-zero forced dimension replaces the computed one unconditionally;
    /// glyphs that no longer fit are clipped, not rejected. 0 keeps the
    /// automatic value.
    pub fn with_overrides(self, forced_width: u32, forced_height: u32) -> Self {
        Self {
            width: if forced_width != 0 { forced_width } else { self.width },
            height: if forced_height != 0 { forced_height } else { self.height },
        }
    }
}

/// The run's vertical font metrics plus the cell they produced.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedMetrics {
    pub ascent: u32,
    pub descent: u32,
    pub cell: CellGeometry,
}

/// Side slack so glyphs with negative left bearing or slight overhang survive
/// centering without clipping.
const WIDTH_PAD: u32 = 6;
/// Vertical slack above and below the tallest observed box.
const HEIGHT_PAD: u32 = 4;

impl FixedMetrics {
    /// Scans the candidate character set and derives the shared cell.
    ///
    /// Code points without a visible outline do not contribute to the maxima.
    /// The width is rounded up to a multiple of 8 so rows pack into whole
    /// bytes; the height never drops below ascent + descent, guaranteeing
    /// room for the full font vertical metric.
    pub fn measure(source: &impl GlyphSource, chars: impl IntoIterator<Item = char>) -> Self {
        let LineMetrics { ascent, descent } = source.line_metrics();

        let (max_w, max_h) = chars
            .into_iter()
            .filter_map(|c| source.bounds(c))
            .fold((0, 0), |(w, h), b| (w.max(b.width), h.max(b.height)));

        Self {
            ascent,
            descent,
            cell: CellGeometry {
                width: round_up_to_8(max_w + WIDTH_PAD),
                height: (max_h + HEIGHT_PAD).max(ascent + descent),
            },
        }
    }
}

fn round_up_to_8(width: u32) -> u32 {
    (width + 7) / 8 * 8
}

#[cfg(test)]
mod tests {
    use super::{CellGeometry, FixedMetrics};
    use crate::font::testing::ScriptedSource;
    use crate::font::GlyphBounds;

    #[test_case(48, 72 => 432; "48x72 cell")]
    #[test_case(24, 24 => 72; "24x24 cell")]
    #[test_case(12, 16 => 32; "width rounds up to two bytes")]
    #[test_case(1, 1 => 1; "single pixel")]
    fn bytes_per_glyph(width: u32, height: u32) -> usize {
        CellGeometry { width, height }.bytes_per_glyph()
    }

    #[test_case(0, 0 => (56, 72); "zero keeps auto")]
    #[test_case(48, 0 => (48, 72); "forced width only")]
    #[test_case(0, 64 => (56, 64); "forced height only")]
    #[test_case(48, 72 => (48, 72); "both forced")]
    fn with_overrides(forced_w: u32, forced_h: u32) -> (u32, u32) {
        let cell = CellGeometry { width: 56, height: 72 }.with_overrides(forced_w, forced_h);
        (cell.width, cell.height)
    }

    fn box_glyph(width: u32, height: u32) -> GlyphBounds {
        GlyphBounds {
            xmin: 0,
            ymin: 0,
            width,
            height,
        }
    }

    #[test]
    fn measure_pads_and_rounds() {
        let source = ScriptedSource::new(58, 14)
            .with_glyph('A', box_glyph(44, 58))
            .with_glyph('g', box_glyph(30, 40));

        let metrics = FixedMetrics::measure(&source, ['A', 'g', ' ']);

        assert_eq!(metrics.ascent, 58);
        assert_eq!(metrics.descent, 14);
        // 44 + 6 rounded up to 56; 58 + 4 loses to ascent + descent = 72
        assert_eq!(metrics.cell, CellGeometry { width: 56, height: 72 });
    }

    #[test]
    fn measure_height_floor_is_line_metrics() {
        let source = ScriptedSource::new(20, 5).with_glyph('.', box_glyph(3, 3));

        let metrics = FixedMetrics::measure(&source, ['.']);

        assert_eq!(metrics.cell.height, 25);
    }

    #[test]
    fn measure_empty_selection() {
        let source = ScriptedSource::new(20, 5);

        let metrics = FixedMetrics::measure(&source, []);

        // Only the padding and line metrics remain.
        assert_eq!(metrics.cell, CellGeometry { width: 8, height: 25 });
    }
}
