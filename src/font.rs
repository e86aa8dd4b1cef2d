//! The font source collaborator: everything the pipeline needs from a font
//! is the [`GlyphSource`] capability. [`FontFace`] implements it on top of
//! [`fontdue`]; tests script their own sources.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Bounding box of a glyph outline at the run's pixel size.
///
/// Follows fontdue's conventions: `xmin` is the left side bearing (negative
/// when the outline overhangs the origin) and `ymin` is measured from the
/// baseline up to the bottom of the box (negative for descenders).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct GlyphBounds {
    pub xmin: i32,
    pub ymin: i32,
    pub width: u32,
    pub height: u32,
}

/// Font-wide vertical metrics, both measured from the baseline in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct LineMetrics {
    pub ascent: u32,
    pub descent: u32,
}

/// One glyph's 8-bit coverage map, row major, `bounds.width` columns per row.
/// 255 is full ink, 0 is background.
#[derive(Debug, Clone)]
pub struct Raster {
    pub bounds: GlyphBounds,
    pub coverage: Vec<u8>,
}

/// A stateless (character, pixel size) → raster capability.
///
/// The pixel size is fixed at construction; every call answers for the same
/// size, so a whole run shares one source.
pub trait GlyphSource {
    fn line_metrics(&self) -> LineMetrics;

    /// Reference bounding box of a character.
    ///
    /// [`None`] means the character has no visible outline: whitespace and
    /// unmapped code points legitimately render blank.
    fn bounds(&self, c: char) -> Option<GlyphBounds>;

    /// Paints the character into a coverage map of its bounding box size.
    fn raster(&self, c: char) -> Option<Raster>;
}

/// A parsed TTF font fixed at one pixel size.
pub struct FontFace {
    font: fontdue::Font,
    px: f32,
    line: LineMetrics,
}

impl FontFace {
    /// Reads and parses the font file. Any failure here is fatal for the run
    /// and reports the attempted path.
    pub fn open(path: &Path, px: u32) -> Result<Self, FontError> {
        let data = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_owned(),
            source,
        })?;

        let font = fontdue::Font::from_bytes(data, fontdue::FontSettings::default()).map_err(
            |reason| FontError::Parse {
                path: path.to_owned(),
                reason,
            },
        )?;

        let px = px as f32;
        let Some(line) = font.horizontal_line_metrics(px) else {
            return Err(FontError::NoLineMetrics {
                path: path.to_owned(),
            });
        };

        Ok(Self {
            font,
            px,
            line: LineMetrics {
                ascent: line.ascent.max(0.0).round() as u32,
                // fontdue reports descent as a negative offset from the baseline
                descent: (-line.descent).max(0.0).round() as u32,
            },
        })
    }
}

impl GlyphSource for FontFace {
    fn line_metrics(&self) -> LineMetrics {
        self.line
    }

    fn bounds(&self, c: char) -> Option<GlyphBounds> {
        // Glyph index 0 is .notdef; treat unmapped code points as blank.
        if self.font.lookup_glyph_index(c) == 0 {
            return None;
        }

        let m = self.font.metrics(c, self.px);
        if m.width == 0 || m.height == 0 {
            return None;
        }

        Some(GlyphBounds {
            xmin: m.xmin,
            ymin: m.ymin,
            width: m.width as u32,
            height: m.height as u32,
        })
    }

    fn raster(&self, c: char) -> Option<Raster> {
        if self.font.lookup_glyph_index(c) == 0 {
            return None;
        }

        let (m, coverage) = self.font.rasterize(c, self.px);
        if m.width == 0 || m.height == 0 {
            return None;
        }

        Some(Raster {
            bounds: GlyphBounds {
                xmin: m.xmin,
                ymin: m.ymin,
                width: m.width as u32,
                height: m.height as u32,
            },
            coverage,
        })
    }
}

#[derive(Error, Debug)]
pub enum FontError {
    #[error("Cannot open font file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse font file {path}: {reason}")]
    Parse { path: PathBuf, reason: &'static str },

    #[error("Font {path} defines no horizontal line metrics")]
    NoLineMetrics { path: PathBuf },
}
