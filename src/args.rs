use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[clap(about = "Converts a TTF font into fixed-cell 1-bit tables for e-paper display drivers")]
pub struct Args {
    /// TTF font file to convert
    #[clap(long, short = 'f')]
    pub font: PathBuf,

    /// Pixel size the glyphs are rendered at
    #[clap(long, short = 's')]
    pub size: u32,

    /// Name of the emitted C table and descriptor
    #[clap(long, short = 'n', default_value = "Font48")]
    pub name: String,

    /// Output directory for the header and source artifacts
    #[clap(long, short = 'o', default_value = ".")]
    pub out: PathBuf,

    /// Character set to render
    #[clap(long, value_enum, default_value = "ascii")]
    pub mode: Mode,

    /// Keep ink only for digits and clock punctuation (ascii mode)
    #[clap(long)]
    pub digits_only: bool,

    /// Force the cell width in pixels, 0 keeps the measured value
    #[clap(long, default_value = "0")]
    pub force_width: u32,

    /// Force the cell height in pixels, 0 keeps the measured value
    #[clap(long, default_value = "0")]
    pub force_height: u32,

    /// Embed the sFONT/cFONT typedefs into the header
    #[clap(long)]
    pub include_struct: bool,
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Contiguous printable ASCII table, addressed by position
    Ascii,
    /// ASCII + KS X 1001 syllables + auxiliary symbols, UTF-8 keyed
    Full,
    /// Status-display vocabulary only, UTF-8 keyed, sorted
    Lite,
}
