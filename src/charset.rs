//! Decides which code points a run renders and in what order.
//!
//! Three selection modes exist: the contiguous printable ASCII range
//! (positionally addressed tables), the curated full set (ASCII, KS X 1001
//! syllables, auxiliary symbols; UTF-8 keyed) and the curated lite set (just
//! the status-display vocabulary, sorted). Every mode yields a de-duplicated
//! sequence; an empty selection is valid and produces a zero-entry table.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

pub mod ksx1001;

pub const ASCII_START: char = ' '; // 0x20
pub const ASCII_END: char = '~'; // 0x7E

/// The only characters allowed to carry ink in a digits-only range table.
/// Everything else in the range still occupies its slot, deliberately blank.
pub const DIGITS_AND_PUNCT: &str = "0123456789:- ";

/// Symbols appended after the syllable block in full mode: temperature units,
/// weather marks and arrows.
pub const AUXILIARY_CHARS: &str = "℃℉★☆○●◎◇◆□■△▲▽▼→←↑↓↔";

/// Everything the status displays (elevator position, weather, air quality,
/// clock) need; lite mode renders exactly this set.
pub const REQUIRED_CHARS: &str = concat!(
    "0123456789",
    "층엘리베이터위치호출대기중현재심야절전",
    "온도습강수확률미세먼지풍속날씨",
    "보통나쁨좋음매우최악",
    "맑음구름많조금흐림비눈안개",
    "일월화수목금토",
    "오전후",
    "%°C.km/h :/",
);

/// The full printable ASCII range, ascending.
pub fn printable_ascii() -> RangeInclusive<char> {
    ASCII_START..=ASCII_END
}

/// Full mode: printable ASCII, then the KS X 1001 precomposed syllables in
/// code point order, then [`AUXILIARY_CHARS`]. First occurrence wins; later
/// duplicates are silently skipped.
pub fn curated_full() -> Vec<char> {
    let syllables = ('\u{AC00}'..='\u{D7A3}').filter(|&c| ksx1001::contains(c));

    let mut seen = BTreeSet::new();
    printable_ascii()
        .chain(syllables)
        .chain(AUXILIARY_CHARS.chars())
        .filter(|&c| seen.insert(c))
        .collect()
}

/// Lite mode: [`REQUIRED_CHARS`] de-duplicated and sorted ascending by code
/// point. The source string's order is deliberately not preserved.
pub fn curated_lite() -> Vec<char> {
    REQUIRED_CHARS
        .chars()
        .collect::<BTreeSet<char>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{curated_full, curated_lite, printable_ascii, REQUIRED_CHARS};

    #[test]
    fn full_starts_with_ascii_in_order() {
        let full = curated_full();

        let ascii: Vec<char> = printable_ascii().collect();
        assert_eq!(&full[..ascii.len()], &ascii[..]);
    }

    #[test]
    fn full_has_no_duplicates() {
        let full = curated_full();

        let unique: BTreeSet<char> = full.iter().copied().collect();
        assert_eq!(unique.len(), full.len());
    }

    #[test]
    fn full_contains_all_three_sources() {
        let full: BTreeSet<char> = curated_full().into_iter().collect();

        assert!(full.contains(&'A'));
        assert!(full.contains(&'가'));
        assert!(full.contains(&'℃'));
        assert!(full.contains(&'→'));
    }

    #[test]
    fn lite_is_sorted_and_deduplicated() {
        let lite = curated_lite();

        assert!(lite.windows(2).all(|w| w[0] < w[1]));
        // The raw string repeats several characters ('이', '기', spaces, ...)
        assert!(lite.len() < REQUIRED_CHARS.chars().count());

        let unique: BTreeSet<char> = REQUIRED_CHARS.chars().collect();
        assert_eq!(lite.len(), unique.len());
    }

    #[test]
    fn lite_covers_the_vocabulary() {
        let lite: BTreeSet<char> = curated_lite().into_iter().collect();

        for c in ['0', '9', '층', '날', '%', ':'] {
            assert!(lite.contains(&c), "missing {c:?}");
        }
    }
}
