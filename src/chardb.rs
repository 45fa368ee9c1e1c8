//! Classification database for the Japanese character standards.
//!
//! The database assigns every known codepoint exactly one [`Category`], the
//! most specific standard that defines it. It is parsed once from the
//! bundled `resources/jisclass.txt` (a range-compacted text resource) and
//! shared process-wide; after construction it is immutable, so lookups are
//! lock-free.
//!
//! # Examples
//!
//! ```
//! use jiscodec::{chardb, Category, CategorySet};
//!
//! assert_eq!(chardb::classify('A' as u32), Category::UsAscii);
//! assert_eq!(chardb::classify('あ' as u32), Category::JisX0208);
//! assert!(chardb::contains_all("ABC123", CategorySet::US_ASCII));
//! assert!(!chardb::contains_all("あ", CategorySet::US_ASCII));
//! ```

use std::fmt::Write as _;

use lazy_static::lazy_static;

use crate::category::{Category, CategorySet};
use crate::error::CodecError;

/// A classified inclusive codepoint range.
pub type ClassRange = (u32, u32, Category);

/// The parsed classification table: non-overlapping ranges sorted by start.
#[derive(Debug, Clone)]
pub struct CharDb {
    ranges: Vec<ClassRange>,
    counts: [usize; 9],
}

lazy_static! {
    static ref DB: CharDb = CharDb::parse(include_str!("../resources/jisclass.txt"))
        .expect("bundled resources/jisclass.txt is invalid");
}

impl CharDb {
    /// Parses a classification resource.
    ///
    /// Each significant line is `tag,range` where `tag` is a [`Category`]
    /// ordinal and `range` is a `\uXXXX` escape (4 to 6 hex digits), a
    /// `\uXXXX-\uYYYY` inclusive range, or a `\uD8XX\uDCXX` surrogate pair
    /// denoting a single supplementary scalar. Comment (`#`) lines and
    /// lines that do not match the grammar are skipped; a tag with no
    /// corresponding category is an error, since it means the resource and
    /// the code disagree about the category numbering.
    pub fn parse(text: &str) -> Result<CharDb, CodecError> {
        let mut ranges: Vec<ClassRange> = Vec::new();
        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((tag, range)) = line.split_once(',') else {
                continue;
            };
            let Ok(ordinal) = tag.trim().parse::<u8>() else {
                continue;
            };
            let category = Category::from_ordinal(ordinal).ok_or_else(|| {
                CodecError::ResourceMissing(format!(
                    "jisclass line {}: unknown category tag {}",
                    lineno + 1,
                    ordinal
                ))
            })?;
            let Some((start, rest)) = parse_scalar(range.trim()) else {
                continue;
            };
            let end = match rest.strip_prefix('-') {
                Some(rest) => match parse_scalar(rest) {
                    Some((end, "")) if end >= start => end,
                    _ => continue,
                },
                None if rest.is_empty() => start,
                None => continue,
            };
            ranges.push((start, end, category));
        }
        ranges.sort_unstable_by_key(|&(start, _, _)| start);

        let mut counts = [0usize; 9];
        for &(start, end, category) in &ranges {
            counts[category.ordinal() as usize] += (end - start + 1) as usize;
        }
        Ok(CharDb { ranges, counts })
    }

    /// The category of `codepoint`, or [`Category::Unknown`] if unlisted.
    pub fn classify(&self, codepoint: u32) -> Category {
        let idx = self
            .ranges
            .partition_point(|&(start, _, _)| start <= codepoint);
        if idx == 0 {
            return Category::Unknown;
        }
        let (start, end, category) = self.ranges[idx - 1];
        debug_assert!(start <= codepoint);
        if codepoint <= end {
            category
        } else {
            Category::Unknown
        }
    }

    /// Whether the category of `codepoint` is a member of `set`.
    #[inline]
    pub fn contains(&self, codepoint: u32, set: CategorySet) -> bool {
        set.has(self.classify(codepoint))
    }

    /// Whether every scalar of `text` classifies into a member of `set`.
    pub fn contains_all(&self, text: &str, set: CategorySet) -> bool {
        text.chars().all(|c| self.contains(c as u32, set))
    }

    /// Number of codepoints assigned to `category`.
    #[inline]
    pub fn count(&self, category: Category) -> usize {
        self.counts[category.ordinal() as usize]
    }

    /// The raw sorted ranges, in ascending codepoint order.
    pub fn ranges(&self) -> &[ClassRange] {
        &self.ranges
    }
}

/// The process-wide database parsed from the bundled resource.
pub fn db() -> &'static CharDb {
    &DB
}

/// See [`CharDb::classify`].
#[inline]
pub fn classify(codepoint: u32) -> Category {
    DB.classify(codepoint)
}

/// See [`CharDb::contains`].
#[inline]
pub fn contains(codepoint: u32, set: CategorySet) -> bool {
    DB.contains(codepoint, set)
}

/// See [`CharDb::contains_all`].
#[inline]
pub fn contains_all(text: &str, set: CategorySet) -> bool {
    DB.contains_all(text, set)
}

/// See [`CharDb::count`].
#[inline]
pub fn count(category: Category) -> usize {
    DB.count(category)
}

const JIS_1990: CategorySet = CategorySet::US_ASCII
    .union(CategorySet::JIS_X_0201)
    .union(CategorySet::JIS_X_0208);

/// Whether `codepoint` is printable US-ASCII.
#[inline]
pub fn is_us_ascii(codepoint: u32) -> bool {
    contains(codepoint, CategorySet::US_ASCII)
}

/// Whether `codepoint` is representable in JIS X 0201 (ASCII included).
#[inline]
pub fn is_jis_x_0201(codepoint: u32) -> bool {
    contains(
        codepoint,
        CategorySet::US_ASCII.union(CategorySet::JIS_X_0201),
    )
}

/// Whether `codepoint` is representable in the 1990 JIS repertoire.
#[inline]
pub fn is_jis_x_0208(codepoint: u32) -> bool {
    contains(codepoint, JIS_1990)
}

/// Whether `codepoint` is representable in Windows-31J (code page 932).
#[inline]
pub fn is_windows_31j(codepoint: u32) -> bool {
    contains(
        codepoint,
        JIS_1990
            .union(CategorySet::NEC_SPECIAL_CHAR)
            .union(CategorySet::IBM_EXT),
    )
}

/// Whether `codepoint` is representable in JIS X 0213:2004.
#[inline]
pub fn is_jis_2004(codepoint: u32) -> bool {
    contains(
        codepoint,
        JIS_1990
            .union(CategorySet::JIS_X_0213_PLANE_3)
            .union(CategorySet::JIS_X_0213_PLANE_4),
    )
}

/// Folds a sorted list of classified codepoints into maximal ranges.
///
/// Adjacent codepoints with the same category merge; everything else stays a
/// single-codepoint range. Input order is preserved modulo sorting.
pub fn compact_ranges(points: &[(u32, Category)]) -> Vec<ClassRange> {
    let mut sorted: Vec<(u32, Category)> = points.to_vec();
    sorted.sort_unstable_by_key(|&(cp, _)| cp);

    let mut out: Vec<ClassRange> = Vec::new();
    for (cp, category) in sorted {
        match out.last_mut() {
            Some((_, end, cat)) if *cat == category && cp == *end + 1 => *end = cp,
            Some((_, end, _)) if cp <= *end => {} // duplicate input point
            _ => out.push((cp, cp, category)),
        }
    }
    out
}

/// Renders ranges back into the compact resource grammar.
///
/// This is the inverse of [`CharDb::parse`] up to comment lines: BMP scalars
/// print as 4-digit `\uXXXX` escapes, supplementary singles as surrogate
/// pairs, and supplementary range endpoints as unpadded hex escapes.
pub fn format_ranges(ranges: &[ClassRange]) -> String {
    let mut out = String::new();
    for &(start, end, category) in ranges {
        if start == end {
            let _ = writeln!(out, "{},{}", category.ordinal(), esc_single(start));
        } else {
            let _ = writeln!(
                out,
                "{},{}-{}",
                category.ordinal(),
                esc_raw(start),
                esc_raw(end)
            );
        }
    }
    out
}

fn esc_raw(cp: u32) -> String {
    if cp > 0xFFFF {
        format!("\\u{:X}", cp)
    } else {
        format!("\\u{:04X}", cp)
    }
}

fn esc_single(cp: u32) -> String {
    if cp > 0xFFFF {
        let v = cp - 0x10000;
        format!("\\u{:04X}\\u{:04X}", 0xD800 + (v >> 10), 0xDC00 + (v & 0x3FF))
    } else {
        format!("\\u{:04X}", cp)
    }
}

/// Parses one leading `\uXXXX` escape, combining a surrogate pair into the
/// supplementary scalar it denotes. Returns the scalar and the unparsed
/// remainder.
fn parse_scalar(s: &str) -> Option<(u32, &str)> {
    let (first, rest) = parse_escape(s)?;
    if (0xD800..0xDC00).contains(&first) {
        let (low, rest) = parse_escape(rest)?;
        if !(0xDC00..0xE000).contains(&low) {
            return None;
        }
        let cp = 0x10000 + ((first - 0xD800) << 10) + (low - 0xDC00);
        Some((cp, rest))
    } else {
        Some((first, rest))
    }
}

fn parse_escape(s: &str) -> Option<(u32, &str)> {
    let rest = s.strip_prefix("\\u")?;
    let hex_len = rest
        .bytes()
        .take(6)
        .take_while(|b| b.is_ascii_hexdigit())
        .count();
    if hex_len < 4 {
        return None;
    }
    let value = u32::from_str_radix(&rest[..hex_len], 16).ok()?;
    Some((value, &rest[hex_len..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_singles_ranges_and_pairs() {
        let db = CharDb::parse(
            "# comment\n\
             2,\\u0041\n\
             4,\\u3041-\\u3044\n\
             8,\\uD840\\uDC89\n\
             8,\\u22B4F-\\u22B50\n\
             junk line\n",
        )
        .unwrap();
        assert_eq!(db.classify(0x41), Category::UsAscii);
        assert_eq!(db.classify(0x3042), Category::JisX0208);
        assert_eq!(db.classify(0x3045), Category::Unknown);
        assert_eq!(db.classify(0x20089), Category::JisX0213Plane4);
        assert_eq!(db.classify(0x22B50), Category::JisX0213Plane4);
        assert_eq!(db.count(Category::JisX0208), 4);
        assert_eq!(db.count(Category::JisX0213Plane4), 3);
    }

    #[test]
    fn bad_tag_is_fatal() {
        let err = CharDb::parse("9,\\u0041\n").unwrap_err();
        assert!(matches!(err, CodecError::ResourceMissing(_)));
    }

    #[test]
    fn classify_misses() {
        assert_eq!(classify(0x01), Category::Unknown);
        assert_eq!(classify(0x10FFFF), Category::Unknown);
    }

    #[test]
    fn bundled_resource_vectors() {
        assert_eq!(classify(0x41), Category::UsAscii);
        assert_eq!(classify(0xFF66), Category::JisX0201);
        assert_eq!(classify(0x3042), Category::JisX0208);
        assert_eq!(classify(0xFF5E), Category::JisX0208);
        assert_eq!(classify(0x2460), Category::NecSpecialChar);
        assert_eq!(classify(0x9AD9), Category::IbmExt);
        assert_eq!(classify(0x20089), Category::JisX0213Plane4);
    }

    #[test]
    fn availability_predicates() {
        assert!(is_us_ascii('A' as u32));
        assert!(!is_us_ascii('あ' as u32));
        assert!(is_jis_x_0201(0xFF66));
        assert!(is_jis_x_0208('あ' as u32));
        assert!(!is_jis_x_0208(0x9AD9));
        assert!(is_windows_31j(0x9AD9));
        assert!(!is_windows_31j(0x20089));
        assert!(is_jis_2004(0x20089));
    }

    #[test]
    fn compaction_round_trip() {
        let points = [
            (0x41, Category::UsAscii),
            (0x42, Category::UsAscii),
            (0x43, Category::UsAscii),
            (0x50, Category::UsAscii),
            (0x3042, Category::JisX0208),
            (0x20089, Category::JisX0213Plane4),
        ];
        let ranges = compact_ranges(&points);
        assert_eq!(
            ranges,
            vec![
                (0x41, 0x43, Category::UsAscii),
                (0x50, 0x50, Category::UsAscii),
                (0x3042, 0x3042, Category::JisX0208),
                (0x20089, 0x20089, Category::JisX0213Plane4),
            ]
        );
        let text = format_ranges(&ranges);
        let db = CharDb::parse(&text).unwrap();
        for (cp, category) in points {
            assert_eq!(db.classify(cp), category, "U+{:04X}", cp);
        }
    }
}
