//! Integration tests for the classification database and its resources.

use std::collections::BTreeMap;

use jiscodec::chardb::{self, CharDb};
use jiscodec::{Category, CategorySet};

fn point_map(db: &CharDb) -> BTreeMap<u32, Category> {
    db.ranges()
        .iter()
        .flat_map(|&(start, end, category)| (start..=end).map(move |cp| (cp, category)))
        .collect()
}

#[test]
fn category_counts_match_the_standards() {
    let expected = [
        (Category::Unknown, 0),
        (Category::ControlChar, 0),
        (Category::UsAscii, 95),
        (Category::JisX0201, 65),
        (Category::JisX0208, 6886),
        (Category::NecSpecialChar, 74),
        (Category::IbmExt, 373),
        (Category::JisX0213Plane3, 1614),
        (Category::JisX0213Plane4, 2347),
    ];
    for (category, count) in expected {
        assert_eq!(chardb::count(category), count, "{category}");
    }
}

/// The compact resource must describe exactly the same mapping as the
/// verbose source it was generated from. On failure, every differing
/// codepoint is listed.
#[test]
fn compact_resource_matches_verbose_source() {
    let verbose = CharDb::parse(include_str!("../resources/jisclass-verbose.txt")).unwrap();
    let compact = CharDb::parse(include_str!("../resources/jisclass.txt")).unwrap();

    let verbose = point_map(&verbose);
    let compact = point_map(&compact);

    let mut diffs: Vec<String> = Vec::new();
    for (cp, category) in &verbose {
        match compact.get(cp) {
            Some(c) if c == category => {}
            Some(c) => diffs.push(format!("U+{cp:04X}: verbose {category}, compact {c}")),
            None => diffs.push(format!("U+{cp:04X}: missing from compact ({category})")),
        }
    }
    for cp in compact.keys() {
        if !verbose.contains_key(cp) {
            diffs.push(format!("U+{cp:04X}: only in compact"));
        }
    }
    assert!(diffs.is_empty(), "{} differences:\n{}", diffs.len(), diffs.join("\n"));
}

/// Re-running the compactor over the verbose source must reproduce the
/// shipped compact resource byte for byte (modulo header comments).
#[test]
fn compactor_is_deterministic() {
    let verbose = CharDb::parse(include_str!("../resources/jisclass-verbose.txt")).unwrap();
    let points: Vec<(u32, Category)> = point_map(&verbose).into_iter().collect();
    let regenerated = chardb::format_ranges(&chardb::compact_ranges(&points));

    let shipped: String = include_str!("../resources/jisclass.txt")
        .lines()
        .filter(|line| !line.starts_with('#'))
        .map(|line| format!("{line}\n"))
        .collect();
    assert_eq!(regenerated, shipped);
}

#[test]
fn classification_vectors() {
    assert_eq!(chardb::classify(0x41), Category::UsAscii);
    assert_eq!(chardb::classify(0x01), Category::Unknown);
    assert!(chardb::contains_all("ABC123", CategorySet::US_ASCII));
    assert!(!chardb::contains_all("あ", CategorySet::US_ASCII));
    assert!(chardb::contains_all(
        "ABCあいう",
        CategorySet::US_ASCII | CategorySet::JIS_X_0208
    ));
}

#[test]
fn variant_symbols_are_1990_available() {
    // both members of every historical mapping pair classify as JIS X 0208
    for cp in [
        0x2014, 0x2015, 0x2016, 0x2225, 0x2212, 0xFF0D, 0x301C, 0xFF5E, 0x00A2, 0xFFE0, 0x00A3,
        0xFFE1, 0x00AC, 0xFFE2,
    ] {
        assert_eq!(chardb::classify(cp), Category::JisX0208, "U+{cp:04X}");
    }
}

#[test]
fn combining_mark_cells_are_never_classified() {
    // the four standalone diacritic cells stay conversion-only
    for cp in [0x3099, 0x309A, 0x0300, 0x0301, 0x02E5, 0x02E9] {
        assert_eq!(chardb::classify(cp), Category::Unknown, "U+{cp:04X}");
    }
}

#[test]
fn supplementary_plane_two() {
    assert_eq!(chardb::classify(0x20089), Category::JisX0213Plane4);
    assert!(chardb::is_jis_2004(0x20089));
    assert!(!chardb::is_windows_31j(0x20089));
}
