//! Kana width and script conversion, plus the canned downgrade tables the
//! glyph codecs apply before encoding.
//!
//! Width conversion leans on Unicode normalization: text is NFD-decomposed
//! on the way to half-width (splitting が into か plus U+3099 before the
//! remap) and NFC-composed on the way back (merging ｶ plus ﾞ into が), so
//! voiced and semi-voiced kana round-trip.

use lazy_static::lazy_static;
use unicode_normalization::UnicodeNormalization;

use crate::remap::RemapTable;

/// Half-width forms U+FF61 through U+FF9F, in codepoint order.
const HALF: &str = "｡｢｣､･ｦｧｨｩｪｫｬｭｮｯｰｱｲｳｴｵｶｷｸｹｺｻｼｽｾｿﾀﾁﾂﾃﾄﾅﾆﾇﾈﾉﾊﾋﾌﾍﾎﾏﾐﾑﾒﾓﾔﾕﾖﾗﾘﾙﾚﾛﾜﾝﾞﾟ";

/// Full-width counterparts of [`HALF`], position for position. The final
/// two are the combining voiced and semi-voiced marks U+3099 and U+309A.
const FULL: &str = "。「」、・ヲァィゥェォャュョッーアイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワン\u{3099}\u{309A}";

/// Hiragana U+3041 through U+3096 plus the iteration marks U+309D/U+309E.
const HIRAGANA: &str = "ぁあぃいぅうぇえぉおかがきぎくぐけげこごさざしじすずせぜそぞただちぢっつづてでとどなにぬねのはばぱひびぴふぶぷへべぺほぼぽまみむめもゃやゅゆょよらりるれろゎわゐゑをんゔゕゖゝゞ";

/// Katakana counterparts of [`HIRAGANA`], position for position.
const KATAKANA: &str = "ァアィイゥウェエォオカガキギクグケゲコゴサザシジスズセゼソゾタダチヂッツヅテデトドナニヌネノハバパヒビピフブプヘベペホボポマミムメモャヤュユョヨラリルレロヮワヰヱヲンヴヵヶヽヾ";

/// The symbol cells whose Unicode mapping differs between the JIS and the
/// Microsoft tradition, as (windows, jis) pairs. U+2014 has no cell in
/// either tradition; every table folds it to U+2015.
const SYMBOL_VARIANTS: [(u32, u32); 7] = [
    (0xFF5E, 0x301C), // fullwidth tilde / wave dash
    (0x2225, 0x2016), // parallel to / double vertical line
    (0xFF0D, 0x2212), // fullwidth hyphen-minus / minus sign
    (0xFFE0, 0x00A2), // fullwidth cent sign / cent sign
    (0xFFE1, 0x00A3), // fullwidth pound sign / pound sign
    (0xFFE2, 0x00AC), // fullwidth not sign / not sign
    (0x2014, 0x2015), // em dash / horizontal bar
];

/// Vendor and revision glyphs folded to their closest JIS X 0208:1990
/// equivalent, as (extended, 1990) pairs.
const KANJI_TO_1990: [(u32, u32); 24] = [
    (0x5FB7, 0x5FB3),
    (0x6801, 0x67F3),
    (0x6FF5, 0x6FF1),
    (0x7028, 0x702C),
    (0x9830, 0x982C),
    (0x9AD9, 0x9AD8),
    (0xFA10, 0x585A),
    (0xFA11, 0x5D0E),
    (0xFA12, 0x6674),
    (0xFA16, 0x732A),
    (0xFA17, 0x76CA),
    (0xFA19, 0x795E),
    (0xFA1A, 0x7965),
    (0xFA1B, 0x798F),
    (0xFA1C, 0x9756),
    (0xFA1D, 0x7CBE),
    (0xFA1E, 0x7FBD),
    (0xFA22, 0x8AF8),
    (0xFA25, 0x9038),
    (0xFA26, 0x90FD),
    (0xFA2A, 0x98EF),
    (0xFA2B, 0x98FC),
    (0xFA2C, 0x9928),
    (0xFA2D, 0x9DB4),
];

/// The subset of [`KANJI_TO_1990`] whose source glyph gained no cell in
/// JIS X 0213:2004 either.
const KANJI_TO_2004: [(u32, u32); 11] = [
    (0x9AD9, 0x9AD8),
    (0xFA12, 0x6674),
    (0xFA17, 0x76CA),
    (0xFA1C, 0x9756),
    (0xFA1D, 0x7CBE),
    (0xFA1E, 0x7FBD),
    (0xFA25, 0x9038),
    (0xFA2A, 0x98EF),
    (0xFA2B, 0x98FC),
    (0xFA2C, 0x9928),
    (0xFA2D, 0x9DB4),
];

fn table_from(pairs: &[(u32, u32)]) -> RemapTable {
    let (sources, targets): (Vec<u32>, Vec<u32>) = pairs.iter().copied().unzip();
    RemapTable::new(&sources, &targets).expect("parallel literals have equal length")
}

lazy_static! {
    static ref HALF_TO_FULL: RemapTable =
        RemapTable::from_pairs(HALF, FULL).expect("parallel literals have equal length");
    static ref FULL_TO_HALF: RemapTable =
        RemapTable::from_pairs(FULL, HALF).expect("parallel literals have equal length");
    static ref HIRA_TO_KATA: RemapTable =
        RemapTable::from_pairs(HIRAGANA, KATAKANA).expect("parallel literals have equal length");
    static ref KATA_TO_HIRA: RemapTable =
        RemapTable::from_pairs(KATAKANA, HIRAGANA).expect("parallel literals have equal length");

    /// Downgrade toward the JIS X 0208:1990 repertoire: Windows symbol
    /// forms to JIS forms, vendor/revision kanji to their 1990 glyphs.
    pub static ref TO_JIS1990: RemapTable = {
        let mut pairs: Vec<(u32, u32)> = SYMBOL_VARIANTS.to_vec();
        pairs.extend_from_slice(&KANJI_TO_1990);
        table_from(&pairs)
    };

    /// Downgrade toward JIS X 0213:2004.
    pub static ref TO_JIS2004: RemapTable = {
        let mut pairs: Vec<(u32, u32)> = SYMBOL_VARIANTS.to_vec();
        pairs.extend_from_slice(&KANJI_TO_2004);
        table_from(&pairs)
    };

    /// Normalize JIS symbol forms to their Windows-31J counterparts. The
    /// em dash pair is not inverted: U+2014 still folds forward to U+2015,
    /// since neither tradition has a cell for the em dash itself.
    pub static ref TO_WINDOWS31J: RemapTable = {
        let mut pairs: Vec<(u32, u32)> = SYMBOL_VARIANTS
            .iter()
            .take_while(|&&(_, jis)| jis != 0x2015)
            .map(|&(windows, jis)| (jis, windows))
            .collect();
        pairs.push((0x2014, 0x2015));
        table_from(&pairs)
    };

    /// The 2004-flavoured Windows wrapper keeps JIS symbol forms (its
    /// fallback codec encodes them); only the em dash needs folding.
    pub static ref TO_WINDOWS31J2004: RemapTable =
        RemapTable::new(&[0x2014], &[0x2015]).expect("one pair");
}

/// Converts full-width katakana (and hiragana) to half-width forms.
///
/// The input is NFD-decomposed first, so composed voiced kana split into a
/// base and a mark that each have a half-width form.
///
/// ```
/// assert_eq!(jiscodec::kana::to_halfwidth("ガンダム"), "ｶﾞﾝﾀﾞﾑ");
/// assert_eq!(jiscodec::kana::to_halfwidth("がんだむ"), "ｶﾞﾝﾀﾞﾑ");
/// ```
pub fn to_halfwidth(text: &str) -> String {
    let decomposed: String = text.nfd().collect();
    FULL_TO_HALF.convert_str(&HIRA_TO_KATA.convert_str(&decomposed))
}

/// Converts half-width katakana to full-width katakana, composing voiced
/// and semi-voiced pairs.
///
/// ```
/// assert_eq!(jiscodec::kana::to_fullwidth_katakana("ｶﾞﾝﾀﾞﾑ"), "ガンダム");
/// ```
pub fn to_fullwidth_katakana(text: &str) -> String {
    HALF_TO_FULL.convert_str(text).nfc().collect()
}

/// Converts half-width katakana to full-width hiragana.
///
/// ```
/// assert_eq!(jiscodec::kana::to_fullwidth_hiragana("ｶﾞﾝﾀﾞﾑ"), "がんだむ");
/// ```
pub fn to_fullwidth_hiragana(text: &str) -> String {
    KATA_TO_HIRA.convert_str(&to_fullwidth_katakana(text))
}

/// Transliterates hiragana to katakana, leaving everything else alone.
pub fn hiragana_to_katakana(text: &str) -> String {
    HIRA_TO_KATA.convert_str(text)
}

/// Transliterates katakana to hiragana, leaving everything else alone.
pub fn katakana_to_hiragana(text: &str) -> String {
    KATA_TO_HIRA.convert_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_tables_are_parallel() {
        assert_eq!(HALF.chars().count(), FULL.chars().count());
        assert_eq!(HIRAGANA.chars().count(), KATAKANA.chars().count());
    }

    #[test]
    fn plain_width_conversion() {
        assert_eq!(to_halfwidth("アイウエオ"), "ｱｲｳｴｵ");
        assert_eq!(to_fullwidth_katakana("ｱｲｳｴｵ"), "アイウエオ");
        assert_eq!(to_halfwidth("「ラーメン」"), "｢ﾗｰﾒﾝ｣");
    }

    #[test]
    fn voiced_marks_round_trip() {
        assert_eq!(to_halfwidth("パピプペポ"), "ﾊﾟﾋﾟﾌﾟﾍﾟﾎﾟ");
        assert_eq!(to_fullwidth_katakana("ﾊﾟﾋﾟﾌﾟﾍﾟﾎﾟ"), "パピプペポ");
        assert_eq!(to_fullwidth_katakana(&to_halfwidth("ヴ")), "ヴ");
    }

    #[test]
    fn hiragana_goes_through_katakana() {
        assert_eq!(to_halfwidth("こんにちは"), "ｺﾝﾆﾁﾊ");
        assert_eq!(to_fullwidth_hiragana("ｺﾝﾆﾁﾊ"), "こんにちは");
        assert_eq!(to_fullwidth_hiragana("ｳﾞ"), "ゔ");
    }

    #[test]
    fn script_transliteration() {
        assert_eq!(hiragana_to_katakana("がんだむ"), "ガンダム");
        assert_eq!(katakana_to_hiragana("ガンダム"), "がんだむ");
        assert_eq!(hiragana_to_katakana("abcガ"), "abcガ");
    }

    #[test]
    fn downgrade_tables() {
        assert_eq!(TO_JIS1990.convert(0xFF5E), 0x301C);
        assert_eq!(TO_JIS1990.convert(0x9AD9), 0x9AD8);
        assert_eq!(TO_JIS1990.convert(0x2014), 0x2015);
        assert_eq!(TO_JIS2004.convert(0xFA11), 0xFA11); // has a 2004 cell
        assert_eq!(TO_JIS2004.convert(0x9AD9), 0x9AD8);
        assert_eq!(TO_WINDOWS31J.convert(0x301C), 0xFF5E);
        assert_eq!(TO_WINDOWS31J.convert(0x2014), 0x2015);
        assert_eq!(TO_WINDOWS31J2004.convert(0x301C), 0x301C);
        assert_eq!(TO_WINDOWS31J2004.convert(0x2014), 0x2015);
    }
}
