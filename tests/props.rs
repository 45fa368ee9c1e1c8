//! Property tests for the remap engine, kana conversion, and the codecs.

use jiscodec::{kana, registry, RemapTable};
use proptest::prelude::*;

proptest! {
    /// A table never constructed with a key for a scalar maps it to itself.
    #[test]
    fn remap_identity_law(c in any::<char>()) {
        let empty = RemapTable::new(&[], &[]).unwrap();
        prop_assert_eq!(empty.convert(c as u32), c as u32);
        prop_assert_eq!(empty.convert_str(&c.to_string()), c.to_string());
    }

    /// Scalars outside a table's key set pass through convert_str intact.
    #[test]
    fn remap_leaves_unrelated_text_alone(s in "\\PC*") {
        let table = RemapTable::new(&[0x301C], &[0xFF5E]).unwrap();
        let out = table.convert_str(&s);
        let expected: String = s
            .chars()
            .map(|c| if c == '〜' { '～' } else { c })
            .collect();
        prop_assert_eq!(out, expected);
    }

    /// Full-width katakana survives a round trip through half-width.
    #[test]
    fn width_round_trip_law(s in "[ア-ヶー。「」、・]{0,24}") {
        let half = kana::to_halfwidth(&s);
        let back = kana::to_fullwidth_katakana(&half);
        let normalized: String = {
            use unicode_normalization::UnicodeNormalization;
            s.nfc().collect()
        };
        prop_assert_eq!(back, normalized);
    }

    /// ASCII text round-trips byte-for-byte through every codec.
    #[test]
    fn ascii_round_trip(s in "[ -~]{0,32}") {
        for codec in registry::codecs() {
            let bytes = codec.encode(&s).unwrap();
            prop_assert_eq!(codec.decode(&bytes).unwrap(), s.clone(), "{}", codec.name());
        }
    }

    /// Hiragana to katakana and back is the identity on the kana alphabet.
    #[test]
    fn script_transliteration_round_trip(s in "[ぁ-ゖ]{0,24}") {
        let kata = kana::hiragana_to_katakana(&s);
        prop_assert_eq!(kana::katakana_to_hiragana(&kata), s);
    }
}
