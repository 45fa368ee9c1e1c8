//! Integration tests for the installable glyph codecs.

use jiscodec::{registry, CodecError};
use paste::paste;

/// Tests that apply to every codec in the registry.
macro_rules! test_codec_basics {
    ($name:ident, $canonical:literal, [$($alias:literal),+]) => {
        paste! {
            mod [<$name _basics>] {
                use super::*;

                #[test]
                fn resolves_by_name_and_aliases() {
                    assert_eq!(registry::find($canonical).unwrap().name(), $canonical);
                    $(
                        assert_eq!(registry::find($alias).unwrap().name(), $canonical);
                        assert_eq!(
                            registry::find(&$alias.to_uppercase()).unwrap().name(),
                            $canonical
                        );
                    )+
                }

                #[test]
                fn empty_input() {
                    let codec = registry::find($canonical).unwrap();
                    assert_eq!(codec.encode("").unwrap(), Vec::<u8>::new());
                    assert_eq!(codec.decode(&[]).unwrap(), "");
                }

                #[test]
                fn ascii_round_trip() {
                    let codec = registry::find($canonical).unwrap();
                    let bytes = codec.encode("Hello, 123!").unwrap();
                    assert_eq!(codec.decode(&bytes).unwrap(), "Hello, 123!");
                }

                #[test]
                fn kana_round_trip() {
                    let codec = registry::find($canonical).unwrap();
                    for text in ["あいうえお", "アイウエオ", "ｱｲｳｴｵ", "日本語"] {
                        let bytes = codec.encode(text).unwrap();
                        assert_eq!(codec.decode(&bytes).unwrap(), text, "{text}");
                    }
                }

                #[test]
                fn truncated_lead_is_malformed() {
                    let codec = registry::find($canonical).unwrap();
                    let err = codec.decode(&[0x82]).unwrap_err();
                    assert!(matches!(err, CodecError::MalformedInput { position: 0, length: 1 }));
                }

                #[test]
                fn lossy_encode_replaces_and_continues() {
                    let codec = registry::find($canonical).unwrap();
                    let out = codec.encode_lossy("a\u{0641}z", b"?");
                    assert_eq!(out, b"a?z".to_vec());
                }

                #[test]
                fn lossy_decode_replaces_and_continues() {
                    let codec = registry::find($canonical).unwrap();
                    let out = codec.decode_lossy(&[0x41, 0xFD, 0x42], "\u{FFFD}");
                    assert_eq!(out, "A\u{FFFD}B");
                }
            }
        }
    };
}

test_codec_basics!(sjis_g, "x-sjis-g", ["sjis-g", "shift_jis-g"]);
test_codec_basics!(sjis2004_g, "x-sjis2004-g", ["sjis2004-g", "shift_jis-2004-g"]);
test_codec_basics!(
    windows31j_g,
    "x-windows-31j-g",
    ["windows-31j-g", "cp932-g", "ms932-g"]
);
test_codec_basics!(
    windows31j2004_g,
    "x-windows-31j2004-g",
    ["windows-31j-2004-g", "ms932-2004-g"]
);

mod symbol_folding {
    use super::*;

    /// Both the JIS and the Windows form of each variant pair must encode,
    /// landing on the same cell.
    #[test]
    fn variant_pairs_collapse() {
        let pairs: [(char, char); 6] = [
            ('〜', '～'),
            ('‖', '∥'),
            ('−', '－'),
            ('¢', '￠'),
            ('£', '￡'),
            ('¬', '￢'),
        ];
        for codec in registry::codecs() {
            for (jis, windows) in pairs {
                // the 2004-flavoured Windows codec deliberately keeps the
                // minus pair apart (each form has its own cell there)
                if codec.name() == "x-windows-31j2004-g" && jis == '−' {
                    continue;
                }
                let a = codec.encode(&jis.to_string()).unwrap();
                let b = codec.encode(&windows.to_string()).unwrap();
                assert_eq!(a, b, "{} {jis}/{windows}", codec.name());
            }
        }
    }

    #[test]
    fn fullwidth_minus_prefers_its_2004_cell() {
        // JIS X 0213 gave U+FF0D a cell of its own, so the Windows codecs
        // route it through the fallback instead of cp932's 0x817C
        let plain = registry::find("x-windows-31j-g").unwrap();
        assert_eq!(plain.encode("－").unwrap(), vec![0x81, 0xAF]);
        assert_eq!(plain.encode("−").unwrap(), vec![0x81, 0xAF]);
        let jis = registry::find("x-windows-31j2004-g").unwrap();
        assert_eq!(jis.encode("−").unwrap(), vec![0x81, 0x7C]);
        assert_eq!(jis.encode("－").unwrap(), vec![0x81, 0xAF]);
    }

    #[test]
    fn em_dash_folds_to_horizontal_bar() {
        for codec in registry::codecs() {
            assert_eq!(
                codec.encode("—").unwrap(),
                codec.encode("―").unwrap(),
                "{}",
                codec.name()
            );
        }
    }

    #[test]
    fn jis_codecs_decode_to_jis_forms() {
        let codec = registry::find("x-sjis-g").unwrap();
        assert_eq!(codec.decode(&[0x81, 0x60]).unwrap(), "〜");
        assert_eq!(codec.decode(&[0x81, 0x61]).unwrap(), "‖");
        assert_eq!(codec.decode(&[0x81, 0x7C]).unwrap(), "−");
    }

    #[test]
    fn windows_codec_decodes_to_windows_forms() {
        let codec = registry::find("x-windows-31j-g").unwrap();
        assert_eq!(codec.decode(&[0x81, 0x60]).unwrap(), "～");
        assert_eq!(codec.decode(&[0x81, 0x61]).unwrap(), "∥");
        assert_eq!(codec.decode(&[0x81, 0x7C]).unwrap(), "－");
    }
}

mod vendor_glyphs {
    use super::*;

    #[test]
    fn kanji_downgrades_toward_1990() {
        let codec = registry::find("x-sjis-g").unwrap();
        for (extended, base) in [("髙", "高"), ("﨑", "崎"), ("德", "徳"), ("濵", "濱")] {
            assert_eq!(
                codec.encode(extended).unwrap(),
                codec.encode(base).unwrap(),
                "{extended}"
            );
        }
    }

    #[test]
    fn windows_keeps_vendor_cells() {
        let codec = registry::find("x-windows-31j-g").unwrap();
        assert_eq!(codec.encode("髙").unwrap(), vec![0xEE, 0xE0]);
        assert_eq!(codec.decode(&[0xEE, 0xE0]).unwrap(), "髙");
        assert_eq!(codec.encode("①").unwrap(), vec![0x87, 0x40]);
    }

    #[test]
    fn jis_2004_cells_beat_downgrades_on_the_2004_codec() {
        // 﨑 gained a plane-1 cell in 2004, so it must not be folded there
        let codec = registry::find("x-sjis2004-g").unwrap();
        let bytes = codec.encode("﨑").unwrap();
        assert_ne!(bytes, codec.encode("崎").unwrap());
        assert_eq!(codec.decode(&bytes).unwrap(), "﨑");
    }
}

mod windows_fallback {
    use super::*;

    #[test]
    fn plane_two_kanji_is_rejected() {
        let codec = registry::find("x-windows-31j-g").unwrap();
        let err = codec.encode("\u{20089}").unwrap_err();
        assert!(matches!(err, CodecError::UnmappableInput { position: 0, .. }));
    }

    #[test]
    fn plane_two_leads_decode_as_user_defined_area() {
        // lead 0xF0 belongs to the user-defined area on Windows, even
        // though the 2004 codec also defines cells there
        let codec = registry::find("x-windows-31j-g").unwrap();
        assert_eq!(codec.decode(&[0xF0, 0x40]).unwrap(), "\u{E000}");
        assert_eq!(codec.encode("\u{E757}").unwrap(), vec![0xF9, 0xFC]);
    }

    #[test]
    fn ordinary_cells_decode_via_2004() {
        let codec = registry::find("x-windows-31j-g").unwrap();
        // the JIS backslash cell, which cp932 maps elsewhere
        assert_eq!(codec.decode(&[0x81, 0x5F]).unwrap(), "\\");
    }

    #[test]
    fn the_2004_flavour_differs_only_in_symbols() {
        let plain = registry::find("x-windows-31j-g").unwrap();
        let jis = registry::find("x-windows-31j2004-g").unwrap();
        assert_eq!(
            plain.encode("日本語abc").unwrap(),
            jis.encode("日本語abc").unwrap()
        );
        assert_eq!(plain.encode("〜").unwrap(), jis.encode("〜").unwrap());
    }
}

mod combining_marks {
    use super::*;

    #[test]
    fn voiced_mark_composes_before_encoding() {
        for name in ["x-sjis-g", "x-sjis2004-g", "x-windows-31j-g"] {
            let codec = registry::find(name).unwrap();
            assert_eq!(
                codec.encode("か\u{3099}").unwrap(),
                codec.encode("が").unwrap(),
                "{name}"
            );
        }
    }

    #[test]
    fn semi_voiced_sequence_cell() {
        let codec = registry::find("x-sjis2004-g").unwrap();
        assert_eq!(codec.encode("か\u{309A}").unwrap(), vec![0x82, 0xF5]);
        assert_eq!(codec.decode(&[0x82, 0xF5]).unwrap(), "か\u{309A}");
    }

    #[test]
    fn ainu_tone_marks_on_2004() {
        // the tone-bar pair owns a dedicated cell
        let codec = registry::find("x-sjis2004-g").unwrap();
        let bytes = codec.encode("\u{02E9}\u{02E5}").unwrap();
        assert_eq!(bytes, vec![0x86, 0x85]);
        assert_eq!(codec.decode(&bytes).unwrap(), "\u{02E9}\u{02E5}");
    }
}

#[test]
fn yen_sign_encodes_as_5c_everywhere() {
    // the JIS codecs alias U+00A5 onto 0x5C directly; the Windows codecs
    // reach the same byte through their 2004 fallback
    for codec in registry::codecs() {
        assert_eq!(codec.encode("¥").unwrap(), vec![0x5C], "{}", codec.name());
    }
}
