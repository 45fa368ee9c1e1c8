//! Codec directory.
//!
//! The four glyph codecs are held in a fixed static table, so enumeration
//! order is deterministic and part of the public contract.
//!
//! # Examples
//!
//! ```
//! use jiscodec::registry;
//!
//! let codec = registry::find("MS932-G").unwrap();
//! assert_eq!(codec.name(), "x-windows-31j-g");
//! assert!(registry::find("utf-8").is_none());
//! ```

use crate::glyph::{GlyphCodec, SJIS2004_G, SJIS_G, WINDOWS31J2004_G, WINDOWS31J_G};

static CODECS: [&GlyphCodec; 4] = [&SJIS_G, &SJIS2004_G, &WINDOWS31J_G, &WINDOWS31J2004_G];

/// All installed codecs, in registration order.
pub fn codecs() -> impl Iterator<Item = &'static GlyphCodec> {
    CODECS.iter().copied()
}

/// Finds a codec by canonical name or alias, case-insensitively.
pub fn find(name: &str) -> Option<&'static GlyphCodec> {
    CODECS.iter().copied().find(|codec| codec.matches(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumeration_order_is_fixed() {
        let names: Vec<&str> = codecs().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "x-sjis-g",
                "x-sjis2004-g",
                "x-windows-31j-g",
                "x-windows-31j2004-g"
            ]
        );
    }

    #[test]
    fn every_alias_resolves() {
        for codec in codecs() {
            assert_eq!(find(codec.name()).map(|c| c.name()), Some(codec.name()));
            for alias in codec.aliases() {
                assert_eq!(find(alias).map(|c| c.name()), Some(codec.name()), "{alias}");
            }
        }
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(find("utf-8").is_none());
        assert!(find("").is_none());
        assert!(find("sjis").is_none());
    }
}
