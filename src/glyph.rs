//! The installable glyph codecs.
//!
//! A [`GlyphCodec`] wraps a base byte codec with a pre-encode remap table
//! and, for the Windows pair, a two-stage fallback between code page 932
//! and Shift_JIS-2004. The encode loop works on whole logical characters: a
//! scalar plus an optional trailing combining mark is handed to the base
//! codec atomically, so "か" followed by U+3099 produces exactly the bytes
//! of "が" and a failure never leaves partial output behind.
//!
//! # Examples
//!
//! ```
//! use jiscodec::registry;
//!
//! let codec = registry::find("sjis-g").unwrap();
//! assert_eq!(codec.encode("あ").unwrap(), vec![0x82, 0xA0]);
//! assert_eq!(codec.decode(&[0x82, 0xA0]).unwrap(), "あ");
//! // the Windows form of the tilde is folded to its JIS cell
//! assert_eq!(codec.encode("～").unwrap(), vec![0x81, 0x60]);
//! ```

use crate::category::Category;
use crate::chardb;
use crate::codec::{push_scalar, scalar_at, ByteCodec, CoderResult};
use crate::error::CodecError;
use crate::kana;
use crate::remap::RemapTable;
use crate::sjis::{self, Sjis};
use crate::sjis2004::Sjis2004;
use crate::tables;
use crate::windows31j::Windows31j;

/// Combining marks that may trail a base character and still belong to the
/// same logical character: the kana voicing marks, the tone accents, and
/// the tone bars.
const RECOGNIZED_MARKS: [u32; 6] = [0x3099, 0x309A, 0x0300, 0x0301, 0x02E5, 0x02E9];

/// Symbols that are safe to send to code page 932 first even though they
/// are not kanji; their cp932 cells match the expected glyphs.
const SAFE_SYMBOLS: [u32; 11] = [
    0x00A2, 0x00A3, 0x00AC, 0x2015, 0x2016, 0x2212, 0x2225, 0x301C, 0xFFE0, 0xFFE1, 0xFFE2,
];

/// Double-byte cells whose Unicode mapping is Windows-specific; the decoder
/// must resolve them through code page 932.
const VARIANT_CELLS: [u16; 6] = [0x8160, 0x8161, 0x817C, 0x8191, 0x8192, 0x81CA];

/// A named, alias-carrying glyph codec.
pub struct GlyphCodec {
    name: &'static str,
    aliases: &'static [&'static str],
    remap: fn() -> &'static RemapTable,
    primary: fn() -> Box<dyn ByteCodec>,
    fallback: Option<fn() -> Box<dyn ByteCodec>>,
}

/// Shift_JIS (1990 repertoire) with Windows symbol forms and vendor kanji
/// folded to their JIS equivalents before encoding.
pub static SJIS_G: GlyphCodec = GlyphCodec {
    name: "x-sjis-g",
    aliases: &["sjis-g", "shift_jis-g"],
    remap: || &kana::TO_JIS1990,
    primary: || Box::new(Sjis),
    fallback: None,
};

/// Shift_JIS-2004 with the same folding, minus the glyphs JIS X 0213
/// defines cells for.
pub static SJIS2004_G: GlyphCodec = GlyphCodec {
    name: "x-sjis2004-g",
    aliases: &["sjis2004-g", "shift_jis-2004-g"],
    remap: || &kana::TO_JIS2004,
    primary: || Box::new(Sjis2004),
    fallback: None,
};

/// Windows-31J first, Shift_JIS-2004 second; JIS symbol forms are
/// normalized to their Windows cells.
pub static WINDOWS31J_G: GlyphCodec = GlyphCodec {
    name: "x-windows-31j-g",
    aliases: &["windows-31j-g", "cp932-g", "ms932-g"],
    remap: || &kana::TO_WINDOWS31J,
    primary: || Box::new(Windows31j),
    fallback: Some(|| Box::new(Sjis2004)),
};

/// Like [`WINDOWS31J_G`] but keeping JIS symbol forms, for peers that
/// expect the 2004 mappings on the wire.
pub static WINDOWS31J2004_G: GlyphCodec = GlyphCodec {
    name: "x-windows-31j2004-g",
    aliases: &["windows-31j-2004-g", "ms932-2004-g"],
    remap: || &kana::TO_WINDOWS31J2004,
    primary: || Box::new(Windows31j),
    fallback: Some(|| Box::new(Sjis2004)),
};

impl GlyphCodec {
    /// Canonical codec name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Accepted aliases, canonical name excluded.
    #[inline]
    pub fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    /// Whether `name` matches the canonical name or an alias,
    /// case-insensitively.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    /// Encodes `text`, failing on the first malformed or unmappable logical
    /// character. Error positions count UTF-16 code units.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        let units: Vec<u16> = text.encode_utf16().collect();
        let mut out = Vec::with_capacity(units.len() * 2);
        self.encode_from(&units, 0, &mut out)?;
        Ok(out)
    }

    /// Encodes `text`, substituting `replacement` for every failed logical
    /// character instead of stopping.
    pub fn encode_lossy(&self, text: &str, replacement: &[u8]) -> Vec<u8> {
        let units: Vec<u16> = text.encode_utf16().collect();
        let mut out = Vec::with_capacity(units.len() * 2);
        let mut start = 0;
        while let Err(error) = self.encode_from(&units, start, &mut out) {
            out.extend_from_slice(replacement);
            let position = error.position().unwrap_or(start);
            let length = error.length().unwrap_or(1).max(1);
            start = position + length;
        }
        out
    }

    /// Decodes `bytes`, failing on the first malformed sequence or
    /// unmappable cell. Error positions count bytes.
    pub fn decode(&self, bytes: &[u8]) -> Result<String, CodecError> {
        let mut units = Vec::with_capacity(bytes.len());
        self.decode_from(bytes, 0, &mut units)?;
        Ok(units_to_string(&units))
    }

    /// Decodes `bytes`, substituting `replacement` for every failed
    /// sequence instead of stopping.
    pub fn decode_lossy(&self, bytes: &[u8], replacement: &str) -> String {
        let mut units = Vec::with_capacity(bytes.len());
        let mut start = 0;
        while let Err(error) = self.decode_from(bytes, start, &mut units) {
            units.extend(replacement.encode_utf16());
            let position = error.position().unwrap_or(start);
            let length = error.length().unwrap_or(1).max(1);
            start = position + length;
        }
        units_to_string(&units)
    }

    fn encode_from(
        &self,
        units: &[u16],
        start: usize,
        out: &mut Vec<u8>,
    ) -> Result<(), CodecError> {
        let remap = (self.remap)();
        let mut primary = (self.primary)();
        let mut fallback = self.fallback.map(|make| make());
        let mut pos = start;
        while pos < units.len() {
            let Some((raw, len)) = scalar_at(&units[pos..]) else {
                return Err(CodecError::MalformedInput {
                    position: pos,
                    length: 1,
                });
            };
            let mut scalar = remap.convert(raw);

            // capture a trailing recognized combining mark and fold it into
            // the same logical character
            let mut consumed = len;
            let mut mark = match scalar_at(&units[pos + len..]) {
                Some((m, 1)) if RECOGNIZED_MARKS.contains(&m) => Some(m as u16),
                _ => None,
            };
            if let Some(m) = mark {
                consumed += 1;
                if let Some(composed) =
                    u16::try_from(scalar).ok().and_then(|b| tables::compose(b, m))
                {
                    scalar = composed as u32;
                    mark = None;
                }
            }

            let mut chunk: Vec<u16> = Vec::with_capacity(3);
            push_scalar(&mut chunk, scalar);
            if let Some(m) = mark {
                chunk.push(m);
            }

            let committed = match fallback.as_deref_mut() {
                Some(fallback) => {
                    encode_windows_chunk(scalar, &chunk, primary.as_mut(), fallback, out)
                }
                None => try_encode(primary.as_mut(), &chunk, out),
            };
            if !committed {
                return Err(CodecError::UnmappableInput {
                    position: pos,
                    length: consumed,
                });
            }
            pos += consumed;
        }
        Ok(())
    }

    fn decode_from(
        &self,
        bytes: &[u8],
        start: usize,
        units: &mut Vec<u16>,
    ) -> Result<(), CodecError> {
        let mut primary = (self.primary)();
        let mut fallback = self.fallback.map(|make| make());
        let mut pos = start;
        while pos < bytes.len() {
            let byte = bytes[pos];
            if sjis::is_lead(byte) {
                let Some(&trail) = bytes.get(pos + 1) else {
                    return Err(CodecError::MalformedInput {
                        position: pos,
                        length: 1,
                    });
                };
                if !sjis::is_trail(trail) {
                    return Err(CodecError::MalformedInput {
                        position: pos,
                        length: 1,
                    });
                }
                let pair = [byte, trail];
                let committed = match fallback.as_deref_mut() {
                    Some(fallback) => {
                        decode_windows_pair(&pair, primary.as_mut(), fallback, units)
                    }
                    None => try_decode(primary.as_mut(), &pair, units),
                };
                if !committed {
                    return Err(CodecError::UnmappableInput {
                        position: pos,
                        length: 2,
                    });
                }
                pos += 2;
            } else {
                if !try_decode(primary.as_mut(), &[byte], units) {
                    return Err(CodecError::MalformedInput {
                        position: pos,
                        length: 1,
                    });
                }
                pos += 1;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for GlyphCodec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GlyphCodec")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("two_stage", &self.fallback.is_some())
            .finish()
    }
}

/// Runs one atomic reset/encode/flush cycle; rolls back `out` on failure.
fn try_encode(codec: &mut dyn ByteCodec, chunk: &[u16], out: &mut Vec<u8>) -> bool {
    let rollback = out.len();
    codec.reset();
    if codec.encode(chunk, out).is_error() || codec.flush(out).is_error() {
        out.truncate(rollback);
        return false;
    }
    true
}

fn try_decode(codec: &mut dyn ByteCodec, bytes: &[u8], out: &mut Vec<u16>) -> bool {
    let rollback = out.len();
    codec.reset();
    if codec.decode(bytes, out) == CoderResult::Underflow {
        true
    } else {
        out.truncate(rollback);
        false
    }
}

/// Whether a scalar should be offered to code page 932 before the 2004
/// codec: kanji, classified vendor glyphs, the user-defined area, and the
/// symbols whose cp932 cells are glyph-faithful. U+FF0D and U+FF5E are
/// kept out so their JIS counterparts stay canonical on decode.
fn windows_eligible(scalar: u32) -> bool {
    if scalar == 0xFF0D || scalar == 0xFF5E {
        return false;
    }
    matches!(scalar,
        0x3400..=0x4DBF | 0x4E00..=0x9FFF | 0xF900..=0xFAFF | 0x20000..=0x3FFFF)
        || matches!(scalar, 0xE000..=0xE757)
        || SAFE_SYMBOLS.contains(&scalar)
        || matches!(
            chardb::classify(scalar),
            Category::NecSpecialChar | Category::IbmExt
        )
}

/// The Windows encode order: primary first for eligible scalars, then the
/// 2004 fallback as long as its output stays in the plane-1 lead range,
/// then the primary as a last resort if it has not been tried yet.
fn encode_windows_chunk(
    scalar: u32,
    chunk: &[u16],
    primary: &mut dyn ByteCodec,
    fallback: &mut dyn ByteCodec,
    out: &mut Vec<u8>,
) -> bool {
    let eligible = windows_eligible(scalar);
    if eligible && try_encode(primary, chunk, out) {
        return true;
    }
    let rollback = out.len();
    if try_encode(fallback, chunk, out) {
        let emitted = &out[rollback..];
        if emitted.len() != 2 || emitted[0] <= 0xEF {
            return true;
        }
        out.truncate(rollback);
    }
    if !eligible && try_encode(primary, chunk, out) {
        return true;
    }
    false
}

/// The Windows decode order, mirroring the encoder: code page 932 resolves
/// the rows and cells only it defines, the 2004 codec resolves everything
/// else in the plane-1 lead range.
fn decode_windows_pair(
    pair: &[u8; 2],
    primary: &mut dyn ByteCodec,
    fallback: &mut dyn ByteCodec,
    out: &mut Vec<u16>,
) -> bool {
    let lead = pair[0];
    let code = ((pair[0] as u16) << 8) | pair[1] as u16;
    let prefer_primary =
        lead == 0x87 || matches!(lead, 0xED | 0xEE) || lead >= 0xF0 || VARIANT_CELLS.contains(&code);
    if prefer_primary && try_decode(primary, pair, out) {
        return true;
    }
    if lead <= 0xEF && try_decode(fallback, pair, out) {
        return true;
    }
    if !prefer_primary && try_decode(primary, pair, out) {
        return true;
    }
    false
}

fn units_to_string(units: &[u16]) -> String {
    // the base codecs only ever emit well-formed UTF-16
    char::decode_utf16(units.iter().copied())
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_matching_is_case_insensitive() {
        assert!(SJIS_G.matches("x-sjis-g"));
        assert!(SJIS_G.matches("SJIS-G"));
        assert!(SJIS_G.matches("Shift_JIS-g"));
        assert!(!SJIS_G.matches("sjis"));
    }

    #[test]
    fn sjis_g_folds_windows_forms() {
        assert_eq!(SJIS_G.encode("～").unwrap(), vec![0x81, 0x60]);
        assert_eq!(SJIS_G.encode("髙").unwrap(), SJIS_G.encode("高").unwrap());
        // decode leaves the JIS forms canonical
        assert_eq!(SJIS_G.decode(&[0x81, 0x60]).unwrap(), "〜");
    }

    #[test]
    fn combining_mark_is_atomic() {
        let composed = SJIS_G.encode("が").unwrap();
        let decomposed = SJIS_G.encode("か\u{3099}").unwrap();
        assert_eq!(composed, decomposed);
        assert_eq!(composed, vec![0x82, 0xAA]);
    }

    #[test]
    fn sequence_cells_survive_the_wrapper() {
        // か + semi-voiced mark has no precomposed scalar; the 2004 codec
        // owns a dedicated cell for the pair
        assert_eq!(SJIS2004_G.encode("か\u{309A}").unwrap(), vec![0x82, 0xF5]);
        assert_eq!(SJIS2004_G.decode(&[0x82, 0xF5]).unwrap(), "か\u{309A}");
    }

    #[test]
    fn windows_primary_last_retry() {
        // U+FF5E is not eligible and the 2004 codec rejects it, but the
        // primary still has a cell
        assert_eq!(WINDOWS31J_G.encode("～").unwrap(), vec![0x81, 0x60]);
        // and the JIS form arrives there through the remap
        assert_eq!(WINDOWS31J_G.encode("〜").unwrap(), vec![0x81, 0x60]);
    }

    #[test]
    fn windows_2004_keeps_jis_forms() {
        assert_eq!(WINDOWS31J2004_G.encode("〜").unwrap(), vec![0x81, 0x60]);
        assert_eq!(WINDOWS31J2004_G.decode(&[0x81, 0x60]).unwrap(), "～");
    }

    #[test]
    fn windows_ordinary_text_uses_2004_cells() {
        assert_eq!(WINDOWS31J_G.encode("あ").unwrap(), vec![0x82, 0xA0]);
        assert_eq!(WINDOWS31J_G.decode(&[0x82, 0xA0]).unwrap(), "あ");
        // 0x815F is the JIS cell for the backslash, not cp932's U+FF3C
        assert_eq!(WINDOWS31J_G.decode(&[0x81, 0x5F]).unwrap(), "\\");
    }

    #[test]
    fn windows_vendor_rows() {
        assert_eq!(WINDOWS31J_G.encode("①").unwrap(), vec![0x87, 0x40]);
        assert_eq!(WINDOWS31J_G.encode("髙").unwrap(), vec![0xEE, 0xE0]);
        assert_eq!(WINDOWS31J_G.decode(&[0xEE, 0xE0]).unwrap(), "髙");
        assert_eq!(WINDOWS31J_G.encode("\u{E000}").unwrap(), vec![0xF0, 0x40]);
        assert_eq!(WINDOWS31J_G.decode(&[0xF0, 0x40]).unwrap(), "\u{E000}");
    }

    #[test]
    fn plane_two_kanji_is_unmappable_on_windows() {
        let err = WINDOWS31J_G.encode("\u{20089}").unwrap_err();
        assert_eq!(
            err,
            CodecError::UnmappableInput {
                position: 0,
                length: 2
            }
        );
        // the 2004 wrapper accepts it
        assert_eq!(SJIS2004_G.encode("\u{20089}").unwrap(), vec![0xF0, 0x40]);
    }

    #[test]
    fn positional_errors() {
        let err = SJIS_G.encode("ab\u{0641}cd").unwrap_err();
        assert_eq!(
            err,
            CodecError::UnmappableInput {
                position: 2,
                length: 1
            }
        );
        let err = SJIS_G.decode(&[0x41, 0x82]).unwrap_err();
        assert_eq!(
            err,
            CodecError::MalformedInput {
                position: 1,
                length: 1
            }
        );
    }

    #[test]
    fn lossy_variants_continue() {
        assert_eq!(SJIS_G.encode_lossy("a\u{0641}b", b"?"), b"a?b".to_vec());
        assert_eq!(SJIS_G.decode_lossy(&[0x41, 0x80, 0x42], "?"), "A?B");
    }
}
