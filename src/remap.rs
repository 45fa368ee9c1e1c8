//! Generic codepoint remapping.
//!
//! A [`RemapTable`] rewrites individual scalars before or after a byte codec
//! runs, e.g. folding the Windows form of a symbol to its JIS form. Lookups
//! are total: a scalar with no entry maps to itself.

use std::collections::HashMap;

use crate::error::CodecError;

/// An immutable scalar-to-scalar substitution table.
#[derive(Debug, Clone)]
pub struct RemapTable {
    map: HashMap<u32, u32>,
    bmp_only: bool,
}

impl RemapTable {
    /// Builds a table from parallel source and target scalar slices.
    ///
    /// The slices must be the same length. If a source scalar appears more
    /// than once, the first occurrence wins and a warning is logged; the
    /// later entry is dropped rather than failing construction, since canned
    /// tables are easier to audit when a stray duplicate is visible in the
    /// log instead of aborting startup.
    pub fn new(sources: &[u32], targets: &[u32]) -> Result<RemapTable, CodecError> {
        if sources.len() != targets.len() {
            return Err(CodecError::Construction {
                reason: format!(
                    "mismatched lengths: {} sources, {} targets",
                    sources.len(),
                    targets.len()
                ),
            });
        }
        let mut map = HashMap::with_capacity(sources.len());
        for (&src, &dst) in sources.iter().zip(targets) {
            if let Some(&existing) = map.get(&src) {
                log::warn!(
                    "duplicate remap source U+{:04X}: keeping U+{:04X}, ignoring U+{:04X}",
                    src,
                    existing,
                    dst
                );
                continue;
            }
            map.insert(src, dst);
        }
        let bmp_only = map.iter().all(|(&k, &v)| k < 0x10000 && v < 0x10000);
        Ok(RemapTable { map, bmp_only })
    }

    /// Builds a table from two strings read as parallel scalar sequences.
    pub fn from_pairs(sources: &str, targets: &str) -> Result<RemapTable, CodecError> {
        let src: Vec<u32> = sources.chars().map(|c| c as u32).collect();
        let dst: Vec<u32> = targets.chars().map(|c| c as u32).collect();
        RemapTable::new(&src, &dst)
    }

    /// Maps one scalar, falling back to identity.
    #[inline]
    pub fn convert(&self, codepoint: u32) -> u32 {
        self.map.get(&codepoint).copied().unwrap_or(codepoint)
    }

    /// Whether every key and value fits in one UTF-16 code unit.
    #[inline]
    pub fn bmp_only(&self) -> bool {
        self.bmp_only
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Rewrites a whole string through the table.
    ///
    /// When the table is BMP-only the transform runs over UTF-16 code
    /// units, leaving surrogate halves untouched; otherwise it runs per
    /// scalar with `char` conversion guarding each result.
    pub fn convert_str(&self, text: &str) -> String {
        if self.is_empty() {
            return text.to_owned();
        }
        if self.bmp_only {
            let units: Vec<u16> = text
                .encode_utf16()
                .map(|u| {
                    if (0xD800..0xE000).contains(&u) {
                        u
                    } else {
                        self.convert(u as u32) as u16
                    }
                })
                .collect();
            // only non-surrogate units were rewritten, so pairing is intact
            String::from_utf16(&units).unwrap_or_else(|_| text.to_owned())
        } else {
            text.chars()
                .map(|c| char::from_u32(self.convert(c as u32)).unwrap_or(c))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_is_an_error() {
        let err = RemapTable::new(&[0x41], &[]).unwrap_err();
        assert!(matches!(err, CodecError::Construction { .. }));
    }

    #[test]
    fn first_duplicate_wins() {
        let table = RemapTable::new(&[0x41, 0x41], &[0x61, 0x62]).unwrap();
        assert_eq!(table.convert(0x41), 0x61);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn identity_fallback() {
        let table = RemapTable::from_pairs("〜", "～").unwrap();
        assert_eq!(table.convert(0x301C), 0xFF5E);
        assert_eq!(table.convert(0x3042), 0x3042);
    }

    #[test]
    fn bmp_fast_path_preserves_supplementary() {
        let table = RemapTable::from_pairs("〜", "～").unwrap();
        assert!(table.bmp_only());
        assert_eq!(table.convert_str("a〜𠂉b"), "a～𠂉b");
    }

    #[test]
    fn supplementary_keys_use_scalar_path() {
        let table = RemapTable::new(&[0x20089], &[0x3042]).unwrap();
        assert!(!table.bmp_only());
        assert_eq!(table.convert_str("x\u{20089}y"), "xあy");
    }
}
