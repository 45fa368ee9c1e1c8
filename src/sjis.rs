//! Shift_JIS over the JIS X 0208:1990 repertoire.

use crate::codec::{scalar_at, ByteCodec, CoderResult};
use crate::tables::{self, jis0208};

/// Stateless Shift_JIS converter (1990 repertoire).
///
/// Single-byte behaviour: ASCII passes through, U+00A5 encodes to 0x5C and
/// U+203E to 0x7E (decode keeps 0x5C and 0x7E as their ASCII values), and
/// half-width katakana occupy 0xA1 through 0xDF. Everything else goes
/// through the generated JIS X 0208 cell tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjis;

pub(crate) const fn is_lead(byte: u8) -> bool {
    matches!(byte, 0x81..=0x9F | 0xE0..=0xFC)
}

pub(crate) const fn is_trail(byte: u8) -> bool {
    matches!(byte, 0x40..=0x7E | 0x80..=0xFC)
}

pub(crate) fn encode_single(scalar: u32) -> Option<u8> {
    match scalar {
        0xA5 => Some(0x5C),
        0x203E => Some(0x7E),
        0xFF61..=0xFF9F => Some((scalar - 0xFF61 + 0xA1) as u8),
        0x00..=0x7F => Some(scalar as u8),
        _ => None,
    }
}

impl ByteCodec for Sjis {
    fn reset(&mut self) {}

    fn encode(&mut self, mut units: &[u16], out: &mut Vec<u8>) -> CoderResult {
        while !units.is_empty() {
            let Some((scalar, len)) = scalar_at(units) else {
                return CoderResult::Malformed { length: 1 };
            };
            if let Some(byte) = encode_single(scalar) {
                out.push(byte);
            } else if let Some(code) =
                u16::try_from(scalar).ok().and_then(|cp| tables::lookup(jis0208::ENCODE, cp))
            {
                out.push((code >> 8) as u8);
                out.push(code as u8);
            } else {
                return CoderResult::Unmappable { length: len };
            }
            units = &units[len..];
        }
        CoderResult::Underflow
    }

    fn decode(&mut self, mut bytes: &[u8], out: &mut Vec<u16>) -> CoderResult {
        while let Some(&byte) = bytes.first() {
            match byte {
                0x00..=0x7F => out.push(byte as u16),
                0xA1..=0xDF => out.push(0xFF61 + (byte - 0xA1) as u16),
                _ if is_lead(byte) => {
                    let Some(&trail) = bytes.get(1) else {
                        return CoderResult::Malformed { length: 1 };
                    };
                    if !is_trail(trail) {
                        return CoderResult::Malformed { length: 1 };
                    }
                    let code = ((byte as u16) << 8) | trail as u16;
                    let Some(scalar) = tables::lookup(jis0208::DECODE, code) else {
                        return CoderResult::Unmappable { length: 2 };
                    };
                    out.push(scalar);
                    bytes = &bytes[2..];
                    continue;
                }
                _ => return CoderResult::Malformed { length: 1 },
            }
            bytes = &bytes[1..];
        }
        CoderResult::Underflow
    }

    fn flush(&mut self, _out: &mut Vec<u8>) -> CoderResult {
        CoderResult::Underflow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(units: &[u16]) -> (Vec<u8>, CoderResult) {
        let mut out = Vec::new();
        let result = Sjis.encode(units, &mut out);
        (out, result)
    }

    fn decode(bytes: &[u8]) -> (Vec<u16>, CoderResult) {
        let mut out = Vec::new();
        let result = Sjis.decode(bytes, &mut out);
        (out, result)
    }

    #[test]
    fn ascii_and_single_byte_specials() {
        let (bytes, result) = encode(&[0x41, 0xA5, 0x203E]);
        assert_eq!(result, CoderResult::Underflow);
        assert_eq!(bytes, vec![0x41, 0x5C, 0x7E]);

        // 0x5C and 0x7E decode as their ASCII values, not the aliases
        let (units, result) = decode(&[0x5C, 0x7E]);
        assert_eq!(result, CoderResult::Underflow);
        assert_eq!(units, vec![0x5C, 0x7E]);
    }

    #[test]
    fn halfwidth_katakana_band() {
        let (bytes, result) = encode(&[0xFF61, 0xFF9F]);
        assert_eq!(result, CoderResult::Underflow);
        assert_eq!(bytes, vec![0xA1, 0xDF]);
        let (units, _) = decode(&[0xA1, 0xDF]);
        assert_eq!(units, vec![0xFF61, 0xFF9F]);
    }

    #[test]
    fn double_byte_cells() {
        let (bytes, result) = encode(&[0x3042]);
        assert_eq!(result, CoderResult::Underflow);
        assert_eq!(bytes, vec![0x82, 0xA0]);
        let (units, _) = decode(&[0x81, 0x40]);
        assert_eq!(units, vec![0x3000]);
    }

    #[test]
    fn windows_symbol_variants_are_not_in_1990() {
        let (_, result) = encode(&[0xFF5E]);
        assert_eq!(result, CoderResult::Unmappable { length: 1 });
        let (_, result) = encode(&[0x301C]);
        assert_eq!(CoderResult::Underflow, result);
    }

    #[test]
    fn malformed_input() {
        assert_eq!(encode(&[0xD800]).1, CoderResult::Malformed { length: 1 });
        assert_eq!(decode(&[0x80]).1, CoderResult::Malformed { length: 1 });
        assert_eq!(decode(&[0x82]).1, CoderResult::Malformed { length: 1 });
        assert_eq!(decode(&[0x82, 0x7F]).1, CoderResult::Malformed { length: 1 });
    }

    #[test]
    fn unmapped_cell_is_unmappable() {
        assert_eq!(decode(&[0xF0, 0x40]).1, CoderResult::Unmappable { length: 2 });
    }
}
