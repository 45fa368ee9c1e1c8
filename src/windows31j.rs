//! Windows code page 932 (Windows-31J).

use crate::codec::{scalar_at, ByteCodec, CoderResult};
use crate::sjis::{is_lead, is_trail};
use crate::tables::{self, cp932};

/// Stateless Windows-31J converter.
///
/// Unlike [`Sjis`](crate::sjis::Sjis) there is no U+00A5/U+203E aliasing:
/// 0x5C is the backslash in both directions and the yen sign has no mapping
/// at all. On top of the JIS X 0208 cells
/// the tables carry NEC row 13, the NEC-selected and ordinary IBM extension
/// rows, the six Windows symbol variants, and the user-defined area (leads
/// 0xF0 through 0xF9, U+E000 through U+E757).
#[derive(Debug, Clone, Copy, Default)]
pub struct Windows31j;

impl ByteCodec for Windows31j {
    fn reset(&mut self) {}

    fn encode(&mut self, mut units: &[u16], out: &mut Vec<u8>) -> CoderResult {
        while !units.is_empty() {
            let Some((scalar, len)) = scalar_at(units) else {
                return CoderResult::Malformed { length: 1 };
            };
            match scalar {
                0x00..=0x7F => out.push(scalar as u8),
                0xFF61..=0xFF9F => out.push((scalar - 0xFF61 + 0xA1) as u8),
                _ => {
                    let code = u16::try_from(scalar)
                        .ok()
                        .and_then(|cp| tables::lookup(cp932::ENCODE, cp));
                    let Some(code) = code else {
                        return CoderResult::Unmappable { length: len };
                    };
                    out.push((code >> 8) as u8);
                    out.push(code as u8);
                }
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
                    let Some(scalar) = tables::lookup(cp932::DECODE, code) else {
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
        let result = Windows31j.encode(units, &mut out);
        (out, result)
    }

    fn decode(bytes: &[u8]) -> (Vec<u16>, CoderResult) {
        let mut out = Vec::new();
        let result = Windows31j.decode(bytes, &mut out);
        (out, result)
    }

    #[test]
    fn no_yen_aliasing() {
        let (bytes, _) = encode(&[0x5C]);
        assert_eq!(bytes, vec![0x5C]);
        assert_eq!(decode(&[0x5C]).0, vec![0x5C]);
        // the yen sign has no cell at all in this code page
        assert_eq!(encode(&[0xA5]).1, CoderResult::Unmappable { length: 1 });
    }

    #[test]
    fn both_symbol_variants_encode() {
        // cp932 maps the JIS form and the Windows form to the same cell
        assert_eq!(encode(&[0xFF5E]).0, vec![0x81, 0x60]);
        assert_eq!(encode(&[0x301C]).0, vec![0x81, 0x60]);
        // decode favours the Windows form
        assert_eq!(decode(&[0x81, 0x60]).0, vec![0xFF5E]);
    }

    #[test]
    fn nec_and_ibm_rows() {
        assert_eq!(decode(&[0x87, 0x40]).0, vec![0x2460]);
        // the encoder favours the NEC-selected IBM cell over 0xFBFC
        assert_eq!(encode(&[0x9AD9]).0, vec![0xEE, 0xE0]);
        assert_eq!(decode(&[0xFB, 0xFC]).0, vec![0x9AD9]);
    }

    #[test]
    fn user_defined_area() {
        assert_eq!(decode(&[0xF0, 0x40]).0, vec![0xE000]);
        assert_eq!(encode(&[0xE757]).0, vec![0xF9, 0xFC]);
        assert_eq!(encode(&[0xE758]).1, CoderResult::Unmappable { length: 1 });
    }

    #[test]
    fn structurally_invalid_bytes() {
        assert_eq!(decode(&[0x80]).1, CoderResult::Malformed { length: 1 });
        assert_eq!(decode(&[0xA0]).1, CoderResult::Malformed { length: 1 });
        assert_eq!(decode(&[0xFD]).1, CoderResult::Malformed { length: 1 });
    }
}
