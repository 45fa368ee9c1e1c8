//! Shift_JIS-2004 over JIS X 0213:2004 planes 1 and 2.

use crate::codec::{push_scalar, scalar_at, ByteCodec, CoderResult};
use crate::sjis::{is_lead, is_trail};
use crate::tables::{self, jis0213};

/// Stateless Shift_JIS-2004 converter.
///
/// Single-byte rules match [`Sjis`](crate::sjis::Sjis) on encode (U+00A5 to
/// 0x5C, U+203E to 0x7E); on decode 0x5C yields U+00A5 and 0x7E yields
/// U+203E, with the ASCII backslash and tilde reachable only through their
/// dedicated double-byte cells. Twenty-five cells map to base-plus-mark
/// scalar pairs in both directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjis2004;

fn encode_scalar(scalar: u32) -> Option<u16> {
    tables::lookup(jis0213::ENCODE, scalar)
}

impl ByteCodec for Sjis2004 {
    fn reset(&mut self) {}

    fn encode(&mut self, mut units: &[u16], out: &mut Vec<u8>) -> CoderResult {
        while !units.is_empty() {
            let Some((scalar, len)) = scalar_at(units) else {
                return CoderResult::Malformed { length: 1 };
            };
            // A base-plus-mark pair maps to a single cell when the standard
            // defines one; the pair must be tried before the bare base.
            if let Ok(base) = u16::try_from(scalar) {
                if let Some((mark, _)) = scalar_at(&units[len..]) {
                    if let Ok(mark) = u16::try_from(mark) {
                        if let Some(code) = tables::lookup2(jis0213::ENCODE_SEQ, base, mark) {
                            out.push((code >> 8) as u8);
                            out.push(code as u8);
                            units = &units[len + 1..];
                            continue;
                        }
                    }
                }
            }
            match scalar {
                0xA5 => out.push(0x5C),
                0x203E => out.push(0x7E),
                0xFF61..=0xFF9F => out.push((scalar - 0xFF61 + 0xA1) as u8),
                _ => {
                    if let Some(code) = encode_scalar(scalar) {
                        out.push((code >> 8) as u8);
                        out.push(code as u8);
                    } else if scalar < 0x80 {
                        out.push(scalar as u8);
                    } else {
                        return CoderResult::Unmappable { length: len };
                    }
                }
            }
            units = &units[len..];
        }
        CoderResult::Underflow
    }

    fn decode(&mut self, mut bytes: &[u8], out: &mut Vec<u16>) -> CoderResult {
        while let Some(&byte) = bytes.first() {
            match byte {
                0x5C => out.push(0xA5),
                0x7E => out.push(0x203E),
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
                    if let Some(scalar) = tables::lookup(jis0213::DECODE, code) {
                        push_scalar(out, scalar);
                    } else if let Some((a, b)) = jis0213::DECODE_SEQ
                        .binary_search_by_key(&code, |&(c, _, _)| c)
                        .ok()
                        .map(|i| (jis0213::DECODE_SEQ[i].1, jis0213::DECODE_SEQ[i].2))
                    {
                        out.push(a);
                        out.push(b);
                    } else {
                        return CoderResult::Unmappable { length: 2 };
                    }
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
        let result = Sjis2004.encode(units, &mut out);
        (out, result)
    }

    fn decode(bytes: &[u8]) -> (Vec<u16>, CoderResult) {
        let mut out = Vec::new();
        let result = Sjis2004.decode(bytes, &mut out);
        (out, result)
    }

    #[test]
    fn backslash_and_tilde_swap_cells() {
        let (bytes, result) = encode(&[0x5C, 0x7E, 0xA5, 0x203E]);
        assert_eq!(result, CoderResult::Underflow);
        assert_eq!(bytes, vec![0x81, 0x5F, 0x81, 0xB0, 0x5C, 0x7E]);
        let (units, _) = decode(&[0x5C, 0x7E, 0x81, 0x5F, 0x81, 0xB0]);
        assert_eq!(units, vec![0xA5, 0x203E, 0x5C, 0x7E]);
    }

    #[test]
    fn plane_two_supplementary() {
        let (bytes, result) = encode(&[0xD840, 0xDC89]);
        assert_eq!(result, CoderResult::Underflow);
        assert_eq!(bytes, vec![0xF0, 0x40]);
        let (units, _) = decode(&[0xF0, 0x40]);
        assert_eq!(units, vec![0xD840, 0xDC89]);
    }

    #[test]
    fn base_plus_mark_sequences() {
        // か + semi-voiced mark occupies a dedicated cell
        let (bytes, result) = encode(&[0x304B, 0x309A]);
        assert_eq!(result, CoderResult::Underflow);
        assert_eq!(bytes, vec![0x82, 0xF5]);
        let (units, _) = decode(&[0x82, 0xF5]);
        assert_eq!(units, vec![0x304B, 0x309A]);

        // か alone still has its ordinary cell
        let (bytes, _) = encode(&[0x304B]);
        assert_eq!(bytes, vec![0x82, 0xA9]);
    }

    #[test]
    fn plane_one_additions() {
        // 〜 and ‖ keep their 1990 cells
        let (bytes, result) = encode(&[0x301C, 0x2016]);
        assert_eq!(result, CoderResult::Underflow);
        assert_eq!(bytes, vec![0x81, 0x60, 0x81, 0x61]);
        // the Windows variants have no cells here
        assert_eq!(encode(&[0xFF5E]).1, CoderResult::Unmappable { length: 1 });
    }

    #[test]
    fn malformed_and_truncated() {
        assert_eq!(decode(&[0x80]).1, CoderResult::Malformed { length: 1 });
        assert_eq!(decode(&[0x82]).1, CoderResult::Malformed { length: 1 });
        assert_eq!(encode(&[0xDC00]).1, CoderResult::Malformed { length: 1 });
    }
}
