//! The byte-codec seam between the glyph wrappers and the base encodings.

/// Outcome of one push of input through a [`ByteCodec`].
///
/// Lengths count UTF-16 code units on the encode side and bytes on the
/// decode side, measured from the start of the slice that was handed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoderResult {
    /// All input was consumed successfully.
    Underflow,
    /// The input is structurally invalid for this codec.
    Malformed { length: usize },
    /// The input is well formed but has no mapping in this codec.
    Unmappable { length: usize },
}

impl CoderResult {
    /// Whether this result reports an error.
    #[inline]
    pub const fn is_error(&self) -> bool {
        !matches!(self, CoderResult::Underflow)
    }
}

/// A stateful two-way converter between UTF-16 code units and bytes.
///
/// The trait is object-safe so the glyph wrappers can hold their primary and
/// fallback codecs behind `Box<dyn ByteCodec>`. Implementations may buffer
/// state between calls; `reset` discards it and `flush` drains it. The
/// wrappers drive each logical character through a full
/// `reset`/`encode`/`flush` cycle so a failed attempt never leaks partial
/// output.
pub trait ByteCodec: Send {
    /// Discards any buffered conversion state.
    fn reset(&mut self);

    /// Encodes UTF-16 code units, appending bytes to `out`.
    fn encode(&mut self, units: &[u16], out: &mut Vec<u8>) -> CoderResult;

    /// Decodes bytes, appending UTF-16 code units to `out`.
    fn decode(&mut self, bytes: &[u8], out: &mut Vec<u16>) -> CoderResult;

    /// Drains buffered encode state into `out`.
    fn flush(&mut self, out: &mut Vec<u8>) -> CoderResult;
}

/// Reads one scalar from the front of `units`, pairing surrogates.
///
/// Returns the scalar and the number of units it occupied, or `None` for an
/// empty slice or an unpaired surrogate half.
pub(crate) fn scalar_at(units: &[u16]) -> Option<(u32, usize)> {
    let first = *units.first()? as u32;
    if (0xD800..0xDC00).contains(&first) {
        let low = *units.get(1)? as u32;
        if !(0xDC00..0xE000).contains(&low) {
            return None;
        }
        Some((0x10000 + ((first - 0xD800) << 10) + (low - 0xDC00), 2))
    } else if (0xDC00..0xE000).contains(&first) {
        None
    } else {
        Some((first, 1))
    }
}

/// Serializes one scalar as UTF-16 onto `out`.
pub(crate) fn push_scalar(out: &mut Vec<u16>, scalar: u32) {
    if scalar >= 0x10000 {
        let v = scalar - 0x10000;
        out.push(0xD800 + (v >> 10) as u16);
        out.push(0xDC00 + (v & 0x3FF) as u16);
    } else {
        out.push(scalar as u16);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_at_pairs_surrogates() {
        assert_eq!(scalar_at(&[0x0041]), Some((0x41, 1)));
        assert_eq!(scalar_at(&[0xD840, 0xDC89]), Some((0x20089, 2)));
        assert_eq!(scalar_at(&[0xD840]), None);
        assert_eq!(scalar_at(&[0xDC89]), None);
        assert_eq!(scalar_at(&[0xD840, 0x0041]), None);
        assert_eq!(scalar_at(&[]), None);
    }

    #[test]
    fn push_scalar_round_trips() {
        let mut units = Vec::new();
        push_scalar(&mut units, 0x3042);
        push_scalar(&mut units, 0x20089);
        assert_eq!(units, vec![0x3042, 0xD840, 0xDC89]);
    }
}
