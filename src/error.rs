use thiserror::Error;

/// Errors produced while converting text or constructing conversion tables.
///
/// Positional variants carry the offset of the offending input, counted in
/// UTF-16 code units on the encode side and in bytes on the decode side, so
/// a caller can resynchronise or substitute a replacement and continue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The input was structurally invalid at `position`, e.g. an unpaired
    /// surrogate half on the encode side or a truncated double-byte sequence
    /// on the decode side.
    #[error("malformed input at position {position} (length {length})")]
    MalformedInput { position: usize, length: usize },

    /// The input was well formed but the target character set has no
    /// representation for it.
    #[error("unmappable input at position {position} (length {length})")]
    UnmappableInput { position: usize, length: usize },

    /// A bundled data resource could not be located or parsed.
    #[error("resource missing or unreadable: {0}")]
    ResourceMissing(String),

    /// A conversion table could not be built from the supplied arguments.
    #[error("cannot construct table: {reason}")]
    Construction { reason: String },
}

impl CodecError {
    /// Offset of the error within the original input, if this is a
    /// positional error.
    #[inline]
    pub const fn position(&self) -> Option<usize> {
        match self {
            CodecError::MalformedInput { position, .. }
            | CodecError::UnmappableInput { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Length of the offending input run, if this is a positional error.
    #[inline]
    pub const fn length(&self) -> Option<usize> {
        match self {
            CodecError::MalformedInput { length, .. }
            | CodecError::UnmappableInput { length, .. } => Some(*length),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_accessors() {
        let e = CodecError::MalformedInput {
            position: 3,
            length: 1,
        };
        assert_eq!(e.position(), Some(3));
        assert_eq!(e.length(), Some(1));

        let e = CodecError::ResourceMissing("jisclass.txt".into());
        assert_eq!(e.position(), None);
        assert_eq!(e.length(), None);
    }

    #[test]
    fn display_is_stable() {
        let e = CodecError::UnmappableInput {
            position: 7,
            length: 2,
        };
        assert_eq!(e.to_string(), "unmappable input at position 7 (length 2)");
    }
}
