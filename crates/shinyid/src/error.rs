use core::fmt;

/// A result type whose error defaults to [`InvalidShiny`].
///
/// Encoding is total, so the only fallible operations in `shinyid` are the
/// decoders.
pub type Result<T, E = InvalidShiny> = core::result::Result<T, E>;

/// The input is not a shiny.
///
/// Both variants mean the same thing to a caller: the string was rejected and
/// no value was produced. They are split so that callers who log or report the
/// failure can say what was wrong.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum InvalidShiny {
    /// The input was empty or longer than [`crate::MAX_LEN`] bytes.
    DecodeInvalidLen {
        /// Length of the rejected input, in bytes.
        len: usize,
    },

    /// The input contained a byte outside the alphabet.
    ///
    /// Only the first offending byte is reported.
    DecodeInvalidAscii {
        /// The offending byte. For non-ASCII input this is a single UTF-8
        /// code unit, not a whole character.
        byte: u8,
        /// Byte offset of `byte` in the input.
        index: usize,
    },
}

impl fmt::Display for InvalidShiny {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DecodeInvalidLen { len } => {
                write!(f, "invalid shiny: length {len} not in 1..={}", crate::MAX_LEN)
            }
            Self::DecodeInvalidAscii { byte, index } => {
                write!(f, "invalid shiny: byte {byte:#04x} at index {index}")
            }
        }
    }
}

impl core::error::Error for InvalidShiny {}
