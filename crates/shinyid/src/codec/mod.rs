use crate::{Alphabet, Result};


/// Bits carried by one shiny character.
pub const BITS_PER_CHAR: u32 = 6;

/// Longest possible shiny: `ceil(64 / 6)` characters.
pub const MAX_LEN: usize = (u64::BITS as usize).div_ceil(BITS_PER_CHAR as usize);

// Single shared copy of the canonical tables.
pub(crate) static URL_SAFE: Alphabet = Alphabet::URL_SAFE;

/// Encodes `id` as a shiny using [`Alphabet::URL_SAFE`].
///
/// The result is the shortest string that represents `id`. Zero is `"A"`.
///
/// # Example
///
/// ```
/// assert_eq!(shinyid::encode(0), "A");
/// assert_eq!(shinyid::encode(500), "H0");
/// assert_eq!(shinyid::encode(u64::MAX), "P__________");
/// ```
#[cfg(feature = "alloc")]
#[must_use]
pub fn encode(id: u64) -> alloc::string::String {
    URL_SAFE.encode(id)
}

/// Zero-allocation form of [`encode`].
///
/// # Example
///
/// ```
/// let mut buf = [0; shinyid::MAX_LEN];
/// assert_eq!(shinyid::encode_to_buf(9375, &mut buf), "CSf");
/// ```
pub fn encode_to_buf(id: u64, buf: &mut [u8; MAX_LEN]) -> &str {
    URL_SAFE.encode_to_buf(id, buf)
}

/// Decodes a shiny written with [`Alphabet::URL_SAFE`].
///
/// See [`Alphabet::decode`] for the exact rules.
///
/// # Errors
///
/// Returns [`crate::InvalidShiny`] if `shiny` is empty, longer than
/// [`MAX_LEN`], or contains a character outside the alphabet.
///
/// # Example
///
/// ```
/// use shinyid::InvalidShiny;
///
/// assert_eq!(shinyid::decode("CSf"), Ok(9375));
/// assert_eq!(shinyid::decode(""), Err(InvalidShiny::DecodeInvalidLen { len: 0 }));
/// assert_eq!(
///     shinyid::decode("#"),
///     Err(InvalidShiny::DecodeInvalidAscii { byte: b'#', index: 0 })
/// );
/// ```
pub fn decode(shiny: &str) -> Result<u64> {
    URL_SAFE.decode(shiny)
}

/// Returns `true` if [`decode`] would accept `shiny`.
#[must_use]
pub fn is_valid(shiny: &str) -> bool {
    URL_SAFE.is_valid(shiny)
}
