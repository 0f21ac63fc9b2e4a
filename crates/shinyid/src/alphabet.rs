use crate::{BITS_PER_CHAR, InvalidShiny, MAX_LEN, Result};
use core::fmt;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// The canonical shiny alphabet, in digit order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

const DIGIT_MASK: u64 = 0x3F;

/// An ordered set of 64 distinct ASCII characters used as base 64 digits,
/// together with its reverse lookup table.
///
/// Both tables are computed by [`Alphabet::new`], which is a `const fn`, so an
/// alphabet declared as a `const` is built entirely at compile time and costs
/// nothing at runtime. There is no way to change an `Alphabet` after it is
/// built, which keeps the digit table and the reverse table in agreement.
///
/// Most callers want [`Alphabet::URL_SAFE`], which is what the free functions
/// [`crate::encode`] and [`crate::decode`] use.
///
/// # Example
///
/// ```
/// use shinyid::Alphabet;
///
/// const REVERSED: Alphabet =
///     Alphabet::new(b"_-9876543210zyxwvutsrqponmlkjihgfedcbaZYXWVUTSRQPONMLKJIHGFEDCBA");
///
/// let mut buf = [0; shinyid::MAX_LEN];
/// assert_eq!(REVERSED.encode_to_buf(64, &mut buf), "-_");
/// assert_eq!(REVERSED.decode("-_"), Ok(64));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    chars: [u8; 64],
    lookup: [Option<u8>; 256],
}

impl Alphabet {
    /// `A-Z`, `a-z`, `0-9`, `-`, `_`: the URL-safe base64 alphabet of RFC 4648,
    /// used here as positional digits 0 through 63.
    pub const URL_SAFE: Self =
        Self::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_");

    /// Builds an alphabet from 64 digit characters, index 0 first.
    ///
    /// # Panics
    ///
    /// Panics if any byte is not printable, non-space ASCII, or appears more
    /// than once. When called in a `const` item this is a compile error.
    #[must_use]
    pub const fn new(chars: &[u8; 64]) -> Self {
        let mut lookup = [None; 256];
        let mut i = 0;
        while i < 64 {
            let c = chars[i];
            assert!(c.is_ascii_graphic(), "alphabet byte is not printable ASCII");
            assert!(lookup[c as usize].is_none(), "alphabet byte is repeated");
            lookup[c as usize] = Some(i as u8);
            i += 1;
        }
        Self {
            chars: *chars,
            lookup,
        }
    }

    /// Returns the digit value of `byte`, or `None` if it is not part of the
    /// alphabet.
    #[inline]
    #[must_use]
    pub const fn digit(&self, byte: u8) -> Option<u8> {
        self.lookup[byte as usize]
    }

    /// Returns the character for `digit`. Only the low 6 bits are used.
    #[inline]
    #[must_use]
    pub const fn char(&self, digit: u8) -> u8 {
        self.chars[(digit as u64 & DIGIT_MASK) as usize]
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, byte: u8) -> bool {
        self.digit(byte).is_some()
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 64] {
        &self.chars
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `new` only admits ASCII bytes
        unsafe { core::str::from_utf8_unchecked(&self.chars) }
    }

    /// Writes the digits of `id` into the tail of `buf`, most significant
    /// first, and returns the index of the first written byte.
    ///
    /// Zero writes a single index-0 character. Eleven 6-bit digits cover all
    /// 64 bits, so the loop always terminates before running off the front of
    /// the buffer.
    pub(crate) fn fill(&self, mut id: u64, buf: &mut [u8; MAX_LEN]) -> usize {
        let mut i = MAX_LEN;
        loop {
            i -= 1;
            buf[i] = self.chars[(id & DIGIT_MASK) as usize];
            id >>= BITS_PER_CHAR;
            if id == 0 {
                return i;
            }
        }
    }

    /// Encodes `id` into `buf` without allocating and returns the populated
    /// tail of the buffer as a string.
    ///
    /// Bytes of `buf` before the returned slice are left untouched.
    pub fn encode_to_buf<'buf>(&self, id: u64, buf: &'buf mut [u8; MAX_LEN]) -> &'buf str {
        let start = self.fill(id, buf);
        // SAFETY: `fill` writes only alphabet bytes, which are ASCII
        unsafe { core::str::from_utf8_unchecked(&buf[start..]) }
    }

    /// Encodes `id` into a newly allocated [`String`](alloc::string::String).
    #[cfg(feature = "alloc")]
    #[must_use]
    pub fn encode(&self, id: u64) -> alloc::string::String {
        let mut buf = [0; MAX_LEN];
        self.encode_to_buf(id, &mut buf).into()
    }

    /// Decodes a shiny written in this alphabet.
    ///
    /// Any string of 1 to [`MAX_LEN`] alphabet characters is accepted,
    /// including ones with leading zero digits that [`Alphabet::encode`] would
    /// never produce. An 11-character input whose first digit is above 15
    /// describes more than 64 bits; the bits above bit 63 are discarded.
    ///
    /// # Errors
    ///
    /// - [`InvalidShiny::DecodeInvalidLen`] if the input is empty or longer
    ///   than [`MAX_LEN`] bytes. Length is checked first.
    /// - [`InvalidShiny::DecodeInvalidAscii`] for the first byte that is not
    ///   part of the alphabet.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn decode(&self, shiny: &str) -> Result<u64> {
        let bytes = shiny.as_bytes();
        if bytes.is_empty() || bytes.len() > MAX_LEN {
            return Err(InvalidShiny::DecodeInvalidLen { len: bytes.len() });
        }
        bytes
            .iter()
            .enumerate()
            .try_fold(0_u64, |acc, (index, &byte)| {
                let digit = self
                    .digit(byte)
                    .ok_or(InvalidShiny::DecodeInvalidAscii { byte, index })?;
                Ok((acc << BITS_PER_CHAR) | u64::from(digit))
            })
    }

    /// Returns `true` if [`Alphabet::decode`] would accept `shiny`.
    #[must_use]
    pub fn is_valid(&self, shiny: &str) -> bool {
        let bytes = shiny.as_bytes();
        (1..=MAX_LEN).contains(&bytes.len()) && bytes.iter().all(|&b| self.contains(b))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::URL_SAFE
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.as_str()).finish()
    }
}
