use crate::codec::URL_SAFE;
use crate::{InvalidShiny, MAX_LEN, Result};
use core::fmt;

/// A `u64` identifier that formats and parses as a shiny.
///
/// `ShinyId` adds no bits and no validation of its own: every `u64` is a valid
/// `ShinyId`. Equality, ordering and hashing are those of the raw integer,
/// *not* of the encoded string (shinies of different lengths do not sort like
/// the numbers they encode).
///
/// # Example
///
/// ```
/// use shinyid::ShinyId;
///
/// let id = ShinyId::from_raw(9375);
/// assert_eq!(id.encode(), "CSf");
///
/// let parsed: ShinyId = "CSf".parse().unwrap();
/// assert_eq!(parsed, id);
/// assert_eq!(parsed.to_raw(), 9375);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ShinyId {
    id: u64,
}

impl ShinyId {
    /// The smallest ID, encoded as `"A"`.
    pub const ZERO: Self = Self::from_raw(0);

    /// The largest ID, encoded as `"P__________"`.
    pub const MAX: Self = Self::from_raw(u64::MAX);

    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self { id }
    }

    #[must_use]
    pub const fn to_raw(&self) -> u64 {
        self.id
    }

    /// Returns a formatter holding the shiny representation of this ID.
    ///
    /// The formatter owns a stack buffer, so this does not allocate. It
    /// implements [`fmt::Display`] and [`AsRef<str>`] and compares equal to
    /// string slices.
    ///
    /// # Example
    ///
    /// ```
    /// use shinyid::ShinyId;
    ///
    /// let shiny = ShinyId::from_raw(500).encode();
    /// assert_eq!(shiny, "H0");
    /// assert_eq!(shiny.len(), 2);
    /// ```
    #[must_use]
    pub fn encode(&self) -> ShinyFormatter {
        ShinyFormatter::new(self)
    }

    /// Encodes this ID into a caller-provided buffer and returns the populated
    /// tail as a string.
    ///
    /// See also: [`ShinyId::encode`] for a version that manages its own
    /// buffer.
    pub fn encode_to_buf<'buf>(&self, buf: &'buf mut [u8; MAX_LEN]) -> &'buf str {
        URL_SAFE.encode_to_buf(self.id, buf)
    }

    /// Parses a shiny into an ID.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidShiny`] under the same conditions as
    /// [`crate::decode`].
    pub fn decode(s: impl AsRef<str>) -> Result<Self> {
        crate::decode(s.as_ref()).map(Self::from_raw)
    }
}

impl From<u64> for ShinyId {
    fn from(id: u64) -> Self {
        Self::from_raw(id)
    }
}

impl From<ShinyId> for u64 {
    fn from(id: ShinyId) -> Self {
        id.to_raw()
    }
}

impl TryFrom<&str> for ShinyId {
    type Error = InvalidShiny;

    fn try_from(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl core::str::FromStr for ShinyId {
    type Err = InvalidShiny;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl fmt::Display for ShinyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0; MAX_LEN];
        f.write_str(self.encode_to_buf(&mut buf))
    }
}

impl fmt::Debug for ShinyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0; MAX_LEN];
        f.debug_struct("ShinyId")
            .field("id", &self.id)
            .field("shiny", &self.encode_to_buf(&mut buf))
            .finish()
    }
}

/// An owned, stack-allocated shiny produced by [`ShinyId::encode`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShinyFormatter {
    buf: [u8; MAX_LEN],
    start: u8,
}

impl ShinyFormatter {
    pub fn new(id: &ShinyId) -> Self {
        let mut buf = [0; MAX_LEN];
        let start = URL_SAFE.fill(id.to_raw(), &mut buf);
        Self {
            buf,
            // always < MAX_LEN
            start: start as u8,
        }
    }

    /// Returns a `&str` view of the shiny.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `buf[start..]` holds only alphabet bytes, which are ASCII
        unsafe { core::str::from_utf8_unchecked(&self.buf[self.start as usize..]) }
    }

    /// Number of characters in the shiny, between 1 and [`MAX_LEN`].
    #[must_use]
    pub const fn len(&self) -> usize {
        MAX_LEN - self.start as usize
    }

    /// Always `false`: even zero encodes to one character.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns an allocated `String` of the shiny.
    #[cfg(feature = "alloc")]
    #[allow(clippy::inherent_to_string_shadow_display)]
    #[must_use]
    pub fn to_string(&self) -> alloc::string::String {
        self.as_str().into()
    }

    /// Consumes the formatter and returns the raw buffer along with the
    /// offset of the first encoded byte.
    #[must_use]
    pub const fn into_inner(self) -> ([u8; MAX_LEN], usize) {
        (self.buf, self.start as usize)
    }
}

impl fmt::Display for ShinyFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for ShinyFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ShinyFormatter").field(&self.as_str()).finish()
    }
}

impl AsRef<str> for ShinyFormatter {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for ShinyFormatter {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ShinyFormatter {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(feature = "alloc")]
impl PartialEq<alloc::string::String> for ShinyFormatter {
    fn eq(&self, other: &alloc::string::String) -> bool {
        self.as_str() == other.as_str()
    }
}
