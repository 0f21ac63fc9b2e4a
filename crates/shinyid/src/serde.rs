use crate::{MAX_LEN, ShinyId};
use ::serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use core::fmt;

struct ShinyVisitor;

impl de::Visitor<'_> for ShinyVisitor {
    type Value = u64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a shiny string")
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        crate::decode(v).map_err(de::Error::custom)
    }
}

impl Serialize for ShinyId {
    /// Serializes the ID as its shiny string.
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut buf = [0; MAX_LEN];
        s.serialize_str(self.encode_to_buf(&mut buf))
    }
}

impl<'de> Deserialize<'de> for ShinyId {
    /// Deserializes the ID from a shiny string.
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(ShinyVisitor).map(Self::from_raw)
    }
}

/// Stores a plain `u64` field as a shiny string.
///
/// ```
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Link {
///     #[serde(with = "shinyid::as_shiny")]
///     id: u64,
/// }
/// ```
pub mod as_shiny {
    use super::{Deserializer, MAX_LEN, Serializer, ShinyVisitor};

    /// Serialize a `u64` as a shiny string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &u64, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut buf = [0; MAX_LEN];
        s.serialize_str(crate::encode_to_buf(*id, &mut buf))
    }

    /// Deserialize a `u64` from a shiny string.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The string is not a valid shiny (bad length or character)
    pub fn deserialize<'de, D>(d: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(ShinyVisitor)
    }
}

/// Stores a [`ShinyId`] field as its raw integer instead of a string.
pub mod as_native {
    use super::{Deserialize, Deserializer, Serialize, Serializer, ShinyId};

    /// Serialize a [`ShinyId`] as its native integer representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &ShinyId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.to_raw().serialize(s)
    }

    /// Deserialize a [`ShinyId`] from its native integer representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying deserializer fails.
    pub fn deserialize<'de, D>(d: D) -> Result<ShinyId, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(d).map(ShinyId::from_raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct Row {
        id: ShinyId,
        #[serde(with = "as_shiny")]
        parent: u64,
        #[serde(with = "as_native")]
        owner: ShinyId,
    }

    #[test]
    fn row_roundtrip() {
        let row = Row {
            id: ShinyId::from_raw(9375),
            parent: u64::MAX,
            owner: ShinyId::from_raw(500),
        };

        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(
            value,
            json!({ "id": "CSf", "parent": "P__________", "owner": 500 })
        );

        let back: Row = serde_json::from_value(value).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn shiny_id_from_json_string() {
        let id: ShinyId = serde_json::from_str(r#""H0""#).unwrap();
        assert_eq!(id.to_raw(), 500);
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""H0""#);
    }

    #[test]
    fn invalid_shiny_is_reported() {
        let err = serde_json::from_str::<ShinyId>(r#""1_$_""#).unwrap_err();
        assert!(
            err.to_string()
                .contains("invalid shiny: byte 0x24 at index 2"),
            "{err}"
        );

        let err = serde_json::from_value::<Row>(json!({
            "id": "A",
            "parent": "",
            "owner": 0,
        }))
        .unwrap_err();
        assert!(err.to_string().contains("length 0"), "{err}");
    }

    #[test]
    fn wrong_json_type_is_rejected() {
        let err = serde_json::from_str::<ShinyId>("500").unwrap_err();
        assert!(err.to_string().contains("a shiny string"), "{err}");
    }
}
