use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod as_bytes_ulid {
    use super::*;
    use crate::{ULID_LEN, Ulid};

    pub fn serialize<S>(id: &Ulid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.as_bytes().serialize(s)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Ulid, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = <[u8; ULID_LEN]>::deserialize(d)?;
        Ok(Ulid::from_bytes(bytes))
    }
}

pub mod as_base32_ulid {
    use super::*;
    use crate::Ulid;

    pub fn serialize<S>(id: &Ulid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(id.encode().as_str())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Ulid, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Base32Visitor;

        impl ::serde::de::Visitor<'_> for Base32Visitor {
            type Value = Ulid;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a Crockford base32 encoded ULID string")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: ::serde::de::Error,
            {
                Ulid::decode(v).map_err(::serde::de::Error::custom)
            }
        }

        d.deserialize_str(Base32Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ulid;

    #[test]
    fn base32_ulid_roundtrip() {
        #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
        struct Row {
            #[serde(with = "as_base32_ulid")]
            event_id: Ulid,
        }
        let row = Row {
            event_id: Ulid::from_u128(42),
        };

        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"event_id":"0000000000000000000000001A"}"#);
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn base32_ulid_rejects_malformed_string() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Row {
            #[serde(with = "as_base32_ulid")]
            event_id: Ulid,
        }

        let err = serde_json::from_str::<Row>(r#"{"event_id":"01G00RPN3GXT7N2G5ZR6AW6TR"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid length"));
    }

    #[test]
    fn bytes_ulid_roundtrip() {
        #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
        struct Row {
            #[serde(with = "as_bytes_ulid")]
            event_id: Ulid,
        }
        let row = Row {
            event_id: Ulid::from_u128(42),
        };

        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"event_id":[0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,42]}"#);
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }
}
