//! Serde support, enabled by the `serde` feature.
//!
//! A `BigInt` serializes as its decimal string, so any magnitude survives
//! formats whose native integers are bounded. Deserialization accepts a
//! decimal string or any native integer.

use crate::bigint::BigInt;
use core::fmt;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BigIntVisitor;

        impl<'de> Visitor<'de> for BigIntVisitor {
            type Value = BigInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal string or an integer")
            }

            fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
            where
                E: de::Error,
            {
                BigInt::from_decimal_str(value).map_err(de::Error::custom)
            }

            fn visit_i64<E>(self, value: i64) -> Result<BigInt, E>
            where
                E: de::Error,
            {
                Ok(BigInt::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<BigInt, E>
            where
                E: de::Error,
            {
                Ok(BigInt::from(value))
            }
        }

        deserializer.deserialize_any(BigIntVisitor)
    }
}
