/*
Copyright 2022 EmeraldPay, Inc

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/
//! Hex representation used on the SDK boundary: byte strings and integer quantities are
//! `0x` prefixed lowercase hex.

use crate::error::ConversionError;
use num_bigint::BigUint;
use serde::de::DeserializeOwned;

pub struct Hex {}

///
/// Common utilities to encode and decode bytes in `0x` prefixed hex format
impl Hex {
    pub fn decode<S: AsRef<str>>(s: S) -> Result<Vec<u8>, ConversionError> {
        match s.as_ref().strip_prefix("0x") {
            Some(value) => hex::decode(value).map_err(ConversionError::from),
            None => Err(ConversionError::InvalidHex),
        }
    }

    pub fn encode<T: AsRef<[u8]>>(n: T) -> String {
        format!("0x{}", hex::encode(n))
    }

    /// Quantity without leading zeros, zero is `0x0`
    pub fn encode_quantity(value: &BigUint) -> String {
        format!("0x{:x}", value)
    }

    /// Parse either a `0x` hex quantity (odd length allowed) or a decimal string
    pub fn decode_quantity<S: AsRef<str>>(s: S) -> Result<BigUint, ConversionError> {
        let s = s.as_ref();
        let parsed = match s.strip_prefix("0x") {
            Some("") => None,
            Some(digits) => BigUint::parse_bytes(digits.as_bytes(), 16),
            None => BigUint::parse_bytes(s.as_bytes(), 10),
        };
        parsed.ok_or_else(|| ConversionError::InvalidQuantity(s.to_string()))
    }

    pub fn decode_u64<S: AsRef<str>>(s: S) -> Result<u64, ConversionError> {
        let value = Hex::decode_quantity(s.as_ref())?;
        let digits = value.to_u64_digits();
        match digits.len() {
            0 => Ok(0),
            1 => Ok(digits[0]),
            _ => Err(ConversionError::InvalidQuantity(s.as_ref().to_string())),
        }
    }
}

/// Parse a JSON object into `T`. Arrays and scalars are rejected even when serde could
/// map them onto the struct fields by position.
pub fn from_json_object<T: DeserializeOwned>(json: &str) -> Result<T, ConversionError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| ConversionError::InvalidJson(e.to_string()))?;
    if !value.is_object() {
        return Err(ConversionError::InvalidJson("Expected a JSON object".to_string()));
    }
    serde_json::from_value(value).map_err(|e| ConversionError::InvalidJson(e.to_string()))
}

/// Serde adapters for integer quantities, accepted as JSON numbers or strings
pub mod quantity {
    use super::Hex;
    use num_bigint::BigUint;
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::convert::TryFrom;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum QuantityRepr {
        Number(u64),
        Text(String),
    }

    pub fn deserialize_opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<QuantityRepr>::deserialize(deserializer)? {
            None => Ok(None),
            Some(QuantityRepr::Number(n)) => Ok(Some(n)),
            Some(QuantityRepr::Text(s)) => Hex::decode_u64(&s).map(Some).map_err(de::Error::custom),
        }
    }

    pub fn deserialize_opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match deserialize_opt_u64(deserializer)? {
            None => Ok(None),
            Some(n) => u32::try_from(n)
                .map(Some)
                .map_err(|_| de::Error::custom(format!("Quantity is too large: {}", n))),
        }
    }

    pub fn deserialize_opt_big<'de, D>(deserializer: D) -> Result<Option<BigUint>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<QuantityRepr>::deserialize(deserializer)? {
            None => Ok(None),
            Some(QuantityRepr::Number(n)) => Ok(Some(BigUint::from(n))),
            Some(QuantityRepr::Text(s)) => {
                Hex::decode_quantity(&s).map(Some).map_err(de::Error::custom)
            }
        }
    }

    pub fn serialize_big<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&Hex::encode_quantity(value))
    }

    pub fn serialize_u64<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_big(&BigUint::from(*value), serializer)
    }

    pub fn serialize_u32<S>(value: &u32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_big(&BigUint::from(*value), serializer)
    }
}

/// Serde adapters for `0x` hex byte strings
pub mod bytes {
    use super::Hex;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<[u8]>,
        S: Serializer,
    {
        serializer.serialize_str(&Hex::encode(value))
    }

    pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| Hex::decode(s).map_err(de::Error::custom))
            .transpose()
    }
}
