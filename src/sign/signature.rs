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
use crate::error::{AccountError, ConversionError};
use crate::format::Hex;
use crate::util::to_arr;
use secp256k1::constants::CURVE_ORDER;
use std::{fmt, str::FromStr};

/// ECDSA signature length in bytes, as `r ‖ s ‖ v`
pub const ECDSA_SIGNATURE_BYTES: usize = 65;

/// Highest canonical `s`, i.e. floor(n / 2)
const HALF_CURVE_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b, 0x20, 0xa0,
];

/// Signature fields of a signed payload
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// ECDSA signature first point (0 < r < secp256k1n)
    #[serde(with = "hex32")]
    pub r: [u8; 32],

    /// ECDSA signature second point (0 < s < secp256k1n ÷ 2 + 1)
    #[serde(with = "hex32")]
    pub s: [u8; 32],

    /// ‘recovery id’, selects one of the public keys matching `r` and `s`
    pub v: u8,
}

impl Signature {
    pub fn new(r: [u8; 32], s: [u8; 32], v: u8) -> Self {
        Signature { r, s, v }
    }

    /// Check that the fields may represent a canonical signature.
    pub fn check_range(&self) -> Result<(), AccountError> {
        if self.v > 3 {
            return Err(AccountError::RecoveryError(format!("Invalid recovery id {}", self.v)));
        }
        if !in_range(&self.r, &CURVE_ORDER) {
            return Err(AccountError::RecoveryError("r is out of range".to_string()));
        }
        if !in_range(&self.s, &CURVE_ORDER) {
            return Err(AccountError::RecoveryError("s is out of range".to_string()));
        }
        if self.s > HALF_CURVE_ORDER {
            return Err(AccountError::RecoveryError("s is not canonical".to_string()));
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> [u8; ECDSA_SIGNATURE_BYTES] {
        let mut buf = [0u8; ECDSA_SIGNATURE_BYTES];
        buf[0..32].copy_from_slice(&self.r);
        buf[32..64].copy_from_slice(&self.s);
        buf[64] = self.v;
        buf
    }
}

// 0 < value < limit, both big-endian
fn in_range(value: &[u8; 32], limit: &[u8; 32]) -> bool {
    value.iter().any(|b| *b != 0) && value < limit
}

impl From<[u8; ECDSA_SIGNATURE_BYTES]> for Signature {
    fn from(data: [u8; ECDSA_SIGNATURE_BYTES]) -> Self {
        Signature {
            r: to_arr(&data[0..32]),
            s: to_arr(&data[32..64]),
            v: data[64],
        }
    }
}

impl FromStr for Signature {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let data = Hex::decode(s)?;
        if data.len() != ECDSA_SIGNATURE_BYTES {
            return Err(ConversionError::InvalidLength(data.len()));
        }
        let mut buf = [0u8; ECDSA_SIGNATURE_BYTES];
        buf.copy_from_slice(&data);
        Ok(Signature::from(buf))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Hex::encode(self.to_bytes()))
    }
}

mod hex32 {
    use crate::format::{bytes, Hex};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error> {
        bytes::serialize(value, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 32], D::Error> {
        let value = String::deserialize(deserializer)?;
        let data = Hex::decode(&value).map_err(de::Error::custom)?;
        if data.len() != 32 {
            return Err(de::Error::custom(format!("Expected 32 bytes, got {}", data.len())));
        }
        Ok(crate::util::to_arr(&data))
    }
}
