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
//! # Private key for the SECG curve secp256k1

use super::{generator, Address, SECP256K1};
use crate::error::AccountError;
use crate::format::Hex;
use secp256k1::{PublicKey, SecretKey};
use std::{fmt, str::FromStr};

/// Private key length in bytes
pub const PRIVATE_KEY_BYTES: usize = 32;

/// Private key used as x in an ECDSA signature.
///
/// Always a valid scalar: nonzero and less than the curve order.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PrivateKey(SecretKey);

impl PrivateKey {
    /// Try to convert a byte slice into `PrivateKey`.
    ///
    /// # Arguments
    ///
    /// * `data` - A byte slice with `PRIVATE_KEY_BYTES` length
    ///
    /// # Example
    ///
    /// ```
    /// let pk = cfx_account::PrivateKey::try_from(&[0x46u8; cfx_account::PRIVATE_KEY_BYTES]).unwrap();
    /// assert_eq!(pk.to_address().to_string(),
    ///            "0x9d8a62f656a8d1615c1294fd71e9cfb3e4855a4f");
    ///
    /// assert!(cfx_account::PrivateKey::try_from(&[0u8; cfx_account::PRIVATE_KEY_BYTES]).is_err());
    /// ```
    pub fn try_from(data: &[u8]) -> Result<Self, AccountError> {
        if data.len() != PRIVATE_KEY_BYTES {
            return Err(AccountError::InvalidKey);
        }

        SecretKey::from_slice(data)
            .map(PrivateKey)
            .map_err(|_| AccountError::InvalidKey)
    }

    /// Generate a new `PrivateKey` from OS randomness, optionally strengthened with
    /// caller provided `entropy`. See `key::random_key`.
    pub fn random(entropy: Option<&[u8]>) -> Result<Self, AccountError> {
        generator::random_key(entropy)
    }

    /// Uncompressed public key, 64 bytes without the `0x04` tag
    pub fn to_public(&self) -> [u8; 64] {
        let mut buf = [0u8; 64];
        buf.copy_from_slice(&self.public_key().serialize_uncompressed()[1..]);
        buf
    }

    /// Extract `Address` from current private key.
    pub fn to_address(&self) -> Address {
        Address::from(self.public_key())
    }

    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_BYTES] {
        self.0.secret_bytes()
    }

    pub(crate) fn as_secret(&self) -> &SecretKey {
        &self.0
    }

    fn public_key(&self) -> PublicKey {
        PublicKey::from_secret_key(&SECP256K1, &self.0)
    }
}

impl From<SecretKey> for PrivateKey {
    fn from(key: SecretKey) -> Self {
        PrivateKey(key)
    }
}

impl FromStr for PrivateKey {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != PRIVATE_KEY_BYTES * 2 + 2 {
            return Err(AccountError::InvalidKey);
        }

        PrivateKey::try_from(&Hex::decode(s)?)
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Hex::encode(self.to_bytes()))
    }
}

// never print the secret with `{:?}`
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PrivateKey({})", self.to_address())
    }
}
