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
//! # Random private key generator
//!
//! Caller entropy is mixed with fresh random bytes on every call, so the same entropy
//! never produces the same key twice.

use super::PrivateKey;
use crate::error::AccountError;
use crate::util::keccak256;
use rand::{rngs::OsRng, CryptoRng, RngCore};

const SEED_BYTES: usize = 32;

/// Generate a new `PrivateKey` at random (`rand::rngs::OsRng`)
pub fn random_key(entropy: Option<&[u8]>) -> Result<PrivateKey, AccountError> {
    random_key_with(&mut OsRng, entropy)
}

/// Generate a new `PrivateKey` with given custom random generator.
///
/// Without `entropy` 32 random bytes are the key. With `entropy` the key is
/// `keccak256(random ‖ keccak256(random ‖ entropy) ‖ random)`, each `random` a separate draw.
/// A candidate outside of the curve scalar range is dropped and generated again.
pub fn random_key_with<R: RngCore + CryptoRng + ?Sized>(
    rng: &mut R,
    entropy: Option<&[u8]>,
) -> Result<PrivateKey, AccountError> {
    loop {
        let candidate = match entropy {
            None => draw(rng)?,
            Some(entropy) => mix(rng, entropy)?,
        };
        match PrivateKey::try_from(&candidate) {
            Ok(key) => return Ok(key),
            Err(_) => debug!("Random candidate is not a valid private key, retry"),
        }
    }
}

fn draw<R: RngCore + ?Sized>(rng: &mut R) -> Result<[u8; SEED_BYTES], AccountError> {
    let mut buf = [0u8; SEED_BYTES];
    rng.try_fill_bytes(&mut buf)?;
    Ok(buf)
}

fn mix<R: RngCore + ?Sized>(rng: &mut R, entropy: &[u8]) -> Result<[u8; SEED_BYTES], AccountError> {
    let mut inner = draw(rng)?.to_vec();
    inner.extend_from_slice(entropy);
    let inner = keccak256(&inner);

    let mut outer = draw(rng)?.to_vec();
    outer.extend_from_slice(&inner);
    outer.extend_from_slice(&draw(rng)?);
    Ok(keccak256(&outer))
}
