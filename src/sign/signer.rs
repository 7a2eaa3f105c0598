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
use super::{Signable, Signature};
use crate::error::AccountError;
use crate::key::{Address, PrivateKey, SECP256K1};
use crate::util::{to_arr, KECCAK256_BYTES};
use secp256k1::ecdsa::{RecoverableSignature, RecoveryId, Signature as EcdsaSignature};
use secp256k1::Message as SecpMessage;

impl PrivateKey {
    /// Sign the canonical hash of a payload
    pub fn sign<P: Signable + ?Sized>(&self, payload: &P) -> Result<Signature, AccountError> {
        self.sign_hash(payload.hash_to_sign())
    }

    /// Sign hash from message (Keccak-256). Produced `s` is always in the lower half of
    /// the curve order, and `v` is the recovery id (0 or 1).
    pub fn sign_hash(&self, hash: [u8; KECCAK256_BYTES]) -> Result<Signature, AccountError> {
        let msg = SecpMessage::from_slice(&hash)?;

        let signed = SECP256K1.sign_ecdsa_recoverable(&msg, self.as_secret());
        let (rid, compact) = signed.serialize_compact();

        to_low_s(rid, &compact)
    }
}

/// Build a `Signature` from a compact `r ‖ s`, moving `s` into the lower half of the
/// curve order
fn to_low_s(rid: RecoveryId, compact: &[u8; 64]) -> Result<Signature, AccountError> {
    let mut standard = EcdsaSignature::from_compact(compact)?;
    standard.normalize_s();
    let normalized = standard.serialize_compact();

    let mut v = rid.to_i32();
    if normalized[32..] != compact[32..] {
        // negating s mirrors the point R, so the parity bit of the recovery id flips
        v ^= 1;
    }
    if !(0..=1).contains(&v) {
        return Err(AccountError::SigningError(format!("Unexpected recovery id {}", v)));
    }

    Ok(Signature {
        r: to_arr(&normalized[0..32]),
        s: to_arr(&normalized[32..64]),
        v: v as u8,
    })
}

/// Recover the address which produced `signature` over `hash`
pub fn recover_address(
    hash: &[u8; KECCAK256_BYTES],
    signature: &Signature,
) -> Result<Address, AccountError> {
    signature.check_range()?;

    let msg = SecpMessage::from_slice(hash)
        .map_err(|e| AccountError::RecoveryError(e.to_string()))?;
    let rid = RecoveryId::from_i32(signature.v as i32)
        .map_err(|e| AccountError::RecoveryError(e.to_string()))?;

    let mut compact = [0u8; 64];
    compact[0..32].copy_from_slice(&signature.r);
    compact[32..64].copy_from_slice(&signature.s);
    let recoverable = RecoverableSignature::from_compact(&compact, rid)
        .map_err(|e| AccountError::RecoveryError(e.to_string()))?;

    let public = SECP256K1
        .recover_ecdsa(&msg, &recoverable)
        .map_err(|e| AccountError::RecoveryError(e.to_string()))?;

    Ok(Address::from(public))
}
