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
use super::{recover_address, Signature};
use crate::error::AccountError;
use crate::key::Address;
use crate::util::{keccak256, KECCAK256_BYTES};

///
/// A payload which can be signed: it knows the exact bytes the signature must cover.
pub trait Signable {
    /// Canonical bytes covered by the signature
    fn as_sign_message(&self) -> Vec<u8>;

    /// Keccak-256 of `as_sign_message`, the value an ECDSA signature is made for
    fn hash_to_sign(&self) -> [u8; KECCAK256_BYTES] {
        keccak256(&self.as_sign_message())
    }

    /// Attach signature fields, without verification
    fn apply_signature(self, signature: Signature) -> Signed<Self>
    where
        Self: Sized,
    {
        Signed::new(self, signature)
    }
}

/// A payload together with its signature. The signer (`from`) is always recovered from
/// the signature and the payload, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Signed<P> {
    #[serde(flatten)]
    payload: P,
    #[serde(flatten)]
    signature: Signature,
}

impl<P: Signable> Signed<P> {
    pub fn new(payload: P, signature: Signature) -> Self {
        Signed { payload, signature }
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn r(&self) -> &[u8; 32] {
        &self.signature.r
    }

    pub fn s(&self) -> &[u8; 32] {
        &self.signature.s
    }

    pub fn v(&self) -> u8 {
        self.signature.v
    }

    pub fn hash_to_sign(&self) -> [u8; KECCAK256_BYTES] {
        self.payload.hash_to_sign()
    }

    /// Address of the signer, recovered from the signature over the current payload
    pub fn from(&self) -> Result<Address, AccountError> {
        recover_address(&self.hash_to_sign(), &self.signature)
    }

    /// Ensure the payload is signed by `expected`
    pub fn verify(&self, expected: &Address) -> Result<(), AccountError> {
        let actual = self.from()?;
        if actual != *expected {
            return Err(AccountError::SignatureMismatch {
                expected: *expected,
                actual,
            });
        }
        Ok(())
    }

    pub fn into_parts(self) -> (P, Signature) {
        (self.payload, self.signature)
    }
}
