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
//! # Account signing errors

use crate::key::Address;
use std::{error, fmt};

/// Failure to convert an external representation (hex, quantity, length) into a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Not a `0x` prefixed hex string
    InvalidHex,
    /// Decoded value has unexpected length
    InvalidLength(usize),
    /// Not a valid unsigned integer quantity
    InvalidQuantity(String),
    /// Malformed JSON document
    InvalidJson(String),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConversionError::InvalidHex => write!(f, "Invalid hex value, expected 0x prefixed hex"),
            ConversionError::InvalidLength(len) => write!(f, "Invalid length: {}", len),
            ConversionError::InvalidQuantity(value) => write!(f, "Invalid quantity: {}", value),
            ConversionError::InvalidJson(msg) => write!(f, "Invalid JSON: {}", msg),
        }
    }
}

impl error::Error for ConversionError {}

impl From<hex::FromHexError> for ConversionError {
    fn from(_: hex::FromHexError) -> Self {
        ConversionError::InvalidHex
    }
}

/// Errors of the account, signing and verification operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// Malformed or out of range private key
    InvalidKey,
    /// Required transaction or message field is missing or malformed
    InvalidPayload(String),
    /// Internal failure of signing arithmetic
    SigningError(String),
    /// Signature fields can't be resolved to a public key
    RecoveryError(String),
    /// Address recovered from a fresh signature is not the owner of the key
    SignatureMismatch {
        /// Address of the signing account
        expected: Address,
        /// Address recovered from the signature
        actual: Address,
    },
    /// Input encoding rejected before it reached the signing logic
    Conversion(ConversionError),
    /// OS random source is unavailable
    NoEntropy,
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AccountError::InvalidKey => write!(f, "Invalid private key"),
            AccountError::InvalidPayload(msg) => write!(f, "Invalid payload: {}", msg),
            AccountError::SigningError(msg) => write!(f, "Signing failed: {}", msg),
            AccountError::RecoveryError(msg) => write!(f, "Can't recover signer: {}", msg),
            AccountError::SignatureMismatch { expected, actual } => write!(
                f,
                "Invalid signature, signed by {} instead of {}",
                actual, expected
            ),
            AccountError::Conversion(err) => write!(f, "Conversion error: {}", err),
            AccountError::NoEntropy => write!(f, "Random source is not available"),
        }
    }
}

impl error::Error for AccountError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            AccountError::Conversion(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConversionError> for AccountError {
    fn from(err: ConversionError) -> Self {
        AccountError::Conversion(err)
    }
}

impl From<hex::FromHexError> for AccountError {
    fn from(err: hex::FromHexError) -> Self {
        AccountError::Conversion(ConversionError::from(err))
    }
}

impl From<rlp::DecoderError> for AccountError {
    fn from(err: rlp::DecoderError) -> Self {
        AccountError::InvalidPayload(format!("RLP: {}", err))
    }
}

impl From<secp256k1::Error> for AccountError {
    fn from(err: secp256k1::Error) -> Self {
        AccountError::SigningError(err.to_string())
    }
}

impl From<rand::Error> for AccountError {
    fn from(_: rand::Error) -> Self {
        AccountError::NoEntropy
    }
}
