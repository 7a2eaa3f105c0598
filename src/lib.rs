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
//! # Conflux account and transaction signing core
//!
//! Derives an address from a private key, signs transactions and plain text messages with
//! it, and verifies that the signer recovered from each signature is the owner of the key.

#[macro_use]
extern crate log;

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate serde_derive;

pub mod account;
pub mod chains;
pub mod config;
pub mod error;
pub mod format;
pub mod key;
pub mod payload;
pub mod sign;
mod util;

pub use self::account::Account;
pub use self::chains::ChainId;
pub use self::config::Config;
pub use self::error::{AccountError, ConversionError};
pub use self::format::Hex;
pub use self::key::{Address, PrivateKey, ADDRESS_BYTES, PRIVATE_KEY_BYTES};
pub use self::payload::{Message, Transaction, TransactionOptions};
pub use self::sign::{recover_address, Signable, Signature, Signed, ECDSA_SIGNATURE_BYTES};
pub use self::util::{keccak256, to_arr, trim_bytes, KECCAK256_BYTES};

#[cfg(test)]
mod tests {
    pub use crate::util::tests::*;
}
