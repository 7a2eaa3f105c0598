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
//! # Account transaction

use super::TransactionOptions;
use crate::error::AccountError;
use crate::format::{bytes, quantity, Hex};
use crate::key::Address;
use crate::sign::{Signable, Signature, Signed};
use crate::util::{keccak256, to_arr, trim_bytes, KECCAK256_BYTES};
use num_bigint::BigUint;
use rlp::{Rlp, RlpStream};
use std::convert::TryFrom;

const TX_FIELDS: usize = 9;

/// Transaction data
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Nonce
    #[serde(serialize_with = "quantity::serialize_u64")]
    pub nonce: u64,

    /// Gas Price, in Drip
    #[serde(serialize_with = "quantity::serialize_big")]
    pub gas_price: BigUint,

    /// Gas Limit
    #[serde(serialize_with = "quantity::serialize_u64")]
    pub gas: u64,

    /// Target address, or None to create contract
    pub to: Option<Address>,

    /// Value transferred with transaction
    #[serde(serialize_with = "quantity::serialize_big")]
    pub value: BigUint,

    /// Storage collateral limit, in bytes
    #[serde(serialize_with = "quantity::serialize_u64")]
    pub storage_limit: u64,

    /// Epoch the transaction is created at
    #[serde(serialize_with = "quantity::serialize_u64")]
    pub epoch_height: u64,

    #[serde(serialize_with = "quantity::serialize_u32")]
    pub chain_id: u32,

    /// Data transferred with transaction
    #[serde(serialize_with = "bytes::serialize")]
    pub data: Vec<u8>,
}

impl Transaction {
    /// RLP packed unsigned transaction
    pub fn to_rlp(&self) -> Vec<u8> {
        let mut rlp = RlpStream::new_list(TX_FIELDS);
        self.append_fields(&mut rlp);
        rlp.out().to_vec()
    }

    fn append_fields(&self, data: &mut RlpStream) {
        data.append(&self.nonce);
        data.append(&trim_bytes(&self.gas_price.to_bytes_be()));
        data.append(&self.gas);

        match self.to {
            Some(addr) => data.append(&addr.0.as_ref()),
            None => data.append_empty_data(),
        };

        data.append(&trim_bytes(&self.value.to_bytes_be()));
        data.append(&self.storage_limit);
        data.append(&self.epoch_height);
        data.append(&self.chain_id);
        if self.data.is_empty() {
            data.append_empty_data();
        } else {
            data.append(&self.data);
        }
    }

    fn from_rlp(rlp: &Rlp) -> Result<Transaction, AccountError> {
        if !rlp.is_list() || rlp.item_count()? != TX_FIELDS {
            return Err(AccountError::InvalidPayload(
                "Expected a list of 9 transaction fields".to_string(),
            ));
        }

        let to = match rlp.at(3)?.data()? {
            [] => None,
            value => Some(Address::try_from(value)?),
        };

        Ok(Transaction {
            nonce: rlp.val_at(0)?,
            gas_price: BigUint::from_bytes_be(rlp.at(1)?.data()?),
            gas: rlp.val_at(2)?,
            to,
            value: BigUint::from_bytes_be(rlp.at(4)?.data()?),
            storage_limit: rlp.val_at(5)?,
            epoch_height: rlp.val_at(6)?,
            chain_id: rlp.val_at(7)?,
            data: rlp.at(8)?.data()?.to_vec(),
        })
    }
}

fn required<T>(value: Option<T>, name: &str) -> Result<T, AccountError> {
    value.ok_or_else(|| AccountError::InvalidPayload(format!("{} is required", name)))
}

impl TryFrom<TransactionOptions> for Transaction {
    type Error = AccountError;

    fn try_from(options: TransactionOptions) -> Result<Self, Self::Error> {
        Ok(Transaction {
            nonce: required(options.nonce, "nonce")?,
            gas_price: required(options.gas_price, "gasPrice")?,
            gas: required(options.gas, "gas")?,
            to: options.to,
            value: options.value.unwrap_or_default(),
            storage_limit: required(options.storage_limit, "storageLimit")?,
            epoch_height: required(options.epoch_height, "epochHeight")?,
            chain_id: options.chain_id.unwrap_or(0),
            data: options.data.unwrap_or_default(),
        })
    }
}

impl Signable for Transaction {
    fn as_sign_message(&self) -> Vec<u8> {
        let rlp = self.to_rlp();
        trace!("Unsigned transaction RLP: {}", Hex::encode(&rlp));
        rlp
    }
}

impl Signed<Transaction> {
    /// Raw signed transaction, RLP `[[fields], v, r, s]`, as submitted to a node
    pub fn encode(&self) -> Vec<u8> {
        let mut rlp = RlpStream::new_list(4);
        rlp.begin_list(TX_FIELDS);
        self.payload().append_fields(&mut rlp);
        rlp.append(&self.v());
        rlp.append(&&self.r()[..]);
        rlp.append(&&self.s()[..]);
        rlp.out().to_vec()
    }

    /// Transaction hash, Keccak-256 of the raw signed transaction
    pub fn hash(&self) -> [u8; KECCAK256_BYTES] {
        keccak256(&self.encode())
    }

    /// Parse a raw signed transaction. Signature is not verified, use `from()` for it.
    pub fn decode(raw: &[u8]) -> Result<Signed<Transaction>, AccountError> {
        let rlp = Rlp::new(raw);
        if !rlp.is_list() || rlp.item_count()? != 4 {
            return Err(AccountError::InvalidPayload(
                "Expected [transaction, v, r, s]".to_string(),
            ));
        }

        let tx = Transaction::from_rlp(&rlp.at(0)?)?;
        let v: u8 = rlp.val_at(1)?;
        let r = rlp.at(2)?.data()?;
        let s = rlp.at(3)?.data()?;
        if r.len() != 32 || s.len() != 32 {
            return Err(AccountError::InvalidPayload(
                "Signature r and s must be 32 bytes".to_string(),
            ));
        }

        let signed = tx.apply_signature(Signature::new(to_arr(r), to_arr(s), v));
        if signed.encode() != raw {
            return Err(AccountError::InvalidPayload(
                "Non canonical transaction encoding".to_string(),
            ));
        }
        Ok(signed)
    }
}
