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
//! # Account: a private key with its cached address
//!
//! Signs transactions and messages, then checks that the signer recovered from the fresh
//! signature is the account itself before handing the result out.

use crate::error::AccountError;
use crate::format::Hex;
use crate::key::{Address, PrivateKey};
use crate::payload::{Message, Transaction, TransactionOptions};
use crate::sign::{Signable, Signed};
use std::convert::TryFrom;
use std::{fmt, str::FromStr};

#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    private_key: PrivateKey,
    address: Address,
}

impl Account {
    pub fn new(private_key: PrivateKey) -> Account {
        Account {
            address: private_key.to_address(),
            private_key,
        }
    }

    /// Account for raw private key bytes, see `PrivateKey::try_from`
    pub fn try_from(data: &[u8]) -> Result<Account, AccountError> {
        PrivateKey::try_from(data).map(Account::new)
    }

    /// Account with a new random private key, optionally strengthened with caller entropy
    pub fn random(entropy: Option<&[u8]>) -> Result<Account, AccountError> {
        PrivateKey::random(entropy).map(Account::new)
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Build a transaction from the options, sign it and verify the signer
    pub fn sign_transaction(
        &self,
        options: TransactionOptions,
    ) -> Result<Signed<Transaction>, AccountError> {
        let tx = Transaction::try_from(options)?;
        self.sign_payload(tx)
    }

    /// Sign a plain text message and verify the signer
    pub fn sign_message(&self, message: &str) -> Result<Signed<Message>, AccountError> {
        self.sign_payload(Message::new(message))
    }

    fn sign_payload<P: Signable>(&self, payload: P) -> Result<Signed<P>, AccountError> {
        let hash = payload.hash_to_sign();
        debug!("Sign {} by {}", Hex::encode(hash), self.address);

        let signature = self.private_key.sign_hash(hash)?;
        let signed = payload.apply_signature(signature);
        if let Err(err) = signed.verify(&self.address) {
            error!("Signature check failed for {}: {}", Hex::encode(hash), err);
            return Err(err);
        }
        Ok(signed)
    }
}

impl From<PrivateKey> for Account {
    fn from(private_key: PrivateKey) -> Self {
        Account::new(private_key)
    }
}

impl FromStr for Account {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrivateKey::from_str(s).map(Account::new)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign::Signature;
    use num_bigint::BigUint;

    const KEY: &str = "0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

    fn options() -> TransactionOptions {
        TransactionOptions {
            nonce: Some(0),
            gas_price: Some(BigUint::from(1u32)),
            gas: Some(21000),
            to: Some("0x3eaf0b987b49c4d782ee134fdc1243fd0ccdfdd3".parse().unwrap()),
            value: Some(BigUint::from(1_000_000_000_000_000_000u64)),
            storage_limit: Some(0),
            epoch_height: Some(100),
            chain_id: Some(1029),
            data: None,
        }
    }

    #[test]
    fn should_cache_address() {
        let account = Account::from_str(KEY).unwrap();
        assert_eq!(
            account.address().to_string(),
            "0xfcad0b19bb29d4674531d6f115237e16afce377c"
        );
        assert_eq!(account.address(), account.private_key().to_address());
    }

    #[test]
    fn should_create_from_bytes() {
        let account = Account::from_str(KEY).unwrap();
        let copy = Account::try_from(&account.private_key().to_bytes()).unwrap();
        assert_eq!(copy, account);
    }

    #[test]
    fn should_reject_invalid_keys() {
        assert_eq!(Account::try_from(&[1u8; 31]), Err(AccountError::InvalidKey));
        assert_eq!(Account::try_from(&[1u8; 33]), Err(AccountError::InvalidKey));
        assert_eq!(Account::try_from(&[0u8; 32]), Err(AccountError::InvalidKey));
        assert_eq!(Account::from_str("0x1234"), Err(AccountError::InvalidKey));
    }

    #[test]
    fn should_not_print_key() {
        let account = Account::from_str(KEY).unwrap();
        assert_eq!(account.to_string(), "0xfcad0b19bb29d4674531d6f115237e16afce377c");

        let debug = format!("{:?}", account);
        assert!(debug.contains("fcad0b19bb29d4674531d6f115237e16afce377c"));
        assert!(!debug.contains("0123456789abcdef"));
    }

    #[test]
    fn should_sign_transaction() {
        let account = Account::from_str(KEY).unwrap();
        let signed = account.sign_transaction(options()).unwrap();

        assert_eq!(signed.from().unwrap(), account.address());
        assert_eq!(signed.payload().epoch_height, 100);
        assert!(signed.v() <= 1);

        let again = account.sign_transaction(options()).unwrap();
        assert_eq!(again, signed);
    }

    #[test]
    fn should_fail_on_incomplete_transaction() {
        let account = Account::from_str(KEY).unwrap();
        let options = TransactionOptions {
            epoch_height: None,
            ..options()
        };
        assert_eq!(
            account.sign_transaction(options),
            Err(AccountError::InvalidPayload("epochHeight is required".to_string()))
        );
    }

    #[test]
    fn should_sign_message() {
        let account = Account::from_str(KEY).unwrap();
        let signed = account.sign_message("Hello World").unwrap();

        assert_eq!(signed.payload().as_str(), "Hello World");
        assert_eq!(
            signed.signature().to_string(),
            "0xe6bfbd768a421b9051fe86310f0f1eef9d5df65288b53f54d663f887a5b4bcd6\
             32efb64ccc67d7245545175953e811bc237fd83ab8722d8be0a66e92ec39da81\
             01"
        );
        assert_eq!(signed.from().unwrap(), account.address());
        assert_eq!(signed, account.sign_message("Hello World").unwrap());
    }

    #[test]
    fn should_report_mismatch() {
        let account = Account::from_str(KEY).unwrap();
        let other = Account::random(None).unwrap();
        let signed = other.sign_message("Hello World").unwrap();

        assert_eq!(
            signed.verify(&account.address()),
            Err(AccountError::SignatureMismatch {
                expected: account.address(),
                actual: other.address(),
            })
        );
    }

    #[test]
    fn should_not_verify_foreign_signature() {
        let account = Account::from_str(KEY).unwrap();
        let signed = account.sign_message("Hello World").unwrap();
        let (message, signature) = signed.into_parts();
        let forged = Signature {
            v: signature.v ^ 1,
            ..signature
        };
        assert!(message.apply_signature(forged).verify(&account.address()).is_err());
    }
}
