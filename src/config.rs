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
//! # Transaction defaults shared by an SDK client
//!
//! Values here fill the transaction options a caller leaves out, see
//! `TransactionOptions::with_defaults`. Nothing is read from the environment.

use crate::{
    chains::ChainId,
    error::ConversionError,
    format::{self, quantity},
};
use num_bigint::BigUint;

/// Transaction defaults applied to incomplete options
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, deserialize_with = "quantity::deserialize_opt_big")]
    pub default_gas_price: Option<BigUint>,

    #[serde(default, deserialize_with = "quantity::deserialize_opt_u64")]
    pub default_gas: Option<u64>,

    #[serde(default, deserialize_with = "quantity::deserialize_opt_u64")]
    pub default_storage_limit: Option<u64>,

    #[serde(default, deserialize_with = "quantity::deserialize_opt_u32")]
    pub default_chain_id: Option<u32>,
}

impl Config {
    pub fn new() -> Config {
        Config::default()
    }

    /// Config which signs for the specified chain
    pub fn for_chain(chain: ChainId) -> Config {
        Config {
            default_chain_id: Some(chain.as_chainid()),
            ..Config::default()
        }
    }

    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Config, ConversionError> {
        format::from_json_object(json.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_be_empty_by_default() {
        let config = Config::new();
        assert!(config.default_gas_price.is_none());
        assert!(config.default_gas.is_none());
        assert!(config.default_storage_limit.is_none());
        assert!(config.default_chain_id.is_none());
    }

    #[test]
    fn should_parse_json() {
        let config = Config::from_json(
            r#"{"defaultGasPrice": "0x64", "defaultGas": 21000, "defaultStorageLimit": "0x0", "defaultChainId": 1029}"#,
        )
        .unwrap();
        assert_eq!(config.default_gas_price, Some(BigUint::from(100u32)));
        assert_eq!(config.default_gas, Some(21000));
        assert_eq!(config.default_storage_limit, Some(0));
        assert_eq!(config.default_chain_id, Some(1029));
    }

    #[test]
    fn should_parse_partial_json() {
        let config = Config::from_json(r#"{"defaultGas": "0x5208"}"#).unwrap();
        assert_eq!(config.default_gas, Some(21000));
        assert!(config.default_chain_id.is_none());
    }

    #[test]
    fn should_reject_invalid_json() {
        assert!(Config::from_json(r#"{"defaultGas": "lots"}"#).is_err());
        assert!(Config::from_json(r#"{"defaultChainId": 5000000000}"#).is_err());
        assert!(Config::from_json("[]").is_err());
        assert!(Config::from_json(r#"["0x64", 21000]"#).is_err());
    }

    #[test]
    fn should_create_for_chain() {
        assert_eq!(Config::for_chain(ChainId::Testnet).default_chain_id, Some(1));
    }
}
