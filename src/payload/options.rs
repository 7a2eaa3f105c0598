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
use crate::config::Config;
use crate::error::ConversionError;
use crate::format::{self, bytes, quantity};
use crate::key::Address;
use num_bigint::BigUint;

/// Transaction fields as provided by a caller, before validation.
///
/// Accepted from camelCase JSON, integer quantities as numbers, `0x` hex or decimal strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOptions {
    #[serde(default, deserialize_with = "quantity::deserialize_opt_u64")]
    pub nonce: Option<u64>,

    #[serde(default, deserialize_with = "quantity::deserialize_opt_big")]
    pub gas_price: Option<BigUint>,

    #[serde(default, deserialize_with = "quantity::deserialize_opt_u64")]
    pub gas: Option<u64>,

    /// Target address, or None to create contract
    #[serde(default)]
    pub to: Option<Address>,

    #[serde(default, deserialize_with = "quantity::deserialize_opt_big")]
    pub value: Option<BigUint>,

    #[serde(default, deserialize_with = "quantity::deserialize_opt_u64")]
    pub storage_limit: Option<u64>,

    #[serde(default, deserialize_with = "quantity::deserialize_opt_u64")]
    pub epoch_height: Option<u64>,

    #[serde(default, deserialize_with = "quantity::deserialize_opt_u32")]
    pub chain_id: Option<u32>,

    #[serde(default, deserialize_with = "bytes::deserialize_opt")]
    pub data: Option<Vec<u8>>,
}

impl TransactionOptions {
    pub fn from_json<S: AsRef<str>>(json: S) -> Result<TransactionOptions, ConversionError> {
        format::from_json_object(json.as_ref())
    }

    /// Fill fields left empty by the caller with the configured defaults
    pub fn with_defaults(self, config: &Config) -> TransactionOptions {
        TransactionOptions {
            gas_price: self.gas_price.or_else(|| config.default_gas_price.clone()),
            gas: self.gas.or(config.default_gas),
            storage_limit: self.storage_limit.or(config.default_storage_limit),
            chain_id: self.chain_id.or(config.default_chain_id),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::ChainId;

    #[test]
    fn should_parse_json() {
        let options = TransactionOptions::from_json(
            r#"{
                "nonce": 0,
                "gasPrice": "0x1",
                "gas": 21000,
                "to": "0x3eaf0b987b49c4d782ee134fdc1243fd0ccdfdd3",
                "value": "1000000000000000000",
                "storageLimit": "0x0",
                "epochHeight": "0x10",
                "chainId": 1029,
                "data": "0xa9059cbb"
            }"#,
        )
        .unwrap();

        assert_eq!(options.nonce, Some(0));
        assert_eq!(options.gas_price, Some(BigUint::from(1u32)));
        assert_eq!(options.gas, Some(21000));
        assert_eq!(
            options.to.unwrap().to_string(),
            "0x3eaf0b987b49c4d782ee134fdc1243fd0ccdfdd3"
        );
        assert_eq!(
            options.value,
            Some(BigUint::from(1_000_000_000_000_000_000u64))
        );
        assert_eq!(options.storage_limit, Some(0));
        assert_eq!(options.epoch_height, Some(16));
        assert_eq!(options.chain_id, Some(1029));
        assert_eq!(options.data, Some(vec![0xa9, 0x05, 0x9c, 0xbb]));
    }

    #[test]
    fn should_parse_empty_json() {
        let options = TransactionOptions::from_json("{}").unwrap();
        assert_eq!(options, TransactionOptions::default());

        let options = TransactionOptions::from_json(r#"{"to": null, "data": null}"#).unwrap();
        assert_eq!(options, TransactionOptions::default());
    }

    #[test]
    fn should_reject_invalid_json() {
        assert!(TransactionOptions::from_json(r#"{"nonce": "abc"}"#).is_err());
        assert!(TransactionOptions::from_json(r#"{"to": "0x3eaf"}"#).is_err());
        assert!(TransactionOptions::from_json(r#"{"data": "a9059cbb"}"#).is_err());
        assert!(TransactionOptions::from_json("[]").is_err());
        assert!(TransactionOptions::from_json("[0, \"0x1\", 21000]").is_err());
        assert!(TransactionOptions::from_json("null").is_err());
    }

    #[test]
    fn should_apply_defaults() {
        let config = Config {
            default_gas_price: Some(BigUint::from(100u32)),
            default_gas: Some(21000),
            default_storage_limit: Some(0),
            ..Config::for_chain(ChainId::Mainnet)
        };
        let options = TransactionOptions {
            nonce: Some(1),
            gas: Some(50000),
            ..TransactionOptions::default()
        }
        .with_defaults(&config);

        assert_eq!(options.nonce, Some(1));
        assert_eq!(options.gas, Some(50000));
        assert_eq!(options.gas_price, Some(BigUint::from(100u32)));
        assert_eq!(options.storage_limit, Some(0));
        assert_eq!(options.chain_id, Some(1029));
        assert_eq!(options.epoch_height, None);
    }

    #[test]
    fn should_keep_options_with_empty_config() {
        let options = TransactionOptions {
            nonce: Some(1),
            ..TransactionOptions::default()
        };
        assert_eq!(options.clone().with_defaults(&Config::new()), options);
    }
}
