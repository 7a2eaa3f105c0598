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
use crate::error::ConversionError;
use std::str::FromStr;

/// Chain Id Reference
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ChainId {
    /// Conflux Mainnet (Tethys)
    Mainnet,
    /// Conflux Testnet
    Testnet,
    Custom(u32),
}

impl ChainId {
    pub fn as_chainid(&self) -> u32 {
        match self {
            ChainId::Mainnet => 1029,
            ChainId::Testnet => 1,
            ChainId::Custom(id) => *id,
        }
    }

    pub fn get_code(&self) -> String {
        match self {
            ChainId::Mainnet => "mainnet".to_string(),
            ChainId::Testnet => "testnet".to_string(),
            ChainId::Custom(id) => id.to_string(),
        }
    }
}

impl From<u32> for ChainId {
    fn from(id: u32) -> Self {
        match id {
            1029 => ChainId::Mainnet,
            1 => ChainId::Testnet,
            _ => ChainId::Custom(id),
        }
    }
}

impl FromStr for ChainId {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "cfx" => Ok(ChainId::Mainnet),
            "testnet" | "cfxtest" => Ok(ChainId::Testnet),
            other => other
                .parse::<u32>()
                .map(ChainId::from)
                .map_err(|_| ConversionError::InvalidQuantity(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!(ChainId::from_str("mainnet").unwrap(), ChainId::Mainnet);
        assert_eq!(ChainId::from_str("TESTNET").unwrap(), ChainId::Testnet);
        assert_eq!(ChainId::from_str("cfx").unwrap(), ChainId::Mainnet);
    }

    #[test]
    fn parse_numbers() {
        assert_eq!(ChainId::from_str("1029").unwrap(), ChainId::Mainnet);
        assert_eq!(ChainId::from_str("1").unwrap(), ChainId::Testnet);
        assert_eq!(ChainId::from_str("8888").unwrap(), ChainId::Custom(8888));
        assert!(ChainId::from_str("ropsten").is_err());
    }

    #[test]
    fn id_round_trip() {
        for chain in [ChainId::Mainnet, ChainId::Testnet, ChainId::Custom(0)] {
            assert_eq!(ChainId::from(chain.as_chainid()), chain);
        }
        assert_eq!(ChainId::Custom(0).get_code(), "0");
    }
}
