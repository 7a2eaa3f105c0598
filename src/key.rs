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
//! # Key material: private keys, addresses and random key generation

mod address;
mod generator;
mod private_key;

pub use self::address::{Address, ADDRESS_BYTES};
pub use self::generator::{random_key, random_key_with};
pub use self::private_key::{PrivateKey, PRIVATE_KEY_BYTES};

use secp256k1::{All, Secp256k1};

lazy_static! {
    pub(crate) static ref SECP256K1: Secp256k1<All> = Secp256k1::new();
}
