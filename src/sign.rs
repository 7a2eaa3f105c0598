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
//! # ECDSA signatures using the SECG curve secp256k1

mod signable;
mod signature;
mod signer;

pub use self::signable::{Signable, Signed};
pub use self::signature::{Signature, ECDSA_SIGNATURE_BYTES};
pub use self::signer::recover_address;
