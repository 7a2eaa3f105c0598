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
//!
//! A plain text message, signed the same way as Ethereum `personal_sign`.
//!
//! See:
//! - https://eips.ethereum.org/EIPS/eip-191
//!

use crate::format::Hex;
use crate::sign::Signable;
use serde::{ser::SerializeStruct, Serialize, Serializer};

const PREFIX: &[u8] = "Ethereum Signed Message:\n".as_bytes();

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    text: String,
}

impl Message {
    pub fn new<S: Into<String>>(text: S) -> Message {
        Message { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::new(text)
    }
}

impl Signable for Message {
    fn as_sign_message(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.push(0x19);
        buf.extend_from_slice(PREFIX);
        buf.extend_from_slice(self.text.len().to_string().as_bytes());
        buf.extend_from_slice(self.text.as_bytes());
        buf
    }
}

/// As `{"message": text, "hash": hash_to_sign}`
impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Message", 2)?;
        state.serialize_field("message", &self.text)?;
        state.serialize_field("hash", &Hex::encode(self.hash_to_sign()))?;
        state.end()
    }
}
