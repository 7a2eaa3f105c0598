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
extern crate cfx_account as cfx;
#[macro_use]
extern crate bencher;

use bencher::Bencher;
use cfx::{recover_address, Account, Signable, TransactionOptions};
use std::str::FromStr;

const KEY: &str = "0x0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

fn transfer() -> TransactionOptions {
    TransactionOptions::from_json(
        r#"{"nonce": 1, "gasPrice": 1, "gas": 21000, "storageLimit": 0, "epochHeight": 100,
            "to": "0x3eaf0b987b49c4d782ee134fdc1243fd0ccdfdd3", "value": "0xde0b6b3a7640000"}"#,
    )
    .unwrap()
}

fn bench_random_account(b: &mut Bencher) {
    b.iter(|| Account::random(Some(&b"bench"[..])));
}

fn bench_sign_transaction(b: &mut Bencher) {
    let account = Account::from_str(KEY).unwrap();
    let options = transfer();

    b.iter(|| account.sign_transaction(options.clone()));
}

fn bench_sign_message(b: &mut Bencher) {
    let account = Account::from_str(KEY).unwrap();

    b.iter(|| account.sign_message("Hello World"));
}

fn bench_recover_address(b: &mut Bencher) {
    let account = Account::from_str(KEY).unwrap();
    let signed = account.sign_transaction(transfer()).unwrap();
    let hash = signed.payload().hash_to_sign();

    b.iter(|| recover_address(&hash, signed.signature()));
}

benchmark_group!(
    benches,
    bench_random_account,
    bench_sign_transaction,
    bench_sign_message,
    bench_recover_address,
);
benchmark_main!(benches);
