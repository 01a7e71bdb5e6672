// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::collections::{BTreeMap, HashMap};

use super::{init_signing_test, reference_credential, TIMESTAMP};
use aksign_query::{sign_url, ParameterSet, SignOptions, SigningResult};
use pretty_assertions::assert_eq;

fn sign_with(params: ParameterSet) -> SigningResult {
    sign_url(
        "POST",
        "https://api.example.com:8080/base",
        "/v1/users",
        &reference_credential(),
        params,
        SignOptions::new().with_expires(3600).with_timestamp(TIMESTAMP),
    )
    .expect("request must be signed")
}

#[test]
fn test_sign_is_deterministic() {
    init_signing_test();

    let params = ParameterSet::new().with("page", 1).with("size", 20);
    let first = sign_with(params.clone());
    let second = sign_with(params);

    assert_eq!(first.signed_path, second.signed_path);
    assert_eq!(first.signature, second.signature);
}

#[test]
fn test_insertion_order_does_not_matter() {
    init_signing_test();

    let pairs = [
        ("zeta", "last"),
        ("alpha", "first"),
        ("Mid", "upper"),
        ("a b", "space"),
        ("a!", "bang"),
        ("路径", "/中文/"),
    ];

    let forward: ParameterSet = pairs.iter().copied().collect();
    let backward: ParameterSet = pairs.iter().rev().copied().collect();
    let from_hash: ParameterSet = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<HashMap<_, _>>()
        .into();
    let from_btree: ParameterSet = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<BTreeMap<_, _>>()
        .into();

    let expected = sign_with(forward);
    assert_eq!(sign_with(backward), expected);
    assert_eq!(sign_with(from_hash), expected);
    assert_eq!(sign_with(from_btree), expected);
}

#[test]
fn test_query_layout() {
    init_signing_test();

    let result = sign_with(
        ParameterSet::new()
            .with("zeta", "a&b=c")
            .with("a b", "1")
            .with("a!", "2"),
    );

    let (path, query) = result
        .signed_path
        .split_once('?')
        .expect("signed path must carry a query");
    assert_eq!(path, "/v1/users");

    let keys: Vec<&str> = query
        .split('&')
        .map(|pair| pair.split_once('=').map(|(k, _)| k).unwrap_or(pair))
        .collect();
    assert_eq!(
        keys,
        vec![
            "AccessKeyId",
            "Expires",
            "Timestamp",
            "a%20b",
            "a!",
            "zeta",
            "Signature"
        ]
    );
    assert!(query.contains("zeta=a%26b%3Dc"));
    assert!(!query.ends_with('&'));
}

#[test]
fn test_reserved_keys_are_overwritten() {
    init_signing_test();

    let spoofed = sign_with(
        ParameterSet::new()
            .with("AccessKeyId", "someone-else")
            .with("Expires", 1)
            .with("Timestamp", "1999-01-01T00:00:00Z"),
    );

    assert_eq!(spoofed, sign_with(ParameterSet::new()));
    assert!(spoofed.signed_path.contains("AccessKeyId=aaaaaaaaaaaaaaa"));
    assert!(spoofed.signed_path.contains("Expires=3600"));
}

#[test]
fn test_secret_key_never_in_output() {
    init_signing_test();

    let result = sign_with(ParameterSet::new().with("q", "search"));
    let secret = reference_credential().secret_key;

    assert!(!result.signed_path.contains(&secret));
    assert!(!result.signature.contains(&secret));
}
