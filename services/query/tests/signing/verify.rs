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

//! A verifier rebuilds the signature from the signed path alone.

use super::{init_signing_test, reference_credential, TIMESTAMP};
use aksign_core::hash::base64_hmac_sha1;
use aksign_query::{sign_url, uri_component_encode, ParameterSet, SignOptions};
use percent_encoding::percent_decode_str;
use pretty_assertions::assert_eq;

/// Split a signed path into path, decoded params and the received signature.
fn parse_signed_path(signed_path: &str) -> (String, ParameterSet, String) {
    let (path, query) = signed_path
        .split_once('?')
        .expect("signed path must carry a query");

    let mut params = ParameterSet::new();
    let mut signature = String::new();
    for pair in query.split('&') {
        let (k, v) = pair.split_once('=').expect("pair must carry a value");
        if k == "Signature" {
            signature = v.to_string();
            continue;
        }
        let k = percent_decode_str(k).decode_utf8_lossy();
        let v = percent_decode_str(v).decode_utf8_lossy();
        params.insert(k.into_owned(), v.into_owned());
    }

    (path.to_string(), params, signature)
}

#[test]
fn test_verifier_rebuilds_signature() {
    init_signing_test();

    let result = sign_url(
        "PUT",
        "https://api.example.com/",
        "/v1/items/42",
        &reference_credential(),
        ParameterSet::new()
            .with("name", "a/b c")
            .with("tags", "x,y")
            .with("emoji", "🦀"),
        SignOptions::new().with_expires(120).with_timestamp(TIMESTAMP),
    )
    .expect("request must be signed");

    let (path, params, received) = parse_signed_path(&result.signed_path);
    assert_eq!(path, "/v1/items/42");
    assert_eq!(params.get("AccessKeyId"), Some("aaaaaaaaaaaaaaa"));
    assert_eq!(params.get("Expires"), Some("120"));
    assert_eq!(params.get("Timestamp"), Some(TIMESTAMP));

    let mut pairs: Vec<(&str, &str)> = params.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    let query = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", uri_component_encode(k), uri_component_encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let string_to_sign = format!("PUTapi.example.com{path}?{query}");
    let expected = uri_component_encode(&base64_hmac_sha1(
        reference_credential().secret_key.as_bytes(),
        string_to_sign.as_bytes(),
    ));

    assert_eq!(received, expected);
    assert_eq!(result.signature, expected);
}
