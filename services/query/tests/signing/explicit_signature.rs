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

use super::{init_signing_test, reference_credential, TIMESTAMP};
use aksign_query::{sign_url, ParameterSet, SignOptions};
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case("Dk6HEzcqSch1lY9%2BFW0H8bRGGtA%3D"; "reference signature")]
#[test_case("anything"; "arbitrary")]
#[test_case("not+encoded/="; "unencoded value kept as is")]
#[test_case(""; "empty")]
fn test_explicit_signature_is_appended(signature: &str) {
    init_signing_test();

    let result = sign_url(
        "GET",
        "http://www.example.com",
        "/login",
        &reference_credential(),
        ParameterSet::new().with("page", 3),
        SignOptions::new()
            .with_timestamp(TIMESTAMP)
            .with_signature(signature),
    )
    .expect("request must be signed");

    assert!(
        result
            .signed_path
            .ends_with(&format!("&Signature={signature}")),
        "{}",
        result.signed_path
    );
    assert_eq!(result.signature, signature);
}

#[test]
fn test_explicit_reference_signature_matches_computed() {
    init_signing_test();

    let options = SignOptions::new().with_timestamp(TIMESTAMP);
    let computed = sign_url(
        "GET",
        "http://www.example.com",
        "/login",
        &reference_credential(),
        ParameterSet::new(),
        options.clone(),
    )
    .expect("request must be signed");
    let replayed = sign_url(
        "GET",
        "http://www.example.com",
        "/login",
        &reference_credential(),
        ParameterSet::new(),
        options.with_signature(computed.signature.clone()),
    )
    .expect("request must be signed");

    assert_eq!(replayed, computed);
}
