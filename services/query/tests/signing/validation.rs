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
use aksign_core::ErrorKind;
use aksign_query::{
    sign_url, sign_url_async, Credential, ParameterSet, SignOptions, ValidationError,
};
use test_case::test_case;

fn sign_with_options(options: SignOptions) -> Option<aksign_query::SigningResult> {
    sign_url(
        "GET",
        "http://www.example.com",
        "/login",
        &reference_credential(),
        ParameterSet::new(),
        options,
    )
}

#[test_case(0, false)]
#[test_case(1, true)]
#[test_case(86400, true)]
#[test_case(86401, false)]
fn test_expires_bounds(expires: u64, accepted: bool) {
    init_signing_test();

    let result = sign_with_options(
        SignOptions::new()
            .with_expires(expires)
            .with_timestamp(TIMESTAMP),
    );
    assert_eq!(result.is_some(), accepted);
    if let Some(result) = result {
        assert_eq!(result.expires, expires);
        assert!(result.signed_path.contains(&format!("Expires={expires}&")));
    }
}

#[test_case("2022-11-03T23:39:35Z", true; "valid")]
#[test_case("2022-11-03 23:39:35", false; "missing T and Z")]
#[test_case("2022-13-03T23:39:35Z", true; "pattern does not check the calendar")]
fn test_timestamp_pattern(timestamp: &str, accepted: bool) {
    init_signing_test();

    let result = sign_with_options(SignOptions::new().with_timestamp(timestamp));
    assert_eq!(result.is_some(), accepted);
}

#[test]
fn test_generated_timestamp_matches_pattern() {
    init_signing_test();

    let result = sign_with_options(SignOptions::new()).expect("request must be signed");
    assert!(aksign_query::validate_timestamp(&result.timestamp).is_ok());
}

#[test_case("get", "http://www.example.com", "/login"; "lowercase method")]
#[test_case("FETCH", "http://www.example.com", "/login"; "unknown method")]
#[test_case("GET", "www.example.com", "/login"; "base url without scheme")]
#[test_case("GET", "http://", "/login"; "base url without host")]
#[test_case("GET", "http://www.example.com", ""; "empty path")]
fn test_invalid_request_returns_none(method: &str, base_url: &str, path: &str) {
    init_signing_test();

    let result = sign_url(
        method,
        base_url,
        path,
        &reference_credential(),
        ParameterSet::new(),
        SignOptions::new(),
    );
    assert!(result.is_none());
}

#[test_case(Credential::new("", "sk"), "access_key_id")]
#[test_case(Credential::new("ak", ""), "secret_key")]
#[tokio::test]
async fn test_invalid_credential_rejected(credential: Credential, field: &str) {
    init_signing_test();

    let err = sign_url_async(
        "GET",
        "http://www.example.com",
        "/login",
        &credential,
        ParameterSet::new(),
        SignOptions::new(),
    )
    .await
    .expect_err("empty credential must be rejected");

    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert_eq!(
        err.downcast_source::<ValidationError>().map(|e| e.field()),
        Some(field)
    );
}

#[tokio::test]
async fn test_async_error_names_field_and_constraint() {
    init_signing_test();

    let err = sign_url_async(
        "GET",
        "http://www.example.com",
        "/login",
        &reference_credential(),
        ParameterSet::new(),
        SignOptions::new().with_timestamp("2022/11/03"),
    )
    .await
    .expect_err("malformed timestamp must be rejected");

    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    let message = err.to_string();
    assert!(message.contains("timestamp"), "{message}");
    assert!(message.contains("yyyy-MM-ddTHH:mm:ssZ"), "{message}");
}

#[test]
fn test_duplicate_params_rejected() {
    let err = ParameterSet::try_from_pairs([("id", "1"), ("id", "2")])
        .expect_err("duplicate keys must be rejected");
    assert_eq!(err.field(), "params");
}
