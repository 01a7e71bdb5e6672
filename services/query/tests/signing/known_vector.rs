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
use aksign_query::{
    prepare, sign_url, sign_url_async, string_to_sign, ParameterSet, SignOptions, SigningResult,
};
use anyhow::Result;
use pretty_assertions::assert_eq;

#[test]
fn test_reference_string_to_sign() -> Result<()> {
    init_signing_test();

    let req = prepare(
        "GET",
        "http://www.example.com",
        "/login",
        &reference_credential(),
        ParameterSet::new(),
        &SignOptions::new().with_expires(86400).with_timestamp(TIMESTAMP),
    )?;

    assert_eq!(
        string_to_sign(&req),
        "GETwww.example.com/login?AccessKeyId=aaaaaaaaaaaaaaa&Expires=86400&Timestamp=2022-11-03T23%3A39%3A35Z"
    );
    Ok(())
}

#[test]
fn test_reference_signature() {
    init_signing_test();

    let result = sign_url(
        "GET",
        "http://www.example.com",
        "/login",
        &reference_credential(),
        ParameterSet::new(),
        SignOptions::new().with_timestamp(TIMESTAMP),
    )
    .expect("reference request must be signed");

    assert_eq!(
        result,
        SigningResult {
            original_path: "/login".to_string(),
            signed_path: "/login?AccessKeyId=aaaaaaaaaaaaaaa&Expires=86400&Timestamp=2022-11-03T23%3A39%3A35Z&Signature=Dk6HEzcqSch1lY9%2BFW0H8bRGGtA%3D".to_string(),
            expires: 86400,
            timestamp: TIMESTAMP.to_string(),
            signature: "Dk6HEzcqSch1lY9%2BFW0H8bRGGtA%3D".to_string(),
        }
    );
}

#[tokio::test]
async fn test_reference_signature_async() -> Result<()> {
    init_signing_test();

    let result = sign_url_async(
        "GET",
        "http://www.example.com/ignored/path",
        "/login",
        &reference_credential(),
        ParameterSet::new(),
        SignOptions::new().with_timestamp(TIMESTAMP),
    )
    .await?;

    assert_eq!(result.signature, "Dk6HEzcqSch1lY9%2BFW0H8bRGGtA%3D");
    Ok(())
}

#[test]
fn test_result_serializes_to_json() -> Result<()> {
    let result = sign_url(
        "GET",
        "http://www.example.com",
        "/login",
        &reference_credential(),
        ParameterSet::new(),
        SignOptions::new().with_timestamp(TIMESTAMP),
    )
    .expect("reference request must be signed");

    let value = serde_json::to_value(&result)?;
    assert_eq!(value["original_path"], "/login");
    assert_eq!(value["expires"], 86400);
    assert_eq!(value["signature"], "Dk6HEzcqSch1lY9%2BFW0H8bRGGtA%3D");

    let decoded: SigningResult = serde_json::from_value(value)?;
    assert_eq!(decoded, result);
    Ok(())
}
