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

//! AK/SK query string signer.

use aksign_core::hash::base64_hmac_sha1;
use http::Method;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::credential::Credential;
use crate::params::{uri_component_encode, CanonicalQuery, ParameterSet};

/// SigningRequest carries validated inputs of one signing call.
///
/// Build it with [`prepare`](crate::prepare) so that every field satisfies
/// the signer's constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningRequest {
    /// HTTP method, the first element of the string to sign.
    pub method: Method,
    /// Bare authority of the base url.
    pub host: String,
    /// Request path, also the prefix of the signed path.
    pub path: String,
    /// Credential used to sign.
    pub credential: Credential,
    /// Caller parameters, reserved keys excluded.
    pub params: ParameterSet,
    /// Validity window in seconds.
    pub expires: u64,
    /// Signing timestamp in `yyyy-MM-ddTHH:mm:ssZ`.
    pub timestamp: String,
    /// Pre-computed, already encoded signature.
    pub signature: Option<String>,
}

/// SigningResult is the output of a signing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningResult {
    /// Path as passed in.
    pub original_path: String,
    /// Path followed by the signed query string.
    pub signed_path: String,
    /// Validity window in seconds.
    pub expires: u64,
    /// Signing timestamp in `yyyy-MM-ddTHH:mm:ssZ`.
    pub timestamp: String,
    /// Percent-encoded signature carried in the `Signature` parameter.
    pub signature: String,
}

impl SigningRequest {
    /// Parameters with `AccessKeyId`, `Expires` and `Timestamp` applied.
    ///
    /// Reserved keys overwrite caller values of the same name.
    fn signed_params(&self) -> ParameterSet {
        let mut params = self.params.clone();
        params.insert(ACCESS_KEY_ID, &self.credential.access_key_id);
        params.insert(EXPIRES, self.expires);
        params.insert(TIMESTAMP, &self.timestamp);
        params
    }
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// METHOD + HOST + PATH + "?" + CanonicalizedQuery
/// ```
///
/// `CanonicalizedQuery` contains caller parameters plus `AccessKeyId`,
/// `Expires` and `Timestamp`, sorted by raw key and percent-encoded.
pub fn string_to_sign(req: &SigningRequest) -> String {
    let query = CanonicalQuery::build(&req.signed_params());
    build_string_to_sign(req, &query)
}

fn build_string_to_sign(req: &SigningRequest, query: &CanonicalQuery) -> String {
    format!("{}{}{}?{}", req.method.as_str(), req.host, req.path, query)
}

/// Sign the request.
///
/// Without a pre-computed signature the signature is
/// `uri_encode(base64(hmac_sha1(secret_key, string_to_sign)))` and gets
/// appended as the last parameter. A pre-computed signature is trusted as-is.
pub fn sign(req: &SigningRequest) -> SigningResult {
    let mut query = CanonicalQuery::build(&req.signed_params());

    let (signed_path, signature) = match &req.signature {
        None => {
            let s = build_string_to_sign(req, &query);
            debug!("string to sign: {}", &s);

            let signature = uri_component_encode(&base64_hmac_sha1(
                req.credential.secret_key.as_bytes(),
                s.as_bytes(),
            ));
            (
                format!("{}?{}&{}={}", req.path, query, SIGNATURE, signature),
                signature,
            )
        }
        Some(signature) => {
            query.set_encoded(SIGNATURE, signature);
            (format!("{}?{}", req.path, query), signature.clone())
        }
    };

    let result = SigningResult {
        original_path: req.path.clone(),
        signed_path,
        expires: req.expires,
        timestamp: req.timestamp.clone(),
        signature,
    };
    debug!("signing result: {:?}", &result);
    result
}
