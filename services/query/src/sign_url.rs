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

use aksign_core::utils::Redact;
use aksign_core::Result;
use log::{debug, error};

use crate::credential::Credential;
use crate::params::ParameterSet;
use crate::sign_request::{sign, SigningResult};
use crate::validate::{prepare, SignOptions};

/// Validate inputs and sign, returning a descriptive error on invalid input.
///
/// `sign_url` and `sign_url_async` both delegate here.
pub fn try_sign_url(
    method: &str,
    base_url: &str,
    path: &str,
    credential: &Credential,
    params: ParameterSet,
    options: SignOptions,
) -> Result<SigningResult> {
    debug!(
        "sign url: method={method}, base_url={base_url}, path={path}, access_key_id={}, secret_key={}, params={params:?}, options={options:?}",
        credential.access_key_id,
        Redact::from(&credential.secret_key),
    );

    let req = prepare(method, base_url, path, credential, params, &options)?;
    Ok(sign(&req))
}

/// Sign url synchronously.
///
/// Returns `None` if any input is invalid, the cause is logged at error level.
///
/// ```
/// use aksign_query::{sign_url, Credential, ParameterSet, SignOptions};
///
/// let result = sign_url(
///     "GET",
///     "http://www.example.com",
///     "/login",
///     &Credential::new("aaaaaaaaaaaaaaa", "bbbbbbbbbbbbbbbbbbbbbbbbbbb"),
///     ParameterSet::new(),
///     SignOptions::new().with_timestamp("2022-11-03T23:39:35Z"),
/// )
/// .expect("inputs are valid");
///
/// assert_eq!(result.signature, "Dk6HEzcqSch1lY9%2BFW0H8bRGGtA%3D");
/// ```
pub fn sign_url(
    method: &str,
    base_url: &str,
    path: &str,
    credential: &Credential,
    params: ParameterSet,
    options: SignOptions,
) -> Option<SigningResult> {
    match try_sign_url(method, base_url, path, credential, params, options) {
        Ok(result) => Some(result),
        Err(err) => {
            error!("sign url failed: {err}");
            None
        }
    }
}

/// Sign url for async callers.
///
/// Performs the same computation as [`sign_url`] and resolves immediately.
pub async fn sign_url_async(
    method: &str,
    base_url: &str,
    path: &str,
    credential: &Credential,
    params: ParameterSet,
    options: SignOptions,
) -> Result<SigningResult> {
    try_sign_url(method, base_url, path, credential, params, options)
}
