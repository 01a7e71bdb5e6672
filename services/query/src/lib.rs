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
//!
//! Builds a canonical signing string out of method, host, path and sorted
//! query parameters, signs it with HMAC-SHA1 and appends the result to the
//! path as the `Signature` parameter:
//!
//! ```text
//! <path>?AccessKeyId=...&Expires=...&Timestamp=...&<params>&Signature=<signature>
//! ```
//!
//! ## Example
//!
//! ```
//! use aksign_query::{sign_url, Credential, ParameterSet, SignOptions};
//!
//! let result = sign_url(
//!     "GET",
//!     "https://api.example.com",
//!     "/v1/users",
//!     &Credential::new("access_key_id", "secret_key"),
//!     ParameterSet::new().with("page", 1),
//!     SignOptions::new().with_expires(3600),
//! )
//! .expect("inputs are valid");
//!
//! assert!(result.signed_path.starts_with("/v1/users?AccessKeyId=access_key_id&Expires=3600"));
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod params;
pub use params::{uri_component_encode, CanonicalQuery, ParameterSet};

mod validate;
pub use validate::{
    extract_host, parse_expires, prepare, validate_expires, validate_method, validate_timestamp,
    SignOptions, TimestampClock, ValidationError,
};

mod sign_request;
pub use sign_request::{sign, string_to_sign, SigningRequest, SigningResult};

mod sign_url;
pub use sign_url::{sign_url, sign_url_async, try_sign_url};

mod signer;
pub use signer::Signer;

mod provide_credential;
pub use provide_credential::*;

mod constants;
pub use constants::{MAX_EXPIRES, MIN_EXPIRES};
