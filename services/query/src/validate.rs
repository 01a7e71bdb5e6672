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

//! Input validation and defaulting performed before signing.

use aksign_core::time::{format_iso8601_with_separator, format_local_with_zulu, now};
use http::Method;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::*;
use crate::credential::Credential;
use crate::params::ParameterSet;
use crate::sign_request::SigningRequest;

/// Methods accepted by the signer, matched case-sensitively.
static SUPPORTED_METHODS: [Method; 9] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::CONNECT,
    Method::OPTIONS,
    Method::TRACE,
    Method::PATCH,
    Method::HEAD,
];

/// `yyyy-MM-ddTHH:mm:ssZ`. Calendar correctness is not checked.
static TIMESTAMP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}Z$")
        .expect("timestamp pattern must be valid")
});

/// ValidationError reports which input was rejected and why.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Method is empty or not a supported uppercase HTTP method.
    #[error("invalid method '{value}': expected one of GET, POST, PUT, DELETE, CONNECT, OPTIONS, TRACE, PATCH, HEAD")]
    InvalidMethod {
        /// The rejected method.
        value: String,
    },
    /// No host could be extracted from the base url.
    #[error("invalid base url '{value}': expected '<scheme>://<host>[/...]'")]
    InvalidHost {
        /// The rejected base url.
        value: String,
    },
    /// Path is empty.
    #[error("invalid path '{value}': path must not be empty")]
    InvalidPath {
        /// The rejected path.
        value: String,
    },
    /// Access key id or secret key is empty.
    #[error("invalid {field}: {field} must not be empty")]
    InvalidCredential {
        /// Either `access_key_id` or `secret_key`.
        field: &'static str,
    },
    /// Parameters are not a key-unique mapping.
    #[error("invalid params: {reason}")]
    InvalidParams {
        /// Why the parameters were rejected.
        reason: String,
    },
    /// Expires is not a number within the allowed window.
    #[error("invalid expires '{value}': expires must be a number between 1 and 86400")]
    InvalidExpiry {
        /// The rejected value.
        value: String,
    },
    /// Timestamp does not match `yyyy-MM-ddTHH:mm:ssZ`.
    #[error("invalid timestamp '{value}': timestamp must match 'yyyy-MM-ddTHH:mm:ssZ'")]
    InvalidTimestamp {
        /// The rejected value.
        value: String,
    },
}

impl ValidationError {
    /// Name of the rejected input.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidMethod { .. } => "method",
            ValidationError::InvalidHost { .. } => "base_url",
            ValidationError::InvalidPath { .. } => "path",
            ValidationError::InvalidCredential { field } => *field,
            ValidationError::InvalidParams { .. } => "params",
            ValidationError::InvalidExpiry { .. } => "expires",
            ValidationError::InvalidTimestamp { .. } => "timestamp",
        }
    }
}

impl From<ValidationError> for aksign_core::Error {
    fn from(err: ValidationError) -> Self {
        let e = match err {
            ValidationError::InvalidCredential { .. } => {
                aksign_core::Error::credential_invalid(err.to_string())
            }
            _ => aksign_core::Error::request_invalid(err.to_string()),
        };
        e.with_source(err)
    }
}

/// TimestampClock decides how a missing timestamp is generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampClock {
    /// Current time in UTC.
    #[default]
    Utc,
    /// Current wall clock time of the local timezone, still suffixed with `Z`.
    ///
    /// Matches signers that format local calendar fields without converting
    /// to UTC. The result only equals UTC on hosts running at offset zero.
    Local,
}

impl TimestampClock {
    /// Render current time as `yyyy-MM-ddTHH:mm:ssZ`.
    pub fn timestamp(&self) -> String {
        match self {
            TimestampClock::Utc => format_iso8601_with_separator(now()),
            TimestampClock::Local => format_local_with_zulu(now()),
        }
    }
}

/// Optional inputs of a signing call.
///
/// - `expires` defaults to 86400 seconds.
/// - `timestamp` defaults to the current time rendered by `clock`.
/// - `signature` defaults to computing the HMAC. A given signature is used
///   as-is and must already be percent-encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignOptions {
    /// Validity window in seconds.
    pub expires: Option<u64>,
    /// Signing timestamp in `yyyy-MM-ddTHH:mm:ssZ`.
    pub timestamp: Option<String>,
    /// Pre-computed signature.
    pub signature: Option<String>,
    /// Clock used when `timestamp` is absent.
    pub clock: TimestampClock,
}

impl SignOptions {
    /// Create options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the validity window in seconds.
    pub fn with_expires(mut self, expires: u64) -> Self {
        self.expires = Some(expires);
        self
    }

    /// Set the signing timestamp.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Set a pre-computed signature.
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    /// Set the clock used to generate missing timestamps.
    pub fn with_clock(mut self, clock: TimestampClock) -> Self {
        self.clock = clock;
        self
    }
}

/// Extract the bare authority of a base url.
///
/// Everything after the first `://` up to the next `/` is the host. Returns
/// `None` if the url has no scheme separator or the host is empty.
///
/// ```
/// use aksign_query::extract_host;
///
/// assert_eq!(extract_host("http://www.example.com/foo"), Some("www.example.com"));
/// assert_eq!(extract_host("www.example.com"), None);
/// ```
pub fn extract_host(base_url: &str) -> Option<&str> {
    let (_, rest) = base_url.split_once("://")?;
    let host = rest.split('/').next().unwrap_or_default();
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// Check method against the supported methods.
pub fn validate_method(method: &str) -> Result<Method, ValidationError> {
    SUPPORTED_METHODS
        .iter()
        .find(|m| m.as_str() == method)
        .cloned()
        .ok_or_else(|| ValidationError::InvalidMethod {
            value: method.to_string(),
        })
}

/// Check expires is within `[MIN_EXPIRES, MAX_EXPIRES]`.
pub fn validate_expires(expires: u64) -> Result<u64, ValidationError> {
    if (MIN_EXPIRES..=MAX_EXPIRES).contains(&expires) {
        Ok(expires)
    } else {
        Err(ValidationError::InvalidExpiry {
            value: expires.to_string(),
        })
    }
}

/// Parse and check expires given as text, for example from env.
pub fn parse_expires(expires: &str) -> Result<u64, ValidationError> {
    let value = expires
        .trim()
        .parse::<u64>()
        .map_err(|_| ValidationError::InvalidExpiry {
            value: expires.to_string(),
        })?;
    validate_expires(value)
}

/// Check timestamp matches `yyyy-MM-ddTHH:mm:ssZ`.
///
/// Only the shape is checked: `2022-13-03T23:39:35Z` is accepted.
pub fn validate_timestamp(timestamp: &str) -> Result<(), ValidationError> {
    if TIMESTAMP_PATTERN.is_match(timestamp) {
        Ok(())
    } else {
        Err(ValidationError::InvalidTimestamp {
            value: timestamp.to_string(),
        })
    }
}

/// Validate all inputs and apply defaults, producing a request ready to sign.
pub fn prepare(
    method: &str,
    base_url: &str,
    path: &str,
    credential: &Credential,
    params: ParameterSet,
    options: &SignOptions,
) -> Result<SigningRequest, ValidationError> {
    let method = validate_method(method)?;

    let host = extract_host(base_url).ok_or_else(|| ValidationError::InvalidHost {
        value: base_url.to_string(),
    })?;

    if path.is_empty() {
        return Err(ValidationError::InvalidPath {
            value: path.to_string(),
        });
    }

    if credential.access_key_id.is_empty() {
        return Err(ValidationError::InvalidCredential {
            field: "access_key_id",
        });
    }
    if credential.secret_key.is_empty() {
        return Err(ValidationError::InvalidCredential {
            field: "secret_key",
        });
    }

    let expires = validate_expires(options.expires.unwrap_or(MAX_EXPIRES))?;

    let timestamp = match &options.timestamp {
        Some(v) => v.clone(),
        None => options.clock.timestamp(),
    };
    validate_timestamp(&timestamp)?;

    Ok(SigningRequest {
        method,
        host: host.to_string(),
        path: path.to_string(),
        credential: credential.clone(),
        params,
        expires,
        timestamp,
        signature: options.signature.clone(),
    })
}
