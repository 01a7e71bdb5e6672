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

use std::fmt::{Debug, Formatter};

use aksign_core::{utils::Redact, Context, Error, Result};

use crate::constants::*;
use crate::validate::{parse_expires, TimestampClock};

/// Config carries all the configuration for AK/SK query signing.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AKSIGN_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AKSIGN_SECRET_KEY`]
    pub secret_key: Option<String>,
    /// `base_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AKSIGN_BASE_URL`]
    pub base_url: Option<String>,
    /// `expires` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AKSIGN_EXPIRES`]
    ///
    /// Falls back to 86400 seconds when unset.
    pub expires: Option<u64>,
    /// Clock used to generate timestamps, defaults to UTC.
    pub clock: TimestampClock,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set access_key_id
    pub fn with_access_key_id(mut self, access_key_id: impl Into<String>) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self
    }

    /// Set secret_key
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Set base_url
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set expires in seconds
    pub fn with_expires(mut self, expires: u64) -> Self {
        self.expires = Some(expires);
        self
    }

    /// Set timestamp clock
    pub fn with_clock(mut self, clock: TimestampClock) -> Self {
        self.clock = clock;
        self
    }

    /// Load config from env.
    ///
    /// Returns an error if [`AKSIGN_EXPIRES`] is set but is not a valid expiry.
    pub fn from_env(mut self, ctx: &Context) -> Result<Self> {
        if let Some(v) = ctx.env_var(AKSIGN_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AKSIGN_SECRET_KEY) {
            self.secret_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(AKSIGN_BASE_URL) {
            self.base_url.get_or_insert(v);
        }
        if self.expires.is_none() {
            if let Some(v) = ctx.env_var(AKSIGN_EXPIRES) {
                let expires = parse_expires(&v).map_err(|e| {
                    Error::config_invalid(format!("env {AKSIGN_EXPIRES} is invalid: {e}"))
                        .with_source(e)
                })?;
                self.expires = Some(expires);
            }
        }

        Ok(self)
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &self.access_key_id)
            .field("secret_key", &self.secret_key.as_ref().map(Redact::from))
            .field("base_url", &self.base_url)
            .field("expires", &self.expires)
            .field("clock", &self.clock)
            .finish()
    }
}
