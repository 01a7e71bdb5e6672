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

use std::sync::{Arc, Mutex};

use aksign_core::{Context, Error, ProvideCredential, Result, SigningCredential};

use crate::config::Config;
use crate::credential::Credential;
use crate::params::ParameterSet;
use crate::sign_request::SigningResult;
use crate::sign_url::try_sign_url;
use crate::validate::SignOptions;

/// Signer signs paths against a configured base url with a loaded credential.
///
/// The credential is loaded on first use and reused while it stays valid.
#[derive(Clone, Debug)]
pub struct Signer {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = Credential>>,
    config: Arc<Config>,
    credential: Arc<Mutex<Option<Credential>>>,
}

impl Signer {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = Credential>,
        config: Config,
    ) -> Self {
        Self {
            ctx,
            loader: Arc::new(loader),
            config: Arc::new(config),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Sign the path.
    ///
    /// `expires` falls back to the config when unset in `options`, the
    /// timestamp clock always comes from the config.
    pub async fn sign(
        &self,
        method: &str,
        path: &str,
        params: ParameterSet,
        mut options: SignOptions,
    ) -> Result<SigningResult> {
        let base_url = self
            .config
            .base_url
            .as_deref()
            .ok_or_else(|| Error::config_invalid("base_url is required for signing"))?;
        let cred = self.credential().await?;

        if options.expires.is_none() {
            options.expires = self.config.expires;
        }
        options.clock = self.config.clock;

        try_sign_url(method, base_url, path, &cred, params, options)
    }

    async fn credential(&self) -> Result<Credential> {
        let cached = self.credential.lock().expect("lock poisoned").clone();
        if let Some(cred) = cached.filter(|c| c.is_valid()) {
            return Ok(cred);
        }

        let cred = self
            .loader
            .provide_credential(&self.ctx)
            .await?
            .filter(|c| c.is_valid())
            .ok_or_else(|| Error::credential_invalid("no valid credential found"))?;
        *self.credential.lock().expect("lock poisoned") = Some(cred.clone());
        Ok(cred)
    }
}
