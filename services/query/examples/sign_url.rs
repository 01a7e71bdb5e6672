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

//! Sign a path with credentials taken from the environment.
//!
//! ```shell
//! AKSIGN_ACCESS_KEY_ID=aaaaaaaaaaaaaaa \
//! AKSIGN_SECRET_KEY=bbbbbbbbbbbbbbbbbbbbbbbbbbb \
//! RUST_LOG=debug cargo run --example sign_url
//! ```

use aksign_core::{Context, OsEnv, Result};
use aksign_query::{Config, DefaultCredentialProvider, ParameterSet, SignOptions, Signer};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let ctx = Context::new().with_env(OsEnv);
    let mut config = Config::new().from_env(&ctx)?;
    if config.base_url.is_none() {
        config.base_url = Some("http://www.example.com".to_string());
    }

    let loader = DefaultCredentialProvider::new(Arc::new(config.clone()));
    let signer = Signer::new(ctx, loader, config);

    let result = signer
        .sign(
            "GET",
            "/login",
            ParameterSet::new().with("page", 1),
            SignOptions::new(),
        )
        .await?;

    let output = serde_json::to_string_pretty(&result)
        .map_err(|e| aksign_core::Error::unexpected("failed to serialize result").with_source(e))?;
    println!("{output}");
    Ok(())
}
