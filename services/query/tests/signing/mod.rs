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

mod canonical;
mod explicit_signature;
mod known_vector;
mod validation;
mod verify;

use aksign_query::Credential;

pub const TIMESTAMP: &str = "2022-11-03T23:39:35Z";

/// Credential of the reference request.
pub fn reference_credential() -> Credential {
    Credential::new("aaaaaaaaaaaaaaa", "bbbbbbbbbbbbbbbbbbbbbbbbbbb")
}

/// Initialize test environment
pub fn init_signing_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}
