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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Env values used by the query signer.
pub const AKSIGN_ACCESS_KEY_ID: &str = "AKSIGN_ACCESS_KEY_ID";
pub const AKSIGN_SECRET_KEY: &str = "AKSIGN_SECRET_KEY";
pub const AKSIGN_BASE_URL: &str = "AKSIGN_BASE_URL";
pub const AKSIGN_EXPIRES: &str = "AKSIGN_EXPIRES";

// Reserved query keys.
pub const ACCESS_KEY_ID: &str = "AccessKeyId";
pub const EXPIRES: &str = "Expires";
pub const TIMESTAMP: &str = "Timestamp";
pub const SIGNATURE: &str = "Signature";

/// Upper bound of the signature validity window, in seconds (24 hours).
pub const MAX_EXPIRES: u64 = 86400;
/// Lower bound of the signature validity window, in seconds.
pub const MIN_EXPIRES: u64 = 1;

/// AsciiSet for URI component encoding.
///
/// Alphanumerics and `- _ . ! ~ * ' ( )` are kept, everything else is escaped.
pub static URI_COMPONENT_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');
