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

//! Time related utils.

use chrono::Local;
use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Time format for ISO 8601 with separator: "2022-03-13T07:20:04Z"
const ISO8601_WITH_SEPARATOR: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into ISO 8601 with separator in UTC: "2022-03-13T07:20:04Z"
pub fn format_iso8601_with_separator(t: DateTime) -> String {
    t.format(ISO8601_WITH_SEPARATOR).to_string()
}

/// Format time with the wall clock fields of the local timezone, followed by
/// a literal `Z`: "2022-03-13T15:20:04Z" on a UTC+8 host.
///
/// The output carries a `Z` designator without being converted to UTC. Only
/// use it to interoperate with verifiers that expect this rendering.
pub fn format_local_with_zulu(t: DateTime) -> String {
    t.with_timezone(&Local)
        .format(ISO8601_WITH_SEPARATOR)
        .to_string()
}
