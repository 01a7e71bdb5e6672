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

//! Query parameters and their canonical form.

use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Display, Write};

use percent_encoding::utf8_percent_encode;

use crate::constants::URI_COMPONENT_ENCODE_SET;
use crate::validate::ValidationError;

/// ParameterSet is a key-unique mapping of query parameters to be signed.
///
/// Insertion order carries no meaning: the canonical form always sorts by key.
/// Inserting an existing key overwrites its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    pairs: Vec<(String, String)>,
}

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a parameter set from raw pairs, rejecting repeated keys.
    pub fn try_from_pairs<I, K, V>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        let mut set = Self::new();
        for (k, v) in pairs {
            let k = k.into();
            if set.contains_key(&k) {
                return Err(ValidationError::InvalidParams {
                    reason: format!("duplicate key '{k}'"),
                });
            }
            set.pairs.push((k, v.to_string()));
        }
        Ok(set)
    }

    /// Insert a parameter, returning the previous value of the key if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> Option<String> {
        let key = key.into();
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => Some(std::mem::replace(v, value)),
            None => {
                self.pairs.push((key, value));
                None
            }
        }
    }

    /// Insert a parameter and return self.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Get the value of given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Check if given key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Pairs sorted by the unencoded key.
    fn sorted(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        pairs
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut set = Self::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

impl From<HashMap<String, String>> for ParameterSet {
    fn from(value: HashMap<String, String>) -> Self {
        value.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for ParameterSet {
    fn from(value: BTreeMap<String, String>) -> Self {
        value.into_iter().collect()
    }
}

/// Percent-encode input as an URI component.
pub fn uri_component_encode(s: &str) -> String {
    utf8_percent_encode(s, &URI_COMPONENT_ENCODE_SET).to_string()
}

/// CanonicalQuery is the sorted and encoded form of a [`ParameterSet`].
///
/// Pairs are sorted by their raw keys first and encoded afterwards, so the
/// order never depends on which characters need escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalQuery {
    pairs: Vec<(String, String)>,
}

impl CanonicalQuery {
    /// Build the canonical query of given parameters.
    pub fn build(params: &ParameterSet) -> Self {
        let pairs = params
            .sorted()
            .into_iter()
            .map(|(k, v)| (uri_component_encode(k), uri_component_encode(v)))
            .collect();

        Self { pairs }
    }

    /// Set an already encoded pair.
    ///
    /// An existing key keeps its position, otherwise the pair goes last.
    pub fn set_encoded(&mut self, key: &str, value: &str) {
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.pairs.push((key.to_string(), value.to_string())),
        }
    }

    /// Encoded pairs in canonical order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

impl Display for CanonicalQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (k, v)) in self.pairs.iter().enumerate() {
            if idx > 0 {
                f.write_char('&')?;
            }
            write!(f, "{k}={v}")?;
        }
        Ok(())
    }
}
