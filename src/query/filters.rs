//! Filter parameter codec (`key:value,other:value`)

use serde::{Serialize, Serializer};

use super::pairs::{OrderedPairs, segments};

/// Ordered filter key → value mapping carried in the `filters` parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    values: OrderedPairs<String>,
}

impl FilterState {
    /// Decode a `filters` parameter, dropping malformed segments.
    pub fn decode(raw: &str) -> Self {
        let mut state = Self::default();
        for (key, value) in segments(raw) {
            state.values.insert(key, value.to_string());
        }
        state
    }

    pub fn encode(&self) -> String {
        self.values.encode_with(|v| v.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set a filter value; a blank value clears the key.
    pub fn update(&mut self, key: &str, value: &str) {
        if value.trim().is_empty() {
            self.values.remove(key);
        } else {
            self.values.insert(key, value.to_string());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k, v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for FilterState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
