//! Ordered `key:value` mapping shared by the sort and filter parameters

/// Insertion-ordered mapping with unique keys.
///
/// Re-assigning an existing key replaces its value in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OrderedPairs<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedPairs<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> OrderedPairs<V> {
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Join entries as `key:value` segments separated by commas.
    pub fn encode_with(&self, render: impl Fn(&V) -> &str) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}:{}", k, render(v)))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Split a comma-joined parameter into `(key, value)` segments.
///
/// Segments without a colon or with an empty key or value are skipped. Only
/// the text between the first and second colon is taken as the value.
pub(crate) fn segments(raw: &str) -> impl Iterator<Item = (&str, &str)> {
    raw.split(',').filter_map(|segment| {
        let mut parts = segment.split(':');
        let key = parts.next().filter(|k| !k.is_empty())?;
        let value = parts.next().filter(|v| !v.is_empty())?;
        Some((key, value))
    })
}
