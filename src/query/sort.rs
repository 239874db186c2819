//! Sort parameter codec (`field:asc,other:desc`)

use serde::{Serialize, Serializer};

use super::pairs::{OrderedPairs, segments};

/// Direction of a sorted column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Parse a wire direction. Anything but `asc`/`desc` is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    /// Header glyph for a column sorted in this direction
    pub fn indicator(direction: Option<SortDirection>) -> &'static str {
        match direction {
            Some(SortDirection::Asc) => "↑",
            Some(SortDirection::Desc) => "↓",
            None => "↕",
        }
    }
}

/// Ordered column → direction mapping carried in the `sort` parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    columns: OrderedPairs<SortDirection>,
}

impl SortState {
    /// Decode a `sort` parameter, dropping malformed segments and unknown directions.
    pub fn decode(raw: &str) -> Self {
        let mut state = Self::default();
        for (field, direction) in segments(raw) {
            if let Some(direction) = SortDirection::parse(direction) {
                state.columns.insert(field, direction);
            }
        }
        state
    }

    pub fn encode(&self) -> String {
        self.columns.encode_with(|d| d.as_str())
    }

    pub fn get(&self, field: &str) -> Option<SortDirection> {
        self.columns.get(field).copied()
    }

    pub fn set(&mut self, field: impl Into<String>, direction: SortDirection) {
        self.columns.insert(field, direction);
    }

    pub fn remove(&mut self, field: &str) {
        self.columns.remove(field);
    }

    /// Advance one column through absent → asc → desc → absent.
    pub fn toggle(&mut self, field: &str) {
        match self.get(field) {
            None => self.set(field, SortDirection::Asc),
            Some(SortDirection::Asc) => self.set(field, SortDirection::Desc),
            Some(SortDirection::Desc) => self.remove(field),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, SortDirection)> {
        self.columns.iter().map(|(k, v)| (k, *v))
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Serialize for SortState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(k, v)| (k, v.as_str())))
    }
}
