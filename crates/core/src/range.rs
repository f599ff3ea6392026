//! StateRange: restartable view over a sorted key range
//!
//! A range scan returns a `StateRange` rather than an open-ended iterator.
//! The range owns an immutable snapshot of the ordered map plus its bounds:
//!
//! - **Finite**: bounded by the snapshot taken when the scan was opened
//! - **Lazy**: entries are visited on demand, nothing is copied up front
//! - **Restartable**: every [`StateRange::iter`] call starts from the first key
//! - **Isolated**: writes made after the scan was opened are not visible

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Arc;

/// Ordered world-state contents
pub type StateMap = BTreeMap<String, Vec<u8>>;

/// Half-open key range `[start, end)` over a state snapshot
///
/// An empty `start` or `end` means unbounded on that side.
#[derive(Debug, Clone)]
pub struct StateRange {
    data: Arc<StateMap>,
    start: Option<String>,
    end: Option<String>,
}

impl StateRange {
    /// Create a range over `data`
    ///
    /// # Arguments
    ///
    /// * `start` - Inclusive lower bound, `""` for unbounded
    /// * `end` - Exclusive upper bound, `""` for unbounded
    pub fn new(data: Arc<StateMap>, start: &str, end: &str) -> Self {
        Self {
            data,
            start: (!start.is_empty()).then(|| start.to_string()),
            end: (!end.is_empty()).then(|| end.to_string()),
        }
    }

    /// Iterate over the range from its first key
    pub fn iter(&self) -> StateRangeIter<'_> {
        if let (Some(start), Some(end)) = (&self.start, &self.end) {
            if start >= end {
                return StateRangeIter { inner: None };
            }
        }

        let lower = match &self.start {
            Some(s) => Bound::Included(s.as_str()),
            None => Bound::Unbounded,
        };
        let upper = match &self.end {
            Some(e) => Bound::Excluded(e.as_str()),
            None => Bound::Unbounded,
        };

        StateRangeIter {
            inner: Some(self.data.range::<str, _>((lower, upper))),
        }
    }

    /// Number of entries in the range
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check if the range holds no entries
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Collect the keys in range order
    pub fn keys(&self) -> Vec<String> {
        self.iter().map(|(k, _)| k.to_string()).collect()
    }
}

impl<'a> IntoIterator for &'a StateRange {
    type Item = (&'a str, &'a [u8]);
    type IntoIter = StateRangeIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`StateRange`], yielding `(key, value)` in key order
pub struct StateRangeIter<'a> {
    inner: Option<btree_map::Range<'a, String, Vec<u8>>>,
}

impl<'a> Iterator for StateRangeIter<'a> {
    type Item = (&'a str, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .as_mut()?
            .next()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}
