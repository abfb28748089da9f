//! Paged list envelope.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// PostGrid's paged list response: `{object, limit, skip, totalCount, data}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List<T> {
    /// Always `list`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub object: String,

    /// Page size requested.
    #[serde(default, deserialize_with = "null_as_default")]
    pub limit: u32,

    /// Number of records skipped.
    #[serde(default, deserialize_with = "null_as_default")]
    pub skip: u32,

    /// Total number of records available.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: u64,

    /// Records in this page.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> List<T> {
    /// Returns true if more records exist past this page.
    #[must_use]
    pub fn has_more(&self) -> bool {
        u64::from(self.skip).saturating_add(self.data.len() as u64) < self.total_count
    }

    /// Returns the `skip` value for the next page.
    #[must_use]
    pub fn next_skip(&self) -> u32 {
        let len = u32::try_from(self.data.len()).unwrap_or(u32::MAX);
        self.skip.saturating_add(len)
    }

    /// Returns the number of records in this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
