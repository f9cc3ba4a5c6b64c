//! `MemberInfo` — one stored entry together with its occurrence count.

use core::fmt;
use serde::{Deserialize, Serialize};

/// A stored entry and how often it has been added.
///
/// Values are fresh copies built at query time; they do not alias the trie.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberInfo {
    /// The reconstructed entry.
    pub value: String,
    /// Occurrence count at the time of the query. Always greater than zero.
    pub count: i64,
}

impl MemberInfo {
    /// Creates a new member record.
    pub fn new(value: impl Into<String>, count: i64) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

impl fmt::Display for MemberInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.count)
    }
}
