use std::fmt;

use serde::{Deserialize, Serialize};

/// How strictly a header's `previous_hash` is checked against its
/// predecessor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkagePolicy {
    /// Any `previous_hash` is accepted and stored as given.
    #[default]
    Informational,

    /// When header `n - 1` is committed, header `n` must name its
    /// `current_hash`. A missing predecessor is not an error.
    Enforced,
}

impl fmt::Display for LinkagePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkagePolicy::Informational => f.write_str("informational"),
            LinkagePolicy::Enforced => f.write_str("enforced"),
        }
    }
}
