//! RefType - Kind of git reference touched by create/delete events

use serde::{Deserialize, Serialize};

const REFS_HEADS: &str = "refs/heads/";
const REFS_TAGS: &str = "refs/tags/";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RefType {
    Branch,
    Tag,
}

impl std::fmt::Display for RefType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefType::Branch => write!(f, "branch"),
            RefType::Tag => write!(f, "tag"),
        }
    }
}

/// Short name of a branch or tag reference
///
/// Other references are returned unchanged.
pub fn ref_short_name(reference: &str) -> &str {
    reference
        .strip_prefix(REFS_HEADS)
        .or_else(|| reference.strip_prefix(REFS_TAGS))
        .unwrap_or(reference)
}
