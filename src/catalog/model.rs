use serde::{Deserialize, Serialize};

/// One course record in the catalog. The scraped dataset uses compact
/// single-letter keys; the verbose spellings are accepted as well.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseInfo {
    #[serde(default, alias = "cid")]
    pub catalog_id: Option<u64>,
    #[serde(alias = "n")]
    pub name: String,
    #[serde(default, alias = "p", alias = "prerequisites")]
    pub prerequisites: Option<ReqSpec>,
}

/// A prerequisite specification: either a plain course reference or a
/// nested AND/OR branch.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ReqSpec {
    Course(String),
    Branch(BranchSpec),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BranchSpec {
    /// Missing or unrecognized kind tags land on `Unknown`, which the
    /// builder treats as a no-op subtree.
    #[serde(default, rename = "t", alias = "type")]
    pub kind: BranchKind,
    #[serde(default, rename = "c", alias = "courses")]
    pub courses: Option<Vec<String>>,
    #[serde(default, rename = "s", alias = "subbranches", alias = "sub-branches")]
    pub subbranches: Option<Vec<BranchSpec>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum BranchKind {
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
    #[default]
    #[serde(other, rename = "UNKNOWN")]
    Unknown,
}

impl BranchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BranchKind::And => "AND",
            BranchKind::Or => "OR",
            BranchKind::Unknown => "UNKNOWN",
        }
    }
}
