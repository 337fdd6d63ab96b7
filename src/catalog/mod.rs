pub mod model;
pub mod normalize;

pub use model::{BranchKind, BranchSpec, CourseInfo, ReqSpec};
pub use normalize::normalize_course_code;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file not found: {0}")]
    CatalogNotFound(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Read-only mapping from normalized course code to its catalog record.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: HashMap<String, CourseInfo>,
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CatalogError::CatalogNotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        let courses =
            serde_json::from_str(&contents).map_err(|source| CatalogError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self { courses })
    }

    pub fn from_courses(courses: HashMap<String, CourseInfo>) -> Self {
        Self { courses }
    }

    pub fn get(&self, code: &str) -> Option<&CourseInfo> {
        self.courses.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.courses.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Course codes in stable sorted order, for listing output.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.courses.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}
