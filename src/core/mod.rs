pub mod ast;
pub mod errors;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use ast::{MethodNode, StatementKind, StatementNode};
pub use errors::{Error, Result, ResultExt};

/// Complexity score of a single method, in discovery order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MethodScore {
    pub name: String,
    pub score: u32,
}

impl MethodScore {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Finalized ranking of the highest-scoring methods of a file.
///
/// Entries are sorted by score descending; equal scores keep discovery order.
/// The list is only ever built by [`crate::ranking::TopKTracker`], so it is
/// read-only once handed out.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct TopKList {
    entries: Vec<MethodScore>,
}

impl TopKList {
    pub(crate) fn from_entries(entries: Vec<MethodScore>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MethodScore] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MethodScore> {
        self.entries.iter()
    }

    pub fn scores(&self) -> Vec<u32> {
        self.entries.iter().map(|m| m.score).collect()
    }
}

impl<'a> IntoIterator for &'a TopKList {
    type Item = &'a MethodScore;
    type IntoIter = std::slice::Iter<'a, MethodScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Outcome of ranking a file's methods.
///
/// A file without methods is reported as `NoMethods`, never as an empty
/// ranking.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RankedMethods {
    NoMethods,
    Ranked { methods: TopKList },
}

impl RankedMethods {
    pub fn is_no_methods(&self) -> bool {
        matches!(self, RankedMethods::NoMethods)
    }

    pub fn methods(&self) -> Option<&TopKList> {
        match self {
            RankedMethods::NoMethods => None,
            RankedMethods::Ranked { methods } => Some(methods),
        }
    }
}

/// Metrics computed for one analyzed file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FileReport {
    pub file_name: String,
    pub path: PathBuf,
    pub method_count: usize,
    /// Share of method names failing the naming rule, scaled to 0–100.
    pub incorrect_name_percentage: f64,
    pub non_conforming_names: Vec<String>,
    pub top_methods: RankedMethods,
}

/// A file that could not be analyzed and was left out of the run.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectReport {
    pub root: PathBuf,
    pub files: Vec<FileReport>,
    pub skipped: Vec<SkippedFile>,
}

impl ProjectReport {
    pub fn total_methods(&self) -> usize {
        self.files.iter().map(|f| f.method_count).sum()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Copy)]
pub enum Language {
    Java,
    Unknown,
}

impl Language {
    pub fn from_extension(ext: &str) -> Self {
        static EXTENSION_MAP: &[(&[&str], Language)] = &[(&["java"], Language::Java)];

        EXTENSION_MAP
            .iter()
            .find(|(exts, _)| exts.contains(&ext))
            .map(|(_, lang)| *lang)
            .unwrap_or(Language::Unknown)
    }

    pub fn from_path(path: &std::path::Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(Language::Unknown)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let display_str = match self {
            Language::Java => "Java",
            Language::Unknown => "Unknown",
        };
        write!(f, "{display_str}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_language_from_path() {
        assert_eq!(Language::from_path(Path::new("src/Cell.java")), Language::Java);
        assert_eq!(Language::from_path(Path::new("README.md")), Language::Unknown);
        assert_eq!(Language::from_path(Path::new("Makefile")), Language::Unknown);
    }

    #[test]
    fn test_ranked_methods_serializes_with_status_tag() {
        let empty = serde_json::to_value(RankedMethods::NoMethods).unwrap();
        assert_eq!(empty, serde_json::json!({ "status": "no_methods" }));

        let ranked = RankedMethods::Ranked {
            methods: TopKList::from_entries(vec![MethodScore::new("updateContent", 3)]),
        };
        let value = serde_json::to_value(ranked).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "status": "ranked",
                "methods": [{ "name": "updateContent", "score": 3 }]
            })
        );
    }
}
