//! Fact snapshot types.

use hexarch_core::errors::FactsError;
use hexarch_core::types::BTreeMap;
use serde::{Deserialize, Serialize};

/// Structural facts about a single source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFacts {
    /// Imported module paths, verbatim.
    pub imports: Vec<String>,
    /// Declared struct type names.
    pub structs: Vec<String>,
    /// Declared interface type names.
    pub interfaces: Vec<String>,
    /// Declared functions and methods.
    pub functions: Vec<FunctionFacts>,
    /// Code-generated file (protobuf stubs, mocks, ...).
    pub generated: bool,
}

/// A declared function or method signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionFacts {
    pub name: String,
    pub exported: bool,
    /// Receiver type name; empty for free functions.
    pub receiver: String,
    pub params: Vec<ParamFacts>,
}

/// A single function parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamFacts {
    pub name: String,
    /// Type as written, e.g. `*http.Request` or `[]byte`.
    pub type_name: String,
}

impl FunctionFacts {
    /// A free `main` function: the executable entry point.
    pub fn is_entry_point(&self) -> bool {
        self.name == "main" && self.receiver.is_empty()
    }
}

/// Everything the extractor produced for one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactSnapshot {
    /// Module import-path prefix (e.g. `github.com/acme/shop`).
    pub module_root: String,
    /// Repository-relative file path → facts. Ordered for reproducible runs.
    pub files: BTreeMap<String, FileFacts>,
}

impl FactSnapshot {
    pub fn new(module_root: impl Into<String>) -> Self {
        Self {
            module_root: module_root.into(),
            files: BTreeMap::new(),
        }
    }

    /// Add or replace the facts for one file.
    pub fn with_file(mut self, path: impl Into<String>, facts: FileFacts) -> Self {
        self.files.insert(path.into(), facts);
        self
    }

    /// Decode a snapshot emitted by the extractor as JSON.
    pub fn from_json(json: &str) -> Result<Self, FactsError> {
        let snapshot: FactSnapshot = serde_json::from_str(json)?;
        if snapshot.files.keys().any(|path| path.trim().is_empty()) {
            return Err(FactsError::EmptyPath);
        }
        Ok(snapshot)
    }
}
