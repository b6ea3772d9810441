//! Import graph construction from per-file facts.
//!
//! Files in one directory merge into one package node. Internal imports
//! (the module root or anything under it) become directed edges; everything
//! else only feeds the node's I/O signals. Reverse edges and stub nodes are
//! derived in a second pass so `imported_by` always mirrors `imports_internal`.

use hexarch_core::types::collections::BTreeMap;
use tracing::debug;

use super::io_signals::{is_external_io_import, is_io_param_type, is_std_io_import};
use super::types::{ImportGraph, PackageNode};
use crate::facts::{FactSnapshot, FileFacts};

/// Accumulates file facts into package nodes.
#[derive(Debug, Clone, Default)]
pub struct ImportGraphBuilder {
    module_root: String,
    nodes: BTreeMap<String, PackageNode>,
    skipped_files: usize,
}

impl ImportGraphBuilder {
    pub fn new(module_root: &str) -> Self {
        Self {
            module_root: normalize_module_root(module_root),
            ..Default::default()
        }
    }

    /// Merge one file's facts into its package node.
    ///
    /// Generated and test files are skipped. Nothing is recorded when the
    /// module root is empty.
    pub fn add_file(&mut self, path: &str, facts: &FileFacts) -> &mut Self {
        if self.module_root.is_empty() {
            return self;
        }
        let path = normalize_file_path(path);
        if facts.generated || is_test_file(&path) {
            self.skipped_files += 1;
            return self;
        }

        let package = package_path(&self.module_root, &path);
        let module_root = &self.module_root;
        let node = self
            .nodes
            .entry(package.clone())
            .or_insert_with(|| PackageNode::new(package.clone()));

        node.files.insert(path);
        node.interface_count += facts.interfaces.len() as u32;
        node.struct_count += facts.structs.len() as u32;

        for import in &facts.imports {
            let import = import.trim().trim_end_matches('/');
            if is_internal_import(module_root, import) {
                if import != package {
                    node.imports_internal.insert(import.to_string());
                }
            } else if is_std_io_import(import) {
                node.uses_std_io = true;
            } else if is_external_io_import(import) {
                node.uses_external_io = true;
            }
        }

        for function in &facts.functions {
            if function.is_entry_point() {
                node.has_entry_point = true;
            }
            if function
                .params
                .iter()
                .any(|param| is_io_param_type(&param.type_name))
            {
                node.has_io_param = true;
            }
        }

        self
    }

    /// Derive reverse edges, create stubs for unanalyzed targets, and freeze.
    pub fn build(self) -> ImportGraph {
        let Self {
            module_root,
            mut nodes,
            skipped_files,
        } = self;

        let edges: Vec<(String, String)> = nodes
            .values()
            .flat_map(|node| {
                node.imports_internal
                    .iter()
                    .map(|target| (node.path.clone(), target.clone()))
            })
            .collect();

        let mut stubs = 0usize;
        for (from, to) in edges {
            let target = nodes.entry(to.clone()).or_insert_with(|| {
                stubs += 1;
                PackageNode::new(to)
            });
            target.imported_by.insert(from);
        }

        debug!(
            module_root = %module_root,
            packages = nodes.len(),
            stubs,
            skipped_files,
            "import graph built"
        );

        ImportGraph { module_root, nodes }
    }
}

impl ImportGraph {
    /// Build a graph for `module_root` from a path → facts mapping.
    ///
    /// An empty module root or an empty mapping yields an empty graph.
    pub fn build(module_root: &str, files: &BTreeMap<String, FileFacts>) -> Self {
        let mut builder = ImportGraphBuilder::new(module_root);
        for (path, facts) in files {
            builder.add_file(path, facts);
        }
        builder.build()
    }

    /// Build a graph from an extractor snapshot.
    pub fn from_snapshot(snapshot: &FactSnapshot) -> Self {
        Self::build(&snapshot.module_root, &snapshot.files)
    }
}

fn normalize_module_root(root: &str) -> String {
    root.trim().trim_end_matches('/').to_string()
}

/// Forward slashes, no leading `./` or `/`.
fn normalize_file_path(path: &str) -> String {
    let mut p = path.trim().replace('\\', "/");
    loop {
        if let Some(rest) = p.strip_prefix("./") {
            p = rest.to_string();
        } else if let Some(rest) = p.strip_prefix('/') {
            p = rest.to_string();
        } else {
            break;
        }
    }
    p
}

/// `_test.go` files and anything under a `testdata` directory.
pub(crate) fn is_test_file(path: &str) -> bool {
    path.ends_with("_test.go") || path.split('/').any(|segment| segment == "testdata")
}

/// An import is internal iff it is the module root or lives under it.
pub(crate) fn is_internal_import(module_root: &str, import: &str) -> bool {
    !module_root.is_empty()
        && (import == module_root
            || import
                .strip_prefix(module_root)
                .is_some_and(|rest| rest.starts_with('/')))
}

/// Package import path for a repository-relative file path.
///
/// The directory is always taken relative to the module root, even when its
/// first segment spells the root. Paths that escape the repository (`..`)
/// fall back to the top-level package.
pub(crate) fn package_path(module_root: &str, file_path: &str) -> String {
    let dir = match file_path.rsplit_once('/') {
        Some((dir, _file)) => dir,
        None => "",
    };

    let segments: Vec<&str> = dir
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect();
    if segments.is_empty() || segments.contains(&"..") {
        return module_root.to_string();
    }
    format!("{}/{}", module_root, segments.join("/"))
}
