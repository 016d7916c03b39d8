//! Import table: maps unit names to already loaded files.

use std::sync::Arc;

use indexmap::IndexMap;

use super::File;

/// Units a file may reference, keyed by `owner` or `owner:partition`.
///
/// Files are shared through [`Arc`], so one imported unit can back several
/// importers. Entries keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct ImportTable {
    modules: IndexMap<String, Arc<File>>,
}

impl ImportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `file` under `key`, returning any file it replaces.
    pub fn insert(&mut self, key: impl Into<String>, file: Arc<File>) -> Option<Arc<File>> {
        self.modules.insert(key.into(), file)
    }

    pub fn get(&self, key: &str) -> Option<&File> {
        self.modules.get(key).map(Arc::as_ref)
    }

    /// Import keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
