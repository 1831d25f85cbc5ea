//! Parsed-source cache owned by whoever loads the sources.
//!
//! Entries are keyed by source path and category and remember the file
//! signature they were parsed from. A changed signature means a reparse.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use crate::error::Result;
use crate::extract::{Category, Extraction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    len: u64,
    modified: Option<SystemTime>,
}

impl Signature {
    pub fn of<P: AsRef<Path>>(path: P) -> Result<Signature> {
        let meta = std::fs::metadata(path)?;
        Ok(Signature {
            len: meta.len(),
            modified: meta.modified().ok(),
        })
    }
}

#[derive(Debug, Default)]
pub struct SourceCache {
    entries: HashMap<(PathBuf, Category), (Signature, Extraction)>,
    loads: usize,
}

impl SourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached extraction for `path`, running `load` when there is none or the
    /// file changed since it was cached.
    pub fn get_or_load<F>(&mut self, path: &Path, category: Category, load: F) -> Result<&Extraction>
    where
        F: FnOnce() -> Result<Extraction>,
    {
        let signature = Signature::of(path)?;
        let key = (path.to_path_buf(), category);

        let fresh = match self.entries.get(&key) {
            Some((cached, _)) => *cached == signature,
            None => false,
        };
        if !fresh {
            debug!("Parsing {} ({:?})", path.display(), category);
            let extraction = load()?;
            self.loads += 1;
            // Keep the pre-parse signature: a write that raced the parse leaves
            // the entry stale and the next lookup reparses.
            if Signature::of(path)? != signature {
                debug!("{} changed while parsing", path.display());
            }
            self.entries.insert(key.clone(), (signature, extraction));
        }

        Ok(&self.entries[&key].1)
    }

    /// Cached extraction as last loaded, without checking the file.
    pub fn get(&self, path: &Path, category: Category) -> Option<&Extraction> {
        self.entries
            .get(&(path.to_path_buf(), category))
            .map(|(_, extraction)| extraction)
    }

    /// Drop every entry read from `path`.
    pub fn invalidate(&mut self, path: &Path) {
        self.entries.retain(|(p, _), _| p != path);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many times a loader actually ran.
    pub fn loads(&self) -> usize {
        self.loads
    }
}
