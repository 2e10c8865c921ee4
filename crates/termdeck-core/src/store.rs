//! Flat-file record store.
//!
//! The backing file is the single source of truth: every operation reloads
//! it, and every add rewrites it whole (header, existing rows in load order,
//! then the new row). Rewrites go through a temporary file in the same
//! directory that is renamed over the target.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::codec::{self, HEADER};
use crate::error::StoreError;
use crate::model::Entry;

/// Result of a successful [`RecordStore::add`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The entry was appended and the file rewritten.
    Saved,
    /// An entry with the same workbook and term already exists; nothing was
    /// written.
    Duplicate,
}

/// Glossary entries backed by a delimited text file.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with just the header if it does not exist.
    ///
    /// Returns `true` if the file was created.
    pub fn ensure_file(&self) -> Result<bool, StoreError> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        fs::write(&self.path, format!("{HEADER}\n")).map_err(|e| self.io_error(e))?;
        tracing::debug!("created {}", self.path.display());
        Ok(true)
    }

    /// Load every valid entry in file order.
    ///
    /// Never fails: a missing file is bootstrapped and yields an empty list,
    /// and an unreadable file is logged and yields an empty list.
    pub fn load_all(&self) -> Vec<Entry> {
        match self.read_entries() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("could not load entries: {e}");
                Vec::new()
            }
        }
    }

    /// Load entries whose workbook matches `workbook` case-insensitively.
    pub fn load_by_workbook(&self, workbook: &str) -> Vec<Entry> {
        self.load_all()
            .into_iter()
            .filter(|e| e.in_workbook(workbook))
            .collect()
    }

    /// Validate, deduplicate and append a new entry.
    ///
    /// All fields are trimmed. Empty workbook or term, a line break in any
    /// field, or an entry that serializes to the header line is rejected with
    /// a validation error before the file is touched.
    pub fn add(
        &self,
        workbook: &str,
        term: &str,
        definition: &str,
        example: &str,
    ) -> Result<AddOutcome, StoreError> {
        let entry = Entry::new(workbook, term, definition, example);
        if entry.workbook.is_empty() {
            return Err(StoreError::MissingField("workbook"));
        }
        if entry.term.is_empty() {
            return Err(StoreError::MissingField("term"));
        }
        for (name, value) in ["workbook", "term", "definition", "example"]
            .into_iter()
            .zip(entry.fields())
        {
            if value.contains(['\n', '\r']) {
                return Err(StoreError::LineBreak(name));
            }
        }
        if codec::is_header(&codec::serialize_record(&entry.fields())) {
            return Err(StoreError::HeaderRow);
        }

        // Unlike load_all, a read failure here must not degrade to an empty
        // list: the rewrite would drop every row we failed to read.
        let mut entries = self.read_entries().inspect_err(|e| {
            tracing::warn!("not saved: {e}");
        })?;

        if entries
            .iter()
            .any(|e| e.same_key(&entry.workbook, &entry.term))
        {
            tracing::debug!("duplicate entry {}/{}", entry.workbook, entry.term);
            return Ok(AddOutcome::Duplicate);
        }

        tracing::info!("saving {}/{}", entry.workbook, entry.term);
        entries.push(entry);
        self.write_entries(&entries).inspect_err(|e| {
            tracing::warn!("not saved: {e}");
        })?;
        Ok(AddOutcome::Saved)
    }

    /// Read and parse the backing file, creating it first if missing.
    fn read_entries(&self) -> Result<Vec<Entry>, StoreError> {
        if self.ensure_file()? {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        Ok(parse_entries(&content))
    }

    /// Rewrite the file through a temporary sibling of the real target.
    ///
    /// A symlinked glossary is resolved first so the link survives, and the
    /// target's permissions are carried over to the replacement.
    fn write_entries(&self, entries: &[Entry]) -> Result<(), StoreError> {
        let target = fs::canonicalize(&self.path).map_err(|e| self.io_error(e))?;
        let dir = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let permissions = fs::metadata(&target)
            .map_err(|e| self.io_error(e))?
            .permissions();

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        write_file(&mut BufWriter::new(tmp.as_file_mut()), entries)
            .map_err(|e| self.io_error(e))?;
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| self.io_error(e))?;
        tmp.persist(&target)
            .map_err(|e| self.io_error(e.error))?;
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Parse the full text of a glossary file.
///
/// Header lines and blank lines are skipped; rows without a workbook or term
/// are dropped.
pub fn parse_entries(content: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    let mut dropped = 0usize;
    let mut first = true;

    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let is_first = std::mem::replace(&mut first, false);
        if codec::is_header(line) || (is_first && codec::looks_like_header(line)) {
            continue;
        }
        match Entry::from_fields(&codec::parse_record(line)) {
            Some(entry) => entries.push(entry),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!("dropped {dropped} malformed row(s)");
    }
    entries
}

/// Write the header and all entries, one per line, LF-terminated.
pub fn write_file<W: Write>(out: &mut W, entries: &[Entry]) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for entry in entries {
        writeln!(out, "{}", codec::serialize_record(&entry.fields()))?;
    }
    out.flush()
}
