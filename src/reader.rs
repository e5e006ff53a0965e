//! Sequential batch reading from the source CSV.
//!
//! The reader never materializes the whole file: it holds one open csv
//! reader and fills at most one batch of records at a time. Restarting a
//! scan means reopening the file.

use crate::error::{Result, SalesError};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One batch of raw string records plus the file's raw header row.
///
/// Headers are carried per batch so normalization stays a pure per-batch
/// step; cloning eight small strings per batch is noise next to the rows.
#[derive(Debug, Clone)]
pub struct RawBatch {
    /// 1-based ordinal of this batch within the scan
    pub index: usize,
    /// Raw (un-normalized) column headers
    pub headers: Vec<String>,
    /// At most `batch_size` rows, in original file order
    pub rows: Vec<csv::StringRecord>,
}

impl RawBatch {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Lazily yields fixed-size row batches from a sales CSV
#[derive(Debug)]
pub struct BatchReader {
    reader: csv::Reader<File>,
    headers: Vec<String>,
    batch_size: usize,
    next_index: usize,
    path: PathBuf,
    exhausted: bool,
}

impl BatchReader {
    /// Open the source file and read its header row
    pub fn open(path: &Path, batch_size: usize) -> Result<Self> {
        debug!("Opening source file: {}", path.display());

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|e| SalesError::parse(path, e))?;

        let headers = reader
            .headers()
            .map_err(|e| SalesError::parse(path, e))?
            .iter()
            .map(str::to_string)
            .collect();

        Ok(Self {
            reader,
            headers,
            batch_size,
            next_index: 1,
            path: path.to_path_buf(),
            exhausted: false,
        })
    }

    /// Read the next batch, or `None` once the file is exhausted.
    ///
    /// A tokenization failure anywhere in the file is fatal and aborts the
    /// scan; there is no per-row recovery.
    pub fn next_batch(&mut self) -> Result<Option<RawBatch>> {
        if self.exhausted {
            return Ok(None);
        }

        let mut rows = Vec::with_capacity(self.batch_size.min(65_536));
        let mut record = csv::StringRecord::new();

        while rows.len() < self.batch_size {
            match self.reader.read_record(&mut record) {
                Ok(true) => rows.push(record.clone()),
                Ok(false) => {
                    self.exhausted = true;
                    break;
                }
                Err(e) => return Err(SalesError::parse(&self.path, e)),
            }
        }

        if rows.is_empty() {
            return Ok(None);
        }

        let batch = RawBatch {
            index: self.next_index,
            headers: self.headers.clone(),
            rows,
        };
        self.next_index += 1;
        debug!("Read batch {} ({} rows)", batch.index, batch.len());
        Ok(Some(batch))
    }
}
