//! Load-time validation of a partition directory.
//!
//! Any failure here aborts the load: once the directory is malformed no index
//! into the file can be trusted.

use std::collections::HashSet;
use std::ops::Range;

use ifc_core::{Record, ScopeIndex, Sequence, TextOffset};

use super::{File, ImportTable, Partitions};

/// Directory entry as stored in the file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartitionSummary {
    /// Partition name in the string table.
    pub name: TextOffset,
    /// Byte offset of the first record.
    pub offset: u32,
    /// Number of records.
    pub cardinality: u32,
    /// Size of one record in bytes.
    pub entry_size: u32,
}

impl PartitionSummary {
    /// Total byte size of the partition.
    pub fn size_bytes(&self) -> u64 {
        self.cardinality as u64 * self.entry_size as u64
    }

    fn byte_range(&self, file_len: usize) -> Option<Range<usize>> {
        ByteRange::new(self.offset, self.size_bytes()).range(file_len)
    }
}

/// Byte range `[offset, offset + size)` in the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ByteRange {
    pub offset: u32,
    pub size: u64,
}

impl ByteRange {
    pub fn new(offset: u32, size: u64) -> Self {
        Self { offset, size }
    }

    /// Range within a buffer of `file_len` bytes, `None` if it does not fit.
    fn range(&self, file_len: usize) -> Option<Range<usize>> {
        let end = (self.offset as u64).checked_add(self.size)?;
        if end > file_len as u64 {
            return None;
        }
        Some(self.offset as usize..end as usize)
    }
}

/// Raw input to [`File::load`]: the byte image plus the directory an outer
/// loader extracted from its header.
#[derive(Clone, Debug, Default)]
pub struct FileImage {
    pub bytes: Vec<u8>,
    pub string_table: ByteRange,
    pub directory: Vec<PartitionSummary>,
    pub global_scope: ScopeIndex,
}

/// Named directory entry of a loaded file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub summary: PartitionSummary,
}

/// Malformed directory or partition contents.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("string table [{offset}, +{size}) exceeds file of {len} bytes")]
    StringTableOutOfBounds { offset: u32, size: u64, len: usize },
    #[error("partition name at text offset {0} is not a valid string")]
    BadPartitionName(u32),
    #[error("partition '{name}' [{offset}, +{size}) exceeds file of {len} bytes")]
    PartitionOutOfBounds {
        name: String,
        offset: u32,
        size: u64,
        len: usize,
    },
    #[error("partitions '{first}' and '{second}' overlap")]
    Overlap { first: String, second: String },
    #[error("partition '{name}' declares {found}-byte entries, expected {expected}")]
    EntrySizeMismatch {
        name: String,
        expected: usize,
        found: u32,
    },
    #[error("partition '{0}' appears more than once")]
    DuplicatePartition(String),
    #[error(
        "{partition}[{index}] sequence [{start}, +{cardinality}) exceeds {target} of {len} records"
    )]
    SequenceOutOfBounds {
        partition: &'static str,
        index: usize,
        target: &'static str,
        start: u32,
        cardinality: u32,
        len: usize,
    },
    #[error("global scope {0} does not address a scope descriptor")]
    GlobalScopeOutOfRange(u32),
}

const STRING_TABLE: &str = "string table";

impl File {
    /// Validate `image` and decode every partition this reader models.
    ///
    /// `imports` must already hold every unit the file references.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = image.bytes.len()))]
    pub fn load(image: FileImage, imports: ImportTable) -> Result<File, FormatError> {
        let FileImage {
            bytes,
            string_table,
            directory,
            global_scope,
        } = image;

        let strings_range =
            string_table
                .range(bytes.len())
                .ok_or(FormatError::StringTableOutOfBounds {
                    offset: string_table.offset,
                    size: string_table.size,
                    len: bytes.len(),
                })?;
        let strings = bytes[strings_range.clone()].to_vec();

        let mut entries = Vec::with_capacity(directory.len());
        for summary in directory {
            let name = read_name(&strings, summary.name)
                .ok_or(FormatError::BadPartitionName(summary.name.0))?;
            entries.push(DirectoryEntry {
                name: name.to_owned(),
                summary,
            });
        }

        let mut ranges = Vec::with_capacity(entries.len() + 1);
        ranges.push((STRING_TABLE, strings_range));
        for entry in &entries {
            let summary = &entry.summary;
            let range =
                summary
                    .byte_range(bytes.len())
                    .ok_or_else(|| FormatError::PartitionOutOfBounds {
                        name: entry.name.clone(),
                        offset: summary.offset,
                        size: summary.size_bytes(),
                        len: bytes.len(),
                    })?;
            ranges.push((entry.name.as_str(), range));
        }
        check_disjoint(ranges.clone())?;

        let mut partitions = Partitions::default();
        let mut seen = HashSet::new();
        let mut modeled = 0usize;
        for (entry, (_, range)) in entries.iter().zip(ranges.iter().skip(1)) {
            if !seen.insert(entry.name.as_str()) {
                return Err(FormatError::DuplicatePartition(entry.name.clone()));
            }
            if !Partitions::models(&entry.name) {
                tracing::trace!(name = %entry.name, "skipping partition");
                continue;
            }
            modeled += 1;
            partitions.decode(&entry.name, &bytes[range.clone()], &entry.summary)?;
        }

        check_sequences(&partitions.scope_descriptors, |d| d.0, &partitions.declarations)?;
        check_sequences(&partitions.tuple_types, |t| t.0, &partitions.type_heap)?;
        check_sequences(&partitions.tuple_expressions, |t| t.seq, &partitions.expr_heap)?;
        check_sequences(&partitions.unilevel_charts, |c| c.0, &partitions.parameters)?;

        if !global_scope.is_null()
            && global_scope.0 as usize > partitions.scope_descriptors.len()
        {
            return Err(FormatError::GlobalScopeOutOfRange(global_scope.0));
        }

        tracing::debug!(
            partitions = entries.len(),
            modeled,
            imports = imports.len(),
            "module interface loaded"
        );

        Ok(File {
            strings,
            string_table,
            directory: entries,
            global_scope,
            imports,
            partitions,
        })
    }
}

/// Decode all records of one partition after checking its entry size.
pub(super) fn decode_records<T: Record>(
    bytes: &[u8],
    summary: &PartitionSummary,
) -> Result<Vec<T>, FormatError> {
    if summary.entry_size as usize != T::SIZE {
        return Err(FormatError::EntrySizeMismatch {
            name: T::PARTITION.to_owned(),
            expected: T::SIZE,
            found: summary.entry_size,
        });
    }
    Ok(bytes.chunks_exact(T::SIZE).map(T::decode).collect())
}

fn read_name(strings: &[u8], offset: TextOffset) -> Option<&str> {
    let tail = strings.get(offset.0 as usize..)?;
    let len = tail.iter().position(|&b| b == 0)?;
    std::str::from_utf8(&tail[..len]).ok()
}

/// Fail on the first pair of non-empty ranges sharing a byte.
fn check_disjoint(mut ranges: Vec<(&str, Range<usize>)>) -> Result<(), FormatError> {
    ranges.retain(|(_, range)| !range.is_empty());
    ranges.sort_by_key(|(_, range)| (range.start, range.end));
    for pair in ranges.windows(2) {
        let (first, a) = &pair[0];
        let (second, b) = &pair[1];
        if a.end > b.start {
            return Err(FormatError::Overlap {
                first: (*first).to_owned(),
                second: (*second).to_owned(),
            });
        }
    }
    Ok(())
}

/// Fail on the first record whose sequence runs past the end of `target`.
fn check_sequences<R: Record, T: Record>(
    records: &[R],
    seq: impl Fn(&R) -> Sequence,
    target: &[T],
) -> Result<(), FormatError> {
    let target_len = target.len();
    for (index, record) in records.iter().enumerate() {
        let seq = seq(record);
        let fits = seq.end().is_some_and(|end| end as usize <= target_len);
        if !fits {
            return Err(FormatError::SequenceOutOfBounds {
                partition: R::PARTITION,
                index,
                target: T::PARTITION,
                start: seq.start,
                cardinality: seq.cardinality,
                len: target_len,
            });
        }
    }
    Ok(())
}
