//! Typed read-only view over one partition's records.

use ifc_core::{PartitionIndex, Sequence};

/// Partition lookup error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
    #[error("index {offset} out of range for partition of {len} records")]
    OutOfRange { offset: u32, len: usize },
    #[error("sequence [{start}, +{cardinality}) out of range for partition of {len} records")]
    SequenceOutOfRange {
        start: u32,
        cardinality: u32,
        len: usize,
    },
}

/// Borrowed view over a contiguous run of records.
///
/// Indexing reduces tagged indices to their raw offset; it never checks the
/// sort tag against the partition.
pub struct Partition<'a, T> {
    records: &'a [T],
}

impl<'a, T> Partition<'a, T> {
    pub fn new(records: &'a [T]) -> Self {
        Self { records }
    }

    /// Record at `index`.
    pub fn at(&self, index: impl PartitionIndex) -> Result<&'a T, PartitionError> {
        let offset = index.partition_offset();
        self.records
            .get(offset as usize)
            .ok_or(PartitionError::OutOfRange {
                offset,
                len: self.records.len(),
            })
    }

    /// Sub-view over `seq`.
    pub fn slice(&self, seq: Sequence) -> Result<Partition<'a, T>, PartitionError> {
        let out_of_range = PartitionError::SequenceOutOfRange {
            start: seq.start,
            cardinality: seq.cardinality,
            len: self.records.len(),
        };
        let end = seq.end().ok_or(out_of_range)? as usize;
        self.records
            .get(seq.start as usize..end)
            .map(Partition::new)
            .ok_or(out_of_range)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in storage order.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.records
    }
}

impl<T> Clone for Partition<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Partition<'_, T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for Partition<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.records).finish()
    }
}

impl<'a, T> IntoIterator for Partition<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
