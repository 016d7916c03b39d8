#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Reader and presenter for module interface files.
//!
//! This crate contains:
//! - [`Partition`], a typed view over one partition's records
//! - [`File`], a validated, immutable module interface with its import table
//! - [`Presenter`], which renders declarations as indented, source-like text
//!
//! ```text
//! let file = File::load(image, imports)?;
//! print!("{}", present_module(&file)?);
//! ```

pub mod file;
pub mod partition;
pub mod present;

mod stack;

#[cfg(test)]
pub(crate) mod test_utils;

pub use file::{
    ByteRange, Chart, Decl, DirectoryEntry, Expr, File, FileError, FileImage, FormatError,
    ImportTable, Name, PartitionSummary, Type,
};
pub use partition::{Partition, PartitionError};
pub use present::{
    DEFAULT_MAX_DEPTH, PresentError, PresentOptions, Presenter, dump_directory, present_module,
    present_to_string,
};

pub use ifc_core;
