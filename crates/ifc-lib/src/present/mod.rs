//! Source-like rendering of declarations, types and expressions.
//!
//! A [`Presenter`] walks the graph reachable from an index depth-first and
//! writes one line (or block) per declaration into any [`fmt::Write`] sink.
//! Its state is the bound [`File`], the current indentation and the
//! recursion depth. Crossing a [`DeclReference`] rebinds the file for the
//! duration of that subtree; sink and indentation are shared.
//!
//! Sorts the renderer does not cover become inline diagnostics carrying the
//! numeric tag, and traversal continues. Broken format invariants are
//! reported as [`PresentError::Contract`] and stop the call.

mod chart;
mod decl;
mod directory;
mod expr;
mod types;


pub use directory::dump_directory;

use std::fmt;

use ifc_core::{DeclIndex, DeclReference, Declaration};

use crate::file::{File, FileError};
use crate::partition::{Partition, PartitionError};
use crate::stack::ensure_sufficient_stack;

/// Nesting limit applied when no other is configured.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Presentation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PresentError {
    #[error(transparent)]
    File(#[from] FileError),
    /// The file breaks an invariant the format guarantees.
    #[error("contract violation: {0}")]
    Contract(String),
    #[error("presentation nested deeper than {limit} levels")]
    DepthExceeded { limit: usize },
    #[error("failed to write to output sink")]
    Write(#[from] fmt::Error),
}

impl From<PartitionError> for PresentError {
    fn from(err: PartitionError) -> Self {
        Self::File(err.into())
    }
}

impl PresentError {
    fn contract(message: impl Into<String>) -> Self {
        Self::Contract(message.into())
    }
}

/// Presenter configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresentOptions {
    /// Deepest recursion allowed before failing with
    /// [`PresentError::DepthExceeded`]. Guards against cyclic input.
    pub max_depth: usize,
}

impl Default for PresentOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl PresentOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Recursive renderer bound to one file and one output sink.
pub struct Presenter<'f, W> {
    file: &'f File,
    out: W,
    indent: usize,
    depth: usize,
    options: PresentOptions,
}

impl<'f, W: fmt::Write> Presenter<'f, W> {
    pub fn new(file: &'f File, out: W) -> Self {
        Self {
            file,
            out,
            indent: 0,
            depth: 0,
            options: PresentOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PresentOptions) -> Self {
        self.options = options;
        self
    }

    /// Current indentation in spaces.
    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Present each declaration in `members`, separated by `"\n"`.
    pub fn present_members(
        &mut self,
        members: Partition<'_, Declaration>,
    ) -> Result<(), PresentError> {
        self.separated(members, "\n", |p, member| p.present_decl(member.index))
    }

    fn write(&mut self, text: &str) -> Result<(), PresentError> {
        self.out.write_str(text)?;
        Ok(())
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), PresentError> {
        self.out.write_fmt(args)?;
        Ok(())
    }

    fn write_indent(&mut self) -> Result<(), PresentError> {
        let width = self.indent;
        write!(self, "{:width$}", "")
    }

    /// Run one recursive step under the depth limit and stack guard.
    fn descend(
        &mut self,
        step: impl FnOnce(&mut Self) -> Result<(), PresentError>,
    ) -> Result<(), PresentError> {
        if self.depth >= self.options.max_depth {
            return Err(PresentError::DepthExceeded {
                limit: self.options.max_depth,
            });
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| step(self));
        self.depth -= 1;
        result
    }

    /// Present `reference.local_index` against the file that owns it.
    fn cross_file(
        &mut self,
        reference: &DeclReference,
        present: impl FnOnce(&mut Self, DeclIndex) -> Result<(), PresentError>,
    ) -> Result<(), PresentError> {
        let file = self.file;
        let imported = file.get_imported_module(&reference.unit)?;
        tracing::trace!(
            local_index = reference.local_index.to_raw(),
            "presenting declaration owned by imported unit"
        );
        let home = std::mem::replace(&mut self.file, imported);
        let result = present(self, reference.local_index);
        self.file = home;
        result
    }

    fn separated<'a, T: 'a>(
        &mut self,
        items: impl IntoIterator<Item = &'a T>,
        separator: &str,
        mut each: impl FnMut(&mut Self, &'a T) -> Result<(), PresentError>,
    ) -> Result<(), PresentError> {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.write(separator)?;
            }
            each(self, item)?;
        }
        Ok(())
    }
}

/// Render the declaration at `index` into a new string.
pub fn present_to_string(file: &File, index: DeclIndex) -> Result<String, PresentError> {
    let mut presenter = Presenter::new(file, String::new());
    presenter.present_decl(index)?;
    Ok(presenter.into_inner())
}

/// Render every member of the file's global scope, in storage order.
pub fn present_module(file: &File) -> Result<String, PresentError> {
    let mut presenter = Presenter::new(file, String::new());
    presenter.present_members(file.global_members()?)?;
    Ok(presenter.into_inner())
}
