//! Partition directory listing.
//!
//! ```text
//! [partitions]
//! decl.scope       @64 2 x 12
//! type.fundamental @88 3 x 4
//!
//! [strings] @0 64 bytes
//!
//! [imports]
//! std.core
//! ```

use std::fmt::Write as _;

use crate::file::File;

/// List the file's partitions in directory order, then its string table and
/// import keys.
pub fn dump_directory(file: &File) -> String {
    let mut out = String::new();
    let directory = file.directory();
    let width = directory
        .iter()
        .map(|entry| entry.name.len())
        .max()
        .unwrap_or(0);

    out.push_str("[partitions]\n");
    for entry in directory {
        let summary = &entry.summary;
        let _ = writeln!(
            out,
            "{:width$} @{} {} x {}",
            entry.name, summary.offset, summary.cardinality, summary.entry_size
        );
    }

    let strings = file.string_table();
    let _ = writeln!(out, "\n[strings] @{} {} bytes", strings.offset, strings.size);

    out.push_str("\n[imports]\n");
    for key in file.imports().keys() {
        out.push_str(key);
        out.push('\n');
    }
    out
}
