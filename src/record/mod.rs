//! Fixed-layout ACH records.
//!
//! A record is an ordered list of fields rendered back to back with no
//! separators. Every record renders to exactly [`RECORD_LENGTH`] characters,
//! led by its one-character record type code.

mod addenda;
mod batch_footer;
mod batch_header;
mod entry;

pub use addenda::Addenda;
pub use batch_footer::BatchFooter;
pub use batch_header::{BatchHeader, ServiceClassCode};
pub use entry::{Entry, TransactionCode};

use std::fmt;

/// Width of every rendered record line.
pub const RECORD_LENGTH: usize = 94;

/// A fixed-width record that renders to a single line.
pub trait Record: fmt::Display {
    /// Leading character identifying the record kind.
    const RECORD_TYPE_CODE: char;

    /// Renders the record line, without a line terminator.
    fn render(&self) -> String {
        let line = self.to_string();
        debug_assert_eq!(line.len(), RECORD_LENGTH, "record rendered to wrong width");
        line
    }
}
