//! CSV import of batch entries.
//!
//! Each row describes one entry:
//!
//! ```text
//! kind,routing,account,amount,name,id,trace,addenda
//! debit,091000019,123456789,10000,Jane Doe,EMP-1,91012980000001,
//! credit,12345678,987654321,5000,John Roe,,91012980000002,INV 42
//! ```
//!
//! `kind` is a transaction code name (`debit`, `credit`, `savings_debit`, ...)
//! or its two-digit code. `routing` is either the eight-digit DFI id or a full
//! nine-digit routing number. `amount` is in cents. `id` and `addenda` are
//! optional; a non-empty `addenda` becomes one addenda record.
//!
//! A bad row fails the whole import: a batch with silently skipped payments
//! is not safe to transmit.

use crate::amount::Amount;
use crate::batch::Batch;
use crate::error::{AchError, Result};
use crate::record::{Addenda, Entry, TransactionCode};
use csv::{ReaderBuilder, Trim};
use log::debug;
use serde::Deserialize;
use std::io::Read;

/// Raw entry row as read from CSV.
#[derive(Debug, Deserialize)]
pub struct EntryRow {
    /// Transaction code name or number
    pub kind: String,

    /// Eight-digit DFI id or nine-digit routing number
    pub routing: String,

    /// Receiver's account number
    pub account: String,

    /// Amount in cents
    pub amount: Amount,

    /// Receiver's name
    pub name: String,

    /// Receiver's identification number
    pub id: Option<String>,

    /// Trace number
    pub trace: String,

    /// Payment related information for a single addenda
    pub addenda: Option<String>,
}

impl EntryRow {
    /// Builds the entry described by this row.
    pub fn to_entry(&self) -> Result<Entry> {
        let code: TransactionCode = self.kind.parse()?;
        let mut entry = Entry::new(code);

        let routing = self.routing.trim();
        if routing.len() == 9 {
            entry.set_routing_number(routing)?;
        } else {
            entry.set_receiving_dfi_id(routing)?;
        }

        entry
            .set_dfi_account_number(self.account.trim())
            .set_individual_name(self.name.trim())
            .set_amount(self.amount)?
            .set_trace_number(self.trace.as_str())?;

        if let Some(id) = non_empty(&self.id) {
            entry.set_individual_id(id);
        }

        if let Some(info) = non_empty(&self.addenda) {
            let mut addenda = Addenda::new();
            addenda.set_payment_related_information(info);
            entry.add_addenda(addenda);
        }

        Ok(entry)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Reads entry rows from CSV and appends them to `batch`.
///
/// Debit transaction codes go to the batch's debit list, the rest to its
/// credit list. Returns the number of entries imported.
pub fn read_entries<R: Read>(reader: R, batch: &mut Batch) -> Result<usize> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut imported = 0;
    for (row_idx, result) in csv_reader.deserialize::<EntryRow>().enumerate() {
        let row = row_idx + 2; // 1-indexed, accounting for header row

        let record = result.map_err(|e| AchError::InvalidRecord { row, message: e.to_string() })?;
        let entry = record
            .to_entry()
            .map_err(|e| AchError::InvalidRecord { row, message: e.to_string() })?;

        debug!(
            "Row {}: {} entry of {} to {}",
            row,
            entry.transaction_code(),
            entry.amount(),
            entry.receiving_dfi_id()
        );

        if entry.transaction_code().is_debit() {
            batch.add_debit_entry(entry);
        } else {
            batch.add_credit_entry(entry);
        }
        imported += 1;
    }

    Ok(imported)
}
