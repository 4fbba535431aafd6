//! Batch assembly and rendering.
//!
//! A batch owns its header and two insertion-ordered entry lists. Everything
//! the batch control record carries (counts, totals, entry hash, service
//! class) is derived from those lists at render time and never cached.

use crate::amount::Amount;
use crate::error::{AchError, Result};
use crate::record::{BatchFooter, BatchHeader, Entry, Record, ServiceClassCode};
use log::debug;

/// The entry hash keeps only the ten least significant digits of the sum.
const ENTRY_HASH_MODULUS: u64 = 10_000_000_000;

/// One ACH batch: a header, debit entries, credit entries.
///
/// # Output Ordering
///
/// Debit entries always render before credit entries. Within each list the
/// insertion order is kept, and every entry is followed by its addenda.
///
/// # Examples
///
/// ```
/// use nacha_batch::{Batch, Entry};
///
/// let mut debit = Entry::debit();
/// debit.set_receiving_dfi_id(12345678u32).unwrap().set_amount(10000u64).unwrap();
///
/// let mut batch = Batch::new();
/// batch.header_mut().set_company_name("ACME CORP");
/// batch.add_debit_entry(debit);
///
/// let text = batch.render().unwrap();
/// assert_eq!(text.lines().count(), 3);
/// assert!(text.lines().all(|line| line.len() == 94));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Batch {
    header: BatchHeader,
    debit_entries: Vec<Entry>,
    credit_entries: Vec<Entry>,
}

impl Batch {
    /// Creates an empty batch with a fresh header.
    pub fn new() -> Self {
        Batch {
            header: BatchHeader::new(),
            debit_entries: Vec::new(),
            credit_entries: Vec::new(),
        }
    }

    pub fn header(&self) -> &BatchHeader {
        &self.header
    }

    /// Header for the caller to populate (company, routing, batch number).
    pub fn header_mut(&mut self) -> &mut BatchHeader {
        &mut self.header
    }

    /// Appends a debit entry. Contents are not validated here.
    pub fn add_debit_entry(&mut self, entry: Entry) -> &mut Self {
        self.debit_entries.push(entry);
        self
    }

    /// Appends a credit entry. Contents are not validated here.
    pub fn add_credit_entry(&mut self, entry: Entry) -> &mut Self {
        self.credit_entries.push(entry);
        self
    }

    pub fn debit_entries(&self) -> &[Entry] {
        &self.debit_entries
    }

    pub fn credit_entries(&self) -> &[Entry] {
        &self.credit_entries
    }

    pub fn debit_entries_mut(&mut self) -> &mut [Entry] {
        &mut self.debit_entries
    }

    pub fn credit_entries_mut(&mut self) -> &mut [Entry] {
        &mut self.credit_entries
    }

    /// All entries in render order: debits, then credits.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.debit_entries.iter().chain(self.credit_entries.iter())
    }

    /// Number of entries; addenda are not counted.
    pub fn total_entry_count(&self) -> usize {
        self.debit_entries.len() + self.credit_entries.len()
    }

    /// Number of addenda records across all entries.
    pub fn total_addenda_count(&self) -> usize {
        self.entries().map(|entry| entry.addenda().len()).sum()
    }

    pub fn total_debit_amount(&self) -> Result<Amount> {
        sum_amounts(&self.debit_entries)
    }

    pub fn total_credit_amount(&self) -> Result<Amount> {
        sum_amounts(&self.credit_entries)
    }

    /// Batch control checksum: the sum of every entry's receiving DFI id,
    /// reduced to its last ten digits.
    ///
    /// Routing ids are never negative, so `sum % 10^10` equals keeping the
    /// last ten characters of the sum's decimal string.
    pub fn entry_hash(&self) -> Result<u64> {
        let sum = self
            .entries()
            .try_fold(0u64, |acc, entry| {
                entry
                    .receiving_dfi_id()
                    .to_u64()
                    .and_then(|id| acc.checked_add(id))
            })
            .ok_or(AchError::HashOverflow)?;

        Ok(sum % ENTRY_HASH_MODULUS)
    }

    /// Service class implied by the entries currently present.
    pub fn service_class_code(&self) -> ServiceClassCode {
        match (self.debit_entries.is_empty(), self.credit_entries.is_empty()) {
            (false, true) => ServiceClassCode::DebitsOnly,
            (true, false) => ServiceClassCode::CreditsOnly,
            _ => ServiceClassCode::Mixed,
        }
    }

    /// Builds the batch control record from the current header and entries.
    pub fn footer(&self) -> Result<BatchFooter> {
        let mut footer = BatchFooter::new();
        footer
            .set_service_class_code(self.service_class_code())
            .set_company_id(self.header.company_id().as_str())
            .set_entry_addenda_count(self.total_entry_count())?
            .set_entry_hash(self.entry_hash()?)?
            .set_total_debit_amount(self.total_debit_amount()?)?
            .set_total_credit_amount(self.total_credit_amount()?)?
            .set_originating_dfi_id(self.header.originating_dfi_id())?
            .set_batch_number(self.header.batch_number())?;
        Ok(footer)
    }

    /// Renders the batch as newline-separated record lines.
    ///
    /// Writes the derived service class code into the header and renumbers
    /// every entry's addenda before serializing. The footer line carries no
    /// trailing newline.
    pub fn render(&mut self) -> Result<String> {
        let service_class_code = self.service_class_code();
        self.header.set_service_class_code(service_class_code);

        let mut output = self.header.render();
        output.push('\n');

        for entry in self
            .debit_entries
            .iter_mut()
            .chain(self.credit_entries.iter_mut())
        {
            entry.sequence_addenda()?;

            output.push_str(&entry.render());
            output.push('\n');
            for addenda in entry.addenda() {
                output.push_str(&addenda.render());
                output.push('\n');
            }
        }

        let footer = self.footer()?;
        output.push_str(&footer.render());

        debug!(
            "Rendered batch {}: {} debits, {} credits, {} addenda, service class {}",
            self.header.batch_number(),
            self.debit_entries.len(),
            self.credit_entries.len(),
            self.total_addenda_count(),
            service_class_code,
        );

        Ok(output)
    }
}

/// Sums entry amounts without wrapping.
fn sum_amounts(entries: &[Entry]) -> Result<Amount> {
    entries.iter().try_fold(Amount::ZERO, |total, entry| {
        total
            .checked_add(entry.amount())
            .ok_or(AchError::AmountOverflow)
    })
}
