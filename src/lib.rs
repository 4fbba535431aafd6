//! # NACHA Batch
//!
//! Encodes ACH payment batches into the fixed-width NACHA record format.
//!
//! ## Design Principles
//!
//! - **Exact widths**: every record line is 94 characters; numeric fields
//!   that would overflow are rejected instead of misaligning the line
//! - **Integer money**: amounts are whole cents via `rust_decimal`
//! - **Derived totals**: the batch control record is rebuilt from the live
//!   entries on every render
//! - **Deterministic output**: debits before credits, insertion order kept
//!
//! ## Example
//!
//! ```
//! use nacha_batch::{Batch, Entry};
//!
//! let mut debit = Entry::debit();
//! debit
//!     .set_individual_name("Alice")
//!     .set_routing_number("123456780")
//!     .unwrap()
//!     .set_amount(10000u64)
//!     .unwrap();
//!
//! let mut credit = Entry::credit();
//! credit
//!     .set_individual_name("Bob")
//!     .set_receiving_dfi_id(87654321u32)
//!     .unwrap()
//!     .set_amount(5000u64)
//!     .unwrap();
//!
//! let mut batch = Batch::new();
//! batch.header_mut().set_company_name("ACME CORP").set_company_id("1234567890");
//! batch.add_debit_entry(debit).add_credit_entry(credit);
//!
//! assert_eq!(batch.entry_hash().unwrap(), 99_999_999);
//! let text = batch.render().unwrap();
//! assert!(text.lines().last().unwrap().starts_with("82000000020099999999"));
//! ```

pub mod amount;
pub mod batch;
pub mod error;
pub mod field;
pub mod import;
pub mod record;

pub use amount::Amount;
pub use batch::Batch;
pub use error::{AchError, Result};
pub use field::{Alphanumeric, Numeric, NumericValue};
pub use import::{read_entries, EntryRow};
pub use record::{
    Addenda, BatchFooter, BatchHeader, Entry, Record, ServiceClassCode, TransactionCode,
    RECORD_LENGTH,
};
