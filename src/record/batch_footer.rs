//! Batch control record (type 8).

use crate::error::Result;
use crate::field::{Alphanumeric, Numeric, NumericValue};
use crate::record::{Record, ServiceClassCode};
use std::fmt;

/// Batch control totals.
///
/// Never stored on a batch: [`Batch::footer`] derives a fresh one from the
/// current entries each time it is needed.
///
/// [`Batch::footer`]: crate::Batch::footer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchFooter {
    service_class_code: ServiceClassCode,
    entry_addenda_count: Numeric<6>,
    entry_hash: Numeric<10>,
    total_debit_amount: Numeric<12>,
    total_credit_amount: Numeric<12>,
    company_id: Alphanumeric<10>,
    message_authentication_code: Alphanumeric<19>,
    originating_dfi_id: Numeric<8>,
    batch_number: Numeric<7>,
}

impl BatchFooter {
    /// Reserved positions 74-79, always blank.
    const RESERVED: &'static str = "      ";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn service_class_code(&self) -> ServiceClassCode {
        self.service_class_code
    }

    pub fn set_service_class_code(&mut self, code: ServiceClassCode) -> &mut Self {
        self.service_class_code = code;
        self
    }

    pub fn entry_addenda_count(&self) -> Numeric<6> {
        self.entry_addenda_count
    }

    pub fn set_entry_addenda_count<V: NumericValue>(&mut self, count: V) -> Result<&mut Self> {
        self.entry_addenda_count = Numeric::new(count)?;
        Ok(self)
    }

    pub fn entry_hash(&self) -> Numeric<10> {
        self.entry_hash
    }

    pub fn set_entry_hash<V: NumericValue>(&mut self, hash: V) -> Result<&mut Self> {
        self.entry_hash = Numeric::new(hash)?;
        Ok(self)
    }

    pub fn total_debit_amount(&self) -> Numeric<12> {
        self.total_debit_amount
    }

    pub fn set_total_debit_amount<V: NumericValue>(&mut self, amount: V) -> Result<&mut Self> {
        self.total_debit_amount = Numeric::new(amount)?;
        Ok(self)
    }

    pub fn total_credit_amount(&self) -> Numeric<12> {
        self.total_credit_amount
    }

    pub fn set_total_credit_amount<V: NumericValue>(&mut self, amount: V) -> Result<&mut Self> {
        self.total_credit_amount = Numeric::new(amount)?;
        Ok(self)
    }

    pub fn company_id(&self) -> &Alphanumeric<10> {
        &self.company_id
    }

    pub fn set_company_id(&mut self, id: &str) -> &mut Self {
        self.company_id = Alphanumeric::new(id);
        self
    }

    pub fn message_authentication_code(&self) -> &Alphanumeric<19> {
        &self.message_authentication_code
    }

    pub fn set_message_authentication_code(&mut self, code: &str) -> &mut Self {
        self.message_authentication_code = Alphanumeric::new(code);
        self
    }

    pub fn originating_dfi_id(&self) -> Numeric<8> {
        self.originating_dfi_id
    }

    pub fn set_originating_dfi_id<V: NumericValue>(&mut self, id: V) -> Result<&mut Self> {
        self.originating_dfi_id = Numeric::new(id)?;
        Ok(self)
    }

    pub fn batch_number(&self) -> Numeric<7> {
        self.batch_number
    }

    pub fn set_batch_number<V: NumericValue>(&mut self, number: V) -> Result<&mut Self> {
        self.batch_number = Numeric::new(number)?;
        Ok(self)
    }
}

impl Record for BatchFooter {
    const RECORD_TYPE_CODE: char = '8';
}

impl fmt::Display for BatchFooter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}{}{}{}{}{}{}",
            Self::RECORD_TYPE_CODE,
            self.service_class_code,
            self.entry_addenda_count,
            self.entry_hash,
            self.total_debit_amount,
            self.total_credit_amount,
            self.company_id,
            self.message_authentication_code,
            Self::RESERVED,
            self.originating_dfi_id,
            self.batch_number,
        )
    }
}
