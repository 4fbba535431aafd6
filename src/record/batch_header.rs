//! Batch header record (type 5).

use crate::error::Result;
use crate::field::{Alphanumeric, Numeric, NumericValue};
use crate::record::Record;
use std::fmt;

/// Describes which kinds of entries a batch carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceClassCode {
    /// Debits and credits, also used for an empty batch.
    #[default]
    Mixed,
    CreditsOnly,
    DebitsOnly,
}

impl ServiceClassCode {
    /// Returns the three-digit NACHA code.
    pub fn code(self) -> u16 {
        match self {
            ServiceClassCode::Mixed => 200,
            ServiceClassCode::CreditsOnly => 220,
            ServiceClassCode::DebitsOnly => 225,
        }
    }
}

impl fmt::Display for ServiceClassCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.code())
    }
}

/// Batch header: identifies the originating company and the batch.
///
/// The service class code is overwritten by [`Batch::render`] from the
/// entries actually present, so callers normally leave it alone.
///
/// [`Batch::render`]: crate::Batch::render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchHeader {
    service_class_code: ServiceClassCode,
    company_name: Alphanumeric<16>,
    company_discretionary_data: Alphanumeric<20>,
    company_id: Alphanumeric<10>,
    standard_entry_class_code: Alphanumeric<3>,
    company_entry_description: Alphanumeric<10>,
    company_descriptive_date: Alphanumeric<6>,
    effective_entry_date: Alphanumeric<6>,
    settlement_date: Alphanumeric<3>,
    originator_status_code: Alphanumeric<1>,
    originating_dfi_id: Numeric<8>,
    batch_number: Numeric<7>,
}

impl BatchHeader {
    /// Creates a header for a PPD batch with all descriptive fields blank.
    pub fn new() -> Self {
        BatchHeader {
            service_class_code: ServiceClassCode::Mixed,
            company_name: Alphanumeric::default(),
            company_discretionary_data: Alphanumeric::default(),
            company_id: Alphanumeric::default(),
            standard_entry_class_code: Alphanumeric::new("PPD"),
            company_entry_description: Alphanumeric::default(),
            company_descriptive_date: Alphanumeric::default(),
            effective_entry_date: Alphanumeric::default(),
            settlement_date: Alphanumeric::default(),
            originator_status_code: Alphanumeric::new("1"),
            originating_dfi_id: Numeric::default(),
            batch_number: Numeric::default(),
        }
    }

    pub fn service_class_code(&self) -> ServiceClassCode {
        self.service_class_code
    }

    pub fn set_service_class_code(&mut self, code: ServiceClassCode) -> &mut Self {
        self.service_class_code = code;
        self
    }

    pub fn company_name(&self) -> &Alphanumeric<16> {
        &self.company_name
    }

    pub fn set_company_name(&mut self, name: &str) -> &mut Self {
        self.company_name = Alphanumeric::new(name);
        self
    }

    pub fn company_discretionary_data(&self) -> &Alphanumeric<20> {
        &self.company_discretionary_data
    }

    pub fn set_company_discretionary_data(&mut self, data: &str) -> &mut Self {
        self.company_discretionary_data = Alphanumeric::new(data);
        self
    }

    pub fn company_id(&self) -> &Alphanumeric<10> {
        &self.company_id
    }

    pub fn set_company_id(&mut self, id: &str) -> &mut Self {
        self.company_id = Alphanumeric::new(id);
        self
    }

    pub fn standard_entry_class_code(&self) -> &Alphanumeric<3> {
        &self.standard_entry_class_code
    }

    /// Sets the SEC code, e.g. `PPD`, `CCD`, `WEB` or `TEL`.
    pub fn set_standard_entry_class_code(&mut self, code: &str) -> &mut Self {
        self.standard_entry_class_code = Alphanumeric::new(code);
        self
    }

    pub fn company_entry_description(&self) -> &Alphanumeric<10> {
        &self.company_entry_description
    }

    pub fn set_company_entry_description(&mut self, description: &str) -> &mut Self {
        self.company_entry_description = Alphanumeric::new(description);
        self
    }

    pub fn company_descriptive_date(&self) -> &Alphanumeric<6> {
        &self.company_descriptive_date
    }

    pub fn set_company_descriptive_date(&mut self, date: &str) -> &mut Self {
        self.company_descriptive_date = Alphanumeric::new(date);
        self
    }

    pub fn effective_entry_date(&self) -> &Alphanumeric<6> {
        &self.effective_entry_date
    }

    /// Sets the effective entry date, formatted `YYMMDD`.
    pub fn set_effective_entry_date(&mut self, date: &str) -> &mut Self {
        self.effective_entry_date = Alphanumeric::new(date);
        self
    }

    pub fn settlement_date(&self) -> &Alphanumeric<3> {
        &self.settlement_date
    }

    /// Settlement date is normally left blank; the ACH operator fills it in.
    pub fn set_settlement_date(&mut self, date: &str) -> &mut Self {
        self.settlement_date = Alphanumeric::new(date);
        self
    }

    pub fn originator_status_code(&self) -> &Alphanumeric<1> {
        &self.originator_status_code
    }

    pub fn set_originator_status_code(&mut self, code: &str) -> &mut Self {
        self.originator_status_code = Alphanumeric::new(code);
        self
    }

    pub fn originating_dfi_id(&self) -> Numeric<8> {
        self.originating_dfi_id
    }

    /// Sets the first eight digits of the originating bank's routing number.
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

impl Default for BatchHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl Record for BatchHeader {
    const RECORD_TYPE_CODE: char = '5';
}

impl fmt::Display for BatchHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}{}{}{}{}{}{}{}{}",
            Self::RECORD_TYPE_CODE,
            self.service_class_code,
            self.company_name,
            self.company_discretionary_data,
            self.company_id,
            self.standard_entry_class_code,
            self.company_entry_description,
            self.company_descriptive_date,
            self.effective_entry_date,
            self.settlement_date,
            self.originator_status_code,
            self.originating_dfi_id,
            self.batch_number,
        )
    }
}
