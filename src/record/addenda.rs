//! Addenda record (type 7).

use crate::error::Result;
use crate::field::{Alphanumeric, Numeric, NumericValue};
use crate::record::Record;
use std::fmt;

/// Free-form payment information attached to an entry.
///
/// The two sequence fields describe the addenda's position and its parent
/// entry; [`Entry::sequence_addenda`] overwrites them before every render.
///
/// [`Entry::sequence_addenda`]: crate::Entry::sequence_addenda
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Addenda {
    payment_related_information: Alphanumeric<80>,
    addenda_sequence_number: Numeric<4>,
    entry_detail_sequence_number: Numeric<7>,
}

impl Addenda {
    /// Addenda type code for PPD, CCD and WEB payment information.
    pub const ADDENDA_TYPE_CODE: &'static str = "05";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn payment_related_information(&self) -> &Alphanumeric<80> {
        &self.payment_related_information
    }

    pub fn set_payment_related_information(&mut self, info: &str) -> &mut Self {
        self.payment_related_information = Alphanumeric::new(info);
        self
    }

    pub fn addenda_sequence_number(&self) -> Numeric<4> {
        self.addenda_sequence_number
    }

    pub fn set_addenda_sequence_number<V: NumericValue>(&mut self, number: V) -> Result<&mut Self> {
        self.addenda_sequence_number = Numeric::new(number)?;
        Ok(self)
    }

    pub fn entry_detail_sequence_number(&self) -> Numeric<7> {
        self.entry_detail_sequence_number
    }

    pub fn set_entry_detail_sequence_number<V: NumericValue>(
        &mut self,
        number: V,
    ) -> Result<&mut Self> {
        self.entry_detail_sequence_number = Numeric::new(number)?;
        Ok(self)
    }
}

impl Record for Addenda {
    const RECORD_TYPE_CODE: char = '7';
}

impl fmt::Display for Addenda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            Self::RECORD_TYPE_CODE,
            Self::ADDENDA_TYPE_CODE,
            self.payment_related_information,
            self.addenda_sequence_number,
            self.entry_detail_sequence_number,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RECORD_LENGTH;

    #[test]
    fn test_addenda_field_positions() {
        let mut addenda = Addenda::new();
        addenda
            .set_payment_related_information("INV 2026-0042")
            .set_addenda_sequence_number(2u32)
            .unwrap()
            .set_entry_detail_sequence_number(1234567u32)
            .unwrap();

        let line = addenda.render();
        assert_eq!(line.len(), RECORD_LENGTH);
        assert_eq!(&line[0..3], "705");
        assert_eq!(line[3..83].trim_end(), "INV 2026-0042");
        assert_eq!(&line[83..87], "0002");
        assert_eq!(&line[87..94], "1234567");
    }

    #[test]
    fn test_default_addenda_renders_blank_information() {
        let line = Addenda::new().render();
        assert_eq!(line.len(), RECORD_LENGTH);
        assert_eq!(&line[3..83], " ".repeat(80));
        assert_eq!(&line[83..94], "00000000000");
    }

    #[test]
    fn test_sequence_number_overflow_is_rejected() {
        let mut addenda = Addenda::new();
        assert!(addenda.set_addenda_sequence_number(10_000u32).is_err());
        assert!(addenda.set_entry_detail_sequence_number(12_345_678u32).is_err());
    }
}
