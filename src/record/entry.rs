//! Entry detail record (type 6) and its transaction codes.

use crate::amount::Amount;
use crate::error::{AchError, Result};
use crate::field::{Alphanumeric, Numeric, NumericValue};
use crate::record::{Addenda, Record};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Two-digit code identifying the account type and direction of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionCode {
    CheckingCredit,
    CheckingCreditPrenote,
    CheckingDebit,
    CheckingDebitPrenote,
    SavingsCredit,
    SavingsCreditPrenote,
    SavingsDebit,
    SavingsDebitPrenote,
}

impl TransactionCode {
    /// Returns the two-digit NACHA code.
    pub fn code(self) -> u8 {
        match self {
            TransactionCode::CheckingCredit => 22,
            TransactionCode::CheckingCreditPrenote => 23,
            TransactionCode::CheckingDebit => 27,
            TransactionCode::CheckingDebitPrenote => 28,
            TransactionCode::SavingsCredit => 32,
            TransactionCode::SavingsCreditPrenote => 33,
            TransactionCode::SavingsDebit => 37,
            TransactionCode::SavingsDebitPrenote => 38,
        }
    }

    /// Returns `true` if the entry pulls funds from the receiver.
    pub fn is_debit(self) -> bool {
        matches!(
            self,
            TransactionCode::CheckingDebit
                | TransactionCode::CheckingDebitPrenote
                | TransactionCode::SavingsDebit
                | TransactionCode::SavingsDebitPrenote
        )
    }
}

impl fmt::Display for TransactionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.code())
    }
}

impl FromStr for TransactionCode {
    type Err = AchError;

    /// Accepts either the two-digit code or a name such as `debit` or
    /// `savings_credit`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let code = match s.trim().to_lowercase().as_str() {
            "22" | "credit" | "checking_credit" => TransactionCode::CheckingCredit,
            "23" | "checking_credit_prenote" => TransactionCode::CheckingCreditPrenote,
            "27" | "debit" | "checking_debit" => TransactionCode::CheckingDebit,
            "28" | "checking_debit_prenote" => TransactionCode::CheckingDebitPrenote,
            "32" | "savings_credit" => TransactionCode::SavingsCredit,
            "33" | "savings_credit_prenote" => TransactionCode::SavingsCreditPrenote,
            "37" | "savings_debit" => TransactionCode::SavingsDebit,
            "38" | "savings_debit_prenote" => TransactionCode::SavingsDebitPrenote,
            _ => {
                return Err(AchError::InvalidFieldValue {
                    value: s.trim().to_string(),
                    reason: "unknown transaction code",
                })
            }
        };
        Ok(code)
    }
}

/// One payment movement to or from a receiver's account.
///
/// Debit and credit entries share one layout; they differ only in their
/// [`TransactionCode`]. An entry owns its addenda in insertion order.
///
/// # Examples
///
/// ```
/// use nacha_batch::{Entry, Record};
///
/// let mut entry = Entry::debit();
/// entry
///     .set_individual_name("Jane Doe")
///     .set_dfi_account_number("123456789")
///     .set_amount(10000u64)
///     .unwrap()
///     .set_routing_number("123456780")
///     .unwrap();
///
/// let line = entry.render();
/// assert_eq!(line.len(), 94);
/// assert!(line.starts_with("627123456780123456789"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    transaction_code: TransactionCode,
    receiving_dfi_id: Numeric<8>,
    check_digit: Numeric<1>,
    dfi_account_number: Alphanumeric<17>,
    amount: Numeric<10>,
    individual_id: Alphanumeric<15>,
    individual_name: Alphanumeric<22>,
    discretionary_data: Alphanumeric<2>,
    addenda_record_indicator: bool,
    trace_number: Numeric<15>,
    addenda: Vec<Addenda>,
}

impl Entry {
    /// Number of trailing trace-number digits that form the entry detail
    /// sequence number carried by addenda.
    const SEQUENCE_MODULUS: u32 = 10_000_000;

    /// Creates an entry with every field at its default.
    pub fn new(transaction_code: TransactionCode) -> Self {
        Entry {
            transaction_code,
            receiving_dfi_id: Numeric::default(),
            check_digit: Numeric::default(),
            dfi_account_number: Alphanumeric::default(),
            amount: Numeric::default(),
            individual_id: Alphanumeric::default(),
            individual_name: Alphanumeric::default(),
            discretionary_data: Alphanumeric::default(),
            addenda_record_indicator: false,
            trace_number: Numeric::default(),
            addenda: Vec::new(),
        }
    }

    /// Creates a checking-account debit entry.
    pub fn debit() -> Self {
        Self::new(TransactionCode::CheckingDebit)
    }

    /// Creates a checking-account credit entry.
    pub fn credit() -> Self {
        Self::new(TransactionCode::CheckingCredit)
    }

    pub fn transaction_code(&self) -> TransactionCode {
        self.transaction_code
    }

    pub fn set_transaction_code(&mut self, code: TransactionCode) -> &mut Self {
        self.transaction_code = code;
        self
    }

    /// First eight digits of the receiving bank's routing number.
    pub fn receiving_dfi_id(&self) -> Numeric<8> {
        self.receiving_dfi_id
    }

    pub fn set_receiving_dfi_id<V: NumericValue>(&mut self, id: V) -> Result<&mut Self> {
        self.receiving_dfi_id = Numeric::new(id)?;
        Ok(self)
    }

    pub fn check_digit(&self) -> Numeric<1> {
        self.check_digit
    }

    pub fn set_check_digit<V: NumericValue>(&mut self, digit: V) -> Result<&mut Self> {
        self.check_digit = Numeric::new(digit)?;
        Ok(self)
    }

    /// Sets the receiving DFI id and check digit from a full nine-digit
    /// routing number. The check digit is stored as given, not verified.
    pub fn set_routing_number(&mut self, routing: &str) -> Result<&mut Self> {
        let routing = routing.trim();
        if routing.len() != 9 || !routing.chars().all(|c| c.is_ascii_digit()) {
            return Err(AchError::InvalidFieldValue {
                value: routing.to_string(),
                reason: "routing number must be nine digits",
            });
        }

        let (dfi_id, check_digit) = routing.split_at(8);
        self.receiving_dfi_id = Numeric::new(dfi_id)?;
        self.check_digit = Numeric::new(check_digit)?;
        Ok(self)
    }

    pub fn dfi_account_number(&self) -> &Alphanumeric<17> {
        &self.dfi_account_number
    }

    pub fn set_dfi_account_number(&mut self, account: &str) -> &mut Self {
        self.dfi_account_number = Alphanumeric::new(account);
        self
    }

    /// Amount in cents.
    pub fn amount(&self) -> Amount {
        Amount::from(self.amount)
    }

    pub fn set_amount<V: NumericValue>(&mut self, amount: V) -> Result<&mut Self> {
        self.amount = Numeric::new(amount)?;
        Ok(self)
    }

    pub fn individual_id(&self) -> &Alphanumeric<15> {
        &self.individual_id
    }

    pub fn set_individual_id(&mut self, id: &str) -> &mut Self {
        self.individual_id = Alphanumeric::new(id);
        self
    }

    pub fn individual_name(&self) -> &Alphanumeric<22> {
        &self.individual_name
    }

    pub fn set_individual_name(&mut self, name: &str) -> &mut Self {
        self.individual_name = Alphanumeric::new(name);
        self
    }

    pub fn discretionary_data(&self) -> &Alphanumeric<2> {
        &self.discretionary_data
    }

    pub fn set_discretionary_data(&mut self, data: &str) -> &mut Self {
        self.discretionary_data = Alphanumeric::new(data);
        self
    }

    pub fn addenda_record_indicator(&self) -> bool {
        self.addenda_record_indicator
    }

    pub fn set_addenda_record_indicator(&mut self, present: bool) -> &mut Self {
        self.addenda_record_indicator = present;
        self
    }

    pub fn trace_number(&self) -> Numeric<15> {
        self.trace_number
    }

    pub fn set_trace_number<V: NumericValue>(&mut self, trace: V) -> Result<&mut Self> {
        self.trace_number = Numeric::new(trace)?;
        Ok(self)
    }

    pub fn addenda(&self) -> &[Addenda] {
        &self.addenda
    }

    /// Appends an addenda record and flags the entry as carrying addenda.
    pub fn add_addenda(&mut self, addenda: Addenda) -> &mut Self {
        self.addenda.push(addenda);
        self.addenda_record_indicator = true;
        self
    }

    /// Numbers each addenda by its 1-based position and stamps it with this
    /// entry's detail sequence number (the last seven trace digits).
    /// A trace number longer than seven digits is reduced this way, not
    /// rejected.
    ///
    /// Must run before the addenda are rendered; positions shift whenever
    /// addenda are added.
    pub fn sequence_addenda(&mut self) -> Result<()> {
        let detail_sequence = self.trace_number.value() % Decimal::from(Self::SEQUENCE_MODULUS);

        for (index, addenda) in self.addenda.iter_mut().enumerate() {
            addenda
                .set_addenda_sequence_number(index + 1)?
                .set_entry_detail_sequence_number(detail_sequence)?;
        }

        Ok(())
    }
}

impl Record for Entry {
    const RECORD_TYPE_CODE: char = '6';
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}{}{}{}{}{}{}",
            Self::RECORD_TYPE_CODE,
            self.transaction_code,
            self.receiving_dfi_id,
            self.check_digit,
            self.dfi_account_number,
            self.amount,
            self.individual_id,
            self.individual_name,
            self.discretionary_data,
            u8::from(self.addenda_record_indicator),
            self.trace_number,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RECORD_LENGTH;

    fn sample_entry() -> Entry {
        let mut entry = Entry::credit();
        entry
            .set_dfi_account_number("000123456789")
            .set_individual_id("EMP-0042")
            .set_individual_name("Jane Q Public")
            .set_receiving_dfi_id("76401234")
            .unwrap()
            .set_check_digit(5u8)
            .unwrap()
            .set_amount(125050u64)
            .unwrap()
            .set_trace_number(91012980000001u64)
            .unwrap();
        entry
    }

    #[test]
    fn test_entry_field_positions() {
        let line = sample_entry().render();

        assert_eq!(line.len(), RECORD_LENGTH);
        assert_eq!(&line[0..1], "6");
        assert_eq!(&line[1..3], "22");
        assert_eq!(&line[3..11], "76401234");
        assert_eq!(&line[11..12], "5");
        assert_eq!(&line[12..29], "000123456789     ");
        assert_eq!(&line[29..39], "0000125050");
        assert_eq!(&line[39..54], "EMP-0042       ");
        assert_eq!(&line[54..76], "Jane Q Public         ");
        assert_eq!(&line[76..78], "  ");
        assert_eq!(&line[78..79], "0");
        assert_eq!(&line[79..94], "091012980000001");
    }

    #[test]
    fn test_unset_entry_renders_defaults() {
        let line = Entry::debit().render();
        assert_eq!(line.len(), RECORD_LENGTH);
        assert_eq!(&line[0..12], "627000000000");
        assert_eq!(&line[29..39], "0000000000");
        assert_eq!(&line[79..94], "0".repeat(15));
    }

    #[test]
    fn test_debit_and_credit_share_layout() {
        let mut debit = sample_entry();
        debit.set_transaction_code(TransactionCode::CheckingDebit);
        let credit = sample_entry();

        let debit_line = debit.render();
        let credit_line = credit.render();
        assert_eq!(&debit_line[1..3], "27");
        assert_eq!(&debit_line[3..], &credit_line[3..]);
    }

    #[test]
    fn test_set_routing_number_splits_check_digit() {
        let mut entry = Entry::debit();
        entry.set_routing_number("091000019").unwrap();
        assert_eq!(entry.receiving_dfi_id().to_string(), "09100001");
        assert_eq!(entry.check_digit().to_string(), "9");

        assert!(entry.set_routing_number("12345678").is_err());
        assert!(entry.set_routing_number("12345678X").is_err());
    }

    #[test]
    fn test_amount_overflow_is_rejected() {
        let mut entry = Entry::debit();
        let err = entry.set_amount(12_345_678_901u64).unwrap_err();
        assert!(matches!(err, AchError::FieldOverflow { width: 10, .. }));
        assert!(entry.amount().is_zero());
    }

    #[test]
    fn test_amount_round_trips_as_cents() {
        let entry = sample_entry();
        assert_eq!(entry.amount(), Amount::from_cents(125050));
    }

    #[test]
    fn test_add_addenda_sets_indicator() {
        let mut entry = sample_entry();
        assert!(!entry.addenda_record_indicator());

        entry.add_addenda(Addenda::new());
        assert!(entry.addenda_record_indicator());
        assert_eq!(&entry.render()[78..79], "1");
    }

    #[test]
    fn test_sequence_addenda_numbers_from_one() {
        let mut entry = sample_entry();
        entry.add_addenda(Addenda::new()).add_addenda(Addenda::new());
        entry.sequence_addenda().unwrap();

        let numbers: Vec<String> = entry
            .addenda()
            .iter()
            .map(|a| a.addenda_sequence_number().to_string())
            .collect();
        assert_eq!(numbers, vec!["0001", "0002"]);

        for addenda in entry.addenda() {
            assert_eq!(addenda.entry_detail_sequence_number().to_string(), "0000001");
        }
    }

    #[test]
    fn test_sequence_addenda_uses_last_seven_trace_digits() {
        let mut entry = Entry::debit();
        entry.set_trace_number(91012981234567u64).unwrap();
        entry.add_addenda(Addenda::new());
        entry.sequence_addenda().unwrap();

        assert_eq!(
            entry.addenda()[0].entry_detail_sequence_number().to_string(),
            "1234567"
        );
    }

    #[test]
    fn test_transaction_code_parsing() {
        assert_eq!(
            "debit".parse::<TransactionCode>().unwrap(),
            TransactionCode::CheckingDebit
        );
        assert_eq!(
            " Savings_Credit ".parse::<TransactionCode>().unwrap(),
            TransactionCode::SavingsCredit
        );
        assert_eq!(
            "38".parse::<TransactionCode>().unwrap(),
            TransactionCode::SavingsDebitPrenote
        );
        assert!("refund".parse::<TransactionCode>().is_err());
    }

    #[test]
    fn test_transaction_code_direction() {
        assert!(TransactionCode::CheckingDebit.is_debit());
        assert!(TransactionCode::SavingsDebitPrenote.is_debit());
        assert!(!TransactionCode::CheckingCredit.is_debit());
        assert!(!TransactionCode::SavingsCreditPrenote.is_debit());
    }
}
