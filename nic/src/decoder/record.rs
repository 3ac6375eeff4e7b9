use crate::decoder::layout::{Field, Format};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use strum::{Display as StrumDisplay, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, StrumDisplay, EnumString,
)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

/// Last symbol of a legacy number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, StrumDisplay, EnumString,
)]
pub enum Suffix {
    V,
    X,
}

impl Suffix {
    pub fn from_char(symbol: char) -> Option<Suffix> {
        match symbol {
            'V' => Some(Suffix::V),
            'X' => Some(Suffix::X),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Suffix::V => 'V',
            Suffix::X => 'X',
        }
    }
}

/// Attributes derived from the raw fields once the semantic checks pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Derived {
    pub gender: Gender,
    /// 1 to 366
    pub day_of_year: u16,
    pub birth_year: u16,
}

impl Display for Derived {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Gender: {}, Birth Year: {}, Day: {}",
            self.gender, self.birth_year, self.day_of_year
        )
    }
}

/// The fields of a card number, collected while it is scanned.
///
/// Only the decoder can build or mutate a record. Once it is handed out it is read-only.
/// A record attached to a rejected verdict may be partially populated and is only meant
/// for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedRecord {
    format: Format,
    year_digits: String,
    day_count: u16,
    serial: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    suffix: Option<Suffix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    check_digit: Option<u8>,
    #[serde(flatten)]
    derived: Option<Derived>,
}

impl DecodedRecord {
    pub(crate) fn new(format: Format) -> Self {
        Self {
            format,
            year_digits: String::with_capacity(4),
            day_count: 0,
            serial: String::with_capacity(4),
            suffix: None,
            check_digit: None,
            derived: None,
        }
    }

    /// Appends a symbol that the scanner already matched against the class of `field`.
    pub(crate) fn push(&mut self, field: Field, symbol: char) {
        match field {
            Field::Year => self.year_digits.push(symbol),
            Field::DayCount => {
                if let Some(digit) = symbol.to_digit(10) {
                    self.day_count = self.day_count * 10 + digit as u16;
                }
            }
            Field::Serial => self.serial.push(symbol),
            Field::Suffix => self.suffix = Suffix::from_char(symbol),
            Field::CheckDigit => self.check_digit = symbol.to_digit(10).map(|digit| digit as u8),
        }
    }

    pub(crate) fn set_derived(&mut self, derived: Derived) {
        self.derived = Some(derived);
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// The raw year digits: 2 for legacy numbers, 4 for modern ones.
    pub fn year_digits(&self) -> &str {
        &self.year_digits
    }

    /// The raw day count, 500 above the day of year for women.
    pub fn day_count(&self) -> u16 {
        self.day_count
    }

    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// Only set for legacy numbers.
    pub fn suffix(&self) -> Option<Suffix> {
        self.suffix
    }

    /// Only set for modern numbers. It is stored as read and never verified.
    pub fn check_digit(&self) -> Option<u8> {
        self.check_digit
    }

    pub fn derived(&self) -> Option<&Derived> {
        self.derived.as_ref()
    }

    pub fn gender(&self) -> Option<Gender> {
        self.derived.map(|derived| derived.gender)
    }

    pub fn day_of_year(&self) -> Option<u16> {
        self.derived.map(|derived| derived.day_of_year)
    }

    pub fn birth_year(&self) -> Option<u16> {
        self.derived.map(|derived| derived.birth_year)
    }
}
