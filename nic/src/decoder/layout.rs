use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The two card number formats. The format is decided by the length of the
/// normalized input alone, before any character is scanned.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Format {
    /// `YY DDD SSSS V|X`, issued before 2016.
    Legacy,
    /// `YYYY DDD SSSS C`, all digits.
    Modern,
}

/// A positional field of a card number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Year,
    DayCount,
    Serial,
    Suffix,
    CheckDigit,
}

/// The symbols a position accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharClass {
    Digit,
    /// `V` or `X`. Input is upper-cased before scanning.
    Suffix,
}

impl CharClass {
    pub(crate) fn admits(self, symbol: char) -> bool {
        match self {
            CharClass::Digit => symbol.is_ascii_digit(),
            CharClass::Suffix => matches!(symbol, 'V' | 'X'),
        }
    }
}

/// `width` consecutive symbols of class `class`, all belonging to `field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segment {
    pub field: Field,
    pub width: usize,
    pub class: CharClass,
}

const fn segment(field: Field, width: usize, class: CharClass) -> Segment {
    Segment {
        field,
        width,
        class,
    }
}

const LEGACY_LAYOUT: &[Segment] = &[
    segment(Field::Year, 2, CharClass::Digit),
    segment(Field::DayCount, 3, CharClass::Digit),
    segment(Field::Serial, 4, CharClass::Digit),
    segment(Field::Suffix, 1, CharClass::Suffix),
];

const MODERN_LAYOUT: &[Segment] = &[
    segment(Field::Year, 4, CharClass::Digit),
    segment(Field::DayCount, 3, CharClass::Digit),
    segment(Field::Serial, 4, CharClass::Digit),
    segment(Field::CheckDigit, 1, CharClass::Digit),
];

impl Format {
    pub const LEGACY_LENGTH: usize = 10;
    pub const MODERN_LENGTH: usize = 12;

    pub fn from_length(length: usize) -> Option<Format> {
        match length {
            Self::LEGACY_LENGTH => Some(Format::Legacy),
            Self::MODERN_LENGTH => Some(Format::Modern),
            _ => None,
        }
    }

    /// Number of symbols a number of this format is made of.
    pub fn length(self) -> usize {
        self.layout().iter().map(|segment| segment.width).sum()
    }

    pub(crate) fn layout(self) -> &'static [Segment] {
        match self {
            Format::Legacy => LEGACY_LAYOUT,
            Format::Modern => MODERN_LAYOUT,
        }
    }
}
