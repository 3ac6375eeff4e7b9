use crate::decoder::scan::ScanState;
use std::convert::From;
use thiserror::Error;

/// Why a card number was rejected. Every rejection is an expected outcome of validating
/// untrusted input, it is returned and never raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("invalid length {length}: must be 10 (legacy) or 12 (modern) characters")]
    InvalidLength { length: usize },

    /// `position` is 1-based and counts characters of the normalized input.
    #[error("invalid character '{symbol}' at position {position}")]
    InvalidCharacter { symbol: char, position: usize },

    /// Only reachable if the layout tables disagree with the length gate.
    #[error("ended in non-accepting state {state}")]
    NonAcceptingState { state: ScanState },

    #[error("invalid day count {day_count:03}: must be 001-366 (male) or 501-866 (female)")]
    InvalidDayCount { day_count: u16 },

    /// Guard after the day count check, can't be hit with a day count that passed it.
    #[error("day of year out of range: {day_of_year}")]
    DayOfYearOutOfRange { day_of_year: u16 },
}

impl Rejection {
    /// A stable tag for the kind of rejection, used as a metric label.
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::InvalidLength { .. } => "invalid_length",
            Rejection::InvalidCharacter { .. } => "invalid_character",
            Rejection::NonAcceptingState { .. } => "non_accepting_state",
            Rejection::InvalidDayCount { .. } => "invalid_day_count",
            Rejection::DayOfYearOutOfRange { .. } => "day_of_year_out_of_range",
        }
    }
}

impl From<&Rejection> for u8 {
    fn from(value: &Rejection) -> u8 {
        match value {
            Rejection::InvalidLength { .. } => 1,
            Rejection::InvalidCharacter { .. } => 2,
            Rejection::NonAcceptingState { .. } => 3,
            Rejection::InvalidDayCount { .. } => 4,
            Rejection::DayOfYearOutOfRange { .. } => 5,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Rejection::InvalidCharacter {
                symbol: 'A',
                position: 1
            }
            .to_string(),
            "invalid character 'A' at position 1"
        );
        assert_eq!(
            Rejection::InvalidDayCount { day_count: 45 }.to_string(),
            "invalid day count 045: must be 001-366 (male) or 501-866 (female)"
        );
        assert!(Rejection::InvalidLength { length: 13 }
            .to_string()
            .starts_with("invalid length"));
        assert_eq!(
            Rejection::NonAcceptingState {
                state: ScanState::Start
            }
            .to_string(),
            "ended in non-accepting state start"
        );
    }

    #[test]
    fn codes_are_distinct() {
        let rejections = [
            Rejection::InvalidLength { length: 0 },
            Rejection::InvalidCharacter {
                symbol: 'A',
                position: 1,
            },
            Rejection::NonAcceptingState {
                state: ScanState::Start,
            },
            Rejection::InvalidDayCount { day_count: 0 },
            Rejection::DayOfYearOutOfRange { day_of_year: 0 },
        ];
        let mut codes: Vec<u8> = rejections.iter().map(u8::from).collect();
        codes.dedup();
        assert_eq!(codes, vec![1, 2, 3, 4, 5]);
    }
}
