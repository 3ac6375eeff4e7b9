use crate::decoder::error::Rejection;
use crate::decoder::layout::Format;
use crate::decoder::record::{DecodedRecord, Derived, Gender};
use std::ops::RangeInclusive;

const MALE_DAY_COUNTS: RangeInclusive<u16> = 1..=366;
const FEMALE_DAY_COUNTS: RangeInclusive<u16> = 501..=866;
const DAYS_OF_YEAR: RangeInclusive<u16> = 1..=366;
const FEMALE_DAY_OFFSET: u16 = 500;

/// Two-digit years up to this one are in the 2000s, the others in the 1900s.
const CENTURY_PIVOT: u16 = 25;

/// Checks the ranges of the scanned fields and fills in the derived attributes.
pub(crate) fn check(record: &mut DecodedRecord) -> Result<(), Rejection> {
    let day_count = record.day_count();

    let (gender, day_of_year) = if MALE_DAY_COUNTS.contains(&day_count) {
        (Gender::Male, day_count)
    } else if FEMALE_DAY_COUNTS.contains(&day_count) {
        (Gender::Female, day_count - FEMALE_DAY_OFFSET)
    } else {
        return Err(Rejection::InvalidDayCount { day_count });
    };

    if !DAYS_OF_YEAR.contains(&day_of_year) {
        return Err(Rejection::DayOfYearOutOfRange { day_of_year });
    }

    let birth_year = birth_year(record.format(), record.year_digits());
    record.set_derived(Derived {
        gender,
        day_of_year,
        birth_year,
    });
    Ok(())
}

/// The scanner only lets ASCII digits into the year.
fn birth_year(format: Format, year_digits: &str) -> u16 {
    let year = year_digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u16, |year, digit| year * 10 + digit as u16);

    match format {
        Format::Legacy if year <= CENTURY_PIVOT => 2000 + year,
        Format::Legacy => 1900 + year,
        // No plausibility bound, "3999" is a valid year.
        Format::Modern => year,
    }
}
