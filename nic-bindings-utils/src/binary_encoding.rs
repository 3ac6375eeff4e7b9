use nic_decoder::{DecodedRecord, Derived, Format, Gender, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Accepted = 0,
    Rejected = 1,
}

const RECORD_TAG: u8 = 2;
const DERIVED_TAG: u8 = 3;
const NO_SUFFIX: u8 = 0;
const NO_CHECK_DIGIT: u8 = 0xFF;

/// Encode a verdict to a byte array for efficient transfer over FFI to native code.
/// Big endian encoding.
///
/// - Status:
///      - 0: accepted -> followed by the summary message
///      - 1: rejected -> followed by one byte indicating the rejection type, then the message
///
/// - Followed, if the verdict carries a record, by:
///    - 2: record (format, year digits, day count, serial, suffix, check digit)
///    - 3: derived attributes (gender, day of year, birth year), only once they were computed
///
/// Strings are prefixed by their length as a u32.
pub fn encode_verdict(verdict: &Verdict) -> Vec<u8> {
    let mut out = vec![];

    match verdict.rejection() {
        None => out.push(ResponseStatus::Accepted as u8),
        Some(rejection) => {
            out.push(ResponseStatus::Rejected as u8);
            out.push(u8::from(rejection));
        }
    }
    encode_bytes(&mut out, verdict.message().as_bytes());

    if let Some(record) = verdict.record() {
        encode_record(&mut out, record);
        if let Some(derived) = record.derived() {
            encode_derived(&mut out, derived);
        }
    }
    out
}

fn encode_record(out: &mut Vec<u8>, record: &DecodedRecord) {
    out.push(RECORD_TAG);
    out.push(match record.format() {
        Format::Legacy => 0,
        Format::Modern => 1,
    });
    encode_bytes(out, record.year_digits().as_bytes());
    out.extend(record.day_count().to_be_bytes());
    encode_bytes(out, record.serial().as_bytes());
    out.push(
        record
            .suffix()
            .map(|suffix| suffix.as_char() as u8)
            .unwrap_or(NO_SUFFIX),
    );
    out.push(record.check_digit().unwrap_or(NO_CHECK_DIGIT));
}

fn encode_derived(out: &mut Vec<u8>, derived: &Derived) {
    out.push(DERIVED_TAG);
    out.push(match derived.gender {
        Gender::Male => 0,
        Gender::Female => 1,
    });
    out.extend(derived.day_of_year.to_be_bytes());
    out.extend(derived.birth_year.to_be_bytes());
}

fn encode_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    out.extend((bytes.len() as u32).to_be_bytes());
    out.extend(bytes);
}
