// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod decoder;
mod observability;
mod secondary_validation;

// This is the public API of the NIC decoder library
pub use decoder::config::DecoderConfig;
pub use decoder::error::Rejection;
pub use decoder::layout::{Field, Format};
pub use decoder::record::{DecodedRecord, Derived, Gender, Suffix};
pub use decoder::scan::ScanState;
pub use decoder::verdict::Verdict;
pub use decoder::{is_padding, validate, Decoder};
pub use observability::labels::Labels;
pub use secondary_validation::Validator;
