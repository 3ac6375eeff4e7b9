use crate::decoder::Decoder;

/// A boolean check on a candidate string, for callers that only need to know if a
/// match is valid.
pub trait Validator: Send + Sync {
    fn is_valid_match(&self, input: &str) -> bool;
}

impl Validator for Decoder {
    fn is_valid_match(&self, input: &str) -> bool {
        self.validate(input).is_valid()
    }
}
