use crate::decoder::error::Rejection;
use crate::decoder::record::DecodedRecord;

/// The outcome of validating one card number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The number is well formed and its fields are in range. The record carries the
    /// derived attributes.
    Accepted(DecodedRecord),
    /// `record` is only present when the scan succeeded and a semantic check failed. It
    /// is partially populated and only meant for diagnostics.
    Rejected {
        rejection: Rejection,
        record: Option<DecodedRecord>,
    },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Accepted(_) => None,
            Verdict::Rejected { rejection, .. } => Some(rejection),
        }
    }

    pub fn record(&self) -> Option<&DecodedRecord> {
        match self {
            Verdict::Accepted(record) => Some(record),
            Verdict::Rejected { record, .. } => record.as_ref(),
        }
    }

    /// A human readable summary of the verdict.
    pub fn message(&self) -> String {
        match self {
            Verdict::Accepted(record) => match record.derived() {
                Some(derived) => format!("Valid NIC - {derived}"),
                None => "Valid NIC".to_string(),
            },
            Verdict::Rejected { rejection, .. } => rejection.to_string(),
        }
    }

    pub fn into_parts(self) -> (bool, String, Option<DecodedRecord>) {
        let is_valid = self.is_valid();
        let message = self.message();
        let record = match self {
            Verdict::Accepted(record) => Some(record),
            Verdict::Rejected { record, .. } => record,
        };
        (is_valid, message, record)
    }

    pub fn into_result(self) -> Result<DecodedRecord, Rejection> {
        match self {
            Verdict::Accepted(record) => Ok(record),
            Verdict::Rejected { rejection, .. } => Err(rejection),
        }
    }
}
