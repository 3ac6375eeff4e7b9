use crate::decoder::config::DecoderConfig;
use crate::decoder::error::Rejection;
use crate::decoder::layout::Format;
use crate::decoder::metrics::DecoderMetrics;
use crate::decoder::record::DecodedRecord;
use crate::decoder::verdict::Verdict;
use lazy_static::lazy_static;
use rayon::prelude::*;

pub mod config;
pub mod error;
pub mod layout;
mod metrics;
pub mod record;
pub mod scan;
mod semantic;
pub mod verdict;

#[cfg(test)]
mod test;

lazy_static! {
    static ref DEFAULT_DECODER: Decoder = Decoder::default();
}

/// Validates a card number with the process wide default decoder.
///
/// The default decoder registers its counters with the metrics recorder that is
/// installed when this function is first called. A recorder installed afterwards never
/// sees these validations; build a [Decoder] once the recorder is in place instead.
pub fn validate(input: &str) -> Verdict {
    DEFAULT_DECODER.validate(input)
}

/// Validates card numbers and decodes the attributes they carry.
///
/// A decoder holds no scanning state, every call works on its own state and record.
/// It can be shared freely between threads.
pub struct Decoder {
    metrics: DecoderMetrics,
}

impl Default for Decoder {
    fn default() -> Self {
        Decoder::new(&DecoderConfig::default())
    }
}

impl Decoder {
    pub fn new(config: &DecoderConfig) -> Self {
        Self {
            metrics: DecoderMetrics::new(&config.labels),
        }
    }

    /// Validates a single card number. Surrounding whitespace is ignored and letters are
    /// upper-cased before scanning.
    pub fn validate(&self, input: &str) -> Verdict {
        let verdict = decode(input);
        self.metrics.record(&verdict);
        verdict
    }

    /// Like [Decoder::validate], dropping the partial record of a rejected number.
    pub fn decode(&self, input: &str) -> Result<DecodedRecord, Rejection> {
        self.validate(input).into_result()
    }

    /// Validates many card numbers in parallel. The verdicts are in the order of `inputs`.
    pub fn validate_batch<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> Vec<Verdict> {
        inputs
            .par_iter()
            .map(|input| self.validate(input.as_ref()))
            .collect()
    }
}

/// Whitespace and the ASCII file, group, record and unit separators around a number are
/// not part of it.
pub fn is_padding(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn decode(input: &str) -> Verdict {
    let normalized = input.trim_matches(is_padding).to_uppercase();
    let length = normalized.chars().count();

    let Some(format) = Format::from_length(length) else {
        return Verdict::Rejected {
            rejection: Rejection::InvalidLength { length },
            record: None,
        };
    };

    let mut record = match scan::scan(format, &normalized) {
        Ok(record) => record,
        Err(rejection) => {
            return Verdict::Rejected {
                rejection,
                record: None,
            }
        }
    };

    match semantic::check(&mut record) {
        Ok(()) => Verdict::Accepted(record),
        Err(rejection) => Verdict::Rejected {
            rejection,
            record: Some(record),
        },
    }
}
