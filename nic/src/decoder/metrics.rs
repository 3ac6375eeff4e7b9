use crate::decoder::error::Rejection;
use crate::decoder::layout::Format;
use crate::decoder::verdict::Verdict;
use crate::observability::labels::Labels;
use metrics::{counter, Counter};

pub struct DecoderMetrics {
    validations: Counter,
    accepted_legacy: Counter,
    accepted_modern: Counter,
    rejected_invalid_length: Counter,
    rejected_invalid_character: Counter,
    rejected_non_accepting_state: Counter,
    rejected_invalid_day_count: Counter,
    rejected_day_of_year_out_of_range: Counter,
}

const FORMAT: &str = "format";
const REASON: &str = "reason";

impl DecoderMetrics {
    pub fn new(labels: &Labels) -> Self {
        let accepted = |format: Format| {
            counter!(
                "nic.accepted",
                labels.clone_with_labels(Labels::new(&[(FORMAT, format.to_string())]))
            )
        };
        let rejected = |reason: &str| {
            counter!(
                "nic.rejected",
                labels.clone_with_labels(Labels::new(&[(REASON, reason)]))
            )
        };

        DecoderMetrics {
            validations: counter!("nic.validations", labels.clone()),
            accepted_legacy: accepted(Format::Legacy),
            accepted_modern: accepted(Format::Modern),
            rejected_invalid_length: rejected("invalid_length"),
            rejected_invalid_character: rejected("invalid_character"),
            rejected_non_accepting_state: rejected("non_accepting_state"),
            rejected_invalid_day_count: rejected("invalid_day_count"),
            rejected_day_of_year_out_of_range: rejected("day_of_year_out_of_range"),
        }
    }

    pub fn record(&self, verdict: &Verdict) {
        self.validations.increment(1);
        match verdict {
            Verdict::Accepted(record) => match record.format() {
                Format::Legacy => self.accepted_legacy.increment(1),
                Format::Modern => self.accepted_modern.increment(1),
            },
            Verdict::Rejected { rejection, .. } => self.rejected(rejection).increment(1),
        }
    }

    fn rejected(&self, rejection: &Rejection) -> &Counter {
        match rejection {
            Rejection::InvalidLength { .. } => &self.rejected_invalid_length,
            Rejection::InvalidCharacter { .. } => &self.rejected_invalid_character,
            Rejection::NonAcceptingState { .. } => &self.rejected_non_accepting_state,
            Rejection::InvalidDayCount { .. } => &self.rejected_invalid_day_count,
            Rejection::DayOfYearOutOfRange { .. } => &self.rejected_day_of_year_out_of_range,
        }
    }
}
