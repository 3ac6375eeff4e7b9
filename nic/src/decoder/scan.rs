use crate::decoder::error::Rejection;
use crate::decoder::layout::{Field, Format, Segment};
use crate::decoder::record::DecodedRecord;
use std::fmt::{Display, Formatter};

/// State of the finite-state scanner.
///
/// The two formats are two disjoint chains sharing the start state. Instead of naming
/// every state, a state is the field being read plus how many of its symbols were
/// already consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Start,
    Reading { field: Field, consumed: usize },
    Accept,
    Reject,
}

impl Display for ScanState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanState::Start => write!(f, "start"),
            ScanState::Reading { field, consumed } => write!(f, "{field}[{consumed}]"),
            ScanState::Accept => write!(f, "accept"),
            ScanState::Reject => write!(f, "reject"),
        }
    }
}

/// Walks the layout of a single format, one symbol at a time.
struct Machine {
    layout: &'static [Segment],
    segment: usize,
    consumed: usize,
    state: ScanState,
}

impl Machine {
    fn new(format: Format) -> Self {
        Self {
            layout: format.layout(),
            segment: 0,
            consumed: 0,
            state: ScanState::Start,
        }
    }

    fn step(&mut self, symbol: char, record: &mut DecodedRecord) -> ScanState {
        self.state = match (self.state, self.layout.get(self.segment)) {
            (ScanState::Accept | ScanState::Reject, _) | (_, None) => ScanState::Reject,
            (_, Some(segment)) if !segment.class.admits(symbol) => ScanState::Reject,
            (_, Some(segment)) => {
                record.push(segment.field, symbol);
                self.consumed += 1;
                if self.consumed == segment.width {
                    self.segment += 1;
                    self.consumed = 0;
                }
                match self.layout.get(self.segment) {
                    Some(next) => ScanState::Reading {
                        field: next.field,
                        consumed: self.consumed,
                    },
                    None => ScanState::Accept,
                }
            }
        };
        self.state
    }
}

/// Runs the scanner over an already normalized input whose length selected `format`.
///
/// The scan halts on the first symbol outside the class expected at its position, the
/// remaining symbols are never looked at.
pub(crate) fn scan(format: Format, symbols: &str) -> Result<DecodedRecord, Rejection> {
    let mut machine = Machine::new(format);
    let mut record = DecodedRecord::new(format);

    for (index, symbol) in symbols.chars().enumerate() {
        if machine.step(symbol, &mut record) == ScanState::Reject {
            return Err(Rejection::InvalidCharacter {
                symbol,
                position: index + 1,
            });
        }
    }

    match machine.state {
        ScanState::Accept => Ok(record),
        state => Err(Rejection::NonAcceptingState { state }),
    }
}
