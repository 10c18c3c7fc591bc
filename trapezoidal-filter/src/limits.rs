use crate::{FilterError, FilterResult, Time};
use serde::Serialize;
use std::ops::Range;

/// Number of samples between the start of the filter window and the point
/// `length` samples before the trigger.
const WINDOW_LEAD: usize = 10;

/// A `(start, end)` pair of sample indices, with `end` inclusive.
/// An empty region (e.g. a zero-sized gap) has `end + 1 == start`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampleRange {
    pub start: Time,
    pub end: Time,
}

impl SampleRange {
    fn with_len(start: Time, len: usize) -> Self {
        Self {
            start,
            end: (start + len).saturating_sub(1),
        }
    }

    /// The indices summed by the energy evaluation.
    /// The upper bound is exclusive, so the sample at `end` is not included.
    pub fn summed(&self) -> Range<Time> {
        self.start..self.end
    }
}

/// The three contiguous sample ranges used to evaluate the energy of a pulse.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterWindow {
    pub rise: SampleRange,
    pub gap: SampleRange,
    pub fall: SampleRange,
}

impl FilterWindow {
    /// Lays out the rise, gap and fall regions, of sizes `length`, `gap` and
    /// `length`, starting `length + 10` samples before the trigger.
    /// # Errors
    /// * [FilterError::ZeroLength] if `length` is zero.
    /// * [FilterError::TriggerTooEarly] if the window would start before the trace.
    /// * [FilterError::TriggerTooLate] if `trigger + length + gap` exceeds the trace length.
    #[tracing::instrument(level = "debug")]
    pub fn new(trigger: Time, length: usize, gap: usize, trace_length: usize) -> FilterResult<Self> {
        if length == 0 {
            return Err(FilterError::ZeroLength);
        }
        let min_limit = trigger
            .checked_sub(length + WINDOW_LEAD)
            .ok_or(FilterError::TriggerTooEarly { trigger, length })?;
        if trigger + length + gap > trace_length {
            return Err(FilterError::TriggerTooLate {
                trigger,
                trace_length,
            });
        }

        Ok(Self {
            rise: SampleRange::with_len(min_limit, length),
            gap: SampleRange::with_len(min_limit + length, gap),
            fall: SampleRange::with_len(min_limit + length + gap, length),
        })
    }
}
