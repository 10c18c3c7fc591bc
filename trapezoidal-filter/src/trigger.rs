use crate::{
    EventFilter, FilterError, FilterResult, HysteresisDetector, Real, Time, TrapezoidWindow,
    WindowFilter,
};
use serde::Serialize;
use tracing::debug;

#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct TriggerResult {
    /// Sample indices at which pulses were found, strictly increasing.
    pub triggers: Vec<Time>,
    /// The trigger filter response, one value per input sample.
    pub trigger_filter: Vec<Real>,
}

/// Locates pulse arrival times with a trapezoidal trigger filter.
///
/// The filter value at index `i` is the difference between the mean of the
/// `length` samples ending at `i` and the mean of the `length` samples ending
/// `length + gap` samples earlier. Indices without enough history for this
/// are given the value `0.0` and take no part in triggering.
///
/// A trigger is registered where the filter rises to or above `threshold`,
/// after which the filter must drop below `threshold` before the next
/// trigger can be registered.
/// # Errors
/// * [FilterError::EmptyTrace] if `trace` is empty.
/// * [FilterError::ZeroLength] if `length` is zero.
/// * [FilterError::NoTrigger] if the filter never reaches `threshold`.
#[tracing::instrument(skip(trace), level = "debug", fields(trace_length = trace.len(), num_triggers))]
pub fn find_triggers(
    trace: &[Real],
    length: usize,
    gap: usize,
    threshold: Real,
) -> FilterResult<TriggerResult> {
    if trace.is_empty() {
        return Err(FilterError::EmptyTrace);
    }
    if length == 0 {
        return Err(FilterError::ZeroLength);
    }

    let response: Vec<(Time, Real)> = trace
        .iter()
        .copied()
        .enumerate()
        .window(TrapezoidWindow::new(length, gap))
        .map(|(time, sums)| (time, (sums.fall - sums.rise) / length as Real))
        .collect();

    let triggers: Vec<Time> = response
        .iter()
        .copied()
        .events(HysteresisDetector::new(threshold))
        .collect();
    tracing::Span::current().record("num_triggers", triggers.len());

    if triggers.is_empty() {
        return Err(FilterError::NoTrigger);
    }
    debug!(first_trigger = ?triggers.first());

    let mut trigger_filter = vec![0.0; trace.len() - response.len()];
    trigger_filter.extend(response.into_iter().map(|(_, value)| value));
    Ok(TriggerResult {
        triggers,
        trigger_filter,
    })
}
