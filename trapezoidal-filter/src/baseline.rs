use crate::{FilterError, FilterResult, Real, Time};
use tracing::trace;

/// Number of samples left between the end of the baseline region and the
/// start of the filter window preceding the trigger.
const BASELINE_GUARD: usize = 5;

/// Estimates the DC offset of a trace as the mean of the samples preceding the pulse.
///
/// The baseline region is `[0, trigger - length - 5)`.
/// # Errors
/// * [FilterError::EmptyTrace] if `trace` is empty.
/// * [FilterError::BaselineTooEarly] if the baseline region is empty.
#[tracing::instrument(skip(trace), level = "debug", fields(trace_length = trace.len()))]
pub fn calculate_baseline(trace: &[Real], trigger: Time, length: usize) -> FilterResult<Real> {
    if trace.is_empty() {
        return Err(FilterError::EmptyTrace);
    }
    let offset = trigger
        .checked_sub(length + BASELINE_GUARD)
        .filter(|&offset| offset > 0)
        .ok_or(FilterError::BaselineTooEarly { trigger, length })?;

    let region = trace.iter().take(offset);
    let count = region.len();
    let baseline = region.sum::<Real>() / count as Real;
    trace!(offset, count, baseline);
    Ok(baseline)
}
