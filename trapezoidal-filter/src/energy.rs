use crate::{
    FilterCoefficients, FilterError, FilterResult, FilterWindow, Real, SampleRange,
    TrapezoidSums, TrapezoidWindow, WindowFilter,
};
use std::iter::repeat_n;
use tracing::{debug, trace};

fn sum_less_baseline(trace: &[Real], range: &SampleRange, baseline: Real) -> Real {
    let range = range.summed();
    trace
        .iter()
        .skip(range.start)
        .take(range.len())
        .map(|value| value - baseline)
        .sum()
}

/// Evaluates the energy filter at a single window.
///
/// The baseline is removed from each sample, and the rise, gap and fall sums
/// are weighted by the filter coefficients. Samples of the window lying
/// outside the trace contribute nothing.
#[tracing::instrument(skip(trace, coefficients), level = "debug", fields(trace_length = trace.len()))]
pub fn calculate_energy(
    trace: &[Real],
    baseline: Real,
    coefficients: &FilterCoefficients,
    window: &FilterWindow,
) -> Real {
    let sums = TrapezoidSums {
        rise: sum_less_baseline(trace, &window.rise, baseline),
        gap: sum_less_baseline(trace, &window.gap, baseline),
        fall: sum_less_baseline(trace, &window.fall, baseline),
    };
    let energy = coefficients.apply(&sums);
    trace!(?sums, energy);
    energy
}

/// Computes the energy filter response at every sample of the trace.
///
/// The response at index `x` uses the `2*length + gap` samples ending at `x`.
/// The first `2*length + gap - 1` indices lack the history for a full window,
/// and are given the value of the first full response instead, so the output
/// has the same length as `trace`.
/// # Errors
/// * [FilterError::EmptyTrace] if `trace` is empty.
/// * [FilterError::ZeroLength] if `length` is zero.
/// * [FilterError::TraceTooShort] if `trace` is shorter than `2*length + gap`.
#[tracing::instrument(skip(trace, coefficients), level = "debug", fields(trace_length = trace.len()))]
pub fn energy_filter(
    trace: &[Real],
    length: usize,
    gap: usize,
    baseline: Real,
    coefficients: &FilterCoefficients,
) -> FilterResult<Vec<Real>> {
    if trace.is_empty() {
        return Err(FilterError::EmptyTrace);
    }
    if length == 0 {
        return Err(FilterError::ZeroLength);
    }
    let required = TrapezoidWindow::span(length, gap);
    if trace.len() < required {
        return Err(FilterError::TraceTooShort {
            trace_length: trace.len(),
            required,
        });
    }

    let response: Vec<Real> = trace
        .iter()
        .map(|value| value - baseline)
        .enumerate()
        .window(TrapezoidWindow::new(length, gap))
        .map(|(_, sums)| coefficients.apply(&sums))
        .collect();

    let offset = required - 1;
    let first = response.first().copied().ok_or(FilterError::TraceTooShort {
        trace_length: trace.len(),
        required,
    })?;
    debug!(offset, first);
    Ok(repeat_n(first, offset).chain(response).collect())
}
