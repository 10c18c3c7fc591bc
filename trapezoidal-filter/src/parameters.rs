//! Defines the parameters of the trigger and energy filters.
use crate::{FilterError, FilterResult, Real};
use clap::Args;
use serde::Serialize;

/// Converts a duration in nanoseconds to a whole number of samples, rounding
/// to the nearest sample.
/// # Errors
/// * [FilterError::InvalidSampleTime] if `sample_time_ns` is not positive and finite.
pub fn ns_to_samples(duration_ns: Real, sample_time_ns: Real) -> FilterResult<usize> {
    if !(sample_time_ns.is_finite() && sample_time_ns > 0.0) {
        return Err(FilterError::InvalidSampleTime(sample_time_ns));
    }
    Ok((duration_ns / sample_time_ns).round().max(0.0) as usize)
}

/// Encapsulates the parameters of the trigger filter.
#[derive(Default, Debug, Clone, Copy, PartialEq, Args, Serialize)]
pub struct TriggerParameters {
    /// Number of samples in each of the two moving averages.
    #[clap(id = "trigger_length", long = "trigger-length")]
    pub length: usize,

    /// Number of samples separating the two moving averages.
    #[clap(id = "trigger_gap", long = "trigger-gap", default_value = "0")]
    pub gap: usize,

    /// A trigger is registered when the filter rises to this value.
    #[clap(id = "trigger_threshold", long = "trigger-threshold", allow_negative_numbers = true)]
    pub threshold: Real,
}

impl TriggerParameters {
    /// Reinterprets `length` and `gap` as nanoseconds and converts them to samples.
    /// # Errors
    /// * [FilterError::InvalidSampleTime] if `sample_time_ns` is not positive and finite.
    /// * [FilterError::ZeroLength] if the length rounds to zero samples.
    pub fn to_samples(&self, sample_time_ns: Real) -> FilterResult<Self> {
        let length = ns_to_samples(self.length as Real, sample_time_ns)?;
        if length == 0 {
            return Err(FilterError::ZeroLength);
        }
        Ok(Self {
            length,
            gap: ns_to_samples(self.gap as Real, sample_time_ns)?,
            threshold: self.threshold,
        })
    }
}

/// Encapsulates the parameters of the energy filter.
#[derive(Default, Debug, Clone, Copy, PartialEq, Args, Serialize)]
pub struct EnergyParameters {
    /// Number of samples in each of the rise and fall regions.
    #[clap(id = "energy_length", long = "energy-length")]
    pub length: usize,

    /// Number of samples in the gap (flat top) region.
    #[clap(id = "energy_gap", long = "energy-gap", default_value = "0")]
    pub gap: usize,

    /// Exponential decay constant of the detector pulses, in samples.
    #[clap(id = "decay_constant", long = "decay-constant")]
    pub decay_constant: Real,
}

impl EnergyParameters {
    /// Reinterprets `length`, `gap` and `decay_constant` as nanoseconds and converts them to samples.
    /// The decay constant is not rounded.
    /// # Errors
    /// * [FilterError::InvalidSampleTime] if `sample_time_ns` is not positive and finite.
    /// * [FilterError::ZeroLength] if the length rounds to zero samples.
    pub fn to_samples(&self, sample_time_ns: Real) -> FilterResult<Self> {
        let length = ns_to_samples(self.length as Real, sample_time_ns)?;
        if length == 0 {
            return Err(FilterError::ZeroLength);
        }
        Ok(Self {
            length,
            gap: ns_to_samples(self.gap as Real, sample_time_ns)?,
            decay_constant: self.decay_constant / sample_time_ns,
        })
    }
}
