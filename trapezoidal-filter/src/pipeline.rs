use crate::{
    EnergyParameters, FilterCoefficients, FilterError, FilterResult, FilterWindow, Real, Time,
    TriggerParameters, TriggerResult, calculate_baseline, calculate_energy, energy_filter,
    find_triggers,
};
use serde::Serialize;
use tracing::info;

/// The features extracted from a single trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceAnalysis {
    /// The trigger from which the energy was calculated, i.e. the first one.
    pub trigger: Time,
    pub triggers: Vec<Time>,
    #[serde(skip)]
    pub trigger_filter: Vec<Real>,
    pub baseline: Real,
    pub coefficients: FilterCoefficients,
    pub window: FilterWindow,
    pub energy: Real,
}

/// Runs the trigger and energy filters over traces from a single detector channel.
///
/// The energy filter coefficients depend only on the parameters, so they are
/// derived once and reused for every trace.
#[derive(Debug, Clone)]
pub struct TraceFilter {
    trigger: TriggerParameters,
    energy: EnergyParameters,
    coefficients: FilterCoefficients,
}

impl TraceFilter {
    /// # Errors
    /// * [FilterError::ZeroLength] if either filter length is zero.
    /// * Any error of [FilterCoefficients::new] for the energy parameters.
    pub fn new(trigger: TriggerParameters, energy: EnergyParameters) -> FilterResult<Self> {
        if trigger.length == 0 {
            return Err(FilterError::ZeroLength);
        }
        let coefficients = FilterCoefficients::new(energy.length, energy.decay_constant)?;
        Ok(Self {
            trigger,
            energy,
            coefficients,
        })
    }

    pub fn trigger_parameters(&self) -> &TriggerParameters {
        &self.trigger
    }

    pub fn energy_parameters(&self) -> &EnergyParameters {
        &self.energy
    }

    pub fn coefficients(&self) -> &FilterCoefficients {
        &self.coefficients
    }

    pub fn find_triggers(&self, trace: &[Real]) -> FilterResult<TriggerResult> {
        find_triggers(
            trace,
            self.trigger.length,
            self.trigger.gap,
            self.trigger.threshold,
        )
    }

    /// The energy filter response at every sample of `trace`, see [energy_filter].
    pub fn energy_filter(&self, trace: &[Real], baseline: Real) -> FilterResult<Vec<Real>> {
        energy_filter(
            trace,
            self.energy.length,
            self.energy.gap,
            baseline,
            &self.coefficients,
        )
    }

    /// Finds the triggers of `trace`, then the baseline and energy of the
    /// pulse at the first trigger.
    /// # Errors
    /// The error of whichever stage fails first.
    #[tracing::instrument(skip_all, fields(trace_length = trace.len(), num_triggers, energy))]
    pub fn analyse(&self, trace: &[Real]) -> FilterResult<TraceAnalysis> {
        let TriggerResult {
            triggers,
            trigger_filter,
        } = self.find_triggers(trace)?;
        let trigger = *triggers.first().ok_or(FilterError::NoTrigger)?;

        let baseline = calculate_baseline(trace, trigger, self.energy.length)?;
        let window = FilterWindow::new(trigger, self.energy.length, self.energy.gap, trace.len())?;
        let energy = calculate_energy(trace, baseline, &self.coefficients, &window);

        let span = tracing::Span::current();
        span.record("num_triggers", triggers.len());
        span.record("energy", energy);
        info!(trigger, baseline, energy);

        Ok(TraceAnalysis {
            trigger,
            triggers,
            trigger_filter,
            baseline,
            coefficients: self.coefficients,
            window,
            energy,
        })
    }
}
