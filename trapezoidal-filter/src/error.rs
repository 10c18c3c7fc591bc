use crate::Real;
use thiserror::Error;

pub type FilterResult<T> = Result<T, FilterError>;

/// Broad classes of failure, for callers which skip or escalate a trace
/// without caring about the exact cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum FilterErrorKind {
    /// The trigger or window does not fit inside the trace.
    #[strum(to_string = "Range Error")]
    Range,
    /// A mathematical precondition on a parameter is violated.
    #[strum(to_string = "Domain Error")]
    Domain,
    /// The input trace is structurally invalid.
    #[strum(to_string = "Value Error")]
    Value,
    /// The trigger scan found no crossing.
    #[strum(to_string = "No Trigger Error")]
    NoTrigger,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error(
        "Trigger at {trigger} happened too early to calculate the baseline with filter length {length}"
    )]
    BaselineTooEarly { trigger: usize, length: usize },
    #[error(
        "Trigger at {trigger} happened too early in the trace to calculate the energy with filter length {length}"
    )]
    TriggerTooEarly { trigger: usize, length: usize },
    #[error(
        "Trigger at {trigger} happened too late in the trace of length {trace_length} to calculate the energy"
    )]
    TriggerTooLate { trigger: usize, trace_length: usize },
    #[error("The trace length ({trace_length}) is too small for the requested filter size ({required})")]
    TraceTooShort {
        trace_length: usize,
        required: usize,
    },
    #[error("Decay constant must be non-zero")]
    ZeroDecayConstant,
    #[error("Decay constant {0} gives a pole indistinguishable from one")]
    DegenerateDecayConstant(Real),
    #[error("Filter length must be non-zero")]
    ZeroLength,
    #[error("Sample time must be positive and finite, got {0}")]
    InvalidSampleTime(Real),
    #[error("Cannot calculate a filter without some data")]
    EmptyTrace,
    #[error("No triggers found in the provided data")]
    NoTrigger,
}

impl FilterError {
    pub fn kind(&self) -> FilterErrorKind {
        match self {
            Self::BaselineTooEarly { .. }
            | Self::TriggerTooEarly { .. }
            | Self::TriggerTooLate { .. }
            | Self::TraceTooShort { .. } => FilterErrorKind::Range,
            Self::ZeroDecayConstant
            | Self::DegenerateDecayConstant(_)
            | Self::ZeroLength
            | Self::InvalidSampleTime(_) => FilterErrorKind::Domain,
            Self::EmptyTrace => FilterErrorKind::Value,
            Self::NoTrigger => FilterErrorKind::NoTrigger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(
            FilterError::TraceTooShort {
                trace_length: 3,
                required: 10
            }
            .kind(),
            FilterErrorKind::Range
        );
        assert_eq!(FilterError::ZeroDecayConstant.kind(), FilterErrorKind::Domain);
        assert_eq!(FilterError::EmptyTrace.kind(), FilterErrorKind::Value);
        assert_eq!(FilterError::NoTrigger.kind(), FilterErrorKind::NoTrigger);
    }

    #[test]
    fn messages_name_the_geometry() {
        let error = FilterError::TriggerTooLate {
            trigger: 990,
            trace_length: 1000,
        };
        assert_eq!(
            error.to_string(),
            "Trigger at 990 happened too late in the trace of length 1000 to calculate the energy"
        );
        assert_eq!(FilterErrorKind::NoTrigger.to_string(), "No Trigger Error");
    }
}
