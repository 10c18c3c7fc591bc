use super::Detector;
use crate::{Real, Time};

/// Whether the next crossing of the threshold registers as a trigger.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    /// The next value at or above threshold is a trigger. This is the initial
    /// state, and the state after the filter has dropped back below threshold.
    #[default]
    Armed,
    /// A trigger has been recorded and the filter has not yet dropped below
    /// threshold, so it cannot trigger again.
    Disarmed,
}

/// Registers a trigger each time the signal rises to or above the threshold,
/// provided it has fallen below the threshold since the previous trigger.
#[derive(Default, Debug, Clone)]
pub struct HysteresisDetector {
    threshold: Real,
    state: TriggerState,
}

impl HysteresisDetector {
    pub fn new(threshold: Real) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }
}

impl Detector for HysteresisDetector {
    type TracePointType = (Time, Real);
    type EventPointType = Time;

    fn signal(&mut self, time: Time, value: Real) -> Option<Time> {
        let above = value >= self.threshold;
        match (self.state, above) {
            (TriggerState::Armed, true) => {
                self.state = TriggerState::Disarmed;
                Some(time)
            }
            (TriggerState::Disarmed, false) => {
                self.state = TriggerState::Armed;
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventFilter;

    fn triggers(data: &[Real], threshold: Real) -> Vec<Time> {
        data.iter()
            .copied()
            .enumerate()
            .events(HysteresisDetector::new(threshold))
            .collect()
    }

    #[test]
    fn zero_data() {
        assert!(triggers(&[], 2.0).is_empty());
    }

    #[test]
    fn never_crosses() {
        assert!(triggers(&[0.0, 1.0, 1.9, 1.0], 2.0).is_empty());
    }

    #[test]
    fn single_excursion_triggers_once() {
        assert_eq!(triggers(&[0.0, 3.0, 4.0, 5.0, 2.0, 2.5], 2.0), vec![1]);
    }

    #[test]
    fn equal_to_threshold_triggers() {
        assert_eq!(triggers(&[0.0, 2.0], 2.0), vec![1]);
    }

    #[test]
    fn rises_dips_rises() {
        assert_eq!(
            triggers(&[0.0, 3.0, 3.0, 1.0, 1.0, 4.0, 4.0], 2.0),
            vec![1, 5]
        );
    }

    #[test]
    fn immediate_retrigger_after_single_dip() {
        assert_eq!(triggers(&[3.0, 1.0, 3.0, 1.0, 3.0], 2.0), vec![0, 2, 4]);
    }

    #[test]
    fn never_recrossed_stays_disarmed() {
        let mut detector = HysteresisDetector::new(2.0);
        assert_eq!(detector.state(), TriggerState::Armed);
        assert_eq!(detector.signal(0, 5.0), Some(0));
        for time in 1..10 {
            assert_eq!(detector.signal(time, 5.0), None);
            assert_eq!(detector.state(), TriggerState::Disarmed);
        }
        assert_eq!(detector.signal(10, 0.0), None);
        assert_eq!(detector.state(), TriggerState::Armed);
    }

    #[test]
    fn below_threshold_before_first_trigger_keeps_armed() {
        let mut detector = HysteresisDetector::new(-1.0);
        assert_eq!(detector.signal(0, -5.0), None);
        assert_eq!(detector.state(), TriggerState::Armed);
        assert_eq!(detector.signal(1, -1.0), Some(1));
    }
}
