pub(crate) mod hysteresis_detector;

use crate::TracePoint;
pub use hysteresis_detector::{HysteresisDetector, TriggerState};

pub trait Detector: Clone {
    type TracePointType: TracePoint;
    type EventPointType;

    fn signal(
        &mut self,
        time: <Self::TracePointType as TracePoint>::Time,
        value: <Self::TracePointType as TracePoint>::Value,
    ) -> Option<Self::EventPointType>;
}

#[derive(Clone)]
pub struct EventIter<I, D>
where
    I: Iterator<Item = D::TracePointType>,
    D: Detector,
{
    source: I,
    detector: D,
}

impl<I, D> Iterator for EventIter<I, D>
where
    I: Iterator<Item = D::TracePointType>,
    D: Detector,
{
    type Item = D::EventPointType;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let trace = self.source.next()?;
            if let Some(event) = self.detector.signal(trace.get_time(), trace.get_value()) {
                return Some(event);
            }
        }
    }
}

pub trait EventFilter<I, D>
where
    I: Iterator<Item = D::TracePointType>,
    D: Detector,
{
    fn events(self, detector: D) -> EventIter<I, D>;
}

impl<I, D> EventFilter<I, D> for I
where
    I: Iterator<Item = D::TracePointType>,
    D: Detector,
{
    fn events(self, detector: D) -> EventIter<I, D> {
        EventIter {
            source: self,
            detector,
        }
    }
}
