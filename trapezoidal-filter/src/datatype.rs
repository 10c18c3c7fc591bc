use crate::{Real, Time};
use std::fmt::Debug;

/// This trait abstracts any type used as a time variable
pub trait Temporal: Default + Copy + Debug + PartialEq {}

impl Temporal for Time {}

/// An abstraction of the types that are processed by the windows and detectors.
/// To implement TracePoint a type must contain time data and a value.
pub trait TracePoint: Clone {
    /// The type which represents the time of the data point.
    /// This should be trivially copyable (usually a scalar).
    type Time: Temporal;

    /// The type which contains the value of the data point.
    type Value: Copy + Debug;

    /// Returns the time of the data point.
    fn get_time(&self) -> Self::Time;

    /// Returns a copy of the value of the data point.
    fn get_value(&self) -> Self::Value;
}

/// This is the most basic TracePoint type, as produced by
/// `trace.iter().copied().enumerate()`.
impl TracePoint for (Time, Real) {
    type Time = Time;
    type Value = Real;

    fn get_time(&self) -> Time {
        self.0
    }

    fn get_value(&self) -> Real {
        self.1
    }
}
