use super::{RunningSum, Window};
use crate::Real;
use serde::Serialize;

/// Sums of the three contiguous regions of a trapezoidal filter window.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrapezoidSums {
    /// The `length` oldest samples.
    pub rise: Real,
    /// The `gap` samples between the rise and the fall regions.
    pub gap: Real,
    /// The `length` newest samples.
    pub fall: Real,
}

/// A window of `2*length + gap` samples, split into rise, gap and fall regions.
///
/// Samples enter the fall region, samples displaced from the fall region enter
/// the gap region, and samples displaced from the gap region enter the rise
/// region. Each region keeps its own running sum.
#[derive(Clone)]
pub struct TrapezoidWindow {
    rise: RunningSum,
    gap: RunningSum,
    fall: RunningSum,
}

impl TrapezoidWindow {
    pub fn new(length: usize, gap: usize) -> Self {
        Self {
            rise: RunningSum::new(length),
            gap: RunningSum::new(gap),
            fall: RunningSum::new(length),
        }
    }

    /// Number of samples in the window, i.e. `2*length + gap`.
    pub fn span(length: usize, gap: usize) -> usize {
        2 * length + gap
    }

    fn sums(&self) -> TrapezoidSums {
        TrapezoidSums {
            rise: self.rise.sum(),
            gap: self.gap.sum(),
            fall: self.fall.sum(),
        }
    }
}

impl Window for TrapezoidWindow {
    type InputType = Real;
    type OutputType = TrapezoidSums;

    fn push(&mut self, value: Real) -> bool {
        if let Some(value) = self.fall.shift(value) {
            if let Some(value) = self.gap.shift(value) {
                self.rise.shift(value);
            }
        }
        self.rise.is_full()
    }

    fn output(&self) -> Option<TrapezoidSums> {
        self.rise.is_full().then(|| self.sums())
    }
}
