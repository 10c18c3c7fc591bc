use super::Window;
use crate::Real;
use std::collections::VecDeque;

/// Fixed-size FIFO of samples which keeps the sum of its contents up to date
/// as samples enter and leave, so each step costs O(1).
#[derive(Default, Debug, Clone)]
pub struct RunningSum {
    sum: Real,
    size: usize,
    window: VecDeque<Real>,
}

impl RunningSum {
    pub fn new(size: usize) -> Self {
        RunningSum {
            window: VecDeque::<Real>::with_capacity(size),
            size,
            ..Default::default()
        }
    }

    pub fn is_full(&self) -> bool {
        self.window.len() == self.size
    }

    pub fn sum(&self) -> Real {
        self.sum
    }

    /// Pushes `value` in and returns the sample it displaced, if the window was full.
    /// A zero-sized window passes every value straight through.
    ///
    /// The sum is never recomputed from the contents, so rounding error grows
    /// with the number of samples pushed. For traces of ~1e5 samples at ~1e6
    /// counts the difference from a direct sum stays far below one count.
    pub fn shift(&mut self, value: Real) -> Option<Real> {
        if self.size == 0 {
            return Some(value);
        }
        let evicted = if self.is_full() {
            self.window.pop_front()
        } else {
            None
        };
        if let Some(old) = evicted {
            self.sum -= old;
        }
        self.sum += value;
        self.window.push_back(value);
        evicted
    }

    #[cfg(test)]
    pub fn test_sum(&self) -> Real {
        self.window.iter().sum()
    }
}

impl Window for RunningSum {
    type InputType = Real;
    type OutputType = Real;

    fn push(&mut self, value: Real) -> bool {
        self.shift(value);
        self.is_full()
    }

    fn output(&self) -> Option<Real> {
        self.is_full().then_some(self.sum)
    }
}
