pub(crate) mod running_sum;
pub(crate) mod trapezoid;

use crate::TracePoint;
pub use running_sum::RunningSum;
pub use trapezoid::{TrapezoidSums, TrapezoidWindow};

/// A sliding window over trace values.
/// `push` returns true once the window holds enough values for `output` to
/// produce a result.
pub trait Window: Clone {
    type InputType: Copy;
    type OutputType;

    fn push(&mut self, value: Self::InputType) -> bool;
    fn output(&self) -> Option<Self::OutputType>;
}

#[derive(Clone)]
pub struct WindowIter<I, W>
where
    I: Iterator,
    I::Item: TracePoint,
    W: Window,
{
    window_function: W,
    source: I,
}

impl<I, W> WindowIter<I, W>
where
    I: Iterator,
    I::Item: TracePoint,
    W: Window,
{
    pub fn new(source: I, window_function: W) -> Self {
        WindowIter {
            source,
            window_function,
        }
    }

    #[cfg(test)]
    pub fn get_window(&self) -> &W {
        &self.window_function
    }
}

/// Yields one item per input point from the point at which the window is first
/// full, timestamped with the time of the newest point in the window.
impl<I, W> Iterator for WindowIter<I, W>
where
    I: Iterator,
    I::Item: TracePoint,
    W: Window<InputType = <I::Item as TracePoint>::Value>,
{
    type Item = (<I::Item as TracePoint>::Time, W::OutputType);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let val = self.source.next()?;
            if self.window_function.push(val.get_value()) {
                return Some((val.get_time(), self.window_function.output()?));
            }
        }
    }
}

pub trait WindowFilter<I, W>
where
    I: Iterator,
    I::Item: TracePoint,
    W: Window,
{
    fn window(self, window: W) -> WindowIter<I, W>;
}

impl<I, W> WindowFilter<I, W> for I
where
    I: Iterator,
    I::Item: TracePoint,
    W: Window,
{
    fn window(self, window: W) -> WindowIter<I, W> {
        WindowIter::<I, W>::new(self, window)
    }
}
