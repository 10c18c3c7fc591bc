pub mod tracer;

/// Sample index within a trace.
pub type Time = usize;

pub type Real = f64;
