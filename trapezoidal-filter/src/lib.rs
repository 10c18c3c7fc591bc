//! This crate extracts the two features of interest, deposited energy and
//! arrival time, from a digitised detector pulse using trapezoidal filters.
//!
//! A raw trace takes the form of a slice of scalar values. Typical usage of
//! this crate may look like:
//! ```rust
//! use trapezoidal_filter::{EnergyParameters, TraceFilter, TriggerParameters};
//!
//! let trace: Vec<f64> = (0..200).map(|i| if i < 100 { 0.0 } else { 100.0 }).collect();
//! let filter = TraceFilter::new(
//!     TriggerParameters { length: 10, gap: 5, threshold: 50.0 },
//!     EnergyParameters { length: 10, gap: 5, decay_constant: 1e9 },
//! )
//! .unwrap();
//! let analysis = filter.analyse(&trace).unwrap();
//! assert_eq!(analysis.triggers, vec![104]);
//! ```
//!
//! The individual stages are also exposed, so the same data flow can be
//! assembled by hand:
//! ```rust
//! use trapezoidal_filter::{
//!     FilterCoefficients, FilterWindow, calculate_baseline, calculate_energy, find_triggers,
//! };
//!
//! let trace: Vec<f64> = (0..200).map(|i| if i < 100 { 0.0 } else { 100.0 }).collect();
//! let triggers = find_triggers(&trace, 10, 5, 50.0).unwrap();
//! let trigger = triggers.triggers[0];
//! let baseline = calculate_baseline(&trace, trigger, 10).unwrap();
//! let coefficients = FilterCoefficients::new(10, 1e9).unwrap();
//! let window = FilterWindow::new(trigger, 10, 5, trace.len()).unwrap();
//! let energy = calculate_energy(&trace, baseline, &coefficients, &window);
//! assert!(energy > 0.0);
//! ```

pub(crate) mod baseline;
pub(crate) mod coefficients;
pub(crate) mod datatype;
pub(crate) mod detectors;
pub(crate) mod energy;
pub(crate) mod error;
pub(crate) mod limits;
pub(crate) mod parameters;
pub(crate) mod pipeline;
pub(crate) mod trigger;
pub(crate) mod window;

pub use baseline::calculate_baseline;
pub use coefficients::FilterCoefficients;
pub use datatype::{Temporal, TracePoint};
pub use detectors::{Detector, EventFilter, EventIter, HysteresisDetector, TriggerState};
pub use energy::{calculate_energy, energy_filter};
pub use error::{FilterError, FilterErrorKind, FilterResult};
pub use limits::{FilterWindow, SampleRange};
pub use parameters::{EnergyParameters, TriggerParameters, ns_to_samples};
pub use pipeline::{TraceAnalysis, TraceFilter};
pub use trigger::{TriggerResult, find_triggers};
pub use window::{RunningSum, TrapezoidSums, TrapezoidWindow, Window, WindowFilter, WindowIter};

pub use trapezoid_common::{Real, Time};
