use crate::{FilterError, FilterResult, Real, TrapezoidSums};
use serde::Serialize;
use tracing::debug;

/// Gains applied to the rise, gap and fall sums of the energy filter.
///
/// They implement pole-zero cancellation: an exponentially decaying pulse
/// whose decay constant matches the one supplied is turned into a flat-topped
/// trapezoid whose height is proportional to the energy of the pulse.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilterCoefficients {
    /// The pole, `exp(-1/decay_constant)`.
    pub beta: Real,
    pub rise: Real,
    pub gap: Real,
    pub fall: Real,
}

impl FilterCoefficients {
    /// Derives the coefficients for a filter of the given `length` and a pulse
    /// decay constant given in samples.
    /// # Errors
    /// * [FilterError::ZeroLength] if `length` is zero.
    /// * [FilterError::ZeroDecayConstant] if `decay_constant` is zero.
    /// * [FilterError::DegenerateDecayConstant] if `decay_constant` is so large
    ///   (or not finite) that the pole is indistinguishable from one.
    #[tracing::instrument(level = "debug")]
    pub fn new(length: usize, decay_constant: Real) -> FilterResult<Self> {
        if length == 0 {
            return Err(FilterError::ZeroLength);
        }
        if decay_constant == 0.0 {
            return Err(FilterError::ZeroDecayConstant);
        }
        let beta = (-1.0 / decay_constant).exp();
        let beta_length = beta.powi(i32::try_from(length).unwrap_or(i32::MAX));
        let cg = 1.0 - beta;
        let ctmp = 1.0 - beta_length;
        if ctmp == 0.0 || !ctmp.is_finite() {
            return Err(FilterError::DegenerateDecayConstant(decay_constant));
        }

        let coefficients = Self {
            beta,
            rise: -(cg / ctmp) * beta_length,
            gap: cg,
            fall: cg / ctmp,
        };
        debug!(?coefficients);
        Ok(coefficients)
    }

    /// The weighted combination of the three window sums.
    pub fn apply(&self, sums: &TrapezoidSums) -> Real {
        self.rise * sums.rise + self.gap * sums.gap + self.fall * sums.fall
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn zero_decay_constant() {
        assert_eq!(
            FilterCoefficients::new(10, 0.0),
            Err(FilterError::ZeroDecayConstant)
        );
    }

    #[test]
    fn zero_length() {
        assert_eq!(FilterCoefficients::new(0, 10.0), Err(FilterError::ZeroLength));
    }

    #[test]
    fn infinite_decay_constant() {
        assert_eq!(
            FilterCoefficients::new(10, Real::INFINITY),
            Err(FilterError::DegenerateDecayConstant(Real::INFINITY))
        );
    }

    #[test]
    fn finite_decay_constant_too_large_for_pole() {
        // exp(-1e-17) rounds to exactly one
        assert_eq!(
            FilterCoefficients::new(10, 1e17),
            Err(FilterError::DegenerateDecayConstant(1e17))
        );
        assert!(FilterCoefficients::new(10, 1e12).is_ok());
    }

    #[test]
    fn nan_decay_constant() {
        let error = FilterCoefficients::new(10, Real::NAN).unwrap_err();
        assert!(matches!(error, FilterError::DegenerateDecayConstant(d) if d.is_nan()));
    }

    #[test]
    fn known_values() {
        let coefficients = FilterCoefficients::new(10, 100.0).unwrap();
        let beta = (-0.01 as Real).exp();
        let cg = 1.0 - beta;
        let ctmp = 1.0 - beta.powi(10);
        assert_approx_eq!(coefficients.beta, beta);
        assert_approx_eq!(coefficients.gap, cg);
        assert_approx_eq!(coefficients.fall, cg / ctmp);
        assert_approx_eq!(coefficients.rise, -(cg / ctmp) * beta.powi(10));
        // rise + fall = cg, independent of the length
        assert_approx_eq!(coefficients.rise + coefficients.fall, coefficients.gap);
    }

    #[test]
    fn long_decay_tends_to_moving_average_difference() {
        let coefficients = FilterCoefficients::new(10, 1e9).unwrap();
        assert_approx_eq!(coefficients.fall, 0.1, 1e-6);
        assert_approx_eq!(coefficients.rise, -0.1, 1e-6);
        assert_approx_eq!(coefficients.gap, 0.0, 1e-6);
    }

    #[test]
    fn apply_weights_sums() {
        let coefficients = FilterCoefficients {
            beta: 0.5,
            rise: -1.0,
            gap: 0.5,
            fall: 2.0,
        };
        let sums = TrapezoidSums {
            rise: 3.0,
            gap: 4.0,
            fall: 5.0,
        };
        assert_approx_eq!(coefficients.apply(&sums), -3.0 + 2.0 + 10.0);
    }
}
