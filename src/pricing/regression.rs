use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::common::errors::{PricingError, Result};

/// Intercept forced by the negative-intercept guard
const GUARD_INTERCEPT: f64 = 5.0;

/// Goodness-of-fit numbers computed over the training set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelDiagnostics {
    pub r_squared: f64,
    pub mean_absolute_error: f64,
    pub samples: usize,
}

/// Univariate ordinary-least-squares price model
///
/// Immutable once fitted; there is no retrain operation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    slope: f64,
    intercept: f64,
    diagnostics: ModelDiagnostics,
}

impl LinearRegression {
    /// Fit `price = intercept + slope * feature`
    ///
    /// # Errors
    /// Empty, mismatched or non-finite input. These indicate a broken
    /// training set and are fatal at start-up.
    pub fn fit(features: &[f64], prices: &[f64]) -> Result<Self> {
        if features.len() != prices.len() {
            return Err(PricingError::MismatchedTrainingData {
                features: features.len(),
                prices: prices.len(),
            });
        }
        if features.is_empty() {
            return Err(PricingError::EmptyTrainingSet);
        }
        if let Some(i) = features
            .iter()
            .chain(prices)
            .position(|v| !v.is_finite())
        {
            return Err(PricingError::Configuration(format!(
                "non-finite training value at position {i}"
            )));
        }

        let n = features.len() as f64;
        let mean_x = features.iter().sum::<f64>() / n;
        let mean_y = prices.iter().sum::<f64>() / n;

        let (sxy, sxx) = features
            .iter()
            .zip(prices)
            .fold((0.0, 0.0), |(sxy, sxx), (x, y)| {
                (sxy + (x - mean_x) * (y - mean_y), sxx + (x - mean_x).powi(2))
            });

        let (mut slope, mut intercept) = if sxx > f64::EPSILON {
            let slope = sxy / sxx;
            (slope, mean_y - slope * mean_x)
        } else {
            warn!("Training features have no variance, fitting a flat line at {:.2}", mean_y);
            (0.0, mean_y)
        };

        // A negative intercept with a shallow slope predicts negative prices
        // over much of the training range
        if intercept < 0.0 && mean_x > 0.0 && slope < intercept.abs() / mean_x {
            warn!(
                "Fitted intercept {:.3} with slope {:.3} is unstable, pinning intercept to {}",
                intercept, slope, GUARD_INTERCEPT
            );
            intercept = GUARD_INTERCEPT;
            slope = (mean_y - GUARD_INTERCEPT) / mean_x;
        }

        let mut model = Self {
            slope,
            intercept,
            diagnostics: ModelDiagnostics {
                r_squared: 0.0,
                mean_absolute_error: 0.0,
                samples: features.len(),
            },
        };

        let (ssr, sst, abs_err) = features.iter().zip(prices).fold(
            (0.0, 0.0, 0.0),
            |(ssr, sst, abs_err), (x, y)| {
                let residual = y - model.predict(*x);
                (
                    ssr + residual.powi(2),
                    sst + (y - mean_y).powi(2),
                    abs_err + residual.abs(),
                )
            },
        );

        model.diagnostics.r_squared = if sst > f64::EPSILON {
            1.0 - ssr / sst
        } else if ssr <= f64::EPSILON {
            1.0
        } else {
            0.0
        };
        model.diagnostics.mean_absolute_error = abs_err / n;

        debug!(
            slope = model.slope,
            intercept = model.intercept,
            r_squared = model.diagnostics.r_squared,
            mae = model.diagnostics.mean_absolute_error,
            "Fitted price regression"
        );

        Ok(model)
    }

    /// Predicted price for a feature value, never negative
    pub fn predict(&self, feature: f64) -> f64 {
        (self.intercept + self.slope * feature).max(0.0)
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn diagnostics(&self) -> &ModelDiagnostics {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_two_points_define_the_line() {
        // Through (1, 30) and (4, 75): slope 15, intercept 15
        let model = LinearRegression::fit(&[1.0, 4.0], &[30.0, 75.0]).unwrap();
        assert!(close(model.slope(), 15.0));
        assert!(close(model.intercept(), 15.0));
        assert!(close(model.diagnostics().r_squared, 1.0));
        assert!(close(model.diagnostics().mean_absolute_error, 0.0));
    }

    #[test]
    fn test_perfect_linear_data() {
        let xs: Vec<f64> = (0..10).map(|i| i as f64 * 1.3).collect();
        let ys: Vec<f64> = xs.iter().map(|x| 20.0 + 12.5 * x).collect();
        let model = LinearRegression::fit(&xs, &ys).unwrap();
        assert!(close(model.slope(), 12.5));
        assert!(close(model.intercept(), 20.0));
        assert!(close(model.diagnostics().r_squared, 1.0));
        assert_eq!(model.diagnostics().samples, 10);
    }

    #[test]
    fn test_noisy_data_has_partial_fit() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [12.0, 19.0, 33.0, 38.0, 52.0];
        let model = LinearRegression::fit(&xs, &ys).unwrap();
        let r2 = model.diagnostics().r_squared;
        assert!(r2 > 0.9 && r2 < 1.0);
        assert!(model.diagnostics().mean_absolute_error > 0.0);
    }

    #[test]
    fn test_predict_never_negative() {
        let model = LinearRegression::fit(&[1.0, 2.0], &[10.0, 50.0]).unwrap();
        for x in [-1e6, -100.0, -3.0, 0.0, 0.5, 1e6] {
            assert!(model.predict(x) >= 0.0, "negative prediction at {x}");
        }
        let falling = LinearRegression::fit(&[1.0, 2.0], &[50.0, 10.0]).unwrap();
        assert_eq!(falling.predict(1e6), 0.0);
    }

    #[test]
    fn test_guard_leaves_steep_fits_alone() {
        // slope 0.45, intercept -5, mean_x 20: 0.45 >= 5/20
        let model = LinearRegression::fit(&[10.0, 20.0, 30.0], &[1.0, 1.0, 10.0]).unwrap();
        assert!(close(model.slope(), 0.45));
        assert!(close(model.intercept(), -5.0));
    }

    #[test]
    fn test_guard_pins_intercept() {
        // slope 0.3, intercept -10, mean_x 30: 0.3 < 10/30
        let model = LinearRegression::fit(&[20.0, 40.0], &[-4.0, 2.0]).unwrap();
        assert!(close(model.intercept(), GUARD_INTERCEPT));
        // Line passes through (mean_x, mean_y) = (30, -1)
        assert!(close(model.slope(), (-1.0 - GUARD_INTERCEPT) / 30.0));
    }

    #[test]
    fn test_flat_features_fit_the_mean() {
        let model = LinearRegression::fit(&[3.0, 3.0, 3.0], &[40.0, 50.0, 60.0]).unwrap();
        assert_eq!(model.slope(), 0.0);
        assert!(close(model.intercept(), 50.0));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(
            LinearRegression::fit(&[], &[]),
            Err(PricingError::EmptyTrainingSet)
        ));
    }

    #[test]
    fn test_mismatched_input_is_rejected() {
        assert!(matches!(
            LinearRegression::fit(&[1.0, 2.0], &[10.0]),
            Err(PricingError::MismatchedTrainingData { features: 2, prices: 1 })
        ));
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        assert!(LinearRegression::fit(&[1.0, f64::NAN], &[10.0, 20.0]).is_err());
        assert!(LinearRegression::fit(&[1.0, 2.0], &[10.0, f64::INFINITY]).is_err());
    }
}
