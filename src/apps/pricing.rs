use ndarray::s;

use crate::dataset::Dataset;
use crate::{Result, Vector};

/// Fixed linear price model: `price = 0.15·size + 30·bedrooms + 50`, in
/// thousands of dollars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceEstimator {
    pub size_coef: f64,
    pub bedroom_coef: f64,
    pub intercept: f64,
}

impl PriceEstimator {
    pub fn new() -> Self {
        Self {
            size_coef: 0.15,
            bedroom_coef: 30.0,
            intercept: 50.0,
        }
    }

    pub fn predict(&self, size: f64, bedrooms: f64) -> f64 {
        self.size_coef * size + self.bedroom_coef * bedrooms + self.intercept
    }

    /// Predictions for every row of the dataset. Age is ignored.
    pub fn predict_dataset(&self, data: &Dataset) -> Vector {
        let coefficients = Vector::from(vec![self.size_coef, self.bedroom_coef]);
        data.features.slice(s![.., 0..2]).dot(&coefficients) + self.intercept
    }

    /// R² of the fixed model against the dataset's prices.
    pub fn score(&self, data: &Dataset) -> Result<f64> {
        let predictions = self.predict_dataset(data);
        crate::metrics::r2_score(&data.labels, &predictions)
    }
}

impl Default for PriceEstimator {
    fn default() -> Self {
        Self::new()
    }
}
