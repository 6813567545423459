use ndarray::{Axis, array};

use crate::geometry::{Domain, Point2D};
use crate::{Matrix, PlaygroundError, Result, Vector};

/// Column order of [`Dataset::features`].
pub const FEATURE_NAMES: [&str; 3] = ["size", "bedrooms", "age"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HouseRecord {
    /// Square feet.
    pub size: f64,
    pub bedrooms: f64,
    /// Years.
    pub age: f64,
    /// Thousands of dollars.
    pub price: f64,
}

#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Vector,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataSummary {
    pub records: usize,
    pub avg_size: f64,
    pub avg_price: f64,
    pub price_range: f64,
}

impl Dataset {
    pub fn new(features: Matrix, labels: Vector) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(PlaygroundError::LengthMismatch {
                expected: features.nrows(),
                found: labels.len(),
            });
        }
        if features.ncols() != FEATURE_NAMES.len() {
            return Err(PlaygroundError::LengthMismatch {
                expected: FEATURE_NAMES.len(),
                found: features.ncols(),
            });
        }

        Ok(Self { features, labels })
    }

    /// The eight-house table shown in the data playground.
    pub fn house_prices() -> Self {
        let features = array![
            [800.0, 2.0, 15.0],
            [1200.0, 3.0, 10.0],
            [1500.0, 3.0, 8.0],
            [1800.0, 4.0, 5.0],
            [2000.0, 4.0, 3.0],
            [2400.0, 5.0, 2.0],
            [2800.0, 5.0, 1.0],
            [3200.0, 6.0, 0.0]
        ];
        let labels = array![180.0, 250.0, 320.0, 380.0, 420.0, 500.0, 580.0, 650.0];
        Self { features, labels }
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn sizes(&self) -> Vector {
        self.features.column(0).to_owned()
    }

    pub fn records(&self) -> Vec<HouseRecord> {
        self.features
            .axis_iter(Axis(0))
            .zip(self.labels.iter())
            .map(|(row, &price)| HouseRecord {
                size: row[0],
                bedrooms: row[1],
                age: row[2],
                price,
            })
            .collect()
    }

    pub fn summary(&self) -> Result<DataSummary> {
        let avg_size = self.sizes().mean().ok_or(PlaygroundError::EmptyInput("dataset"))?;
        let avg_price = self.labels.mean().ok_or(PlaygroundError::EmptyInput("dataset"))?;
        let max_price = self.labels.fold(f64::NEG_INFINITY, |acc, &p| acc.max(p));
        let min_price = self.labels.fold(f64::INFINITY, |acc, &p| acc.min(p));

        Ok(DataSummary {
            records: self.n_samples(),
            avg_size,
            avg_price,
            price_range: max_price - min_price,
        })
    }

    /// Plot range for the size/price scatter: from zero up to the largest
    /// value on each axis.
    pub fn scatter_domain(&self) -> Result<Domain> {
        let max_size = self.sizes().fold(f64::NEG_INFINITY, |acc, &s| acc.max(s));
        let max_price = self.labels.fold(f64::NEG_INFINITY, |acc, &p| acc.max(p));
        Domain::new(0.0, max_size, 0.0, max_price)
    }

    /// One `(size, price)` point per record.
    pub fn scatter_points(&self) -> Vec<Point2D> {
        self.sizes()
            .iter()
            .zip(self.labels.iter())
            .map(|(&size, &price)| Point2D::new(size, price))
            .collect()
    }
}
