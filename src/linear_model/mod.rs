//! Linear learners behind the training simulator and the classifier
//! playground.
//!
//! This module provides:
//! - `RegressionTrainer`: one-feature linear regression fit step by step with
//!   batch gradient descent
//! - `PerceptronTrainer`: two-feature perceptron trained with the
//!   mistake-driven update rule
//!
//! # Examples
//!
//! ## Regression
//! ```rust
//! use mlplayground::{Point2D, RegressionTrainer};
//!
//! let mut trainer = RegressionTrainer::new(0.01).unwrap().random_state(1);
//! trainer.seed_sample_data();
//!
//! let before = trainer.current_loss();
//! let reports = trainer.run(100);
//! assert_eq!(reports.last().unwrap().epoch, 100);
//! assert!(trainer.current_loss() < before);
//! ```
//!
//! ## Perceptron
//! ```rust
//! use mlplayground::{Label, PerceptronTrainer, Point2D};
//!
//! let mut trainer = PerceptronTrainer::new();
//! trainer.add_point(Label::ClassA, Point2D::new(1.0, 1.0));
//! trainer.add_point(Label::ClassB, Point2D::new(9.0, 9.0));
//!
//! let report = trainer.train().unwrap();
//! println!("accuracy: {:.1}%", report.accuracy * 100.0);
//! ```

mod perceptron;
mod regression;

pub use perceptron::{
    BOUNDARY_EPSILON, ClassifierModel, Label, LabeledPointSets, PerceptronTrainer, TrainingReport,
};
pub use regression::{RegressionModel, RegressionTrainer, SAMPLE_POINTS, StepReport, TrainingSet};

use crate::{PlaygroundError, Result};

/// Learning rates must be finite and strictly positive.
pub(crate) fn validate_learning_rate(learning_rate: f64) -> Result<()> {
    if !(learning_rate > 0.0) || !learning_rate.is_finite() {
        return Err(PlaygroundError::InvalidConfig(format!(
            "learning rate must be > 0, got {learning_rate}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_epochs(epochs: usize) -> Result<()> {
    if epochs == 0 {
        return Err(PlaygroundError::InvalidConfig("epochs must be > 0".to_string()));
    }
    Ok(())
}
