//! Computational core of an interactive machine-learning playground.
//!
//! Two small learners drive the interactive modules: a one-feature linear
//! regression trained step by step with gradient descent, and a two-feature
//! perceptron. Everything the browser draws is produced here as pixel-space
//! draw directives through a shared data-to-pixel mapping.

pub use ndarray::{Array1, Array2};

pub mod apps;
pub mod config;
pub mod curriculum;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod linear_model;
pub mod metrics;
pub mod network;
pub mod render;
pub mod session;

pub use config::PlaygroundConfig;
pub use error::PlaygroundError;
pub use geometry::{Domain, PixelRect, Point2D, SpaceMapper};
pub use linear_model::{Label, PerceptronTrainer, RegressionTrainer};
pub use session::Session;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
pub type Result<T> = std::result::Result<T, PlaygroundError>;
