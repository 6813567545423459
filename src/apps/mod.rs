//! Toy "real-world" predictors.
//!
//! - `SentimentAnalyzer`: keyword-counting sentiment score
//! - `PriceEstimator`: fixed linear house-price formula
//!
//! # Examples
//!
//! ```rust
//! use mlplayground::apps::{PriceEstimator, Sentiment, SentimentAnalyzer};
//!
//! let result = SentimentAnalyzer::new().analyze("What a wonderful day");
//! assert_eq!(result.sentiment, Sentiment::Positive);
//!
//! let price = PriceEstimator::new().predict(1500.0, 3.0);
//! assert!((price - 365.0).abs() < 1e-9);
//! ```

mod pricing;
mod sentiment;

pub use pricing::PriceEstimator;
pub use sentiment::{Sentiment, SentimentAnalyzer, SentimentResult};
