use std::path::Path;

use serde::Deserialize;

use crate::geometry::PixelRect;
use crate::{PlaygroundError, Result};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegressionConfig {
    pub learning_rate: f64,
    /// Steps taken by one bulk "train" action.
    pub train_steps: usize,
}

impl Default for RegressionConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            train_steps: 100,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    pub learning_rate: f64,
    pub epochs: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            epochs: 100,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    pub hidden_neuron_count: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            hidden_neuron_count: 4,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            padding: 50.0,
        }
    }
}

impl CanvasConfig {
    pub fn rect(&self) -> Result<PixelRect> {
        PixelRect::new(self.width, self.height, self.padding)
    }
}

/// Every option the playground recognises. Missing keys fall back to their
/// defaults, so `{}` is a valid configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaygroundConfig {
    pub regression: RegressionConfig,
    pub classifier: ClassifierConfig,
    pub network: NetworkConfig,
    pub canvas: CanvasConfig,
    /// Seeds every random initialisation when set.
    pub seed: Option<u64>,
}

impl PlaygroundConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, value: f64| {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(PlaygroundError::InvalidConfig(format!("{name} must be > 0, got {value}")))
            }
        };
        let nonzero = |name: &str, value: usize| {
            if value > 0 {
                Ok(())
            } else {
                Err(PlaygroundError::InvalidConfig(format!("{name} must be > 0")))
            }
        };

        positive("regression.learning_rate", self.regression.learning_rate)?;
        nonzero("regression.train_steps", self.regression.train_steps)?;
        positive("classifier.learning_rate", self.classifier.learning_rate)?;
        nonzero("classifier.epochs", self.classifier.epochs)?;
        nonzero("network.hidden_neuron_count", self.network.hidden_neuron_count)?;
        self.canvas
            .rect()
            .map_err(|e| PlaygroundError::InvalidConfig(format!("canvas: {e}")))?;
        Ok(())
    }
}
