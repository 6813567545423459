//! One running copy of the playground.
//!
//! The session owns a widget per visual module and is the only place where
//! screen coordinates meet the trainers: a click is converted to data space
//! and offered to `add_point`, which applies the admission gate.

use log::{debug, info};

use crate::apps::{PriceEstimator, SentimentAnalyzer};
use crate::config::PlaygroundConfig;
use crate::curriculum::Progress;
use crate::dataset::Dataset;
use crate::geometry::{Domain, PixelRect, Point2D, SpaceMapper};
use crate::linear_model::{
    Label, PerceptronTrainer, RegressionTrainer, StepReport, TrainingReport,
};
use crate::network::{ForwardPassAnimation, NetworkTopology};
use crate::render::{self, Scene};
use crate::Result;

#[derive(Clone, Debug)]
pub struct Session {
    config: PlaygroundConfig,
    rect: PixelRect,
    pub regression: RegressionTrainer,
    pub classifier: PerceptronTrainer,
    pub network: NetworkTopology,
    pub data: Dataset,
    pub sentiment: SentimentAnalyzer,
    pub pricing: PriceEstimator,
    pub progress: Progress,
}

impl Session {
    pub fn new(config: PlaygroundConfig) -> Result<Self> {
        config.validate()?;
        let rect = config.canvas.rect()?;

        let mut regression = RegressionTrainer::new(config.regression.learning_rate)?;
        let mut classifier =
            PerceptronTrainer::with_params(config.classifier.learning_rate, config.classifier.epochs)?;
        let network = match config.seed {
            Some(seed) => {
                regression = regression.random_state(seed);
                classifier = classifier.random_state(seed.wrapping_add(1));
                NetworkTopology::with_seed(config.network.hidden_neuron_count, seed.wrapping_add(2))?
            }
            None => NetworkTopology::new(config.network.hidden_neuron_count)?,
        };
        regression.seed_sample_data();

        info!(
            "session ready: {}x{} canvas, {} hidden neurons",
            rect.width, rect.height, config.network.hidden_neuron_count
        );

        Ok(Self {
            config,
            rect,
            regression,
            classifier,
            network,
            data: Dataset::house_prices(),
            sentiment: SentimentAnalyzer::new(),
            pricing: PriceEstimator::new(),
            progress: Progress::new(),
        })
    }

    pub fn config(&self) -> &PlaygroundConfig {
        &self.config
    }

    pub fn regression_mapper(&self) -> SpaceMapper {
        SpaceMapper::new(*self.regression.domain(), self.rect)
    }

    pub fn classifier_mapper(&self) -> SpaceMapper {
        SpaceMapper::new(*self.classifier.domain(), self.rect)
    }

    pub fn data_mapper(&self) -> Result<SpaceMapper> {
        Ok(SpaceMapper::new(self.data.scatter_domain()?, self.rect))
    }

    /// Offers a click on the regression canvas to the training set.
    pub fn click_regression(&mut self, px: f64, py: f64) -> bool {
        let p = self.regression_mapper().to_data(px, py);
        self.regression.add_point(p)
    }

    /// Offers a click on the classifier canvas to the active class.
    pub fn click_classifier(&mut self, px: f64, py: f64) -> bool {
        let p = self.classifier_mapper().to_data(px, py);
        self.classifier.add_point_to_active(p)
    }

    /// The bulk "train" action.
    pub fn train_regression(&mut self) -> Vec<StepReport> {
        let steps = self.config.regression.train_steps;
        debug!("running {steps} regression steps");
        self.regression.run(steps)
    }

    pub fn train_classifier(&mut self) -> Result<TrainingReport> {
        self.classifier.train()
    }

    pub fn toggle_class(&mut self) -> Label {
        self.classifier.toggle_label()
    }

    pub fn forward_pass(&self) -> ForwardPassAnimation {
        ForwardPassAnimation::new(&self.network)
    }

    pub fn regression_scene(&self) -> Scene {
        render::regression_scene(&self.regression, &self.regression_mapper())
    }

    pub fn classifier_scene(&self) -> Scene {
        render::classifier_scene(&self.classifier, &self.classifier_mapper())
    }

    pub fn data_scene(&self) -> Result<Scene> {
        Ok(render::data_scene(&self.data, &self.data_mapper()?))
    }

    /// Every frame of the forward-pass animation, in order.
    pub fn network_frames(&self) -> Vec<Scene> {
        self.forward_pass()
            .map(|frame| {
                render::network_scene(&self.network, self.rect.width, self.rect.height, Some(frame))
            })
            .collect()
    }

    pub fn network_scene(&self) -> Scene {
        render::network_scene(&self.network, self.rect.width, self.rect.height, None)
    }

    /// Mapper for any other domain drawn on this session's canvas.
    pub fn mapper_for(&self, domain: Domain) -> SpaceMapper {
        SpaceMapper::new(domain, self.rect)
    }

    pub fn point_at(&self, domain: Domain, px: f64, py: f64) -> Option<Point2D> {
        self.mapper_for(domain).admit_click(px, py)
    }
}
