use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::validate_learning_rate;
use crate::geometry::{Domain, Point2D};
use crate::{Result, Vector};

/// Points the simulator starts with: roughly `y = 2x` with a little noise.
pub const SAMPLE_POINTS: [(f64, f64); 8] = [
    (1.0, 2.1),
    (2.0, 4.3),
    (3.0, 6.2),
    (4.0, 8.1),
    (5.0, 10.3),
    (6.0, 12.1),
    (7.0, 14.2),
    (8.0, 16.1),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegressionModel {
    pub weight: f64,
    pub bias: f64,
    pub epoch: usize,
}

impl RegressionModel {
    fn random(rng: &mut StdRng) -> Self {
        Self {
            weight: rng.gen_range(0.0..1.0),
            bias: rng.gen_range(0.0..1.0),
            epoch: 0,
        }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.weight * x + self.bias
    }
}

/// Outcome of one gradient step. `loss` is the mean squared error measured
/// before the update was applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepReport {
    pub weight: f64,
    pub bias: f64,
    pub epoch: usize,
    pub loss: f64,
}

/// Ordered, append-only regression samples.
#[derive(Clone, Debug, Default)]
pub struct TrainingSet {
    points: Vec<Point2D>,
}

impl TrainingSet {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    fn push(&mut self, p: Point2D) {
        self.points.push(p);
    }

    fn clear(&mut self) {
        self.points.clear();
    }

    /// Splits the samples into feature and target vectors.
    pub fn to_arrays(&self) -> (Vector, Vector) {
        let xs = self.points.iter().map(|p| p.x).collect::<Vector>();
        let ys = self.points.iter().map(|p| p.y).collect::<Vector>();
        (xs, ys)
    }
}

/// Single-feature linear regression fit by batch gradient descent on mean
/// squared error.
#[derive(Clone, Debug)]
pub struct RegressionTrainer {
    model: RegressionModel,
    points: TrainingSet,
    learning_rate: f64,
    domain: Domain,
    rng: StdRng,
}

impl RegressionTrainer {
    pub fn new(learning_rate: f64) -> Result<Self> {
        validate_learning_rate(learning_rate)?;

        let mut rng = StdRng::from_entropy();
        Ok(Self {
            model: RegressionModel::random(&mut rng),
            points: TrainingSet::default(),
            learning_rate,
            domain: Domain::regression(),
            rng,
        })
    }

    /// Reseeds the generator and redraws the initial parameters from it.
    pub fn random_state(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self.model = RegressionModel::random(&mut self.rng);
        self
    }

    pub fn model(&self) -> &RegressionModel {
        &self.model
    }

    pub fn training_set(&self) -> &TrainingSet {
        &self.points
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Takes effect on the next step.
    pub fn set_learning_rate(&mut self, learning_rate: f64) -> Result<()> {
        validate_learning_rate(learning_rate)?;
        self.learning_rate = learning_rate;
        Ok(())
    }

    /// Overwrites weight and bias without touching the epoch counter.
    pub fn set_parameters(&mut self, weight: f64, bias: f64) {
        self.model.weight = weight;
        self.model.bias = bias;
    }

    /// Stores `p` if it lies inside the plot domain.
    pub fn add_point(&mut self, p: Point2D) -> bool {
        if !self.domain.contains(p) {
            debug!("rejected regression point outside domain: ({}, {})", p.x, p.y);
            return false;
        }
        self.points.push(p);
        true
    }

    /// Loads [`SAMPLE_POINTS`] when the training set is empty.
    pub fn seed_sample_data(&mut self) {
        if self.points.is_empty() {
            for (x, y) in SAMPLE_POINTS {
                self.add_point(Point2D::new(x, y));
            }
        }
    }

    pub fn step(&mut self) -> StepReport {
        if self.points.is_empty() {
            return self.report(0.0);
        }

        let (xs, ys) = self.points.to_arrays();
        let n = xs.len() as f64;

        let errors = &xs * self.model.weight + self.model.bias - &ys;
        let loss = errors.mapv(|e| e * e).sum() / n;
        let grad_weight = (&errors * &xs).sum() / n;
        let grad_bias = errors.sum() / n;

        self.model.weight -= self.learning_rate * grad_weight;
        self.model.bias -= self.learning_rate * grad_bias;
        self.model.epoch += 1;

        debug!(
            "epoch {}: weight={:.3} bias={:.3} loss={:.3}",
            self.model.epoch, self.model.weight, self.model.bias, loss
        );

        self.report(loss)
    }

    /// Runs exactly `steps` gradient steps and returns every report in order.
    pub fn run(&mut self, steps: usize) -> Vec<StepReport> {
        (0..steps).map(|_| self.step()).collect()
    }

    pub fn reset(&mut self) {
        self.points.clear();
        self.model = RegressionModel::random(&mut self.rng);
    }

    /// Mean squared error of the current parameters, 0 on an empty set.
    pub fn current_loss(&self) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }

        let (xs, ys) = self.points.to_arrays();
        let predictions = xs.mapv(|x| self.model.predict(x));
        crate::metrics::mean_squared_error(&ys, &predictions).unwrap_or(0.0)
    }

    /// Endpoints of the fitted line across the domain's x range, if there is
    /// anything to fit.
    pub fn regression_line(&self) -> Option<(Point2D, Point2D)> {
        if self.points.is_empty() {
            return None;
        }

        let x1 = self.domain.x_min;
        let x2 = self.domain.x_max;
        Some((
            Point2D::new(x1, self.model.predict(x1)),
            Point2D::new(x2, self.model.predict(x2)),
        ))
    }

    fn report(&self, loss: f64) -> StepReport {
        StepReport {
            weight: self.model.weight,
            bias: self.model.bias,
            epoch: self.model.epoch,
            loss,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> RegressionTrainer {
        RegressionTrainer::new(0.01).unwrap().random_state(7)
    }

    #[test]
    fn test_initial_parameters_in_unit_interval() {
        for seed in 0..20 {
            let trainer = RegressionTrainer::new(0.01).unwrap().random_state(seed);
            let model = trainer.model();
            assert!((0.0..1.0).contains(&model.weight));
            assert!((0.0..1.0).contains(&model.bias));
            assert_eq!(model.epoch, 0);
        }
    }

    #[test]
    fn test_step_on_empty_set_is_noop() {
        let mut trainer = seeded();
        let before = *trainer.model();

        let report = trainer.step();
        assert_eq!(*trainer.model(), before);
        assert_eq!(report.epoch, 0);
        assert_eq!(report.loss, 0.0);
    }

    #[test]
    fn test_step_on_exact_line_is_stationary() {
        let mut trainer = seeded();
        for x in [0.5, 1.0, 2.5, 4.0, 7.0] {
            assert!(trainer.add_point(Point2D::new(x, 1.5 * x + 2.0)));
        }
        trainer.set_parameters(1.5, 2.0);

        let report = trainer.step();
        assert!((report.weight - 1.5).abs() < 1e-12);
        assert!((report.bias - 2.0).abs() < 1e-12);
        assert!(report.loss.abs() < 1e-20);
        assert_eq!(report.epoch, 1);
    }

    #[test]
    fn test_step_matches_hand_computed_gradient() {
        let mut trainer = seeded();
        trainer.add_point(Point2D::new(1.0, 3.0));
        trainer.add_point(Point2D::new(2.0, 5.0));
        trainer.set_parameters(0.0, 0.0);
        trainer.set_learning_rate(0.1).unwrap();

        // errors: -3, -5; loss = 17; dw = -6.5; db = -4
        let report = trainer.step();
        assert!((report.loss - 17.0).abs() < 1e-12);
        assert!((report.weight - 0.65).abs() < 1e-12);
        assert!((report.bias - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_run_lowers_loss_on_sample_data() {
        let mut trainer = seeded();
        trainer.seed_sample_data();
        let initial = trainer.current_loss();

        let reports = trainer.run(100);
        assert_eq!(reports.len(), 100);
        assert!(trainer.current_loss() < initial);
        assert!(reports[99].loss < reports[0].loss);
    }

    #[test]
    fn test_epoch_advances_once_per_step() {
        let mut trainer = seeded();
        trainer.seed_sample_data();
        trainer.run(5);
        let e0 = trainer.model().epoch;

        trainer.run(13);
        assert_eq!(trainer.model().epoch, e0 + 13);
        trainer.step();
        assert_eq!(trainer.model().epoch, e0 + 14);
    }

    #[test]
    fn test_reset_clears_points_and_epoch() {
        let mut trainer = seeded();
        trainer.seed_sample_data();
        trainer.run(10);

        trainer.reset();
        assert!(trainer.training_set().is_empty());
        assert_eq!(trainer.model().epoch, 0);
        assert_eq!(trainer.current_loss(), 0.0);
        assert!(trainer.regression_line().is_none());
    }

    #[test]
    fn test_add_point_rejects_out_of_domain() {
        let mut trainer = seeded();
        assert!(trainer.add_point(Point2D::new(10.0, 20.0)));
        assert!(!trainer.add_point(Point2D::new(10.5, 3.0)));
        assert!(!trainer.add_point(Point2D::new(3.0, -1.0)));
        assert!(!trainer.add_point(Point2D::new(3.0, 20.5)));
        assert_eq!(trainer.training_set().len(), 1);
    }

    #[test]
    fn test_current_loss_does_not_mutate() {
        let mut trainer = seeded();
        trainer.seed_sample_data();
        let before = *trainer.model();

        let first = trainer.current_loss();
        let second = trainer.current_loss();
        assert_eq!(first, second);
        assert_eq!(*trainer.model(), before);
    }

    #[test]
    fn test_seed_sample_data_only_when_empty() {
        let mut trainer = seeded();
        trainer.add_point(Point2D::new(1.0, 1.0));
        trainer.seed_sample_data();
        assert_eq!(trainer.training_set().len(), 1);

        trainer.reset();
        trainer.seed_sample_data();
        assert_eq!(trainer.training_set().len(), SAMPLE_POINTS.len());
    }

    #[test]
    fn test_invalid_learning_rate() {
        assert!(RegressionTrainer::new(0.0).is_err());
        assert!(RegressionTrainer::new(-0.1).is_err());

        let mut trainer = seeded();
        assert!(trainer.set_learning_rate(f64::NAN).is_err());
        assert_eq!(trainer.learning_rate(), 0.01);
    }

    #[test]
    fn test_regression_line_spans_domain() {
        let mut trainer = seeded();
        trainer.seed_sample_data();
        trainer.set_parameters(2.0, 1.0);

        let (a, b) = trainer.regression_line().unwrap();
        assert_eq!(a, Point2D::new(0.0, 1.0));
        assert_eq!(b, Point2D::new(10.0, 21.0));
    }
}
